//! multipart送信データ
//!
//! ブラウザ（FormData）とCLI（reqwest::multipart）の両方がこの構造から
//! 実際のリクエストボディを組み立てる。

use crate::slots::{ImageFile, UploadSlots};

/// 鮮度解析で使うフィールド名
pub const FRESH_IMAGE_FIELD: &str = "image";

/// multipartの1パート
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayloadPart {
    pub field: String,
    pub file: ImageFile,
}

/// multipartボディ（パートの順序を保持）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultipartPayload {
    parts: Vec<PayloadPart>,
}

impl MultipartPayload {
    pub fn new() -> Self {
        Self::default()
    }

    /// 選択済みスロットだけを `{label}_image` で詰める
    pub fn from_slots(slots: &UploadSlots) -> Self {
        let mut payload = Self::new();
        for (label, file) in slots.filled() {
            payload.push(label.field_name(), file.clone());
        }
        payload
    }

    /// 鮮度解析用（`image` フィールド1つ）
    pub fn single_image(file: ImageFile) -> Self {
        let mut payload = Self::new();
        payload.push(FRESH_IMAGE_FIELD, file);
        payload
    }

    pub fn push(&mut self, field: impl Into<String>, file: ImageFile) {
        self.parts.push(PayloadPart {
            field: field.into(),
            file,
        });
    }

    pub fn parts(&self) -> &[PayloadPart] {
        &self.parts
    }

    pub fn field_names(&self) -> Vec<&str> {
        self.parts.iter().map(|p| p.field.as_str()).collect()
    }

    pub fn get(&self, field: &str) -> Option<&ImageFile> {
        self.parts.iter().find(|p| p.field == field).map(|p| &p.file)
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// 全パートの合計バイト数
    pub fn total_bytes(&self) -> usize {
        self.parts.iter().map(|p| p.file.len()).sum()
    }
}
