//! 入力画像の読み込み

use crate::error::{FreshTechError, Result};
use freshtech_common::{mime_type_for_extension, ImageFile, SlotLabel, UploadSlots};
use std::path::Path;

/// 画像ファイルを読み込み、拡張子からMIMEタイプを決める
pub fn load_image(path: &Path) -> Result<ImageFile> {
    if !path.is_file() {
        return Err(FreshTechError::FileNotFound(path.display().to_string()));
    }

    let mime_type = path
        .extension()
        .and_then(|ext| mime_type_for_extension(&ext.to_string_lossy()))
        .ok_or_else(|| FreshTechError::UnsupportedImage(path.display().to_string()))?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    let bytes = std::fs::read(path)?;
    log::debug!("画像読み込み: {} ({}, {} bytes)", file_name, mime_type, bytes.len());

    Ok(ImageFile::new(file_name, mime_type, bytes))
}

/// 指定されたパスをスロットに詰める（未指定のスロットは空のまま）
pub fn load_slots(
    front: Option<&Path>,
    back: Option<&Path>,
    side: Option<&Path>,
) -> Result<UploadSlots> {
    let mut slots = UploadSlots::new();
    for (label, path) in [
        (SlotLabel::Front, front),
        (SlotLabel::Back, back),
        (SlotLabel::Side, side),
    ] {
        if let Some(path) = path {
            slots.set(label, load_image(path)?);
        }
    }
    Ok(slots)
}
