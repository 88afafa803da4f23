//! 画像スロット
//!
//! 商品情報抽出で使う front / back / side の3つの入力枠と、その選択状態を保持する。

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// 画像スロットのラベル
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotLabel {
    Front,
    Back,
    Side,
}

impl SlotLabel {
    /// 表示・送信順
    pub const ALL: [SlotLabel; 3] = [SlotLabel::Front, SlotLabel::Back, SlotLabel::Side];

    pub fn as_str(&self) -> &'static str {
        match self {
            SlotLabel::Front => "front",
            SlotLabel::Back => "back",
            SlotLabel::Side => "side",
        }
    }

    /// multipartのフィールド名（`{label}_image`）
    pub fn field_name(&self) -> String {
        format!("{}_image", self.as_str())
    }

    /// 画面表示用の見出し
    pub fn title(&self) -> &'static str {
        match self {
            SlotLabel::Front => "Front Image",
            SlotLabel::Back => "Back Image",
            SlotLabel::Side => "Side Image",
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(self, SlotLabel::Front)
    }
}

impl std::fmt::Display for SlotLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 選択された画像ファイル
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// プレビュー表示用のData URL
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, STANDARD.encode(&self.bytes))
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// 拡張子からMIMEタイプを推定（不明な場合はNone）
pub fn mime_type_for_extension(ext: &str) -> Option<&'static str> {
    match ext.to_lowercase().as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "bmp" => Some("image/bmp"),
        _ => None,
    }
}

/// 3スロット分の選択状態
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadSlots {
    front: Option<ImageFile>,
    back: Option<ImageFile>,
    side: Option<ImageFile>,
}

impl UploadSlots {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot_mut(&mut self, label: SlotLabel) -> &mut Option<ImageFile> {
        match label {
            SlotLabel::Front => &mut self.front,
            SlotLabel::Back => &mut self.back,
            SlotLabel::Side => &mut self.side,
        }
    }

    pub fn get(&self, label: SlotLabel) -> Option<&ImageFile> {
        match label {
            SlotLabel::Front => self.front.as_ref(),
            SlotLabel::Back => self.back.as_ref(),
            SlotLabel::Side => self.side.as_ref(),
        }
    }

    /// 同じラベルへの再設定は上書き
    pub fn set(&mut self, label: SlotLabel, file: ImageFile) {
        *self.slot_mut(label) = Some(file);
    }

    pub fn clear(&mut self, label: SlotLabel) {
        *self.slot_mut(label) = None;
    }

    pub fn clear_all(&mut self) {
        *self = Self::default();
    }

    pub fn is_set(&self, label: SlotLabel) -> bool {
        self.get(label).is_some()
    }

    pub fn is_empty(&self) -> bool {
        SlotLabel::ALL.iter().all(|label| !self.is_set(*label))
    }

    /// 選択済みスロットを front, back, side の順に返す
    pub fn filled(&self) -> impl Iterator<Item = (SlotLabel, &ImageFile)> {
        SlotLabel::ALL
            .into_iter()
            .filter_map(move |label| self.get(label).map(|file| (label, file)))
    }
}
