//! 結果表示用のビューモデル
//!
//! 結果とエラーを同時に表示しないことをここで保証する（エラー優先）。

use crate::extraction::SubmissionResult;
use crate::freshness::FreshAnalysis;
use crate::types::DetectedFruit;

/// 表示状態
#[derive(Debug, Clone, PartialEq)]
pub enum Presentation<T> {
    /// まだ何もない
    Empty,
    Error(String),
    Ready(T),
}

impl<T> Presentation<T> {
    /// エラーがあれば古い結果は表示しない
    pub fn from_state(result: Option<T>, error: Option<&str>) -> Self {
        match (error, result) {
            (Some(message), _) => Presentation::Error(message.to_string()),
            (None, Some(value)) => Presentation::Ready(value),
            (None, None) => Presentation::Empty,
        }
    }
}

/// 商品情報の1行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemLine {
    pub label: String,
    pub value: String,
}

impl std::fmt::Display for ItemLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.label, self.value)
    }
}

/// 商品情報抽出の表示内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductView {
    pub image_src: String,
    /// レコード自身のキー順
    pub items: Vec<ItemLine>,
}

impl From<&SubmissionResult> for ProductView {
    fn from(result: &SubmissionResult) -> Self {
        Self {
            image_src: result.image.data_url(),
            items: result
                .item_information
                .entries()
                .iter()
                .map(|(label, value)| ItemLine {
                    label: label.clone(),
                    value: value.clone(),
                })
                .collect(),
        }
    }
}

/// 青果1件のカード
#[derive(Debug, Clone, PartialEq)]
pub struct FruitCard {
    pub name: String,
    /// プログレスバー幅（0-100）
    pub percent: f64,
    pub freshness_label: String,
    pub condition: String,
    pub shelf_life: String,
}

impl From<&DetectedFruit> for FruitCard {
    fn from(fruit: &DetectedFruit) -> Self {
        Self {
            name: fruit.name.clone(),
            percent: fruit.freshness_percent(),
            freshness_label: fruit.freshness_label(),
            condition: fruit.freshness.clone(),
            shelf_life: fruit.shelf_life.clone(),
        }
    }
}

impl FruitCard {
    /// 端末表示用のバー（例: `[########--]`）
    pub fn text_bar(&self, width: usize) -> String {
        let filled = ((self.percent / 100.0) * width as f64).round() as usize;
        let filled = filled.min(width);
        format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
    }
}

/// 検出がないときの案内文
pub const NO_FRUITS_MESSAGE: &str =
    "No fruits detected yet. Upload and analyze an image to see results.";

/// 鮮度解析の表示内容
#[derive(Debug, Clone, PartialEq)]
pub struct FreshView {
    pub image_src: String,
    pub cards: Vec<FruitCard>,
}

impl From<&FreshAnalysis> for FreshView {
    fn from(analysis: &FreshAnalysis) -> Self {
        Self {
            image_src: analysis.image.data_url(),
            cards: analysis.fruits.iter().map(FruitCard::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AnnotatedImage, ItemInformation};

    fn submission() -> SubmissionResult {
        SubmissionResult {
            image: AnnotatedImage::from_base64("YWJj").unwrap(),
            item_information: ItemInformation::parse(r#"{"brand":"Acme","size":"1L"}"#)
                .unwrap(),
        }
    }

    #[test]
    fn test_error_wins_over_result() {
        let p = Presentation::from_state(Some(1), Some("boom"));
        assert_eq!(p, Presentation::Error("boom".to_string()));
    }

    #[test]
    fn test_empty_and_ready() {
        assert_eq!(Presentation::<i32>::from_state(None, None), Presentation::Empty);
        assert_eq!(Presentation::from_state(Some(7), None), Presentation::Ready(7));
    }

    #[test]
    fn test_product_view() {
        let view = ProductView::from(&submission());
        assert_eq!(view.image_src, "data:image/jpeg;base64,YWJj");
        let lines: Vec<String> = view.items.iter().map(|l| l.to_string()).collect();
        assert_eq!(lines, vec!["brand: Acme", "size: 1L"]);
    }

    #[test]
    fn test_fruit_card() {
        let fruit = DetectedFruit {
            name: "pear".into(),
            freshness_index: 80.0,
            freshness: "Fresh".into(),
            shelf_life: "4 days".into(),
        };
        let card = FruitCard::from(&fruit);
        assert_eq!(card.freshness_label, "80% Fresh");
        assert_eq!(card.text_bar(10), "[########--]");
    }

    #[test]
    fn test_text_bar_bounds() {
        let mut card = FruitCard::from(&DetectedFruit::default());
        assert_eq!(card.text_bar(4), "[----]");
        card.percent = 100.0;
        assert_eq!(card.text_bar(4), "[####]");
    }
}
