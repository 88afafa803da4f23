//! 解析結果の端末表示と画像保存

use crate::error::{FreshTechError, Result};
use freshtech_common::presenter::NO_FRUITS_MESSAGE;
use freshtech_common::{AnnotatedImage, FreshView, Presentation, ProductView};
use std::path::{Path, PathBuf};

const BAR_WIDTH: usize = 20;

/// 保存した注釈付き画像
#[derive(Debug, Clone)]
pub struct SavedImage {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

/// 出力先が未指定の場合のファイル名（例: `freshness-20261019-153000.png`）
///
/// 拡張子は画像の中身から判定し、判定できなければ `jpg`。
pub fn default_output_path(prefix: &str, bytes: &[u8]) -> PathBuf {
    let timestamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
    let extension = image::guess_format(bytes)
        .ok()
        .and_then(|format| format.extensions_str().first().copied())
        .unwrap_or("jpg");
    PathBuf::from(format!("{}-{}.{}", prefix, timestamp, extension))
}

/// 画像としてデコードできることを確認してから書き出す
pub fn save_annotated_image(image: &AnnotatedImage, output: &Path) -> Result<SavedImage> {
    let decoded = image::load_from_memory(image.bytes())
        .map_err(|e| FreshTechError::ImageDecode(e.to_string()))?;

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(output, image.bytes())?;

    Ok(SavedImage {
        path: output.to_path_buf(),
        width: decoded.width(),
        height: decoded.height(),
    })
}

/// 注釈付き画像を保存する。デコードできない画像は警告して保存しない
///
/// 解析結果自体は表示済みなので、画像だけの問題で処理全体を失敗にはしない。
/// 書き込みのIOエラーはそのまま返す。
pub fn save_annotated_image_or_skip(
    image: &AnnotatedImage,
    output: Option<PathBuf>,
    prefix: &str,
) -> Result<Option<SavedImage>> {
    let path = output.unwrap_or_else(|| default_output_path(prefix, image.bytes()));
    match save_annotated_image(image, &path) {
        Ok(saved) => Ok(Some(saved)),
        Err(FreshTechError::ImageDecode(reason)) => {
            log::warn!("注釈付き画像をデコードできないため保存しません: {}", reason);
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// 商品情報を `label: value` 行で表示
pub fn render_product(presentation: &Presentation<ProductView>) -> String {
    match presentation {
        Presentation::Empty => String::new(),
        Presentation::Error(message) => format!("Error: {}", message),
        Presentation::Ready(view) => {
            let mut out = String::from("Item Information\n");
            for item in &view.items {
                out.push_str(&format!("  {}\n", item));
            }
            out
        }
    }
}

/// 検出された青果をカード風に表示
pub fn render_fresh(presentation: &Presentation<FreshView>) -> String {
    match presentation {
        Presentation::Empty => NO_FRUITS_MESSAGE.to_string(),
        Presentation::Error(message) => format!("Error: {}", message),
        Presentation::Ready(view) if view.cards.is_empty() => NO_FRUITS_MESSAGE.to_string(),
        Presentation::Ready(view) => {
            let mut out = String::from("Detected Fruits\n");
            for card in &view.cards {
                out.push_str(&format!("\n  {}\n", card.name));
                out.push_str(&format!(
                    "    Freshness  {} {}\n",
                    card.text_bar(BAR_WIDTH),
                    card.freshness_label
                ));
                out.push_str(&format!("    Condition  {}\n", card.condition));
                out.push_str(&format!("    Shelf Life {}\n", card.shelf_life));
            }
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use freshtech_common::{FruitCard, ItemLine};

    #[test]
    fn test_render_product_lines_in_order() {
        let view = ProductView {
            image_src: String::new(),
            items: vec![
                ItemLine { label: "brand".into(), value: "Acme".into() },
                ItemLine { label: "size".into(), value: "1L".into() },
            ],
        };
        let text = render_product(&Presentation::Ready(view));
        assert_eq!(text, "Item Information\n  brand: Acme\n  size: 1L\n");
    }

    #[test]
    fn test_render_error_only() {
        let text = render_product(&Presentation::Error("boom".into()));
        assert_eq!(text, "Error: boom");
    }

    #[test]
    fn test_render_fresh_empty() {
        let view = FreshView { image_src: String::new(), cards: vec![] };
        assert_eq!(render_fresh(&Presentation::Ready(view)), NO_FRUITS_MESSAGE);
    }

    #[test]
    fn test_render_fresh_card() {
        let view = FreshView {
            image_src: String::new(),
            cards: vec![FruitCard {
                name: "apple".into(),
                percent: 50.0,
                freshness_label: "50% Fresh".into(),
                condition: "Good".into(),
                shelf_life: "3 days".into(),
            }],
        };
        let text = render_fresh(&Presentation::Ready(view));
        assert!(text.contains("apple"));
        assert!(text.contains("[##########----------] 50% Fresh"));
        assert!(text.contains("Shelf Life 3 days"));
    }

    #[test]
    fn test_default_output_path_unknown_bytes() {
        let path = default_output_path("product", b"abc");
        let name = path.to_string_lossy();
        assert!(name.starts_with("product-"));
        assert!(name.ends_with(".jpg"));
    }

    #[test]
    fn test_default_output_path_follows_format() {
        let png_header = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
        let path = default_output_path("freshness", &png_header);
        assert!(path.to_string_lossy().ends_with(".png"));
    }
}
