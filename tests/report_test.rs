//! 注釈付き画像の保存テスト

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use freshtech::error::FreshTechError;
use freshtech::report::{save_annotated_image, save_annotated_image_or_skip};
use freshtech_common::AnnotatedImage;
use image::{DynamicImage, ImageFormat, RgbImage};
use std::io::Cursor;
use tempfile::tempdir;

fn png_base64(width: u32, height: u32) -> String {
    let img = DynamicImage::ImageRgb8(RgbImage::new(width, height));
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .expect("PNGエンコード失敗");
    STANDARD.encode(&buf)
}

#[test]
fn test_save_valid_image() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("out").join("annotated.jpg");
    let image = AnnotatedImage::from_base64(&png_base64(4, 3)).unwrap();

    let saved = save_annotated_image(&image, &path).expect("保存失敗");

    assert_eq!((saved.width, saved.height), (4, 3));
    assert_eq!(std::fs::read(&path).unwrap(), image.bytes());
}

#[test]
fn test_undecodable_bytes_are_not_written() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("annotated.jpg");
    let image = AnnotatedImage::from_base64("YWJj").unwrap();

    let result = save_annotated_image(&image, &path);

    assert!(matches!(result, Err(FreshTechError::ImageDecode(_))));
    assert!(!path.exists());
}

/// 抽出結果の表示後に画像だけ壊れていても処理は成功扱い
#[test]
fn test_undecodable_image_is_skipped_without_error() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("annotated.jpg");
    let image = AnnotatedImage::from_base64("YWJj").unwrap();

    let saved = save_annotated_image_or_skip(&image, Some(path.clone()), "product")
        .expect("デコード失敗はエラーにしない");

    assert!(saved.is_none());
    assert!(!path.exists());
}

/// 出力先を指定すればその場所に保存される
#[test]
fn test_save_or_skip_writes_valid_image() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("fresh.png");
    let image = AnnotatedImage::from_base64(&png_base64(2, 2)).unwrap();

    let saved = save_annotated_image_or_skip(&image, Some(path.clone()), "freshness")
        .unwrap()
        .expect("保存されるはず");

    assert_eq!(saved.path, path);
    assert!(path.exists());
}
