//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use freshtech::error::FreshTechError;
use freshtech::loader;
use std::path::Path;
use tempfile::tempdir;

/// 存在しない画像を読み込んだ場合
#[test]
fn test_load_nonexistent_image() {
    let result = loader::load_image(Path::new("/nonexistent/path/12345.jpg"));
    assert!(matches!(result, Err(FreshTechError::FileNotFound(_))));
}

/// スロットの1つが存在しない場合は全体が失敗する
#[test]
fn test_load_slots_with_missing_back() {
    let dir = tempdir().expect("Failed to create temp dir");
    let front = dir.path().join("front.jpg");
    std::fs::write(&front, [0xFF, 0xD8]).unwrap();

    let result = loader::load_slots(
        Some(front.as_path()),
        Some(Path::new("/nonexistent/back.jpg")),
        None,
    );
    assert!(matches!(result, Err(FreshTechError::FileNotFound(_))));
}

/// 正面画像なしでもスロット読み込み自体は成功する（検証は送信時）
#[test]
fn test_load_slots_without_front() {
    let dir = tempdir().expect("Failed to create temp dir");
    let side = dir.path().join("side.png");
    std::fs::write(&side, [0x89, 0x50]).unwrap();

    let slots = loader::load_slots(None, None, Some(side.as_path())).unwrap();
    assert_eq!(slots.filled().count(), 1);
}

/// FreshTechErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        FreshTechError::Config("テスト設定エラー".to_string()),
        FreshTechError::FileNotFound("test.jpg".to_string()),
        FreshTechError::UnsupportedImage("notes.txt".to_string()),
        FreshTechError::ImageDecode("bad header".to_string()),
        FreshTechError::HttpClient("tls".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: FreshTechError = io_err.into();

    assert!(matches!(err, FreshTechError::Io(_)));
    assert!(format!("{}", err).contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: FreshTechError = json_err.into();

    assert!(matches!(err, FreshTechError::JsonParse(_)));
}

/// 共通エラーは透過的に表示される（利用者向けメッセージがそのまま出る）
#[test]
fn test_common_error_is_transparent() {
    let common_err = freshtech_common::Error::Validation("Front image is required".to_string());
    let err: FreshTechError = common_err.into();

    assert!(matches!(err, FreshTechError::Common(_)));
    assert_eq!(format!("{}", err), "Front image is required");
}

/// 入力の選び直しで回復するエラーは終了コード2
#[test]
fn test_exit_codes() {
    use freshtech_common::error::{EXTRACTION_FAILED, FRONT_IMAGE_REQUIRED};

    let validation: FreshTechError =
        freshtech_common::Error::Validation(FRONT_IMAGE_REQUIRED.to_string()).into();
    assert_eq!(validation.exit_code(), 2);

    let missing = FreshTechError::FileNotFound("front.jpg".to_string());
    assert_eq!(missing.exit_code(), 2);

    let network: FreshTechError =
        freshtech_common::Error::Network(EXTRACTION_FAILED.to_string()).into();
    assert_eq!(network.exit_code(), 1);
}
