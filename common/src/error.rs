//! エラー型定義

use thiserror::Error;

/// 正面画像が未選択のときのメッセージ
pub const FRONT_IMAGE_REQUIRED: &str = "Front image is required";

/// 鮮度解析の入力画像が未選択のときのメッセージ
pub const INPUT_IMAGE_REQUIRED: &str = "Select an image to analyze";

/// 商品情報抽出が失敗したときの利用者向けメッセージ
pub const EXTRACTION_FAILED: &str = "An error occurred while processing the images.";

/// 鮮度解析が失敗したときの利用者向けメッセージ
pub const ANALYSIS_FAILED: &str = "Failed to analyze the image. Please try again.";

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// 入力不足（通信前に検出）
    #[error("{0}")]
    Validation(String),

    /// 通信・サーバー側の失敗（原因は区別しない）
    #[error("{0}")]
    Network(String),

    /// バックエンド呼び出しの失敗原因（ログ用）
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl Error {
    /// 利用者が入力を選び直せば回復するエラーか
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_displays_message_only() {
        let error = Error::Validation(FRONT_IMAGE_REQUIRED.to_string());
        assert_eq!(format!("{}", error), "Front image is required");
        assert!(error.is_validation());
    }

    #[test]
    fn test_network_displays_message_only() {
        let error = Error::Network(EXTRACTION_FAILED.to_string());
        assert_eq!(
            format!("{}", error),
            "An error occurred while processing the images."
        );
        assert!(!error.is_validation());
    }

    #[test]
    fn test_error_display_transport() {
        let error = Error::Transport("HTTP 500".to_string());
        assert_eq!(format!("{}", error), "Transport error: HTTP 500");
    }

    #[test]
    fn test_error_display_config() {
        let error = Error::Config("バックエンドURLが空です".to_string());
        assert_eq!(format!("{}", error), "Config error: バックエンドURLが空です");
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
        assert!(format!("{}", error).contains("JSON error"));
    }

    #[test]
    fn test_error_debug() {
        let error = Error::Parse("テスト".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("Parse"));
        assert!(debug.contains("テスト"));
    }
}
