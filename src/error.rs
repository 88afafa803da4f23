use thiserror::Error;

#[derive(Error, Debug)]
pub enum FreshTechError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("対応していない画像形式です: {0}（jpg/jpeg/png/gif/webp/bmp）")]
    UnsupportedImage(String),

    #[error("画像デコードエラー: {0}")]
    ImageDecode(String),

    #[error("HTTPクライアント初期化エラー: {0}")]
    HttpClient(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] freshtech_common::Error),
}

impl FreshTechError {
    /// プロセスの終了コード（入力の選び直しで回復するものは2）
    pub fn exit_code(&self) -> i32 {
        match self {
            FreshTechError::Common(e) if e.is_validation() => 2,
            FreshTechError::FileNotFound(_) | FreshTechError::UnsupportedImage(_) => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, FreshTechError>;
