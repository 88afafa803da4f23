//! バックエンドHTTPサービスの抽象化
//!
//! ブラウザ版は `fetch`、CLI版は reqwest で実装する。
//! Futureに `Send` を要求しないのは、WASMの `JsFuture` が `!Send` のため。

use std::future::Future;

use crate::error::Result;
use crate::payload::MultipartPayload;

/// バックエンドの既定アドレス
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:5000";

/// 呼び出し先エンドポイント
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// 青果の鮮度解析
    FreshImageAnalysis,
    /// 文字検出（注釈付き画像を返す）
    ImageTextDetection,
    /// 文字抽出（商品情報を返す）
    ImageTextExtraction,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::FreshImageAnalysis => "/fresh-image-analysis",
            Endpoint::ImageTextDetection => "/image-text-detection",
            Endpoint::ImageTextExtraction => "/image-text-extraction",
        }
    }

    /// ベースURLと結合（末尾スラッシュは1つにまとめる）
    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path())
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

/// multipartをPOSTしてレスポンス本文を返すクライアント
///
/// 失敗（接続エラー、2xx以外）は `Error::Transport` で返す。
/// 利用者向けメッセージへの集約はオーケストレータ側で行う。
pub trait Backend {
    fn post_multipart(
        &self,
        endpoint: Endpoint,
        payload: &MultipartPayload,
    ) -> impl Future<Output = Result<String>>;
}
