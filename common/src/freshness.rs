//! 青果鮮度解析ワークフロー
//!
//! 1枚の画像を `/fresh-image-analysis` に送り、注釈付き画像と検出結果を受け取る。

use crate::backend::{Backend, Endpoint};
use crate::error::{Error, Result, ANALYSIS_FAILED, INPUT_IMAGE_REQUIRED};
use crate::payload::MultipartPayload;
use crate::presenter::{FreshView, Presentation};
use crate::slots::ImageFile;
use crate::types::{AnnotatedImage, DetectedFruit, FreshAnalysisResponse};

/// 鮮度解析の結果
#[derive(Debug, Clone, PartialEq)]
pub struct FreshAnalysis {
    pub image: AnnotatedImage,
    pub fruits: Vec<DetectedFruit>,
}

async fn post_fresh<B: Backend>(backend: &B, payload: &MultipartPayload) -> Result<FreshAnalysis> {
    let body = backend
        .post_multipart(Endpoint::FreshImageAnalysis, payload)
        .await?;
    let response: FreshAnalysisResponse = serde_json::from_str(&body)?;
    let image = AnnotatedImage::from_base64(&response.result_image)?;
    Ok(FreshAnalysis {
        image,
        fruits: response.detected_fruits,
    })
}

/// 鮮度解析を呼び出す（失敗は定型文の `Error::Network` に集約）
pub async fn request_fresh_analysis<B: Backend>(
    backend: &B,
    payload: &MultipartPayload,
) -> Result<FreshAnalysis> {
    log::debug!(
        "鮮度解析を送信: fields={:?}, {} bytes",
        payload.field_names(),
        payload.total_bytes()
    );

    post_fresh(backend, payload).await.map_err(|e| {
        log::error!("Error analyzing image: {}", e);
        Error::Network(ANALYSIS_FAILED.to_string())
    })
}

/// 鮮度解析画面の状態
#[derive(Debug, Clone, Default)]
pub struct FreshAnalyzerState {
    input: Option<ImageFile>,
    analysis: Option<FreshAnalysis>,
    error: Option<String>,
    pending: bool,
}

impl FreshAnalyzerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> Option<&ImageFile> {
        self.input.as_ref()
    }

    pub fn analysis(&self) -> Option<&FreshAnalysis> {
        self.analysis.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// 解析ボタンを押せるか
    pub fn can_analyze(&self) -> bool {
        self.input.is_some() && !self.pending
    }

    /// 新しい画像を選ぶと前回の解析結果は破棄する
    pub fn select_image(&mut self, file: ImageFile) {
        self.input = Some(file);
        self.analysis = None;
    }

    /// 表示する画像（解析済みなら注釈付き画像、未解析なら入力のプレビュー）
    pub fn display_image_src(&self) -> Option<String> {
        match (&self.analysis, &self.input) {
            (Some(analysis), _) => Some(analysis.image.data_url()),
            (None, Some(input)) => Some(input.data_url()),
            (None, None) => None,
        }
    }

    pub fn begin_analysis(&mut self) -> Result<MultipartPayload> {
        if self.pending {
            return Err(Error::Validation("An analysis is already in progress".to_string()));
        }

        let Some(input) = self.input.clone() else {
            self.analysis = None;
            self.error = Some(INPUT_IMAGE_REQUIRED.to_string());
            return Err(Error::Validation(INPUT_IMAGE_REQUIRED.to_string()));
        };

        self.error = None;
        self.pending = true;
        Ok(MultipartPayload::single_image(input))
    }

    pub fn finish_analysis(&mut self, outcome: Result<FreshAnalysis>) -> Result<()> {
        self.pending = false;
        match outcome {
            Ok(analysis) => {
                self.analysis = Some(analysis);
                self.error = None;
                Ok(())
            }
            Err(e) => {
                self.analysis = None;
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    pub async fn analyze<B: Backend>(&mut self, backend: &B) -> Result<()> {
        let payload = self.begin_analysis()?;
        let outcome = request_fresh_analysis(backend, &payload).await;
        self.finish_analysis(outcome)
    }

    pub fn presentation(&self) -> Presentation<FreshView> {
        Presentation::from_state(self.analysis.as_ref().map(FreshView::from), self.error())
    }
}
