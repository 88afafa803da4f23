//! 商品情報抽出ワークフロー
//!
//! 検証 → 状態リセット → 文字検出/文字抽出の2リクエストを並列送信 → 結果の組み立て。
//!
//! 状態遷移（1回の送信ごと）:
//! `Idle → (検証失敗: Idle + error) | Submitting → (成功: Idle + result) | (失敗: Idle + error)`

use crate::backend::{Backend, Endpoint};
use crate::error::{Error, Result, EXTRACTION_FAILED, FRONT_IMAGE_REQUIRED};
use crate::join::join_all_or_nothing;
use crate::payload::MultipartPayload;
use crate::presenter::{Presentation, ProductView};
use crate::slots::{ImageFile, SlotLabel, UploadSlots};
use crate::types::{AnnotatedImage, DetectionResponse, ExtractionResponse, ItemInformation};

/// 2つのレスポンスを組み合わせた結果（片方だけの結果は存在しない）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionResult {
    pub image: AnnotatedImage,
    pub item_information: ItemInformation,
}

/// 送信フェーズ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Submitting,
}

/// 通信前の入力チェック
pub fn validate(slots: &UploadSlots) -> Result<()> {
    if slots.is_set(SlotLabel::Front) {
        Ok(())
    } else {
        Err(Error::Validation(FRONT_IMAGE_REQUIRED.to_string()))
    }
}

/// 同じpayloadで検出・抽出を並列に呼び出し、両方そろった場合だけ結果を返す
///
/// 失敗原因はログに残し、呼び出し側には `Error::Network` の定型文だけを返す。
pub async fn request_extraction<B: Backend>(
    backend: &B,
    payload: &MultipartPayload,
) -> Result<SubmissionResult> {
    log::debug!(
        "文字検出/抽出を送信: fields={:?}, {} bytes",
        payload.field_names(),
        payload.total_bytes()
    );

    let detection = detect_text(backend, payload);
    let extraction = extract_text(backend, payload);

    match join_all_or_nothing(detection, extraction).await {
        Ok((image, item_information)) => Ok(SubmissionResult {
            image,
            item_information,
        }),
        Err(e) => {
            log::error!("Error processing images: {}", e);
            Err(Error::Network(EXTRACTION_FAILED.to_string()))
        }
    }
}

async fn detect_text<B: Backend>(backend: &B, payload: &MultipartPayload) -> Result<AnnotatedImage> {
    let body = backend
        .post_multipart(Endpoint::ImageTextDetection, payload)
        .await?;
    let response: DetectionResponse = serde_json::from_str(&body)?;
    AnnotatedImage::from_base64(&response.image)
}

async fn extract_text<B: Backend>(
    backend: &B,
    payload: &MultipartPayload,
) -> Result<ItemInformation> {
    let body = backend
        .post_multipart(Endpoint::ImageTextExtraction, payload)
        .await?;
    let response: ExtractionResponse = serde_json::from_str(&body)?;
    ItemInformation::parse(&response.item_information)
}

/// スロット → 結果（状態を持たない版）
pub async fn submit<B: Backend>(backend: &B, slots: &UploadSlots) -> Result<SubmissionResult> {
    validate(slots)?;
    let payload = MultipartPayload::from_slots(slots);
    request_extraction(backend, &payload).await
}

/// 商品情報抽出画面の状態
///
/// 画面ごとに所有され、子コンポーネントへは明示的に渡す。
#[derive(Debug, Clone, Default)]
pub struct ExtractionState {
    slots: UploadSlots,
    result: Option<SubmissionResult>,
    error: Option<String>,
    pending: bool,
}

impl ExtractionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 選択済みのスロットから始める
    pub fn with_slots(slots: UploadSlots) -> Self {
        Self {
            slots,
            ..Self::default()
        }
    }

    pub fn slots(&self) -> &UploadSlots {
        &self.slots
    }

    pub fn result(&self) -> Option<&SubmissionResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn phase(&self) -> Phase {
        if self.pending {
            Phase::Submitting
        } else {
            Phase::Idle
        }
    }

    pub fn set_slot(&mut self, label: SlotLabel, file: ImageFile) {
        self.slots.set(label, file);
    }

    pub fn clear_slot(&mut self, label: SlotLabel) {
        self.slots.clear(label);
    }

    /// スロット・結果・エラーをまとめて消す
    pub fn reset_all(&mut self) {
        self.slots.clear_all();
        self.result = None;
        self.error = None;
    }

    /// 送信開始
    ///
    /// 検証に失敗した場合はエラーを表示状態にして返す（スロットは残す）。
    /// 成功した場合はpayloadを作ってから状態をリセットし、pendingを立てる。
    pub fn begin_submission(&mut self) -> Result<MultipartPayload> {
        if self.pending {
            return Err(Error::Validation("A submission is already in progress".to_string()));
        }

        if let Err(e) = validate(&self.slots) {
            self.result = None;
            self.error = Some(e.to_string());
            return Err(e);
        }

        let payload = MultipartPayload::from_slots(&self.slots);
        self.reset_all();
        self.pending = true;
        Ok(payload)
    }

    /// 送信完了（成功・失敗どちらでもpendingを下ろす）
    pub fn finish_submission(&mut self, outcome: Result<SubmissionResult>) -> Result<()> {
        self.pending = false;
        match outcome {
            Ok(result) => {
                self.result = Some(result);
                self.error = None;
                Ok(())
            }
            Err(e) => {
                self.result = None;
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// 送信から完了までを1回で行う
    pub async fn submit<B: Backend>(&mut self, backend: &B) -> Result<()> {
        let payload = self.begin_submission()?;
        let outcome = request_extraction(backend, &payload).await;
        self.finish_submission(outcome)
    }

    pub fn presentation(&self) -> Presentation<ProductView> {
        Presentation::from_state(self.result.as_ref().map(ProductView::from), self.error())
    }
}
