//! FreshTech Common Library
//!
//! CLIとWeb(WASM)で共有される状態・送信処理・表示モデル

pub mod backend;
pub mod error;
pub mod extraction;
pub mod freshness;
pub mod join;
pub mod payload;
pub mod presenter;
pub mod screens;
pub mod slots;
pub mod types;

pub use backend::{Backend, Endpoint, DEFAULT_BACKEND_URL};
pub use error::{Error, Result};
pub use extraction::{ExtractionState, Phase, SubmissionResult};
pub use freshness::{FreshAnalysis, FreshAnalyzerState};
pub use join::join_all_or_nothing;
pub use payload::{MultipartPayload, PayloadPart};
pub use presenter::{FreshView, FruitCard, ItemLine, Presentation, ProductView};
pub use screens::Screen;
pub use slots::{ImageFile, SlotLabel, UploadSlots, mime_type_for_extension};
pub use types::{AnnotatedImage, DetectedFruit, ItemInformation};
