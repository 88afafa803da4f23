//! UIコンポーネント

pub mod alert;
pub mod fresh_produce;
pub mod header;
pub mod home;
pub mod product_extraction;
pub mod progress_bar;
pub mod upload_slot;
