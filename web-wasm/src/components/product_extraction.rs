//! 商品情報抽出画面
//!
//! 画面の状態（ExtractionState）はこのコンポーネントが所有し、
//! スロットコンポーネントへはシグナルとして渡す。

use freshtech_common::extraction::request_extraction;
use freshtech_common::{ExtractionState, Presentation, ProductView, Screen, SlotLabel};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::alert::ErrorAlert;
use super::header::Header;
use super::upload_slot::UploadSlot;
use crate::api::FetchBackend;

#[component]
pub fn ProductExtraction() -> impl IntoView {
    let state = RwSignal::new(ExtractionState::new());
    let backend = FetchBackend::default();
    let is_pending = move || state.with(|s| s.is_pending());

    let on_submit = move |_| {
        // 検証失敗時はエラーが状態に入るだけで通信しない
        let Some(Ok(payload)) = state.try_update(|s| s.begin_submission()) else {
            return;
        };

        let backend = backend.clone();
        spawn_local(async move {
            let outcome = request_extraction(&backend, &payload).await;
            state.update(|s| {
                let _ = s.finish_submission(outcome);
            });
        });
    };

    view! {
        <div class="container">
            <Header screen=Screen::ProductExtractor />

            <div class="card">
                <div class="card-header gradient-blue-purple">
                    <h2 class="card-title">"Product Information Extraction"</h2>
                </div>
                <div class="card-content">
                    <div class="slot-grid">
                        {SlotLabel::ALL
                            .into_iter()
                            .map(|label| view! { <UploadSlot label=label state=state /> })
                            .collect_view()}
                    </div>

                    <button
                        class="btn btn-primary btn-block"
                        disabled=is_pending
                        on:click=on_submit
                    >
                        {move || if is_pending() { "⌛ Processing..." } else { "Upload and Process" }}
                    </button>
                </div>
            </div>

            {move || match state.with(|s| s.presentation()) {
                Presentation::Empty => ().into_any(),
                Presentation::Error(message) => view! { <ErrorAlert message=message /> }.into_any(),
                Presentation::Ready(product) => view! { <ProductResult product=product /> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn ProductResult(product: ProductView) -> impl IntoView {
    view! {
        <div class="results-grid">
            <div class="card">
                <div class="card-header gradient-pink-yellow">
                    <h3 class="card-title">"Processed Image"</h3>
                </div>
                <img src=product.image_src alt="Processed" class="result-image" />
            </div>

            <div class="card">
                <div class="card-header gradient-green-teal">
                    <h3 class="card-title">"Item Information"</h3>
                </div>
                <div class="card-content">
                    <ul class="item-list">
                        {product
                            .items
                            .into_iter()
                            .map(|item| {
                                view! {
                                    <li class="item">
                                        <span class="item-label">{format!("{}:", item.label)}</span>
                                        " "
                                        {item.value}
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
            </div>
        </div>
    }
}
