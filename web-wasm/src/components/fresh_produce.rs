//! 青果鮮度解析画面

use freshtech_common::freshness::request_fresh_analysis;
use freshtech_common::presenter::NO_FRUITS_MESSAGE;
use freshtech_common::{FreshAnalyzerState, FruitCard, Presentation, Screen};
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::HtmlInputElement;

use super::alert::ErrorAlert;
use super::header::Header;
use super::progress_bar::ProgressBar;
use super::upload_slot::read_image_file;
use crate::api::FetchBackend;

#[component]
pub fn FreshProduceAnalyzer() -> impl IntoView {
    let state = RwSignal::new(FreshAnalyzerState::new());
    let backend = FetchBackend::default();
    let image_src = Memo::new(move |_| state.with(|s| s.display_image_src()));
    let is_pending = move || state.with(|s| s.is_pending());

    let on_change = move |ev: web_sys::Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            read_image_file(file, move |image| {
                state.update(|s| s.select_image(image));
            });
        }
        input.set_value("");
    };

    let on_analyze = move |_| {
        let Some(Ok(payload)) = state.try_update(|s| s.begin_analysis()) else {
            return;
        };

        let backend = backend.clone();
        spawn_local(async move {
            let outcome = request_fresh_analysis(&backend, &payload).await;
            state.update(|s| {
                let _ = s.finish_analysis(outcome);
            });
        });
    };

    view! {
        <div class="container">
            <Header screen=Screen::FreshProduceAnalyzer />

            <div class="two-column">
                <div class="card">
                    <div class="card-header">
                        <h2 class="card-title">"Image Analysis"</h2>
                    </div>
                    <div class="card-content">
                        <div class="image-frame">
                            <Show
                                when=move || image_src.get().is_some()
                                fallback=|| view! {
                                    <label for="imageUpload" class="upload-prompt">
                                        <div class="upload-icon">"⬆"</div>
                                        <span class="text-muted">"Upload an image"</span>
                                    </label>
                                }
                            >
                                <label for="imageUpload" class="image-replace">
                                    <img
                                        src=move || image_src.get().unwrap_or_default()
                                        alt="Result"
                                        class="result-image"
                                    />
                                </label>
                            </Show>
                            <input
                                id="imageUpload"
                                type="file"
                                accept="image/*"
                                class="sr-only"
                                on:change=on_change
                            />
                        </div>

                        <button
                            class="btn btn-primary btn-block"
                            disabled=move || !state.with(|s| s.can_analyze())
                            on:click=on_analyze
                        >
                            {move || if is_pending() { "⏳ Analyzing..." } else { "Analyze Freshness" }}
                        </button>
                    </div>
                </div>

                <div class="card">
                    <div class="card-header">
                        <h2 class="card-title">"Detected Fruits"</h2>
                    </div>
                    <div class="card-content">
                        {move || match state.with(|s| s.presentation()) {
                            Presentation::Ready(fresh) if !fresh.cards.is_empty() => {
                                view! {
                                    <div class="fruit-grid">
                                        {fresh
                                            .cards
                                            .into_iter()
                                            .map(|card| view! { <FruitCardView card=card /> })
                                            .collect_view()}
                                    </div>
                                }
                                    .into_any()
                            }
                            Presentation::Error(message) => {
                                view! { <ErrorAlert message=message /> }.into_any()
                            }
                            _ => view! { <p class="text-muted text-center">{NO_FRUITS_MESSAGE}</p> }
                                .into_any(),
                        }}
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn FruitCardView(card: FruitCard) -> impl IntoView {
    view! {
        <div class="card fruit-card">
            <div class="card-header gradient-green-blue">
                <h3 class="card-title">{card.name}</h3>
            </div>
            <div class="card-content">
                <p class="field-label">"Freshness"</p>
                <ProgressBar percent=card.percent />
                <p class="text-muted">{card.freshness_label}</p>

                <div class="alert alert-condition">
                    <p class="alert-title">"✔ Condition"</p>
                    <p class="alert-description">{card.condition}</p>
                </div>
                <div class="alert alert-shelf-life">
                    <p class="alert-title">"🕒 Shelf Life"</p>
                    <p class="alert-description">{card.shelf_life}</p>
                </div>
            </div>
        </div>
    }
}
