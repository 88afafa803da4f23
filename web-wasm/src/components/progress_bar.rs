//! プログレスバーコンポーネント

use leptos::prelude::*;

/// 鮮度（0-100）を赤→黄→緑のグラデーションで表示
#[component]
pub fn ProgressBar(percent: f64) -> impl IntoView {
    view! {
        <div class="progress-container">
            <div class="progress-bar">
                <div
                    class="progress-fill freshness-gradient"
                    style=format!("width: {}%", percent)
                />
            </div>
        </div>
    }
}
