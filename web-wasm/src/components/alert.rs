//! エラー表示コンポーネント

use leptos::prelude::*;

#[component]
pub fn ErrorAlert(message: String) -> impl IntoView {
    view! {
        <div class="alert alert-destructive" role="alert">
            <div class="alert-icon">"⚠"</div>
            <div>
                <p class="alert-title">"Error"</p>
                <p class="alert-description">{message}</p>
            </div>
        </div>
    }
}
