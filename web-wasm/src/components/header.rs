//! ヘッダーコンポーネント

use freshtech_common::Screen;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Header(screen: Screen) -> impl IntoView {
    view! {
        <header class="header">
            <Show when=move || screen != Screen::Home>
                <A href=Screen::Home.path() attr:class="home-link">
                    {format!("← {}", Screen::Home.link_label())}
                </A>
            </Show>
            <h1>{screen.title()}</h1>
        </header>
    }
}
