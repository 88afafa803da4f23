//! ホーム画面

use freshtech_common::Screen;
use leptos::prelude::*;
use leptos_router::components::{Redirect, A};
use leptos_router::hooks::use_location;

use super::header::Header;

fn icon(screen: Screen) -> &'static str {
    match screen {
        Screen::FreshProduceAnalyzer => "🥬",
        Screen::ProductExtractor => "📦",
        Screen::Home => "🏠",
    }
}

#[component]
pub fn Homescreen() -> impl IntoView {
    view! {
        <div class="home">
            <Header screen=Screen::Home />
            <div class="home-grid">
                {Screen::TOOLS
                    .into_iter()
                    .map(|screen| {
                        view! {
                            <div class="card tool-card">
                                <div class="card-header">
                                    <span class="tool-icon">{icon(screen)}</span>
                                    <h2 class="card-title">{screen.title()}</h2>
                                </div>
                                <p class="card-description">{screen.description()}</p>
                                <div class="card-content">
                                    <A href=screen.path() attr:class="btn btn-primary">
                                        {screen.link_label()}
                                    </A>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// 未知のパス
///
/// `/product-extractor/` のように末尾スラッシュ付きで来た場合は正規のパスへ転送する。
#[component]
pub fn NotFound() -> impl IntoView {
    let pathname = use_location().pathname.get_untracked();
    if let Some(screen) = Screen::from_path(&pathname) {
        return view! { <Redirect path=screen.path() /> }.into_any();
    }

    view! {
        <div class="container">
            <h1>"Page not found"</h1>
            <p class="text-muted">{pathname}</p>
            <A href=Screen::Home.path()>{Screen::Home.link_label()}</A>
        </div>
    }
    .into_any()
}
