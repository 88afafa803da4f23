//! メインアプリケーションコンポーネント
//!
//! 3画面のルーティングのみを持ち、各画面の状態は画面側が所有する。

use freshtech_common::Screen;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::StaticSegment;

use crate::components::{
    fresh_produce::FreshProduceAnalyzer,
    home::{Homescreen, NotFound},
    product_extraction::ProductExtraction,
};

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=StaticSegment(Screen::Home.segment()) view=Homescreen />
                    <Route
                        path=StaticSegment(Screen::FreshProduceAnalyzer.segment())
                        view=FreshProduceAnalyzer
                    />
                    <Route
                        path=StaticSegment(Screen::ProductExtractor.segment())
                        view=ProductExtraction
                    />
                </Routes>
            </main>
        </Router>
    }
}
