//! メインアプリケーションコンポーネント
//!
//! 現在のルートは `Router` が1つだけ持つ。ルートはURLハッシュにも
//! 書き出し、ブラウザの戻る/進むで復元する。

use crate::api;
use crate::components::{footer::Footer, header::Header};
use crate::pages::{
    about::AboutPage, contact::ContactPage, home::HomePage, project::ProjectPage,
    visual::VisualPage, work::WorkPage, PageLinks,
};
use leptos::ev;
use leptos::prelude::*;
use portfolio_common::{PageKind, PageView, Route, Router, ViewDescriptor, Viewport};
use wasm_bindgen::JsValue;

/// ウィンドウのスクロールを先頭へ戻す
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowViewport;

impl Viewport for WindowViewport {
    fn scroll_to_top(&self) {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }
}

/// 遷移要求（ページ種別と任意のプロジェクトID）
pub type Navigate = Callback<(PageKind, Option<String>)>;

/// URLハッシュからルートを読む。無い・読めない場合はホーム
fn route_from_location() -> Route {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .and_then(|hash| Route::from_path(&hash))
        .unwrap_or_default()
}

/// ルートを履歴に積む
fn push_history(route: &Route) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(history) = window.history() else {
        return;
    };
    let url = format!("#{}", route.to_path());
    if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(url.as_str())) {
        web_sys::console::warn_2(&"pushState failed:".into(), &e);
    }
}

fn render_page(desc: ViewDescriptor, navigate: Navigate) -> AnyView {
    let links = PageLinks::new(desc.bindings, navigate);
    match desc.view {
        PageView::Home => view! { <HomePage links=links /> }.into_any(),
        PageView::Work => view! { <WorkPage links=links /> }.into_any(),
        PageView::Project { project_id } => {
            view! { <ProjectPage project_id=project_id links=links /> }.into_any()
        }
        PageView::About => view! { <AboutPage links=links /> }.into_any(),
        PageView::Contact => view! { <ContactPage links=links /> }.into_any(),
        PageView::Visual => view! { <VisualPage links=links /> }.into_any(),
    }
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    provide_context(api::portfolio());

    let router = RwSignal::new(Router::with_route(WindowViewport, route_from_location()));

    // 遷移。IDの無いプロジェクト遷移などは何も起きない
    let navigate: Navigate = Callback::new(move |(kind, id): (PageKind, Option<String>)| {
        let mut changed = false;
        router.maybe_update(|r| {
            changed = r.navigate(kind, id.as_deref());
            changed
        });
        if changed {
            router.with_untracked(|r| push_history(r.current()));
        }
    });

    // 戻る/進む
    let _ = window_event_listener(ev::popstate, move |_| {
        let route = route_from_location();
        router.maybe_update(|r| r.current() != &route && r.replace(route));
    });

    let current = Memo::new(move |_| router.with(|r| r.current().kind()));
    let view_desc = Memo::new(move |_| router.with(|r| r.view()));

    view! {
        <div class="app">
            <Header current=current on_navigate=navigate />
            <main class="page">
                {move || render_page(view_desc.get(), navigate)}
            </main>
            <Footer on_navigate=navigate />
        </div>
    }
}
