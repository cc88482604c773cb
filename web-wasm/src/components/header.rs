//! ヘッダーコンポーネント

use crate::app::Navigate;
use leptos::prelude::*;
use portfolio_common::PageKind;

/// ナビゲーションに出すページ（プロジェクト詳細は除く）
const NAV_PAGES: [PageKind; 5] = [
    PageKind::Home,
    PageKind::Work,
    PageKind::About,
    PageKind::Contact,
    PageKind::Visual,
];

#[component]
pub fn Header(current: Memo<PageKind>, on_navigate: Navigate) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    let go = move |kind: PageKind| {
        set_menu_open.set(false);
        on_navigate.run((kind, None));
    };

    let nav_items = move || {
        NAV_PAGES
            .iter()
            .map(|&kind| {
                view! {
                    <button
                        class="nav-link"
                        class:active=move || current.get() == kind
                        on:click=move |_| go(kind)
                    >
                        {kind.label()}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <header class="header">
            <button class="logo" on:click=move |_| go(PageKind::Home)>
                "Portfolio"
            </button>

            <nav class="nav-desktop">{nav_items}</nav>

            <button
                class="menu-toggle"
                aria-label="Toggle menu"
                on:click=move |_| set_menu_open.update(|open| *open = !*open)
            >
                {move || if menu_open.get() { "Close" } else { "Menu" }}
            </button>

            <Show when=move || menu_open.get()>
                <nav class="nav-mobile">{nav_items}</nav>
            </Show>
        </header>
    }
}
