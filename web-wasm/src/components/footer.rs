//! フッターコンポーネント

use crate::app::Navigate;
use leptos::prelude::*;
use portfolio_common::PageKind;

pub const SOCIAL_LINKS: [(&str, &str); 3] = [
    ("Instagram", "https://instagram.com/orangebeanie"),
    ("Vimeo", "https://vimeo.com/orangebeanie"),
    ("Behance", "https://behance.net/orangebeanie"),
];

#[component]
pub fn Footer(on_navigate: Navigate) -> impl IntoView {
    let links = [PageKind::Work, PageKind::Visual, PageKind::About, PageKind::Contact];

    view! {
        <footer class="footer">
            <nav class="footer-nav">
                {links
                    .into_iter()
                    .map(|kind| {
                        view! {
                            <button class="footer-link" on:click=move |_| on_navigate.run((kind, None))>
                                {kind.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
            <div class="footer-social">
                {SOCIAL_LINKS
                    .iter()
                    .map(|(name, href)| {
                        view! {
                            <a href=*href target="_blank" rel="noopener noreferrer">
                                {*name}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </footer>
    }
}
