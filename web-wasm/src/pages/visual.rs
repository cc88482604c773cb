//! Visualページ（写真のみ）

use super::PageLinks;
use crate::components::project_card::ProjectGrid;
use crate::hooks::use_projects;
use leptos::prelude::*;
use portfolio_common::{Binding, CategoryFilter};

#[component]
pub fn VisualPage(links: PageLinks) -> impl IntoView {
    let projects = use_projects(|| CategoryFilter::one("photography"));

    let back = {
        let links = links.clone();
        move |_| links.go(Binding::Back)
    };
    let open = {
        let links = links.clone();
        move |id: String| links.open_project(id)
    };
    let contact = move |_| links.go(Binding::ViewContact);

    view! {
        <article class="page-visual">
            <button class="back" on:click=back>"← Back"</button>

            <section class="intro">
                <span class="caption">"Visual & Audiovisual"</span>
                <h1 class="hero-title">"Visual culture."</h1>
            </section>

            <section class="section">
                <span class="caption">"Gallery"</span>
                <h2 class="section-title">"Visual work, no rules."</h2>
                <ProjectGrid state=projects on_open=open empty_message="Visual work coming soon." />
            </section>

            <section class="section cta">
                <button class="btn-outline" on:click=contact>"Get in touch"</button>
            </section>
        </article>
    }
}
