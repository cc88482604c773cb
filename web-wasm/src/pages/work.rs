//! Workページ

use super::PageLinks;
use crate::components::project_card::ProjectGrid;
use crate::hooks::use_projects;
use leptos::prelude::*;
use portfolio_common::{Binding, WorkFilter};

#[component]
pub fn WorkPage(links: PageLinks) -> impl IntoView {
    let (active, set_active) = signal(WorkFilter::All);
    let projects = use_projects(move || active.get().category_filter());

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
        <article class="page-work">
            <button class="back" on:click=back>"← Back"</button>

            <section class="intro">
                <span class="caption">"Portfolio"</span>
                <h1 class="hero-title">"Selected work, not a showroom."</h1>
                <p class="hero-lead">
                    "A curated set across identity, digital and visual experiments."
                </p>
            </section>

            <nav class="filter-bar">
                {WorkFilter::ALL
                    .iter()
                    .map(|&filter| {
                        view! {
                            <button
                                class="filter-button"
                                class:active=move || active.get() == filter
                                on:click=move |_| set_active.set(filter)
                            >
                                {filter.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>

            <section class="section">
                <ProjectGrid state=projects on_open=open />
            </section>

            <section class="section cta">
                <p class="cta-lead">"Have a project in mind?"</p>
                <button class="btn-primary" on:click=contact>"Let's talk"</button>
            </section>
        </article>
    }
}
