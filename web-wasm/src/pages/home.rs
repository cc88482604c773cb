//! ホームページ

use super::PageLinks;
use crate::components::project_card::ProjectGrid;
use crate::hooks::use_projects;
use leptos::prelude::*;
use portfolio_common::{Binding, CategoryFilter, FetchState, Project};

const FOCUS_AREAS: [(&str, &str); 3] = [
    ("Identity & Branding", "Visual identities and systems built for longevity."),
    ("Digital Design", "Web and digital experiences with clarity and intent."),
    ("Visual Content", "Photography, motion and visual storytelling."),
];

#[component]
pub fn HomePage(links: PageLinks) -> impl IntoView {
    let projects = use_projects(|| CategoryFilter::All);

    // featured だけ残す（並びはストア順のまま）
    let featured = Signal::derive(move || {
        let state = projects.get();
        FetchState {
            data: state
                .data
                .into_iter()
                .filter(Project::is_featured)
                .collect::<Vec<_>>(),
            loading: state.loading,
            error: state.error,
        }
    });

    let open = {
        let links = links.clone();
        move |id: String| links.open_project(id)
    };
    let view_work = {
        let links = links.clone();
        move |_| links.go(Binding::ViewWork)
    };
    let view_work_cta = {
        let links = links.clone();
        move |_| links.go(Binding::ViewWork)
    };
    let view_visual = {
        let links = links.clone();
        move |_| links.go(Binding::ViewVisual)
    };
    let view_contact = move |_| links.go(Binding::ViewContact);

    view! {
        <article class="page-home">
            <section class="hero">
                <span class="caption">"Creative Direction & Design"</span>
                <h1 class="hero-title">"OrangeBeanie"</h1>
                <p class="hero-lead">
                    "Brand identity, digital design and visual systems for culture-driven brands."
                </p>
                <button class="link-arrow" on:click=view_work>
                    "Selected work"
                </button>
            </section>

            <section class="section">
                <h2 class="section-title">"Featured"</h2>
                <ProjectGrid state=featured on_open=open empty_message="No featured projects yet" />
            </section>

            <section class="section">
                <h2 class="section-title">"Areas of focus"</h2>
                <div class="focus-grid">
                    {FOCUS_AREAS
                        .iter()
                        .map(|(title, description)| {
                            view! {
                                <div class="focus-item">
                                    <h3>{*title}</h3>
                                    <p>{*description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <button class="btn-outline" on:click=view_visual>
                    "Visual archive"
                </button>
            </section>

            <section class="section cta">
                <p class="cta-lead">
                    "Design for brands that care about what they put into the world."
                </p>
                <div class="cta-buttons">
                    <button class="btn-primary" on:click=view_work_cta>
                        "View work"
                    </button>
                    <button class="btn-outline" on:click=view_contact>
                        "Start a project"
                    </button>
                </div>
            </section>
        </article>
    }
}
