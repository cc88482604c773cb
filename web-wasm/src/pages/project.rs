//! プロジェクト詳細ページ

use super::PageLinks;
use crate::hooks::use_project;
use leptos::prelude::*;
use portfolio_common::{Binding, Project};

#[component]
pub fn ProjectPage(project_id: String, links: PageLinks) -> impl IntoView {
    let state = use_project(move || Some(project_id.clone()));

    let back = {
        let links = links.clone();
        move |_| links.go(Binding::Back)
    };

    let body = move || {
        let current = state.get();
        if current.loading && current.data.is_none() {
            return view! { <p class="state-loading">"Loading…"</p> }.into_any();
        }
        if let Some(error) = current.error {
            return view! {
                <p class="state-error">{format!("Couldn’t load project: {}", error)}</p>
            }
            .into_any();
        }
        match current.data {
            Some(project) => view! { <ProjectDetail project=project links=links.clone() /> }.into_any(),
            None => {
                let links = links.clone();
                view! {
                    <div class="state-empty">
                        <h1>"Project not found"</h1>
                        <button class="btn-outline" on:click=move |_| links.go(Binding::Back)>
                            "Back to work"
                        </button>
                    </div>
                }
                .into_any()
            }
        }
    };

    view! {
        <article class="page-project">
            <button class="back" on:click=back>"← Back"</button>
            {body}
        </article>
    }
}

#[component]
fn ProjectDetail(project: Project, links: PageLinks) -> impl IntoView {
    let gallery = project.gallery().to_vec();
    let contact = move |_| links.go(Binding::ViewContact);

    view! {
        <header class="project-header">
            <span class="caption">{project.category.label().to_string()}</span>
            <h1 class="hero-title">{project.title.clone()}</h1>
            <dl class="project-meta">
                {project.client.clone().map(|client| view! {
                    <dt>"Client"</dt>
                    <dd>{client}</dd>
                })}
                {project.year.as_ref().map(|year| view! {
                    <dt>"Year"</dt>
                    <dd>{year.to_string()}</dd>
                })}
            </dl>
            {project.project_url.clone().map(|url| view! {
                <a class="link-arrow" href=url target="_blank" rel="noopener noreferrer">
                    "Visit project"
                </a>
            })}
        </header>

        <figure class="project-cover">
            <img src=project.image_url.clone() alt=project.title.clone() />
        </figure>

        {project.description.clone().map(|text| view! { <p class="project-description">{text}</p> })}
        {project.content.clone().map(|text| view! { <div class="project-content">{text}</div> })}

        <section class="project-gallery">
            {gallery
                .into_iter()
                .map(|src| view! { <img src=src alt="" loading="lazy" /> })
                .collect_view()}
        </section>

        <section class="section cta">
            <button class="btn-primary" on:click=contact>"Start a project"</button>
        </section>
    }
}
