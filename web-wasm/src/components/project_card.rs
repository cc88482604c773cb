//! プロジェクトカードと一覧表示

use leptos::prelude::*;
use portfolio_common::{FetchState, Project};

/// 読み込み中に出すスケルトンの数
const SKELETON_COUNT: usize = 6;

#[component]
pub fn ProjectCard<F>(project: Project, index: usize, on_open: F) -> impl IntoView
where
    F: Fn(String) + 'static + Clone + Send,
{
    let id = project.id.clone();
    let year = project.year.as_ref().map(|y| y.to_string());

    view! {
        <article class="project-card" on:click=move |_| on_open(id.clone())>
            <div class="project-card-image">
                <img src=project.image_url.clone() alt=project.title.clone() loading="lazy" />
            </div>
            <div class="project-card-body">
                <span class="project-card-index">{format!("{:02}", index + 1)}</span>
                <h3 class="project-card-title">{project.title.clone()}</h3>
                <p class="project-card-meta">
                    {project.category.label().to_string()}
                    {year.map(|y| view! { <span class="project-card-year">{format!(" · {}", y)}</span> })}
                </p>
            </div>
        </article>
    }
}

/// 取得状態に応じた一覧
///
/// 読み込み中は前回のデータがあればそれを出し、無ければスケルトン。
#[component]
pub fn ProjectGrid<F>(
    #[prop(into)] state: Signal<FetchState<Vec<Project>>>,
    on_open: F,
    #[prop(optional, into)] empty_message: Option<String>,
) -> impl IntoView
where
    F: Fn(String) + 'static + Clone + Send + Sync,
{
    let empty_message = empty_message.unwrap_or_else(|| "No projects found".to_string());

    move || {
        let current = state.get();
        if let Some(error) = current.error {
            return view! {
                <p class="state-error">{format!("Couldn’t load projects: {}", error)}</p>
            }
            .into_any();
        }
        if current.data.is_empty() {
            if current.loading {
                return view! {
                    <div class="project-grid">
                        {(0..SKELETON_COUNT)
                            .map(|_| view! { <div class="project-card skeleton"></div> })
                            .collect_view()}
                    </div>
                }
                .into_any();
            }
            return view! { <p class="state-empty">{empty_message.clone()}</p> }.into_any();
        }

        let on_open = on_open.clone();
        view! {
            <div class="project-grid" class:refreshing=current.loading>
                {current
                    .data
                    .into_iter()
                    .enumerate()
                    .map(|(index, project)| {
                        view! { <ProjectCard project=project index=index on_open=on_open.clone() /> }
                    })
                    .collect_view()}
            </div>
        }
        .into_any()
    }
}
