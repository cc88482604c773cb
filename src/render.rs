//! 端末向けのテキスト出力

use portfolio_common::{Project, Route, ViewDescriptor};
use std::fmt::Write;

/// 一覧（番号は01から）
pub fn render_project_list(projects: &[Project]) -> String {
    if projects.is_empty() {
        return "No projects found.\n".to_string();
    }

    let mut out = String::new();
    for (i, project) in projects.iter().enumerate() {
        let _ = write!(out, "{:02}  {}  · {}", i + 1, project.title, project.category.label());
        if let Some(year) = &project.year {
            let _ = write!(out, " · {}", year);
        }
        if project.is_featured() {
            out.push_str("  [featured]");
        }
        let _ = writeln!(out, "  ({})", project.id);
    }
    out
}

/// 詳細。値のある項目だけ出す
pub fn render_project(project: &Project) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", project.title);
    let _ = writeln!(out, "{}", "=".repeat(project.title.chars().count().max(1)));
    let _ = writeln!(out, "Category: {}", project.category.label());
    if let Some(client) = &project.client {
        let _ = writeln!(out, "Client:   {}", client);
    }
    if let Some(year) = &project.year {
        let _ = writeln!(out, "Year:     {}", year);
    }
    if let Some(url) = &project.project_url {
        let _ = writeln!(out, "Link:     {}", url);
    }
    if !project.image_url.is_empty() {
        let _ = writeln!(out, "Cover:    {}", project.image_url);
    }
    if let Some(description) = &project.description {
        let _ = writeln!(out, "\n{}", description);
    }
    if let Some(content) = &project.content {
        let _ = writeln!(out, "\n{}", content);
    }
    let gallery = project.gallery();
    if !gallery.is_empty() {
        let _ = writeln!(out, "\nGallery ({}):", gallery.len());
        for image in gallery {
            let _ = writeln!(out, "  - {}", image);
        }
    }
    out
}

/// ルートとコールバック配線
pub fn render_view(route: &Route, view: &ViewDescriptor) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "route: {}", route);
    let _ = writeln!(out, "path:  {}", route.to_path());
    let _ = writeln!(out, "view:  {:?}", view.view);
    for (binding, target) in &view.bindings {
        let _ = writeln!(out, "  {:?} -> {}", binding, target);
    }
    out
}
