//! Portfolio Common Library
//!
//! CLIとWeb(WASM)で共有されるルーティングとデータアクセスの中核

pub mod error;
pub mod route;
pub mod router;
pub mod project;
pub mod images;
pub mod filter;
pub mod query;
pub mod repository;
pub mod fetch;

pub use error::{QueryError, Result, NOT_CONFIGURED_MESSAGE};
pub use route::{PageKind, Route};
pub use router::{resolve_view, Binding, NoViewport, PageView, Router, ViewDescriptor, Viewport};
pub use project::{Category, Project, ProjectRow, Year};
pub use images::normalize_images;
pub use filter::{CategoryConstraint, CategoryFilter, WorkFilter};
pub use query::{remote_error_message, MemoryStore, ProjectQuery, ProjectSource, PROJECTS_TABLE};
pub use repository::Portfolio;
pub use fetch::{load_project, load_projects, FetchGuard, FetchState, FetchTicket, StateSink};
