//! 共通UIコンポーネント

pub mod footer;
pub mod header;
pub mod project_card;
