//! ポートフォリオサイト（ネイティブ側）
//!
//! RESTストア・設定・CLIを提供する。ルーティングと取得ロジックは
//! `portfolio-common` にある。

pub mod cli;
pub mod config;
pub mod error;
pub mod render;
pub mod store;
