use crate::error::{PortfolioError, Result};
use portfolio_common::MemoryStore;
use std::path::Path;

/// JSON配列のフィクスチャファイルを読み込む
pub fn load_fixture(path: &Path) -> Result<MemoryStore> {
    if !path.exists() {
        return Err(PortfolioError::Fixture(format!(
            "ファイルが見つかりません: {}",
            path.display()
        )));
    }

    let content = std::fs::read_to_string(path)?;
    MemoryStore::from_json(&content)
        .map_err(|e| PortfolioError::Fixture(format!("{}: {}", path.display(), e)))
}
