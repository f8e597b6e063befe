//! Content loaders for reading game data from files.
//!
//! Every content kind lives in its own RON file and game tunables live in a
//! TOML file. [`ContentFactory`] reads a whole data directory; [`builtin`]
//! parses the sample world compiled into this crate.

pub mod builtin;
pub mod config;
pub mod factory;
pub mod lists;

pub use builtin::{builtin_catalog, builtin_config};
pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use lists::{
    AchievementLoader, BiomeLoader, ItemLoader, MarketLoader, MonsterLoader, QuestGiverLoader,
    QuestLoader, RecipeLoader, WeatherLoader,
};

use std::path::Path;

use crate::ContentCatalog;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

/// Rejects catalogs with references to missing content.
pub fn ensure_consistent(catalog: &ContentCatalog) -> LoadResult<()> {
    let problems = catalog.dangling_references();
    if problems.is_empty() {
        return Ok(());
    }
    anyhow::bail!(
        "content has {} dangling reference(s):\n  {}",
        problems.len(),
        problems.join("\n  ")
    )
}
