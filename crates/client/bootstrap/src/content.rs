//! Selects and loads the game content a session runs on.
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use game_content::{ConfigLoader, ContentCatalog, ContentFactory, builtin_catalog, builtin_config};
use game_core::GameConfig;

/// Where the catalog and tunables come from.
#[derive(Clone, Debug, Default)]
pub enum ContentSource {
    /// The sample world compiled into `game-content`.
    #[default]
    Builtin,
    /// A data directory laid out as [`ContentFactory`] expects.
    Directory(PathBuf),
}

/// Catalog and tunables ready for the runtime.
#[derive(Clone, Debug)]
pub struct LoadedContent {
    pub catalog: ContentCatalog,
    pub game_config: GameConfig,
}

impl ContentSource {
    /// Loads the catalog and its config; `config_override` replaces the
    /// config that ships with the content.
    pub fn load(&self, config_override: Option<&Path>) -> Result<LoadedContent> {
        let (catalog, game_config) = match self {
            Self::Builtin => (
                builtin_catalog().context("built-in content is invalid")?,
                builtin_config().context("built-in config is invalid")?,
            ),
            Self::Directory(dir) => {
                if !dir.is_dir() {
                    anyhow::bail!("content directory not found: {}", dir.display());
                }
                let factory = ContentFactory::new(dir);
                let catalog = factory.load_catalog()?;
                let config_path = dir.join(ContentFactory::CONFIG_FILE);
                let game_config = if config_path.exists() {
                    factory.load_config()?
                } else {
                    tracing::debug!(dir = %dir.display(), "no config.toml, using defaults");
                    GameConfig::default()
                };
                (catalog, game_config)
            }
        };

        let game_config = match config_override {
            Some(path) => ConfigLoader::load(path)?,
            None => game_config,
        };

        Ok(LoadedContent {
            catalog,
            game_config,
        })
    }
}
