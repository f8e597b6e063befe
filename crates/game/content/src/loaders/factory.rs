//! Content factory for building a catalog from data files.

use std::path::{Path, PathBuf};

use game_core::GameConfig;

use crate::ContentCatalog;
use crate::loaders::{
    AchievementLoader, BiomeLoader, ConfigLoader, ItemLoader, LoadResult, MarketLoader,
    MonsterLoader, QuestGiverLoader, QuestLoader, RecipeLoader, WeatherLoader, ensure_consistent,
};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── biomes.ron
/// ├── monsters.ron
/// ├── items.ron
/// ├── recipes.ron
/// ├── market.ron
/// ├── weather.ron
/// ├── quests.ron
/// ├── quest_givers.ron
/// └── achievements.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const CONFIG_FILE: &'static str = "config.toml";

    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        ConfigLoader::load(&self.data_dir.join(Self::CONFIG_FILE))
    }

    /// Load every content file and check cross references.
    pub fn load_catalog(&self) -> LoadResult<ContentCatalog> {
        let dir = &self.data_dir;
        let catalog = ContentCatalog {
            biomes: BiomeLoader::load(&dir.join("biomes.ron"))?,
            monsters: MonsterLoader::load(&dir.join("monsters.ron"))?,
            items: ItemLoader::load(&dir.join("items.ron"))?,
            recipes: RecipeLoader::load(&dir.join("recipes.ron"))?,
            listings: MarketLoader::load(&dir.join("market.ron"))?,
            weather: WeatherLoader::load(&dir.join("weather.ron"))?,
            quests: QuestLoader::load(&dir.join("quests.ron"))?,
            quest_givers: QuestGiverLoader::load(&dir.join("quest_givers.ron"))?,
            achievements: AchievementLoader::load(&dir.join("achievements.ron"))?,
        };
        ensure_consistent(&catalog)?;

        tracing::info!(
            dir = %dir.display(),
            monsters = catalog.monsters.len(),
            items = catalog.items.len(),
            quests = catalog.quests.len(),
            "content loaded"
        );
        Ok(catalog)
    }
}
