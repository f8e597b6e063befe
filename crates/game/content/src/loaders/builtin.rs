//! Sample world compiled into the crate.
//!
//! Hosts without a content directory run on this data: six biomes, seven
//! monsters (three evolved), the crafting, market, weather, quest and
//! achievement tables.

use game_core::GameConfig;

use crate::ContentCatalog;
use crate::loaders::{
    AchievementLoader, BiomeLoader, ConfigLoader, ItemLoader, LoadResult, MarketLoader,
    MonsterLoader, QuestGiverLoader, QuestLoader, RecipeLoader, WeatherLoader, ensure_consistent,
};

pub(crate) mod sources {
    pub const CONFIG: &str = include_str!("../../data/config.toml");
    pub const BIOMES: &str = include_str!("../../data/biomes.ron");
    pub const MONSTERS: &str = include_str!("../../data/monsters.ron");
    pub const ITEMS: &str = include_str!("../../data/items.ron");
    pub const RECIPES: &str = include_str!("../../data/recipes.ron");
    pub const MARKET: &str = include_str!("../../data/market.ron");
    pub const WEATHER: &str = include_str!("../../data/weather.ron");
    pub const QUESTS: &str = include_str!("../../data/quests.ron");
    pub const QUEST_GIVERS: &str = include_str!("../../data/quest_givers.ron");
    pub const ACHIEVEMENTS: &str = include_str!("../../data/achievements.ron");

    /// File name and contents of every built-in data file.
    #[cfg(test)]
    pub const ALL: [(&str, &str); 10] = [
        ("config.toml", CONFIG),
        ("biomes.ron", BIOMES),
        ("monsters.ron", MONSTERS),
        ("items.ron", ITEMS),
        ("recipes.ron", RECIPES),
        ("market.ron", MARKET),
        ("weather.ron", WEATHER),
        ("quests.ron", QUESTS),
        ("quest_givers.ron", QUEST_GIVERS),
        ("achievements.ron", ACHIEVEMENTS),
    ];
}

/// Parses the built-in content.
pub fn builtin_catalog() -> LoadResult<ContentCatalog> {
    let catalog = ContentCatalog {
        biomes: BiomeLoader::parse(sources::BIOMES)?,
        monsters: MonsterLoader::parse(sources::MONSTERS)?,
        items: ItemLoader::parse(sources::ITEMS)?,
        recipes: RecipeLoader::parse(sources::RECIPES)?,
        listings: MarketLoader::parse(sources::MARKET)?,
        weather: WeatherLoader::parse(sources::WEATHER)?,
        quests: QuestLoader::parse(sources::QUESTS)?,
        quest_givers: QuestGiverLoader::parse(sources::QUEST_GIVERS)?,
        achievements: AchievementLoader::parse(sources::ACHIEVEMENTS)?,
    };
    ensure_consistent(&catalog)?;
    Ok(catalog)
}

/// Parses the built-in `config.toml`.
pub fn builtin_config() -> LoadResult<GameConfig> {
    ConfigLoader::parse(sources::CONFIG)
}

#[cfg(test)]
mod tests {
    use game_core::{
        BiomeId, CatalogOracle, EconomyOracle, ItemId, MonsterId, ProgressionOracle, QuestId,
        RecipeId, WeatherOracle,
    };

    use super::*;

    #[test]
    fn builtin_content_is_consistent() {
        let catalog = builtin_catalog().unwrap();
        assert_eq!(catalog.biomes().len(), 6);
        assert_eq!(catalog.monsters().len(), 7);
        assert_eq!(catalog.recipes().len(), 4);
        assert_eq!(catalog.listings().len(), 7);
        assert_eq!(catalog.weather_table().len(), 6);
        assert_eq!(catalog.quests().len(), 5);
        assert_eq!(catalog.quest_givers().len(), 3);
        assert!(!catalog.achievements().is_empty());
    }

    #[test]
    fn builtin_config_matches_defaults() {
        assert_eq!(builtin_config().unwrap(), GameConfig::default());
    }

    #[test]
    fn evolved_monsters_point_at_their_base_form() {
        let catalog = builtin_catalog().unwrap();
        let evolved: Vec<_> = catalog
            .monsters()
            .iter()
            .filter(|monster| monster.is_evolved())
            .map(|monster| monster.id.as_str())
            .collect();
        assert_eq!(evolved, vec!["shadow-alpha", "frost-behemoth", "toxic-hydra"]);

        let forest = catalog.monsters_in(&BiomeId::from("forest"));
        assert_eq!(forest.len(), 3);
        assert_eq!(
            catalog
                .monster(&MonsterId::from("shadow-wolf"))
                .map(|monster| monster.hunt_time_secs),
            Some(30)
        );
    }

    #[test]
    fn shadow_blade_recipe_uses_starter_materials() {
        let catalog = builtin_catalog().unwrap();
        let recipe = catalog.recipe(&RecipeId::from("shadow-blade")).unwrap();
        let materials: Vec<_> = recipe
            .materials
            .iter()
            .map(|stack| (stack.item.as_str(), stack.quantity))
            .collect();
        assert_eq!(materials, vec![("shadow-essence", 3), ("iron-ore", 2)]);
        assert!(catalog.item(&ItemId::from("shadow-blade")).is_some());
    }

    #[test]
    fn weather_weights_cover_every_kind_once() {
        let catalog = builtin_catalog().unwrap();
        assert_eq!(catalog.total_weight(), 110);
        assert_eq!(catalog.pick(0).map(|w| w.name.as_str()), Some("Clear Skies"));
        assert_eq!(catalog.pick(109).map(|w| w.name.as_str()), Some("Heat Wave"));
    }

    #[test]
    fn quests_name_their_givers() {
        let catalog = builtin_catalog().unwrap();
        let quest = catalog.quest(&QuestId::from("shadow-wolf-extermination")).unwrap();
        let giver = catalog.quest_giver(&quest.giver).unwrap();
        assert_eq!(giver.name, "Elder Maya");
    }
}
