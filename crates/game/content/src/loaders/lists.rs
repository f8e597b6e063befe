//! Loaders for the per-kind RON content files.
//!
//! Each file is a single struct holding one list, e.g.
//!
//! ```ron
//! (
//!     monsters: [
//!         (id: "shadow-wolf", name: "Shadow Wolf", ...),
//!     ],
//! )
//! ```

use std::path::Path;

use game_core::{
    AchievementDefinition, BiomeDefinition, ItemDefinition, MarketListing, MonsterTemplate,
    QuestGiver, QuestTemplate, Recipe, WeatherDefinition,
};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

macro_rules! list_loader {
    (
        $(#[$meta:meta])*
        $loader:ident, $file:ident { $field:ident: $entry:ty }, $label:literal
    ) => {
        /// File layout read by the matching loader.
        #[derive(Debug, Clone, Serialize, Deserialize)]
        pub struct $file {
            pub $field: Vec<$entry>,
        }

        $(#[$meta])*
        pub struct $loader;

        impl $loader {
            /// Parses RON source text.
            pub fn parse(source: &str) -> LoadResult<Vec<$entry>> {
                let file: $file = ron::from_str(source)
                    .map_err(|e| anyhow::anyhow!("Failed to parse {} RON: {}", $label, e))?;
                Ok(file.$field)
            }

            /// Loads a RON file from disk.
            pub fn load(path: &Path) -> LoadResult<Vec<$entry>> {
                let content = read_file(path)?;
                Self::parse(&content)
                    .map_err(|e| e.context(format!("while loading {}", path.display())))
            }
        }
    };
}

list_loader!(
    /// Loader for biome definitions.
    BiomeLoader, BiomeFile { biomes: BiomeDefinition }, "biome"
);
list_loader!(
    /// Loader for monster templates and their drop tables.
    MonsterLoader, MonsterFile { monsters: MonsterTemplate }, "monster"
);
list_loader!(
    /// Loader for item definitions.
    ItemLoader, ItemFile { items: ItemDefinition }, "item"
);
list_loader!(
    /// Loader for crafting recipes.
    RecipeLoader, RecipeFile { recipes: Recipe }, "recipe"
);
list_loader!(
    /// Loader for marketplace listings.
    MarketLoader, MarketFile { listings: MarketListing }, "market"
);
list_loader!(
    /// Loader for the weather table.
    WeatherLoader, WeatherFile { weather: WeatherDefinition }, "weather"
);
list_loader!(
    /// Loader for quest templates.
    QuestLoader, QuestFile { quests: QuestTemplate }, "quest"
);
list_loader!(
    /// Loader for quest-giving NPCs.
    QuestGiverLoader, QuestGiverFile { quest_givers: QuestGiver }, "quest giver"
);
list_loader!(
    /// Loader for achievement definitions.
    AchievementLoader, AchievementFile { achievements: AchievementDefinition }, "achievement"
);

#[cfg(test)]
mod tests {
    use game_core::{
        EquipmentSlot, EvolutionRequirement, Faction, ItemCategory, ObjectiveKind, Rarity,
        SkillKind, StatKind, WeatherKind,
    };

    use super::*;

    #[test]
    fn parses_monsters_with_evolution_and_explicit_chance() {
        let source = r#"(
            monsters: [
                (
                    id: "shadow-alpha",
                    name: "Shadow Alpha",
                    biome: "forest",
                    level: 25,
                    hunt_time_secs: 60,
                    drops: [
                        (item: "alpha-pelt", quantity: 1, rarity: epic, chance_pct: Some(5)),
                        (item: "alpha-essence", quantity: 2, rarity: rare),
                    ],
                    gold_reward: 400,
                    xp_reward: 130,
                    evolution: Some((from: "shadow-wolf", requirement: Kills(50))),
                ),
            ],
        )"#;

        let monsters = MonsterLoader::parse(source).unwrap();
        assert_eq!(monsters.len(), 1);
        let alpha = &monsters[0];
        assert_eq!(alpha.drops[0].chance(), 5);
        assert_eq!(alpha.drops[1].chance(), Rarity::Rare.base_drop_chance_pct());
        let evolution = alpha.evolution.as_ref().unwrap();
        assert_eq!(evolution.from.as_str(), "shadow-wolf");
        assert_eq!(evolution.requirement, EvolutionRequirement::Kills(50));
    }

    #[test]
    fn parses_equipment_with_stats() {
        let source = r#"(
            items: [
                (
                    id: "shadow-blade",
                    name: "Shadow Blade",
                    rarity: epic,
                    category: equipment(weapon),
                    stats: [
                        (stat: attack_speed, value: 25),
                        (stat: crit_chance, value: 15),
                    ],
                ),
                (id: "herb", name: "Herb", rarity: common),
            ],
        )"#;

        let items = ItemLoader::parse(source).unwrap();
        assert_eq!(
            items[0].category,
            ItemCategory::Equipment(EquipmentSlot::Weapon)
        );
        assert_eq!(items[0].stats[0].stat, StatKind::AttackSpeed);
        assert_eq!(items[1].category, ItemCategory::Material);
        assert!(items[1].stats.is_empty());
    }

    #[test]
    fn weather_effects_default_to_neutral() {
        let source = r#"(
            weather: [
                (kind: clear, name: "Clear Skies", duration_secs: 300, weight: 40),
                (
                    kind: heat_wave,
                    name: "Heat Wave",
                    effects: (hunt_time_pct: 90, stamina_cost_pct: 150),
                    duration_secs: 150,
                    weight: 12,
                ),
            ],
        )"#;

        let weather = WeatherLoader::parse(source).unwrap();
        assert_eq!(weather[0].effects.hunt_time_pct, 100);
        assert_eq!(weather[1].kind, WeatherKind::HeatWave);
        assert_eq!(weather[1].effects.hunt_time_pct, 90);
        assert_eq!(weather[1].effects.loot_pct, 100);
    }

    #[test]
    fn parses_quests_with_mixed_objectives() {
        let source = r#"(
            quests: [
                (
                    id: "skill-mastery",
                    title: "Skill Mastery Test",
                    description: "Show your growth.",
                    giver: "elder-maya",
                    objectives: [
                        (kind: Skill(attack_speed), required: 5),
                        (kind: Collect("herb"), required: 3),
                    ],
                    rewards: (gold: 3000, xp: 2000, reputation: Some((crystal_wardens, 300))),
                    time_limit_secs: Some(10800),
                    required_level: 10,
                ),
            ],
        )"#;

        let quests = QuestLoader::parse(source).unwrap();
        let quest = &quests[0];
        assert_eq!(
            quest.objectives[0].kind,
            ObjectiveKind::Skill(SkillKind::AttackSpeed)
        );
        assert_eq!(quest.rewards.reputation, Some((Faction::CrystalWardens, 300)));
        assert!(quest.rewards.items.is_empty());
    }

    #[test]
    fn reports_the_failing_kind() {
        let err = RecipeLoader::parse("(recipes: [oops])").unwrap_err();
        assert!(err.to_string().contains("recipe"), "{err}");
    }
}
