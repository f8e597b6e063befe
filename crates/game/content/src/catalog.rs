//! In-memory content catalog implementing every `game-core` oracle.

use std::collections::BTreeSet;

use game_core::{
    AchievementDefinition, BiomeDefinition, CatalogOracle, EconomyOracle, ItemDefinition, ItemId,
    MarketListing, MonsterTemplate, ObjectiveKind, ProgressionOracle, QuestGiver, QuestTemplate,
    Recipe, WeatherDefinition, WeatherOracle,
};

/// Static content of one game world.
///
/// Content never changes while a session runs; the runtime shares a single
/// catalog behind an `Arc` and builds [`game_core::GameEnv`] views over it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ContentCatalog {
    pub biomes: Vec<BiomeDefinition>,
    pub monsters: Vec<MonsterTemplate>,
    pub items: Vec<ItemDefinition>,
    pub recipes: Vec<Recipe>,
    pub listings: Vec<MarketListing>,
    pub weather: Vec<WeatherDefinition>,
    pub quests: Vec<QuestTemplate>,
    pub quest_givers: Vec<QuestGiver>,
    pub achievements: Vec<AchievementDefinition>,
}

impl ContentCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Describes every reference that points at missing content.
    ///
    /// An empty list means the catalog is self-consistent: drop tables,
    /// recipes, listings and quest rewards only name known items, monsters
    /// live in known biomes and evolve from known monsters, and quests
    /// reference known givers and monsters.
    pub fn dangling_references(&self) -> Vec<String> {
        let items: BTreeSet<&str> = self.items.iter().map(|item| item.id.as_str()).collect();
        let biomes: BTreeSet<&str> = self.biomes.iter().map(|biome| biome.id.as_str()).collect();
        let monsters: BTreeSet<&str> = self
            .monsters
            .iter()
            .map(|monster| monster.id.as_str())
            .collect();
        let givers: BTreeSet<&str> = self
            .quest_givers
            .iter()
            .map(|giver| giver.id.as_str())
            .collect();

        let mut problems = Vec::new();
        let check_item = |owner: String, item: &ItemId, problems: &mut Vec<String>| {
            if !items.contains(item.as_str()) {
                problems.push(format!("{owner} references unknown item '{item}'"));
            }
        };

        for monster in &self.monsters {
            if !biomes.contains(monster.biome.as_str()) {
                problems.push(format!(
                    "monster '{}' lives in unknown biome '{}'",
                    monster.id, monster.biome
                ));
            }
            if let Some(evolution) = &monster.evolution {
                if !monsters.contains(evolution.from.as_str()) {
                    problems.push(format!(
                        "monster '{}' evolves from unknown monster '{}'",
                        monster.id, evolution.from
                    ));
                }
            }
            for drop in &monster.drops {
                check_item(format!("monster '{}'", monster.id), &drop.item, &mut problems);
            }
        }

        for recipe in &self.recipes {
            check_item(format!("recipe '{}'", recipe.id), &recipe.result, &mut problems);
            for material in &recipe.materials {
                check_item(format!("recipe '{}'", recipe.id), &material.item, &mut problems);
            }
        }

        for listing in &self.listings {
            check_item(format!("listing '{}'", listing.id), &listing.item, &mut problems);
        }

        for quest in &self.quests {
            if !givers.contains(quest.giver.as_str()) {
                problems.push(format!(
                    "quest '{}' is given by unknown npc '{}'",
                    quest.id, quest.giver
                ));
            }
            for objective in &quest.objectives {
                match &objective.kind {
                    ObjectiveKind::Kill(monster) if !monsters.contains(monster.as_str()) => {
                        problems.push(format!(
                            "quest '{}' targets unknown monster '{monster}'",
                            quest.id
                        ));
                    }
                    ObjectiveKind::Collect(item) => {
                        check_item(format!("quest '{}'", quest.id), item, &mut problems);
                    }
                    _ => {}
                }
            }
            for reward in &quest.rewards.items {
                check_item(format!("quest '{}'", quest.id), &reward.item, &mut problems);
            }
        }

        problems
    }
}

impl CatalogOracle for ContentCatalog {
    fn biomes(&self) -> &[BiomeDefinition] {
        &self.biomes
    }

    fn monsters(&self) -> &[MonsterTemplate] {
        &self.monsters
    }

    fn items(&self) -> &[ItemDefinition] {
        &self.items
    }

    fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }
}

impl EconomyOracle for ContentCatalog {
    fn listings(&self) -> &[MarketListing] {
        &self.listings
    }
}

impl WeatherOracle for ContentCatalog {
    fn weather_table(&self) -> &[WeatherDefinition] {
        &self.weather
    }
}

impl ProgressionOracle for ContentCatalog {
    fn quests(&self) -> &[QuestTemplate] {
        &self.quests
    }

    fn quest_givers(&self) -> &[QuestGiver] {
        &self.quest_givers
    }

    fn achievements(&self) -> &[AchievementDefinition] {
        &self.achievements
    }
}
