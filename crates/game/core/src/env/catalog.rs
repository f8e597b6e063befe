use crate::state::{BiomeId, ItemId, MonsterId, RecipeId};

use super::{BiomeDefinition, ItemDefinition, MonsterTemplate, Recipe};

/// Read-only access to biomes, monsters, items and recipes.
pub trait CatalogOracle: Send + Sync {
    fn biomes(&self) -> &[BiomeDefinition];

    fn monsters(&self) -> &[MonsterTemplate];

    fn items(&self) -> &[ItemDefinition];

    fn recipes(&self) -> &[Recipe];

    fn biome(&self, id: &BiomeId) -> Option<&BiomeDefinition> {
        self.biomes().iter().find(|biome| &biome.id == id)
    }

    fn monster(&self, id: &MonsterId) -> Option<&MonsterTemplate> {
        self.monsters().iter().find(|monster| &monster.id == id)
    }

    fn item(&self, id: &ItemId) -> Option<&ItemDefinition> {
        self.items().iter().find(|item| &item.id == id)
    }

    fn recipe(&self, id: &RecipeId) -> Option<&Recipe> {
        self.recipes().iter().find(|recipe| &recipe.id == id)
    }

    /// Monsters living in a biome, in catalog order.
    fn monsters_in<'a>(&'a self, biome: &BiomeId) -> Vec<&'a MonsterTemplate> {
        self.monsters()
            .iter()
            .filter(|monster| &monster.biome == biome)
            .collect()
    }
}
