use crate::env::{GameEnv, OracleError, Recipe};
use crate::state::{GameState, InventoryItem, RecipeId};

use super::{ActionError, ActionTransition};

/// Consumes recipe materials and produces the result item.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CraftAction {
    pub recipe: RecipeId,
}

impl CraftAction {
    pub fn new(recipe: impl Into<RecipeId>) -> Self {
        Self {
            recipe: recipe.into(),
        }
    }

    fn recipe<'e>(&self, env: &GameEnv<'e>) -> Result<&'e Recipe, ActionError> {
        let recipe = env
            .catalog()?
            .recipe(&self.recipe)
            .ok_or_else(|| OracleError::RecipeNotFound(self.recipe.clone()))?;
        Ok(recipe)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CraftOutcome {
    pub recipe: RecipeId,
    pub item: InventoryItem,
}

impl ActionTransition for CraftAction {
    type Error = ActionError;
    type Result = CraftOutcome;

    fn pre_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let recipe = self.recipe(env)?;
        env.catalog()?
            .item(&recipe.result)
            .ok_or_else(|| OracleError::ItemNotFound(recipe.result.clone()))?;

        if state.profile.level < recipe.required_level {
            return Err(ActionError::LevelTooLow {
                required: recipe.required_level,
                current: state.profile.level,
            });
        }
        for material in &recipe.materials {
            let available = state.inventory.quantity_of(&material.item);
            if available < material.quantity {
                return Err(ActionError::MissingMaterials {
                    item: material.item.clone(),
                    required: material.quantity,
                    available,
                });
            }
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<CraftOutcome, Self::Error> {
        let recipe = self.recipe(env)?;
        let definition = env
            .catalog()?
            .item(&recipe.result)
            .ok_or_else(|| OracleError::ItemNotFound(recipe.result.clone()))?;

        for material in &recipe.materials {
            let removed = state.inventory.remove(&material.item, material.quantity);
            if removed < material.quantity {
                return Err(ActionError::MissingMaterials {
                    item: material.item.clone(),
                    required: material.quantity,
                    available: removed,
                });
            }
        }

        let item = definition.instantiate(recipe.result_quantity);
        state.inventory.add(item.clone());
        state.profile.counters.items_crafted += u64::from(recipe.result_quantity);

        tracing::debug!(recipe = %self.recipe, item = %item.id, quantity = item.quantity, "crafted");
        Ok(CraftOutcome {
            recipe: self.recipe.clone(),
            item,
        })
    }
}
