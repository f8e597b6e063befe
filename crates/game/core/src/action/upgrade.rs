use crate::env::GameEnv;
use crate::rewards::{roll_upgrade, streams, upgrade_cost, upgraded_item};
use crate::state::{GameState, InventoryItem, ItemKey};

use super::{ActionError, ActionTransition};

/// Attempts to raise an inventory equipment item to the next rarity.
///
/// Gold and the item are consumed before the roll. A failed roll destroys the
/// item without refund.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UpgradeGearAction {
    pub item: ItemKey,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UpgradeOutcome {
    pub item: ItemKey,
    pub cost: u64,
    /// The upgraded item, or `None` when the attempt failed.
    pub upgraded: Option<InventoryItem>,
}

impl UpgradeOutcome {
    pub fn succeeded(&self) -> bool {
        self.upgraded.is_some()
    }
}

impl UpgradeGearAction {
    fn cost(&self, state: &GameState) -> Result<u64, ActionError> {
        let item = state
            .inventory
            .get(&self.item)
            .ok_or_else(|| ActionError::ItemNotOwned(self.item.clone()))?;
        if !item.is_equipment() {
            return Err(ActionError::NotUpgradeable(self.item.clone()));
        }
        upgrade_cost(item.rarity).ok_or_else(|| ActionError::NotUpgradeable(self.item.clone()))
    }
}

impl ActionTransition for UpgradeGearAction {
    type Error = ActionError;
    type Result = UpgradeOutcome;

    fn pre_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        env.rng()?;
        let cost = self.cost(state)?;
        if state.gold < cost {
            return Err(ActionError::InsufficientGold {
                required: cost,
                available: state.gold,
            });
        }
        Ok(())
    }

    fn apply(
        &self,
        state: &mut GameState,
        env: &GameEnv<'_>,
    ) -> Result<UpgradeOutcome, Self::Error> {
        let rng = env.rng()?;
        let cost = self.cost(state)?;
        if !state.spend_gold(cost) {
            return Err(ActionError::InsufficientGold {
                required: cost,
                available: state.gold,
            });
        }
        let item = state
            .inventory
            .take_one(&self.item)
            .ok_or_else(|| ActionError::ItemNotOwned(self.item.clone()))?;

        let upgraded = if roll_upgrade(rng, state.roll_seed(streams::UPGRADE, 0), item.rarity) {
            upgraded_item(&item)
        } else {
            None
        };
        if let Some(upgraded) = &upgraded {
            state.inventory.add(upgraded.clone());
        }

        tracing::debug!(
            item = %self.item,
            cost,
            success = upgraded.is_some(),
            "upgrade attempted"
        );
        Ok(UpgradeOutcome {
            item: self.item.clone(),
            cost,
            upgraded,
        })
    }
}
