use crate::env::GameEnv;
use crate::state::{EquipmentSlot, GameState, InventoryItem, ItemKey};

use super::{ActionError, ActionTransition};

/// Moves one unit of an equipment item from the inventory into its slot.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquipAction {
    pub item: ItemKey,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquipChange {
    pub slot: EquipmentSlot,
    pub equipped: Option<InventoryItem>,
    /// Item moved back to the inventory.
    pub returned: Option<InventoryItem>,
}

impl ActionTransition for EquipAction {
    type Error = ActionError;
    type Result = EquipChange;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let item = state
            .inventory
            .get(&self.item)
            .ok_or_else(|| ActionError::ItemNotOwned(self.item.clone()))?;
        if !item.is_equipment() {
            return Err(ActionError::NotEquipment(self.item.clone()));
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, _env: &GameEnv<'_>) -> Result<EquipChange, Self::Error> {
        let item = state
            .inventory
            .take_one(&self.item)
            .ok_or_else(|| ActionError::ItemNotOwned(self.item.clone()))?;
        let slot = item
            .slot()
            .ok_or_else(|| ActionError::NotEquipment(self.item.clone()))?;

        let returned = state.profile.equipment.replace(slot, item.clone());
        if let Some(previous) = &returned {
            state.inventory.add(previous.clone());
        }

        tracing::debug!(item = %self.item, %slot, "equipped");
        Ok(EquipChange {
            slot,
            equipped: Some(item),
            returned,
        })
    }
}

/// Moves the item in a slot back to the inventory.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnequipAction {
    pub slot: EquipmentSlot,
}

impl ActionTransition for UnequipAction {
    type Error = ActionError;
    type Result = EquipChange;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        if state.profile.equipment.get(self.slot).is_none() {
            return Err(ActionError::SlotEmpty(self.slot));
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, _env: &GameEnv<'_>) -> Result<EquipChange, Self::Error> {
        let item = state
            .profile
            .equipment
            .take(self.slot)
            .ok_or(ActionError::SlotEmpty(self.slot))?;
        state.inventory.add(item.clone());
        Ok(EquipChange {
            slot: self.slot,
            equipped: None,
            returned: Some(item),
        })
    }
}
