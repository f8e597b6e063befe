//! Item definitions and crafting recipes.

use crate::state::{InventoryItem, ItemCategory, ItemId, ItemStack, Rarity, RecipeId, StatModifier};

/// Static description of an item. Stacks in the inventory are instantiated
/// from it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDefinition {
    pub id: ItemId,
    pub name: String,
    pub rarity: Rarity,
    #[cfg_attr(feature = "serde", serde(default))]
    pub category: ItemCategory,
    #[cfg_attr(feature = "serde", serde(default))]
    pub stats: Vec<StatModifier>,
}

impl ItemDefinition {
    /// Builds a stack of this item at its default rarity.
    pub fn instantiate(&self, quantity: u32) -> InventoryItem {
        self.instantiate_as(self.rarity, quantity)
    }

    /// Builds a stack at an explicit rarity (drop tables may override it).
    pub fn instantiate_as(&self, rarity: Rarity, quantity: u32) -> InventoryItem {
        InventoryItem {
            id: self.id.clone(),
            name: self.name.clone(),
            rarity,
            quantity,
            category: self.category,
            stats: self.stats.clone(),
            upgrade_level: 0,
        }
    }
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display, strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RecipeCategory {
    Weapon,
    Armor,
    Accessory,
    Consumable,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
    pub category: RecipeCategory,
    pub result: ItemId,
    pub result_quantity: u32,
    pub materials: Vec<ItemStack>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub required_level: u32,
}
