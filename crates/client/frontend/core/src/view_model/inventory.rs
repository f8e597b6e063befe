//! Inventory grid, equipped gear and gear upgrading.
use arrayvec::ArrayVec;
use strum::IntoEnumIterator;

use game_core::rewards::{upgrade_cost, upgrade_success_pct};
use game_core::{
    EquipmentBonus, EquipmentSlot, InventoryItem, ItemCategory, ItemKey, Rarity, equipment_bonus,
};

use super::PanelContext;

/// Cells in the inventory grid (6 columns by 4 rows).
pub const INVENTORY_SLOTS: usize = 24;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InventoryView {
    /// Always [`INVENTORY_SLOTS`] cells; stacks beyond the grid are counted
    /// in `overflow`.
    pub slots: ArrayVec<Option<ItemCell>, INVENTORY_SLOTS>,
    pub overflow: usize,
    pub equipped: Vec<EquippedRow>,
    pub bonus: EquipmentBonus,
    pub gold: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemCell {
    pub key: ItemKey,
    pub name: String,
    pub rarity: Rarity,
    pub quantity: u32,
    pub category: ItemCategory,
    pub upgrade_level: u8,
    pub equippable: bool,
}

impl From<&InventoryItem> for ItemCell {
    fn from(item: &InventoryItem) -> Self {
        Self {
            key: item.key(),
            name: item.name.clone(),
            rarity: item.rarity,
            quantity: item.quantity,
            category: item.category,
            upgrade_level: item.upgrade_level,
            equippable: item.is_equipment(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EquippedRow {
    pub slot: EquipmentSlot,
    pub item: Option<ItemCell>,
}

impl InventoryView {
    pub(super) fn build(ctx: &PanelContext<'_>) -> Self {
        let state = ctx.state;
        let items = state.inventory.as_slice();

        let mut slots: ArrayVec<Option<ItemCell>, INVENTORY_SLOTS> = items
            .iter()
            .take(INVENTORY_SLOTS)
            .map(|item| Some(ItemCell::from(item)))
            .collect();
        while !slots.is_full() {
            slots.push(None);
        }

        let equipment = &state.profile.equipment;
        let equipped = EquipmentSlot::iter()
            .map(|slot| EquippedRow {
                slot,
                item: equipment.get(slot).map(ItemCell::from),
            })
            .collect();

        Self {
            slots,
            overflow: items.len().saturating_sub(INVENTORY_SLOTS),
            equipped,
            bonus: equipment_bonus(equipment),
            gold: state.gold,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpgradeView {
    pub gold: u64,
    pub candidates: Vec<UpgradeRow>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpgradeRow {
    pub item: ItemCell,
    pub next_rarity: Rarity,
    pub cost: u64,
    pub success_pct: u32,
    pub affordable: bool,
}

impl UpgradeView {
    /// Equipment in the inventory that can still be upgraded. Gear must be
    /// unequipped before upgrading.
    pub(super) fn build(ctx: &PanelContext<'_>) -> Self {
        let gold = ctx.state.gold;
        let candidates = ctx
            .state
            .inventory
            .iter()
            .filter(|item| item.is_equipment())
            .filter_map(|item| {
                let next_rarity = item.rarity.next()?;
                let cost = upgrade_cost(item.rarity)?;
                let success_pct = upgrade_success_pct(item.rarity)?;
                Some(UpgradeRow {
                    item: ItemCell::from(item),
                    next_rarity,
                    cost,
                    success_pct,
                    affordable: gold >= cost,
                })
            })
            .collect();

        Self { gold, candidates }
    }
}
