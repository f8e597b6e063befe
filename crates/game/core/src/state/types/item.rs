//! Item-related state types.
//!
//! This module contains the value types carried in inventories, equipment
//! slots, drop tables and rewards:
//! - Rarity: ordered quality tier
//! - ItemCategory / EquipmentSlot: what an item is and where it is worn
//! - StatModifier: flat stat bonus granted by equipment
//! - InventoryItem: a concrete stack owned by the player

use super::ItemId;

/// Ordered quality tier: common < uncommon < rare < epic < legendary.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Rarity {
    #[default]
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    /// Drop chance used when a drop entry does not specify one, in percent.
    pub const fn base_drop_chance_pct(self) -> u32 {
        match self {
            Self::Common => 80,
            Self::Uncommon => 50,
            Self::Rare => 25,
            Self::Epic => 10,
            Self::Legendary => 3,
        }
    }

    /// Tier reached by a successful upgrade. `None` for legendary.
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Common => Some(Self::Uncommon),
            Self::Uncommon => Some(Self::Rare),
            Self::Rare => Some(Self::Epic),
            Self::Epic => Some(Self::Legendary),
            Self::Legendary => None,
        }
    }
}

/// Slot an equipment item occupies.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum EquipmentSlot {
    Weapon,
    Armor,
    Accessory,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ItemCategory {
    #[default]
    Material,
    Equipment(EquipmentSlot),
    Consumable,
}

/// Stat affected by an equipment modifier.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StatKind {
    AttackSpeed,
    HuntSpeed,
    CritChance,
    Defense,
    StaminaRegen,
    DropRate,
    MultiKill,
}

impl StatKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::AttackSpeed => "attack speed",
            Self::HuntSpeed => "hunt speed",
            Self::CritChance => "crit chance",
            Self::Defense => "defense",
            Self::StaminaRegen => "stamina regen",
            Self::DropRate => "drop rate",
            Self::MultiKill => "multi kill",
        }
    }

    /// Whether the value reads as a percentage in tooltips.
    pub const fn is_percentage(self) -> bool {
        !matches!(self, Self::Defense | Self::MultiKill)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatModifier {
    pub stat: StatKind,
    pub value: u32,
}

impl StatModifier {
    pub const fn new(stat: StatKind, value: u32) -> Self {
        Self { stat, value }
    }
}

/// Identity of a stack: items merge only when all three parts match.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemKey {
    pub id: ItemId,
    pub rarity: Rarity,
    pub level: u8,
}

impl ItemKey {
    pub fn new(id: impl Into<ItemId>, rarity: Rarity, level: u8) -> Self {
        Self {
            id: id.into(),
            rarity,
            level,
        }
    }
}

impl core::fmt::Display for ItemKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.level > 0 {
            write!(f, "{} ({}, +{})", self.id, self.rarity, self.level)
        } else {
            write!(f, "{} ({})", self.id, self.rarity)
        }
    }
}

/// Item id paired with a quantity; used by recipes, quests and rewards.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemStack {
    pub item: ItemId,
    pub quantity: u32,
}

impl ItemStack {
    pub fn new(item: impl Into<ItemId>, quantity: u32) -> Self {
        Self {
            item: item.into(),
            quantity,
        }
    }
}

/// A concrete stack held by the player.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventoryItem {
    pub id: ItemId,
    pub name: String,
    pub rarity: Rarity,
    pub quantity: u32,
    pub category: ItemCategory,
    #[cfg_attr(feature = "serde", serde(default))]
    pub stats: Vec<StatModifier>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub upgrade_level: u8,
}

impl InventoryItem {
    pub fn key(&self) -> ItemKey {
        ItemKey {
            id: self.id.clone(),
            rarity: self.rarity,
            level: self.upgrade_level,
        }
    }

    pub fn matches(&self, key: &ItemKey) -> bool {
        self.id == key.id && self.rarity == key.rarity && self.upgrade_level == key.level
    }

    /// Sum of all modifiers of the given kind.
    pub fn stat(&self, kind: StatKind) -> u32 {
        self.stats
            .iter()
            .filter(|modifier| modifier.stat == kind)
            .map(|modifier| modifier.value)
            .sum()
    }

    pub fn slot(&self) -> Option<EquipmentSlot> {
        match self.category {
            ItemCategory::Equipment(slot) => Some(slot),
            _ => None,
        }
    }

    pub fn is_equipment(&self) -> bool {
        self.slot().is_some()
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }
}
