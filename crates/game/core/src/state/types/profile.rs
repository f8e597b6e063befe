//! Character profile: level, equipped gear, lifetime counters and standing.

use std::collections::{BTreeMap, BTreeSet};

use super::{EquipmentSlot, InventoryItem, MonsterId};

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
#[strum(serialize_all = "kebab-case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Faction {
    ShadowHunters,
    CrystalWardens,
    NaturesGuard,
    #[default]
    Independent,
}

impl Faction {
    pub const fn label(self) -> &'static str {
        match self {
            Self::ShadowHunters => "Shadow Hunters",
            Self::CrystalWardens => "Crystal Wardens",
            Self::NaturesGuard => "Nature's Guard",
            Self::Independent => "Independent",
        }
    }
}

/// Named standing derived from raw reputation points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, strum::Display)]
pub enum ReputationTier {
    Hostile,
    Neutral,
    Friendly,
    Honored,
    Exalted,
}

impl ReputationTier {
    pub fn from_points(points: i64) -> Self {
        match points {
            i64::MIN..=-1 => Self::Hostile,
            0..=99 => Self::Neutral,
            100..=499 => Self::Friendly,
            500..=999 => Self::Honored,
            _ => Self::Exalted,
        }
    }
}

/// Gear worn by the player. Only equipped items contribute bonuses.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Equipment {
    pub weapon: Option<InventoryItem>,
    pub armor: Option<InventoryItem>,
    pub accessory: Option<InventoryItem>,
}

impl Equipment {
    pub fn get(&self, slot: EquipmentSlot) -> Option<&InventoryItem> {
        match slot {
            EquipmentSlot::Weapon => self.weapon.as_ref(),
            EquipmentSlot::Armor => self.armor.as_ref(),
            EquipmentSlot::Accessory => self.accessory.as_ref(),
        }
    }

    fn slot_mut(&mut self, slot: EquipmentSlot) -> &mut Option<InventoryItem> {
        match slot {
            EquipmentSlot::Weapon => &mut self.weapon,
            EquipmentSlot::Armor => &mut self.armor,
            EquipmentSlot::Accessory => &mut self.accessory,
        }
    }

    /// Puts `item` into `slot`, returning whatever was there before.
    pub fn replace(&mut self, slot: EquipmentSlot, item: InventoryItem) -> Option<InventoryItem> {
        self.slot_mut(slot).replace(item)
    }

    pub fn take(&mut self, slot: EquipmentSlot) -> Option<InventoryItem> {
        self.slot_mut(slot).take()
    }

    pub fn iter(&self) -> impl Iterator<Item = &InventoryItem> {
        [&self.weapon, &self.armor, &self.accessory]
            .into_iter()
            .flatten()
    }
}

/// Lifetime statistics feeding achievements and the profile panel.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Counters {
    pub hunts_completed: u64,
    pub monsters_defeated: BTreeMap<MonsterId, u32>,
    pub total_defeated: u64,
    pub gold_earned: u64,
    pub items_crafted: u64,
    pub hunting_ms: u64,
}

impl Counters {
    pub fn defeated(&self, monster: &MonsterId) -> u32 {
        self.monsters_defeated.get(monster).copied().unwrap_or(0)
    }

    pub fn record_kills(&mut self, monster: &MonsterId, kills: u32) {
        *self.monsters_defeated.entry(monster.clone()).or_default() += kills;
        self.total_defeated += u64::from(kills);
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerProfile {
    pub name: String,
    pub faction: Faction,
    pub level: u32,
    pub xp: u64,
    pub xp_to_next_level: u64,
    pub equipment: Equipment,
    pub counters: Counters,
    pub reputation: BTreeMap<Faction, i64>,
    pub auto_hunt: BTreeSet<MonsterId>,
}

impl PlayerProfile {
    pub fn new(name: impl Into<String>, faction: Faction, xp_to_next_level: u64) -> Self {
        Self {
            name: name.into(),
            faction,
            level: 1,
            xp: 0,
            xp_to_next_level,
            equipment: Equipment::default(),
            counters: Counters::default(),
            reputation: BTreeMap::new(),
            auto_hunt: BTreeSet::new(),
        }
    }

    /// Adds experience and levels up while the threshold is reached.
    ///
    /// Each level-up carries the excess over and grows the next threshold by
    /// `growth_pct`. Returns the number of levels gained.
    pub fn gain_xp(&mut self, amount: u64, growth_pct: u64) -> u32 {
        self.xp = self.xp.saturating_add(amount);
        let mut gained = 0;
        while self.xp_to_next_level > 0 && self.xp >= self.xp_to_next_level {
            self.xp -= self.xp_to_next_level;
            self.level += 1;
            self.xp_to_next_level = self.xp_to_next_level * growth_pct / 100;
            gained += 1;
        }
        gained
    }

    pub fn reputation_with(&self, faction: Faction) -> i64 {
        self.reputation.get(&faction).copied().unwrap_or(0)
    }

    pub fn add_reputation(&mut self, faction: Faction, amount: i64) {
        *self.reputation.entry(faction).or_default() += amount;
    }

    pub fn reputation_tier(&self, faction: Faction) -> ReputationTier {
        ReputationTier::from_points(self.reputation_with(faction))
    }
}

impl Default for PlayerProfile {
    fn default() -> Self {
        Self::new("Hunter", Faction::default(), 1_000)
    }
}
