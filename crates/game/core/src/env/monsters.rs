//! Monster and biome definitions.

use crate::state::{BiomeId, ItemId, MonsterId, PlayerProfile, Rarity};

/// A themed monster habitat.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BiomeDefinition {
    pub id: BiomeId,
    pub name: String,
    /// Theme colour name used by renderers.
    pub color: String,
}

/// One line of a monster's drop table.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DropEntry {
    pub item: ItemId,
    pub quantity: u32,
    pub rarity: Rarity,
    /// Explicit drop chance in percent; falls back to the rarity default.
    #[cfg_attr(feature = "serde", serde(default))]
    pub chance_pct: Option<u32>,
}

impl DropEntry {
    pub fn chance(&self) -> u32 {
        self.chance_pct
            .unwrap_or_else(|| self.rarity.base_drop_chance_pct())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EvolutionRequirement {
    /// Defeats of the parent monster.
    Kills(u32),
    PlayerLevel(u32),
}

/// Link from an evolved monster to the monster it evolves from.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Evolution {
    pub from: MonsterId,
    pub requirement: EvolutionRequirement,
}

impl Evolution {
    pub fn is_met(&self, profile: &PlayerProfile) -> bool {
        match self.requirement {
            EvolutionRequirement::Kills(required) => {
                profile.counters.defeated(&self.from) >= required
            }
            EvolutionRequirement::PlayerLevel(required) => profile.level >= required,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonsterTemplate {
    pub id: MonsterId,
    pub name: String,
    pub biome: BiomeId,
    pub level: u32,
    pub hunt_time_secs: u32,
    pub drops: Vec<DropEntry>,
    pub gold_reward: u64,
    pub xp_reward: u64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub evolution: Option<Evolution>,
}

impl MonsterTemplate {
    pub fn base_hunt_ms(&self) -> u64 {
        u64::from(self.hunt_time_secs) * 1_000
    }

    pub fn is_evolved(&self) -> bool {
        self.evolution.is_some()
    }

    /// Base monsters are always available; evolved ones once their
    /// requirement is met.
    pub fn is_unlocked(&self, profile: &PlayerProfile) -> bool {
        self.evolution
            .as_ref()
            .is_none_or(|evolution| evolution.is_met(profile))
    }
}
