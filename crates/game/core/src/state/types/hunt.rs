//! Hunt bookkeeping: difficulty tiers, running hunts and finished records.

use super::{BiomeId, HuntId, InventoryItem, MonsterId};

/// Hunt difficulty chosen when a hunt starts.
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
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
    Nightmare,
}

impl Difficulty {
    /// Hunt duration relative to the monster's base time, in percent.
    pub const fn time_pct(self) -> u32 {
        match self {
            Self::Easy => 75,
            Self::Normal => 100,
            Self::Hard => 140,
            Self::Nightmare => 200,
        }
    }

    /// Inclusive kill range before bonuses.
    pub const fn kill_range(self) -> (u32, u32) {
        match self {
            Self::Easy => (1, 1),
            Self::Normal => (1, 2),
            Self::Hard => (2, 3),
            Self::Nightmare => (3, 5),
        }
    }

    /// Gold and xp multiplier, in percent.
    pub const fn reward_pct(self) -> u32 {
        match self {
            Self::Easy => 75,
            Self::Normal => 100,
            Self::Hard => 140,
            Self::Nightmare => 200,
        }
    }

    /// Drop rate multiplier, in percent.
    pub const fn drop_pct(self) -> u32 {
        match self {
            Self::Easy => 90,
            Self::Normal => 100,
            Self::Hard => 125,
            Self::Nightmare => 150,
        }
    }
}

/// A hunt in progress.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActiveHunt {
    pub id: HuntId,
    pub monster: MonsterId,
    pub biome: BiomeId,
    pub difficulty: Difficulty,
    pub started_at_ms: u64,
    pub duration_ms: u64,
    pub stamina_spent: u32,
}

impl ActiveHunt {
    pub fn ends_at_ms(&self) -> u64 {
        self.started_at_ms + self.duration_ms
    }

    pub fn is_due(&self, now_ms: u64) -> bool {
        now_ms >= self.ends_at_ms()
    }

    pub fn remaining_ms(&self, now_ms: u64) -> u64 {
        self.ends_at_ms().saturating_sub(now_ms)
    }

    /// Elapsed share of the hunt, in percent.
    pub fn progress_pct(&self, now_ms: u64) -> u32 {
        if self.duration_ms == 0 {
            return 100;
        }
        let elapsed = now_ms.saturating_sub(self.started_at_ms).min(self.duration_ms);
        (elapsed * 100 / self.duration_ms) as u32
    }
}

/// A finished hunt, as shown in the hunt history.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HuntRecord {
    pub id: HuntId,
    pub monster: MonsterId,
    pub monster_name: String,
    pub difficulty: Difficulty,
    pub kills: u32,
    pub gold: u64,
    pub xp: u64,
    pub loot: Vec<InventoryItem>,
    pub duration_ms: u64,
    pub completed_at_ms: u64,
}
