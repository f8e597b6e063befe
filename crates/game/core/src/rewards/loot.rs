use crate::config::GameConfig;
use crate::env::{DropEntry, RngOracle, WeatherEffects, compute_seed};
use crate::state::{Difficulty, ItemId, Rarity};

use super::streams;

/// Items dropped by one roll, or the total for one item across a hunt.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LootDrop {
    pub item: ItemId,
    pub rarity: Rarity,
    pub quantity: u32,
}

/// Drops of a single kill (kills are numbered from 0).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KillDrops {
    pub kill: u32,
    pub drops: Vec<LootDrop>,
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LootResult {
    pub per_kill: Vec<KillDrops>,
    /// Per-kill drops summed per item and rarity, in first-drop order.
    pub consolidated: Vec<LootDrop>,
}

impl LootResult {
    pub fn is_empty(&self) -> bool {
        self.consolidated.is_empty()
    }

    pub fn total_of(&self, item: &ItemId) -> u32 {
        self.consolidated
            .iter()
            .filter(|drop| &drop.item == item)
            .map(|drop| drop.quantity)
            .sum()
    }
}

/// Effective drop rate multiplier of a hunt, in percent.
///
/// Resource gathering levels, gear and a fully explored biome add to a base
/// of 100; difficulty and weather scale the sum.
pub fn drop_rate_pct(
    gathering_level: u32,
    gear_drop_rate: u32,
    biome_explored: bool,
    difficulty: Difficulty,
    weather: &WeatherEffects,
    config: &GameConfig,
) -> u32 {
    let explored = if biome_explored {
        config.explored_biome_drop_bonus_pct
    } else {
        0
    };
    let base = 100 + gathering_level * config.drop_rate_pct_per_skill_level + gear_drop_rate + explored;
    base * difficulty.drop_pct() / 100 * weather.loot_pct / 100
}

/// Rolls every drop entry once per kill.
///
/// Each trial succeeds with `chance * drop_rate_pct / 100` percent (capped
/// at 100). A successful trial yields the entry quantity scaled by the same
/// multiplier, at least one.
pub fn roll_loot<R>(
    rng: &R,
    seed: u64,
    drops: &[DropEntry],
    kills: u32,
    drop_rate_pct: u32,
) -> LootResult
where
    R: RngOracle + ?Sized,
{
    let mut result = LootResult::default();
    for kill in 0..kills {
        let mut kill_drops = Vec::new();
        for (index, entry) in drops.iter().enumerate() {
            let roll_seed = compute_seed(seed, u64::from(kill), streams::LOOT, index as u32);
            let chance = (entry.chance() * drop_rate_pct / 100).min(100);
            if !rng.chance(roll_seed, chance) {
                continue;
            }
            let quantity = (entry.quantity * drop_rate_pct / 100).max(1);
            kill_drops.push(LootDrop {
                item: entry.item.clone(),
                rarity: entry.rarity,
                quantity,
            });
        }

        for drop in &kill_drops {
            match result
                .consolidated
                .iter_mut()
                .find(|total| total.item == drop.item && total.rarity == drop.rarity)
            {
                Some(total) => total.quantity += drop.quantity,
                None => result.consolidated.push(drop.clone()),
            }
        }
        result.per_kill.push(KillDrops {
            kill,
            drops: kill_drops,
        });
    }
    result
}
