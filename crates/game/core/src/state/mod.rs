//! Authoritative game state representation.
//!
//! This module owns the data structures that describe the player, their
//! inventory, hunts, world and quest progress. Runtime layers clone or query
//! this state but mutate it exclusively through the engine.
pub mod types;

use std::collections::VecDeque;

pub use types::{
    AchievementId, AchievementLog, ActiveHunt, ActiveQuest, BiomeId, BiomeWeather, Counters,
    Difficulty, Equipment, EquipmentSlot, Faction, HuntId, HuntRecord, Inventory, InventoryItem,
    ItemCategory, ItemId, ItemKey, ItemStack, ListingId, MonsterId, PlayerProfile, PlayerStats,
    QuestId, QuestLog, Rarity, RecipeId, ReputationTier, SkillKind, Skills, StaminaMeter,
    StatKind, StatModifier, WeatherKind, WorldState,
};

use crate::env::compute_seed;

/// Canonical snapshot of the game state.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// RNG seed for deterministic random generation.
    ///
    /// Set once at game initialization and never modified.
    /// Combined with `nonce` to derive a unique seed for each random roll.
    pub game_seed: u64,

    /// Number of successfully executed actions.
    pub nonce: u64,

    /// Game clock in milliseconds since the session started.
    pub clock_ms: u64,

    pub gold: u64,
    pub stats: PlayerStats,
    pub profile: PlayerProfile,
    pub inventory: Inventory,

    /// Finished hunts, newest first.
    pub history: VecDeque<HuntRecord>,

    /// Sequential hunt id allocator (monotonically increasing, never reused).
    next_hunt_id: u64,

    pub world: WorldState,
    pub quests: QuestLog,
    pub achievements: AchievementLog,
}

impl GameState {
    /// Creates a fresh state with a specific game seed.
    pub fn with_seed(
        game_seed: u64,
        gold: u64,
        stats: PlayerStats,
        profile: PlayerProfile,
        inventory: Inventory,
    ) -> Self {
        Self {
            game_seed,
            gold,
            stats,
            profile,
            inventory,
            next_hunt_id: 1,
            ..Self::default()
        }
    }

    /// Allocates a new unique [`HuntId`].
    pub fn allocate_hunt_id(&mut self) -> HuntId {
        let id = HuntId(self.next_hunt_id.max(1));
        self.next_hunt_id = id.0 + 1;
        id
    }

    /// Seed for the `index`-th roll of `stream` within the current action.
    pub fn roll_seed(&self, stream: u32, index: u32) -> u64 {
        compute_seed(self.game_seed, self.nonce, stream, index)
    }

    /// Spends gold. Returns `false` and changes nothing when short.
    pub fn spend_gold(&mut self, amount: u64) -> bool {
        if self.gold < amount {
            return false;
        }
        self.gold -= amount;
        true
    }

    /// Adds gold and counts it towards lifetime earnings.
    pub fn earn_gold(&mut self, amount: u64) {
        self.gold = self.gold.saturating_add(amount);
        self.profile.counters.gold_earned = self.profile.counters.gold_earned.saturating_add(amount);
    }

    /// Prepends a record to the hunt history, dropping the oldest beyond
    /// `capacity`.
    pub fn record_hunt(&mut self, record: HuntRecord, capacity: usize) {
        self.history.push_front(record);
        self.history.truncate(capacity);
    }
}
