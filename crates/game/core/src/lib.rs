//! Deterministic game logic and data types for the idle hunter dashboard.
//!
//! `game-core` defines the canonical rules (actions, engine, reward resolver,
//! panel layout) and exposes pure APIs that can be reused by the runtime and
//! by any front-end. All state mutation flows through [`engine::GameEngine`],
//! and supporting crates depend on the types re-exported here.
pub mod action;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod layout;
pub mod rewards;
pub mod state;

#[cfg(test)]
mod testing;

pub use action::{
    Action, ActionError, ActionKind, ActionOutcome, ActionTransition, CraftOutcome, Discovery,
    EquipChange, ExploreOutcome, HuntCompletion, ObjectiveProgress, Purchase, QuestRewardGrant,
    SkillUpgrade, UpgradeOutcome, WeatherChange, objective_progress, skill_upgrade_cost,
};
pub use config::GameConfig;
pub use engine::{ExecuteError, ExecutionOutcome, GameEngine, TransitionPhase};
pub use env::{
    AchievementDefinition, AchievementKind, BiomeDefinition, CatalogOracle, DropEntry,
    EconomyOracle, Env, Evolution, EvolutionRequirement, GameEnv, ItemDefinition, MarketListing,
    MonsterTemplate, ObjectiveKind, ObjectiveSpec, OracleError, PcgRng, PriceTrend,
    ProgressionOracle, QuestGiver, QuestRewards, QuestTemplate, Recipe, RecipeCategory,
    RngOracle, WeatherDefinition, WeatherEffects, WeatherOracle, compute_seed,
};
pub use error::{ErrorSeverity, GameError};
pub use layout::{LayoutError, LayoutNode, LayoutTree, PanelId, PanelKind, SplitDirection};
pub use rewards::{EquipmentBonus, LootResult, equipment_bonus};
pub use state::{
    AchievementId, AchievementLog, ActiveHunt, ActiveQuest, BiomeId, BiomeWeather, Counters,
    Difficulty, Equipment, EquipmentSlot, Faction, GameState, HuntId, HuntRecord, Inventory,
    InventoryItem, ItemCategory, ItemId, ItemKey, ItemStack, ListingId, MonsterId, PlayerProfile,
    PlayerStats, QuestId, QuestLog, Rarity, RecipeId, ReputationTier, SkillKind, Skills,
    StaminaMeter, StatKind, StatModifier, WeatherKind, WorldState,
};
