pub mod hunt;
pub mod ids;
pub mod inventory;
pub mod item;
pub mod player;
pub mod profile;
pub mod quest;
pub mod world;

// Re-export identifiers
pub use ids::{AchievementId, BiomeId, HuntId, ItemId, ListingId, MonsterId, QuestId, RecipeId};

// Re-export item types
pub use inventory::Inventory;
pub use item::{
    EquipmentSlot, InventoryItem, ItemCategory, ItemKey, ItemStack, Rarity, StatKind, StatModifier,
};

// Re-export player types
pub use player::{PlayerStats, SkillKind, Skills, StaminaMeter};
pub use profile::{Counters, Equipment, Faction, PlayerProfile, ReputationTier};

// Re-export hunt types
pub use hunt::{ActiveHunt, Difficulty, HuntRecord};

// Re-export world and progression types
pub use quest::{AchievementLog, ActiveQuest, QuestLog};
pub use world::{BiomeWeather, WeatherKind, WorldState};
