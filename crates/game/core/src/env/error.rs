//! Oracle access errors.
//!
//! Errors related to oracle availability and content lookups.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{BiomeId, ItemId, ListingId, MonsterId, QuestId, RecipeId};

/// Errors that occur when accessing Oracle data.
///
/// A missing oracle means the host wired the environment incorrectly; a
/// missing entry means an action referenced content that does not exist.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    #[error("CatalogOracle not available")]
    CatalogNotAvailable,

    #[error("EconomyOracle not available")]
    EconomyNotAvailable,

    #[error("WeatherOracle not available")]
    WeatherNotAvailable,

    #[error("ProgressionOracle not available")]
    ProgressionNotAvailable,

    #[error("RngOracle not available")]
    RngNotAvailable,

    #[error("GameConfig not available")]
    ConfigNotAvailable,

    #[error("monster '{0}' not found")]
    MonsterNotFound(MonsterId),

    #[error("biome '{0}' not found")]
    BiomeNotFound(BiomeId),

    #[error("item definition '{0}' not found")]
    ItemNotFound(ItemId),

    #[error("recipe '{0}' not found")]
    RecipeNotFound(RecipeId),

    #[error("market listing '{0}' not found")]
    ListingNotFound(ListingId),

    #[error("quest '{0}' not found")]
    QuestNotFound(QuestId),
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        use OracleError::*;
        match self {
            CatalogNotAvailable | EconomyNotAvailable | WeatherNotAvailable
            | ProgressionNotAvailable | RngNotAvailable | ConfigNotAvailable => {
                ErrorSeverity::Internal
            }

            MonsterNotFound(_) | BiomeNotFound(_) | ItemNotFound(_) | RecipeNotFound(_)
            | ListingNotFound(_) | QuestNotFound(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            CatalogNotAvailable => "ORACLE_CATALOG_NOT_AVAILABLE",
            EconomyNotAvailable => "ORACLE_ECONOMY_NOT_AVAILABLE",
            WeatherNotAvailable => "ORACLE_WEATHER_NOT_AVAILABLE",
            ProgressionNotAvailable => "ORACLE_PROGRESSION_NOT_AVAILABLE",
            RngNotAvailable => "ORACLE_RNG_NOT_AVAILABLE",
            ConfigNotAvailable => "ORACLE_CONFIG_NOT_AVAILABLE",
            MonsterNotFound(_) => "ORACLE_MONSTER_NOT_FOUND",
            BiomeNotFound(_) => "ORACLE_BIOME_NOT_FOUND",
            ItemNotFound(_) => "ORACLE_ITEM_NOT_FOUND",
            RecipeNotFound(_) => "ORACLE_RECIPE_NOT_FOUND",
            ListingNotFound(_) => "ORACLE_LISTING_NOT_FOUND",
            QuestNotFound(_) => "ORACLE_QUEST_NOT_FOUND",
        }
    }
}
