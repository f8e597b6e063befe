//! Action execution errors.
//!
//! Every blocked action reports one of these. The state is never modified
//! when an action fails, so hosts only need to surface the message.

use crate::env::OracleError;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{BiomeId, EquipmentSlot, HuntId, ItemId, ItemKey, MonsterId, QuestId, SkillKind};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ActionError {
    /// Content lookup or environment wiring failed.
    #[error(transparent)]
    Oracle(#[from] OracleError),

    // ===== hunting =====
    #[error("{0} has not been unlocked yet")]
    MonsterLocked(MonsterId),

    #[error("already hunting {0}")]
    AlreadyHunting(MonsterId),

    #[error("hunt limit reached ({limit} active)")]
    TooManyHunts { limit: usize },

    #[error("not enough stamina: need {required}, have {available}")]
    InsufficientStamina { required: u32, available: u32 },

    #[error("{0} is not active")]
    HuntNotFound(HuntId),

    #[error("{hunt} finishes in {remaining_ms} ms")]
    HuntNotFinished { hunt: HuntId, remaining_ms: u64 },

    #[error("auto-hunt for {monster} needs {required} defeats ({defeated} so far)")]
    AutoHuntLocked {
        monster: MonsterId,
        required: u32,
        defeated: u32,
    },

    // ===== economy =====
    #[error("requires level {required} (current {current})")]
    LevelTooLow { required: u32, current: u32 },

    #[error("not enough {item}: need {required}, have {available}")]
    MissingMaterials {
        item: ItemId,
        required: u32,
        available: u32,
    },

    #[error("not enough gold: need {required}, have {available}")]
    InsufficientGold { required: u64, available: u64 },

    #[error("{0} is not in the inventory")]
    ItemNotOwned(ItemKey),

    #[error("{0} cannot be upgraded")]
    NotUpgradeable(ItemKey),

    #[error("{0} is not equipment")]
    NotEquipment(ItemKey),

    #[error("nothing equipped in the {0} slot")]
    SlotEmpty(EquipmentSlot),

    #[error("{0} is already at its maximum level")]
    SkillMaxed(SkillKind),

    // ===== quests =====
    #[error("quest {0} is already active")]
    QuestAlreadyActive(QuestId),

    #[error("quest {0} is already completed")]
    QuestAlreadyCompleted(QuestId),

    #[error("quest limit reached ({limit} active)")]
    QuestLimitReached { limit: usize },

    #[error("quest {0} is not active")]
    QuestNotActive(QuestId),

    #[error("quest {0} has expired")]
    QuestExpired(QuestId),

    #[error("objectives of quest {0} are not complete")]
    ObjectivesIncomplete(QuestId),

    // ===== exploration =====
    #[error("{0} is already fully explored")]
    BiomeFullyExplored(BiomeId),

    /// Post-condition check failed; indicates a bug in an action.
    #[error("invariant violated: {0}")]
    InvariantViolation(&'static str),
}

impl GameError for ActionError {
    fn severity(&self) -> ErrorSeverity {
        use ActionError::*;
        match self {
            Oracle(error) => error.severity(),

            MonsterLocked(_)
            | AlreadyHunting(_)
            | TooManyHunts { .. }
            | InsufficientStamina { .. }
            | HuntNotFinished { .. }
            | AutoHuntLocked { .. }
            | LevelTooLow { .. }
            | MissingMaterials { .. }
            | InsufficientGold { .. }
            | QuestLimitReached { .. }
            | ObjectivesIncomplete(_) => ErrorSeverity::Recoverable,

            HuntNotFound(_)
            | ItemNotOwned(_)
            | NotUpgradeable(_)
            | NotEquipment(_)
            | SlotEmpty(_)
            | SkillMaxed(_)
            | QuestAlreadyActive(_)
            | QuestAlreadyCompleted(_)
            | QuestNotActive(_)
            | QuestExpired(_)
            | BiomeFullyExplored(_) => ErrorSeverity::Validation,

            InvariantViolation(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        use ActionError::*;
        match self {
            Oracle(error) => error.error_code(),
            MonsterLocked(_) => "ACTION_MONSTER_LOCKED",
            AlreadyHunting(_) => "ACTION_ALREADY_HUNTING",
            TooManyHunts { .. } => "ACTION_TOO_MANY_HUNTS",
            InsufficientStamina { .. } => "ACTION_INSUFFICIENT_STAMINA",
            HuntNotFound(_) => "ACTION_HUNT_NOT_FOUND",
            HuntNotFinished { .. } => "ACTION_HUNT_NOT_FINISHED",
            AutoHuntLocked { .. } => "ACTION_AUTO_HUNT_LOCKED",
            LevelTooLow { .. } => "ACTION_LEVEL_TOO_LOW",
            MissingMaterials { .. } => "ACTION_MISSING_MATERIALS",
            InsufficientGold { .. } => "ACTION_INSUFFICIENT_GOLD",
            ItemNotOwned(_) => "ACTION_ITEM_NOT_OWNED",
            NotUpgradeable(_) => "ACTION_NOT_UPGRADEABLE",
            NotEquipment(_) => "ACTION_NOT_EQUIPMENT",
            SlotEmpty(_) => "ACTION_SLOT_EMPTY",
            SkillMaxed(_) => "ACTION_SKILL_MAXED",
            QuestAlreadyActive(_) => "ACTION_QUEST_ALREADY_ACTIVE",
            QuestAlreadyCompleted(_) => "ACTION_QUEST_ALREADY_COMPLETED",
            QuestLimitReached { .. } => "ACTION_QUEST_LIMIT_REACHED",
            QuestNotActive(_) => "ACTION_QUEST_NOT_ACTIVE",
            QuestExpired(_) => "ACTION_QUEST_EXPIRED",
            ObjectivesIncomplete(_) => "ACTION_OBJECTIVES_INCOMPLETE",
            BiomeFullyExplored(_) => "ACTION_BIOME_FULLY_EXPLORED",
            InvariantViolation(_) => "ACTION_INVARIANT_VIOLATION",
        }
    }
}
