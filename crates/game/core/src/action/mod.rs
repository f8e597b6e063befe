//! Action domain.
//!
//! Every state change of the game is an [`Action`]. Each variant wraps a
//! transition struct implementing [`ActionTransition`], which the engine drives
//! through `pre_validate → apply → post_validate`.
//!
//! # Module Structure
//!
//! - `hunt`: start/complete hunts, auto-hunt selection
//! - `crafting`, `upgrade`, `market`: item economy
//! - `skills`, `equipment`: character progression
//! - `quests`: quest board and objective tracking
//! - `exploration`: biome exploration
//! - `system`: timer-driven stamina and weather updates

mod crafting;
mod equipment;
mod error;
mod exploration;
mod hunt;
mod market;
mod quests;
mod skills;
mod system;
mod transition;
mod upgrade;

pub use crafting::{CraftAction, CraftOutcome};
pub use equipment::{EquipAction, EquipChange, UnequipAction};
pub use error::ActionError;
pub use exploration::{Discovery, ExploreAction, ExploreOutcome};
pub use hunt::{CompleteHuntAction, HuntCompletion, SetAutoHuntAction, StartHuntAction};
pub use market::{BuyAction, Purchase};
pub use quests::{
    AbandonQuestAction, AcceptQuestAction, CompleteQuestAction, ObjectiveProgress,
    QuestRewardGrant, objective_progress,
};
pub use skills::{SkillUpgrade, UpgradeSkillAction, skill_upgrade_cost};
pub use system::{AdvanceWeatherAction, RegenerateStaminaAction, WeatherChange};
pub use transition::ActionTransition;
pub use upgrade::{UpgradeGearAction, UpgradeOutcome};

use crate::state::{
    ActiveHunt, BiomeId, Difficulty, EquipmentSlot, HuntId, ItemKey, ListingId, MonsterId,
    QuestId, RecipeId, SkillKind,
};

/// Top-level action enum.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    StartHunt(StartHuntAction),
    CompleteHunt(CompleteHuntAction),
    SetAutoHunt(SetAutoHuntAction),
    Craft(CraftAction),
    UpgradeGear(UpgradeGearAction),
    Buy(BuyAction),
    UpgradeSkill(UpgradeSkillAction),
    Equip(EquipAction),
    Unequip(UnequipAction),
    AcceptQuest(AcceptQuestAction),
    CompleteQuest(CompleteQuestAction),
    AbandonQuest(AbandonQuestAction),
    Explore(ExploreAction),
    RegenerateStamina(RegenerateStaminaAction),
    AdvanceWeather(AdvanceWeatherAction),
}

impl Action {
    pub fn start_hunt(monster: impl Into<MonsterId>, difficulty: Difficulty) -> Self {
        Self::StartHunt(StartHuntAction::new(monster, difficulty))
    }

    pub fn complete_hunt(hunt: HuntId) -> Self {
        Self::CompleteHunt(CompleteHuntAction::new(hunt))
    }

    pub fn set_auto_hunt(monster: impl Into<MonsterId>, enabled: bool) -> Self {
        Self::SetAutoHunt(SetAutoHuntAction {
            monster: monster.into(),
            enabled,
        })
    }

    pub fn craft(recipe: impl Into<RecipeId>) -> Self {
        Self::Craft(CraftAction::new(recipe))
    }

    pub fn upgrade_gear(item: ItemKey) -> Self {
        Self::UpgradeGear(UpgradeGearAction { item })
    }

    pub fn buy(listing: impl Into<ListingId>) -> Self {
        Self::Buy(BuyAction {
            listing: listing.into(),
        })
    }

    pub fn upgrade_skill(skill: SkillKind) -> Self {
        Self::UpgradeSkill(UpgradeSkillAction { skill })
    }

    pub fn equip(item: ItemKey) -> Self {
        Self::Equip(EquipAction { item })
    }

    pub fn unequip(slot: EquipmentSlot) -> Self {
        Self::Unequip(UnequipAction { slot })
    }

    pub fn accept_quest(quest: impl Into<QuestId>) -> Self {
        Self::AcceptQuest(AcceptQuestAction {
            quest: quest.into(),
        })
    }

    pub fn complete_quest(quest: impl Into<QuestId>) -> Self {
        Self::CompleteQuest(CompleteQuestAction {
            quest: quest.into(),
        })
    }

    pub fn abandon_quest(quest: impl Into<QuestId>) -> Self {
        Self::AbandonQuest(AbandonQuestAction {
            quest: quest.into(),
        })
    }

    pub fn explore(biome: impl Into<BiomeId>) -> Self {
        Self::Explore(ExploreAction {
            biome: biome.into(),
        })
    }

    pub fn regenerate_stamina(elapsed_ms: u64) -> Self {
        Self::RegenerateStamina(RegenerateStaminaAction { elapsed_ms })
    }

    pub fn advance_weather(elapsed_secs: u64) -> Self {
        Self::AdvanceWeather(AdvanceWeatherAction { elapsed_secs })
    }

    pub fn kind(&self) -> ActionKind {
        match self {
            Self::StartHunt(_) => ActionKind::StartHunt,
            Self::CompleteHunt(_) => ActionKind::CompleteHunt,
            Self::SetAutoHunt(_) => ActionKind::SetAutoHunt,
            Self::Craft(_) => ActionKind::Craft,
            Self::UpgradeGear(_) => ActionKind::UpgradeGear,
            Self::Buy(_) => ActionKind::Buy,
            Self::UpgradeSkill(_) => ActionKind::UpgradeSkill,
            Self::Equip(_) => ActionKind::Equip,
            Self::Unequip(_) => ActionKind::Unequip,
            Self::AcceptQuest(_) => ActionKind::AcceptQuest,
            Self::CompleteQuest(_) => ActionKind::CompleteQuest,
            Self::AbandonQuest(_) => ActionKind::AbandonQuest,
            Self::Explore(_) => ActionKind::Explore,
            Self::RegenerateStamina(_) => ActionKind::RegenerateStamina,
            Self::AdvanceWeather(_) => ActionKind::AdvanceWeather,
        }
    }
}

/// Discriminant of [`Action`], used for logging and event routing.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ActionKind {
    StartHunt,
    CompleteHunt,
    SetAutoHunt,
    Craft,
    UpgradeGear,
    Buy,
    UpgradeSkill,
    Equip,
    Unequip,
    AcceptQuest,
    CompleteQuest,
    AbandonQuest,
    Explore,
    RegenerateStamina,
    AdvanceWeather,
}

impl ActionKind {
    /// Timer-driven actions the runtime submits on its own.
    pub const fn is_system(self) -> bool {
        matches!(self, Self::RegenerateStamina | Self::AdvanceWeather)
    }
}

/// Action-specific result of a successful execution.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionOutcome {
    HuntStarted(ActiveHunt),
    HuntCompleted(HuntCompletion),
    AutoHuntSet { monster: MonsterId, enabled: bool },
    Crafted(CraftOutcome),
    Upgraded(UpgradeOutcome),
    Purchased(Purchase),
    SkillUpgraded(SkillUpgrade),
    EquipmentChanged(EquipChange),
    QuestAccepted(QuestId),
    QuestCompleted(QuestRewardGrant),
    QuestAbandoned(QuestId),
    Explored(ExploreOutcome),
    StaminaRegenerated { current: u32 },
    WeatherAdvanced(Vec<WeatherChange>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn kind_names_are_snake_case() {
        assert_eq!(Action::start_hunt("shadow-wolf", Difficulty::Normal).kind().to_string(), "start_hunt");
        assert_eq!(ActionKind::from_str("advance_weather").unwrap(), ActionKind::AdvanceWeather);
    }

    #[test]
    fn only_timer_actions_are_system() {
        assert!(Action::regenerate_stamina(1_000).kind().is_system());
        assert!(Action::advance_weather(1).kind().is_system());
        assert!(!Action::craft("health-potion").kind().is_system());
    }
}
