//! Action transition dispatch and execution logic.

use crate::action::{Action, ActionError, ActionOutcome, ActionTransition};
use crate::env::GameEnv;
use crate::state::GameState;

use super::errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

/// Executes a transition through the three-phase pipeline and returns the result.
///
/// Phases:
/// 1. `pre_validate` - Check preconditions before mutation
/// 2. `apply` - Mutate the game state and return result
/// 3. `post_validate` - Verify postconditions after mutation
#[inline]
fn drive_transition<T>(
    transition: &T,
    state: &mut GameState,
    env: &GameEnv<'_>,
) -> Result<T::Result, TransitionPhaseError<T::Error>>
where
    T: ActionTransition,
{
    transition
        .pre_validate(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))?;

    let result = transition
        .apply(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Apply, error))?;

    transition
        .post_validate(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PostValidate, error))?;

    Ok(result)
}

/// Routes each action to its transition and wraps the result in
/// [`ActionOutcome`].
pub(super) fn execute_transition(
    action: &Action,
    state: &mut GameState,
    env: &GameEnv<'_>,
) -> Result<ActionOutcome, ExecuteError> {
    let kind = action.kind();
    let wrap = |error: TransitionPhaseError<ActionError>| ExecuteError::Action { kind, error };

    let outcome = match action {
        Action::StartHunt(transition) => {
            ActionOutcome::HuntStarted(drive_transition(transition, state, env).map_err(wrap)?)
        }
        Action::CompleteHunt(transition) => {
            ActionOutcome::HuntCompleted(drive_transition(transition, state, env).map_err(wrap)?)
        }
        Action::SetAutoHunt(transition) => {
            let enabled = drive_transition(transition, state, env).map_err(wrap)?;
            ActionOutcome::AutoHuntSet {
                monster: transition.monster.clone(),
                enabled,
            }
        }
        Action::Craft(transition) => {
            ActionOutcome::Crafted(drive_transition(transition, state, env).map_err(wrap)?)
        }
        Action::UpgradeGear(transition) => {
            ActionOutcome::Upgraded(drive_transition(transition, state, env).map_err(wrap)?)
        }
        Action::Buy(transition) => {
            ActionOutcome::Purchased(drive_transition(transition, state, env).map_err(wrap)?)
        }
        Action::UpgradeSkill(transition) => {
            ActionOutcome::SkillUpgraded(drive_transition(transition, state, env).map_err(wrap)?)
        }
        Action::Equip(transition) => ActionOutcome::EquipmentChanged(
            drive_transition(transition, state, env).map_err(wrap)?,
        ),
        Action::Unequip(transition) => ActionOutcome::EquipmentChanged(
            drive_transition(transition, state, env).map_err(wrap)?,
        ),
        Action::AcceptQuest(transition) => {
            let quest = drive_transition(transition, state, env).map_err(wrap)?;
            ActionOutcome::QuestAccepted(quest.id)
        }
        Action::CompleteQuest(transition) => {
            ActionOutcome::QuestCompleted(drive_transition(transition, state, env).map_err(wrap)?)
        }
        Action::AbandonQuest(transition) => {
            drive_transition(transition, state, env).map_err(wrap)?;
            ActionOutcome::QuestAbandoned(transition.quest.clone())
        }
        Action::Explore(transition) => {
            ActionOutcome::Explored(drive_transition(transition, state, env).map_err(wrap)?)
        }
        Action::RegenerateStamina(transition) => {
            let current = drive_transition(transition, state, env).map_err(wrap)?;
            ActionOutcome::StaminaRegenerated { current }
        }
        Action::AdvanceWeather(transition) => {
            ActionOutcome::WeatherAdvanced(drive_transition(transition, state, env).map_err(wrap)?)
        }
    };
    Ok(outcome)
}
