//! Action execution pipeline.
//!
//! The [`GameEngine`] is the authoritative reducer for [`GameState`]. It
//! drives the transition phases on a copy of the state, runs the
//! post-action bookkeeping (level-ups, evolutions, achievements) and swaps the
//! copy in only when everything succeeded, so a blocked action never leaves a
//! partial mutation behind.

mod errors;
mod progression;
mod transition;

pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

use crate::action::{Action, ActionKind, ActionOutcome};
use crate::env::GameEnv;
use crate::error::GameError;
use crate::state::{AchievementId, GameState, MonsterId};

/// Complete outcome of action execution.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExecutionOutcome {
    pub kind: ActionKind,
    /// Nonce the action executed under.
    pub nonce: u64,
    pub outcome: ActionOutcome,
    /// Player levels gained from xp awarded by the action.
    pub level_ups: u32,
    /// Evolved monsters that became huntable.
    pub unlocked_monsters: Vec<MonsterId>,
    pub achievements: Vec<AchievementId>,
}

/// Game engine that manages action execution.
///
/// All state mutations flow through the three-phase action pipeline:
/// pre_validate → apply → post_validate
pub struct GameEngine<'a> {
    state: &'a mut GameState,
}

impl<'a> GameEngine<'a> {
    /// Creates a new game engine with the given state.
    pub fn new(state: &'a mut GameState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &GameState {
        &*self.state
    }

    /// Executes an action at game time `now_ms`.
    ///
    /// The game clock never moves backwards: an older `now_ms` keeps the
    /// current clock.
    pub fn execute(
        &mut self,
        env: GameEnv<'_>,
        action: &Action,
        now_ms: u64,
    ) -> Result<ExecutionOutcome, ExecuteError> {
        let kind = action.kind();
        let mut next = self.state.clone();
        next.clock_ms = next.clock_ms.max(now_ms);

        let catalog = env.catalog()?;
        let progression_oracle = env.progression()?;
        let config = env.config()?;
        let locked = progression::locked_monsters(&next, catalog);

        let outcome = match transition::execute_transition(action, &mut next, &env) {
            Ok(outcome) => outcome,
            Err(error) => {
                if error.severity().is_internal() {
                    tracing::error!(%kind, code = error.error_code(), "{error}");
                } else {
                    tracing::warn!(%kind, code = error.error_code(), "action blocked: {error}");
                }
                return Err(error);
            }
        };

        let nonce = next.nonce;
        next.nonce += 1;

        let level_ups = next.profile.gain_xp(0, config.xp_growth_pct);
        if level_ups > 0 {
            tracing::info!(level = next.profile.level, "level up");
        }
        let unlocked_monsters = progression::newly_unlocked(locked, &next, catalog);
        let achievements = progression::refresh_achievements(&mut next, progression_oracle);

        *self.state = next;
        tracing::debug!(%kind, nonce, "action executed");

        Ok(ExecutionOutcome {
            kind,
            nonce,
            outcome,
            level_ups,
            unlocked_monsters,
            achievements,
        })
    }
}

#[cfg(test)]
mod tests;
