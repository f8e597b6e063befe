//! Event payloads published by the simulation worker.
use serde::{Deserialize, Serialize};

use game_core::{
    Action, ActionKind, ErrorSeverity, ExecuteError, ExecutionOutcome, GameError,
    TransitionPhase,
};

/// Topics for event subscription
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Topic {
    /// Results of actions submitted through a [`crate::RuntimeHandle`]
    Actions,
    /// Results of timer-driven actions and auto-hunt restarts
    System,
}

/// Who submitted an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionSource {
    Player,
    /// Hunt completion, stamina regeneration or weather rotation timer.
    Timer,
    AutoHunt,
}

impl ActionSource {
    pub fn topic(self) -> Topic {
        match self {
            Self::Player => Topic::Actions,
            Self::Timer | Self::AutoHunt => Topic::System,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Event {
    ActionExecuted(ActionExecuted),
    ActionFailed(ActionFailed),
}

impl Event {
    pub fn source(&self) -> ActionSource {
        match self {
            Self::ActionExecuted(event) => event.source,
            Self::ActionFailed(event) => event.source,
        }
    }

    pub fn topic(&self) -> Topic {
        self.source().topic()
    }

    pub fn clock_ms(&self) -> u64 {
        match self {
            Self::ActionExecuted(event) => event.clock_ms,
            Self::ActionFailed(event) => event.clock_ms,
        }
    }
}

/// An action passed all phases and its effects are in the state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ActionExecuted {
    pub source: ActionSource,
    pub outcome: ExecutionOutcome,
    /// Game clock after the action.
    pub clock_ms: u64,
}

/// An action was blocked; the state is unchanged.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ActionFailed {
    pub source: ActionSource,
    pub action: Action,
    pub kind: ActionKind,
    pub phase: Option<TransitionPhase>,
    pub code: String,
    pub severity: ErrorSeverity,
    pub message: String,
    pub clock_ms: u64,
}

impl ActionFailed {
    pub fn new(source: ActionSource, action: &Action, error: &ExecuteError, clock_ms: u64) -> Self {
        Self {
            source,
            action: action.clone(),
            kind: action.kind(),
            phase: error.phase(),
            code: error.error_code().to_owned(),
            severity: error.severity(),
            message: error.to_string(),
            clock_ms,
        }
    }
}
