//! Error types for action execution pipeline.

use crate::action::{ActionError, ActionKind};
use crate::env::OracleError;
use crate::error::{ErrorSeverity, GameError};

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
            TransitionPhase::PostValidate => "post_validate",
        }
    }
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

/// Errors surfaced while executing an action through the game engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ExecuteError {
    #[error("{kind} action failed: {error}")]
    Action {
        kind: ActionKind,
        error: TransitionPhaseError<ActionError>,
    },

    /// Bookkeeping after a successful transition could not reach content.
    #[error("progression update failed: {0}")]
    Progression(#[from] OracleError),
}

impl ExecuteError {
    /// The action error, when the failure came from a transition phase.
    pub fn action_error(&self) -> Option<&ActionError> {
        match self {
            Self::Action { error, .. } => Some(&error.error),
            Self::Progression(_) => None,
        }
    }

    pub fn phase(&self) -> Option<TransitionPhase> {
        match self {
            Self::Action { error, .. } => Some(error.phase),
            Self::Progression(_) => None,
        }
    }
}

impl GameError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Action { error, .. } => error.error.severity(),
            Self::Progression(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Action { error, .. } => error.error.error_code(),
            Self::Progression(error) => error.error_code(),
        }
    }
}
