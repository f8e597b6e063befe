//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from worker coordination and blocked actions so clients can
//! bubble them up with consistent context.
use thiserror::Error;
use tokio::sync::oneshot;

use game_core::{ExecuteError, GameError};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("simulation worker command channel closed")]
    CommandChannelClosed,

    #[error("simulation worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("simulation worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error("runtime requires content to be configured before building")]
    MissingContent,

    #[error("time scale must be at least 1")]
    InvalidTimeScale,

    /// The engine refused the action; game state is unchanged.
    #[error(transparent)]
    Action(#[from] ExecuteError),
}

impl RuntimeError {
    /// Engine error behind a blocked action.
    pub fn execute_error(&self) -> Option<&ExecuteError> {
        match self {
            Self::Action(error) => Some(error),
            _ => None,
        }
    }

    /// Whether the failure is a soft game rule rejection rather than broken
    /// plumbing.
    pub fn is_blocked_action(&self) -> bool {
        self.execute_error()
            .is_some_and(|error| !error.severity().is_internal())
    }
}
