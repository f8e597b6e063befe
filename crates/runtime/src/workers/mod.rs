//! Worker tasks that back the runtime orchestration.
//!
//! The simulation worker executes gameplay commands and owns every timer
//! that feeds actions into the game.

mod simulation;

pub use simulation::{Command, SimulationWorker, StateSnapshot, TimerSettings};
