//! Runtime orchestration for the idle hunter simulation.
//!
//! This crate wires the content oracles, the game clock and the simulation
//! worker into a cohesive runtime API. Consumers embed [`Runtime`] to drive
//! hunts, subscribe to events, and submit actions through [`RuntimeHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides topic-based event bus for flexible event routing
//! - [`oracle`] bundles the content catalog and tunables for the engine
//! - `workers` keeps background tasks internal to the crate
pub mod api;
pub mod events;
pub mod oracle;
pub mod runtime;

mod workers;

pub use api::{Result, RuntimeError, RuntimeHandle};
pub use events::{ActionExecuted, ActionFailed, ActionSource, Event, EventBus, Topic};
pub use oracle::OracleBundle;
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
pub use workers::StateSnapshot;
