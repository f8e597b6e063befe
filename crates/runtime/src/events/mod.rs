//! Event bus and event payloads.

mod bus;
mod types;

pub use bus::EventBus;
pub use types::{ActionExecuted, ActionFailed, ActionSource, Event, Topic};
