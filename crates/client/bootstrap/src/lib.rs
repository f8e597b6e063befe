//! Shared bootstrap utilities for client front-ends.
//!
//! Provides configuration loading, content selection and runtime setup that
//! the headless client and any future UI reuse.
pub mod builder;
pub mod config;
pub mod content;

pub use builder::{RuntimeBuilder, RuntimeSetup};
pub use config::{ClientConfig, TimerConfig};
pub use content::{ContentSource, LoadedContent};
