//! Data-driven content definitions and loaders.
//!
//! This crate houses the static world of the idle hunter and provides loaders
//! for RON/TOML data files:
//! - Biomes and monster templates with drop tables and evolutions
//! - Item catalog, crafting recipes and marketplace listings
//! - Weather table
//! - Quests, quest givers and achievements
//! - Game configuration (TOML)
//!
//! Content is consumed through the `game-core` oracle traits and never appears
//! in game state. A sample world is compiled in for hosts without a data
//! directory.

pub mod catalog;
pub mod starter;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::ContentCatalog;
pub use starter::{STARTER_MATERIALS, STARTING_SKILLS, starting_state};

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, LoadResult, builtin_catalog, builtin_config, ensure_consistent,
};
