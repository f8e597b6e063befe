//! Oracle bundle handed to the simulation worker.
use std::sync::Arc;

use game_content::ContentCatalog;
use game_core::{Env, GameConfig, GameEnv, PcgRng};

/// Shared content and tunables, plus the deterministic rng.
#[derive(Clone, Debug)]
pub struct OracleBundle {
    content: Arc<ContentCatalog>,
    config: Arc<GameConfig>,
    rng: PcgRng,
}

impl OracleBundle {
    pub fn new(content: Arc<ContentCatalog>, config: Arc<GameConfig>) -> Self {
        Self {
            content,
            config,
            rng: PcgRng,
        }
    }

    pub fn content(&self) -> &ContentCatalog {
        &self.content
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Borrow every oracle as a [`GameEnv`] for one engine call.
    pub fn as_game_env(&self) -> GameEnv<'_> {
        let content = self.content.as_ref();
        Env::with_all(
            content,
            content,
            content,
            content,
            &self.rng,
            self.config.as_ref(),
        )
        .into_game_env()
    }
}
