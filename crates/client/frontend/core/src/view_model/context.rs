//! Read-only input shared by every panel builder.
use game_core::{
    CatalogOracle, EconomyOracle, GameConfig, GameEnv, GameState, OracleError, ProgressionOracle,
    WeatherOracle,
};

/// Snapshot and content oracles a panel renders from.
#[derive(Clone, Copy)]
pub struct PanelContext<'a> {
    pub state: &'a GameState,
    /// Game time of the snapshot; runs ahead of `state.clock_ms`.
    pub now_ms: u64,
    pub catalog: &'a dyn CatalogOracle,
    pub economy: &'a dyn EconomyOracle,
    pub weather: &'a dyn WeatherOracle,
    pub progression: &'a dyn ProgressionOracle,
    pub config: &'a GameConfig,
    pub history_limit: usize,
}

impl<'a> PanelContext<'a> {
    pub const DEFAULT_HISTORY_LIMIT: usize = 10;

    pub fn new(state: &'a GameState, now_ms: u64, env: &GameEnv<'a>) -> Result<Self, OracleError> {
        Ok(Self {
            state,
            now_ms: now_ms.max(state.clock_ms),
            catalog: env.catalog()?,
            economy: env.economy()?,
            weather: env.weather()?,
            progression: env.progression()?,
            config: env.config()?,
            history_limit: Self::DEFAULT_HISTORY_LIMIT,
        })
    }

    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit.max(1);
        self
    }

    /// Display name of an item, falling back to its id.
    pub fn item_name(&self, id: &game_core::ItemId) -> String {
        self.catalog
            .item(id)
            .map(|item| item.name.clone())
            .unwrap_or_else(|| id.to_string())
    }

    pub fn monster_name(&self, id: &game_core::MonsterId) -> String {
        self.catalog
            .monster(id)
            .map(|monster| monster.name.clone())
            .unwrap_or_else(|| id.to_string())
    }

    pub fn biome_name(&self, id: &game_core::BiomeId) -> String {
        self.catalog
            .biome(id)
            .map(|biome| biome.name.clone())
            .unwrap_or_else(|| id.to_string())
    }
}
