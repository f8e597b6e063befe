//! Builds the runtime, oracles, and config bundle used by front-ends.
use std::sync::Arc;

use anyhow::{Context, Result};
use runtime::{OracleBundle, Runtime, RuntimeConfig};

use crate::config::ClientConfig;

/// Builder that assembles content, oracles and the runtime for clients.
pub struct RuntimeBuilder {
    config: ClientConfig,
}

impl RuntimeBuilder {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    pub async fn build(self) -> Result<RuntimeSetup> {
        let loaded = self
            .config
            .content
            .load(self.config.game_config_path.as_deref())?;
        let catalog = Arc::new(loaded.catalog);
        let game_config = Arc::new(loaded.game_config);
        let oracles = OracleBundle::new(catalog.clone(), game_config.clone());

        let timers = self.config.timers;
        let runtime_config = RuntimeConfig {
            game_config: game_config.as_ref().clone(),
            stamina_tick: timers.stamina_tick,
            weather_tick: timers.weather_tick,
            time_scale: timers.time_scale,
            ..RuntimeConfig::default()
        };

        let runtime = Runtime::builder()
            .config(runtime_config)
            .content(catalog)
            .seed(self.config.seed)
            .build()
            .await
            .context("failed to start the runtime")?;

        tracing::info!(
            seed = self.config.seed,
            time_scale = timers.time_scale,
            "runtime ready"
        );

        Ok(RuntimeSetup {
            config: self.config,
            oracles,
            runtime,
        })
    }
}

pub struct RuntimeSetup {
    pub config: ClientConfig,
    pub oracles: OracleBundle,
    pub runtime: Runtime,
}
