//! Client configuration structures and loaders.
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use client_frontend_core::FrontendConfig;

use crate::content::ContentSource;

/// Configuration required to bootstrap a client runtime and UI.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Seed of the fresh character.
    pub seed: u64,
    pub content: ContentSource,
    /// Tunables file overriding the one shipped with the content.
    pub game_config_path: Option<PathBuf>,
    pub timers: TimerConfig,
    /// Real-time length of a headless session.
    pub session: Duration,
    pub log_dir: Option<PathBuf>,
    pub session_id: Option<String>,
    pub frontend: FrontendConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            seed: Self::DEFAULT_SEED,
            content: ContentSource::Builtin,
            game_config_path: None,
            timers: TimerConfig::default(),
            session: Duration::from_secs(Self::DEFAULT_SESSION_SECS),
            log_dir: None,
            session_id: None,
            frontend: FrontendConfig::default(),
        }
    }
}

impl ClientConfig {
    pub const DEFAULT_SEED: u64 = 42;
    pub const DEFAULT_SESSION_SECS: u64 = 60;

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `GAME_SEED` - Seed of the fresh character (default: 42)
    /// - `CONTENT_DIR` - Data directory to load instead of the built-in world
    /// - `GAME_CONFIG_PATH` - TOML tunables overriding the content's config
    /// - `STAMINA_TICK_MS` - Stamina regeneration period (default: 1000)
    /// - `WEATHER_TICK_MS` - Weather countdown period (default: 1000)
    /// - `TIME_SCALE` - Game milliseconds per real millisecond (default: 1)
    /// - `SESSION_SECS` - Length of a headless session (default: 60)
    /// - `LOG_DIR` - Log directory (default: platform data dir)
    /// - `GAME_SESSION_ID` - Session identifier for log files (default: timestamp)
    ///
    /// Frontend settings are read by [`FrontendConfig::from_env`].
    pub fn from_env() -> Self {
        let mut config = Self::from_lookup(|key| env::var(key).ok());
        config.frontend = FrontendConfig::from_env();
        config
    }

    /// Builds the configuration from any key-value source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let parse = |key: &str| -> Option<u64> {
            let raw = read(key)?;
            match raw.trim().parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(key, value = %raw, "ignoring unparsable setting");
                    None
                }
            }
        };

        let mut config = Self::default();

        if let Some(seed) = parse("GAME_SEED") {
            config.seed = seed;
        }
        if let Some(dir) = read("CONTENT_DIR") {
            config.content = ContentSource::Directory(PathBuf::from(dir));
        }
        config.game_config_path = read("GAME_CONFIG_PATH").map(PathBuf::from);

        if let Some(ms) = parse("STAMINA_TICK_MS") {
            config.timers.stamina_tick = Duration::from_millis(ms.max(1));
        }
        if let Some(ms) = parse("WEATHER_TICK_MS") {
            config.timers.weather_tick = Duration::from_millis(ms.max(1));
        }
        if let Some(scale) = parse("TIME_SCALE") {
            config.timers.time_scale = u32::try_from(scale).unwrap_or(u32::MAX).max(1);
        }
        if let Some(secs) = parse("SESSION_SECS") {
            config.session = Duration::from_secs(secs);
        }

        config.log_dir = read("LOG_DIR").map(PathBuf::from);
        config.session_id = read("GAME_SESSION_ID");

        config
    }
}

/// Timer periods handed to the runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerConfig {
    pub stamina_tick: Duration,
    pub weather_tick: Duration,
    pub time_scale: u32,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            stamina_tick: Duration::from_secs(1),
            weather_tick: Duration::from_secs(1),
            time_scale: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> ClientConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        ClientConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_run_the_builtin_world() {
        let config = config_from(&[]);
        assert_eq!(config.seed, ClientConfig::DEFAULT_SEED);
        assert!(matches!(config.content, ContentSource::Builtin));
        assert_eq!(config.timers, TimerConfig::default());
        assert_eq!(config.session, Duration::from_secs(60));
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn reads_every_setting() {
        let config = config_from(&[
            ("GAME_SEED", "7"),
            ("CONTENT_DIR", "/srv/content"),
            ("GAME_CONFIG_PATH", "/srv/tuning.toml"),
            ("STAMINA_TICK_MS", "250"),
            ("WEATHER_TICK_MS", "500"),
            ("TIME_SCALE", "60"),
            ("SESSION_SECS", "5"),
            ("LOG_DIR", "/tmp/logs"),
            ("GAME_SESSION_ID", "demo"),
        ]);

        assert_eq!(config.seed, 7);
        assert!(
            matches!(&config.content, ContentSource::Directory(dir) if dir == &PathBuf::from("/srv/content"))
        );
        assert_eq!(config.game_config_path, Some(PathBuf::from("/srv/tuning.toml")));
        assert_eq!(config.timers.stamina_tick, Duration::from_millis(250));
        assert_eq!(config.timers.weather_tick, Duration::from_millis(500));
        assert_eq!(config.timers.time_scale, 60);
        assert_eq!(config.session, Duration::from_secs(5));
        assert_eq!(config.log_dir, Some(PathBuf::from("/tmp/logs")));
        assert_eq!(config.session_id.as_deref(), Some("demo"));
    }

    #[test]
    fn bad_values_fall_back_to_defaults() {
        let config = config_from(&[("GAME_SEED", "abc"), ("TIME_SCALE", "0"), ("LOG_DIR", "  ")]);
        assert_eq!(config.seed, ClientConfig::DEFAULT_SEED);
        assert_eq!(config.timers.time_scale, 1);
        assert!(config.log_dir.is_none());
    }
}
