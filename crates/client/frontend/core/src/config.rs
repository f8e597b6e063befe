//! Frontend configuration structures and loaders.
//!
//! UI settings shared by every front-end implementation.

use std::env;

/// Frontend-specific configuration.
#[derive(Clone, Debug, Default)]
pub struct FrontendConfig {
    pub messages: MessageConfig,
    pub panels: PanelConfig,
}

impl FrontendConfig {
    pub const fn new(messages: MessageConfig, panels: PanelConfig) -> Self {
        Self { messages, panels }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `MESSAGE_CAPACITY` - Notification log capacity (default: 64)
    /// - `SHOW_WEATHER_MESSAGES` - Notify on weather changes (default: true)
    /// - `SHOW_STAMINA_MESSAGES` - Notify on stamina ticks (default: false)
    /// - `HISTORY_LIMIT` - Hunt history rows shown (default: 10)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(capacity) = read_env::<usize>("MESSAGE_CAPACITY") {
            config.messages.capacity = capacity.max(1);
        }
        if let Some(show) = read_env_bool("SHOW_WEATHER_MESSAGES") {
            config.messages.show_weather = show;
        }
        if let Some(show) = read_env_bool("SHOW_STAMINA_MESSAGES") {
            config.messages.show_stamina = show;
        }
        if let Some(limit) = read_env::<usize>("HISTORY_LIMIT") {
            config.panels.history_limit = limit.max(1);
        }

        config
    }
}

#[derive(Clone, Debug)]
pub struct MessageConfig {
    pub capacity: usize,
    pub show_weather: bool,
    /// Stamina ticks arrive every second, so they stay quiet by default.
    pub show_stamina: bool,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            capacity: 64,
            show_weather: true,
            show_stamina: false,
        }
    }
}

#[derive(Clone, Debug)]
pub struct PanelConfig {
    pub history_limit: usize,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self { history_limit: 10 }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn read_env_bool(key: &str) -> Option<bool> {
    match env::var(key).ok()?.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
