//! Weather table.

use crate::state::WeatherKind;

/// Percentage modifiers applied while a weather is active. 100 is neutral.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WeatherEffects {
    pub hunt_time_pct: u32,
    pub loot_pct: u32,
    pub encounter_pct: u32,
    pub stamina_cost_pct: u32,
}

impl WeatherEffects {
    pub const NEUTRAL: Self = Self {
        hunt_time_pct: 100,
        loot_pct: 100,
        encounter_pct: 100,
        stamina_cost_pct: 100,
    };
}

impl Default for WeatherEffects {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeatherDefinition {
    pub kind: WeatherKind,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub effects: WeatherEffects,
    pub duration_secs: u64,
    /// Relative roll weight.
    pub weight: u32,
}

/// Read-only access to the weather table.
pub trait WeatherOracle: Send + Sync {
    fn weather_table(&self) -> &[WeatherDefinition];

    fn weather(&self, kind: WeatherKind) -> Option<&WeatherDefinition> {
        self.weather_table().iter().find(|weather| weather.kind == kind)
    }

    /// Effects of a weather kind; unknown kinds are neutral.
    fn effects(&self, kind: WeatherKind) -> WeatherEffects {
        self.weather(kind)
            .map(|weather| weather.effects)
            .unwrap_or_default()
    }

    fn total_weight(&self) -> u32 {
        self.weather_table().iter().map(|weather| weather.weight).sum()
    }

    /// Picks the entry whose cumulative weight covers `roll`
    /// (`0 <= roll < total_weight`).
    fn pick(&self, roll: u32) -> Option<&WeatherDefinition> {
        let mut cumulative = 0;
        for weather in self.weather_table() {
            cumulative += weather.weight;
            if roll < cumulative {
                return Some(weather);
            }
        }
        self.weather_table().first()
    }
}
