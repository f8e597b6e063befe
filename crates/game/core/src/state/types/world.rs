//! Per-biome world data: rotating weather and exploration progress.

use std::collections::BTreeMap;

use super::BiomeId;

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum WeatherKind {
    #[default]
    Clear,
    Rain,
    Storm,
    Fog,
    Snow,
    HeatWave,
}

/// Weather currently affecting a biome and how long it lasts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BiomeWeather {
    pub kind: WeatherKind,
    pub remaining_secs: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldState {
    pub weather: BTreeMap<BiomeId, BiomeWeather>,
    /// Exploration progress per biome, in percent (0..=100).
    pub exploration: BTreeMap<BiomeId, u32>,
}

impl WorldState {
    pub const FULLY_EXPLORED: u32 = 100;

    /// Weather of a biome; biomes without a roll yet count as clear.
    pub fn weather_of(&self, biome: &BiomeId) -> WeatherKind {
        self.weather
            .get(biome)
            .map(|weather| weather.kind)
            .unwrap_or_default()
    }

    pub fn exploration_of(&self, biome: &BiomeId) -> u32 {
        self.exploration.get(biome).copied().unwrap_or(0)
    }

    pub fn is_explored(&self, biome: &BiomeId) -> bool {
        self.exploration_of(biome) >= Self::FULLY_EXPLORED
    }

    /// Adds exploration progress, capped at 100. Returns the new value.
    pub fn explore(&mut self, biome: &BiomeId, gain: u32) -> u32 {
        let progress = self.exploration.entry(biome.clone()).or_default();
        *progress = (*progress + gain).min(Self::FULLY_EXPLORED);
        *progress
    }
}
