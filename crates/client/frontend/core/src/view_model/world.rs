//! Biome overview: current weather and exploration.
use game_core::{BiomeId, WeatherEffects, WeatherKind, WorldState};

use super::PanelContext;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BiomesView {
    pub biomes: Vec<BiomeRow>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BiomeRow {
    pub id: BiomeId,
    pub name: String,
    pub color: String,
    pub weather: WeatherKind,
    pub weather_name: String,
    /// Seconds until the next weather roll.
    pub remaining_secs: u64,
    pub effects: WeatherEffects,
    pub exploration_pct: u32,
    pub fully_explored: bool,
    pub monster_count: usize,
}

impl BiomesView {
    pub(super) fn build(ctx: &PanelContext<'_>) -> Self {
        let world = &ctx.state.world;
        let biomes = ctx
            .catalog
            .biomes()
            .iter()
            .map(|biome| {
                let weather = world.weather_of(&biome.id);
                let exploration_pct = world.exploration_of(&biome.id);
                BiomeRow {
                    id: biome.id.clone(),
                    name: biome.name.clone(),
                    color: biome.color.clone(),
                    weather,
                    weather_name: ctx
                        .weather
                        .weather(weather)
                        .map(|definition| definition.name.clone())
                        .unwrap_or_else(|| weather.to_string()),
                    remaining_secs: world
                        .weather
                        .get(&biome.id)
                        .map_or(0, |current| current.remaining_secs),
                    effects: ctx.weather.effects(weather),
                    exploration_pct,
                    fully_explored: exploration_pct >= WorldState::FULLY_EXPLORED,
                    monster_count: ctx.catalog.monsters_in(&biome.id).len(),
                }
            })
            .collect();

        Self { biomes }
    }
}
