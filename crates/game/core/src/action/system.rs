//! Timer-driven actions submitted by the runtime rather than the player.

use crate::env::GameEnv;
use crate::rewards::{equipment_bonus, streams};
use crate::state::{BiomeId, BiomeWeather, GameState, SkillKind, WeatherKind};

use super::{ActionError, ActionTransition};

/// Regenerates stamina for elapsed time.
///
/// The base regeneration rate is boosted by stamina recovery levels and the
/// stamina regen of equipped gear.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegenerateStaminaAction {
    pub elapsed_ms: u64,
}

impl ActionTransition for RegenerateStaminaAction {
    type Error = ActionError;
    type Result = u32;

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<u32, Self::Error> {
        let config = env.config()?;
        let recovery = state.stats.skills.level(SkillKind::StaminaRecovery);
        let bonus_pct = recovery * config.regen_pct_per_skill_level
            + equipment_bonus(&state.profile.equipment).stamina_regen;

        state.stats.stamina.regenerate(self.elapsed_ms, bonus_pct);
        Ok(state.stats.stamina.current())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeatherChange {
    pub biome: BiomeId,
    pub kind: WeatherKind,
    pub duration_secs: u64,
}

/// Counts weather down in every biome and re-rolls expired weather.
///
/// Biomes without weather are rolled immediately, so advancing by zero
/// seconds initialises a fresh world.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdvanceWeatherAction {
    pub elapsed_secs: u64,
}

impl ActionTransition for AdvanceWeatherAction {
    type Error = ActionError;
    type Result = Vec<WeatherChange>;

    fn apply(
        &self,
        state: &mut GameState,
        env: &GameEnv<'_>,
    ) -> Result<Vec<WeatherChange>, Self::Error> {
        let catalog = env.catalog()?;
        let weather = env.weather()?;
        let rng = env.rng()?;
        let total_weight = weather.total_weight();

        let mut changes = Vec::new();
        for (index, biome) in catalog.biomes().iter().enumerate() {
            match state.world.weather.get_mut(&biome.id) {
                Some(current) if current.remaining_secs > self.elapsed_secs => {
                    current.remaining_secs -= self.elapsed_secs;
                    continue;
                }
                _ => {}
            }
            if total_weight == 0 {
                continue;
            }

            let seed = state.roll_seed(streams::WEATHER, index as u32);
            let Some(next) = weather.pick(rng.range(seed, 0, total_weight - 1)) else {
                continue;
            };
            state.world.weather.insert(
                biome.id.clone(),
                BiomeWeather {
                    kind: next.kind,
                    remaining_secs: next.duration_secs,
                },
            );
            tracing::debug!(biome = %biome.id, weather = %next.kind, "weather changed");
            changes.push(WeatherChange {
                biome: biome.id.clone(),
                kind: next.kind,
                duration_secs: next.duration_secs,
            });
        }
        Ok(changes)
    }
}
