use crate::config::GameConfig;
use crate::env::WeatherEffects;
use crate::state::Difficulty;

/// Combined duration multiplier of difficulty and weather, in percent.
pub fn time_multiplier_pct(difficulty: Difficulty, weather: &WeatherEffects) -> u32 {
    difficulty.time_pct() * weather.hunt_time_pct / 100
}

/// Stamina needed to start a hunt under the given weather.
pub fn hunt_stamina_cost(config: &GameConfig, weather: &WeatherEffects) -> u32 {
    config.hunt_stamina_cost * weather.stamina_cost_pct / 100
}

/// Hunt duration after speed bonuses and difficulty/weather scaling.
///
/// The total speed bonus (gear + `skill_level` attack speed levels) is
/// capped and applied as a reduction of `base_ms`; the time multiplier is
/// applied on top. The result never drops below the configured minimum share
/// of `base_ms`.
pub fn modified_hunt_time(
    base_ms: u64,
    gear_speed_pct: u32,
    skill_level: u32,
    time_multiplier_pct: u32,
    config: &GameConfig,
) -> u64 {
    let skill_bonus = skill_level.saturating_mul(config.speed_pct_per_skill_level);
    let total_bonus = gear_speed_pct.saturating_add(skill_bonus);
    let reduction = u64::from(total_bonus.min(config.speed_bonus_cap_pct).min(100));

    let reduced = base_ms * (100 - reduction) / 100;
    let scaled = reduced * u64::from(time_multiplier_pct) / 100;
    let floor = base_ms * u64::from(config.min_hunt_time_pct) / 100;
    scaled.max(floor)
}
