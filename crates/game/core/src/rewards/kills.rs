use crate::config::GameConfig;
use crate::env::RngOracle;
use crate::state::{SkillKind, Skills};

use super::EquipmentBonus;

/// Extra kills added to the top of the kill range: half the critical strike
/// level plus gear multi-kill.
pub fn kill_bonus(skills: &Skills, gear: &EquipmentBonus) -> u32 {
    skills.level(SkillKind::CriticalStrike) / 2 + gear.multi_kill
}

/// Rolls the number of monsters defeated in one hunt.
///
/// Uniform over `range` with the upper bound widened by `bonus`; both bounds
/// are clamped to `1..=max_kills_per_hunt`.
pub fn roll_kill_count<R>(
    rng: &R,
    seed: u64,
    range: (u32, u32),
    bonus: u32,
    config: &GameConfig,
) -> u32
where
    R: RngOracle + ?Sized,
{
    let cap = config.max_kills_per_hunt.max(1);
    let min = range.0.clamp(1, cap);
    let max = range.1.saturating_add(bonus).clamp(min, cap);
    rng.range(seed, min, max)
}
