//! Player stats: stamina, skills and running hunts.

use arrayvec::ArrayVec;

use crate::config::GameConfig;

use super::{ActiveHunt, HuntId, MonsterId};

/// Stamina pool tracked in thousandths so per-second regeneration does not
/// round away.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StaminaMeter {
    current_milli: u64,
    pub maximum: u32,
    pub regen_per_minute: u32,
}

impl StaminaMeter {
    const SCALE: u64 = 1_000;

    pub fn new(current: u32, maximum: u32, regen_per_minute: u32) -> Self {
        Self {
            current_milli: u64::from(current.min(maximum)) * Self::SCALE,
            maximum,
            regen_per_minute,
        }
    }

    pub fn full(maximum: u32, regen_per_minute: u32) -> Self {
        Self::new(maximum, maximum, regen_per_minute)
    }

    /// Whole stamina points available.
    pub fn current(&self) -> u32 {
        (self.current_milli / Self::SCALE) as u32
    }

    pub fn is_full(&self) -> bool {
        self.current_milli >= self.max_milli()
    }

    pub fn has(&self, amount: u32) -> bool {
        self.current_milli >= u64::from(amount) * Self::SCALE
    }

    /// Spends `amount` points. Returns `false` and changes nothing when the
    /// pool is too low.
    pub fn spend(&mut self, amount: u32) -> bool {
        let cost = u64::from(amount) * Self::SCALE;
        if self.current_milli < cost {
            return false;
        }
        self.current_milli -= cost;
        true
    }

    /// Regenerates for `elapsed_ms` at the base rate boosted by `bonus_pct`.
    pub fn regenerate(&mut self, elapsed_ms: u64, bonus_pct: u32) {
        let per_minute_milli = u64::from(self.regen_per_minute) * Self::SCALE;
        let gained = per_minute_milli * elapsed_ms * u64::from(100 + bonus_pct) / (60_000 * 100);
        self.current_milli = (self.current_milli + gained).min(self.max_milli());
    }

    /// Fill ratio in percent, for progress bars.
    pub fn percent(&self) -> u32 {
        if self.maximum == 0 {
            return 0;
        }
        (self.current_milli * 100 / self.max_milli()) as u32
    }

    fn max_milli(&self) -> u64 {
        u64::from(self.maximum) * Self::SCALE
    }
}

impl Default for StaminaMeter {
    fn default() -> Self {
        Self::full(100, 5)
    }
}

#[derive(
    Clone,
    Copy,
    Debug,
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
pub enum SkillKind {
    AttackSpeed,
    CriticalStrike,
    ResourceGathering,
    StaminaRecovery,
}

impl SkillKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::AttackSpeed => "Attack Speed",
            Self::CriticalStrike => "Critical Strike",
            Self::ResourceGathering => "Resource Gathering",
            Self::StaminaRecovery => "Stamina Recovery",
        }
    }
}

/// Skill progress in points; [`GameConfig::SKILL_POINTS_PER_LEVEL`] points
/// make a level. Hunting grants fractional progress, purchases whole levels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Skills {
    pub attack_speed: u32,
    pub critical_strike: u32,
    pub resource_gathering: u32,
    pub stamina_recovery: u32,
}

impl Skills {
    pub fn from_levels(
        attack_speed: u32,
        critical_strike: u32,
        resource_gathering: u32,
        stamina_recovery: u32,
    ) -> Self {
        let points = GameConfig::SKILL_POINTS_PER_LEVEL;
        Self {
            attack_speed: attack_speed * points,
            critical_strike: critical_strike * points,
            resource_gathering: resource_gathering * points,
            stamina_recovery: stamina_recovery * points,
        }
    }

    pub fn points(&self, skill: SkillKind) -> u32 {
        match skill {
            SkillKind::AttackSpeed => self.attack_speed,
            SkillKind::CriticalStrike => self.critical_strike,
            SkillKind::ResourceGathering => self.resource_gathering,
            SkillKind::StaminaRecovery => self.stamina_recovery,
        }
    }

    fn points_mut(&mut self, skill: SkillKind) -> &mut u32 {
        match skill {
            SkillKind::AttackSpeed => &mut self.attack_speed,
            SkillKind::CriticalStrike => &mut self.critical_strike,
            SkillKind::ResourceGathering => &mut self.resource_gathering,
            SkillKind::StaminaRecovery => &mut self.stamina_recovery,
        }
    }

    /// Whole levels reached.
    pub fn level(&self, skill: SkillKind) -> u32 {
        self.points(skill) / GameConfig::SKILL_POINTS_PER_LEVEL
    }

    /// Adds progress, never exceeding `max_level`.
    pub fn add_points(&mut self, skill: SkillKind, points: u32, max_level: u32) {
        let cap = max_level * GameConfig::SKILL_POINTS_PER_LEVEL;
        let slot = self.points_mut(skill);
        *slot = slot.saturating_add(points).min(cap.max(*slot));
    }

    /// Raises the skill by one whole level, keeping fractional progress.
    pub fn raise_level(&mut self, skill: SkillKind) {
        let slot = self.points_mut(skill);
        *slot = slot.saturating_add(GameConfig::SKILL_POINTS_PER_LEVEL);
    }

    pub fn total_levels(&self) -> u32 {
        use strum::IntoEnumIterator;
        SkillKind::iter().map(|skill| self.level(skill)).sum()
    }
}

/// Stamina, skills and running hunts.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerStats {
    pub stamina: StaminaMeter,
    pub skills: Skills,
    pub active_hunts: ArrayVec<ActiveHunt, { GameConfig::MAX_ACTIVE_HUNTS }>,
}

impl PlayerStats {
    pub fn new(stamina: StaminaMeter, skills: Skills) -> Self {
        Self {
            stamina,
            skills,
            active_hunts: ArrayVec::new(),
        }
    }

    pub fn hunt(&self, id: HuntId) -> Option<&ActiveHunt> {
        self.active_hunts.iter().find(|hunt| hunt.id == id)
    }

    pub fn is_hunting(&self, monster: &MonsterId) -> bool {
        self.active_hunts.iter().any(|hunt| &hunt.monster == monster)
    }

    pub fn take_hunt(&mut self, id: HuntId) -> Option<ActiveHunt> {
        let index = self.active_hunts.iter().position(|hunt| hunt.id == id)?;
        Some(self.active_hunts.remove(index))
    }
}
