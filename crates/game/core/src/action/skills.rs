use crate::config::GameConfig;
use crate::env::GameEnv;
use crate::state::{GameState, SkillKind};

use super::{ActionError, ActionTransition};

/// Gold price of the next level of a skill currently at `level`.
pub fn skill_upgrade_cost(level: u32, config: &GameConfig) -> u64 {
    u64::from(level + 1) * config.skill_cost_per_level
}

/// Buys one level of a skill.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UpgradeSkillAction {
    pub skill: SkillKind,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillUpgrade {
    pub skill: SkillKind,
    pub level: u32,
    pub cost: u64,
}

impl ActionTransition for UpgradeSkillAction {
    type Error = ActionError;
    type Result = SkillUpgrade;

    fn pre_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let config = env.config()?;
        let level = state.stats.skills.level(self.skill);
        if level >= config.max_skill_level {
            return Err(ActionError::SkillMaxed(self.skill));
        }
        let cost = skill_upgrade_cost(level, config);
        if state.gold < cost {
            return Err(ActionError::InsufficientGold {
                required: cost,
                available: state.gold,
            });
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<SkillUpgrade, Self::Error> {
        let config = env.config()?;
        let cost = skill_upgrade_cost(state.stats.skills.level(self.skill), config);
        if !state.spend_gold(cost) {
            return Err(ActionError::InsufficientGold {
                required: cost,
                available: state.gold,
            });
        }
        state.stats.skills.raise_level(self.skill);
        let level = state.stats.skills.level(self.skill);

        tracing::debug!(skill = %self.skill, level, cost, "skill upgraded");
        Ok(SkillUpgrade {
            skill: self.skill,
            level,
            cost,
        })
    }

    fn post_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        if state.stats.skills.level(self.skill) > env.config()?.max_skill_level {
            return Err(ActionError::InvariantViolation("skill level above maximum"));
        }
        Ok(())
    }
}
