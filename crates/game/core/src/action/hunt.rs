//! Hunt lifecycle: starting, resolving and auto-hunt selection.

use crate::env::{GameEnv, MonsterTemplate, OracleError};
use crate::rewards::{
    LootResult, SkillGain, drop_rate_pct, equipment_bonus, hunt_stamina_cost, kill_bonus,
    modified_hunt_time, roll_kill_count, roll_loot, settle_rewards, streams, time_multiplier_pct,
};
use crate::state::{
    ActiveHunt, Difficulty, GameState, HuntId, HuntRecord, InventoryItem, MonsterId, SkillKind,
};

use super::quests::record_quest_kills;
use super::{ActionError, ActionTransition};

fn monster_template<'e>(
    env: &GameEnv<'e>,
    monster: &MonsterId,
) -> Result<&'e MonsterTemplate, ActionError> {
    let template = env
        .catalog()?
        .monster(monster)
        .ok_or_else(|| OracleError::MonsterNotFound(monster.clone()))?;
    Ok(template)
}

/// Starts a timed hunt against a monster.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StartHuntAction {
    pub monster: MonsterId,
    pub difficulty: Difficulty,
}

impl StartHuntAction {
    pub fn new(monster: impl Into<MonsterId>, difficulty: Difficulty) -> Self {
        Self {
            monster: monster.into(),
            difficulty,
        }
    }

    /// Stamina cost and duration of the hunt under the current state.
    fn plan(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(u32, u64), ActionError> {
        let config = env.config()?;
        let template = monster_template(env, &self.monster)?;
        let effects = env
            .weather()?
            .effects(state.world.weather_of(&template.biome));

        let cost = hunt_stamina_cost(config, &effects);
        let gear = equipment_bonus(&state.profile.equipment);
        let duration = modified_hunt_time(
            template.base_hunt_ms(),
            gear.speed_pct(),
            state.stats.skills.level(SkillKind::AttackSpeed),
            time_multiplier_pct(self.difficulty, &effects),
            config,
        );
        Ok((cost, duration))
    }
}

impl ActionTransition for StartHuntAction {
    type Error = ActionError;
    type Result = ActiveHunt;

    fn pre_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let config = env.config()?;
        let template = monster_template(env, &self.monster)?;

        if !template.is_unlocked(&state.profile) {
            return Err(ActionError::MonsterLocked(self.monster.clone()));
        }
        if state.stats.is_hunting(&self.monster) {
            return Err(ActionError::AlreadyHunting(self.monster.clone()));
        }
        let limit = config.active_hunt_limit();
        if state.stats.active_hunts.len() >= limit {
            return Err(ActionError::TooManyHunts { limit });
        }

        let (cost, _) = self.plan(state, env)?;
        if !state.stats.stamina.has(cost) {
            return Err(ActionError::InsufficientStamina {
                required: cost,
                available: state.stats.stamina.current(),
            });
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<ActiveHunt, Self::Error> {
        let config = env.config()?;
        let template = monster_template(env, &self.monster)?;
        let (cost, duration_ms) = self.plan(state, env)?;

        if !state.stats.stamina.spend(cost) {
            return Err(ActionError::InsufficientStamina {
                required: cost,
                available: state.stats.stamina.current(),
            });
        }

        let hunt = ActiveHunt {
            id: state.allocate_hunt_id(),
            monster: self.monster.clone(),
            biome: template.biome.clone(),
            difficulty: self.difficulty,
            started_at_ms: state.clock_ms,
            duration_ms,
            stamina_spent: cost,
        };
        state
            .stats
            .active_hunts
            .try_push(hunt.clone())
            .map_err(|_| ActionError::TooManyHunts {
                limit: config.active_hunt_limit(),
            })?;

        tracing::debug!(
            hunt = %hunt.id,
            monster = %hunt.monster,
            difficulty = %hunt.difficulty,
            duration_ms,
            "hunt started"
        );
        Ok(hunt)
    }

    fn post_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        if state.stats.active_hunts.len() > env.config()?.active_hunt_limit() {
            return Err(ActionError::InvariantViolation("active hunts exceed the limit"));
        }
        Ok(())
    }
}

/// Everything a finished hunt produced.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HuntCompletion {
    pub record: HuntRecord,
    pub loot: LootResult,
    pub skills: SkillGain,
}

/// Resolves a hunt whose timer has elapsed.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompleteHuntAction {
    pub hunt: HuntId,
}

impl CompleteHuntAction {
    pub fn new(hunt: HuntId) -> Self {
        Self { hunt }
    }
}

impl ActionTransition for CompleteHuntAction {
    type Error = ActionError;
    type Result = HuntCompletion;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let hunt = state
            .stats
            .hunt(self.hunt)
            .ok_or(ActionError::HuntNotFound(self.hunt))?;
        if !hunt.is_due(state.clock_ms) {
            return Err(ActionError::HuntNotFinished {
                hunt: self.hunt,
                remaining_ms: hunt.remaining_ms(state.clock_ms),
            });
        }
        Ok(())
    }

    fn apply(
        &self,
        state: &mut GameState,
        env: &GameEnv<'_>,
    ) -> Result<HuntCompletion, Self::Error> {
        let config = env.config()?;
        let catalog = env.catalog()?;
        let rng = env.rng()?;

        let hunt = state
            .stats
            .take_hunt(self.hunt)
            .ok_or(ActionError::HuntNotFound(self.hunt))?;
        let monster = monster_template(env, &hunt.monster)?;
        let effects = env.weather()?.effects(state.world.weather_of(&hunt.biome));
        let gear = equipment_bonus(&state.profile.equipment);

        let kills = roll_kill_count(
            rng,
            state.roll_seed(streams::KILLS, 0),
            hunt.difficulty.kill_range(),
            kill_bonus(&state.stats.skills, &gear),
            config,
        );
        let drop_rate = drop_rate_pct(
            state.stats.skills.level(SkillKind::ResourceGathering),
            gear.drop_rate,
            state.world.is_explored(&hunt.biome),
            hunt.difficulty,
            &effects,
            config,
        );
        let loot = roll_loot(
            rng,
            state.roll_seed(streams::LOOT, 0),
            &monster.drops,
            kills,
            drop_rate,
        );

        let items = loot
            .consolidated
            .iter()
            .map(|drop| {
                catalog
                    .item(&drop.item)
                    .map(|definition| definition.instantiate_as(drop.rarity, drop.quantity))
                    .ok_or_else(|| OracleError::ItemNotFound(drop.item.clone()))
            })
            .collect::<Result<Vec<InventoryItem>, _>>()?;

        let settlement = settle_rewards(monster, &hunt, kills, items.clone(), state.clock_ms);

        for item in items {
            state.inventory.add(item);
        }
        state.earn_gold(settlement.gold);
        state.profile.xp = state.profile.xp.saturating_add(settlement.xp);

        let skills = &mut state.stats.skills;
        skills.add_points(
            SkillKind::AttackSpeed,
            settlement.skills.attack_speed,
            config.max_skill_level,
        );
        skills.add_points(
            SkillKind::ResourceGathering,
            settlement.skills.resource_gathering,
            config.max_skill_level,
        );

        let counters = &mut state.profile.counters;
        counters.record_kills(&monster.id, kills);
        counters.hunts_completed += 1;
        counters.hunting_ms = counters.hunting_ms.saturating_add(hunt.duration_ms);

        record_quest_kills(state, env.progression()?, &monster.id, kills);
        state.record_hunt(settlement.record.clone(), config.history_capacity);

        tracing::debug!(
            hunt = %hunt.id,
            monster = %monster.id,
            kills,
            gold = settlement.gold,
            xp = settlement.xp,
            "hunt completed"
        );

        Ok(HuntCompletion {
            record: settlement.record,
            loot,
            skills: settlement.skills,
        })
    }

    fn post_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        if state.stats.hunt(self.hunt).is_some() {
            return Err(ActionError::InvariantViolation("completed hunt is still active"));
        }
        Ok(())
    }
}

/// Toggles automatic re-hunting of a monster.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SetAutoHuntAction {
    pub monster: MonsterId,
    pub enabled: bool,
}

impl ActionTransition for SetAutoHuntAction {
    type Error = ActionError;
    type Result = bool;

    fn pre_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        monster_template(env, &self.monster)?;
        if !self.enabled {
            return Ok(());
        }

        let required = env.config()?.auto_hunt_threshold;
        let defeated = state.profile.counters.defeated(&self.monster);
        if defeated < required {
            return Err(ActionError::AutoHuntLocked {
                monster: self.monster.clone(),
                required,
                defeated,
            });
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, _env: &GameEnv<'_>) -> Result<bool, Self::Error> {
        if self.enabled {
            state.profile.auto_hunt.insert(self.monster.clone());
        } else {
            state.profile.auto_hunt.remove(&self.monster);
        }
        Ok(self.enabled)
    }
}
