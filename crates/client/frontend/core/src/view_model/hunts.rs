//! Monster hunts panel: stamina, running hunts and the monster board.
use game_core::rewards::{hunt_stamina_cost, modified_hunt_time, time_multiplier_pct};
use game_core::{
    BiomeId, Difficulty, EvolutionRequirement, HuntId, MonsterId, MonsterTemplate, SkillKind,
    WeatherKind, equipment_bonus,
};

use super::PanelContext;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HuntsView {
    pub stamina: u32,
    pub max_stamina: u32,
    pub stamina_pct: u32,
    pub active: Vec<ActiveHuntRow>,
    pub free_slots: usize,
    pub monsters: Vec<MonsterRow>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveHuntRow {
    pub id: HuntId,
    pub monster: MonsterId,
    pub monster_name: String,
    pub difficulty: Difficulty,
    pub progress_pct: u32,
    pub remaining_ms: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonsterRow {
    pub id: MonsterId,
    pub name: String,
    pub biome: BiomeId,
    pub biome_name: String,
    pub weather: WeatherKind,
    pub level: u32,
    /// Duration of a normal hunt with the current gear, skills and weather.
    pub hunt_ms: u64,
    pub stamina_cost: u32,
    pub gold_reward: u64,
    pub xp_reward: u64,
    pub unlocked: bool,
    /// What still stands between the player and an evolved monster.
    pub requirement: Option<String>,
    pub hunting: bool,
    pub can_start: bool,
    pub auto_hunt: bool,
    pub auto_hunt_available: bool,
}

impl HuntsView {
    pub(super) fn build(ctx: &PanelContext<'_>) -> Self {
        let state = ctx.state;
        let limit = ctx.config.active_hunt_limit();

        let active = state
            .stats
            .active_hunts
            .iter()
            .map(|hunt| ActiveHuntRow {
                id: hunt.id,
                monster: hunt.monster.clone(),
                monster_name: ctx.monster_name(&hunt.monster),
                difficulty: hunt.difficulty,
                progress_pct: hunt.progress_pct(ctx.now_ms),
                remaining_ms: hunt.remaining_ms(ctx.now_ms),
            })
            .collect();
        let free_slots = limit.saturating_sub(state.stats.active_hunts.len());

        let monsters = ctx
            .catalog
            .monsters()
            .iter()
            .map(|template| monster_row(ctx, template, free_slots > 0))
            .collect();

        Self {
            stamina: state.stats.stamina.current(),
            max_stamina: state.stats.stamina.maximum,
            stamina_pct: state.stats.stamina.percent(),
            active,
            free_slots,
            monsters,
        }
    }
}

fn monster_row(ctx: &PanelContext<'_>, template: &MonsterTemplate, slot_free: bool) -> MonsterRow {
    let state = ctx.state;
    let profile = &state.profile;
    let weather = state.world.weather_of(&template.biome);
    let effects = ctx.weather.effects(weather);

    let hunt_ms = modified_hunt_time(
        template.base_hunt_ms(),
        equipment_bonus(&profile.equipment).speed_pct(),
        state.stats.skills.level(SkillKind::AttackSpeed),
        time_multiplier_pct(Difficulty::Normal, &effects),
        ctx.config,
    );
    let stamina_cost = hunt_stamina_cost(ctx.config, &effects);

    let unlocked = template.is_unlocked(profile);
    let requirement = template
        .evolution
        .as_ref()
        .filter(|_| !unlocked)
        .map(|evolution| match evolution.requirement {
            EvolutionRequirement::Kills(required) => format!(
                "Defeat {} {} ({}/{required})",
                required,
                ctx.monster_name(&evolution.from),
                profile.counters.defeated(&evolution.from),
            ),
            EvolutionRequirement::PlayerLevel(required) => {
                format!("Reach level {required} (level {})", profile.level)
            }
        });

    let hunting = state.stats.is_hunting(&template.id);
    MonsterRow {
        id: template.id.clone(),
        name: template.name.clone(),
        biome: template.biome.clone(),
        biome_name: ctx.biome_name(&template.biome),
        weather,
        level: template.level,
        hunt_ms,
        stamina_cost,
        gold_reward: template.gold_reward,
        xp_reward: template.xp_reward,
        unlocked,
        requirement,
        hunting,
        can_start: unlocked && !hunting && slot_free && state.stats.stamina.has(stamina_cost),
        auto_hunt: profile.auto_hunt.contains(&template.id),
        auto_hunt_available: profile.counters.defeated(&template.id)
            >= ctx.config.auto_hunt_threshold,
    }
}
