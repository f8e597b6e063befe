//! Hunt history, player profile, achievements and quests.
use strum::IntoEnumIterator;

use game_core::{
    AchievementId, Difficulty, EquipmentSlot, Faction, HuntId, ObjectiveKind, QuestId,
    ReputationTier, objective_progress,
};

use super::PanelContext;
use crate::format;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryView {
    /// Newest first, at most the panel's history limit.
    pub entries: Vec<HistoryRow>,
    pub hunts_completed: u64,
    pub total_defeated: u64,
    pub gold_earned: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryRow {
    pub id: HuntId,
    pub monster_name: String,
    pub difficulty: Difficulty,
    pub kills: u32,
    pub gold: u64,
    pub xp: u64,
    pub loot: Vec<String>,
    pub duration: String,
    pub completed_at_ms: u64,
}

impl HistoryView {
    pub(super) fn build(ctx: &PanelContext<'_>) -> Self {
        let counters = &ctx.state.profile.counters;
        let entries = ctx
            .state
            .history
            .iter()
            .take(ctx.history_limit)
            .map(|record| HistoryRow {
                id: record.id,
                monster_name: record.monster_name.clone(),
                difficulty: record.difficulty,
                kills: record.kills,
                gold: record.gold,
                xp: record.xp,
                loot: record
                    .loot
                    .iter()
                    .map(|item| format!("{} x{}", item.name, item.quantity))
                    .collect(),
                duration: format::duration_ms(record.duration_ms),
                completed_at_ms: record.completed_at_ms,
            })
            .collect();

        Self {
            entries,
            hunts_completed: counters.hunts_completed,
            total_defeated: counters.total_defeated,
            gold_earned: counters.gold_earned,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileView {
    pub name: String,
    pub faction: Faction,
    pub level: u32,
    pub xp: u64,
    pub xp_to_next_level: u64,
    pub xp_pct: u32,
    pub gold: u64,
    pub equipment: Vec<(EquipmentSlot, Option<String>)>,
    pub hunts_completed: u64,
    pub total_defeated: u64,
    pub items_crafted: u64,
    pub hunting_time: String,
    pub reputation: Vec<ReputationRow>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReputationRow {
    pub faction: Faction,
    pub points: i64,
    pub tier: ReputationTier,
}

impl ProfileView {
    pub(super) fn build(ctx: &PanelContext<'_>) -> Self {
        let profile = &ctx.state.profile;
        let counters = &profile.counters;

        let xp_pct = if profile.xp_to_next_level == 0 {
            100
        } else {
            (profile.xp.min(profile.xp_to_next_level) * 100 / profile.xp_to_next_level) as u32
        };

        let equipment = EquipmentSlot::iter()
            .map(|slot| {
                let name = profile.equipment.get(slot).map(|item| item.name.clone());
                (slot, name)
            })
            .collect();

        let reputation = Faction::iter()
            .map(|faction| ReputationRow {
                faction,
                points: profile.reputation_with(faction),
                tier: profile.reputation_tier(faction),
            })
            .collect();

        Self {
            name: profile.name.clone(),
            faction: profile.faction,
            level: profile.level,
            xp: profile.xp,
            xp_to_next_level: profile.xp_to_next_level,
            xp_pct,
            gold: ctx.state.gold,
            equipment,
            hunts_completed: counters.hunts_completed,
            total_defeated: counters.total_defeated,
            items_crafted: counters.items_crafted,
            hunting_time: format::duration_ms(counters.hunting_ms),
            reputation,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AchievementsView {
    pub achievements: Vec<AchievementRow>,
    pub completed: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AchievementRow {
    pub id: AchievementId,
    pub name: String,
    pub description: String,
    pub current: u64,
    pub target: u64,
    pub progress_pct: u32,
    /// Game time the achievement was unlocked.
    pub completed_at_ms: Option<u64>,
}

impl AchievementsView {
    pub(super) fn build(ctx: &PanelContext<'_>) -> Self {
        let log = &ctx.state.achievements;
        let achievements: Vec<_> = ctx
            .progression
            .achievements()
            .iter()
            .map(|definition| {
                let completed_at_ms = log.completed.get(&definition.id).copied();
                let current = definition.kind.measure(ctx.state);
                let progress_pct = if completed_at_ms.is_some() || definition.target == 0 {
                    100
                } else {
                    (current.min(definition.target) * 100 / definition.target) as u32
                };
                AchievementRow {
                    id: definition.id.clone(),
                    name: definition.name.clone(),
                    description: definition.description.clone(),
                    current,
                    target: definition.target,
                    progress_pct,
                    completed_at_ms,
                }
            })
            .collect();
        let completed = achievements
            .iter()
            .filter(|row| row.completed_at_ms.is_some())
            .count();

        Self {
            achievements,
            completed,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestsView {
    pub active: Vec<ActiveQuestRow>,
    pub available: Vec<AvailableQuestRow>,
    pub completed: usize,
    pub slots_free: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveQuestRow {
    pub id: QuestId,
    pub title: String,
    pub giver: String,
    pub objectives: Vec<ObjectiveRow>,
    /// Remaining game time; `None` for untimed quests.
    pub remaining_ms: Option<u64>,
    pub expired: bool,
    pub ready: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObjectiveRow {
    pub label: String,
    pub current: u32,
    pub required: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AvailableQuestRow {
    pub id: QuestId,
    pub title: String,
    pub description: String,
    pub giver: String,
    pub required_level: u32,
    pub reward_gold: u64,
    pub reward_xp: u64,
    pub can_accept: bool,
}

impl QuestsView {
    pub(super) fn build(ctx: &PanelContext<'_>) -> Self {
        let state = ctx.state;
        let quests = &state.quests;

        let active = quests
            .active
            .iter()
            .filter_map(|quest| {
                let template = ctx.progression.quest(&quest.id)?;
                let progress = objective_progress(template, quest, state);
                let objectives = template
                    .objectives
                    .iter()
                    .zip(&progress)
                    .map(|(spec, progress)| ObjectiveRow {
                        label: objective_label(ctx, &spec.kind),
                        current: progress.current.min(progress.required),
                        required: progress.required,
                    })
                    .collect();
                let expired = quest.is_expired(ctx.now_ms);
                Some(ActiveQuestRow {
                    id: quest.id.clone(),
                    title: template.title.clone(),
                    giver: giver_name(ctx, &template.giver),
                    objectives,
                    remaining_ms: quest
                        .expires_at_ms
                        .map(|expires| expires.saturating_sub(ctx.now_ms)),
                    expired,
                    ready: !expired && progress.iter().all(|objective| objective.is_met()),
                })
            })
            .collect();

        let slots_free = ctx
            .config
            .max_active_quests
            .saturating_sub(quests.active.len());
        let available = ctx
            .progression
            .quests()
            .iter()
            .filter(|template| {
                !quests.is_active(&template.id) && !quests.is_completed(&template.id)
            })
            .map(|template| AvailableQuestRow {
                id: template.id.clone(),
                title: template.title.clone(),
                description: template.description.clone(),
                giver: giver_name(ctx, &template.giver),
                required_level: template.required_level,
                reward_gold: template.rewards.gold,
                reward_xp: template.rewards.xp,
                can_accept: slots_free > 0 && state.profile.level >= template.required_level,
            })
            .collect();

        Self {
            active,
            available,
            completed: quests.completed.len(),
            slots_free,
        }
    }
}

fn giver_name(ctx: &PanelContext<'_>, id: &str) -> String {
    ctx.progression
        .quest_giver(id)
        .map(|giver| giver.name.clone())
        .unwrap_or_else(|| id.to_string())
}

fn objective_label(ctx: &PanelContext<'_>, kind: &ObjectiveKind) -> String {
    match kind {
        ObjectiveKind::Kill(monster) => format!("Defeat {}", ctx.monster_name(monster)),
        ObjectiveKind::Collect(item) => format!("Collect {}", ctx.item_name(item)),
        ObjectiveKind::Skill(skill) => format!("Train {}", skill.label()),
    }
}
