//! Quest board actions and objective tracking.

use crate::env::{GameEnv, ObjectiveKind, OracleError, ProgressionOracle, QuestTemplate};
use crate::state::{ActiveQuest, Faction, GameState, InventoryItem, MonsterId, QuestId};

use super::{ActionError, ActionTransition};

/// Current value of one quest objective.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ObjectiveProgress {
    pub current: u32,
    pub required: u32,
}

impl ObjectiveProgress {
    pub fn is_met(&self) -> bool {
        self.current >= self.required
    }
}

/// Evaluates every objective of an accepted quest.
///
/// Kill objectives read the counter stored on the quest; collect objectives
/// read the inventory and skill objectives the current skill level.
pub fn objective_progress(
    template: &QuestTemplate,
    quest: &ActiveQuest,
    state: &GameState,
) -> Vec<ObjectiveProgress> {
    template
        .objectives
        .iter()
        .enumerate()
        .map(|(index, objective)| {
            let current = match &objective.kind {
                ObjectiveKind::Kill(_) => quest.progress.get(index).copied().unwrap_or(0),
                ObjectiveKind::Collect(item) => state.inventory.quantity_of(item),
                ObjectiveKind::Skill(skill) => state.stats.skills.level(*skill),
            };
            ObjectiveProgress {
                current: current.min(objective.required),
                required: objective.required,
            }
        })
        .collect()
}

/// Credits kills to every active quest with a matching kill objective.
pub(crate) fn record_quest_kills(
    state: &mut GameState,
    progression: &dyn ProgressionOracle,
    monster: &MonsterId,
    kills: u32,
) {
    let now_ms = state.clock_ms;
    for quest in &mut state.quests.active {
        if quest.is_expired(now_ms) {
            continue;
        }
        let Some(template) = progression.quest(&quest.id) else {
            continue;
        };
        if quest.progress.len() < template.objectives.len() {
            quest.progress.resize(template.objectives.len(), 0);
        }
        for (index, objective) in template.objectives.iter().enumerate() {
            if matches!(&objective.kind, ObjectiveKind::Kill(target) if target == monster) {
                let slot = &mut quest.progress[index];
                *slot = slot.saturating_add(kills).min(objective.required);
            }
        }
    }
}

fn quest_template<'e>(env: &GameEnv<'e>, quest: &QuestId) -> Result<&'e QuestTemplate, ActionError> {
    let template = env
        .progression()?
        .quest(quest)
        .ok_or_else(|| OracleError::QuestNotFound(quest.clone()))?;
    Ok(template)
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcceptQuestAction {
    pub quest: QuestId,
}

impl ActionTransition for AcceptQuestAction {
    type Error = ActionError;
    type Result = ActiveQuest;

    fn pre_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let template = quest_template(env, &self.quest)?;

        if state.quests.is_completed(&self.quest) {
            return Err(ActionError::QuestAlreadyCompleted(self.quest.clone()));
        }
        if state.quests.is_active(&self.quest) {
            return Err(ActionError::QuestAlreadyActive(self.quest.clone()));
        }
        if state.profile.level < template.required_level {
            return Err(ActionError::LevelTooLow {
                required: template.required_level,
                current: state.profile.level,
            });
        }
        let limit = env.config()?.max_active_quests;
        if state.quests.active.len() >= limit {
            return Err(ActionError::QuestLimitReached { limit });
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<ActiveQuest, Self::Error> {
        let template = quest_template(env, &self.quest)?;
        let quest = ActiveQuest {
            id: self.quest.clone(),
            accepted_at_ms: state.clock_ms,
            expires_at_ms: template
                .time_limit_secs
                .map(|secs| state.clock_ms.saturating_add(secs.saturating_mul(1_000))),
            progress: vec![0; template.objectives.len()],
        };
        state.quests.active.push(quest.clone());
        tracing::debug!(quest = %self.quest, "quest accepted");
        Ok(quest)
    }
}

/// Rewards handed out when a quest is turned in.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuestRewardGrant {
    pub quest: QuestId,
    pub gold: u64,
    pub xp: u64,
    pub items: Vec<InventoryItem>,
    pub reputation: Option<(Faction, i64)>,
}

/// Turns in a quest whose objectives are all met.
///
/// Collected items are checked, not consumed.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompleteQuestAction {
    pub quest: QuestId,
}

impl ActionTransition for CompleteQuestAction {
    type Error = ActionError;
    type Result = QuestRewardGrant;

    fn pre_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let Some(quest) = state.quests.get(&self.quest) else {
            if state.quests.is_completed(&self.quest) {
                return Err(ActionError::QuestAlreadyCompleted(self.quest.clone()));
            }
            return Err(ActionError::QuestNotActive(self.quest.clone()));
        };
        let template = quest_template(env, &self.quest)?;

        if quest.is_expired(state.clock_ms) {
            return Err(ActionError::QuestExpired(self.quest.clone()));
        }
        if !objective_progress(template, quest, state)
            .iter()
            .all(ObjectiveProgress::is_met)
        {
            return Err(ActionError::ObjectivesIncomplete(self.quest.clone()));
        }
        Ok(())
    }

    fn apply(
        &self,
        state: &mut GameState,
        env: &GameEnv<'_>,
    ) -> Result<QuestRewardGrant, Self::Error> {
        let template = quest_template(env, &self.quest)?;
        let catalog = env.catalog()?;
        let rewards = &template.rewards;

        let items = rewards
            .items
            .iter()
            .map(|stack| {
                catalog
                    .item(&stack.item)
                    .map(|definition| definition.instantiate(stack.quantity))
                    .ok_or_else(|| OracleError::ItemNotFound(stack.item.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        state
            .quests
            .take(&self.quest)
            .ok_or_else(|| ActionError::QuestNotActive(self.quest.clone()))?;
        state.quests.completed.insert(self.quest.clone());

        state.earn_gold(rewards.gold);
        state.profile.xp = state.profile.xp.saturating_add(rewards.xp);
        for item in &items {
            state.inventory.add(item.clone());
        }
        if let Some((faction, amount)) = rewards.reputation {
            state.profile.add_reputation(faction, amount);
        }

        tracing::debug!(quest = %self.quest, gold = rewards.gold, xp = rewards.xp, "quest completed");
        Ok(QuestRewardGrant {
            quest: self.quest.clone(),
            gold: rewards.gold,
            xp: rewards.xp,
            items,
            reputation: rewards.reputation,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AbandonQuestAction {
    pub quest: QuestId,
}

impl ActionTransition for AbandonQuestAction {
    type Error = ActionError;
    type Result = ();

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        if !state.quests.is_active(&self.quest) {
            return Err(ActionError::QuestNotActive(self.quest.clone()));
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        state
            .quests
            .take(&self.quest)
            .ok_or_else(|| ActionError::QuestNotActive(self.quest.clone()))?;
        Ok(())
    }
}
