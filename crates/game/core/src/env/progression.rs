//! Quest and achievement definitions.

use crate::state::{
    AchievementId, Faction, GameState, ItemId, ItemStack, MonsterId, QuestId, SkillKind,
};

/// NPC handing out quests.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuestGiver {
    pub id: String,
    pub name: String,
    pub faction: Faction,
    pub location: String,
    pub greeting: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ObjectiveKind {
    /// Defeat a monster after accepting the quest.
    Kill(MonsterId),
    /// Hold items in the inventory when turning the quest in.
    Collect(ItemId),
    /// Reach a skill level.
    Skill(SkillKind),
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectiveSpec {
    pub kind: ObjectiveKind,
    pub required: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct QuestRewards {
    pub gold: u64,
    pub xp: u64,
    pub items: Vec<ItemStack>,
    pub reputation: Option<(Faction, i64)>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuestTemplate {
    pub id: QuestId,
    pub title: String,
    pub description: String,
    pub giver: String,
    pub objectives: Vec<ObjectiveSpec>,
    pub rewards: QuestRewards,
    #[cfg_attr(feature = "serde", serde(default))]
    pub time_limit_secs: Option<u64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub required_level: u32,
}

/// Lifetime statistic an achievement tracks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AchievementKind {
    MonstersDefeated,
    ItemsCrafted,
    GoldEarned,
    SkillLevels,
    /// Total time spent hunting, in seconds.
    HuntingTime,
    HuntsCompleted,
}

impl AchievementKind {
    /// Current value of the tracked statistic.
    pub fn measure(self, state: &GameState) -> u64 {
        let counters = &state.profile.counters;
        match self {
            Self::MonstersDefeated => counters.total_defeated,
            Self::ItemsCrafted => counters.items_crafted,
            Self::GoldEarned => counters.gold_earned,
            Self::SkillLevels => u64::from(state.stats.skills.total_levels()),
            Self::HuntingTime => counters.hunting_ms / 1_000,
            Self::HuntsCompleted => counters.hunts_completed,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AchievementDefinition {
    pub id: AchievementId,
    pub name: String,
    pub description: String,
    pub kind: AchievementKind,
    pub target: u64,
}

/// Read-only access to quests, quest givers and achievements.
pub trait ProgressionOracle: Send + Sync {
    fn quests(&self) -> &[QuestTemplate];

    fn quest_givers(&self) -> &[QuestGiver];

    fn achievements(&self) -> &[AchievementDefinition];

    fn quest(&self, id: &QuestId) -> Option<&QuestTemplate> {
        self.quests().iter().find(|quest| &quest.id == id)
    }

    fn quest_giver(&self, id: &str) -> Option<&QuestGiver> {
        self.quest_givers().iter().find(|giver| giver.id == id)
    }
}
