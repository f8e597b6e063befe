//! Quest log and achievement progress.

use std::collections::{BTreeMap, BTreeSet};

use super::{AchievementId, QuestId};

/// An accepted quest. `progress` holds one counter per objective of the
/// template, used by kill objectives; collect and skill objectives are read
/// from the live state instead.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActiveQuest {
    pub id: QuestId,
    pub accepted_at_ms: u64,
    pub expires_at_ms: Option<u64>,
    pub progress: Vec<u32>,
}

impl ActiveQuest {
    pub fn is_expired(&self, now_ms: u64) -> bool {
        self.expires_at_ms.is_some_and(|deadline| now_ms > deadline)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuestLog {
    pub active: Vec<ActiveQuest>,
    pub completed: BTreeSet<QuestId>,
}

impl QuestLog {
    pub fn get(&self, id: &QuestId) -> Option<&ActiveQuest> {
        self.active.iter().find(|quest| &quest.id == id)
    }

    pub fn is_active(&self, id: &QuestId) -> bool {
        self.get(id).is_some()
    }

    pub fn is_completed(&self, id: &QuestId) -> bool {
        self.completed.contains(id)
    }

    pub fn take(&mut self, id: &QuestId) -> Option<ActiveQuest> {
        let index = self.active.iter().position(|quest| &quest.id == id)?;
        Some(self.active.remove(index))
    }
}

/// Completed achievements with the clock time they were reached.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AchievementLog {
    pub completed: BTreeMap<AchievementId, u64>,
}

impl AchievementLog {
    pub fn is_completed(&self, id: &AchievementId) -> bool {
        self.completed.contains_key(id)
    }
}
