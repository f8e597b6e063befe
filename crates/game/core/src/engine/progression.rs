//! Bookkeeping that runs after every successful action: level-ups, monster
//! evolutions and achievements.

use crate::env::{CatalogOracle, ProgressionOracle};
use crate::state::{AchievementId, GameState, MonsterId};

/// Monsters whose evolution requirement is not met yet.
pub(super) fn locked_monsters(state: &GameState, catalog: &dyn CatalogOracle) -> Vec<MonsterId> {
    catalog
        .monsters()
        .iter()
        .filter(|monster| !monster.is_unlocked(&state.profile))
        .map(|monster| monster.id.clone())
        .collect()
}

/// Of the previously locked monsters, those unlocked now.
pub(super) fn newly_unlocked(
    previously_locked: Vec<MonsterId>,
    state: &GameState,
    catalog: &dyn CatalogOracle,
) -> Vec<MonsterId> {
    previously_locked
        .into_iter()
        .filter(|id| {
            catalog
                .monster(id)
                .is_some_and(|monster| monster.is_unlocked(&state.profile))
        })
        .collect()
}

/// Marks every achievement whose target is reached as completed at the
/// current clock. Returns the ones completed by this call.
pub(super) fn refresh_achievements(
    state: &mut GameState,
    progression: &dyn ProgressionOracle,
) -> Vec<AchievementId> {
    let reached: Vec<AchievementId> = progression
        .achievements()
        .iter()
        .filter(|achievement| !state.achievements.is_completed(&achievement.id))
        .filter(|achievement| achievement.kind.measure(state) >= achievement.target)
        .map(|achievement| achievement.id.clone())
        .collect();

    for id in &reached {
        state.achievements.completed.insert(id.clone(), state.clock_ms);
    }
    reached
}
