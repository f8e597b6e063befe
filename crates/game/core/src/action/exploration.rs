use crate::env::{GameEnv, OracleError};
use crate::rewards::streams;
use crate::state::{BiomeId, GameState, WorldState};

use super::{ActionError, ActionTransition};

/// Narrative finds reported by an exploration trip.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter, strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Discovery {
    TreasureCache,
    MonsterLair,
    HuntingGrounds,
}

impl Discovery {
    /// Chance of the discovery per exploration, in percent.
    pub const fn chance_pct(self) -> u32 {
        match self {
            Self::TreasureCache => 30,
            Self::MonsterLair => 20,
            Self::HuntingGrounds => 40,
        }
    }

    pub const fn message(self) -> &'static str {
        match self {
            Self::TreasureCache => "Found hidden treasure cache!",
            Self::MonsterLair => "Discovered rare monster lair!",
            Self::HuntingGrounds => "Mapped new hunting grounds!",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExploreOutcome {
    pub biome: BiomeId,
    pub gained: u32,
    pub progress: u32,
    pub discoveries: Vec<Discovery>,
    /// Set when this trip completed the map of the biome.
    pub fully_explored: bool,
}

/// Explores a biome for 5-20 % progress.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExploreAction {
    pub biome: BiomeId,
}

impl ExploreAction {
    pub const MIN_GAIN: u32 = 5;
    pub const MAX_GAIN: u32 = 20;
}

impl ActionTransition for ExploreAction {
    type Error = ActionError;
    type Result = ExploreOutcome;

    fn pre_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        env.catalog()?
            .biome(&self.biome)
            .ok_or_else(|| OracleError::BiomeNotFound(self.biome.clone()))?;
        if state.world.is_explored(&self.biome) {
            return Err(ActionError::BiomeFullyExplored(self.biome.clone()));
        }
        Ok(())
    }

    fn apply(
        &self,
        state: &mut GameState,
        env: &GameEnv<'_>,
    ) -> Result<ExploreOutcome, Self::Error> {
        use strum::IntoEnumIterator;

        let rng = env.rng()?;
        let gained = rng.range(
            state.roll_seed(streams::EXPLORE, 0),
            Self::MIN_GAIN,
            Self::MAX_GAIN,
        );
        let progress = state.world.explore(&self.biome, gained);

        let discoveries = Discovery::iter()
            .enumerate()
            .filter(|(index, discovery)| {
                let seed = state.roll_seed(streams::EXPLORE, *index as u32 + 1);
                rng.chance(seed, discovery.chance_pct())
            })
            .map(|(_, discovery)| discovery)
            .collect();

        let fully_explored = progress >= WorldState::FULLY_EXPLORED;
        tracing::debug!(biome = %self.biome, gained, progress, "explored");
        Ok(ExploreOutcome {
            biome: self.biome.clone(),
            gained,
            progress,
            discoveries,
            fully_explored,
        })
    }
}
