//! Traits describing read-only game content.
//!
//! Oracles expose monsters, items, recipes, market listings, weather, quests
//! and achievements. The [`Env`] aggregate bundles them together with the
//! tunable [`GameConfig`] and the RNG so the engine can access everything it
//! needs without hard coupling to concrete implementations.
mod catalog;
mod economy;
mod error;
mod items;
mod monsters;
mod progression;
mod rng;
mod weather;

pub use catalog::CatalogOracle;
pub use economy::{EconomyOracle, MarketListing, PriceTrend};
pub use error::OracleError;
pub use items::{ItemDefinition, Recipe, RecipeCategory};
pub use monsters::{BiomeDefinition, DropEntry, Evolution, EvolutionRequirement, MonsterTemplate};
pub use progression::{
    AchievementDefinition, AchievementKind, ObjectiveKind, ObjectiveSpec, ProgressionOracle,
    QuestGiver, QuestRewards, QuestTemplate,
};
pub use rng::{PcgRng, RngOracle, compute_seed};
pub use weather::{WeatherDefinition, WeatherEffects, WeatherOracle};

use crate::config::GameConfig;

/// Aggregates read-only oracles required by the action pipeline.
pub struct Env<'a, C, E, W, P, R>
where
    C: CatalogOracle + ?Sized,
    E: EconomyOracle + ?Sized,
    W: WeatherOracle + ?Sized,
    P: ProgressionOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    catalog: Option<&'a C>,
    economy: Option<&'a E>,
    weather: Option<&'a W>,
    progression: Option<&'a P>,
    rng: Option<&'a R>,
    config: Option<&'a GameConfig>,
}

pub type GameEnv<'a> = Env<
    'a,
    dyn CatalogOracle + 'a,
    dyn EconomyOracle + 'a,
    dyn WeatherOracle + 'a,
    dyn ProgressionOracle + 'a,
    dyn RngOracle + 'a,
>;

impl<'a, C, E, W, P, R> Env<'a, C, E, W, P, R>
where
    C: CatalogOracle + ?Sized,
    E: EconomyOracle + ?Sized,
    W: WeatherOracle + ?Sized,
    P: ProgressionOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    pub fn new(
        catalog: Option<&'a C>,
        economy: Option<&'a E>,
        weather: Option<&'a W>,
        progression: Option<&'a P>,
        rng: Option<&'a R>,
        config: Option<&'a GameConfig>,
    ) -> Self {
        Self {
            catalog,
            economy,
            weather,
            progression,
            rng,
            config,
        }
    }

    pub fn with_all(
        catalog: &'a C,
        economy: &'a E,
        weather: &'a W,
        progression: &'a P,
        rng: &'a R,
        config: &'a GameConfig,
    ) -> Self {
        Self::new(
            Some(catalog),
            Some(economy),
            Some(weather),
            Some(progression),
            Some(rng),
            Some(config),
        )
    }

    pub fn empty() -> Self {
        Self {
            catalog: None,
            economy: None,
            weather: None,
            progression: None,
            rng: None,
            config: None,
        }
    }

    /// Returns the CatalogOracle, or an error if not available.
    pub fn catalog(&self) -> Result<&'a C, OracleError> {
        self.catalog.ok_or(OracleError::CatalogNotAvailable)
    }

    pub fn economy(&self) -> Result<&'a E, OracleError> {
        self.economy.ok_or(OracleError::EconomyNotAvailable)
    }

    pub fn weather(&self) -> Result<&'a W, OracleError> {
        self.weather.ok_or(OracleError::WeatherNotAvailable)
    }

    pub fn progression(&self) -> Result<&'a P, OracleError> {
        self.progression.ok_or(OracleError::ProgressionNotAvailable)
    }

    pub fn rng(&self) -> Result<&'a R, OracleError> {
        self.rng.ok_or(OracleError::RngNotAvailable)
    }

    pub fn config(&self) -> Result<&'a GameConfig, OracleError> {
        self.config.ok_or(OracleError::ConfigNotAvailable)
    }
}

impl<C, E, W, P, R> Clone for Env<'_, C, E, W, P, R>
where
    C: CatalogOracle + ?Sized,
    E: EconomyOracle + ?Sized,
    W: WeatherOracle + ?Sized,
    P: ProgressionOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<C, E, W, P, R> Copy for Env<'_, C, E, W, P, R>
where
    C: CatalogOracle + ?Sized,
    E: EconomyOracle + ?Sized,
    W: WeatherOracle + ?Sized,
    P: ProgressionOracle + ?Sized,
    R: RngOracle + ?Sized,
{
}

impl<'a, C, E, W, P, R> Env<'a, C, E, W, P, R>
where
    C: CatalogOracle + 'a,
    E: EconomyOracle + 'a,
    W: WeatherOracle + 'a,
    P: ProgressionOracle + 'a,
    R: RngOracle + 'a,
{
    /// Converts this environment into a trait-object based `GameEnv`.
    pub fn into_game_env(self) -> GameEnv<'a> {
        let catalog: Option<&'a dyn CatalogOracle> = self.catalog.map(|catalog| catalog as _);
        let economy: Option<&'a dyn EconomyOracle> = self.economy.map(|economy| economy as _);
        let weather: Option<&'a dyn WeatherOracle> = self.weather.map(|weather| weather as _);
        let progression: Option<&'a dyn ProgressionOracle> =
            self.progression.map(|progression| progression as _);
        let rng: Option<&'a dyn RngOracle> = self.rng.map(|rng| rng as _);
        Env::new(catalog, economy, weather, progression, rng, self.config)
    }
}
