//! Game configuration loader.

use std::path::Path;

use game_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
///
/// Missing keys keep their defaults, so a config file only needs the
/// tunables it changes.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| e.context(format!("while loading {}", path.display())))
    }

    /// Parse TOML source text and check the values make sense together.
    pub fn parse(source: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(source)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        Self::validate(&config)?;
        Ok(config)
    }

    fn validate(config: &GameConfig) -> LoadResult<()> {
        if config.max_active_hunts == 0 || config.max_active_hunts > GameConfig::MAX_ACTIVE_HUNTS {
            anyhow::bail!(
                "max_active_hunts must be within 1..={}, got {}",
                GameConfig::MAX_ACTIVE_HUNTS,
                config.max_active_hunts
            );
        }
        if config.min_hunt_time_pct == 0 || config.min_hunt_time_pct > 100 {
            anyhow::bail!(
                "min_hunt_time_pct must be within 1..=100, got {}",
                config.min_hunt_time_pct
            );
        }
        if config.speed_bonus_cap_pct >= 100 {
            anyhow::bail!(
                "speed_bonus_cap_pct must be below 100, got {}",
                config.speed_bonus_cap_pct
            );
        }
        if config.xp_growth_pct < 100 {
            anyhow::bail!(
                "xp_growth_pct must be at least 100, got {}",
                config.xp_growth_pct
            );
        }
        if config.max_kills_per_hunt == 0 {
            anyhow::bail!("max_kills_per_hunt must be positive");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let config = ConfigLoader::parse("hunt_stamina_cost = 15\nmax_active_quests = 2\n").unwrap();
        assert_eq!(config.hunt_stamina_cost, 15);
        assert_eq!(config.max_active_quests, 2);
        assert_eq!(config.history_capacity, GameConfig::default().history_capacity);
    }

    #[test]
    fn rejects_hunt_limit_above_capacity() {
        let err = ConfigLoader::parse("max_active_hunts = 4").unwrap_err();
        assert!(err.to_string().contains("max_active_hunts"), "{err}");
    }

    #[test]
    fn rejects_shrinking_xp_curve() {
        assert!(ConfigLoader::parse("xp_growth_pct = 90").is_err());
    }

    #[test]
    fn loads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "starting_gold = 500").unwrap();
        let config = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(config.starting_gold, 500);
    }

    #[test]
    fn names_the_missing_file() {
        let err = ConfigLoader::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(format!("{err:#}").contains("here.toml"));
    }
}
