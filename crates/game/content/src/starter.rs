//! Opening state of a new character.

use game_core::{
    CatalogOracle, Faction, GameConfig, GameState, Inventory, ItemId, PlayerProfile, PlayerStats,
    Skills, StaminaMeter,
};

use crate::ContentCatalog;

/// Skill levels a new character starts with: attack speed, critical strike,
/// resource gathering, stamina recovery.
pub const STARTING_SKILLS: (u32, u32, u32, u32) = (2, 1, 3, 1);

/// Materials in the starting inventory.
pub const STARTER_MATERIALS: [(&str, u32); 6] = [
    ("shadow-essence", 5),
    ("iron-ore", 3),
    ("crystal-shard", 2),
    ("leather", 4),
    ("herb", 8),
    ("pure-water", 2),
];

/// Builds the state a new session opens with.
///
/// Starter materials the catalog does not define are left out.
pub fn starting_state(seed: u64, config: &GameConfig, catalog: &ContentCatalog) -> GameState {
    let (attack, crit, gathering, recovery) = STARTING_SKILLS;
    let stats = PlayerStats::new(
        StaminaMeter::full(config.starting_stamina, config.stamina_regen_per_minute),
        Skills::from_levels(attack, crit, gathering, recovery),
    );
    let profile = PlayerProfile::new("Hunter", Faction::default(), config.base_xp_to_next_level);

    let inventory = Inventory::from_items(STARTER_MATERIALS.iter().filter_map(|(id, quantity)| {
        let definition = catalog.item(&ItemId::from(*id));
        if definition.is_none() {
            tracing::warn!(item = *id, "starter material missing from catalog");
        }
        definition.map(|definition| definition.instantiate(*quantity))
    }));

    GameState::with_seed(seed, config.starting_gold, stats, profile, inventory)
}

#[cfg(all(test, feature = "loaders"))]
mod tests {
    use game_core::{SkillKind, WorldState};

    use super::*;
    use crate::loaders::builtin_catalog;

    #[test]
    fn opens_with_the_sample_character() {
        let catalog = builtin_catalog().unwrap();
        let config = GameConfig::default();
        let state = starting_state(7, &config, &catalog);

        assert_eq!(state.game_seed, 7);
        assert_eq!(state.gold, 25_000);
        assert_eq!(state.stats.stamina.current(), 100);
        assert_eq!(state.stats.stamina.regen_per_minute, 5);
        assert_eq!(state.stats.skills.level(SkillKind::AttackSpeed), 2);
        assert_eq!(state.stats.skills.level(SkillKind::ResourceGathering), 3);
        assert_eq!(state.stats.skills.total_levels(), 7);
        assert_eq!(state.profile.level, 1);
        assert_eq!(state.inventory.len(), 6);
        assert_eq!(state.inventory.quantity_of(&ItemId::from("herb")), 8);
        assert!(state.stats.active_hunts.is_empty());
        assert_eq!(state.world, WorldState::default());
    }

    #[test]
    fn skips_materials_the_catalog_lacks() {
        let catalog = ContentCatalog::default();
        let state = starting_state(1, &GameConfig::default(), &catalog);
        assert!(state.inventory.is_empty());
    }
}
