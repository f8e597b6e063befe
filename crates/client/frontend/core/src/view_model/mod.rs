//! Panel view-models derived from a [`game_core::GameState`] snapshot.
//!
//! Each panel kind has a plain data view built from a [`PanelContext`].
//! Views hold no references into the state, so a host can keep them
//! across snapshots and only rebuild the panels an update touched.
mod context;
mod economy;
mod hunts;
mod inventory;
mod progress;
mod world;

pub use context::PanelContext;
pub use economy::{
    CraftingView, ListingRow, MarketView, MaterialRow, RecipeRow, SkillRow, SkillTreeView,
};
pub use hunts::{ActiveHuntRow, HuntsView, MonsterRow};
pub use inventory::{EquippedRow, INVENTORY_SLOTS, InventoryView, ItemCell, UpgradeRow, UpgradeView};
pub use progress::{
    AchievementRow, AchievementsView, ActiveQuestRow, AvailableQuestRow, HistoryRow, HistoryView,
    ObjectiveRow, ProfileView, QuestsView, ReputationRow,
};
pub use world::{BiomeRow, BiomesView};

use game_core::PanelKind;

/// Rendered content of one panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PanelView {
    MonsterHunts(HuntsView),
    Inventory(InventoryView),
    SkillTree(SkillTreeView),
    Marketplace(MarketView),
    Crafting(CraftingView),
    GearUpgrading(UpgradeView),
    HuntHistory(HistoryView),
    PlayerProfile(ProfileView),
    Achievements(AchievementsView),
    Quests(QuestsView),
    Biomes(BiomesView),
    /// Placeholder offering the panel selector.
    Empty,
}

impl PanelView {
    pub fn build(kind: PanelKind, ctx: &PanelContext<'_>) -> Self {
        match kind {
            PanelKind::MonsterHunts => Self::MonsterHunts(HuntsView::build(ctx)),
            PanelKind::Inventory => Self::Inventory(InventoryView::build(ctx)),
            PanelKind::SkillTree => Self::SkillTree(SkillTreeView::build(ctx)),
            PanelKind::Marketplace => Self::Marketplace(MarketView::build(ctx)),
            PanelKind::Crafting => Self::Crafting(CraftingView::build(ctx)),
            PanelKind::GearUpgrading => Self::GearUpgrading(UpgradeView::build(ctx)),
            PanelKind::HuntHistory => Self::HuntHistory(HistoryView::build(ctx)),
            PanelKind::PlayerProfile => Self::PlayerProfile(ProfileView::build(ctx)),
            PanelKind::Achievements => Self::Achievements(AchievementsView::build(ctx)),
            PanelKind::Quests => Self::Quests(QuestsView::build(ctx)),
            PanelKind::Biomes => Self::Biomes(BiomesView::build(ctx)),
            PanelKind::Empty => Self::Empty,
        }
    }

    pub fn kind(&self) -> PanelKind {
        match self {
            Self::MonsterHunts(_) => PanelKind::MonsterHunts,
            Self::Inventory(_) => PanelKind::Inventory,
            Self::SkillTree(_) => PanelKind::SkillTree,
            Self::Marketplace(_) => PanelKind::Marketplace,
            Self::Crafting(_) => PanelKind::Crafting,
            Self::GearUpgrading(_) => PanelKind::GearUpgrading,
            Self::HuntHistory(_) => PanelKind::HuntHistory,
            Self::PlayerProfile(_) => PanelKind::PlayerProfile,
            Self::Achievements(_) => PanelKind::Achievements,
            Self::Quests(_) => PanelKind::Quests,
            Self::Biomes(_) => PanelKind::Biomes,
            Self::Empty => PanelKind::Empty,
        }
    }

    pub fn title(&self) -> &'static str {
        self.kind().label()
    }
}

#[cfg(test)]
mod tests {
    use game_content::{ContentCatalog, builtin_catalog, starting_state};
    use game_core::{
        Difficulty, Env, GameConfig, GameState, HuntId, HuntRecord, ItemId, MonsterId, PcgRng,
        RecipeId, SkillKind,
    };
    use strum::IntoEnumIterator;

    use super::*;

    struct Fixture {
        catalog: ContentCatalog,
        config: GameConfig,
        state: GameState,
    }

    impl Fixture {
        fn new() -> Self {
            let catalog = builtin_catalog().unwrap();
            let config = GameConfig::default();
            let state = starting_state(42, &config, &catalog);
            Self {
                catalog,
                config,
                state,
            }
        }

        fn view(&self, kind: PanelKind) -> PanelView {
            let rng = PcgRng;
            let env = Env::with_all(
                &self.catalog,
                &self.catalog,
                &self.catalog,
                &self.catalog,
                &rng,
                &self.config,
            )
            .into_game_env();
            let ctx = PanelContext::new(&self.state, 0, &env).unwrap();
            PanelView::build(kind, &ctx)
        }
    }

    #[test]
    fn every_kind_builds_its_own_variant() {
        let fixture = Fixture::new();
        for kind in PanelKind::iter() {
            let view = fixture.view(kind);
            assert_eq!(view.kind(), kind);
            assert_eq!(view.title(), kind.label());
        }
    }

    #[test]
    fn inventory_pads_the_grid_with_empty_cells() {
        let fixture = Fixture::new();
        let PanelView::Inventory(view) = fixture.view(PanelKind::Inventory) else {
            panic!("expected inventory view");
        };

        assert_eq!(view.slots.len(), INVENTORY_SLOTS);
        assert_eq!(view.slots.iter().flatten().count(), 6);
        assert_eq!(view.overflow, 0);
        assert_eq!(view.gold, 25_000);
        assert!(view.equipped.iter().all(|row| row.item.is_none()));
    }

    #[test]
    fn evolved_monsters_show_their_requirement() {
        let fixture = Fixture::new();
        let PanelView::MonsterHunts(view) = fixture.view(PanelKind::MonsterHunts) else {
            panic!("expected hunts view");
        };

        let wolf = view
            .monsters
            .iter()
            .find(|row| row.id == MonsterId::from("shadow-wolf"))
            .unwrap();
        assert!(wolf.unlocked);
        assert!(wolf.can_start);
        assert!(wolf.requirement.is_none());
        assert!(!wolf.auto_hunt_available);

        let alpha = view
            .monsters
            .iter()
            .find(|row| row.id == MonsterId::from("shadow-alpha"))
            .unwrap();
        assert!(!alpha.unlocked);
        assert!(!alpha.can_start);
        assert!(alpha.requirement.is_some());
        assert_eq!(view.free_slots, fixture.config.active_hunt_limit());
    }

    #[test]
    fn crafting_checks_level_and_materials() {
        let fixture = Fixture::new();
        let PanelView::Crafting(view) = fixture.view(PanelKind::Crafting) else {
            panic!("expected crafting view");
        };

        let armor = view
            .recipes
            .iter()
            .find(|row| row.id == RecipeId::from("crystal-armor"))
            .unwrap();
        assert_eq!(armor.required_level, 5);
        assert!(!armor.craftable);
    }

    #[test]
    fn skill_rows_follow_the_state() {
        let fixture = Fixture::new();
        let PanelView::SkillTree(view) = fixture.view(PanelKind::SkillTree) else {
            panic!("expected skill tree view");
        };

        assert_eq!(view.skills.len(), 4);
        let attack = view
            .skills
            .iter()
            .find(|row| row.skill == SkillKind::AttackSpeed)
            .unwrap();
        assert_eq!(attack.level, 2);
        assert_eq!(attack.progress_pct, 0);
        assert!(attack.next_cost.is_some());
    }

    #[test]
    fn history_is_capped_by_the_panel_limit() {
        let mut fixture = Fixture::new();
        for id in 0..4u64 {
            fixture.state.record_hunt(sample_record(id), 50);
        }

        let rng = PcgRng;
        let env = Env::with_all(
            &fixture.catalog,
            &fixture.catalog,
            &fixture.catalog,
            &fixture.catalog,
            &rng,
            &fixture.config,
        )
        .into_game_env();
        let ctx = PanelContext::new(&fixture.state, 0, &env)
            .unwrap()
            .with_history_limit(3);
        let PanelView::HuntHistory(view) = PanelView::build(PanelKind::HuntHistory, &ctx) else {
            panic!("expected history view");
        };

        assert_eq!(view.entries.len(), 3);
        assert_eq!(view.entries[0].id, HuntId(3));
    }

    #[test]
    fn quests_list_offers_before_acceptance() {
        let fixture = Fixture::new();
        let PanelView::Quests(view) = fixture.view(PanelKind::Quests) else {
            panic!("expected quests view");
        };

        assert!(view.active.is_empty());
        assert!(!view.available.is_empty());
        assert_eq!(view.slots_free, fixture.config.max_active_quests);
        assert!(view.available.iter().all(|row| !row.giver.is_empty()));
    }

    #[test]
    fn material_cells_name_their_items() {
        let fixture = Fixture::new();
        let PanelView::Inventory(view) = fixture.view(PanelKind::Inventory) else {
            panic!("expected inventory view");
        };
        let herb = view
            .slots
            .iter()
            .flatten()
            .find(|cell| cell.key.id == ItemId::from("herb"))
            .unwrap();
        assert_eq!(herb.quantity, 8);
        assert!(!herb.equippable);
    }

    fn sample_record(id: u64) -> HuntRecord {
        HuntRecord {
            id: HuntId(id),
            monster: MonsterId::from("shadow-wolf"),
            monster_name: "Shadow Wolf".into(),
            difficulty: Difficulty::Normal,
            kills: 1,
            gold: 100,
            xp: 50,
            loot: Vec::new(),
            duration_ms: 30_000,
            completed_at_ms: id * 1_000,
        }
    }
}
