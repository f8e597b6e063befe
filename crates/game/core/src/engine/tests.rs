use super::*;
use crate::action::ActionError;
use crate::env::CatalogOracle;
use crate::error::ErrorSeverity;
use crate::state::{
    Difficulty, EquipmentSlot, ItemId, ItemKey, MonsterId, QuestId, Rarity, SkillKind,
    WorldState,
};
use crate::testing::TestWorld;

fn blocked(result: Result<ExecutionOutcome, ExecuteError>) -> ActionError {
    let error = result.expect_err("action should be blocked");
    error.action_error().cloned().expect("transition error")
}

#[test]
fn thirty_second_hunt_resolves_after_its_timer() {
    let world = TestWorld::new();
    let mut state = world.blank_state();
    let mut engine = GameEngine::new(&mut state);

    let started = engine
        .execute(world.env(), &Action::start_hunt("shadow-wolf", Difficulty::Normal), 0)
        .unwrap();
    let ActionOutcome::HuntStarted(hunt) = started.outcome else {
        panic!("unexpected outcome {:?}", started.outcome);
    };
    assert_eq!(hunt.duration_ms, 30_000);
    assert_eq!(engine.state().stats.stamina.current(), 90);

    let early = engine.execute(world.env(), &Action::complete_hunt(hunt.id), 29_999);
    assert!(matches!(blocked(early), ActionError::HuntNotFinished { remaining_ms: 1, .. }));
    assert_eq!(engine.state().nonce, 1);

    let done = engine
        .execute(world.env(), &Action::complete_hunt(hunt.id), 30_000)
        .unwrap();
    let state = engine.state();
    assert!(state.stats.active_hunts.is_empty());
    assert_eq!(state.history.len(), 1);
    assert!(state.gold > 25_000);
    assert!(state.profile.xp > 0);
    assert_eq!(state.profile.counters.hunts_completed, 1);
    assert_eq!(state.profile.counters.hunting_ms, 30_000);
    // shadow essence always drops in the fixture
    assert!(state.inventory.quantity_of(&ItemId::from("shadow-essence")) >= 1);
    assert_eq!(done.achievements, vec![AchievementId::from("first-blood")]);

    let ActionOutcome::HuntCompleted(completion) = done.outcome else {
        panic!("unexpected outcome");
    };
    assert_eq!(completion.record.kills, state.profile.counters.total_defeated as u32);
    assert_eq!(
        state.stats.skills.points(SkillKind::AttackSpeed),
        completion.record.kills * 10
    );
}

#[test]
fn hunt_rules_block_before_any_mutation() {
    let world = TestWorld::new();
    let mut state = world.blank_state();
    state.stats.stamina = crate::state::StaminaMeter::new(5, 100, 5);
    let before = state.clone();
    let mut engine = GameEngine::new(&mut state);

    let error = blocked(engine.execute(
        world.env(),
        &Action::start_hunt("shadow-wolf", Difficulty::Easy),
        0,
    ));
    assert_eq!(
        error,
        ActionError::InsufficientStamina {
            required: 10,
            available: 5
        }
    );
    assert_eq!(error.severity(), ErrorSeverity::Recoverable);

    let locked = blocked(engine.execute(
        world.env(),
        &Action::start_hunt("shadow-alpha", Difficulty::Easy),
        0,
    ));
    assert_eq!(locked, ActionError::MonsterLocked(MonsterId::from("shadow-alpha")));
    assert_eq!(engine.state(), &before);
}

#[test]
fn hunt_limit_and_duplicate_monster_are_rejected() {
    let world = TestWorld::new();
    let mut state = world.blank_state();
    let mut engine = GameEngine::new(&mut state);
    let env = world.env();

    engine
        .execute(env, &Action::start_hunt("shadow-wolf", Difficulty::Easy), 0)
        .unwrap();
    assert!(matches!(
        blocked(engine.execute(env, &Action::start_hunt("shadow-wolf", Difficulty::Hard), 0)),
        ActionError::AlreadyHunting(_)
    ));
    engine
        .execute(env, &Action::start_hunt("tundra-yeti", Difficulty::Easy), 0)
        .unwrap();

    let mut config_world = TestWorld::new();
    config_world.config.max_active_hunts = 2;
    assert_eq!(
        blocked(engine.execute(
            config_world.env(),
            &Action::start_hunt("shadow-alpha", Difficulty::Easy),
            0
        )),
        ActionError::MonsterLocked(MonsterId::from("shadow-alpha"))
    );
    engine.state.profile.counters.record_kills(&MonsterId::from("shadow-wolf"), 3);
    assert_eq!(
        blocked(engine.execute(
            config_world.env(),
            &Action::start_hunt("shadow-alpha", Difficulty::Easy),
            0
        )),
        ActionError::TooManyHunts { limit: 2 }
    );
}

#[test]
fn kills_unlock_evolved_monsters() {
    let world = TestWorld::new();
    let mut state = world.blank_state();
    state
        .profile
        .counters
        .record_kills(&MonsterId::from("shadow-wolf"), 2);
    let mut engine = GameEngine::new(&mut state);

    let started = engine
        .execute(world.env(), &Action::start_hunt("shadow-wolf", Difficulty::Hard), 0)
        .unwrap();
    let ActionOutcome::HuntStarted(hunt) = started.outcome else {
        panic!("unexpected outcome");
    };
    assert_eq!(hunt.duration_ms, 42_000);

    let done = engine
        .execute(world.env(), &Action::complete_hunt(hunt.id), hunt.ends_at_ms())
        .unwrap();
    assert_eq!(done.unlocked_monsters, vec![MonsterId::from("shadow-alpha")]);
    assert!(engine.state().profile.counters.defeated(&MonsterId::from("shadow-wolf")) >= 4);
}

#[test]
fn crafting_is_all_or_nothing() {
    let world = TestWorld::new();
    let mut state = world.blank_state();
    state.inventory.add(world.instantiate("shadow-essence", 3));
    state.inventory.add(world.instantiate("iron-ore", 1));
    let before = state.clone();
    let mut engine = GameEngine::new(&mut state);

    let error = blocked(engine.execute(world.env(), &Action::craft("shadow-blade"), 0));
    assert_eq!(
        error,
        ActionError::MissingMaterials {
            item: ItemId::from("iron-ore"),
            required: 2,
            available: 1
        }
    );
    assert_eq!(engine.state(), &before);

    engine.state.inventory.add(world.instantiate("iron-ore", 1));
    let crafted = engine
        .execute(world.env(), &Action::craft("shadow-blade"), 0)
        .unwrap();
    let state = engine.state();
    assert_eq!(state.inventory.quantity_of(&ItemId::from("shadow-essence")), 0);
    assert_eq!(state.inventory.quantity_of(&ItemId::from("iron-ore")), 0);
    assert_eq!(state.inventory.quantity_of(&ItemId::from("shadow-blade")), 1);
    assert_eq!(state.profile.counters.items_crafted, 1);
    assert_eq!(crafted.achievements, vec![AchievementId::from("apprentice-smith")]);
}

#[test]
fn recipe_level_gate() {
    let world = TestWorld::new();
    let mut state = world.blank_state();
    state.inventory.add(world.instantiate("wolf-pelt", 5));
    let mut engine = GameEngine::new(&mut state);

    assert_eq!(
        blocked(engine.execute(world.env(), &Action::craft("health-potion"), 0)),
        ActionError::LevelTooLow {
            required: 5,
            current: 1
        }
    );
}

#[test]
fn gear_upgrade_spends_gold_and_consumes_the_item() {
    let world = TestWorld::new();
    let mut state = world.blank_state();
    state.inventory.add(world.instantiate("iron-sword", 1));
    let mut engine = GameEngine::new(&mut state);

    let key = ItemKey::new("iron-sword", Rarity::Common, 0);
    let outcome = engine
        .execute(world.env(), &Action::upgrade_gear(key.clone()), 0)
        .unwrap();
    let ActionOutcome::Upgraded(upgrade) = outcome.outcome else {
        panic!("unexpected outcome");
    };

    let state = engine.state();
    assert_eq!(state.gold, 24_000);
    assert!(state.inventory.get(&key).is_none());
    match upgrade.upgraded {
        Some(item) => {
            assert_eq!(item.rarity, Rarity::Uncommon);
            assert_eq!(item.upgrade_level, 1);
            assert_eq!(item.stat(crate::state::StatKind::HuntSpeed), 15);
            assert_eq!(state.inventory.quantity_of(&ItemId::from("iron-sword")), 1);
        }
        None => assert_eq!(state.inventory.quantity_of(&ItemId::from("iron-sword")), 0),
    }
}

#[test]
fn materials_and_legendaries_cannot_be_upgraded() {
    let world = TestWorld::new();
    let mut state = world.blank_state();
    state.inventory.add(world.instantiate("iron-ore", 1));
    let mut engine = GameEngine::new(&mut state);

    let key = ItemKey::new("iron-ore", Rarity::Common, 0);
    assert_eq!(
        blocked(engine.execute(world.env(), &Action::upgrade_gear(key.clone()), 0)),
        ActionError::NotUpgradeable(key)
    );
}

#[test]
fn skill_purchase_costs_grow_with_level() {
    let world = TestWorld::new();
    let mut state = world.blank_state();
    state.gold = 1_600;
    let mut engine = GameEngine::new(&mut state);
    let env = world.env();

    engine
        .execute(env, &Action::upgrade_skill(SkillKind::StaminaRecovery), 0)
        .unwrap();
    engine
        .execute(env, &Action::upgrade_skill(SkillKind::StaminaRecovery), 0)
        .unwrap();
    assert_eq!(engine.state().gold, 100);
    assert_eq!(engine.state().stats.skills.level(SkillKind::StaminaRecovery), 2);
    assert_eq!(
        blocked(engine.execute(env, &Action::upgrade_skill(SkillKind::StaminaRecovery), 0)),
        ActionError::InsufficientGold {
            required: 1_500,
            available: 100
        }
    );
}

#[test]
fn maxed_skill_cannot_be_bought() {
    let world = TestWorld::new();
    let mut state = world.blank_state();
    state.stats.skills = crate::state::Skills::from_levels(10, 0, 0, 0);
    let mut engine = GameEngine::new(&mut state);
    assert_eq!(
        blocked(engine.execute(world.env(), &Action::upgrade_skill(SkillKind::AttackSpeed), 0)),
        ActionError::SkillMaxed(SkillKind::AttackSpeed)
    );
}

#[test]
fn equipping_swaps_the_previous_item_back() {
    let world = TestWorld::new();
    let mut state = world.blank_state();
    state.inventory.add(world.instantiate("iron-sword", 1));
    state.inventory.add(world.instantiate("shadow-blade", 1));
    let mut engine = GameEngine::new(&mut state);
    let env = world.env();

    let sword = ItemKey::new("iron-sword", Rarity::Common, 0);
    let blade = ItemKey::new("shadow-blade", Rarity::Epic, 0);
    engine.execute(env, &Action::equip(sword.clone()), 0).unwrap();
    let outcome = engine.execute(env, &Action::equip(blade), 0).unwrap();

    let ActionOutcome::EquipmentChanged(change) = outcome.outcome else {
        panic!("unexpected outcome");
    };
    assert_eq!(change.slot, EquipmentSlot::Weapon);
    assert_eq!(change.returned.map(|item| item.key()), Some(sword.clone()));
    assert!(engine.state().inventory.get(&sword).is_some());

    engine
        .execute(env, &Action::unequip(EquipmentSlot::Weapon), 0)
        .unwrap();
    assert!(engine.state().profile.equipment.weapon.is_none());
    assert_eq!(
        blocked(engine.execute(env, &Action::unequip(EquipmentSlot::Weapon), 0)),
        ActionError::SlotEmpty(EquipmentSlot::Weapon)
    );
}

#[test]
fn buying_adds_the_listed_stack() {
    let world = TestWorld::new();
    let mut state = world.blank_state();
    let mut engine = GameEngine::new(&mut state);

    engine
        .execute(world.env(), &Action::buy("iron-ore-bundle"), 0)
        .unwrap();
    assert_eq!(engine.state().gold, 24_800);
    assert_eq!(engine.state().inventory.quantity_of(&ItemId::from("iron-ore")), 5);
}

#[test]
fn quest_completion_grants_rewards_and_levels_up() {
    let world = TestWorld::new();
    let mut state = world.blank_state();
    state.profile.xp = 500;
    let mut engine = GameEngine::new(&mut state);
    let env = world.env();
    let quest = QuestId::from("wolf-extermination");

    engine
        .execute(env, &Action::accept_quest(quest.clone()), 1_000)
        .unwrap();
    assert_eq!(
        engine.state().quests.get(&quest).and_then(|q| q.expires_at_ms),
        Some(3_601_000)
    );
    assert_eq!(
        blocked(engine.execute(env, &Action::complete_quest(quest.clone()), 2_000)),
        ActionError::ObjectivesIncomplete(quest.clone())
    );

    engine.state.quests.active[0].progress = vec![2];
    let done = engine
        .execute(env, &Action::complete_quest(quest.clone()), 2_000)
        .unwrap();
    assert_eq!(done.level_ups, 1);

    let state = engine.state();
    assert_eq!(state.gold, 26_500);
    assert_eq!(state.profile.level, 2);
    assert_eq!(state.profile.xp, 300);
    assert_eq!(state.profile.reputation_with(crate::state::Faction::CrystalWardens), 100);
    assert_eq!(state.inventory.quantity_of(&ItemId::from("wolf-hunter-badge")), 1);
    assert!(state.quests.is_completed(&quest));
    assert_eq!(
        blocked(engine.execute(env, &Action::accept_quest(quest.clone()), 3_000)),
        ActionError::QuestAlreadyCompleted(quest)
    );
}

#[test]
fn expired_quests_cannot_be_turned_in() {
    let world = TestWorld::new();
    let mut state = world.blank_state();
    let mut engine = GameEngine::new(&mut state);
    let env = world.env();
    let quest = QuestId::from("wolf-extermination");

    engine.execute(env, &Action::accept_quest(quest.clone()), 0).unwrap();
    engine.state.quests.active[0].progress = vec![2];
    assert_eq!(
        blocked(engine.execute(env, &Action::complete_quest(quest.clone()), 3_600_001)),
        ActionError::QuestExpired(quest.clone())
    );
    engine.execute(env, &Action::abandon_quest(quest.clone()), 3_600_001).unwrap();
    assert!(!engine.state().quests.is_active(&quest));
}

#[test]
fn quest_level_and_capacity_limits() {
    let world = TestWorld::new();
    let mut state = world.blank_state();
    let mut engine = GameEngine::new(&mut state);

    assert_eq!(
        blocked(engine.execute(world.env(), &Action::accept_quest("elite-challenge"), 0)),
        ActionError::LevelTooLow {
            required: 30,
            current: 1
        }
    );

    let mut strict = TestWorld::new();
    strict.config.max_active_quests = 0;
    assert_eq!(
        blocked(engine.execute(strict.env(), &Action::accept_quest("wolf-extermination"), 0)),
        ActionError::QuestLimitReached { limit: 0 }
    );
}

#[test]
fn hunting_advances_kill_objectives() {
    let world = TestWorld::new();
    let mut state = world.blank_state();
    let mut engine = GameEngine::new(&mut state);
    let env = world.env();

    engine
        .execute(env, &Action::accept_quest("wolf-extermination"), 0)
        .unwrap();
    let started = engine
        .execute(env, &Action::start_hunt("shadow-wolf", Difficulty::Hard), 0)
        .unwrap();
    let ActionOutcome::HuntStarted(hunt) = started.outcome else {
        panic!("unexpected outcome");
    };
    engine
        .execute(env, &Action::complete_hunt(hunt.id), hunt.ends_at_ms())
        .unwrap();

    // hard hunts kill at least two
    assert_eq!(engine.state().quests.active[0].progress, vec![2]);
}

#[test]
fn expired_quests_ignore_later_kills() {
    let world = TestWorld::new();
    let mut state = world.blank_state();
    let mut engine = GameEngine::new(&mut state);
    let env = world.env();

    engine
        .execute(env, &Action::accept_quest("wolf-extermination"), 0)
        .unwrap();
    let started = engine
        .execute(env, &Action::start_hunt("shadow-wolf", Difficulty::Hard), 3_600_000)
        .unwrap();
    let ActionOutcome::HuntStarted(hunt) = started.outcome else {
        panic!("unexpected outcome");
    };
    engine
        .execute(env, &Action::complete_hunt(hunt.id), hunt.ends_at_ms())
        .unwrap();

    let quest = &engine.state().quests.active[0];
    assert!(quest.is_expired(engine.state().clock_ms));
    assert!(quest.progress.iter().all(|&kills| kills == 0));
}

#[test]
fn exploration_progresses_until_fully_mapped() {
    let world = TestWorld::new();
    let mut state = world.blank_state();
    let mut engine = GameEngine::new(&mut state);
    let env = world.env();

    let outcome = engine.execute(env, &Action::explore("forest"), 0).unwrap();
    let ActionOutcome::Explored(explored) = outcome.outcome else {
        panic!("unexpected outcome");
    };
    assert!((5..=20).contains(&explored.gained));
    assert_eq!(explored.progress, explored.gained);
    assert!(explored.discoveries.len() <= 3);

    engine
        .state
        .world
        .exploration
        .insert(crate::state::BiomeId::from("forest"), WorldState::FULLY_EXPLORED);
    assert!(matches!(
        blocked(engine.execute(env, &Action::explore("forest"), 0)),
        ActionError::BiomeFullyExplored(_)
    ));
}

#[test]
fn auto_hunt_requires_enough_defeats() {
    let world = TestWorld::new();
    let mut state = world.blank_state();
    let mut engine = GameEngine::new(&mut state);
    let env = world.env();

    assert!(matches!(
        blocked(engine.execute(env, &Action::set_auto_hunt("shadow-wolf", true), 0)),
        ActionError::AutoHuntLocked { required: 10, defeated: 0, .. }
    ));
    engine
        .state
        .profile
        .counters
        .record_kills(&MonsterId::from("shadow-wolf"), 10);
    engine
        .execute(env, &Action::set_auto_hunt("shadow-wolf", true), 0)
        .unwrap();
    assert!(engine.state().profile.auto_hunt.contains(&MonsterId::from("shadow-wolf")));
}

#[test]
fn stamina_regen_uses_recovery_level() {
    let world = TestWorld::new();
    let mut state = world.blank_state();
    state.stats.stamina = crate::state::StaminaMeter::new(50, 100, 5);
    state.stats.skills = crate::state::Skills::from_levels(0, 0, 0, 2);
    let mut engine = GameEngine::new(&mut state);

    // 5/min * 130% over two minutes
    engine
        .execute(world.env(), &Action::regenerate_stamina(120_000), 0)
        .unwrap();
    assert_eq!(engine.state().stats.stamina.current(), 63);
}

#[test]
fn weather_rolls_missing_biomes_and_counts_down() {
    let world = TestWorld::new();
    let mut state = world.blank_state();
    let mut engine = GameEngine::new(&mut state);
    let env = world.env();

    let outcome = engine.execute(env, &Action::advance_weather(0), 0).unwrap();
    let ActionOutcome::WeatherAdvanced(changes) = outcome.outcome else {
        panic!("unexpected outcome");
    };
    assert_eq!(changes.len(), world.biomes().len());

    let forest = crate::state::BiomeId::from("forest");
    let initial = engine.state().world.weather[&forest];
    engine.execute(env, &Action::advance_weather(10), 0).unwrap();
    assert_eq!(
        engine.state().world.weather[&forest].remaining_secs,
        initial.remaining_secs - 10
    );

    let outcome = engine
        .execute(env, &Action::advance_weather(initial.remaining_secs), 0)
        .unwrap();
    let ActionOutcome::WeatherAdvanced(changes) = outcome.outcome else {
        panic!("unexpected outcome");
    };
    assert!(changes.iter().any(|change| change.biome == forest));
}

#[test]
fn clock_never_moves_backwards() {
    let world = TestWorld::new();
    let mut state = world.blank_state();
    let mut engine = GameEngine::new(&mut state);
    engine
        .execute(world.env(), &Action::regenerate_stamina(0), 5_000)
        .unwrap();
    engine
        .execute(world.env(), &Action::regenerate_stamina(0), 1_000)
        .unwrap();
    assert_eq!(engine.state().clock_ms, 5_000);
    assert_eq!(engine.state().nonce, 2);
}

#[test]
fn missing_oracles_are_internal_errors() {
    let mut state = GameState::default();
    let mut engine = GameEngine::new(&mut state);
    let error = engine
        .execute(crate::env::GameEnv::empty(), &Action::regenerate_stamina(0), 0)
        .unwrap_err();
    assert_eq!(error.severity(), ErrorSeverity::Internal);
}
