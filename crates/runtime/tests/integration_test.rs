use std::time::Duration;

use tokio::sync::broadcast::{self, error::RecvError};
use tokio::time::Instant;

use game_content::{builtin_catalog, starting_state};
use game_core::{
    Action, ActionOutcome, BiomeId, BiomeWeather, Difficulty, ErrorSeverity, GameConfig,
    GameError, MonsterId, StaminaMeter, WeatherKind,
};
use runtime::{ActionSource, Event, Runtime, RuntimeConfig, Topic};

async fn start(config: RuntimeConfig) -> Runtime {
    Runtime::builder()
        .config(config)
        .content(builtin_catalog().expect("builtin content parses"))
        .seed(42)
        .build()
        .await
        .expect("runtime should start")
}

/// Waits for the first event accepted by `matches`, skipping the rest.
async fn next_event(
    rx: &mut broadcast::Receiver<Event>,
    mut matches: impl FnMut(&Event) -> bool,
) -> Event {
    let wait = async {
        loop {
            match rx.recv().await {
                Ok(event) if matches(&event) => return event,
                Ok(_) | Err(RecvError::Lagged(_)) => continue,
                Err(RecvError::Closed) => panic!("event bus closed"),
            }
        }
    };
    tokio::time::timeout(Duration::from_secs(3_600), wait)
        .await
        .expect("event should arrive within an hour of game time")
}

fn is_hunt_completed(event: &Event) -> bool {
    matches!(
        event,
        Event::ActionExecuted(executed)
            if matches!(executed.outcome.outcome, ActionOutcome::HuntCompleted(_))
    )
}

/// Hunt session scenario:
/// 1. Runtime starts from the sample character
/// 2. Player starts a normal shadow wolf hunt
/// 3. The hunt timer resolves it without further input
/// 4. State shows the spent stamina, the record and the rewards
#[tokio::test(start_paused = true)]
async fn hunt_resolves_after_its_modified_time() {
    let runtime = start(RuntimeConfig::default()).await;
    let handle = runtime.handle();
    let mut system = handle.subscribe(Topic::System);

    // ================================================================
    // PHASE 1: start the hunt
    // ================================================================
    let started_at = Instant::now();
    let outcome = handle
        .execute(Action::start_hunt("shadow-wolf", Difficulty::Normal))
        .await
        .expect("hunt should start");
    let ActionOutcome::HuntStarted(hunt) = outcome.outcome else {
        panic!("unexpected outcome: {:?}", outcome.outcome);
    };
    assert!(hunt.stamina_spent >= 10);

    let state = handle.query_state().await.unwrap();
    assert_eq!(state.stats.active_hunts.len(), 1);
    assert_eq!(state.stats.stamina.current(), 100 - hunt.stamina_spent);

    // ================================================================
    // PHASE 2: the timer completes it
    // ================================================================
    let event = next_event(&mut system, is_hunt_completed).await;
    assert_eq!(event.source(), ActionSource::Timer);
    assert!(started_at.elapsed() >= Duration::from_millis(hunt.duration_ms));

    // ================================================================
    // PHASE 3: verify rewards
    // ================================================================
    let state = handle.query_state().await.unwrap();
    assert!(state.stats.active_hunts.is_empty());
    assert_eq!(state.history.len(), 1);
    assert_eq!(state.profile.counters.hunts_completed, 1);

    let record = &state.history[0];
    assert_eq!(record.monster, MonsterId::from("shadow-wolf"));
    assert!(record.kills >= 1);
    assert!(record.gold > 0);
    assert!(record.xp > 0);
    assert_eq!(state.gold, 25_000 + record.gold);

    drop(handle);
    runtime.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn time_scale_compresses_hunts() {
    let runtime = start(RuntimeConfig {
        time_scale: 60,
        ..RuntimeConfig::default()
    })
    .await;
    let handle = runtime.handle();
    let mut system = handle.subscribe(Topic::System);

    let started_at = Instant::now();
    let outcome = handle
        .execute(Action::start_hunt("shadow-wolf", Difficulty::Normal))
        .await
        .unwrap();
    let ActionOutcome::HuntStarted(hunt) = outcome.outcome else {
        panic!("unexpected outcome: {:?}", outcome.outcome);
    };

    next_event(&mut system, is_hunt_completed).await;
    let elapsed = started_at.elapsed();
    assert!(elapsed >= Duration::from_millis(hunt.duration_ms / 60));
    assert!(elapsed < Duration::from_millis(hunt.duration_ms));
}

#[tokio::test(start_paused = true)]
async fn blocked_action_leaves_state_untouched() {
    let runtime = start(RuntimeConfig::default()).await;
    let handle = runtime.handle();
    let mut actions = handle.subscribe(Topic::Actions);

    let before = handle.query_state().await.unwrap();
    let error = handle
        .execute(Action::craft("crystal-armor"))
        .await
        .expect_err("crystal armor needs level 5");

    assert!(error.is_blocked_action());
    let execute_error = error.execute_error().unwrap();
    assert_eq!(execute_error.severity(), ErrorSeverity::Recoverable);
    assert_eq!(execute_error.error_code(), "ACTION_LEVEL_TOO_LOW");

    let after = handle.query_state().await.unwrap();
    assert_eq!(after.inventory, before.inventory);
    assert_eq!(after.gold, before.gold);

    let Event::ActionFailed(failed) = next_event(&mut actions, |_| true).await else {
        panic!("expected a failure event");
    };
    assert_eq!(failed.source, ActionSource::Player);
    assert_eq!(failed.code, "ACTION_LEVEL_TOO_LOW");
    assert_eq!(failed.severity, ErrorSeverity::Recoverable);
}

#[tokio::test(start_paused = true)]
async fn stamina_regenerates_between_ticks() {
    let runtime = start(RuntimeConfig::default()).await;
    let handle = runtime.handle();

    handle
        .execute(Action::start_hunt("forest-troll", Difficulty::Easy))
        .await
        .unwrap();
    let spent = handle.query_state().await.unwrap().stats.stamina.current();

    tokio::time::sleep(Duration::from_secs(60)).await;

    let stamina = handle.query_state().await.unwrap().stats.stamina;
    assert!(stamina.current() > spent);
    assert!(stamina.current() <= stamina.maximum);
}

#[tokio::test(start_paused = true)]
async fn weather_is_rolled_for_every_biome_at_startup() {
    let runtime = start(RuntimeConfig::default()).await;
    let handle = runtime.handle();
    let mut system = handle.subscribe(Topic::System);

    let Event::ActionExecuted(executed) = next_event(&mut system, |event| {
        matches!(
            event,
            Event::ActionExecuted(executed)
                if matches!(executed.outcome.outcome, ActionOutcome::WeatherAdvanced(_))
        )
    })
    .await
    else {
        unreachable!();
    };
    let ActionOutcome::WeatherAdvanced(changes) = executed.outcome.outcome else {
        unreachable!();
    };
    assert_eq!(changes.len(), 6);

    let snapshot = handle.query_snapshot().await.unwrap();
    assert_eq!(snapshot.state.world.weather.len(), 6);
    assert!(snapshot.now_ms >= snapshot.state.clock_ms);
}

#[tokio::test(start_paused = true)]
async fn auto_hunt_restarts_after_completion() {
    let catalog = builtin_catalog().unwrap();
    let config = GameConfig::default();
    let wolf = MonsterId::from("shadow-wolf");

    let mut state = starting_state(9, &config, &catalog);
    state
        .profile
        .counters
        .record_kills(&wolf, config.auto_hunt_threshold);

    let runtime = Runtime::builder()
        .content(catalog)
        .initial_state(state)
        .build()
        .await
        .unwrap();
    let handle = runtime.handle();
    let mut system = handle.subscribe(Topic::System);

    handle
        .execute(Action::set_auto_hunt("shadow-wolf", true))
        .await
        .expect("ten defeats unlock auto-hunt");
    handle
        .execute(Action::start_hunt("shadow-wolf", Difficulty::Hard))
        .await
        .unwrap();

    next_event(&mut system, is_hunt_completed).await;
    let restarted = next_event(&mut system, |event| {
        event.source() == ActionSource::AutoHunt
    })
    .await;

    let Event::ActionExecuted(executed) = restarted else {
        panic!("auto-hunt should restart: {restarted:?}");
    };
    let ActionOutcome::HuntStarted(hunt) = executed.outcome.outcome else {
        panic!("unexpected outcome");
    };
    assert_eq!(hunt.monster, wolf);
    assert_eq!(hunt.difficulty, Difficulty::Hard);

    let state = handle.query_state().await.unwrap();
    assert_eq!(state.stats.active_hunts.len(), 1);
    assert_eq!(state.history.len(), 1);
}

#[tokio::test]
async fn build_requires_content() {
    let error = Runtime::builder().build().await.err().unwrap();
    assert!(matches!(error, runtime::RuntimeError::MissingContent));
}

/// A heat wave raises the stamina cost; a blocked auto-hunt waits for the
/// scaled cost instead of failing on every stamina tick.
#[tokio::test(start_paused = true)]
async fn auto_hunt_waits_for_weather_scaled_stamina() {
    let catalog = builtin_catalog().unwrap();
    let config = GameConfig::default();
    let wolf = MonsterId::from("shadow-wolf");

    let mut state = starting_state(9, &config, &catalog);
    state
        .profile
        .counters
        .record_kills(&wolf, config.auto_hunt_threshold);
    state.world.weather.insert(
        BiomeId::from("forest"),
        BiomeWeather {
            kind: WeatherKind::HeatWave,
            remaining_secs: 100_000,
        },
    );
    state.stats.stamina =
        StaminaMeter::new(15, config.starting_stamina, config.stamina_regen_per_minute);

    let runtime = Runtime::builder()
        .content(catalog)
        .initial_state(state)
        .build()
        .await
        .unwrap();
    let handle = runtime.handle();
    let mut system = handle.subscribe(Topic::System);

    handle
        .execute(Action::set_auto_hunt("shadow-wolf", true))
        .await
        .unwrap();
    let outcome = handle
        .execute(Action::start_hunt("shadow-wolf", Difficulty::Normal))
        .await
        .expect("fifteen stamina covers a heat wave hunt");
    let ActionOutcome::HuntStarted(hunt) = outcome.outcome else {
        panic!("unexpected outcome: {:?}", outcome.outcome);
    };
    assert_eq!(hunt.stamina_spent, 15);

    let mut failures = 0;
    let restarted = next_event(&mut system, |event| match event {
        Event::ActionFailed(failed) if failed.source == ActionSource::AutoHunt => {
            failures += 1;
            false
        }
        Event::ActionExecuted(executed) => executed.source == ActionSource::AutoHunt,
        _ => false,
    })
    .await;

    assert!(matches!(restarted, Event::ActionExecuted(_)));
    assert_eq!(failures, 1, "only the restart at completion is reported");
}
