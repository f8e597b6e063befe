//! Simulation worker that owns the authoritative [`game_core::GameState`].
//!
//! Receives commands from [`crate::RuntimeHandle`], executes actions via
//! [`game_core::GameEngine`], and publishes [`Event`] notifications. Hunt
//! timers, the stamina interval and the weather interval all feed the same
//! loop, so every action runs against the latest state.

mod clock;

use std::collections::BTreeMap;
use std::time::Duration;

use tokio::sync::{mpsc, oneshot};
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, error, info};

use game_core::rewards::hunt_stamina_cost;
use game_core::{
    Action, ActionError, ActionOutcome, CatalogOracle, Difficulty, ExecuteError,
    ExecutionOutcome, GameEngine, GameError, GameState, HuntId, MonsterId, WeatherOracle,
};

use crate::api::{Result, RuntimeError};
use crate::events::{ActionExecuted, ActionFailed, ActionSource, Event, EventBus};
use crate::oracle::OracleBundle;

use clock::GameClock;

/// Commands that can be sent to the simulation worker
pub enum Command {
    /// Execute a player action at the current game time.
    Execute {
        action: Action,
        reply: oneshot::Sender<Result<ExecutionOutcome>>,
    },
    /// Query the current game state (read-only).
    QueryState { reply: oneshot::Sender<GameState> },
    QuerySnapshot { reply: oneshot::Sender<StateSnapshot> },
}

/// Game state together with the game time it was read at.
#[derive(Clone, Debug)]
pub struct StateSnapshot {
    pub state: GameState,
    pub now_ms: u64,
}

/// Timer periods and game-time scale for the worker.
#[derive(Clone, Copy, Debug)]
pub struct TimerSettings {
    pub stamina_tick: Duration,
    pub weather_tick: Duration,
    pub time_scale: u32,
}

#[derive(Debug)]
enum TimerEvent {
    HuntDue(HuntId),
}

/// Background task that processes gameplay commands and timers.
pub struct SimulationWorker {
    state: GameState,
    oracles: OracleBundle,
    clock: GameClock,
    timers: TimerSettings,
    command_rx: mpsc::Receiver<Command>,
    timer_tx: mpsc::UnboundedSender<TimerEvent>,
    timer_rx: mpsc::UnboundedReceiver<TimerEvent>,
    event_bus: EventBus,
    /// Auto-hunts that could not restart yet, retried as stamina returns.
    pending_auto_hunts: BTreeMap<MonsterId, Difficulty>,
    last_regen_ms: u64,
    weather_anchor_ms: u64,
}

impl SimulationWorker {
    /// Creates a new simulation worker.
    pub fn new(
        state: GameState,
        oracles: OracleBundle,
        timers: TimerSettings,
        command_rx: mpsc::Receiver<Command>,
        event_bus: EventBus,
    ) -> Self {
        let (timer_tx, timer_rx) = mpsc::unbounded_channel();
        let clock = GameClock::start(state.clock_ms, timers.time_scale);
        let now_ms = clock.now_ms();

        Self {
            state,
            oracles,
            clock,
            timers,
            command_rx,
            timer_tx,
            timer_rx,
            event_bus,
            pending_auto_hunts: BTreeMap::new(),
            last_regen_ms: now_ms,
            weather_anchor_ms: now_ms,
        }
    }

    /// Main worker loop. Stops once every command sender is dropped.
    pub async fn run(mut self) {
        info!(
            target: "runtime::worker",
            clock_ms = self.state.clock_ms,
            time_scale = self.timers.time_scale,
            "simulation worker started"
        );

        let mut stamina = Self::interval(self.timers.stamina_tick);
        let mut weather = Self::interval(self.timers.weather_tick);

        // Biomes without weather are rolled right away.
        let _ = self.execute(&Action::advance_weather(0), ActionSource::Timer);
        self.schedule_active_hunts();

        loop {
            tokio::select! {
                command = self.command_rx.recv() => match command {
                    Some(command) => self.handle_command(command),
                    None => break,
                },
                Some(timer) = self.timer_rx.recv() => self.handle_timer(timer),
                _ = stamina.tick() => self.regenerate_stamina(),
                _ = weather.tick() => self.advance_weather(),
            }
        }

        info!(target: "runtime::worker", nonce = self.state.nonce, "simulation worker stopped");
    }

    fn interval(period: Duration) -> time::Interval {
        let period = period.max(Duration::from_millis(1));
        let mut interval = time::interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        interval
    }

    fn handle_command(&mut self, command: Command) {
        match command {
            Command::Execute { action, reply } => {
                let result = self
                    .execute(&action, ActionSource::Player)
                    .map_err(RuntimeError::from);
                let _ = reply.send(result);
            }
            Command::QueryState { reply } => {
                let _ = reply.send(self.state.clone());
            }
            Command::QuerySnapshot { reply } => {
                let snapshot = StateSnapshot {
                    now_ms: self.clock.now_ms().max(self.state.clock_ms),
                    state: self.state.clone(),
                };
                let _ = reply.send(snapshot);
            }
        }
    }

    /// Runs one action through the engine and publishes the result.
    fn execute(
        &mut self,
        action: &Action,
        source: ActionSource,
    ) -> std::result::Result<ExecutionOutcome, ExecuteError> {
        let now_ms = self.clock.now_ms();
        let env = self.oracles.as_game_env();
        let result = GameEngine::new(&mut self.state).execute(env, action, now_ms);

        match &result {
            Ok(outcome) => {
                if !is_quiet(&outcome.outcome) {
                    self.event_bus.publish(Event::ActionExecuted(ActionExecuted {
                        source,
                        outcome: outcome.clone(),
                        clock_ms: self.state.clock_ms,
                    }));
                }
                self.after_success(outcome);
            }
            Err(error) => {
                if error.severity().is_internal() {
                    error!(
                        target: "runtime::worker",
                        ?source,
                        code = error.error_code(),
                        "action failed: {error}"
                    );
                } else {
                    debug!(
                        target: "runtime::worker",
                        ?source,
                        code = error.error_code(),
                        "action blocked: {error}"
                    );
                }
                self.event_bus.publish(Event::ActionFailed(ActionFailed::new(
                    source,
                    action,
                    error,
                    self.state.clock_ms,
                )));
            }
        }

        result
    }

    fn after_success(&mut self, outcome: &ExecutionOutcome) {
        match &outcome.outcome {
            ActionOutcome::HuntStarted(hunt) => {
                self.schedule_hunt(hunt.id, hunt.ends_at_ms());
            }
            ActionOutcome::HuntCompleted(completion) => {
                let monster = &completion.record.monster;
                if self.state.profile.auto_hunt.contains(monster) {
                    self.restart_auto_hunt(monster.clone(), completion.record.difficulty);
                }
                self.retry_auto_hunts();
            }
            ActionOutcome::AutoHuntSet {
                monster,
                enabled: false,
            } => {
                self.pending_auto_hunts.remove(monster);
            }
            _ => {}
        }
    }

    fn schedule_active_hunts(&mut self) {
        let hunts: Vec<_> = self
            .state
            .stats
            .active_hunts
            .iter()
            .map(|hunt| (hunt.id, hunt.ends_at_ms()))
            .collect();
        for (id, ends_at_ms) in hunts {
            self.schedule_hunt(id, ends_at_ms);
        }
    }

    fn schedule_hunt(&self, id: HuntId, ends_at_ms: u64) {
        self.schedule_after(id, ends_at_ms.saturating_sub(self.clock.now_ms()));
    }

    fn schedule_after(&self, id: HuntId, game_ms: u64) {
        let delay = self.clock.real_delay(game_ms);
        let timer_tx = self.timer_tx.clone();
        debug!(target: "runtime::worker", hunt = %id, ?delay, "hunt timer scheduled");

        tokio::spawn(async move {
            time::sleep(delay).await;
            // The worker is gone once the receiver drops.
            let _ = timer_tx.send(TimerEvent::HuntDue(id));
        });
    }

    fn handle_timer(&mut self, timer: TimerEvent) {
        match timer {
            TimerEvent::HuntDue(id) => self.complete_hunt(id),
        }
    }

    fn complete_hunt(&mut self, id: HuntId) {
        let now_ms = self.clock.now_ms();
        let Some(hunt) = self.state.stats.hunt(id) else {
            debug!(target: "runtime::worker", hunt = %id, "hunt already resolved");
            return;
        };
        if !hunt.is_due(now_ms) {
            let remaining = hunt.remaining_ms(now_ms);
            self.schedule_after(id, remaining);
            return;
        }

        if let Err(error) = self.execute(&Action::complete_hunt(id), ActionSource::Timer) {
            if let Some(ActionError::HuntNotFinished { remaining_ms, .. }) = error.action_error() {
                self.schedule_after(id, *remaining_ms);
            }
        }
    }

    fn restart_auto_hunt(&mut self, monster: MonsterId, difficulty: Difficulty) {
        let action = Action::start_hunt(monster.clone(), difficulty);
        match self.execute(&action, ActionSource::AutoHunt) {
            Ok(_) => {
                self.pending_auto_hunts.remove(&monster);
            }
            Err(error) => {
                let retry = matches!(
                    error.action_error(),
                    Some(ActionError::InsufficientStamina { .. } | ActionError::TooManyHunts { .. })
                );
                if retry {
                    debug!(target: "runtime::worker", %monster, "auto-hunt waiting to restart");
                    self.pending_auto_hunts.insert(monster, difficulty);
                } else {
                    self.pending_auto_hunts.remove(&monster);
                }
            }
        }
    }

    fn retry_auto_hunts(&mut self) {
        if self.pending_auto_hunts.is_empty() {
            return;
        }

        let limit = self.oracles.config().active_hunt_limit();

        let pending = std::mem::take(&mut self.pending_auto_hunts);
        for (monster, difficulty) in pending {
            if !self.state.profile.auto_hunt.contains(&monster) {
                continue;
            }
            let ready = self.state.stats.stamina.has(self.stamina_cost_of(&monster))
                && self.state.stats.active_hunts.len() < limit
                && !self.state.stats.is_hunting(&monster);
            if ready {
                self.restart_auto_hunt(monster, difficulty);
            } else {
                self.pending_auto_hunts.insert(monster, difficulty);
            }
        }
    }

    /// Stamina a hunt on `monster` costs under its biome's current weather.
    fn stamina_cost_of(&self, monster: &MonsterId) -> u32 {
        let content = self.oracles.content();
        let config = self.oracles.config();
        match content.monster(monster) {
            Some(template) => {
                let weather = self.state.world.weather_of(&template.biome);
                hunt_stamina_cost(config, &content.effects(weather))
            }
            None => config.hunt_stamina_cost,
        }
    }

    fn regenerate_stamina(&mut self) {
        let now_ms = self.clock.now_ms();
        let elapsed_ms = now_ms.saturating_sub(self.last_regen_ms);
        self.last_regen_ms = now_ms;

        if elapsed_ms > 0 && !self.state.stats.stamina.is_full() {
            let _ = self.execute(&Action::regenerate_stamina(elapsed_ms), ActionSource::Timer);
        }
        self.retry_auto_hunts();
    }

    fn advance_weather(&mut self) {
        let now_ms = self.clock.now_ms();
        let elapsed_secs = now_ms.saturating_sub(self.weather_anchor_ms) / 1_000;
        if elapsed_secs == 0 {
            return;
        }
        // Sub-second remainders carry over to the next tick.
        self.weather_anchor_ms += elapsed_secs * 1_000;
        let _ = self.execute(&Action::advance_weather(elapsed_secs), ActionSource::Timer);
    }
}

/// Weather ticks that changed nothing are not worth an event.
fn is_quiet(outcome: &ActionOutcome) -> bool {
    matches!(outcome, ActionOutcome::WeatherAdvanced(changes) if changes.is_empty())
}
