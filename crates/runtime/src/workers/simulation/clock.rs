//! Mapping between wall-clock time and game time.
use std::time::Duration;

use tokio::time::Instant;

/// Game time that runs `time_scale` times faster than the tokio clock,
/// starting from the clock of the loaded state.
#[derive(Clone, Copy, Debug)]
pub(crate) struct GameClock {
    origin: Instant,
    base_ms: u64,
    time_scale: u32,
}

impl GameClock {
    pub(crate) fn start(base_ms: u64, time_scale: u32) -> Self {
        Self {
            origin: Instant::now(),
            base_ms,
            time_scale: time_scale.max(1),
        }
    }

    pub(crate) fn now_ms(&self) -> u64 {
        let real_ms = u64::try_from(self.origin.elapsed().as_millis()).unwrap_or(u64::MAX);
        self.base_ms
            .saturating_add(real_ms.saturating_mul(u64::from(self.time_scale)))
    }

    /// Real delay after which at least `game_ms` of game time has passed.
    pub(crate) fn real_delay(&self, game_ms: u64) -> Duration {
        Duration::from_millis(game_ms.div_ceil(u64::from(self.time_scale)))
    }
}
