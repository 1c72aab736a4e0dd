use std::time::Instant;

/// The largest value reported by [`GameClock::elapsed_secs_at`].
pub const MAX_ELAPSED_SECS: u32 = 999;

/// Whole seconds of play since the first intent.
///
/// The clock is purely observational: it is started by the first intent of a
/// game, frozen when the game ends, and read by polling. The reading saturates
/// at [`MAX_ELAPSED_SECS`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GameClock {
    started_at: Option<Instant>,
    stopped_at: Option<Instant>,
}

impl GameClock {
    /// Creates a clock that has not started yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts the clock at `now` unless it was already started.
    pub fn start_at(&mut self, now: Instant) {
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }
    }

    /// Freezes the clock at `now`. Has no effect on a clock that is not running.
    pub fn stop_at(&mut self, now: Instant) {
        if self.is_running() {
            self.stopped_at = Some(now);
        }
    }

    /// Returns the clock to its initial, not-started state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Returns `true` if the clock has started and not yet stopped.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.started_at.is_some() && self.stopped_at.is_none()
    }

    /// Returns the elapsed whole seconds as seen at `now`.
    #[must_use]
    pub fn elapsed_secs_at(&self, now: Instant) -> u32 {
        let Some(started_at) = self.started_at else {
            return 0;
        };
        let end = self.stopped_at.unwrap_or(now);
        let secs = end.saturating_duration_since(started_at).as_secs();
        u32::try_from(secs).map_or(MAX_ELAPSED_SECS, |secs| secs.min(MAX_ELAPSED_SECS))
    }
}
