use std::time::{Duration, Instant};
use uuid::Uuid;

/// Input poll interval in milliseconds
pub const DEFAULT_POLL_MS: u64 = 250;

/// Elapsed-time tick interval in milliseconds
pub const DEFAULT_TICK_MS: u64 = 1000;

/// Get the input poll duration
pub fn poll_duration() -> Duration {
    Duration::from_millis(DEFAULT_POLL_MS)
}

/// A tick schedule bound to one task.
///
/// At most one schedule is armed at a time. Syncing to a different task (or to
/// none) cancels the current schedule before arming the next one, so a tick
/// never lands on a task that stopped being active.
#[derive(Debug)]
pub struct Ticker {
    interval: Duration,
    armed: Option<Armed>,
}

#[derive(Debug, Clone, Copy)]
struct Armed {
    task_id: Uuid,
    last_fire: Instant,
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_TICK_MS))
    }
}

impl Ticker {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            armed: None,
        }
    }

    /// Task the schedule currently targets
    pub fn target(&self) -> Option<Uuid> {
        self.armed.map(|a| a.task_id)
    }

    /// Follow the active task: keep the schedule if the identity is unchanged,
    /// otherwise cancel it and re-arm from `now`
    pub fn sync(&mut self, active: Option<Uuid>, now: Instant) {
        if self.target() == active {
            return;
        }

        if let Some(previous) = self.armed.take() {
            tracing::debug!(task = %previous.task_id, "ticker cancelled");
        }

        self.armed = active.map(|task_id| {
            tracing::debug!(task = %task_id, "ticker armed");
            Armed {
                task_id,
                last_fire: now,
            }
        });
    }

    /// The task owed one tick, if an interval has passed since the last fire.
    ///
    /// Credits at most one tick per call. After a stall the missed intervals
    /// are dropped rather than credited in bulk; the schedule keeps its phase.
    pub fn due(&mut self, now: Instant) -> Option<Uuid> {
        let interval_nanos = self.interval.as_nanos().max(1);
        let armed = self.armed.as_mut()?;

        let waited = now.saturating_duration_since(armed.last_fire);
        let intervals = (waited.as_nanos() / interval_nanos) as u64;
        if intervals == 0 {
            return None;
        }
        if intervals > 1 {
            tracing::debug!(task = %armed.task_id, skipped = intervals - 1, "ticker dropped missed intervals");
        }

        let advance = Duration::from_nanos((interval_nanos as u64).saturating_mul(intervals));
        armed.last_fire += advance;
        Some(armed.task_id)
    }
}
