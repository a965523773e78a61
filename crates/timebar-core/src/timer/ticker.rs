use std::time::Duration;

use tokio::time::{Instant, sleep_until};
use tracing::debug;

/// Fixed cadence of the countdown tick.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Cancellable one-second schedule.
///
/// Holds at most one pending deadline. Arming replaces any existing
/// deadline, so two schedules can never overlap.
#[derive(Debug, Default)]
pub struct Ticker {
    next: Option<Instant>,
}

impl Ticker {
    /// Create a disarmed ticker.
    pub fn new() -> Self {
        Self { next: None }
    }

    /// Schedule the first tick one period from now, dropping any previous schedule.
    pub fn arm(&mut self) {
        if self.next.is_some() {
            debug!("Replacing pending tick schedule");
        }
        self.next = Some(Instant::now() + TICK_PERIOD);
    }

    /// Drop the pending tick, if any.
    pub fn cancel(&mut self) {
        self.next = None;
    }

    /// Whether a tick is scheduled.
    pub fn is_armed(&self) -> bool {
        self.next.is_some()
    }

    /// Wait for the next tick.
    ///
    /// Pends forever while disarmed. Ticks missed while the process was
    /// stalled are skipped rather than delivered in a burst.
    pub async fn tick(&mut self) {
        let Some(deadline) = self.next else {
            return std::future::pending().await;
        };

        sleep_until(deadline).await;

        let now = Instant::now();
        let mut next = deadline + TICK_PERIOD;
        if next <= now {
            let behind = now.duration_since(deadline);
            let skipped = behind.as_millis() / TICK_PERIOD.as_millis();
            debug!(skipped_ticks = skipped as u64, "Tick schedule fell behind");
            next = now + TICK_PERIOD;
        }

        self.next = Some(next);
    }
}
