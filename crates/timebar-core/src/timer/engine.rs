//! Countdown state machine.
//!
//! Remaining time is always derived from a wall-clock anchor
//! (`end = now + duration`) and never decremented per tick, so missed ticks
//! do not accumulate drift. Every command is total: a command that does not
//! apply to the current state is a no-op.

use crate::{
    Clock, Ticker, TimerListener, TimerState, TimerUpdate,
    timer::Phase,
};

use std::{
    path::{Path, PathBuf},
    time::{Duration, SystemTime},
};

use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

/// Owns timing truth for the single countdown.
pub struct TimerEngine<C: Clock> {
    clock: C,
    phase: Phase,
    last_duration: u64,
    session_id: Option<Uuid>,
    ticker: Ticker,
    listeners: Vec<Box<dyn TimerListener>>,
}

impl<C: Clock> TimerEngine<C> {
    /// Create an idle engine with no previous duration.
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            phase: Phase::Idle,
            last_duration: 0,
            session_id: None,
            ticker: Ticker::new(),
            listeners: Vec::new(),
        }
    }

    /// Register a listener. Listeners are notified in registration order.
    pub fn subscribe(&mut self, listener: Box<dyn TimerListener>) {
        self.listeners.push(listener);
    }

    /// Current state.
    pub fn state(&self) -> TimerState {
        self.phase.state()
    }

    /// Whole seconds remaining, `None` while idle.
    pub fn remaining(&self) -> Option<u64> {
        match self.phase {
            Phase::Idle => None,
            Phase::Running { end_anchor } => Some(whole_seconds(self.until(end_anchor))),
            Phase::Paused { remaining } => Some(whole_seconds(remaining)),
            Phase::Finished => Some(0),
        }
    }

    /// Most recently started duration in seconds (0 if never started).
    pub fn last_duration(&self) -> u64 {
        self.last_duration
    }

    /// Whether the tick schedule is armed.
    pub fn is_ticking(&self) -> bool {
        self.ticker.is_armed()
    }

    /// Current snapshot, as delivered to listeners.
    pub fn snapshot(&self) -> TimerUpdate {
        TimerUpdate {
            state: self.state(),
            remaining: self.remaining(),
            last_duration: self.last_duration,
        }
    }

    /// Wait for the next scheduled tick. Pends forever unless running.
    pub async fn next_tick(&mut self) {
        self.ticker.tick().await
    }

    /// Begin a countdown of `seconds`.
    ///
    /// Accepted from Idle and Finished. A zero duration is rejected and
    /// listeners receive `on_invalid_duration`.
    #[instrument(skip(self))]
    pub fn start(&mut self, seconds: u64) {
        if !matches!(self.phase, Phase::Idle | Phase::Finished) {
            debug!(state = ?self.state(), "Start ignored");
            return;
        }

        if seconds == 0 {
            warn!("Start requested with zero duration");
            for listener in &mut self.listeners {
                listener.on_invalid_duration();
            }
            return;
        }

        let session_id = Uuid::new_v4();
        self.last_duration = seconds;
        self.session_id = Some(session_id);
        self.phase = Phase::Running {
            end_anchor: self.clock.now() + Duration::from_secs(seconds),
        };
        self.ticker.arm();

        info!(session_id = %session_id, duration_secs = seconds, "Countdown started");
        self.notify();
    }

    /// Freeze the countdown.
    #[instrument(skip(self))]
    pub fn pause(&mut self) {
        let Phase::Running { end_anchor } = self.phase else {
            debug!(state = ?self.state(), "Pause ignored");
            return;
        };

        let remaining = self.until(end_anchor);
        self.phase = Phase::Paused { remaining };
        self.ticker.cancel();

        info!(
            session_id = ?self.session_id,
            remaining_ms = remaining.as_millis() as u64,
            "Countdown paused"
        );
        self.notify();
    }

    /// Continue a paused countdown from its frozen remainder.
    #[instrument(skip(self))]
    pub fn resume(&mut self) {
        let Phase::Paused { remaining } = self.phase else {
            debug!(state = ?self.state(), "Resume ignored");
            return;
        };

        if whole_seconds(remaining) == 0 {
            debug!("Resume ignored, nothing remaining");
            return;
        }

        self.phase = Phase::Running {
            end_anchor: self.clock.now() + remaining,
        };
        self.ticker.arm();

        info!(session_id = ?self.session_id, "Countdown resumed");
        self.notify();
    }

    /// Return to Idle from any state. The last duration is kept.
    #[instrument(skip(self))]
    pub fn stop(&mut self) {
        if self.phase == Phase::Idle {
            return;
        }

        self.phase = Phase::Idle;
        self.ticker.cancel();

        info!(session_id = ?self.session_id.take(), "Countdown stopped");
        self.notify();
    }

    /// Start again with the last duration.
    ///
    /// Accepted from Idle and Finished; a no-op if nothing was started before.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        if self.last_duration == 0 {
            debug!("Restart ignored, no previous duration");
            return;
        }
        self.start(self.last_duration);
    }

    /// Forward a sound selection to listeners.
    #[instrument(skip(self))]
    pub fn select_sound(&mut self, locator: Option<PathBuf>) {
        let locator: Option<&Path> = locator.as_deref();
        for listener in &mut self.listeners {
            listener.on_sound_selected(locator);
        }
    }

    /// Re-derive remaining time and finish when it reaches zero.
    ///
    /// Safe to call at any time; does nothing unless running.
    pub fn tick(&mut self) {
        let Phase::Running { end_anchor } = self.phase else {
            return;
        };

        if whole_seconds(self.until(end_anchor)) == 0 {
            self.phase = Phase::Finished;
            self.ticker.cancel();
            info!(session_id = ?self.session_id, "Countdown finished");
        }

        self.notify();
    }

    fn until(&self, end_anchor: SystemTime) -> Duration {
        end_anchor
            .duration_since(self.clock.now())
            .unwrap_or(Duration::ZERO)
    }

    fn notify(&mut self) {
        let update = self.snapshot();
        debug!(state = ?update.state, remaining = ?update.remaining, "Timer update");
        for listener in &mut self.listeners {
            listener.on_state_changed(&update);
        }
    }
}

/// Round to the nearest whole second.
fn whole_seconds(duration: Duration) -> u64 {
    (duration + Duration::from_millis(500)).as_secs()
}
