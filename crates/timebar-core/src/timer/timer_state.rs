use std::time::{Duration, SystemTime};

/// Observable timer states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    /// No countdown armed.
    Idle,
    /// Counting down against the wall clock.
    Running,
    /// Countdown frozen with a remainder.
    Paused,
    /// Countdown reached zero; alert may be sounding.
    Finished,
}

/// Engine-internal state carrying exactly the data each state needs.
///
/// Only `Running` holds an anchor and only `Paused` holds a remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Phase {
    Idle,
    Running {
        /// Wall-clock instant the countdown reaches zero if uninterrupted.
        end_anchor: SystemTime,
    },
    Paused {
        remaining: Duration,
    },
    Finished,
}

impl Phase {
    pub(crate) fn state(&self) -> TimerState {
        match self {
            Phase::Idle => TimerState::Idle,
            Phase::Running { .. } => TimerState::Running,
            Phase::Paused { .. } => TimerState::Paused,
            Phase::Finished => TimerState::Finished,
        }
    }
}
