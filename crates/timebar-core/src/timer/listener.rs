use crate::TimerState;

use std::path::Path;

/// Snapshot emitted to listeners after every state change and tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerUpdate {
    /// State after the command or tick.
    pub state: TimerState,
    /// Whole seconds left. `None` in Idle, `Some(0)` in Finished.
    pub remaining: Option<u64>,
    /// Most recently started duration, used to re-seed the input on Stop.
    pub last_duration: u64,
}

/// Observer of the timer engine.
///
/// Listeners run synchronously on the engine's thread, in subscription order.
pub trait TimerListener {
    /// Called after every transition and every tick while running.
    fn on_state_changed(&mut self, update: &TimerUpdate);

    /// Called when the user picks a different alert sound.
    fn on_sound_selected(&mut self, _locator: Option<&Path>) {}

    /// Called when Start was requested with a zero duration.
    fn on_invalid_duration(&mut self) {}
}
