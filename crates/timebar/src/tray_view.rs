use timebar_core::{TimerState, TimerUpdate, format, format_compact};

/// Everything the tray needs to draw one timer update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrayView {
    /// Timer state, selects the icon.
    pub state: TimerState,
    /// Status-bar text. Empty while Idle or Finished.
    pub title: String,
    /// Hover text.
    pub tooltip: String,
    /// Which menu commands are currently meaningful.
    pub affordances: Affordances,
}

/// Enabled flags for the timer menu items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Affordances {
    /// Start and the preset items.
    pub start: bool,
    /// Pause.
    pub pause: bool,
    /// Resume.
    pub resume: bool,
    /// Stop.
    pub stop: bool,
    /// Restart.
    pub restart: bool,
}

impl Affordances {
    /// Derive menu affordances from the timer state alone.
    pub fn for_state(state: TimerState, has_last_duration: bool) -> Self {
        let idle_or_finished = matches!(state, TimerState::Idle | TimerState::Finished);
        Self {
            start: idle_or_finished,
            pause: state == TimerState::Running,
            resume: state == TimerState::Paused,
            stop: state != TimerState::Idle,
            restart: idle_or_finished && has_last_duration,
        }
    }
}

impl TrayView {
    /// Build the view for a timer update.
    pub fn from_update(update: &TimerUpdate) -> Self {
        let remaining = update.remaining.unwrap_or(0) as i64;

        let (title, tooltip) = match update.state {
            TimerState::Idle if update.last_duration > 0 => (
                String::new(),
                format!("Timebar - Ready ({})", format(update.last_duration as i64)),
            ),
            TimerState::Idle => (String::new(), "Timebar - Ready".to_string()),
            TimerState::Running => (
                format_compact(remaining),
                format!("Timebar - {} remaining", format(remaining)),
            ),
            TimerState::Paused => (
                format_compact(remaining),
                format!("Timebar - Paused at {}", format(remaining)),
            ),
            TimerState::Finished => (String::new(), "Timebar - Time's up!".to_string()),
        };

        Self {
            state: update.state,
            title,
            tooltip,
            affordances: Affordances::for_state(update.state, update.last_duration > 0),
        }
    }
}
