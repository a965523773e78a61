//! Presentation adapter: turns timer updates into tray commands.

use crate::{TrayCommand, TraySink, TrayView};

use notify_rust::Notification;
use timebar_core::{TimerListener, TimerState, TimerUpdate, format};
use tracing::{debug, warn};

const INVALID_DURATION_HINT: &str = "Timebar - Set a duration first";

/// [`TimerListener`] that keeps the tray in sync with the engine.
pub struct TrayPresenter<S: TraySink> {
    sink: S,
    notify_on_finish: bool,
    last_view: Option<TrayView>,
}

impl<S: TraySink> TrayPresenter<S> {
    /// Create a presenter. `notify_on_finish` raises a desktop notification
    /// when the countdown completes.
    pub fn new(sink: S, notify_on_finish: bool) -> Self {
        Self {
            sink,
            notify_on_finish,
            last_view: None,
        }
    }

    fn notify_finished(&self, last_duration: u64) {
        if !self.notify_on_finish {
            return;
        }

        let result = Notification::new()
            .summary("Time's up!")
            .body(&format!("{} countdown finished", format(last_duration as i64)))
            .appname("Timebar")
            .show();

        if let Err(e) = result {
            warn!(error = %e, "Failed to show completion notification");
        }
    }
}

impl<S: TraySink> TimerListener for TrayPresenter<S> {
    fn on_state_changed(&mut self, update: &TimerUpdate) {
        let view = TrayView::from_update(update);

        if self.last_view.as_ref() == Some(&view) {
            return;
        }

        let entered_finished = view.state == TimerState::Finished
            && self.last_view.as_ref().map(|v| v.state) != Some(TimerState::Finished);

        self.sink.send(TrayCommand::Render(view.clone()));
        self.last_view = Some(view);

        if entered_finished {
            self.notify_finished(update.last_duration);
        }
    }

    fn on_invalid_duration(&mut self) {
        debug!("Showing invalid duration hint");
        self.sink.send(TrayCommand::Hint(INVALID_DURATION_HINT.to_string()));
    }
}
