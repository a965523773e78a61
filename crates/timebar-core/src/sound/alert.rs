//! Completion alert driven by timer updates.
//!
//! Plays the selected sound in a loop while the timer is Finished. Picking
//! another sound while Finished swaps playback, so sounds can be auditioned
//! after the timer went off. Leaving Finished always silences the alert.

use crate::{AlertPlayer, TimerListener, TimerState, TimerUpdate};

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

/// Owns the audio output and reacts to timer transitions.
pub struct AlertController<P: AlertPlayer> {
    player: P,
    selected: Option<PathBuf>,
    finished: bool,
}

impl<P: AlertPlayer> AlertController<P> {
    /// Create a controller with an initial sound selection (`None` = silent).
    pub fn new(player: P, selected: Option<PathBuf>) -> Self {
        Self {
            player,
            selected,
            finished: false,
        }
    }

    /// Currently selected sound.
    pub fn selected(&self) -> Option<&Path> {
        self.selected.as_deref()
    }

    fn play_selected(&mut self) {
        self.player.stop();

        let Some(path) = self.selected.as_deref() else {
            debug!("No alert sound selected, finishing silently");
            return;
        };

        if let Err(e) = self.player.play_looped(path) {
            warn!(error = %e, "Alert sound could not be played");
        }
    }
}

impl<P: AlertPlayer> TimerListener for AlertController<P> {
    fn on_state_changed(&mut self, update: &TimerUpdate) {
        let finished = update.state == TimerState::Finished;

        match (self.finished, finished) {
            (false, true) => {
                self.finished = true;
                self.play_selected();
            }
            (true, false) => {
                self.finished = false;
                self.player.stop();
            }
            _ => {}
        }
    }

    fn on_sound_selected(&mut self, locator: Option<&Path>) {
        self.selected = locator.map(Path::to_path_buf);

        if self.finished {
            self.play_selected();
        }
    }
}
