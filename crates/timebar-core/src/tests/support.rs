//! Test doubles shared across core tests.

use crate::{AlertPlayer, Clock, CoreResult, TimerListener, TimerUpdate};

use std::{
    cell::{Cell, RefCell},
    path::{Path, PathBuf},
    rc::Rc,
    time::{Duration, SystemTime, UNIX_EPOCH},
};

/// Clock that only moves when told to.
#[derive(Clone)]
pub(crate) struct ManualClock {
    now: Rc<Cell<SystemTime>>,
}

impl ManualClock {
    pub(crate) fn new() -> Self {
        Self {
            now: Rc::new(Cell::new(UNIX_EPOCH + Duration::from_secs(1_700_000_000))),
        }
    }

    pub(crate) fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    pub(crate) fn advance_secs(&self, secs: u64) {
        self.advance(Duration::from_secs(secs));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> SystemTime {
        self.now.get()
    }
}

/// Everything a listener was told, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Heard {
    Update(TimerUpdate),
    Sound(Option<PathBuf>),
    InvalidDuration,
}

#[derive(Clone, Default)]
pub(crate) struct RecordingListener {
    pub(crate) heard: Rc<RefCell<Vec<Heard>>>,
}

impl RecordingListener {
    pub(crate) fn updates(&self) -> Vec<TimerUpdate> {
        self.heard
            .borrow()
            .iter()
            .filter_map(|h| match h {
                Heard::Update(update) => Some(*update),
                _ => None,
            })
            .collect()
    }
}

impl TimerListener for RecordingListener {
    fn on_state_changed(&mut self, update: &TimerUpdate) {
        self.heard.borrow_mut().push(Heard::Update(*update));
    }

    fn on_sound_selected(&mut self, locator: Option<&Path>) {
        self.heard
            .borrow_mut()
            .push(Heard::Sound(locator.map(Path::to_path_buf)));
    }

    fn on_invalid_duration(&mut self) {
        self.heard.borrow_mut().push(Heard::InvalidDuration);
    }
}

/// Player that records calls and tracks how many sounds are audible.
#[derive(Clone, Default)]
pub(crate) struct RecordingPlayer {
    pub(crate) playing: Rc<RefCell<Vec<PathBuf>>>,
    pub(crate) started: Rc<RefCell<Vec<PathBuf>>>,
    pub(crate) max_concurrent: Rc<Cell<usize>>,
    pub(crate) fail: bool,
}

impl RecordingPlayer {
    pub(crate) fn now_playing(&self) -> Vec<PathBuf> {
        self.playing.borrow().clone()
    }

    pub(crate) fn started(&self) -> Vec<PathBuf> {
        self.started.borrow().clone()
    }
}

impl AlertPlayer for RecordingPlayer {
    fn play_looped(&mut self, path: &Path) -> CoreResult<()> {
        if self.fail {
            return Err(crate::CoreError::AudioOutput {
                reason: "test output unavailable".to_string(),
                location: error_location::ErrorLocation::from(std::panic::Location::caller()),
            });
        }

        self.playing.borrow_mut().push(path.to_path_buf());
        self.started.borrow_mut().push(path.to_path_buf());
        let concurrent = self.playing.borrow().len();
        self.max_concurrent
            .set(self.max_concurrent.get().max(concurrent));
        Ok(())
    }

    fn stop(&mut self) {
        self.playing.borrow_mut().clear();
    }
}
