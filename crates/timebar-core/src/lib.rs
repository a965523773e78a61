//! Timebar Core Library
//!
//! Countdown engine, alert playback and sound discovery for a single
//! status-bar timer.
//!
//! # Example
//!
//! ```no_run
//! use timebar_core::{SystemClock, TimerEngine, TimerListener, TimerUpdate};
//!
//! struct Printer;
//!
//! impl TimerListener for Printer {
//!     fn on_state_changed(&mut self, update: &TimerUpdate) {
//!         println!("{:?} {:?}", update.state, update.remaining);
//!     }
//! }
//!
//! let mut engine = TimerEngine::new(SystemClock);
//! engine.subscribe(Box::new(Printer));
//! engine.start(300);
//! ```

mod countdown;
mod error;
mod sound;
mod timer;

pub use {
    countdown::{format, format_compact},
    error::{CoreError, Result as CoreResult},
    sound::{
        AUDIO_EXTENSIONS, AlertController, AlertPlayer, NO_SOUND_LABEL, RodioPlayer, SoundCatalog,
        SoundOption,
    },
    timer::{
        Clock, SystemClock, TICK_PERIOD, Ticker, TimerEngine, TimerListener, TimerState,
        TimerUpdate,
    },
};
