mod clock;
mod engine;
mod listener;
mod ticker;
mod timer_state;

pub(crate) use timer_state::Phase;

pub use {
    clock::{Clock, SystemClock},
    engine::TimerEngine,
    listener::{TimerListener, TimerUpdate},
    ticker::{TICK_PERIOD, Ticker},
    timer_state::TimerState,
};
