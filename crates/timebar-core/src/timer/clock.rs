use std::time::SystemTime;

/// Source of wall-clock time for the countdown anchor.
///
/// Wall-clock time keeps advancing while the machine sleeps, so a countdown
/// anchored to it stays correct across suspend.
pub trait Clock {
    /// Current wall-clock time.
    fn now(&self) -> SystemTime;
}

/// [`Clock`] backed by [`SystemTime::now`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}
