use crate::config::{default_minutes, default_presets_minutes};

use serde::{Deserialize, Serialize};
use tracing::warn;

const MAX_HOURS: u64 = 23;
const MAX_MINUTES: u64 = 59;
const MAX_SECONDS: u64 = 59;
const MAX_PRESET_MINUTES: u64 = 24 * 60 - 1;

/// Countdown duration configuration.
///
/// Out-of-range fields are clamped, never rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerConfig {
    /// Hours part of the duration used by "Start".
    #[serde(default)]
    pub hours: u64,

    /// Minutes part of the duration used by "Start".
    #[serde(default = "default_minutes")]
    pub minutes: u64,

    /// Seconds part of the duration used by "Start".
    #[serde(default)]
    pub seconds: u64,

    /// Quick-start durations shown in the menu.
    #[serde(default = "default_presets_minutes")]
    pub presets_minutes: Vec<u64>,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            hours: 0,
            minutes: default_minutes(),
            seconds: 0,
            presets_minutes: default_presets_minutes(),
        }
    }
}

impl TimerConfig {
    /// Clamp every field into its allowed range.
    pub fn clamp(&mut self) {
        let before = self.clone();

        self.hours = self.hours.min(MAX_HOURS);
        self.minutes = self.minutes.min(MAX_MINUTES);
        self.seconds = self.seconds.min(MAX_SECONDS);
        for preset in &mut self.presets_minutes {
            *preset = (*preset).clamp(1, MAX_PRESET_MINUTES);
        }
        self.presets_minutes.sort_unstable();
        self.presets_minutes.dedup();

        if *self != before {
            warn!(?before, after = ?self, "Timer configuration clamped");
        }
    }

    /// Configured duration in seconds. May be zero.
    pub fn duration_secs(&self) -> u64 {
        self.hours * 3600 + self.minutes * 60 + self.seconds
    }
}
