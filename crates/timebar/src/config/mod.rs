mod alert_config;
#[allow(clippy::module_inception)]
mod config;
mod sound_config;
mod timer_config;

pub(crate) use {
    alert_config::AlertConfig, config::Config, sound_config::SoundConfig,
    timer_config::TimerConfig,
};

pub(crate) const DEFAULT_MINUTES: u64 = 5;
pub(crate) const DEFAULT_PRESETS_MINUTES: [u64; 5] = [1, 5, 10, 25, 60];
pub(crate) const DEFAULT_NOTIFICATION: bool = true;

pub(crate) fn default_minutes() -> u64 {
    DEFAULT_MINUTES
}

pub(crate) fn default_presets_minutes() -> Vec<u64> {
    DEFAULT_PRESETS_MINUTES.to_vec()
}

pub(crate) fn default_notification() -> bool {
    DEFAULT_NOTIFICATION
}
