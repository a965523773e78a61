use crate::config::default_notification;

use serde::{Deserialize, Serialize};

/// Completion alert configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertConfig {
    /// Whether to raise a desktop notification when the countdown finishes.
    #[serde(default = "default_notification")]
    pub notification: bool,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            notification: default_notification(),
        }
    }
}
