use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Alert sound configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoundConfig {
    /// Label of the selected sound (None = No Sound).
    #[serde(default)]
    pub selected: Option<String>,

    /// Overrides the primary sound directory.
    #[serde(default)]
    pub directory: Option<PathBuf>,
}
