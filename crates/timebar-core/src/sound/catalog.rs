//! Discovery of alert sounds on disk.
//!
//! A catalog always starts with the "No Sound" entry. Unreadable or missing
//! directories produce a catalog holding only that entry.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, info, instrument, warn};

/// File extensions recognised as alert sounds (compared case-insensitively).
pub const AUDIO_EXTENSIONS: [&str; 5] = ["aiff", "wav", "caf", "mp3", "m4a"];

/// Label of the permanent silent entry.
pub const NO_SOUND_LABEL: &str = "No Sound";

/// One selectable alert sound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoundOption {
    /// File name without extension, or [`NO_SOUND_LABEL`].
    pub label: String,
    /// Path to the audio file; `None` means silent.
    pub locator: Option<PathBuf>,
}

impl SoundOption {
    /// The silent entry.
    pub fn none() -> Self {
        Self {
            label: NO_SOUND_LABEL.to_string(),
            locator: None,
        }
    }
}

/// Immutable list of available alert sounds.
#[derive(Debug, Clone)]
pub struct SoundCatalog {
    options: Vec<SoundOption>,
}

impl SoundCatalog {
    /// Scan `primary`, or `fallback` when `primary` does not exist.
    #[instrument]
    pub fn scan(primary: &Path, fallback: &Path) -> Self {
        let dir = if primary.is_dir() {
            primary
        } else {
            debug!(primary = ?primary, "Primary sound directory missing, using fallback");
            fallback
        };
        Self::scan_dir(dir)
    }

    /// Scan a single directory.
    #[instrument]
    pub fn scan_dir(dir: &Path) -> Self {
        let mut sounds = match fs::read_dir(dir) {
            Ok(entries) => entries
                .filter_map(|entry| entry.ok())
                .map(|entry| entry.path())
                .filter(|path| path.is_file() && has_audio_extension(path))
                .filter_map(|path| {
                    let label = path.file_stem()?.to_string_lossy().into_owned();
                    Some(SoundOption {
                        label,
                        locator: Some(path),
                    })
                })
                .collect::<Vec<_>>(),
            Err(e) => {
                warn!(dir = ?dir, error = %e, "Sound directory unreadable");
                Vec::new()
            }
        };

        sounds.sort_by_cached_key(|option| option.label.to_lowercase());

        let mut options = Vec::with_capacity(sounds.len() + 1);
        options.push(SoundOption::none());
        options.extend(sounds);

        info!(dir = ?dir, sound_count = options.len() - 1, "Sound catalog built");

        Self { options }
    }

    /// All options, "No Sound" first.
    pub fn options(&self) -> &[SoundOption] {
        &self.options
    }

    /// Option at `index`.
    pub fn get(&self, index: usize) -> Option<&SoundOption> {
        self.options.get(index)
    }

    /// Index of the option whose label matches, ignoring case.
    pub fn position(&self, label: &str) -> Option<usize> {
        self.options
            .iter()
            .position(|option| option.label.eq_ignore_ascii_case(label))
    }
}

fn has_audio_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            AUDIO_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}
