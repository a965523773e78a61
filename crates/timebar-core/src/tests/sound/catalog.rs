use crate::{NO_SOUND_LABEL, SoundCatalog, SoundOption};

use std::{fs, path::PathBuf};

use uuid::Uuid;

/// Throwaway directory removed on drop.
struct ScratchDir(PathBuf);

impl ScratchDir {
    #[allow(clippy::unwrap_used)]
    fn with_files(names: &[&str]) -> Self {
        let dir = std::env::temp_dir().join(format!("timebar-sounds-{}", Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        for name in names {
            fs::write(dir.join(name), b"").unwrap();
        }
        Self(dir)
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.0);
    }
}

fn labels(catalog: &SoundCatalog) -> Vec<&str> {
    catalog.options().iter().map(|o| o.label.as_str()).collect()
}

/// WHAT: Missing directory yields only the No Sound entry
/// WHY: Scan failures degrade silently instead of erroring
#[test]
fn given_missing_directory_when_scanning_then_only_no_sound() {
    // Given: A path that does not exist
    let missing = std::env::temp_dir().join(format!("timebar-missing-{}", Uuid::new_v4()));

    // When: Scanning it
    let catalog = SoundCatalog::scan_dir(&missing);

    // Then: Exactly the silent entry
    assert_eq!(catalog.options(), &[SoundOption::none()]);
}

/// WHAT: Only allow-listed audio extensions are picked up
/// WHY: Other files in the directory are not playable alerts
#[test]
fn given_mixed_files_when_scanning_then_only_audio_listed() {
    // Given: Audio and non-audio files
    let dir = ScratchDir::with_files(&[
        "Glass.aiff",
        "Ping.wav",
        "Tink.caf",
        "Bell.mp3",
        "Chime.m4a",
        "notes.txt",
        "cover.png",
        "noext",
    ]);

    // When: Scanning
    let catalog = SoundCatalog::scan_dir(&dir.0);

    // Then: Five sounds plus No Sound, labels without extension
    assert_eq!(
        labels(&catalog),
        vec![NO_SOUND_LABEL, "Bell", "Chime", "Glass", "Ping", "Tink"]
    );
}

/// WHAT: Sounds are sorted case-insensitively with No Sound first
/// WHY: Picker order must be stable and natural to read
#[test]
fn given_mixed_case_names_when_scanning_then_sorted_ignoring_case() {
    let dir = ScratchDir::with_files(&["zeta.wav", "Alpha.wav", "beta.WAV", "Gamma.Mp3"]);

    let catalog = SoundCatalog::scan_dir(&dir.0);

    assert_eq!(
        labels(&catalog),
        vec![NO_SOUND_LABEL, "Alpha", "beta", "Gamma", "zeta"]
    );
    assert!(catalog.options()[0].locator.is_none());
    assert!(catalog.options()[1..].iter().all(|o| o.locator.is_some()));
}

/// WHAT: Fallback directory is used when the primary is missing
/// WHY: Bundled sounds may not be installed
#[test]
fn given_missing_primary_when_scanning_then_fallback_used() {
    let missing = std::env::temp_dir().join(format!("timebar-missing-{}", Uuid::new_v4()));
    let fallback = ScratchDir::with_files(&["Submarine.aiff"]);

    let catalog = SoundCatalog::scan(&missing, &fallback.0);

    assert_eq!(labels(&catalog), vec![NO_SOUND_LABEL, "Submarine"]);
    assert_eq!(
        catalog.options()[1].locator,
        Some(fallback.0.join("Submarine.aiff"))
    );
}

/// WHAT: Primary directory wins when it exists, even if empty
/// WHY: Fallback applies only to a missing primary
#[test]
fn given_empty_primary_when_scanning_then_fallback_ignored() {
    let primary = ScratchDir::with_files(&[]);
    let fallback = ScratchDir::with_files(&["Submarine.aiff"]);

    let catalog = SoundCatalog::scan(&primary.0, &fallback.0);

    assert_eq!(labels(&catalog), vec![NO_SOUND_LABEL]);
}

/// WHAT: Labels are found ignoring case
/// WHY: The configured selection is matched against scanned labels
#[test]
fn given_catalog_when_looking_up_label_then_position_found() {
    let dir = ScratchDir::with_files(&["Glass.aiff", "Ping.wav"]);
    let catalog = SoundCatalog::scan_dir(&dir.0);

    assert_eq!(catalog.position("glass"), Some(1));
    assert_eq!(catalog.position(NO_SOUND_LABEL), Some(0));
    assert_eq!(catalog.position("Missing"), None);
    assert_eq!(catalog.get(2).map(|o| o.label.as_str()), Some("Ping"));
}
