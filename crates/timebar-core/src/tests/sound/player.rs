use crate::{AlertPlayer, CoreError, RodioPlayer};

use std::path::PathBuf;

/// WHAT: A missing sound file is reported as SoundUnavailable
/// WHY: The file is opened before any audio device is touched
#[test]
fn given_missing_file_when_playing_then_sound_unavailable_error() {
    // Given: A player and a path that does not exist
    let mut player = RodioPlayer::new();
    let missing = PathBuf::from("/nonexistent/alert.aiff");

    // When: Playing it
    let result = player.play_looped(&missing);

    // Then: Returns SoundUnavailable and stopping stays harmless
    assert!(matches!(result, Err(CoreError::SoundUnavailable { .. })));
    player.stop();
}

/// WHAT: A real sound loops on the default output until stopped
/// WHY: Completion alerts must be audible on actual hardware
#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
#[allow(clippy::unwrap_used)]
fn given_real_sound_when_playing_then_starts_and_stops() {
    // Given: A short sound from the system sounds directory
    let path = std::env::var("TEST_SOUND_PATH")
        .unwrap_or_else(|_| "/System/Library/Sounds/Glass.aiff".to_string());
    let mut player = RodioPlayer::new();

    // When: Playing twice in a row, then stopping
    player.play_looped(path.as_ref()).unwrap();
    std::thread::sleep(std::time::Duration::from_millis(300));
    player.play_looped(path.as_ref()).unwrap();
    std::thread::sleep(std::time::Duration::from_millis(300));

    // Then: Stop completes without error
    player.stop();
}
