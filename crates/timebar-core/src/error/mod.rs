use error_location::ErrorLocation;
use thiserror::Error;

/// Alert playback errors with source location tracking.
///
/// None of these are surfaced to the user. The alert controller logs them
/// and finishes the countdown silently.
#[derive(Error, Debug)]
pub enum CoreError {
    /// No audio output device could be opened.
    #[error("Audio output unavailable: {reason} {location}")]
    AudioOutput {
        /// Description of the output failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Sound file could not be opened.
    #[error("Sound not available at path: {path:?} {location}")]
    SoundUnavailable {
        /// Path to the missing or unreadable sound.
        path: std::path::PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Sound file could not be decoded.
    #[error("Failed to decode sound {path:?}: {reason} {location}")]
    SoundDecode {
        /// Path to the undecodable sound.
        path: std::path::PathBuf,
        /// Decoder message.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

/// Result type alias using [`CoreError`].
pub type Result<T> = std::result::Result<T, CoreError>;
