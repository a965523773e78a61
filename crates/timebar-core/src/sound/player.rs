use crate::{CoreError, CoreResult};

use std::{fs::File, io::BufReader, panic::Location, path::Path};

use error_location::ErrorLocation;
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};
use tracing::{debug, info, instrument};

/// Exclusive audio output used for the completion alert.
pub trait AlertPlayer {
    /// Stop anything playing, then loop `path` until [`AlertPlayer::stop`].
    fn play_looped(&mut self, path: &Path) -> CoreResult<()>;

    /// Stop playback. Does nothing when silent.
    fn stop(&mut self);
}

/// [`AlertPlayer`] on the default output device.
///
/// The output stream is opened on first use and kept for the process
/// lifetime. `OutputStream` is `!Send`, so the player must stay on the
/// thread that created it.
#[derive(Default)]
pub struct RodioPlayer {
    output: Option<(OutputStream, OutputStreamHandle)>,
    sink: Option<Sink>,
}

impl RodioPlayer {
    /// Create a player without touching the audio device yet.
    pub fn new() -> Self {
        Self::default()
    }

    #[track_caller]
    fn handle(&mut self) -> CoreResult<&OutputStreamHandle> {
        if self.output.is_none() {
            let output = OutputStream::try_default().map_err(|e| CoreError::AudioOutput {
                reason: format!("Failed to open default output: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;
            info!("Audio output opened");
            self.output = Some(output);
        }

        match &self.output {
            Some((_, handle)) => Ok(handle),
            None => Err(CoreError::AudioOutput {
                reason: "Output stream missing after open".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl AlertPlayer for RodioPlayer {
    #[track_caller]
    #[instrument(skip(self))]
    fn play_looped(&mut self, path: &Path) -> CoreResult<()> {
        self.stop();

        let file = File::open(path).map_err(|e| CoreError::SoundUnavailable {
            path: path.to_path_buf(),
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })?;

        let source = Decoder::new(BufReader::new(file)).map_err(|e| CoreError::SoundDecode {
            path: path.to_path_buf(),
            reason: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let sink = Sink::try_new(self.handle()?).map_err(|e| CoreError::AudioOutput {
            reason: format!("Failed to create sink: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        sink.append(source.repeat_infinite());
        self.sink = Some(sink);

        debug!(path = ?path, "Alert playback started");

        Ok(())
    }

    fn stop(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
            debug!("Alert playback stopped");
        }
    }
}
