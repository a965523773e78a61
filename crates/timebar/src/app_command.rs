/// Commands sent from the tray menu to the application loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    /// Start a countdown of the given length.
    Start {
        /// Duration in seconds. Zero is rejected by the engine.
        seconds: u64,
    },
    /// Freeze the running countdown.
    Pause,
    /// Continue a paused countdown.
    Resume,
    /// Cancel the countdown and silence the alert.
    Stop,
    /// Start again with the previous duration.
    Restart,
    /// Choose the alert sound at this catalog index.
    SelectSound {
        /// Index into the sound catalog (0 = No Sound).
        index: usize,
    },
    /// Reveal the sounds directory in the file manager.
    OpenSoundsFolder,
    /// Open the configuration file.
    OpenSettings,
    /// Request application shutdown.
    Shutdown,
}
