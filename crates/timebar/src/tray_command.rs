use crate::TrayView;

/// Commands sent from the async runtime to the main UI thread.
///
/// The main thread owns `TrayManager` (because `TrayIcon` is `!Send`),
/// so all tray mutations and process lifecycle events flow through this enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrayCommand {
    /// Redraw icon, title, tooltip and menu affordances.
    Render(TrayView),
    /// Show a transient hint in the tooltip.
    Hint(String),
    /// Move the sound check mark to this catalog index.
    CheckSound(usize),
    /// Shut down the application. The main thread will exit the event loop.
    Shutdown,
}
