use crate::TrayCommand;

use tao::event_loop::EventLoopProxy;
use tracing::debug;

/// Destination for tray updates produced off the UI thread.
pub trait TraySink: Send {
    /// Deliver a command to the tray. Delivery after shutdown is dropped.
    fn send(&self, command: TrayCommand);
}

impl TraySink for EventLoopProxy<TrayCommand> {
    fn send(&self, command: TrayCommand) {
        if self.send_event(command).is_err() {
            debug!("Tray event loop closed, dropping update");
        }
    }
}

impl TraySink for std::sync::mpsc::Sender<TrayCommand> {
    fn send(&self, command: TrayCommand) {
        if std::sync::mpsc::Sender::send(self, command).is_err() {
            debug!("Tray receiver dropped, dropping update");
        }
    }
}
