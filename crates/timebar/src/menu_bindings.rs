use crate::AppCommand;

use std::collections::HashMap;

use tray_icon::menu::MenuId;

/// Maps tray menu item ids to the command each item issues.
///
/// Built on the UI thread alongside the menu, then moved to the app loop.
#[derive(Debug, Clone, Default)]
pub struct MenuBindings {
    commands: HashMap<MenuId, AppCommand>,
}

impl MenuBindings {
    /// Create an empty binding table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `id` to `command`, replacing any previous binding.
    pub fn bind(&mut self, id: MenuId, command: AppCommand) {
        self.commands.insert(id, command);
    }

    /// Command for a clicked menu item, if it is one of ours.
    pub fn command_for(&self, id: &MenuId) -> Option<AppCommand> {
        self.commands.get(id).copied()
    }
}
