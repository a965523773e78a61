//! System tray icon with state-based updates.
//!
//! Shows the countdown as the status-bar title, swaps the icon per timer
//! state, and owns the context menu. Menu items are enabled from the timer
//! state alone.

use crate::{AppCommand, AppError, AppResult, MenuBindings, TrayView, config::TimerConfig};

use std::panic::Location;

use error_location::ErrorLocation;
use timebar_core::{SoundCatalog, TimerState, format};
use tracing::{debug, info, instrument};
use tray_icon::menu::{CheckMenuItem, Menu, MenuItem, PredefinedMenuItem, Submenu};
use tray_icon::{Icon, TrayIcon, TrayIconBuilder};

const READY_TOOLTIP: &str = "Timebar - Ready";

/// System tray icon manager.
pub struct TrayManager {
    tray_icon: TrayIcon,
    start_items: Vec<MenuItem>,
    pause_item: MenuItem,
    resume_item: MenuItem,
    stop_item: MenuItem,
    restart_item: MenuItem,
    sound_items: Vec<CheckMenuItem>,
}

#[track_caller]
fn tray_error(what: &str, e: impl std::fmt::Display) -> AppError {
    AppError::TrayError {
        reason: format!("Failed to {}: {}", what, e),
        location: ErrorLocation::from(Location::caller()),
    }
}

impl TrayManager {
    /// Create the tray icon and its menu, returning the menu bindings for
    /// the app loop.
    #[track_caller]
    #[instrument(skip(timer, catalog))]
    pub fn new(
        timer: &TimerConfig,
        catalog: &SoundCatalog,
        selected_sound: usize,
    ) -> AppResult<(Self, MenuBindings)> {
        let menu = Menu::new();
        let mut bindings = MenuBindings::new();

        let duration = timer.duration_secs();
        let start_item = MenuItem::new(format!("Start ({})", format(duration as i64)), true, None);
        bindings.bind(
            start_item.id().clone(),
            AppCommand::Start { seconds: duration },
        );
        menu.append(&start_item)
            .map_err(|e| tray_error("add start menu", e))?;

        let mut start_items = vec![start_item];

        if !timer.presets_minutes.is_empty() {
            let presets = Submenu::new("Start Preset", true);
            for minutes in &timer.presets_minutes {
                let item = MenuItem::new(format!("{} min", minutes), true, None);
                bindings.bind(
                    item.id().clone(),
                    AppCommand::Start {
                        seconds: minutes * 60,
                    },
                );
                presets
                    .append(&item)
                    .map_err(|e| tray_error("add preset menu", e))?;
                start_items.push(item);
            }
            menu.append(&presets)
                .map_err(|e| tray_error("add presets submenu", e))?;
        }

        let pause_item = MenuItem::new("Pause", false, None);
        let resume_item = MenuItem::new("Resume", false, None);
        let stop_item = MenuItem::new("Stop", false, None);
        let restart_item = MenuItem::new("Restart", false, None);

        for (item, command) in [
            (&pause_item, AppCommand::Pause),
            (&resume_item, AppCommand::Resume),
            (&stop_item, AppCommand::Stop),
            (&restart_item, AppCommand::Restart),
        ] {
            bindings.bind(item.id().clone(), command);
            menu.append(item)
                .map_err(|e| tray_error("add timer menu", e))?;
        }

        menu.append(&PredefinedMenuItem::separator())
            .map_err(|e| tray_error("add separator", e))?;

        let sound_menu = Submenu::new("Sound", true);
        let mut sound_items = Vec::with_capacity(catalog.options().len());
        for (index, option) in catalog.options().iter().enumerate() {
            let item = CheckMenuItem::new(&option.label, true, index == selected_sound, None);
            bindings.bind(item.id().clone(), AppCommand::SelectSound { index });
            sound_menu
                .append(&item)
                .map_err(|e| tray_error("add sound menu", e))?;
            sound_items.push(item);
        }

        let open_sounds_item = MenuItem::new("Open Sounds Folder", true, None);
        bindings.bind(open_sounds_item.id().clone(), AppCommand::OpenSoundsFolder);
        sound_menu
            .append(&PredefinedMenuItem::separator())
            .map_err(|e| tray_error("add separator", e))?;
        sound_menu
            .append(&open_sounds_item)
            .map_err(|e| tray_error("add open sounds menu", e))?;
        menu.append(&sound_menu)
            .map_err(|e| tray_error("add sound submenu", e))?;

        let settings_item = MenuItem::new("Settings", true, None);
        let quit_item = MenuItem::new("Quit", true, None);
        bindings.bind(settings_item.id().clone(), AppCommand::OpenSettings);
        bindings.bind(quit_item.id().clone(), AppCommand::Shutdown);

        menu.append(&settings_item)
            .map_err(|e| tray_error("add settings menu", e))?;
        menu.append(&quit_item)
            .map_err(|e| tray_error("add quit menu", e))?;

        let icon = Self::load_icon(TimerState::Idle)?;

        let tray_icon = TrayIconBuilder::new()
            .with_tooltip(READY_TOOLTIP)
            .with_menu(Box::new(menu))
            .with_icon(icon)
            .build()
            .map_err(|e| tray_error("create tray icon", e))?;

        info!(sound_count = sound_items.len(), "System tray icon initialized");

        Ok((
            Self {
                tray_icon,
                start_items,
                pause_item,
                resume_item,
                stop_item,
                restart_item,
                sound_items,
            },
            bindings,
        ))
    }

    /// Apply a timer view: icon, title, tooltip and menu affordances.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn render(&mut self, view: &TrayView) -> AppResult<()> {
        self.tray_icon
            .set_icon(Some(Self::load_icon(view.state)?))
            .map_err(|e| tray_error("update icon", e))?;

        self.tray_icon.set_title(Some(&view.title));

        self.tray_icon
            .set_tooltip(Some(&view.tooltip))
            .map_err(|e| tray_error("update tooltip", e))?;

        let affordances = view.affordances;
        for item in &self.start_items {
            item.set_enabled(affordances.start);
        }
        self.pause_item.set_enabled(affordances.pause);
        self.resume_item.set_enabled(affordances.resume);
        self.stop_item.set_enabled(affordances.stop);
        self.restart_item.set_enabled(affordances.restart);

        Ok(())
    }

    /// Show a hint in the tooltip until the next render.
    #[track_caller]
    pub fn hint(&mut self, text: &str) -> AppResult<()> {
        self.tray_icon
            .set_tooltip(Some(text))
            .map_err(|e| tray_error("show hint", e))
    }

    /// Check exactly the sound at `index`.
    pub fn check_sound(&mut self, index: usize) {
        for (i, item) in self.sound_items.iter().enumerate() {
            item.set_checked(i == index);
        }
        debug!(index, "Sound check mark moved");
    }

    /// Load icon from compile-time embedded PNG bytes.
    #[track_caller]
    fn load_icon(state: TimerState) -> AppResult<Icon> {
        let png_bytes: &[u8] = match state {
            TimerState::Idle => include_bytes!("../resources/icons/idle.png"),
            TimerState::Running => include_bytes!("../resources/icons/running.png"),
            TimerState::Paused => include_bytes!("../resources/icons/paused.png"),
            TimerState::Finished => include_bytes!("../resources/icons/finished.png"),
        };

        let img = image::load_from_memory(png_bytes)
            .map_err(|e| tray_error("decode embedded icon", e))?;

        let rgba = img.into_rgba8();
        let (width, height) = (rgba.width(), rgba.height());

        Icon::from_rgba(rgba.into_raw(), width, height)
            .map_err(|e| tray_error("create icon from RGBA", e))
    }
}
