//! Timebar: a single countdown timer living in the status bar.

mod app;
mod app_command;
mod config;
mod error;
mod menu_bindings;
mod sound_dirs;
mod tray_command;
mod tray_manager;
mod tray_presenter;
mod tray_sink;
mod tray_view;

pub(crate) use {
    app::App,
    app_command::AppCommand,
    error::{AppError, Result as AppResult},
    menu_bindings::MenuBindings,
    tray_command::TrayCommand,
    tray_manager::TrayManager,
    tray_presenter::TrayPresenter,
    tray_sink::TraySink,
    tray_view::TrayView,
};

use crate::config::Config;

use tao::{
    event::Event,
    event_loop::{ControlFlow, EventLoopBuilder},
};
use timebar_core::SoundCatalog;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

/// Application entry point.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("timebar=debug,timebar_core=debug")),
        )
        .init();

    let event_loop = EventLoopBuilder::<TrayCommand>::with_user_event().build();
    let tray_proxy = event_loop.create_proxy();

    // Created on Init: the tray must be built after the event loop starts
    // on macOS, and TrayIcon is !Send so it never leaves this thread.
    let mut tray_manager: Option<TrayManager> = None;

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::UserEvent(cmd) => {
                let Some(tray) = tray_manager.as_mut() else {
                    return;
                };
                let result = match cmd {
                    TrayCommand::Render(view) => tray.render(&view),
                    TrayCommand::Hint(text) => tray.hint(&text),
                    TrayCommand::CheckSound(index) => {
                        tray.check_sound(index);
                        Ok(())
                    }
                    TrayCommand::Shutdown => {
                        *control_flow = ControlFlow::ExitWithCode(0);
                        Ok(())
                    }
                };
                if let Err(e) = result {
                    error!(error = ?e, "Failed to update tray icon");
                }
            }
            Event::NewEvents(tao::event::StartCause::Init) => {
                let config = match Config::load() {
                    Ok(c) => c,
                    Err(e) => {
                        warn!(error = ?e, "Failed to load config, using defaults");
                        Config::default()
                    }
                };

                let sounds_dir = match config.sounds_dir() {
                    Ok(dir) => dir,
                    Err(e) => {
                        error!("Failed to resolve sounds directory: {:?}", e);
                        std::process::exit(1);
                    }
                };
                let catalog = SoundCatalog::scan(&sounds_dir, &sound_dirs::system_sounds_dir());

                let selected_index = config
                    .sound
                    .selected
                    .as_deref()
                    .and_then(|label| catalog.position(label))
                    .unwrap_or(0);

                let (manager, bindings) =
                    match TrayManager::new(&config.timer, &catalog, selected_index) {
                        Ok(pair) => pair,
                        Err(e) => {
                            error!("Failed to create TrayManager: {:?}", e);
                            std::process::exit(1);
                        }
                    };
                tray_manager = Some(manager);

                #[cfg(target_os = "macos")]
                unsafe {
                    use core_foundation::runloop::{CFRunLoopGetMain, CFRunLoopWakeUp};
                    CFRunLoopWakeUp(CFRunLoopGetMain());
                }

                let tray_proxy = tray_proxy.clone();

                // Tokio runtime on a separate thread owns the engine and the
                // audio output. TrayManager stays on the main thread.
                std::thread::spawn(move || {
                    let rt = match tokio::runtime::Runtime::new() {
                        Ok(rt) => rt,
                        Err(e) => {
                            error!("Failed to create tokio runtime: {:?}", e);
                            std::process::exit(1);
                        }
                    };

                    rt.block_on(async {
                        let app = App::new(config, catalog, bindings, tray_proxy, sounds_dir);
                        app.run().await;
                    });
                });
            }
            _ => {}
        }
    });
}
