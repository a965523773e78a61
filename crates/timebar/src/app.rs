use crate::{AppCommand, MenuBindings, TrayCommand, TrayPresenter, TraySink, config::Config};

use std::{fs, path::PathBuf};

use timebar_core::{AlertController, RodioPlayer, SoundCatalog, SystemClock, TimerEngine};
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument, warn};
use tray_icon::menu::MenuEvent;

/// Main application state.
///
/// Runs on the async runtime thread and owns the timer engine, its tick
/// schedule and the alert output. Menu events and ticks are both handled
/// by one `select!` loop, so engine calls never overlap. Tray updates
/// go back to the main thread through a [`TraySink`] because `TrayIcon` is
/// `!Send`.
pub struct App<S: TraySink + Clone + 'static> {
    engine: TimerEngine<SystemClock>,
    catalog: SoundCatalog,
    bindings: MenuBindings,
    tray: S,
    config: Config,
    sounds_dir: PathBuf,
}

impl<S: TraySink + Clone + 'static> App<S> {
    /// Build the engine and subscribe the presenter and alert controller.
    ///
    /// Must run on the thread that will drive [`App::run`]: the audio output
    /// is not `Send`.
    pub fn new(
        config: Config,
        catalog: SoundCatalog,
        bindings: MenuBindings,
        tray: S,
        sounds_dir: PathBuf,
    ) -> Self {
        let selected = config
            .sound
            .selected
            .as_deref()
            .and_then(|label| catalog.position(label))
            .and_then(|index| catalog.get(index))
            .and_then(|option| option.locator.clone());

        let mut engine = TimerEngine::new(SystemClock);
        engine.subscribe(Box::new(TrayPresenter::new(
            tray.clone(),
            config.alert.notification,
        )));
        engine.subscribe(Box::new(AlertController::new(RodioPlayer::new(), selected)));

        Self {
            engine,
            catalog,
            bindings,
            tray,
            config,
            sounds_dir,
        }
    }

    /// Run the main application event loop.
    #[instrument(skip(self))]
    pub async fn run(mut self) {
        info!("Timebar starting");

        // MenuEvent::receiver() is a blocking crossbeam receiver; forward it
        // from one blocking task. Dropping tray_event_rx ends the task on the
        // next event.
        let (tray_event_tx, mut tray_event_rx) = mpsc::channel(32);
        let tray_handle = tokio::task::spawn_blocking(move || {
            let receiver = MenuEvent::receiver();
            while let Ok(event) = receiver.recv() {
                if tray_event_tx.blocking_send(event).is_err() {
                    break;
                }
            }
        });

        loop {
            tokio::select! {
                event = tray_event_rx.recv() => {
                    let Some(event) = event else {
                        info!("Tray event channel closed, shutting down");
                        break;
                    };
                    match self.bindings.command_for(&event.id) {
                        Some(AppCommand::Shutdown) => {
                            info!("Exit requested from tray menu");
                            break;
                        }
                        Some(cmd) => self.handle_command(cmd),
                        None => debug!(id = ?event.id, "Unbound menu event"),
                    }
                }

                _ = self.engine.next_tick() => {
                    self.engine.tick();
                }
            }
        }

        self.engine.stop();
        drop(tray_event_rx);

        match tokio::time::timeout(std::time::Duration::from_secs(1), tray_handle).await {
            Ok(Ok(())) => info!("Tray event forwarder stopped cleanly"),
            Ok(Err(e)) => error!(error = ?e, "Tray event forwarder task panicked"),
            Err(_) => info!(
                "Tray event forwarder did not stop within timeout, \
                     will be cleaned up on exit"
            ),
        }

        self.tray.send(TrayCommand::Shutdown);
        info!("Timebar shut down successfully");
    }

    /// Apply one command to the engine or the surrounding app.
    #[instrument(skip(self))]
    pub(crate) fn handle_command(&mut self, cmd: AppCommand) {
        match cmd {
            AppCommand::Start { seconds } => self.engine.start(seconds),
            AppCommand::Pause => self.engine.pause(),
            AppCommand::Resume => self.engine.resume(),
            AppCommand::Stop => self.engine.stop(),
            AppCommand::Restart => self.engine.restart(),
            AppCommand::SelectSound { index } => self.select_sound(index),
            AppCommand::OpenSoundsFolder => self.open_sounds_folder(),
            AppCommand::OpenSettings => Self::open_settings(),
            AppCommand::Shutdown => {}
        }
    }

    fn select_sound(&mut self, index: usize) {
        let Some(option) = self.catalog.get(index) else {
            warn!(index, "Sound index out of range");
            return;
        };

        info!(label = %option.label, "Alert sound selected");

        self.engine.select_sound(option.locator.clone());
        self.tray.send(TrayCommand::CheckSound(index));

        self.config.sound.selected = option.locator.as_ref().map(|_| option.label.clone());
        if let Err(e) = self.config.save() {
            error!(error = ?e, "Failed to persist sound selection");
        }
    }

    fn open_sounds_folder(&self) {
        if let Err(e) = fs::create_dir_all(&self.sounds_dir) {
            warn!(dir = ?self.sounds_dir, error = %e, "Failed to create sounds folder");
        }
        if let Err(e) = open::that(&self.sounds_dir) {
            warn!(dir = ?self.sounds_dir, error = %e, "Failed to open sounds folder");
        }
    }

    fn open_settings() {
        match Config::config_path() {
            Ok(path) => {
                if let Err(e) = open::that(&path) {
                    warn!(path = ?path, error = %e, "Failed to open settings");
                } else {
                    info!("Opened settings file");
                }
            }
            Err(e) => error!(error = ?e, "Settings path unavailable"),
        }
    }
}
