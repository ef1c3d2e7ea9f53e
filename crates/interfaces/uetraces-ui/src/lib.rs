mod app;
mod components;
mod dialogs;
mod picker;
mod theme;
mod utils;

use thiserror::Error;
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use uetraces_app_core::TracesRecorderApplication;
use uetraces_config::{APP_TITLE, WINDOW_SIZE};
use uetraces_infra::instance::{self, InstanceError, InstanceLock};

pub use picker::NativeFilePicker;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Instance(#[from] InstanceError),
    #[error("failed to open the main window: {0}")]
    Window(#[from] eframe::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The window was closed normally.
    Closed,
    /// Another launcher already runs; nothing was opened.
    AlreadyRunning,
}

pub fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// Takes the single-instance lock, shows the main window and blocks until it
/// is closed. The lock is released on return.
pub fn run() -> Result<RunOutcome, StartupError> {
    let _guard = match instance::acquire_default()? {
        InstanceLock::Acquired(guard) => {
            tracing::info!(lock = guard.name(), "Single-instance lock acquired");
            guard
        }
        InstanceLock::AlreadyRunning => {
            dialogs::show_already_running();
            return Ok(RunOutcome::AlreadyRunning);
        }
    };

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size(WINDOW_SIZE)
            .with_resizable(false)
            .with_maximize_button(false)
            .with_title(APP_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(|cc| {
            theme::setup(&cc.egui_ctx);

            let mut core = TracesRecorderApplication::new();
            core.load_initial_state();

            Ok(Box::new(app::TracesRecorderUiApp::new(core)))
        }),
    )?;

    tracing::info!("Main window closed");
    Ok(RunOutcome::Closed)
}
