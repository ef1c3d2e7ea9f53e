#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use uetraces_config::STARTUP_FAILURE_EXIT_CODE;
use uetraces_ui::RunOutcome;

fn main() {
    uetraces_ui::setup_logging();

    match uetraces_ui::run() {
        Ok(RunOutcome::Closed) => {}
        Ok(RunOutcome::AlreadyRunning) => {
            tracing::info!("Another instance is running; exiting");
        }
        Err(err) => {
            tracing::error!("Startup failed: {err}");
            eprintln!("UE Traces Recorder failed: {err}");
            std::process::exit(STARTUP_FAILURE_EXIT_CODE);
        }
    }
}
