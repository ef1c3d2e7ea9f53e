use std::path::{Path, PathBuf};

use uetraces_core::{build_channel_argument, build_timestamp, build_trace_file_path, LaunchCommand};
use uetraces_infra::launcher::LaunchedProcess;

use crate::app_core::{reduce, AppCommand, DomainEvent};
use crate::domain::{AppState, Phase};
use crate::error::LaunchRejection;
use crate::launcher::LauncherImpl;
use crate::persistence::SettingsStore;
use crate::ports::{FilePicker, ProcessLauncher, SettingsRepo};

pub struct TracesRecorderApplication {
    pub state: AppState,

    settings: Box<dyn SettingsRepo>,
    launcher: Box<dyn ProcessLauncher>,

    /// Where trace files are placed.
    launcher_dir: PathBuf,
}

impl Default for TracesRecorderApplication {
    fn default() -> Self {
        Self::new()
    }
}

impl TracesRecorderApplication {
    /// Application wired to the settings file and process launcher next to the
    /// running executable.
    pub fn new() -> Self {
        Self::with_ports(
            Box::new(SettingsStore::beside_executable()),
            Box::new(LauncherImpl::new()),
            uetraces_infra::platform::launcher_dir(),
        )
    }

    pub fn with_ports(
        settings: Box<dyn SettingsRepo>,
        launcher: Box<dyn ProcessLauncher>,
        launcher_dir: PathBuf,
    ) -> Self {
        Self {
            state: AppState::default(),
            settings,
            launcher,
            launcher_dir,
        }
    }

    fn apply(&mut self, ev: DomainEvent) {
        self.state = reduce(self.state.clone(), ev);
    }

    pub fn dispatch(&mut self, cmd: AppCommand) {
        tracing::debug!(?cmd, "Dispatching command");
        match cmd {
            AppCommand::LoadInitialState => self.load_initial_state(),
            AppCommand::SetExecutablePath(path) => {
                self.apply(DomainEvent::ExecutablePathEdited(path))
            }
            AppCommand::SetChannel { id, enabled } => {
                self.apply(DomainEvent::ChannelToggled { id, enabled })
            }
            AppCommand::Launch => {
                // The outcome is already recorded in `state.status`.
                self.launch().ok();
            }
            AppCommand::Close => self.request_close(),
        }
    }

    pub fn load_initial_state(&mut self) {
        let last_exe_path = self.settings.read_last_path();
        if !last_exe_path.is_empty() {
            tracing::info!(path = %last_exe_path, "Restored last executable");
        }
        self.apply(DomainEvent::InitialStateLoaded { last_exe_path });
    }

    /// Asks `picker` for an executable. Nothing changes when the user cancels;
    /// a chosen path is not persisted until it has been launched.
    pub fn browse(&mut self, picker: &dyn FilePicker) {
        self.apply(DomainEvent::PhaseChanged(Phase::Browsing));

        match picker.select_executable(&self.state.exe_path) {
            Some(path) => {
                tracing::debug!(%path, "Executable selected");
                self.apply(DomainEvent::ExecutableSelected(path));
            }
            None => tracing::debug!("Executable selection cancelled"),
        }

        self.apply(DomainEvent::PhaseChanged(Phase::Ready));
    }

    /// Validates the form, starts the build with tracing enabled and remembers
    /// the executable on success. Every outcome is reflected in `state.status`.
    pub fn launch(&mut self) -> Result<LaunchedProcess, LaunchRejection> {
        self.apply(DomainEvent::PhaseChanged(Phase::Launching));

        match self.try_launch() {
            Ok(process) => {
                if let Err(e) = self.settings.write_last_path(&self.state.exe_path) {
                    tracing::warn!("Could not save executable path: {e:#}");
                }
                self.apply(DomainEvent::LaunchSucceeded);
                Ok(process)
            }
            Err(reason) => {
                tracing::info!(%reason, "Launch rejected");
                self.apply(DomainEvent::LaunchRejected(reason));
                Err(reason)
            }
        }
    }

    fn try_launch(&self) -> Result<LaunchedProcess, LaunchRejection> {
        let command = self.build_launch_command()?;
        let command_line = command.command_line();

        self.launcher.launch(&command_line).map_err(|e| {
            tracing::warn!(%command_line, "Failed to launch build: {e}");
            LaunchRejection::LaunchFailed
        })
    }

    /// Runs the pre-launch checks in order and builds the command for the
    /// current form contents.
    pub fn build_launch_command(&self) -> Result<LaunchCommand, LaunchRejection> {
        let exe_path = &self.state.exe_path;
        if exe_path.is_empty() {
            return Err(LaunchRejection::MissingExecutable);
        }

        if !Path::new(exe_path).exists() {
            return Err(LaunchRejection::ExecutableNotFound);
        }

        let channel_arg = build_channel_argument(&self.state.channels);
        if channel_arg.is_empty() {
            return Err(LaunchRejection::NoChannelsSelected);
        }

        let trace_file = build_trace_file_path(&self.launcher_dir, &build_timestamp());

        Ok(LaunchCommand::new(exe_path.clone(), channel_arg, trace_file))
    }

    pub fn request_close(&mut self) {
        tracing::debug!("Close requested");
        self.apply(DomainEvent::CloseRequested);
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.state.phase, Phase::Browsing | Phase::Launching)
    }
}
