use uetraces_infra::launcher::{LaunchError, LaunchedProcess, Launcher};

use crate::ports::ProcessLauncher;

pub struct LauncherImpl;

impl Default for LauncherImpl {
    fn default() -> Self {
        Self::new()
    }
}

impl LauncherImpl {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessLauncher for LauncherImpl {
    fn launch(&self, command_line: &str) -> Result<LaunchedProcess, LaunchError> {
        Launcher::new(command_line.to_string()).launch()
    }
}
