use uetraces_infra::launcher::{LaunchError, LaunchedProcess};

pub trait SettingsRepo: Send + Sync + 'static {
    /// Last successfully launched executable, or an empty string.
    fn read_last_path(&self) -> String;
    fn write_last_path(&self, path: &str) -> anyhow::Result<()>;
}

pub trait ProcessLauncher: Send + Sync + 'static {
    fn launch(&self, command_line: &str) -> Result<LaunchedProcess, LaunchError>;
}

/// Implementations are built per call by the interface layer, which owns the
/// window the dialog is parented to.
pub trait FilePicker {
    /// `None` when the user cancels or the dialog cannot be shown.
    fn select_executable(&self, current_path: &str) -> Option<String>;
}
