use std::fmt;

use uetraces_core::ChannelSelection;

use crate::error::LaunchRejection;

pub const STATUS_WAITING: &str = "Status: waiting";
pub const STATUS_EXECUTABLE_SELECTED: &str = "Executable selected.";
pub const STATUS_LAUNCHED: &str =
    "Launch successful. Trace will be written near UETracesRecorder.exe";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Uninitialized,
    Ready,
    Browsing,
    Launching,
    Closing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Waiting,
    ExecutableSelected,
    Launched,
    Rejected(LaunchRejection),
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Waiting => f.write_str(STATUS_WAITING),
            Status::ExecutableSelected => f.write_str(STATUS_EXECUTABLE_SELECTED),
            Status::Launched => f.write_str(STATUS_LAUNCHED),
            Status::Rejected(reason) => write!(f, "{reason}"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub phase: Phase,
    /// Contents of the executable path field.
    pub exe_path: String,
    pub channels: ChannelSelection,
    pub status: Status,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            phase: Phase::Uninitialized,
            exe_path: String::new(),
            channels: ChannelSelection::defaults(),
            status: Status::Waiting,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_texts_are_exact() {
        assert_eq!(Status::Waiting.to_string(), "Status: waiting");
        assert_eq!(Status::ExecutableSelected.to_string(), "Executable selected.");
        assert_eq!(
            Status::Launched.to_string(),
            "Launch successful. Trace will be written near UETracesRecorder.exe"
        );
        assert_eq!(
            Status::Rejected(LaunchRejection::MissingExecutable).to_string(),
            "Please select a packaged .exe first."
        );
        assert_eq!(
            Status::Rejected(LaunchRejection::ExecutableNotFound).to_string(),
            "Selected .exe does not exist."
        );
        assert_eq!(
            Status::Rejected(LaunchRejection::NoChannelsSelected).to_string(),
            "Select at least one trace channel."
        );
        assert_eq!(
            Status::Rejected(LaunchRejection::LaunchFailed).to_string(),
            "Failed to launch build. Check executable path."
        );
    }
}
