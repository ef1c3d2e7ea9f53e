/// Reasons a launch request is turned down. The messages are shown verbatim
/// in the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LaunchRejection {
    #[error("Please select a packaged .exe first.")]
    MissingExecutable,
    #[error("Selected .exe does not exist.")]
    ExecutableNotFound,
    #[error("Select at least one trace channel.")]
    NoChannelsSelected,
    #[error("Failed to launch build. Check executable path.")]
    LaunchFailed,
}
