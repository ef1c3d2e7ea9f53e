use uetraces_core::ChannelId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    // Boot
    LoadInitialState,

    // Form edits
    SetExecutablePath(String),
    SetChannel { id: ChannelId, enabled: bool },

    // Buttons; browsing goes through `TracesRecorderApplication::browse`,
    // which needs a picker bound to the window.
    Launch,

    // Window
    Close,
}
