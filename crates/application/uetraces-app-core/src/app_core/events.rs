use uetraces_core::ChannelId;

use crate::domain::Phase;
use crate::error::LaunchRejection;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainEvent {
    // Boot
    InitialStateLoaded { last_exe_path: String },

    PhaseChanged(Phase),

    // Form
    ExecutablePathEdited(String),
    ExecutableSelected(String),
    ChannelToggled { id: ChannelId, enabled: bool },

    // Launch outcome
    LaunchRejected(LaunchRejection),
    LaunchSucceeded,

    CloseRequested,
}
