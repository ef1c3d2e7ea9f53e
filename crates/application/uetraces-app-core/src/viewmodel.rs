use uetraces_core::channels::default_channel_count;
use uetraces_core::{ChannelId, CHANNELS};

use crate::domain::{AppState, Status};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Neutral,
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct ChannelRowVm {
    pub id: ChannelId,
    pub label: &'static str,
    pub checked: bool,
}

#[derive(Debug, Clone)]
pub struct MainWindowVm {
    pub channels_heading: String,
    pub channels: Vec<ChannelRowVm>,
    pub status_text: String,
    pub status_tone: StatusTone,
}

pub fn main_window_vm(state: &AppState) -> MainWindowVm {
    let channels = CHANNELS
        .iter()
        .map(|c| ChannelRowVm {
            id: c.id,
            label: c.display_name,
            checked: state.channels.is_enabled(c.id),
        })
        .collect();

    let status_tone = match state.status {
        Status::Launched => StatusTone::Success,
        Status::Rejected(_) => StatusTone::Error,
        Status::Waiting | Status::ExecutableSelected => StatusTone::Neutral,
    };

    MainWindowVm {
        channels_heading: format!(
            "Trace channels ({} default selected):",
            default_channel_count()
        ),
        channels,
        status_text: state.status.to_string(),
        status_tone,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LaunchRejection;

    #[test]
    fn heading_and_rows_follow_registry() {
        let vm = main_window_vm(&AppState::default());
        assert_eq!(vm.channels_heading, "Trace channels (6 default selected):");
        assert_eq!(vm.channels.len(), 25);
        assert_eq!(vm.channels[0].label, "CPU");
        assert!(vm.channels[0].checked);
        assert_eq!(vm.channels[24].label, "RDG");
        assert!(!vm.channels[24].checked);
        assert_eq!(vm.status_text, "Status: waiting");
        assert_eq!(vm.status_tone, StatusTone::Neutral);
    }

    #[test]
    fn rejected_status_is_an_error_tone() {
        let state = AppState {
            status: Status::Rejected(LaunchRejection::ExecutableNotFound),
            ..Default::default()
        };
        let vm = main_window_vm(&state);
        assert_eq!(vm.status_text, "Selected .exe does not exist.");
        assert_eq!(vm.status_tone, StatusTone::Error);
    }
}
