use uetraces_core::ChannelSelection;

use crate::domain::{AppState, Phase, Status};

use super::events::DomainEvent;

pub fn reduce(mut state: AppState, ev: DomainEvent) -> AppState {
    match ev {
        DomainEvent::InitialStateLoaded { last_exe_path } => {
            state.exe_path = last_exe_path;
            state.channels = ChannelSelection::defaults();
            state.status = Status::Waiting;
            state.phase = Phase::Ready;
        }

        DomainEvent::PhaseChanged(phase) => state.phase = phase,

        DomainEvent::ExecutablePathEdited(path) => state.exe_path = path,

        DomainEvent::ExecutableSelected(path) => {
            state.exe_path = path;
            state.status = Status::ExecutableSelected;
        }

        DomainEvent::ChannelToggled { id, enabled } => {
            state.channels.set(id, enabled);
        }

        DomainEvent::LaunchRejected(reason) => {
            state.status = Status::Rejected(reason);
            state.phase = Phase::Ready;
        }

        DomainEvent::LaunchSucceeded => {
            state.status = Status::Launched;
            state.phase = Phase::Ready;
        }

        DomainEvent::CloseRequested => state.phase = Phase::Closing,
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LaunchRejection;
    use uetraces_core::ChannelId;

    #[test]
    fn initial_load_resets_form_to_defaults() {
        let mut dirty = AppState::default();
        dirty.channels = ChannelSelection::none();
        dirty.status = Status::Launched;

        let state = reduce(
            dirty,
            DomainEvent::InitialStateLoaded {
                last_exe_path: r"C:\g.exe".into(),
            },
        );

        assert_eq!(state.phase, Phase::Ready);
        assert_eq!(state.exe_path, r"C:\g.exe");
        assert_eq!(state.channels, ChannelSelection::defaults());
        assert_eq!(state.status, Status::Waiting);
    }

    #[test]
    fn rejection_replaces_previous_status_and_returns_to_ready() {
        let mut state = AppState::default();
        state.phase = Phase::Launching;
        state.status = Status::Launched;

        let state = reduce(
            state,
            DomainEvent::LaunchRejected(LaunchRejection::NoChannelsSelected),
        );
        assert_eq!(
            state.status,
            Status::Rejected(LaunchRejection::NoChannelsSelected)
        );
        assert_eq!(state.phase, Phase::Ready);
    }

    #[test]
    fn toggling_a_channel_touches_only_that_channel() {
        let state = reduce(
            AppState::default(),
            DomainEvent::ChannelToggled {
                id: ChannelId(2001),
                enabled: false,
            },
        );
        assert!(!state.channels.is_enabled(ChannelId(2001)));
        assert!(state.channels.is_enabled(ChannelId(2002)));
        assert_eq!(state.channels.selected().count(), 5);
    }

    #[test]
    fn editing_the_path_keeps_status() {
        let mut state = AppState::default();
        state.status = Status::ExecutableSelected;
        let state = reduce(state, DomainEvent::ExecutablePathEdited("x".into()));
        assert_eq!(state.exe_path, "x");
        assert_eq!(state.status, Status::ExecutableSelected);
    }
}
