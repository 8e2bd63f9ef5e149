//! Session reducer.
//!
//! A pure transition function: tagged event in, new state value out. The
//! coordinator in the application layer owns the single live state and is
//! the only dispatcher.

use serde::{Deserialize, Serialize};

use crate::session::state::SessionState;

/// Events that advance the session state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// The startup store read resolved.
    BootstrapCompleted { profile_present: bool },
    /// The onboarding wizard finished.
    OnboardingCompleted,
    /// The user logged out.
    LoggedOut,
}

/// Pure session state machine.
pub struct SessionReducer;

impl SessionReducer {
    pub fn transition(state: SessionState, event: SessionEvent) -> SessionState {
        match (state, event) {
            (_, SessionEvent::BootstrapCompleted { profile_present }) => SessionState {
                is_loading: false,
                is_onboarding_completed: profile_present,
            },
            (_, SessionEvent::OnboardingCompleted) => SessionState {
                is_loading: false,
                is_onboarding_completed: true,
            },
            (_, SessionEvent::LoggedOut) => SessionState {
                is_loading: false,
                is_onboarding_completed: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{SessionEvent, SessionReducer, SessionState};

    #[test]
    fn initial_state_is_loading_and_not_onboarded() {
        let state = SessionState::default();
        assert!(state.is_loading);
        assert!(!state.is_onboarding_completed);
    }

    #[test]
    fn bootstrap_with_profile_present_completes_onboarding() {
        let next = SessionReducer::transition(
            SessionState::default(),
            SessionEvent::BootstrapCompleted {
                profile_present: true,
            },
        );
        assert_eq!(
            next,
            SessionState {
                is_loading: false,
                is_onboarding_completed: true,
            }
        );
    }

    #[test]
    fn bootstrap_with_no_profile_gates_to_onboarding() {
        let next = SessionReducer::transition(
            SessionState::default(),
            SessionEvent::BootstrapCompleted {
                profile_present: false,
            },
        );
        assert_eq!(
            next,
            SessionState {
                is_loading: false,
                is_onboarding_completed: false,
            }
        );
    }

    #[test]
    fn onboarding_completed_opens_the_gate() {
        let loaded = SessionState {
            is_loading: false,
            is_onboarding_completed: false,
        };
        let next = SessionReducer::transition(loaded, SessionEvent::OnboardingCompleted);
        assert!(!next.is_loading);
        assert!(next.is_onboarding_completed);
    }

    #[test]
    fn logout_closes_the_gate() {
        let onboarded = SessionState {
            is_loading: false,
            is_onboarding_completed: true,
        };
        let next = SessionReducer::transition(onboarded, SessionEvent::LoggedOut);
        assert!(!next.is_loading);
        assert!(!next.is_onboarding_completed);
    }
}
