//! Route resolution.
//!
//! Maps session state to the screen stack the rendering collaborator
//! should mount. Purely derived, never stored.

use serde::{Deserialize, Serialize};

use crate::session::state::SessionState;

/// Named navigation destinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    Onboarding,
    Home,
    Profile,
}

/// The screen stack active for a given session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StackSet {
    /// Startup read still in flight; nothing gated may render.
    Splash,
    /// The one-time data collection flow.
    Onboarding,
    /// The authenticated pair.
    Main,
}

impl StackSet {
    pub fn for_state(state: &SessionState) -> Self {
        if state.is_loading {
            StackSet::Splash
        } else if state.is_onboarding_completed {
            StackSet::Main
        } else {
            StackSet::Onboarding
        }
    }

    /// Screens mounted for this stack set.
    pub fn screens(&self) -> &'static [Screen] {
        match self {
            StackSet::Splash => &[],
            StackSet::Onboarding => &[Screen::Onboarding],
            StackSet::Main => &[Screen::Home, Screen::Profile],
        }
    }
}
