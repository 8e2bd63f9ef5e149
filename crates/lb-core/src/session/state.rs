use serde::{Deserialize, Serialize};

/// App-level session state.
///
/// Created once at process start and alive for the process lifetime.
/// `is_onboarding_completed` tracks the best-effort presence of a stored
/// profile record; storage failures may leave it ahead of the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// True until the startup store read has resolved.
    pub is_loading: bool,
    /// Whether a profile record is believed to exist in the store.
    pub is_onboarding_completed: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            is_loading: true,
            is_onboarding_completed: false,
        }
    }
}
