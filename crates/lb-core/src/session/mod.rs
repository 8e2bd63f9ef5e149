//! Session domain module.
//!
//! Defines the app-level session state, the pure reducer that advances it,
//! and the route resolution mapping state to the active screen stack.

pub mod reducer;
pub mod route;
pub mod state;

pub use reducer::{SessionEvent, SessionReducer};
pub use route::{Screen, StackSet};
pub use state::SessionState;
