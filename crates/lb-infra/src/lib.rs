//! Infrastructure adapters for Lobby.
//!
//! File-backed storage, platform paths, configuration loading, and the
//! console notifier.

pub mod config;
pub mod fs;
pub mod kv;
pub mod notify;

pub use kv::FileProfileStore;
pub use notify::ConsoleNotifier;
