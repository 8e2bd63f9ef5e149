pub mod file_store;

pub use file_store::{FileProfileStore, DEFAULT_STORE_FILE};
