//! Profile store port
//!
//! The persistent profile store is an opaque async string-keyed store.
//! Implementations are provided by the infrastructure layer (e.g.
//! file-based storage). Every operation returns an explicit result; the
//! fail-open policy lives with the caller, not here.

use async_trait::async_trait;
use thiserror::Error;

use crate::profile::PROFILE_KEY;

/// The single kind of storage failure callers can observe.
#[derive(Debug, Error)]
pub enum StorageIoError {
    /// Reading, writing, or clearing the backing store failed.
    #[error("storage backend failure: {0}")]
    Backend(String),

    /// A stored blob could not be decoded.
    #[error("stored record could not be decoded: {0}")]
    Codec(#[from] serde_json::Error),
}

#[async_trait]
pub trait ProfileStorePort: Send + Sync {
    /// Get the value stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageIoError>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageIoError>;

    /// Clear the entire store, every key included.
    async fn clear(&self) -> Result<(), StorageIoError>;

    /// Check whether a profile record is present. Presence only; the
    /// stored value is not decoded.
    async fn profile_present(&self) -> Result<bool, StorageIoError> {
        Ok(self.get(PROFILE_KEY).await?.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    struct MapStore {
        map: Mutex<HashMap<String, String>>,
    }

    #[async_trait]
    impl ProfileStorePort for MapStore {
        async fn get(&self, key: &str) -> Result<Option<String>, StorageIoError> {
            Ok(self.map.lock().unwrap().get(key).cloned())
        }

        async fn set(&self, key: &str, value: &str) -> Result<(), StorageIoError> {
            self.map
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }

        async fn clear(&self) -> Result<(), StorageIoError> {
            self.map.lock().unwrap().clear();
            Ok(())
        }
    }

    #[tokio::test]
    async fn profile_present_reflects_the_profile_key() {
        let store = MapStore {
            map: Mutex::new(HashMap::new()),
        };
        assert!(!store.profile_present().await.unwrap());

        store.set(PROFILE_KEY, "{}").await.unwrap();
        assert!(store.profile_present().await.unwrap());

        store.clear().await.unwrap();
        assert!(!store.profile_present().await.unwrap());
    }

    #[tokio::test]
    async fn presence_does_not_require_a_decodable_value() {
        let store = MapStore {
            map: Mutex::new(HashMap::new()),
        };
        store.set(PROFILE_KEY, "not json at all").await.unwrap();
        assert!(store.profile_present().await.unwrap());
    }
}
