use std::sync::Arc;

use lb_core::ports::{ProfileStorePort, StorageIoError};
use lb_core::profile::{ProfileRecord, PROFILE_KEY};

/// Use case for loading the stored profile record for the profile screen.
pub struct LoadProfile {
    store: Arc<dyn ProfileStorePort>,
}

impl LoadProfile {
    /// Create a new LoadProfile use case from trait objects.
    pub fn new(store: Arc<dyn ProfileStorePort>) -> Self {
        Self { store }
    }

    /// Create a new LoadProfile use case from cloned Arc<dyn Port> references.
    pub fn from_ports(store: Arc<dyn ProfileStorePort>) -> Self {
        Self::new(store)
    }

    pub async fn execute(&self) -> Result<Option<ProfileRecord>, StorageIoError> {
        match self.store.get(PROFILE_KEY).await? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }
}
