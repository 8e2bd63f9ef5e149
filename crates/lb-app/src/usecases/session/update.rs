use std::sync::Arc;

use lb_core::ports::{NotifierPort, ProfileStorePort, StorageIoError};
use lb_core::profile::{ProfileRecord, PROFILE_KEY};

/// Use case for saving profile edits.
///
/// Overwrites the stored record and reports the save to the user. The
/// success alert is not conditioned on the write result; local-storage
/// failures stay log-only for the caller to record.
pub struct UpdateProfile {
    store: Arc<dyn ProfileStorePort>,
    notifier: Arc<dyn NotifierPort>,
}

impl UpdateProfile {
    /// Create a new UpdateProfile use case from trait objects.
    pub fn new(store: Arc<dyn ProfileStorePort>, notifier: Arc<dyn NotifierPort>) -> Self {
        Self { store, notifier }
    }

    /// Create a new UpdateProfile use case from cloned Arc<dyn Port> references.
    pub fn from_ports(store: Arc<dyn ProfileStorePort>, notifier: Arc<dyn NotifierPort>) -> Self {
        Self::new(store, notifier)
    }

    pub async fn execute(&self, record: &ProfileRecord) -> Result<(), StorageIoError> {
        let result = match serde_json::to_string(record) {
            Ok(json) => self.store.set(PROFILE_KEY, &json).await,
            Err(e) => Err(StorageIoError::from(e)),
        };

        // Fires unconditionally, write outcome included.
        self.notifier
            .alert("Success", "Successfully saved changes!")
            .await;

        result
    }
}
