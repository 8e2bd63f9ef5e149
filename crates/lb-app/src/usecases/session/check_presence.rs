use std::sync::Arc;

use lb_core::ports::{ProfileStorePort, StorageIoError};

/// Use case for the startup presence probe.
///
/// Any stored value under the profile key counts as present, decodable or
/// not; the gate only needs presence.
pub struct CheckProfilePresence {
    store: Arc<dyn ProfileStorePort>,
}

impl CheckProfilePresence {
    /// Create a new CheckProfilePresence use case from trait objects.
    pub fn new(store: Arc<dyn ProfileStorePort>) -> Self {
        Self { store }
    }

    /// Create a new CheckProfilePresence use case from cloned Arc<dyn Port> references.
    pub fn from_ports(store: Arc<dyn ProfileStorePort>) -> Self {
        Self::new(store)
    }

    pub async fn execute(&self) -> Result<bool, StorageIoError> {
        self.store.profile_present().await
    }
}
