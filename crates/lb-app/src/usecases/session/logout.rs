use std::sync::Arc;

use lb_core::ports::{ProfileStorePort, StorageIoError};

/// Use case for logging out.
///
/// Clears the entire store, not just the profile key.
pub struct Logout {
    store: Arc<dyn ProfileStorePort>,
}

impl Logout {
    /// Create a new Logout use case from trait objects.
    pub fn new(store: Arc<dyn ProfileStorePort>) -> Self {
        Self { store }
    }

    /// Create a new Logout use case from cloned Arc<dyn Port> references.
    pub fn from_ports(store: Arc<dyn ProfileStorePort>) -> Self {
        Self::new(store)
    }

    pub async fn execute(&self) -> Result<(), StorageIoError> {
        self.store.clear().await
    }
}
