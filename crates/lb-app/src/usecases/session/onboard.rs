use std::sync::Arc;

use lb_core::ports::{ProfileStorePort, StorageIoError};
use lb_core::profile::{ProfileRecord, PROFILE_KEY};

/// Use case for persisting the profile assembled by the wizard.
pub struct OnboardProfile {
    store: Arc<dyn ProfileStorePort>,
}

impl OnboardProfile {
    /// Create a new OnboardProfile use case from trait objects.
    pub fn new(store: Arc<dyn ProfileStorePort>) -> Self {
        Self { store }
    }

    /// Create a new OnboardProfile use case from cloned Arc<dyn Port> references.
    pub fn from_ports(store: Arc<dyn ProfileStorePort>) -> Self {
        Self::new(store)
    }

    /// Serialize the record and write it under the profile key.
    pub async fn execute(&self, record: &ProfileRecord) -> Result<(), StorageIoError> {
        let json = serde_json::to_string(record)?;
        self.store.set(PROFILE_KEY, &json).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    struct MockProfileStore {
        map: Mutex<HashMap<String, String>>,
    }

    #[async_trait::async_trait]
    impl ProfileStorePort for MockProfileStore {
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
    async fn execute_writes_the_serialized_record() {
        let store = Arc::new(MockProfileStore {
            map: Mutex::new(HashMap::new()),
        });
        let use_case = OnboardProfile::new(store.clone());

        let record = ProfileRecord::new("Ana", "Silva", "ana@example.com");
        use_case.execute(&record).await.unwrap();

        let stored = store.get(PROFILE_KEY).await.unwrap().unwrap();
        let decoded: ProfileRecord = serde_json::from_str(&stored).unwrap();
        assert_eq!(decoded, record);
    }
}
