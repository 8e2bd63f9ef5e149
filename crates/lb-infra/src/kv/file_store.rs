//! File-based profile store
//!
//! Implements the string-keyed store as a JSON object map persisted in a
//! single file under the application data directory. A missing or empty
//! file is an empty store; clearing removes the file.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tokio::fs;
use tracing::debug;

use lb_core::ports::{ProfileStorePort, StorageIoError};

pub const DEFAULT_STORE_FILE: &str = "profile_store.json";

pub struct FileProfileStore {
    store_file_path: PathBuf,
}

impl FileProfileStore {
    /// Create a store with a custom file path
    pub fn new(store_file_path: PathBuf) -> Self {
        Self { store_file_path }
    }

    /// Create a store with base dir and filename
    pub fn with_base_dir(base_dir: PathBuf, filename: impl Into<String>) -> Self {
        Self {
            store_file_path: base_dir.join(filename.into()),
        }
    }

    /// Create a store with defaults
    pub fn with_defaults(base_dir: PathBuf) -> Self {
        Self {
            store_file_path: base_dir.join(DEFAULT_STORE_FILE),
        }
    }

    async fn read_map(&self) -> Result<BTreeMap<String, String>, StorageIoError> {
        let content = match fs::read_to_string(&self.store_file_path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => {
                return Err(StorageIoError::Backend(format!(
                    "read {} failed: {e}",
                    self.store_file_path.display()
                )))
            }
        };

        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        Ok(serde_json::from_str(&content)?)
    }

    async fn write_map(&self, map: &BTreeMap<String, String>) -> Result<(), StorageIoError> {
        if let Some(parent) = self.store_file_path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                StorageIoError::Backend(format!("create store dir failed: {e}"))
            })?;
        }

        let json = serde_json::to_string_pretty(map)?;

        // Temp-write then rename so the file is never observed half-written.
        let tmp_path = self.store_file_path.with_extension("json.tmp");
        fs::write(&tmp_path, &json).await.map_err(|e| {
            StorageIoError::Backend(format!("write temp store failed: {e}"))
        })?;
        fs::rename(&tmp_path, &self.store_file_path)
            .await
            .map_err(|e| StorageIoError::Backend(format!("rename temp store failed: {e}")))?;

        Ok(())
    }
}

#[async_trait]
impl ProfileStorePort for FileProfileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageIoError> {
        let mut map = self.read_map().await?;
        Ok(map.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageIoError> {
        let mut map = self.read_map().await?;
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map).await?;
        debug!(key, "profile store write");
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageIoError> {
        match fs::remove_file(&self.store_file_path).await {
            Ok(()) => {
                debug!("profile store cleared");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageIoError::Backend(format!(
                "remove store file failed: {e}"
            ))),
        }
    }
}
