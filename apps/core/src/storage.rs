//! Object-storage boundary for résumé, cover-letter and profile-photo
//! uploads. A blob goes in under a path; a retrievable URL comes back.
//! Entirely outside the matching logic.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use bytes::Bytes;
use tracing::info;

use crate::errors::CoreError;

#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Stores `data` under `path` and returns a URL it can be fetched from.
    async fn put(&self, path: &str, data: Bytes) -> Result<String, CoreError>;

    async fn get(&self, url: &str) -> Result<Bytes, CoreError>;
}

/// In-memory implementation for embedding and tests. URLs use a `mem://`
/// scheme over the original path.
#[derive(Clone, Default)]
pub struct MemoryObjectStorage {
    blobs: Arc<RwLock<HashMap<String, Bytes>>>,
}

impl MemoryObjectStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ObjectStorage for MemoryObjectStorage {
    async fn put(&self, path: &str, data: Bytes) -> Result<String, CoreError> {
        let url = format!("mem://{path}");
        info!(path, bytes = data.len(), "stored blob");
        self.blobs
            .write()
            .expect("blob lock")
            .insert(url.clone(), data);
        Ok(url)
    }

    async fn get(&self, url: &str) -> Result<Bytes, CoreError> {
        self.blobs
            .read()
            .expect("blob lock")
            .get(url)
            .cloned()
            .ok_or_else(|| CoreError::NotFound(format!("blob {url}")))
    }
}
