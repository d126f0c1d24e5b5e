//! JSON document store
//!
//! The whole dataset lives in one JSON file. Writes are serialized through a
//! single lock owned by the store and land via write-then-rename, so a reader
//! always sees the last completed write.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::error::{StoreError, StoreResult};
use crate::models::Document;

/// Store configuration
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Path of the JSON document
    pub path: PathBuf,
}

impl StoreConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// Handle to the JSON document; clones share the same write lock
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl JsonStore {
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            path: config.path.clone(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the document, creating an empty one if the file does not exist
    pub async fn load(&self) -> StoreResult<Document> {
        if let Some(doc) = self.read().await? {
            return Ok(doc);
        }

        let _guard = self.write_lock.lock().await;
        self.read_or_init().await
    }

    /// Overwrite the document
    pub async fn save(&self, doc: &Document) -> StoreResult<()> {
        let _guard = self.write_lock.lock().await;
        self.write(doc).await
    }

    /// Run a read-modify-write cycle under the write lock.
    ///
    /// The document is written back only if `mutate` succeeds.
    pub async fn update<T, E, F>(&self, mutate: F) -> Result<T, E>
    where
        F: FnOnce(&mut Document) -> Result<T, E>,
        E: From<StoreError>,
    {
        let _guard = self.write_lock.lock().await;
        let mut doc = self.read_or_init().await?;
        let value = mutate(&mut doc)?;
        self.write(&doc).await?;
        Ok(value)
    }

    async fn read(&self) -> StoreResult<Option<Document>> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let doc = serde_json::from_str(&raw).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })?;
        debug!("Loaded document from {}", self.path.display());
        Ok(Some(doc))
    }

    async fn read_or_init(&self) -> StoreResult<Document> {
        match self.read().await? {
            Some(doc) => Ok(doc),
            None => {
                info!("Initializing empty document at {}", self.path.display());
                let doc = Document::default();
                self.write(&doc).await?;
                Ok(doc)
            }
        }
    }

    async fn write(&self, doc: &Document) -> StoreResult<()> {
        let json = serde_json::to_string_pretty(doc).map_err(StoreError::Serialization)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        let tmp = self.tmp_path();
        fs::write(&tmp, json).await?;
        fs::rename(&tmp, &self.path).await?;
        debug!("Wrote document to {}", self.path.display());
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
