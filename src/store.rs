//! Persistence of schema collections, scoped per owner.
//!
//! Stores are injected wherever collections are read or written, so callers
//! never share global state. `FileSchemaStore` keeps one JSON document per
//! owner under a directory; `MemorySchemaStore` backs tests.

use async_trait::async_trait;
use schemagen_core::{SchemaCollection, SchemaError};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::debug;

/// Error type for schema store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid schema: {0}")]
    Schema(#[from] SchemaError),

    /// Owner names become file names and must be plain identifiers
    #[error("Invalid owner '{0}': use letters, digits, '-', '_' or '.'")]
    InvalidOwner(String),

    #[error("Schema store lock poisoned")]
    Poisoned,
}

/// Owner-scoped storage for schema collections.
#[async_trait]
pub trait SchemaStore: Send + Sync {
    /// All collections of `owner`, in saved order. Unknown owners have none.
    async fn load(&self, owner: &str) -> Result<Vec<SchemaCollection>, StoreError>;

    /// Replace the collections of `owner`.
    async fn save(&self, owner: &str, collections: &[SchemaCollection]) -> Result<(), StoreError>;

    /// Find a collection by id, falling back to its name.
    async fn get(
        &self,
        owner: &str,
        id_or_name: &str,
    ) -> Result<Option<SchemaCollection>, StoreError> {
        let collections = self.load(owner).await?;
        let found = collections
            .iter()
            .position(|c| c.id == id_or_name)
            .or_else(|| collections.iter().position(|c| c.name == id_or_name));
        Ok(found.map(|index| collections[index].clone()))
    }

    /// Insert `collection`, replacing any stored collection with the same
    /// id. A collection without an id is given one. Returns the stored id.
    async fn upsert(
        &self,
        owner: &str,
        mut collection: SchemaCollection,
    ) -> Result<String, StoreError> {
        collection.validate()?;
        if collection.id.is_empty() {
            collection.id = uuid::Uuid::new_v4().to_string();
        }

        let mut collections = self.load(owner).await?;
        let id = collection.id.clone();
        match collections.iter_mut().find(|c| c.id == id) {
            Some(existing) => *existing = collection,
            None => collections.push(collection),
        }
        self.save(owner, &collections).await?;
        Ok(id)
    }

    /// Remove the collection with `id`. Returns whether one was removed.
    async fn delete(&self, owner: &str, id: &str) -> Result<bool, StoreError> {
        let mut collections = self.load(owner).await?;
        let before = collections.len();
        collections.retain(|c| c.id != id);
        if collections.len() == before {
            return Ok(false);
        }
        self.save(owner, &collections).await?;
        Ok(true)
    }
}

/// Store that keeps collections in memory.
#[derive(Debug, Default)]
pub struct MemorySchemaStore {
    owners: Mutex<HashMap<String, Vec<SchemaCollection>>>,
}

impl MemorySchemaStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SchemaStore for MemorySchemaStore {
    async fn load(&self, owner: &str) -> Result<Vec<SchemaCollection>, StoreError> {
        let owners = self.owners.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(owners.get(owner).cloned().unwrap_or_default())
    }

    async fn save(&self, owner: &str, collections: &[SchemaCollection]) -> Result<(), StoreError> {
        let mut owners = self.owners.lock().map_err(|_| StoreError::Poisoned)?;
        owners.insert(owner.to_string(), collections.to_vec());
        Ok(())
    }
}

/// Store that keeps each owner's collections in `<dir>/<owner>.json`.
#[derive(Debug, Clone)]
pub struct FileSchemaStore {
    dir: PathBuf,
}

impl FileSchemaStore {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn owner_path(&self, owner: &str) -> Result<PathBuf, StoreError> {
        let valid = !owner.is_empty()
            && !owner.starts_with('.')
            && owner
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
        if !valid {
            return Err(StoreError::InvalidOwner(owner.to_string()));
        }
        Ok(self.dir.join(format!("{owner}.json")))
    }
}

#[async_trait]
impl SchemaStore for FileSchemaStore {
    async fn load(&self, owner: &str) -> Result<Vec<SchemaCollection>, StoreError> {
        let path = self.owner_path(owner)?;
        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_str(&content)?)
    }

    async fn save(&self, owner: &str, collections: &[SchemaCollection]) -> Result<(), StoreError> {
        let path = self.owner_path(owner)?;
        tokio::fs::create_dir_all(&self.dir).await?;
        let content = serde_json::to_string_pretty(collections)?;
        tokio::fs::write(&path, content).await?;
        debug!(
            "Saved {} collections for '{}' to {}",
            collections.len(),
            owner,
            path.display()
        );
        Ok(())
    }
}
