use crate::{
    domain::board::Board,
    error::{FlowboardError, Result},
    storage::{Snapshot, Storage},
};
use async_trait::async_trait;
use std::sync::RwLock;

/// In-memory blob storage, mirroring a browser-style key-value store.
///
/// Used by tests and by embedders that want no filesystem footprint. The
/// optional quota makes a full store reproducible: saves past it fail the
/// way a quota-exceeded blob write would.
pub struct MemoryStorage {
    blob: RwLock<Option<String>>,
    quota: Option<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            blob: RwLock::new(None),
            quota: None,
        }
    }

    /// Caps the stored blob size in bytes
    pub fn with_quota(quota: usize) -> Self {
        Self {
            blob: RwLock::new(None),
            quota: Some(quota),
        }
    }

    /// Seeds the store with a raw blob, bypassing encoding
    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: RwLock::new(Some(blob.into())),
            quota: None,
        }
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn load_board(&self) -> Result<Option<Board>> {
        let guard = self
            .blob
            .read()
            .map_err(|_| FlowboardError::StorageError("storage lock poisoned".to_string()))?;
        Ok(guard.as_deref().and_then(Snapshot::decode))
    }

    async fn save_board(&self, board: &Board) -> Result<()> {
        let blob = Snapshot::encode(board)?;
        if let Some(quota) = self.quota {
            if blob.len() > quota {
                return Err(FlowboardError::StorageError(format!(
                    "blob of {} bytes exceeds quota of {} bytes",
                    blob.len(),
                    quota
                )));
            }
        }

        let mut guard = self
            .blob
            .write()
            .map_err(|_| FlowboardError::StorageError("storage lock poisoned".to_string()))?;
        *guard = Some(blob);
        Ok(())
    }
}
