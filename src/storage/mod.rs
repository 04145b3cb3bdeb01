use crate::{domain::board::Board, error::Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[cfg(feature = "file-storage")]
pub mod file_storage;
pub mod memory_storage;

/// Version stamped into every persisted snapshot
pub const SNAPSHOT_VERSION: u32 = 2;

/// Envelope around the persisted board.
///
/// Loads go through `decode`, which rejects undecodable blobs, foreign
/// versions, and boards that fail invariant validation instead of trusting
/// whatever the blob store handed back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub version: u32,
    pub board: Board,
}

impl Snapshot {
    pub fn new(board: &Board) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            board: board.clone(),
        }
    }

    /// Decodes a snapshot blob, degrading to `None` on any mismatch
    pub fn decode(blob: &str) -> Option<Board> {
        let snapshot: Snapshot = match serde_json::from_str(blob) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                tracing::warn!(error = %err, "discarding undecodable board snapshot");
                return None;
            }
        };
        if snapshot.version != SNAPSHOT_VERSION {
            tracing::warn!(
                found = snapshot.version,
                expected = SNAPSHOT_VERSION,
                "discarding board snapshot with mismatched version"
            );
            return None;
        }
        if let Err(err) = snapshot.board.validate() {
            tracing::warn!(error = %err, "discarding board snapshot that fails validation");
            return None;
        }
        Some(snapshot.board)
    }

    /// Encodes a board into the versioned blob form
    pub fn encode(board: &Board) -> Result<String> {
        Ok(serde_json::to_string_pretty(&Self::new(board))?)
    }
}

/// Storage trait for persisting the board as one opaque blob
#[async_trait]
pub trait Storage: Send + Sync {
    /// Loads the previously persisted board; `None` when nothing usable is
    /// stored, in which case the caller substitutes a built-in default
    async fn load_board(&self) -> Result<Option<Board>>;

    /// Snapshots the full board state
    async fn save_board(&self, board: &Board) -> Result<()>;
}

#[async_trait]
impl<S: Storage + ?Sized> Storage for std::sync::Arc<S> {
    async fn load_board(&self) -> Result<Option<Board>> {
        (**self).load_board().await
    }

    async fn save_board(&self, board: &Board) -> Result<()> {
        (**self).save_board(board).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::board::starter_board;

    #[test]
    fn test_snapshot_round_trip() {
        let board = starter_board();
        let blob = Snapshot::encode(&board).unwrap();
        let loaded = Snapshot::decode(&blob).unwrap();
        assert_eq!(loaded, board);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(Snapshot::decode("not json").is_none());
        assert!(Snapshot::decode("{}").is_none());
    }

    #[test]
    fn test_decode_rejects_foreign_version() {
        let board = starter_board();
        let blob = serde_json::to_string(&Snapshot {
            version: SNAPSHOT_VERSION + 1,
            board,
        })
        .unwrap();
        assert!(Snapshot::decode(&blob).is_none());
    }

    #[test]
    fn test_decode_rejects_invalid_board() {
        let mut board = starter_board();
        board.next_sequence = 1; // stale counter, fails validation
        let blob = serde_json::to_string(&Snapshot {
            version: SNAPSHOT_VERSION,
            board,
        })
        .unwrap();
        assert!(Snapshot::decode(&blob).is_none());
    }
}
