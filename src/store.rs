use crate::domain::board::Board;
use crate::domain::column::ColumnId;
use crate::domain::ops::{create_task, delete_task};
use crate::domain::reorder::{move_task, MoveInstruction};
use crate::domain::task::TaskId;
use crate::error::Result;
use crate::storage::Storage;
use serde::{Deserialize, Serialize};

/// A single board mutation, as emitted by the presentation layer
///
/// One instruction corresponds to one completed user gesture: a finished
/// drag, a committed inline entry, or an explicit delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Instruction {
    Move(MoveInstruction),
    Create { column_id: ColumnId, content: String },
    Delete { task_id: TaskId, column_id: ColumnId },
}

/// What an applied instruction produced, for the presentation layer
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Outcome {
    /// False when the instruction was the identity move; callers skip the
    /// re-render and the snapshot in that case
    pub changed: bool,
    /// Transient confirmation to flash, when the operation produces one
    pub notice: Option<String>,
    /// Set when the follow-up snapshot failed; the in-memory board is still
    /// authoritative and usable
    pub persistence_warning: Option<String>,
}

/// Owns the current board value and applies whole-board replacements.
///
/// Each instruction either fully succeeds, swapping in a new board, or
/// fails leaving the held board exactly as it was.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardStore {
    board: Board,
}

impl BoardStore {
    pub fn new(board: Board) -> Self {
        Self { board }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Applies one instruction against the current board
    pub fn apply(&mut self, instruction: &Instruction) -> Result<Outcome> {
        match instruction {
            Instruction::Move(mv) => {
                let next = move_task(&self.board, mv)?;
                let changed = next != self.board;
                self.board = next;
                Ok(Outcome {
                    changed,
                    ..Outcome::default()
                })
            }
            Instruction::Create { column_id, content } => {
                let outcome = create_task(&self.board, column_id, content)?;
                let notice = outcome.confirmation();
                self.board = outcome.board;
                Ok(Outcome {
                    changed: true,
                    notice: Some(notice),
                    persistence_warning: None,
                })
            }
            Instruction::Delete { task_id, column_id } => {
                let outcome = delete_task(&self.board, task_id, column_id)?;
                let notice = outcome.confirmation();
                self.board = outcome.board;
                Ok(Outcome {
                    changed: true,
                    notice: Some(notice),
                    persistence_warning: None,
                })
            }
        }
    }
}

/// A board store wired to a persistence adapter.
///
/// Every state change is followed by a snapshot. A failed snapshot never
/// rolls back the in-memory board; it is reported on the outcome as a
/// non-fatal warning.
pub struct Session<S> {
    store: BoardStore,
    storage: S,
}

impl<S: Storage> Session<S> {
    /// Loads the persisted board, substituting the fallback when the
    /// adapter has nothing usable
    pub async fn load_or_default(storage: S, fallback: Board) -> Result<Self> {
        let board = storage.load_board().await?.unwrap_or(fallback);
        Ok(Self {
            store: BoardStore::new(board),
            storage,
        })
    }

    pub fn board(&self) -> &Board {
        self.store.board()
    }

    pub async fn apply(&mut self, instruction: &Instruction) -> Result<Outcome> {
        let mut outcome = self.store.apply(instruction)?;
        if outcome.changed {
            if let Err(err) = self.storage.save_board(self.store.board()).await {
                tracing::warn!(error = %err, "board snapshot failed; keeping in-memory state");
                outcome.persistence_warning = Some(err.to_string());
            }
        }
        Ok(outcome)
    }
}
