use crate::domain::board::Board;
use crate::domain::column::ColumnId;
use crate::error::{FlowboardError, Result};
use serde::{Deserialize, Serialize};

/// A completed drag gesture: one task, one source slot, one destination slot
///
/// For a same-column move the destination index is measured on the sequence
/// after the source removal, which is what a single drop gesture reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveInstruction {
    pub source_column: ColumnId,
    pub source_index: usize,
    pub dest_column: ColumnId,
    pub dest_index: usize,
}

impl MoveInstruction {
    pub fn new(
        source_column: ColumnId,
        source_index: usize,
        dest_column: ColumnId,
        dest_index: usize,
    ) -> Self {
        Self {
            source_column,
            source_index,
            dest_column,
            dest_index,
        }
    }
}

/// Computes the board that results from relocating one task.
///
/// Dropping a task back onto its own slot returns a board equal to the
/// input, so callers can skip the snapshot and the re-render. Only column
/// membership changes; the task map is carried over untouched.
pub fn move_task(board: &Board, mv: &MoveInstruction) -> Result<Board> {
    if mv.source_column == mv.dest_column && mv.source_index == mv.dest_index {
        return Ok(board.clone());
    }

    // Validate both ends against the input before cloning anything, so an
    // invalid instruction can never leave a half-moved board behind.
    let source_len = board.column(&mv.source_column)?.len();
    if mv.source_index >= source_len {
        return Err(FlowboardError::IndexOutOfRange {
            column: mv.source_column.to_string(),
            index: mv.source_index,
            len: source_len,
        });
    }
    let dest_len = if mv.source_column == mv.dest_column {
        source_len - 1
    } else {
        board.column(&mv.dest_column)?.len()
    };
    if mv.dest_index > dest_len {
        return Err(FlowboardError::IndexOutOfRange {
            column: mv.dest_column.to_string(),
            index: mv.dest_index,
            len: dest_len,
        });
    }

    let mut next = board.clone();
    let moved = next
        .columns
        .get_mut(&mv.source_column)
        .map(|column| column.task_ids.remove(mv.source_index))
        .ok_or_else(|| FlowboardError::ColumnNotFound(mv.source_column.to_string()))?;
    next.columns
        .get_mut(&mv.dest_column)
        .map(|column| column.task_ids.insert(mv.dest_index, moved))
        .ok_or_else(|| FlowboardError::ColumnNotFound(mv.dest_column.to_string()))?;
    Ok(next)
}
