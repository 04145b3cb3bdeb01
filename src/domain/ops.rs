use crate::domain::board::Board;
use crate::domain::column::ColumnId;
use crate::domain::task::{Task, TaskId, TaskKey};
use crate::error::{FlowboardError, Result};

/// Result of a successful create: the next board plus the task it added
#[derive(Debug, Clone, PartialEq)]
pub struct CreateOutcome {
    pub board: Board,
    pub task: Task,
}

impl CreateOutcome {
    /// Transient notice the presentation layer flashes after the create
    pub fn confirmation(&self) -> String {
        format!("Created item {}", self.task.key)
    }
}

/// Result of a successful delete: the next board plus the retired key
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteOutcome {
    pub board: Board,
    pub key: TaskKey,
}

impl DeleteOutcome {
    /// Transient notice the presentation layer flashes after the delete
    pub fn confirmation(&self) -> String {
        format!("Deleted {}", self.key)
    }
}

/// Creates a task from committed inline input, appended to the end of the
/// target column.
///
/// Whitespace-only content is a validation failure: the input board is left
/// untouched and the caller simply discards the pending entry. On success
/// the new task gets a fresh id/key pair from the board counter, the default
/// priority, and a placeholder assignee derived from the id.
pub fn create_task(board: &Board, column_id: &ColumnId, content: &str) -> Result<CreateOutcome> {
    let content = content.trim();
    if content.is_empty() {
        return Err(FlowboardError::EmptyContent);
    }
    board.column(column_id)?;

    let mut next = board.clone();
    let (id, key) = next.allocate_identity();
    let task = Task::new(id.clone(), key, content.to_string());
    if let Some(column) = next.columns.get_mut(column_id) {
        column.task_ids.push(id.clone());
    }
    next.tasks.insert(id, task.clone());
    Ok(CreateOutcome { board: next, task })
}

/// Removes a task from the board and from its column in one step.
///
/// The task must currently be a member of the named column; anything else is
/// a contract violation and leaves the input board untouched. The sequence
/// counter is not decremented, so retired ids and keys are never reissued.
pub fn delete_task(board: &Board, task_id: &TaskId, column_id: &ColumnId) -> Result<DeleteOutcome> {
    let column = board.column(column_id)?;
    let position = column
        .position(task_id)
        .ok_or_else(|| FlowboardError::TaskNotInColumn {
            task: task_id.to_string(),
            column: column_id.to_string(),
        })?;
    let key = board.task(task_id)?.key.clone();

    let mut next = board.clone();
    if let Some(column) = next.columns.get_mut(column_id) {
        column.task_ids.remove(position);
    }
    next.tasks.remove(task_id);
    Ok(DeleteOutcome { board: next, key })
}
