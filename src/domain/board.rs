use crate::domain::column::{Column, ColumnId};
use crate::domain::task::{Priority, Task, TaskId, TaskKey};
use crate::error::{FlowboardError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Static identity of one column within the board configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub id: ColumnId,
    pub title: String,
}

impl ColumnSpec {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: ColumnId::new(id),
            title: title.into(),
        }
    }
}

/// Board configuration: display name, key prefix, fixed column set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub name: String,
    /// Prefix for human-facing task keys (e.g., WEB for WEB-3)
    pub key_prefix: String,
    pub columns: Vec<ColumnSpec>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            name: "WEB Board".to_string(),
            key_prefix: "WEB".to_string(),
            columns: vec![
                ColumnSpec::new("todo", "To Do"),
                ColumnSpec::new("in-progress", "In Progress"),
                ColumnSpec::new("done", "Done"),
            ],
        }
    }
}

/// Kanban board state
///
/// The whole aggregate is one value: operations take it by reference and
/// return a new board, so a failed operation leaves the caller's board
/// untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub config: BoardConfig,
    pub tasks: HashMap<TaskId, Task>,
    pub columns: HashMap<ColumnId, Column>,
    /// Left-to-right layout order, a permutation of the column map's keys
    pub column_order: Vec<ColumnId>,
    /// Seeds both task ids and task keys; strictly increasing, never reused
    pub next_sequence: u32,
}

impl Board {
    /// Builds an empty board from a configuration
    pub fn new(config: BoardConfig) -> Self {
        let mut columns = HashMap::new();
        let mut column_order = Vec::new();
        for spec in &config.columns {
            column_order.push(spec.id.clone());
            columns.insert(
                spec.id.clone(),
                Column::new(spec.id.clone(), spec.title.clone()),
            );
        }
        Self {
            config,
            tasks: HashMap::new(),
            columns,
            column_order,
            next_sequence: 1,
        }
    }

    pub fn column(&self, id: &ColumnId) -> Result<&Column> {
        self.columns
            .get(id)
            .ok_or_else(|| FlowboardError::ColumnNotFound(id.to_string()))
    }

    pub fn task(&self, id: &TaskId) -> Result<&Task> {
        self.tasks
            .get(id)
            .ok_or_else(|| FlowboardError::TaskNotFound(id.to_string()))
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Columns in their left-to-right layout order
    pub fn columns_in_order(&self) -> impl Iterator<Item = &Column> {
        self.column_order.iter().filter_map(|id| self.columns.get(id))
    }

    /// Allocates the next id/key pair and advances the counter
    pub(crate) fn allocate_identity(&mut self) -> (TaskId, TaskKey) {
        let id = TaskId::new(self.next_sequence);
        let key = TaskKey::new(&self.config.key_prefix, self.next_sequence);
        self.next_sequence += 1;
        (id, key)
    }

    /// Checks the board's structural invariants, reporting the first
    /// violation found. Persisted snapshots are validated with this before
    /// being trusted.
    pub fn validate(&self) -> Result<()> {
        let ordered: HashSet<&ColumnId> = self.column_order.iter().collect();
        if ordered.len() != self.column_order.len() {
            return Err(FlowboardError::InvariantViolation(
                "duplicate column id in column_order".to_string(),
            ));
        }
        if ordered.len() != self.columns.len()
            || !self.columns.keys().all(|id| ordered.contains(id))
        {
            return Err(FlowboardError::InvariantViolation(
                "column_order does not match the column set".to_string(),
            ));
        }

        let mut seen: HashSet<&TaskId> = HashSet::new();
        for column in self.columns.values() {
            for id in &column.task_ids {
                if !self.tasks.contains_key(id) {
                    return Err(FlowboardError::InvariantViolation(format!(
                        "column {} references unknown task {}",
                        column.id, id
                    )));
                }
                if !seen.insert(id) {
                    return Err(FlowboardError::InvariantViolation(format!(
                        "task {} appears in more than one position",
                        id
                    )));
                }
            }
        }
        if seen.len() != self.tasks.len() {
            return Err(FlowboardError::InvariantViolation(
                "task map contains entries not referenced by any column".to_string(),
            ));
        }

        for task in self.tasks.values() {
            if task.id.sequence() >= self.next_sequence
                || task.key.sequence() >= self.next_sequence
            {
                return Err(FlowboardError::InvariantViolation(format!(
                    "next_sequence {} does not exceed allocated {}",
                    self.next_sequence, task.id
                )));
            }
        }

        let keys: HashSet<&str> = self.tasks.values().map(|t| t.key.as_str()).collect();
        if keys.len() != self.tasks.len() {
            return Err(FlowboardError::InvariantViolation(
                "task keys are not unique".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}

/// The seeded board a fresh install starts from, used whenever the
/// persistence adapter has nothing usable to load
pub fn starter_board() -> Board {
    let mut board = Board::default();
    let seeds = [
        ("Design the board layout", Priority::High),
        ("Wire up the drag handles", Priority::Medium),
    ];
    let todo = ColumnId::from("todo");
    for (content, priority) in seeds {
        let (id, key) = board.allocate_identity();
        let mut task = Task::new(id.clone(), key, content.to_string());
        task.priority = priority;
        if let Some(column) = board.columns.get_mut(&todo) {
            column.task_ids.push(id.clone());
        }
        board.tasks.insert(id, task);
    }
    board
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_creation() {
        let board = Board::default();
        assert_eq!(board.next_sequence, 1);
        assert_eq!(board.task_count(), 0);
        assert_eq!(board.column_order.len(), 3);
        board.validate().unwrap();
    }

    #[test]
    fn test_columns_in_order_follows_layout() {
        let board = Board::default();
        let ids: Vec<&str> = board.columns_in_order().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["todo", "in-progress", "done"]);
    }

    #[test]
    fn test_allocate_identity_advances_counter() {
        let mut board = Board::default();

        let (id1, key1) = board.allocate_identity();
        assert_eq!(id1.as_str(), "task-1");
        assert_eq!(key1.as_str(), "WEB-1");

        let (id2, key2) = board.allocate_identity();
        assert_eq!(id2.as_str(), "task-2");
        assert_eq!(key2.as_str(), "WEB-2");
        assert_eq!(board.next_sequence, 3);
    }

    #[test]
    fn test_starter_board_is_valid() {
        let board = starter_board();
        board.validate().unwrap();

        assert_eq!(board.task_count(), 2);
        assert_eq!(board.next_sequence, 3);

        let todo = board.column(&ColumnId::from("todo")).unwrap();
        assert_eq!(todo.len(), 2);
        assert_eq!(todo.task_ids[0].as_str(), "task-1");

        let first = board.task(&TaskId::new(1)).unwrap();
        assert_eq!(first.priority, Priority::High);
        assert_eq!(first.key.as_str(), "WEB-1");
    }

    #[test]
    fn test_validate_rejects_unknown_task_reference() {
        let mut board = Board::default();
        if let Some(column) = board.columns.get_mut(&ColumnId::from("todo")) {
            column.task_ids.push(TaskId::new(1));
        }
        assert!(board.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_orphan_task() {
        let mut board = Board::default();
        let (id, key) = board.allocate_identity();
        let task = Task::new(id.clone(), key, "Orphan".to_string());
        board.tasks.insert(id, task);
        assert!(board.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_duplicate_membership() {
        let mut board = starter_board();
        if let Some(column) = board.columns.get_mut(&ColumnId::from("done")) {
            column.task_ids.push(TaskId::new(1));
        }
        assert!(board.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_stale_sequence() {
        let mut board = starter_board();
        board.next_sequence = 2;
        assert!(board.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_column_order_mismatch() {
        let mut board = Board::default();
        board.column_order.pop();
        assert!(board.validate().is_err());
    }

    #[test]
    fn test_board_serialization_round_trip() {
        let board = starter_board();
        let json = serde_json::to_string(&board).unwrap();
        let deserialized: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, board);
    }
}
