use crate::domain::task::TaskId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier for a workflow column (e.g., todo, in-progress)
///
/// The column set is fixed at board creation; these ids are configuration,
/// not user data.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnId(String);

impl ColumnId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ColumnId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named, ordered bucket of task identities
///
/// `task_ids` holds references into the board's task map; position in the
/// vector is the user-visible vertical position. A task id lives in at most
/// one column at a time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    pub task_ids: Vec<TaskId>,
}

impl Column {
    pub fn new(id: ColumnId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            task_ids: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.task_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.task_ids.is_empty()
    }

    pub fn contains(&self, id: &TaskId) -> bool {
        self.task_ids.contains(id)
    }

    /// Position of a task within the column, if present
    pub fn position(&self, id: &TaskId) -> Option<usize> {
        self.task_ids.iter().position(|t| t == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_membership() {
        let mut column = Column::new(ColumnId::from("todo"), "To Do");
        assert!(column.is_empty());

        column.task_ids.push(TaskId::new(1));
        column.task_ids.push(TaskId::new(2));

        assert_eq!(column.len(), 2);
        assert!(column.contains(&TaskId::new(2)));
        assert_eq!(column.position(&TaskId::new(2)), Some(1));
        assert_eq!(column.position(&TaskId::new(3)), None);
    }
}
