use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Unique identifier for a task (e.g., task-1, task-42)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    const PREFIX: &'static str = "task-";

    /// Creates a new TaskId from a sequence counter
    pub fn new(sequence: u32) -> Self {
        Self(format!("{}{}", Self::PREFIX, sequence))
    }

    /// Returns the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The sequence number the id was allocated from
    pub fn sequence(&self) -> u32 {
        // Suffix is numeric by construction and by FromStr validation
        self.0[Self::PREFIX.len()..].parse().unwrap_or(0)
    }
}

impl FromStr for TaskId {
    type Err = crate::error::FlowboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.strip_prefix(Self::PREFIX) {
            Some(rest) if rest.parse::<u32>().is_ok() => Ok(Self(s.to_string())),
            _ => Err(crate::error::FlowboardError::InvalidTaskId(s.to_string())),
        }
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Human-facing sequential label for a task (e.g., WEB-3)
///
/// Keys share the sequence counter with ids, are unique per board, and are
/// never reassigned once allocated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskKey(String);

impl TaskKey {
    /// Creates a new TaskKey from a board prefix and a sequence counter
    pub fn new(prefix: &str, sequence: u32) -> Self {
        Self(format!("{}-{}", prefix, sequence))
    }

    /// Returns the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The sequence number the key was allocated from
    pub fn sequence(&self) -> u32 {
        self.0
            .rsplit('-')
            .next()
            .and_then(|suffix| suffix.parse().ok())
            .unwrap_or(0)
    }
}

impl FromStr for TaskKey {
    type Err = crate::error::FlowboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.rsplit_once('-') {
            Some((prefix, suffix)) if !prefix.is_empty() && suffix.parse::<u32>().is_ok() => {
                Ok(Self(s.to_string()))
            }
            _ => Err(crate::error::FlowboardError::InvalidTaskKey(s.to_string())),
        }
    }
}

impl fmt::Display for TaskKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Priority of a task, shown on its card
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::High => write!(f, "High"),
            Self::Medium => write!(f, "Medium"),
            Self::Low => write!(f, "Low"),
        }
    }
}

/// Opaque locator for the assignee's presentation resource (avatar)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Assignee(String);

impl Assignee {
    const AVATAR_BASE: &'static str = "https://api.dicebear.com/7.x/avataaars/svg?seed=";

    /// Deterministic placeholder avatar derived from the task id
    pub fn placeholder_for(id: &TaskId) -> Self {
        Self(format!("{}{}", Self::AVATAR_BASE, id.as_str()))
    }

    pub fn new(locator: impl Into<String>) -> Self {
        Self(locator.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A single work item on the board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub key: TaskKey,
    pub content: String,
    pub priority: Priority,
    pub assignee: Assignee,
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a task with the default priority and a placeholder assignee
    pub fn new(id: TaskId, key: TaskKey, content: String) -> Self {
        let assignee = Assignee::placeholder_for(&id);
        Self {
            id,
            key,
            content,
            priority: Priority::default(),
            assignee,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_id_creation() {
        let id = TaskId::new(1);
        assert_eq!(id.as_str(), "task-1");

        let id = TaskId::new(42);
        assert_eq!(id.as_str(), "task-42");
        assert_eq!(id.sequence(), 42);
    }

    #[test]
    fn test_task_id_parsing() {
        let id = TaskId::from_str("task-7").unwrap();
        assert_eq!(id.as_str(), "task-7");
        assert_eq!(id.sequence(), 7);

        assert!(TaskId::from_str("task-").is_err());
        assert!(TaskId::from_str("task-abc").is_err());
        assert!(TaskId::from_str("7").is_err());
        assert!(TaskId::from_str("ticket-7").is_err());
    }

    #[test]
    fn test_task_key_creation() {
        let key = TaskKey::new("WEB", 3);
        assert_eq!(key.as_str(), "WEB-3");
        assert_eq!(key.sequence(), 3);
    }

    #[test]
    fn test_task_key_parsing() {
        let key = TaskKey::from_str("WEB-12").unwrap();
        assert_eq!(key.sequence(), 12);

        assert!(TaskKey::from_str("WEB").is_err());
        assert!(TaskKey::from_str("-3").is_err());
        assert!(TaskKey::from_str("WEB-x").is_err());
    }

    #[test]
    fn test_priority_defaults_to_medium() {
        assert_eq!(Priority::default(), Priority::Medium);
        assert_eq!(Priority::High.to_string(), "High");
    }

    #[test]
    fn test_placeholder_assignee_is_deterministic() {
        let id = TaskId::new(5);
        let a = Assignee::placeholder_for(&id);
        let b = Assignee::placeholder_for(&id);
        assert_eq!(a, b);
        assert!(a.as_str().ends_with("seed=task-5"));
    }

    #[test]
    fn test_task_creation() {
        let task = Task::new(TaskId::new(1), TaskKey::new("WEB", 1), "Test".to_string());
        assert_eq!(task.priority, Priority::Medium);
        assert_eq!(task.assignee, Assignee::placeholder_for(&task.id));
    }

    #[test]
    fn test_task_serialization_round_trip() {
        let task = Task::new(
            TaskId::new(9),
            TaskKey::new("WEB", 9),
            "Round trip".to_string(),
        );

        let json = serde_json::to_string(&task).unwrap();
        let deserialized: Task = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized, task);
    }
}
