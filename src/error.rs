use thiserror::Error;

pub type Result<T> = std::result::Result<T, FlowboardError>;

#[derive(Debug, Error)]
pub enum FlowboardError {
    #[error("Task content is empty")]
    EmptyContent,

    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[error("Task not found: {0}")]
    TaskNotFound(String),

    #[error("Task {task} is not in column {column}")]
    TaskNotInColumn { task: String, column: String },

    #[error("Index {index} out of range for column {column} (length {len})")]
    IndexOutOfRange {
        column: String,
        index: usize,
        len: usize,
    },

    #[error("Board invariant violated: {0}")]
    InvariantViolation(String),

    #[error("Invalid task ID format: {0}")]
    InvalidTaskId(String),

    #[error("Invalid task key format: {0}")]
    InvalidTaskKey(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl FlowboardError {
    /// True for failures the caller recovers from locally by discarding the
    /// pending input. Everything else in the enum is a contract violation or
    /// a persistence problem.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::EmptyContent)
    }
}
