//! # Flowboard Core
//!
//! Core board state model and mutation engine for Flowboard kanban task
//! management.
//!
//! This crate provides the board aggregate, the pure reorder and mutation
//! operations over it, and the persistence boundary, without any dependency
//! on specific UI implementations. The presentation layer translates user
//! gestures into [`store::Instruction`] values, applies them through a
//! [`store::BoardStore`], and re-renders from the board it gets back.

pub mod domain;
pub mod error;
pub mod storage;
pub mod store;

// Re-export commonly used types
pub use domain::{
    board::{starter_board, Board, BoardConfig, ColumnSpec},
    column::{Column, ColumnId},
    ops::{create_task, delete_task, CreateOutcome, DeleteOutcome},
    reorder::{move_task, MoveInstruction},
    task::{Assignee, Priority, Task, TaskId, TaskKey},
};
pub use error::{FlowboardError, Result};
pub use storage::Storage;
pub use store::{BoardStore, Instruction, Outcome, Session};
