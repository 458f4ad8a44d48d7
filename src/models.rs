//! Board Models
//!
//! Data structures for columns and tasks.

use serde::{Deserialize, Serialize};

/// Entity identifier, unique within its entity class
pub type Id = u32;

/// A named ordered bucket that groups tasks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub id: Id,
    pub title: String,
}

/// A unit of work belonging to exactly one column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: Id,
    pub column_id: Id,
    pub content: String,
}
