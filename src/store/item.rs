//! Todo item and its stable identifier.

use chrono::{DateTime, Utc};
use std::fmt;
use uuid::Uuid;

/// Stable identifier assigned to an item when it is created.
///
/// Ids are never reused, so an id captured before other items were removed
/// still addresses the same item (or nothing, if that item is gone).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TodoId(Uuid);

impl TodoId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TodoId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // First 8 hex digits are plenty for log lines
        let simple = self.0.simple().to_string();
        write!(f, "{}", &simple[..8])
    }
}

/// A single entry in the todo list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItem {
    pub id: TodoId,
    /// Display text, stored exactly as submitted
    pub text: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl TodoItem {
    /// Create a pending item with a fresh id.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: TodoId::new(),
            text: text.into(),
            completed: false,
            created_at: Utc::now(),
        }
    }

    /// Flip the completed flag and return the new value.
    pub fn toggle(&mut self) -> bool {
        self.completed = !self.completed;
        self.completed
    }
}
