//! Todo Entity
//!
//! A single list entry with text, completion flag and edit-mode flag.

use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// Identifier of a todo, unique for the lifetime of its list
pub type TodoId = u64;

/// A todo entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Todo {
    /// Unique identifier
    pub id: TodoId,
    /// Text as typed by the user
    pub text: String,
    /// Completion status
    pub completed: bool,
    /// Whether the row is in inline edit mode
    #[serde(rename = "isEditing")]
    pub is_editing: bool,
}

impl Todo {
    /// Create a fresh todo: not completed, not editing
    pub fn new(id: TodoId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
            is_editing: false,
        }
    }
}

impl Entity for Todo {
    type Id = TodoId;

    fn id(&self) -> Self::Id {
        self.id
    }
}
