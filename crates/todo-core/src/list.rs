//! Todo List Controller
//!
//! Owns the ordered todo collection. Every mutation goes through the
//! operations below; an unknown id or blank text makes the operation a no-op.

use log::{debug, trace};

use crate::domain::{DomainError, DomainResult, Entity, IdSource, SequentialIds, Todo, TodoId};
use crate::filter::{Filter, Stats};

/// Ordered todo collection, insertion order preserved
#[derive(Debug, Clone, Default)]
pub struct TodoList<I = SequentialIds> {
    todos: Vec<Todo>,
    ids: I,
}

impl TodoList<SequentialIds> {
    /// Empty list with sequential ids
    pub fn new() -> Self {
        Self::default()
    }
}

impl<I: IdSource> TodoList<I> {
    /// Empty list drawing ids from `ids`
    pub fn with_ids(ids: I) -> Self {
        Self { todos: Vec::new(), ids }
    }

    // ========================
    // Operations
    // ========================

    /// Append a todo; blank text is ignored
    pub fn add(&mut self, text: &str) -> Option<TodoId> {
        match self.try_add(text) {
            Ok(id) => Some(id),
            Err(e) => {
                debug!("add ignored: {}", e);
                None
            }
        }
    }

    fn try_add(&mut self, text: &str) -> DomainResult<TodoId> {
        if text.trim().is_empty() {
            return Err(DomainError::InvalidInput("blank todo text".to_string()));
        }
        let id = self.ids.next_id();
        self.todos.push(Todo::new(id, text));
        trace!("added todo {} ({} total)", id, self.todos.len());
        Ok(id)
    }

    /// Flip the completion flag
    pub fn toggle(&mut self, id: TodoId) {
        self.apply("toggle", id, |todo| todo.completed = !todo.completed);
    }

    /// Replace the text of a todo that is in edit mode
    pub fn update_text(&mut self, id: TodoId, text: &str) {
        self.apply("update_text", id, |todo| {
            if todo.is_editing {
                todo.text = text.to_string();
            } else {
                debug!("update_text ignored: todo {} is not being edited", todo.id);
            }
        });
    }

    /// Enter edit mode
    pub fn start_editing(&mut self, id: TodoId) {
        self.apply("start_editing", id, |todo| todo.is_editing = true);
    }

    /// Leave edit mode, keeping whatever text was entered
    pub fn save_edit(&mut self, id: TodoId) {
        self.apply("save_edit", id, |todo| todo.is_editing = false);
    }

    /// Delete a todo
    pub fn remove(&mut self, id: TodoId) {
        match self.position(id) {
            Ok(index) => {
                self.todos.remove(index);
                trace!("removed todo {} ({} left)", id, self.todos.len());
            }
            Err(e) => debug!("remove ignored: {}", e),
        }
    }

    /// Delete every completed todo, returning how many were removed
    pub fn clear_completed(&mut self) -> usize {
        let before = self.todos.len();
        self.todos.retain(|todo| !todo.completed);
        let removed = before - self.todos.len();
        trace!("cleared {} completed todos", removed);
        removed
    }

    // ========================
    // Queries
    // ========================

    pub fn get(&self, id: TodoId) -> DomainResult<&Todo> {
        self.position(id).map(|index| &self.todos[index])
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    /// Todos passing `filter`, in list order
    pub fn visible(&self, filter: Filter) -> Vec<Todo> {
        self.todos.iter().filter(|t| filter.matches(t)).cloned().collect()
    }

    pub fn stats(&self) -> Stats {
        Stats::from_todos(&self.todos)
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    // ========================
    // Helpers
    // ========================

    fn position(&self, id: TodoId) -> DomainResult<usize> {
        self.todos
            .iter()
            .position(|todo| todo.id() == id)
            .ok_or_else(|| DomainError::NotFound(format!("todo {}", id)))
    }

    fn apply(&mut self, op: &str, id: TodoId, f: impl FnOnce(&mut Todo)) {
        match self.position(id) {
            Ok(index) => {
                f(&mut self.todos[index]);
                trace!("{} applied to todo {}", op, id);
            }
            Err(e) => debug!("{} ignored: {}", op, e),
        }
    }
}
