//! Todo Controller
//!
//! `Copy` handle over the store, provided via Leptos Context API. Views
//! mutate the list only through these methods.

use leptos::prelude::*;
use todo_core::{Filter, Stats, Todo, TodoId};

use crate::store::{self, AppStore};

#[derive(Clone, Copy)]
pub struct TodoController {
    store: AppStore,
}

/// Get the controller from context
pub fn use_todo_controller() -> TodoController {
    expect_context::<TodoController>()
}

impl TodoController {
    pub fn new(store: AppStore) -> Self {
        Self { store }
    }

    // ========================
    // List operations
    // ========================

    /// Returns whether a todo was created
    pub fn add(&self, text: &str) -> bool {
        store::store_update_list(&self.store, |list| list.add(text)).is_some()
    }

    pub fn toggle(&self, id: TodoId) {
        store::store_update_list(&self.store, |list| list.toggle(id));
    }

    pub fn update_text(&self, id: TodoId, text: &str) {
        store::store_update_list(&self.store, |list| list.update_text(id, text));
    }

    pub fn start_editing(&self, id: TodoId) {
        store::store_update_list(&self.store, |list| list.start_editing(id));
    }

    pub fn save_edit(&self, id: TodoId) {
        store::store_update_list(&self.store, |list| list.save_edit(id));
    }

    pub fn remove(&self, id: TodoId) {
        store::store_update_list(&self.store, |list| list.remove(id));
    }

    pub fn clear_completed(&self) {
        let removed = store::store_update_list(&self.store, |list| list.clear_completed());
        log::info!("cleared {} completed todos", removed);
    }

    // ========================
    // Reads (tracked)
    // ========================

    pub fn todo(&self, id: TodoId) -> Option<Todo> {
        store::store_read_list(&self.store, |list| list.get(id).ok().cloned())
    }

    /// Todos passing the current filter
    pub fn visible(&self) -> Vec<Todo> {
        let filter = self.filter();
        store::store_read_list(&self.store, |list| list.visible(filter))
    }

    pub fn stats(&self) -> Stats {
        store::store_read_list(&self.store, |list| list.stats())
    }

    pub fn filter(&self) -> Filter {
        store::store_filter(&self.store)
    }

    pub fn set_filter(&self, filter: Filter) {
        log::debug!("filter -> {}", filter.as_str());
        store::store_set_filter(&self.store, filter);
    }

    // ========================
    // Shared draft (single-component renderer)
    // ========================

    pub fn draft(&self) -> String {
        store::store_draft(&self.store)
    }

    pub fn set_draft(&self, draft: String) {
        store::store_set_draft(&self.store, draft);
    }

    /// Add the shared draft, clearing it if accepted
    pub fn submit_draft(&self) {
        let draft = self.draft();
        if self.add(&draft) {
            self.set_draft(String::new());
        }
    }
}
