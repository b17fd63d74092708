//! Application State Store
//!
//! Uses Leptos reactive_stores for field-level reactivity: typing into the
//! draft field does not notify subscribers of the list.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_core::{ClockIds, Filter, TodoList};

/// Millisecond clock backing todo ids
pub type Clock = fn() -> u64;

/// The list as held by the UI: timestamp ids from the browser clock
pub type UiTodoList = TodoList<ClockIds<Clock>>;

/// Global application state with field-level reactivity
#[derive(Debug, Store)]
pub struct AppState {
    /// All todos
    pub list: UiTodoList,
    /// Active footer filter
    pub filter: Filter,
    /// Draft text of the single-component renderer's input
    pub draft: String,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_clock(now_ms)
    }

    /// State whose todo ids come from `clock`
    pub fn with_clock(clock: Clock) -> Self {
        Self {
            list: TodoList::with_ids(ClockIds::new(clock)),
            filter: Filter::default(),
            draft: String::new(),
        }
    }
}

fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

// ========================
// Store Helper Functions
// ========================

/// Read the list, tracking it
pub fn store_read_list<R>(store: &AppStore, f: impl FnOnce(&UiTodoList) -> R) -> R {
    let list = store.list().read();
    f(&*list)
}

/// Mutate the list, notifying its subscribers
pub fn store_update_list<R>(store: &AppStore, f: impl FnOnce(&mut UiTodoList) -> R) -> R {
    let field = store.list();
    let mut list = field.write();
    f(&mut *list)
}

pub fn store_filter(store: &AppStore) -> Filter {
    store.filter().get()
}

pub fn store_set_filter(store: &AppStore, filter: Filter) {
    *store.filter().write() = filter;
}

pub fn store_draft(store: &AppStore) -> String {
    store.draft().get()
}

pub fn store_set_draft(store: &AppStore, draft: String) {
    *store.draft().write() = draft;
}
