//! Item View Component
//!
//! One todo row. Rows are keyed by `row_key`, so a row is rebuilt only when
//! its own record changes.

use leptos::prelude::*;
use todo_core::{Todo, TodoId};

use crate::dom::{input_value, is_enter};

/// `For` key of a row: (id, completed, is_editing, text unless editing)
pub type RowKey = (TodoId, bool, bool, Option<String>);

/// Text is left out while editing so keystrokes don't rebuild the row
/// (and drop focus from the edit field).
pub fn row_key(todo: &Todo) -> RowKey {
    let text = (!todo.is_editing).then(|| todo.text.clone());
    (todo.id, todo.completed, todo.is_editing, text)
}

pub fn row_class(todo: &Todo) -> &'static str {
    match (todo.completed, todo.is_editing) {
        (_, true) => "todo-row editing",
        (true, false) => "todo-row completed",
        (false, false) => "todo-row",
    }
}

#[component]
pub fn ItemView(
    todo: Todo,
    on_toggle: Callback<TodoId>,
    on_start_edit: Callback<TodoId>,
    on_update_text: Callback<(TodoId, String)>,
    on_save_edit: Callback<TodoId>,
    on_remove: Callback<TodoId>,
) -> impl IntoView {
    let id = todo.id;
    log::trace!("render row {}", id);

    let body = if todo.is_editing {
        view! {
            <input
                type="text"
                class="edit-input"
                prop:value=todo.text.clone()
                on:input=move |ev| {
                    if let Some(value) = input_value(&ev) {
                        on_update_text.run((id, value));
                    }
                }
                on:keydown=move |ev| {
                    if is_enter(&ev) {
                        on_save_edit.run(id);
                    }
                }
            />
            <button class="save-btn" title="Save" on:click=move |_| on_save_edit.run(id)>"✓"</button>
        }.into_any()
    } else {
        view! {
            <span class="todo-text">{todo.text.clone()}</span>
            <button class="edit-btn" title="Edit" on:click=move |_| on_start_edit.run(id)>"✎"</button>
        }.into_any()
    };

    view! {
        <li class=row_class(&todo)>
            <input
                type="checkbox"
                prop:checked=todo.completed
                on:change=move |_| on_toggle.run(id)
            />
            {body}
            <button class="delete-btn" title="Delete" on:click=move |_| on_remove.run(id)>"×"</button>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_key_tracks_record() {
        let todo = Todo::new(1, "Buy milk");
        let done = Todo { completed: true, ..todo.clone() };
        let renamed = Todo { text: "Buy oat milk".to_string(), ..todo.clone() };

        assert_ne!(row_key(&todo), row_key(&done));
        assert_ne!(row_key(&todo), row_key(&renamed));
        assert_eq!(row_key(&todo), row_key(&todo.clone()));
    }

    #[test]
    fn test_row_key_ignores_text_while_editing() {
        let editing = Todo { is_editing: true, ..Todo::new(1, "Buy") };
        let typed = Todo { text: "Buy milk".to_string(), ..editing.clone() };
        assert_eq!(row_key(&editing), row_key(&typed));

        let saved = Todo { is_editing: false, ..typed };
        assert_ne!(row_key(&editing), row_key(&saved));
    }

    #[test]
    fn test_row_class() {
        let todo = Todo::new(1, "A");
        assert_eq!(row_class(&todo), "todo-row");
        assert_eq!(row_class(&Todo { completed: true, ..todo.clone() }), "todo-row completed");
        assert_eq!(row_class(&Todo { is_editing: true, completed: true, ..todo }), "todo-row editing");
    }
}
