//! Single-Component Todo List
//!
//! Input, rows and edit fields in one component. The draft lives in the
//! shared store and every row reads the whole list.

use leptos::prelude::*;

use crate::context::use_todo_controller;
use crate::dom::{input_value, is_enter};

#[component]
pub fn TodoListInline(#[prop(into)] placeholder: String) -> impl IntoView {
    let ctrl = use_todo_controller();

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctrl.submit_draft();
    };

    let visible_ids = move || ctrl.visible().into_iter().map(|t| t.id).collect::<Vec<_>>();

    view! {
        <section class="todo-list inline">
            <form class="new-todo-form" on:submit=submit>
                <input
                    type="text"
                    placeholder=placeholder
                    prop:value=move || ctrl.draft()
                    on:input=move |ev| {
                        if let Some(value) = input_value(&ev) {
                            ctrl.set_draft(value);
                        }
                    }
                />
                <button type="submit">"Add"</button>
            </form>

            <ul class="todo-items">
                <For
                    each=visible_ids
                    key=|id| *id
                    children=move |id| {
                        let completed = move || ctrl.todo(id).is_some_and(|t| t.completed);
                        let text = move || ctrl.todo(id).map(|t| t.text).unwrap_or_default();
                        // Only flips on start/save, so the edit field survives keystrokes
                        let editing = Memo::new(move |_| ctrl.todo(id).is_some_and(|t| t.is_editing));

                        view! {
                            <li class=move || {
                                if editing.get() {
                                    "todo-row editing"
                                } else if completed() {
                                    "todo-row completed"
                                } else {
                                    "todo-row"
                                }
                            }>
                                <input
                                    type="checkbox"
                                    prop:checked=completed
                                    on:change=move |_| ctrl.toggle(id)
                                />
                                {move || if editing.get() {
                                    view! {
                                        <input
                                            type="text"
                                            class="edit-input"
                                            prop:value=text
                                            on:input=move |ev| {
                                                if let Some(value) = input_value(&ev) {
                                                    ctrl.update_text(id, &value);
                                                }
                                            }
                                            on:keydown=move |ev| {
                                                if is_enter(&ev) {
                                                    ctrl.save_edit(id);
                                                }
                                            }
                                        />
                                        <button class="save-btn" title="Save" on:click=move |_| ctrl.save_edit(id)>"✓"</button>
                                    }.into_any()
                                } else {
                                    view! {
                                        <span class="todo-text">{text}</span>
                                        <button class="edit-btn" title="Edit" on:click=move |_| ctrl.start_editing(id)>"✎"</button>
                                    }.into_any()
                                }}
                                <button class="delete-btn" title="Delete" on:click=move |_| ctrl.remove(id)>"×"</button>
                            </li>
                        }
                    }
                />
            </ul>
        </section>
    }
}
