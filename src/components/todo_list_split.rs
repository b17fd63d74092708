//! Split Todo List
//!
//! Input and rows as separate sub-views with stable callbacks: typing a
//! draft re-renders nothing but the input, and a row is rebuilt only when
//! its own record changes.

use leptos::prelude::*;
use todo_core::TodoId;

use crate::components::{row_key, InputView, ItemView};
use crate::context::use_todo_controller;

#[component]
pub fn TodoListSplit(#[prop(into)] placeholder: String) -> impl IntoView {
    let ctrl = use_todo_controller();

    let on_add = Callback::new(move |text: String| ctrl.add(&text));
    let on_toggle = Callback::new(move |id: TodoId| ctrl.toggle(id));
    let on_start_edit = Callback::new(move |id: TodoId| ctrl.start_editing(id));
    let on_update_text = Callback::new(move |(id, text): (TodoId, String)| ctrl.update_text(id, &text));
    let on_save_edit = Callback::new(move |id: TodoId| ctrl.save_edit(id));
    let on_remove = Callback::new(move |id: TodoId| ctrl.remove(id));

    view! {
        <section class="todo-list split">
            <InputView placeholder=placeholder on_add=on_add />
            <ul class="todo-items">
                <For
                    each=move || ctrl.visible()
                    key=row_key
                    children=move |todo| {
                        view! {
                            <ItemView
                                todo=todo
                                on_toggle=on_toggle
                                on_start_edit=on_start_edit
                                on_update_text=on_update_text
                                on_save_edit=on_save_edit
                                on_remove=on_remove
                            />
                        }
                    }
                />
            </ul>
        </section>
    }
}
