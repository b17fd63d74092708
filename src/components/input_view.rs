//! Input View Component
//!
//! New-todo form that owns its draft text. Parent re-renders never touch the
//! draft; it is cleared only when the add is accepted.

use leptos::prelude::*;

use crate::dom::input_value;

#[component]
pub fn InputView(
    #[prop(into)] placeholder: String,
    /// Returns whether the todo was created
    on_add: Callback<String, bool>,
) -> impl IntoView {
    let (draft, set_draft) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if on_add.run(draft.get_untracked()) {
            set_draft.set(String::new());
        }
    };

    view! {
        <form class="new-todo-form" on:submit=submit>
            <input
                type="text"
                placeholder=placeholder
                prop:value=move || draft.get()
                on:input=move |ev| {
                    if let Some(value) = input_value(&ev) {
                        set_draft.set(value);
                    }
                }
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
