//! Todo List App
//!
//! Root component: owns the store, provides the controller and picks the
//! renderer.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{ListFooter, TodoListInline, TodoListSplit, VariantTabBar};
use crate::config::{UiConfig, Variant};
use crate::context::TodoController;
use crate::store::AppState;

#[component]
pub fn App(config: UiConfig) -> impl IntoView {
    // State
    let store = Store::new(AppState::new());
    let (variant, set_variant) = signal(config.variant);

    // Provide context to all children
    provide_context(TodoController::new(store));

    let placeholder = config.placeholder;
    let renderer = move || match variant.get() {
        Variant::Split => view! { <TodoListSplit placeholder=placeholder.clone() /> }.into_any(),
        Variant::Inline => view! { <TodoListInline placeholder=placeholder.clone() /> }.into_any(),
    };

    view! {
        <main class="todo-app">
            <h1>{config.title}</h1>
            <VariantTabBar variant=variant set_variant=set_variant />
            {renderer}
            <ListFooter />
        </main>
    }
}
