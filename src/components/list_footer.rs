//! List Footer Component
//!
//! Items-left counter, filter buttons and "Clear completed".

use leptos::prelude::*;
use todo_core::Filter;

use crate::context::use_todo_controller;

#[component]
pub fn ListFooter() -> impl IntoView {
    let ctrl = use_todo_controller();
    let stats = Memo::new(move |_| ctrl.stats());

    view! {
        <Show when=move || { stats.get().total > 0 }>
            <footer class="list-footer">
                <span class="item-count">{move || stats.get().items_left_label()}</span>
                <div class="filters">
                    {Filter::ALL.into_iter().map(|filter| {
                        let is_active = move || ctrl.filter() == filter;
                        view! {
                            <button
                                class=move || if is_active() { "filter-btn active" } else { "filter-btn" }
                                on:click=move |_| ctrl.set_filter(filter)
                            >
                                {filter.label()}
                            </button>
                        }
                    }).collect_view()}
                </div>
                <Show when=move || { stats.get().completed > 0 }>
                    <button class="clear-btn" on:click=move |_| ctrl.clear_completed()>
                        "Clear completed"
                    </button>
                </Show>
            </footer>
        </Show>
    }
}
