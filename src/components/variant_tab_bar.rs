//! Variant Tab Bar Component
//!
//! Tabs for switching between the two renderers. Both draw the same store,
//! so switching keeps the list.

use leptos::prelude::*;

use crate::config::Variant;

#[component]
pub fn VariantTabBar(
    variant: ReadSignal<Variant>,
    set_variant: WriteSignal<Variant>,
) -> impl IntoView {
    view! {
        <div class="variant-tab-bar">
            {Variant::ALL.into_iter().map(|v| {
                let tab_class = move || {
                    if variant.get() == v { "variant-tab active" } else { "variant-tab" }
                };
                view! {
                    <button
                        class=tab_class
                        on:click=move |_| {
                            log::debug!("renderer -> {}", v.as_str());
                            set_variant.set(v);
                        }
                    >
                        {v.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
