//! DOM Helpers

use wasm_bindgen::JsCast;

/// Current value of the `<input>` that fired `ev`
pub fn input_value(ev: &web_sys::Event) -> Option<String> {
    ev.target()
        .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
        .map(|input| input.value())
}

pub fn is_enter(ev: &web_sys::KeyboardEvent) -> bool {
    ev.key() == "Enter"
}
