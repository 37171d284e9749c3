//! Search Bar Component
//!
//! Text input that debounces keystrokes before firing its callback, so a
//! burst of typing produces one filtered request.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::timer::{Debouncer, SEARCH_DEBOUNCE_MS};

#[component]
pub fn SearchBar(
    /// Fires with the input text once typing pauses
    on_search: UnsyncCallback<String>,
    /// Placeholder text
    #[prop(into, default = String::from("Buscar..."))]
    placeholder: String,
) -> impl IntoView {
    let debouncer = Debouncer::new(SEARCH_DEBOUNCE_MS);

    let on_input = move |ev: web_sys::Event| {
        let target = ev.target().unwrap();
        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
        let text = input.value();
        if text.is_empty() {
            // Clearing the box resets the results immediately.
            debouncer.cancel();
            on_search.run(text);
        } else {
            let on_search = on_search.clone();
            debouncer.reset(move || on_search.run(text));
        }
    };

    view! {
        <input
            type="search"
            class="search-bar"
            placeholder=placeholder
            on:input=on_input
        />
    }
}
