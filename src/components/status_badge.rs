//! Status Badge Component

use leptos::prelude::*;

/// Colored pill for an entity's lifecycle status.
#[component]
pub fn StatusBadge(#[prop(into)] status: Signal<String>) -> impl IntoView {
    view! {
        <span class=move || format!("status-badge status-{}", status.get())>
            {move || status.get()}
        </span>
    }
}
