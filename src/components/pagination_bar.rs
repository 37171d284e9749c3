//! Pagination Bar Component
//!
//! Previous/next controls plus a page indicator, driven by the collection's
//! pagination snapshot.

use gymdesk_core::Pagination;
use leptos::prelude::*;

#[component]
pub fn PaginationBar(
    #[prop(into)] pagination: Signal<Pagination>,
    /// Fires with the requested page number
    on_page: Callback<u32>,
) -> impl IntoView {
    let go_prev = move |_| {
        if let Some(page) = pagination.get_untracked().prev_page() {
            on_page.run(page);
        }
    };
    let go_next = move |_| {
        if let Some(page) = pagination.get_untracked().next_page() {
            on_page.run(page);
        }
    };

    view! {
        <div class="pagination-bar">
            <button
                type="button"
                disabled=move || pagination.get().prev_page().is_none()
                on:click=go_prev
            >
                "Anterior"
            </button>
            <span class="pagination-label">
                {move || {
                    let p = pagination.get();
                    format!("Página {} de {} ({} en total)", p.page, p.total_pages.max(1), p.total)
                }}
            </span>
            <button
                type="button"
                disabled=move || pagination.get().next_page().is_none()
                on:click=go_next
            >
                "Siguiente"
            </button>
        </div>
    }
}
