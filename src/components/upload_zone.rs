//! Upload Zone Component
//!
//! Drag-and-drop target with a click-to-browse fallback. Batches are
//! validated before any upload fires; one invalid file voids the drop and
//! the violations are listed together.

use gymdesk_core::upload::{FileMeta, UploadRules};
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, File, FileList};

fn meta_of(file: &File) -> FileMeta {
    FileMeta {
        name: file.name(),
        size: file.size() as u64,
        mime: file.type_(),
    }
}

fn collect_files(list: FileList) -> Vec<File> {
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

/// Drop zone that validates files against its rules before handing the
/// accepted ones to `on_files`.
#[component]
pub fn UploadZone(
    /// Size and type constraints applied to every batch
    rules: UploadRules,
    /// Callback receiving the accepted files
    on_files: UnsyncCallback<Vec<File>>,
    /// Prompt shown inside the zone
    #[prop(into, default = String::from("Arrastra archivos aquí o haz clic para buscar"))]
    prompt: String,
) -> impl IntoView {
    let (is_over, set_is_over) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);

    let accept_attr = rules.accept.join(",");
    let multiple = rules.multiple;

    let handle_batch = {
        let rules = rules.clone();
        move |files: Vec<File>| {
            let metas: Vec<FileMeta> = files.iter().map(meta_of).collect();
            match rules.check_batch(&metas) {
                Ok(indices) => {
                    set_error.set(None);
                    let accepted: Vec<File> = indices
                        .into_iter()
                        .filter_map(|i| files.get(i).cloned())
                        .collect();
                    if !accepted.is_empty() {
                        on_files.run(accepted);
                    }
                }
                Err(err) => set_error.set(Some(err.message)),
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_over.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_over.set(false);
    };

    let on_drop = {
        let handle_batch = handle_batch.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_over.set(false);
            if let Some(list) = ev.data_transfer().and_then(|dt| dt.files()) {
                handle_batch(collect_files(list));
            }
        }
    };

    let on_change = {
        let handle_batch = handle_batch.clone();
        move |ev: web_sys::Event| {
            let target = ev.target().unwrap();
            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
            if let Some(list) = input.files() {
                handle_batch(collect_files(list));
            }
            // allow re-selecting the same file
            input.set_value("");
        }
    };

    view! {
        <div class=move || {
            if is_over.get() { "upload-zone active" } else { "upload-zone" }
        }>
            <label
                class="upload-zone-target"
                on:dragover=on_dragover
                on:dragleave=on_dragleave
                on:drop=on_drop
            >
                <span class="upload-zone-prompt">{prompt}</span>
                <input
                    type="file"
                    class="upload-zone-input"
                    accept=accept_attr
                    multiple=multiple
                    on:change=on_change
                />
            </label>
            {move || error.get().map(|message| view! {
                <pre class="upload-zone-errors">{message}</pre>
            })}
        </div>
    }
}
