//! Exercise Panel
//!
//! Exercise catalog: debounced search, catalog filters, paginated listing,
//! status toggling, deletion and image upload.

use gymdesk_core::models::{Equipment, Exercise, ExerciseCategory, MuscleGroup, Page};
use gymdesk_core::query::LIST_POLICY;
use gymdesk_core::upload::UploadRules;
use gymdesk_core::Pagination;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::{catalog, media};
use crate::components::{PaginationBar, SearchBar, StatusBadge, UploadZone};
use crate::query::use_query_client;
use crate::store::use_stores;

const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

fn select_value(ev: &web_sys::Event) -> String {
    let target = ev.target().unwrap();
    target
        .dyn_ref::<web_sys::HtmlSelectElement>()
        .unwrap()
        .value()
}

#[component]
pub fn ExercisePanel() -> impl IntoView {
    let stores = use_stores();
    let query = use_query_client();
    let collection = stores.exercises.collection();

    let (categories, set_categories) = signal(Vec::<ExerciseCategory>::new());
    let (muscle_groups, set_muscle_groups) = signal(Vec::<MuscleGroup>::new());
    let (equipment, set_equipment) = signal(Vec::<Equipment>::new());

    spawn_local(async move {
        if let Ok(list) = catalog::categories().await {
            set_categories.set(list);
        }
        if let Ok(list) = catalog::muscle_groups().await {
            set_muscle_groups.set(list);
        }
        if let Ok(list) = catalog::equipment().await {
            set_equipment.set(list);
        }
    });

    let apply_filter = move |key: &'static str, value: String| {
        stores.exercises.set_filter(key, &value);
        stores.exercises.set_page(1);
        spawn_local(async move { stores.exercises.list().await });
    };

    let on_search = UnsyncCallback::new(move |text: String| {
        stores.exercises.set_filter("search", &text);
        stores.exercises.set_page(1);
        spawn_local(async move { stores.exercises.list().await });
    });

    // Page navigation reads through the query cache, so pages warmed by
    // prefetch_adjacent are served without a request.
    let on_page = Callback::new({
        let query = query.clone();
        move |page: u32| {
            stores.exercises.set_page(page);
            let query = query.clone();
            spawn_local(async move {
                let params = stores.exercises.filters().get_untracked();
                stores.exercises.begin();
                match query
                    .fetch::<Page<Exercise>>("/exercises", params.clone(), LIST_POLICY)
                    .await
                {
                    Ok(envelope) => {
                        let pagination = Pagination::from_page(&envelope);
                        stores.exercises.accept_list(envelope);
                        query.prefetch_adjacent("/exercises", &params, pagination, LIST_POLICY);
                    }
                    Err(err) => stores.exercises.fail(err.message),
                }
            });
        }
    });

    let toggle = {
        let query = query.clone();
        move |id: u64| {
            let query = query.clone();
            spawn_local(async move {
                if stores.exercises.toggle_status(id).await.is_some() {
                    query.invalidate("/exercises");
                }
            });
        }
    };

    let remove = {
        let query = query.clone();
        move |id: u64| {
            let query = query.clone();
            spawn_local(async move {
                if stores.exercises.delete(id).await {
                    query.invalidate("/exercises");
                }
            });
        }
    };

    let upload_for = {
        let query = query.clone();
        move |id: u64| {
            let query = query.clone();
            UnsyncCallback::new(move |files: Vec<web_sys::File>| {
                let query = query.clone();
                let Some(file) = files.into_iter().next() else {
                    return;
                };
                spawn_local(async move {
                    if query.mutate("/exercises", media::upload(file)).await.is_ok() {
                        stores.exercises.get(id).await;
                        stores.exercises.list().await;
                    }
                });
            })
        }
    };

    view! {
        <section class="panel exercise-panel">
            <header class="panel-header">
                <h2>"Ejercicios"</h2>
                <SearchBar on_search=on_search placeholder="Buscar ejercicios..." />
            </header>

            <div class="filter-row">
                <select on:change=move |ev| apply_filter("category_id", select_value(&ev))>
                    <option value="">"Todas las categorías"</option>
                    <For
                        each=move || categories.get()
                        key=|c| c.id
                        children=|c| view! { <option value=c.id.to_string()>{c.name}</option> }
                    />
                </select>
                <select on:change=move |ev| apply_filter("muscle_group_id", select_value(&ev))>
                    <option value="">"Todos los grupos musculares"</option>
                    <For
                        each=move || muscle_groups.get()
                        key=|g| g.id
                        children=|g| view! { <option value=g.id.to_string()>{g.name}</option> }
                    />
                </select>
                <select on:change=move |ev| apply_filter("equipment_id", select_value(&ev))>
                    <option value="">"Todo el equipamiento"</option>
                    <For
                        each=move || equipment.get()
                        key=|e| e.id
                        children=|e| view! { <option value=e.id.to_string()>{e.name}</option> }
                    />
                </select>
                <button
                    type="button"
                    on:click=move |_| {
                        stores.exercises.reset_filters();
                        spawn_local(async move { stores.exercises.list().await });
                    }
                >
                    "Limpiar filtros"
                </button>
            </div>

            {move || collection.get().error.map(|message| view! {
                <p class="panel-error">{message}</p>
            })}

            <Show when=move || collection.get().loading>
                <p class="panel-loading">"Cargando..."</p>
            </Show>

            <ul class="entity-list">
                <For
                    each=move || collection.get().items
                    key=|exercise| exercise.id
                    children={
                        let upload_for = upload_for.clone();
                        move |exercise| {
                            let id = exercise.id;
                            let status = exercise.status;
                            let toggle = toggle.clone();
                            let remove = remove.clone();
                            view! {
                                <li class="entity-row">
                                    <span class="entity-name">{exercise.name.clone()}</span>
                                    <StatusBadge status=Signal::derive(move || {
                                        status.as_str().to_string()
                                    }) />
                                    <button type="button" on:click=move |_| toggle(id)>
                                        "Cambiar estado"
                                    </button>
                                    <button
                                        type="button"
                                        class="danger"
                                        on:click=move |_| remove(id)
                                    >
                                        "Eliminar"
                                    </button>
                                    <UploadZone
                                        rules=UploadRules::images(MAX_IMAGE_BYTES)
                                        on_files=upload_for(id)
                                        prompt="Imagen del ejercicio"
                                    />
                                </li>
                            }
                        }
                    }
                />
            </ul>

            <PaginationBar
                pagination=Signal::derive(move || collection.get().pagination)
                on_page=on_page
            />
        </section>
    }
}
