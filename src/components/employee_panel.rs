//! Employee Panel
//!
//! Staff roster: paginated listing, status toggling and an inline create
//! form. Created rows are prepended so they show up before any refetch.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::employees::EmployeePayload;
use crate::components::{PaginationBar, SearchBar, StatusBadge};
use crate::store::use_stores;

fn input_value(ev: &web_sys::Event) -> String {
    let target = ev.target().unwrap();
    target
        .dyn_ref::<web_sys::HtmlInputElement>()
        .unwrap()
        .value()
}

#[component]
pub fn EmployeePanel() -> impl IntoView {
    let stores = use_stores();
    let collection = stores.employees.collection();

    let (first_name, set_first_name) = signal(String::new());
    let (last_name, set_last_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (role, set_role) = signal(String::from("staff"));

    let on_search = UnsyncCallback::new(move |text: String| {
        stores.employees.set_filter("search", &text);
        stores.employees.set_page(1);
        spawn_local(async move { stores.employees.list().await });
    });

    let on_page = Callback::new(move |page: u32| {
        stores.employees.set_page(page);
        spawn_local(async move { stores.employees.list().await });
    });

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let payload = EmployeePayload {
            first_name: first_name.get(),
            last_name: last_name.get(),
            email: email.get(),
            role: role.get(),
            ..EmployeePayload::default()
        };
        if payload.first_name.is_empty() || payload.email.is_empty() {
            return;
        }
        spawn_local(async move {
            if stores.employees.create(payload).await.is_some() {
                set_first_name.set(String::new());
                set_last_name.set(String::new());
                set_email.set(String::new());
            }
        });
    };

    let toggle = move |id: u64| {
        spawn_local(async move {
            stores.employees.toggle_status(id).await;
        });
    };

    view! {
        <section class="panel employee-panel">
            <header class="panel-header">
                <h2>"Empleados"</h2>
                <SearchBar on_search=on_search placeholder="Buscar empleados..." />
            </header>

            {move || collection.get().error.map(|message| view! {
                <p class="panel-error">{message}</p>
            })}

            <form class="inline-form" on:submit=submit>
                <input
                    type="text"
                    placeholder="Nombre"
                    prop:value=move || first_name.get()
                    on:input=move |ev| set_first_name.set(input_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Apellido"
                    prop:value=move || last_name.get()
                    on:input=move |ev| set_last_name.set(input_value(&ev))
                />
                <input
                    type="email"
                    placeholder="Correo"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(input_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Rol"
                    prop:value=move || role.get()
                    on:input=move |ev| set_role.set(input_value(&ev))
                />
                <button type="submit">"Agregar"</button>
            </form>

            <table class="entity-table">
                <thead>
                    <tr>
                        <th>"Nombre"</th>
                        <th>"Correo"</th>
                        <th>"Rol"</th>
                        <th>"Estado"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || collection.get().items
                        key=|employee| employee.id
                        children=move |employee| {
                            let id = employee.id;
                            let status = employee.status;
                            let (row_role, set_row_role) = signal(employee.role.clone());
                            let source = employee.clone();
                            let save_role = move |_| {
                                let payload = EmployeePayload {
                                    first_name: source.first_name.clone(),
                                    last_name: source.last_name.clone(),
                                    email: source.email.clone(),
                                    role: row_role.get_untracked(),
                                    status: source.status,
                                };
                                spawn_local(async move {
                                    stores.employees.update(id, payload).await;
                                });
                            };
                            view! {
                                <tr>
                                    <td>
                                        {format!("{} {}", employee.first_name, employee.last_name)}
                                    </td>
                                    <td>{employee.email.clone()}</td>
                                    <td>
                                        <input
                                            type="text"
                                            class="role-input"
                                            prop:value=move || row_role.get()
                                            on:input=move |ev| set_row_role.set(input_value(&ev))
                                        />
                                        <button type="button" on:click=save_role>
                                            "Guardar"
                                        </button>
                                    </td>
                                    <td>
                                        <StatusBadge status=Signal::derive(move || {
                                            status.as_str().to_string()
                                        }) />
                                    </td>
                                    <td>
                                        <button type="button" on:click=move |_| toggle(id)>
                                            "Cambiar estado"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>

            <PaginationBar
                pagination=Signal::derive(move || collection.get().pagination)
                on_page=on_page
            />
        </section>
    }
}
