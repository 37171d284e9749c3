//! Profile Panel
//!
//! Account settings: profile fields and password change. Both actions
//! re-raise, so the form branches on the awaited result.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::auth::{PasswordPayload, ProfilePayload};
use crate::store::session::use_session;

fn input_value(ev: &web_sys::Event) -> String {
    let target = ev.target().unwrap();
    target
        .dyn_ref::<web_sys::HtmlInputElement>()
        .unwrap()
        .value()
}

#[component]
pub fn ProfilePanel() -> impl IntoView {
    let session = use_session();

    let current = session.user().get_untracked();
    let (email, set_email) = signal(
        current
            .as_ref()
            .and_then(|u| u.email.clone())
            .unwrap_or_default(),
    );
    let (full_name, set_full_name) = signal(
        current
            .as_ref()
            .and_then(|u| u.full_name.clone())
            .unwrap_or_default(),
    );
    let (saved, set_saved) = signal(false);

    let (current_password, set_current_password) = signal(String::new());
    let (new_password, set_new_password) = signal(String::new());
    let (password_changed, set_password_changed) = signal(false);

    let save_profile = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let payload = ProfilePayload {
            email: Some(email.get()).filter(|s| !s.is_empty()),
            full_name: Some(full_name.get()).filter(|s| !s.is_empty()),
        };
        spawn_local(async move {
            set_saved.set(session.update_profile(payload).await.is_ok());
        });
    };

    let save_password = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let payload = PasswordPayload {
            current_password: current_password.get(),
            new_password: new_password.get(),
        };
        if payload.current_password.is_empty() || payload.new_password.is_empty() {
            return;
        }
        spawn_local(async move {
            if session.change_password(payload).await.is_ok() {
                set_current_password.set(String::new());
                set_new_password.set(String::new());
                set_password_changed.set(true);
            }
        });
    };

    view! {
        <section class="panel profile-panel">
            <h2>"Mi cuenta"</h2>

            {move || session.error().get().map(|message| view! {
                <p class="panel-error">{message}</p>
            })}

            <form class="inline-form" on:submit=save_profile>
                <input
                    type="email"
                    placeholder="Correo"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(input_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Nombre completo"
                    prop:value=move || full_name.get()
                    on:input=move |ev| set_full_name.set(input_value(&ev))
                />
                <button type="submit">"Guardar"</button>
                <Show when=move || saved.get()>
                    <span class="form-ok">"Guardado"</span>
                </Show>
            </form>

            <form class="inline-form" on:submit=save_password>
                <input
                    type="password"
                    placeholder="Contraseña actual"
                    prop:value=move || current_password.get()
                    on:input=move |ev| set_current_password.set(input_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Contraseña nueva"
                    prop:value=move || new_password.get()
                    on:input=move |ev| set_new_password.set(input_value(&ev))
                />
                <button type="submit">"Cambiar contraseña"</button>
                <Show when=move || password_changed.get()>
                    <span class="form-ok">"Contraseña actualizada"</span>
                </Show>
            </form>
        </section>
    }
}
