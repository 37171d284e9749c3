//! Login Form Component
//!
//! Credential entry with a registration mode toggle. Both session actions
//! re-raise, so the form awaits and branches.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::auth::RegisterPayload;
use crate::context::use_app_context;
use crate::store::session::use_session;

fn input_value(ev: &web_sys::Event) -> String {
    let target = ev.target().unwrap();
    target
        .dyn_ref::<web_sys::HtmlInputElement>()
        .unwrap()
        .value()
}

#[component]
pub fn LoginForm() -> impl IntoView {
    let session = use_session();
    let ctx = use_app_context();

    let (registering, set_registering) = signal(false);
    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let user = username.get();
        let pass = password.get();
        if user.is_empty() || pass.is_empty() {
            return;
        }
        let mail = email.get();
        let register = registering.get();
        spawn_local(async move {
            let result = if register {
                session
                    .register(RegisterPayload {
                        username: user,
                        email: mail,
                        password: pass,
                    })
                    .await
            } else {
                session.login(user, pass).await
            };
            if result.is_ok() {
                set_password.set(String::new());
                ctx.reload();
            }
        });
    };

    view! {
        <form class="login-form" on:submit=submit>
            <h2>{move || if registering.get() { "Crear cuenta" } else { "Iniciar sesión" }}</h2>
            <input
                type="text"
                placeholder="Usuario"
                prop:value=move || username.get()
                on:input=move |ev| set_username.set(input_value(&ev))
            />
            <Show when=move || registering.get()>
                <input
                    type="email"
                    placeholder="Correo"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(input_value(&ev))
                />
            </Show>
            <input
                type="password"
                placeholder="Contraseña"
                prop:value=move || password.get()
                on:input=move |ev| set_password.set(input_value(&ev))
            />
            <button type="submit" disabled=move || session.loading().get()>
                {move || match (registering.get(), session.loading().get()) {
                    (_, true) => "Un momento...",
                    (true, false) => "Registrarse",
                    (false, false) => "Entrar",
                }}
            </button>
            <button
                type="button"
                class="link-btn"
                on:click=move |_| set_registering.update(|r| *r = !*r)
            >
                {move || {
                    if registering.get() {
                        "Ya tengo cuenta"
                    } else {
                        "Crear una cuenta"
                    }
                }}
            </button>
            {move || session.error().get().map(|message| view! {
                <p class="form-error">{message}</p>
            })}
        </form>
    }
}
