//! Settings Panel
//!
//! Gym branding: logo listing, upload, activation and deletion. Goes
//! through the proxy surface, which substitutes canned data when the
//! backend is down in development.

use gymdesk_core::upload::UploadRules;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::media::{self, Logo, LogoPayload};
use crate::components::UploadZone;

const MAX_LOGO_BYTES: u64 = 2 * 1024 * 1024;

#[component]
pub fn SettingsPanel() -> impl IntoView {
    let (logos, set_logos) = signal(Vec::<Logo>::new());
    let (error, set_error) = signal(Option::<String>::None);

    let reload = move || {
        spawn_local(async move {
            match media::list_logos().await {
                Ok(list) => {
                    set_error.set(None);
                    set_logos.set(list.items);
                }
                Err(err) => set_error.set(Some(err.message)),
            }
        });
    };

    reload();

    let on_files = UnsyncCallback::new(move |files: Vec<web_sys::File>| {
        let Some(file) = files.into_iter().next() else {
            return;
        };
        spawn_local(async move {
            match media::upload_logo(file).await {
                Ok(_) => reload(),
                Err(err) => set_error.set(Some(err.message)),
            }
        });
    });

    let activate = move |logo: Logo| {
        spawn_local(async move {
            let payload = LogoPayload {
                name: logo.name,
                active: true,
            };
            match media::update_logo(logo.id, payload).await {
                Ok(_) => reload(),
                Err(err) => set_error.set(Some(err.message)),
            }
        });
    };

    let remove = move |id: u64| {
        spawn_local(async move {
            match media::delete_logo(id).await {
                Ok(()) => reload(),
                Err(err) => set_error.set(Some(err.message)),
            }
        });
    };

    view! {
        <section class="panel settings-panel">
            <h2>"Ajustes"</h2>

            {move || error.get().map(|message| view! {
                <p class="panel-error">{message}</p>
            })}

            <UploadZone
                rules=UploadRules::images(MAX_LOGO_BYTES)
                on_files=on_files
                prompt="Subir logo"
            />

            <ul class="logo-list">
                <For
                    each=move || logos.get()
                    key=|logo| logo.id
                    children=move |logo| {
                        let id = logo.id;
                        let active = logo.active;
                        let for_activate = logo.clone();
                        view! {
                            <li class=move || {
                                if active { "logo-row active" } else { "logo-row" }
                            }>
                                <img src=logo.url.clone() alt=logo.name.clone() />
                                <span>{logo.name.clone()}</span>
                                <button
                                    type="button"
                                    disabled=active
                                    on:click=move |_| activate(for_activate.clone())
                                >
                                    "Activar"
                                </button>
                                <button
                                    type="button"
                                    class="danger"
                                    on:click=move |_| remove(id)
                                >
                                    "Eliminar"
                                </button>
                            </li>
                        }
                    }
                />
            </ul>
        </section>
    }
}
