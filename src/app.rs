//! GymDesk Frontend App
//!
//! Root component: wires the stores, session and query cache into context,
//! gates the panels behind authentication and drives the screen switcher.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{
    DashboardPanel, EmployeePanel, ExercisePanel, LoginForm, ProfilePanel, SettingsPanel,
};
use crate::context::AppContext;
use crate::query::QueryClient;
use crate::store::session::SessionStore;
use crate::store::AppStores;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Dashboard,
    Exercises,
    Employees,
    Profile,
    Settings,
}

#[component]
pub fn App() -> impl IntoView {
    let stores = AppStores::new();
    let session = SessionStore::new();
    let ctx = AppContext::new();

    provide_context(stores);
    provide_context(session);
    provide_context(ctx);
    provide_context(QueryClient::new());

    let (screen, set_screen) = signal(Screen::Dashboard);

    // Optimistic rehydrate from storage, then verify against the backend.
    session.rehydrate();
    if session.is_authenticated_untracked() {
        spawn_local(async move {
            let _ = session.current_user().await;
        });
    }

    // Re-run the initial fetches after login or a global reload.
    Effect::new(move |_| {
        ctx.reload_trigger().get();
        if session.authenticated().get() {
            stores.init();
        }
    });

    let logout = move |_| {
        spawn_local(async move {
            session.logout().await;
            stores.dispose();
        });
    };

    let nav_button = move |target: Screen, label: &'static str| {
        view! {
            <button
                type="button"
                class=move || {
                    if screen.get() == target { "nav-btn active" } else { "nav-btn" }
                }
                on:click=move |_| set_screen.set(target)
            >
                {label}
            </button>
        }
    };

    view! {
        <Show
            when=move || session.authenticated().get()
            fallback=|| view! { <LoginForm /> }
        >
            <div class="app-layout">
                <nav class="app-nav">
                    <h1>"GymDesk"</h1>
                    {nav_button(Screen::Dashboard, "Resumen")}
                    {nav_button(Screen::Exercises, "Ejercicios")}
                    {nav_button(Screen::Employees, "Empleados")}
                    {nav_button(Screen::Profile, "Mi cuenta")}
                    {nav_button(Screen::Settings, "Ajustes")}
                    <span class="nav-user">
                        {move || {
                            session
                                .user()
                                .get()
                                .map(|user| user.username)
                                .unwrap_or_default()
                        }}
                    </span>
                    <button type="button" class="nav-btn" on:click=logout>
                        "Salir"
                    </button>
                </nav>

                <main class="main-content">
                    {move || match screen.get() {
                        Screen::Dashboard => view! { <DashboardPanel /> }.into_any(),
                        Screen::Exercises => view! { <ExercisePanel /> }.into_any(),
                        Screen::Employees => view! { <EmployeePanel /> }.into_any(),
                        Screen::Profile => view! { <ProfilePanel /> }.into_any(),
                        Screen::Settings => view! { <SettingsPanel /> }.into_any(),
                    }}
                </main>
            </div>
        </Show>
    }
}
