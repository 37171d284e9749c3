//! Session Store
//!
//! Holds the authenticated identity and token, mirrors them into local
//! storage, and gates authenticated requests. Rehydration is optimistic:
//! a persisted token marks the session authenticated before it has been
//! re-verified against the backend.

use gloo_storage::{LocalStorage, Storage};
#[cfg(feature = "dev-bypass")]
use gymdesk_core::session::bypass_login;
use gymdesk_core::models::User;
use gymdesk_core::session::is_bypass_token;
use leptos::prelude::*;

use crate::api::{self, ApiError, TOKEN_KEY};

pub const REFRESH_KEY: &str = "gymdesk.refresh";
pub const USER_KEY: &str = "gymdesk.user";
pub const OWNER_PASSWORD_KEY: &str = "gymdesk.owner_password";

#[derive(Clone, Copy)]
pub struct SessionStore {
    user: RwSignal<Option<User>>,
    token: RwSignal<Option<String>>,
    authenticated: RwSignal<bool>,
    loading: RwSignal<bool>,
    error: RwSignal<Option<String>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            user: RwSignal::new(None),
            token: RwSignal::new(None),
            authenticated: RwSignal::new(false),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    pub fn user(&self) -> RwSignal<Option<User>> {
        self.user
    }

    pub fn authenticated(&self) -> RwSignal<bool> {
        self.authenticated
    }

    pub fn loading(&self) -> RwSignal<bool> {
        self.loading
    }

    pub fn error(&self) -> RwSignal<Option<String>> {
        self.error
    }

    pub fn is_authenticated_untracked(&self) -> bool {
        self.authenticated.get_untracked()
    }

    /// Copy a persisted token into memory and mark the session authenticated.
    /// Verification is left to the caller via [`Self::current_user`].
    pub fn rehydrate(&self) {
        if let Ok(token) = LocalStorage::get::<String>(TOKEN_KEY) {
            self.token.set(Some(token));
            self.authenticated.set(true);
            if let Ok(user) = LocalStorage::get::<User>(USER_KEY) {
                self.user.set(Some(user));
            }
        }
    }

    fn establish(&self, user: User, token: String, refresh: Option<String>) {
        let _ = LocalStorage::set(TOKEN_KEY, &token);
        let _ = LocalStorage::set(USER_KEY, &user);
        if let Some(refresh) = refresh {
            let _ = LocalStorage::set(REFRESH_KEY, &refresh);
        }
        self.user.set(Some(user));
        self.token.set(Some(token));
        self.authenticated.set(true);
    }

    fn clear(&self) {
        LocalStorage::delete(TOKEN_KEY);
        LocalStorage::delete(REFRESH_KEY);
        LocalStorage::delete(USER_KEY);
        self.user.set(None);
        self.token.set(None);
        self.authenticated.set(false);
    }

    /// Try the development bypass credentials first (no network call), then
    /// the backend. Re-raises on failure so the caller can branch.
    pub async fn login(&self, username: String, password: String) -> Result<User, ApiError> {
        self.loading.set(true);
        self.error.set(None);

        #[cfg(feature = "dev-bypass")]
        if let Some(identity) = bypass_login(&username, &password) {
            self.establish(identity.user.clone(), identity.token, None);
            self.loading.set(false);
            return Ok(identity.user);
        }

        let entered_password = password.clone();
        match api::auth::login(api::auth::Credentials { username, password }).await {
            Ok(response) => {
                if response.user.role == "owner" {
                    self.remember_owner_password(&entered_password);
                }
                self.establish(response.user.clone(), response.token, response.refresh_token);
                self.loading.set(false);
                Ok(response.user)
            }
            Err(err) => {
                self.clear();
                self.error.set(Some(err.message.clone()));
                self.loading.set(false);
                Err(err)
            }
        }
    }

    /// Registration establishes the session like a login; re-raises so the
    /// form can branch.
    pub async fn register(&self, payload: api::auth::RegisterPayload) -> Result<User, ApiError> {
        self.loading.set(true);
        self.error.set(None);
        match api::auth::register(payload).await {
            Ok(response) => {
                self.establish(response.user.clone(), response.token, response.refresh_token);
                self.loading.set(false);
                Ok(response.user)
            }
            Err(err) => {
                self.error.set(Some(err.message.clone()));
                self.loading.set(false);
                Err(err)
            }
        }
    }

    /// Best-effort backend notification; identity is cleared regardless.
    pub async fn logout(&self) {
        let _ = api::auth::logout().await;
        self.clear();
    }

    /// Requires a persisted refresh token; a backend rejection forces a full
    /// logout and re-raises.
    pub async fn refresh_token(&self) -> Result<(), ApiError> {
        let refresh: String = LocalStorage::get(REFRESH_KEY).map_err(|_| ApiError {
            message: "No hay token de actualización".to_string(),
            status: None,
        })?;
        match api::auth::refresh(refresh).await {
            Ok(response) => {
                self.establish(response.user, response.token, response.refresh_token);
                Ok(())
            }
            Err(err) => {
                self.logout().await;
                Err(err)
            }
        }
    }

    /// Bypass tokens never existed on the backend; trust the in-memory user.
    /// Real tokens are verified against the backend, and a 401 clears the
    /// identity.
    pub async fn current_user(&self) -> Result<User, ApiError> {
        let token = self.token.get_untracked().ok_or_else(|| ApiError {
            message: "Sesión no iniciada".to_string(),
            status: Some(401),
        })?;

        if is_bypass_token(&token) {
            return self.user.get_untracked().ok_or_else(|| ApiError {
                message: "Sesión no iniciada".to_string(),
                status: Some(401),
            });
        }

        match api::auth::me().await {
            Ok(user) => {
                let _ = LocalStorage::set(USER_KEY, &user);
                self.user.set(Some(user.clone()));
                Ok(user)
            }
            // An expired access token gets one refresh-and-retry before the
            // identity is dropped.
            Err(err) if err.is_unauthorized() => {
                if self.refresh_token().await.is_err() {
                    // Covers the no-refresh-token case, where refresh_token
                    // bails before its own forced logout.
                    self.clear();
                    return Err(err);
                }
                let user = api::auth::me().await?;
                let _ = LocalStorage::set(USER_KEY, &user);
                self.user.set(Some(user.clone()));
                Ok(user)
            }
            Err(err) => Err(err),
        }
    }

    pub async fn update_profile(&self, payload: api::auth::ProfilePayload) -> Result<User, ApiError> {
        match api::auth::update_profile(payload).await {
            Ok(user) => {
                let _ = LocalStorage::set(USER_KEY, &user);
                self.user.set(Some(user.clone()));
                Ok(user)
            }
            Err(err) => {
                self.error.set(Some(err.message.clone()));
                Err(err)
            }
        }
    }

    pub async fn change_password(
        &self,
        payload: api::auth::PasswordPayload,
    ) -> Result<(), ApiError> {
        api::auth::change_password(payload).await.map_err(|err| {
            self.error.set(Some(err.message.clone()));
            err
        })
    }

    /// Mirror the owner password override into persisted storage.
    pub fn remember_owner_password(&self, password: &str) {
        let _ = LocalStorage::set(OWNER_PASSWORD_KEY, &password.to_string());
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Get the session store from context.
pub fn use_session() -> SessionStore {
    expect_context::<SessionStore>()
}
