//! Auth Endpoints

use gymdesk_core::models::User;
use gymdesk_core::Params;
use serde::{Deserialize, Serialize};

use super::{get_json, post_empty, post_json, put_json, ApiError};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub refresh_token: Option<String>,
    pub user: User,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RegisterPayload {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
struct RefreshPayload {
    refresh_token: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProfilePayload {
    pub email: Option<String>,
    pub full_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PasswordPayload {
    pub current_password: String,
    pub new_password: String,
}

pub async fn login(credentials: Credentials) -> Result<LoginResponse, ApiError> {
    post_json("/auth/login", &credentials).await
}

pub async fn register(payload: RegisterPayload) -> Result<LoginResponse, ApiError> {
    post_json("/auth/register", &payload).await
}

pub async fn logout() -> Result<(), ApiError> {
    post_empty::<serde_json::Value>("/auth/logout").await.map(|_| ())
}

pub async fn refresh(refresh_token: String) -> Result<LoginResponse, ApiError> {
    post_json("/auth/refresh", &RefreshPayload { refresh_token }).await
}

pub async fn me() -> Result<User, ApiError> {
    get_json("/auth/me", &Params::new()).await
}

pub async fn update_profile(payload: ProfilePayload) -> Result<User, ApiError> {
    put_json("/auth/profile", &payload).await
}

pub async fn change_password(payload: PasswordPayload) -> Result<(), ApiError> {
    post_json::<_, serde_json::Value>("/auth/password", &payload)
        .await
        .map(|_| ())
}
