//! Backend API Bindings
//!
//! Thin async wrappers over the gym backend REST API, organized by domain.
//! Every request attaches the bearer token mirrored in local storage.

pub mod auth;
pub mod catalog;
pub mod classes;
pub mod employees;
pub mod exercises;
pub mod media;
pub mod memberships;
pub mod payments;
pub mod reports;
pub mod routines;
pub mod workouts;

use std::fmt;

use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_storage::{LocalStorage, Storage};
use gymdesk_core::Params;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Local-storage key mirroring the session token.
pub const TOKEN_KEY: &str = "gymdesk.token";

/// Shown when the backend gives no usable message.
pub const FALLBACK_MESSAGE: &str = "Algo salió mal. Inténtalo de nuevo.";

/// Request prefix; overridable at build time for deployments that do not
/// mount the backend under the same origin.
const API_BASE: &str = match option_env!("GYMDESK_API_BASE") {
    Some(base) => base,
    None => "/api",
};

#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    pub message: String,
    pub status: Option<u16>,
}

impl ApiError {
    pub(crate) fn fallback() -> Self {
        Self {
            message: FALLBACK_MESSAGE.to_string(),
            status: None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status == Some(401)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        Self {
            message: err.to_string(),
            status: None,
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    detail: Option<String>,
}

fn build_url(path: &str, params: &Params) -> String {
    let mut url = format!("{API_BASE}{path}");
    let query: Vec<String> = params
        .iter()
        .filter(|(_, v)| !v.is_empty())
        .map(|(k, v)| format!("{k}={v}"))
        .collect();
    if !query.is_empty() {
        url.push('?');
        url.push_str(&query.join("&"));
    }
    url
}

fn authorized(builder: RequestBuilder) -> RequestBuilder {
    match LocalStorage::get::<String>(TOKEN_KEY) {
        Ok(token) => builder.header("Authorization", &format!("Bearer {token}")),
        Err(_) => builder,
    }
}

async fn error_from(response: Response) -> ApiError {
    let status = response.status();
    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message.or(body.detail))
        .unwrap_or_else(|| FALLBACK_MESSAGE.to_string());
    ApiError {
        message,
        status: Some(status),
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(error_from(response).await);
    }
    response.json::<T>().await.map_err(|_| ApiError::fallback())
}

pub(crate) async fn get_json<T: DeserializeOwned>(
    path: &str,
    params: &Params,
) -> Result<T, ApiError> {
    let response = authorized(Request::get(&build_url(path, params)))
        .send()
        .await?;
    decode(response).await
}

pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let response = authorized(Request::post(&build_url(path, &Params::new())))
        .json(body)?
        .send()
        .await?;
    decode(response).await
}

pub(crate) async fn post_empty<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = authorized(Request::post(&build_url(path, &Params::new())))
        .send()
        .await?;
    decode(response).await
}

pub(crate) async fn put_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let response = authorized(Request::put(&build_url(path, &Params::new())))
        .json(body)?
        .send()
        .await?;
    decode(response).await
}

pub(crate) async fn delete_json(path: &str) -> Result<(), ApiError> {
    let response = authorized(Request::delete(&build_url(path, &Params::new())))
        .send()
        .await?;
    if response.ok() {
        Ok(())
    } else {
        Err(error_from(response).await)
    }
}

/// Raw JSON fetch used by the query cache layer.
pub(crate) async fn get_value(path: &str, params: &Params) -> Result<serde_json::Value, ApiError> {
    get_json(path, params).await
}
