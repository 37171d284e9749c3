//! Proxy Route Surface
//!
//! One module per resource, each forwarding to the backend through the
//! shared helpers below.

mod employees;
mod logos;
mod media;
mod payments;
mod reports;
mod theme;

use axum::{
    body::Bytes,
    http::{header, HeaderMap, Method, StatusCode},
    response::{IntoResponse, Json, Response},
    Router,
};
use serde_json::Value;
use tracing::warn;

use crate::error::ProxyError;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(theme::router())
        .merge(logos::router())
        .merge(employees::router())
        .merge(payments::router())
        .merge(media::router())
        .merge(reports::router())
}

/// Forward a JSON request; substitute `fallback` on any failure when
/// dev-fallback mode is on, otherwise surface a 502.
pub(crate) async fn forward_json(
    state: &AppState,
    method: Method,
    path: &str,
    query: Option<String>,
    headers: &HeaderMap,
    body: Option<Bytes>,
    fallback: fn() -> Value,
) -> Response {
    let result = state
        .upstream
        .forward(method, path, query.as_deref(), headers, body)
        .await
        .and_then(|reply| {
            serde_json::from_slice::<Value>(&reply.body)
                .map(|value| (reply.status, value))
                .map_err(|_| ProxyError::UndecodableBody)
        });

    match result {
        Ok((status, value)) => (status, Json(value)).into_response(),
        Err(err) if state.dev_fallback => {
            warn!(%path, %err, "backend unavailable, serving fallback payload");
            (StatusCode::OK, Json(fallback())).into_response()
        }
        Err(err) => err.into_response(),
    }
}

/// CSS variant of [`forward_json`] for the theme stylesheet route.
pub(crate) async fn forward_css(
    state: &AppState,
    path: &str,
    headers: &HeaderMap,
    fallback: &'static str,
) -> Response {
    let result = state
        .upstream
        .forward(Method::GET, path, None, headers, None)
        .await
        .and_then(|reply| {
            String::from_utf8(reply.body.to_vec())
                .map(|css| (reply.status, css))
                .map_err(|_| ProxyError::UndecodableBody)
        });

    match result {
        Ok((status, css)) => (status, [(header::CONTENT_TYPE, "text/css")], css).into_response(),
        Err(err) if state.dev_fallback => {
            warn!(%path, %err, "backend unavailable, serving fallback stylesheet");
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "text/css")],
                fallback,
            )
                .into_response()
        }
        Err(err) => err.into_response(),
    }
}
