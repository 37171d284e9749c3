//! GymDesk Development Proxy
//!
//! A thin axum server that forwards API requests to the configured gym
//! backend, passing the inbound Authorization header through. When the
//! dev-fallback mode is enabled, any upstream failure (network error,
//! non-2xx, undecodable body) is masked with a canned success-shaped
//! payload so the UI keeps working while the backend is down.

pub mod config;
pub mod error;
pub mod fallback;
pub mod routes;
pub mod upstream;

#[cfg(test)]
mod tests;

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::upstream::Upstream;

#[derive(Clone)]
pub struct AppState {
    pub upstream: Upstream,
    /// Substitute canned payloads on upstream failure. Development-only.
    pub dev_fallback: bool,
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .nest("/api", routes::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
