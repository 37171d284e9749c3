use axum::{
    extract::State,
    http::{HeaderMap, Method},
    response::Response,
    routing::get,
    Router,
};

use super::{forward_css, forward_json};
use crate::{fallback, AppState};

/// GET /api/theme/presets
pub async fn theme_presets(State(state): State<AppState>, headers: HeaderMap) -> Response {
    forward_json(
        &state,
        Method::GET,
        "/theme/presets",
        None,
        &headers,
        None,
        fallback::theme_presets,
    )
    .await
}

/// GET /api/theme/custom.css
pub async fn theme_css(State(state): State<AppState>, headers: HeaderMap) -> Response {
    forward_css(&state, "/theme/custom.css", &headers, fallback::THEME_CSS).await
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/theme/presets", get(theme_presets))
        .route("/theme/custom.css", get(theme_css))
}
