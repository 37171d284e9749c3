use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{HeaderMap, Method},
    response::Response,
    routing::get,
    Router,
};

use super::forward_json;
use crate::{fallback, AppState};

/// GET /api/logos
pub async fn list_logos(State(state): State<AppState>, headers: HeaderMap) -> Response {
    forward_json(
        &state,
        Method::GET,
        "/logos",
        None,
        &headers,
        None,
        fallback::logos_list,
    )
    .await
}

/// POST /api/logos
pub async fn upload_logo(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    forward_json(
        &state,
        Method::POST,
        "/logos",
        None,
        &headers,
        Some(body),
        fallback::logo_item,
    )
    .await
}

/// PUT /api/logos/{id}
pub async fn update_logo(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    forward_json(
        &state,
        Method::PUT,
        &format!("/logos/{id}"),
        None,
        &headers,
        Some(body),
        fallback::logo_item,
    )
    .await
}

/// DELETE /api/logos/{id}
pub async fn delete_logo(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    headers: HeaderMap,
) -> Response {
    forward_json(
        &state,
        Method::DELETE,
        &format!("/logos/{id}"),
        None,
        &headers,
        None,
        fallback::logo_deleted,
    )
    .await
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/logos", get(list_logos).post(upload_logo))
        .route("/logos/{id}", axum::routing::put(update_logo).delete(delete_logo))
}
