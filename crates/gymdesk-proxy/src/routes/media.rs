use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, Method},
    response::Response,
    routing::post,
    Router,
};

use super::forward_json;
use crate::{fallback, AppState};

/// POST /api/media
pub async fn upload_media(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    forward_json(
        &state,
        Method::POST,
        "/media",
        None,
        &headers,
        Some(body),
        fallback::media_ack,
    )
    .await
}

pub fn router() -> Router<AppState> {
    Router::new().route("/media", post(upload_media))
}
