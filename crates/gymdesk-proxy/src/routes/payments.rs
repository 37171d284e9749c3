use axum::{
    body::Bytes,
    extract::{RawQuery, State},
    http::{HeaderMap, Method},
    response::Response,
    routing::get,
    Router,
};

use super::forward_json;
use crate::{fallback, AppState};

/// GET /api/payments
pub async fn list_payments(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
) -> Response {
    forward_json(
        &state,
        Method::GET,
        "/payments",
        query,
        &headers,
        None,
        fallback::payments_page,
    )
    .await
}

/// POST /api/payments
pub async fn create_payment(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    forward_json(
        &state,
        Method::POST,
        "/payments",
        None,
        &headers,
        Some(body),
        fallback::created_payment,
    )
    .await
}

pub fn router() -> Router<AppState> {
    Router::new().route("/payments", get(list_payments).post(create_payment))
}
