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

/// GET /api/employees
pub async fn list_employees(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
) -> Response {
    forward_json(
        &state,
        Method::GET,
        "/employees",
        query,
        &headers,
        None,
        fallback::employees_page,
    )
    .await
}

/// POST /api/employees
pub async fn create_employee(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    forward_json(
        &state,
        Method::POST,
        "/employees",
        None,
        &headers,
        Some(body),
        fallback::created_employee,
    )
    .await
}

pub fn router() -> Router<AppState> {
    Router::new().route("/employees", get(list_employees).post(create_employee))
}
