use axum::{
    extract::{RawQuery, State},
    http::{HeaderMap, Method},
    response::Response,
    routing::get,
    Router,
};

use super::forward_json;
use crate::{fallback, AppState};

/// GET /api/reports/charts
pub async fn report_charts(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
) -> Response {
    forward_json(
        &state,
        Method::GET,
        "/reports/charts",
        query,
        &headers,
        None,
        fallback::report_charts,
    )
    .await
}

pub fn router() -> Router<AppState> {
    Router::new().route("/reports/charts", get(report_charts))
}
