use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use super::{ApiResponse, AppState, HealthResponse};

/// `GET /api/system/health`
///
/// Pings the store. Answers 503 with `status: "degraded"` when it is unreachable.
pub async fn health(State(state): State<Arc<AppState>>) -> Response {
    let database = state.store().ping().await.is_ok();

    let (status, label) = if database {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    (
        status,
        Json(ApiResponse::success(HealthResponse {
            status: label,
            version: env!("CARGO_PKG_VERSION"),
            uptime: state.start_time.elapsed().as_secs(),
            database,
        })),
    )
        .into_response()
}
