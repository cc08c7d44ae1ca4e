use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use std::sync::Arc;

use super::validation::json_body;
use super::{ApiError, ApiResponse, AppState, ScorePreviewDto, ScoreRequest};

/// Scores an answer sheet without storing it.
///
/// # Endpoint
/// `POST /api/scoring`
pub async fn preview(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ScoreRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<ScorePreviewDto>>, ApiError> {
    let request = json_body(payload)?;
    let report = state.assessment_service().preview(&request.responses)?;
    Ok(Json(ApiResponse::success(report.into())))
}
