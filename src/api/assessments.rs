//! Assessment endpoints. Every route here sits behind the session middleware.

use axum::{
    Extension, Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::header,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use super::auth::CurrentUser;
use super::validation::{
    DEFAULT_HISTORY_LIMIT, json_body, path_params, query_params, validate_assessment_id,
    validate_limit,
};
use super::{
    ApiError, ApiResponse, AppState, AssessmentDetailDto, HistoryItemDto, HistoryResponse,
    LimitQuery, MessageResponse, SaveAssessmentRequest,
};
use crate::export::{CONTENT_TYPE, report_filename};
use crate::services::AssessmentError;

impl From<AssessmentError> for ApiError {
    fn from(err: AssessmentError) -> Self {
        match err {
            AssessmentError::Validation(msg) => Self::validation(msg),
            AssessmentError::NotFound(id) => Self::not_found("Assessment", id),
            AssessmentError::StoreUnavailable(msg) => Self::StoreUnavailable(msg),
            AssessmentError::Internal(msg) => Self::internal(msg),
        }
    }
}

/// Scores and stores one answer sheet for the caller.
///
/// # Endpoint
/// `POST /api/assessments`
///
/// # Errors
/// - 400 if `responses` is not exactly 90 values in 1..=5, or `notes` is too long
/// - 503 if the insert fails
pub async fn save(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    payload: Result<Json<SaveAssessmentRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    let request = json_body(payload)?;

    state
        .assessment_service()
        .save(user.id, request.into())
        .await?;

    Ok(Json(ApiResponse::success(MessageResponse::ok(
        "Assessment saved successfully",
    ))))
}

/// # Endpoint
/// `GET /api/assessments?limit=10`
pub async fn get_history(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    query: Result<Query<LimitQuery>, QueryRejection>,
) -> Result<Json<ApiResponse<HistoryResponse>>, ApiError> {
    let query = query_params(query)?;
    let limit = validate_limit(query.limit.unwrap_or(DEFAULT_HISTORY_LIMIT))?;

    let assessments: Vec<HistoryItemDto> = state
        .assessment_service()
        .history(user.id, limit as u64)
        .await?
        .into_iter()
        .map(HistoryItemDto::from)
        .collect();

    Ok(Json(ApiResponse::success(HistoryResponse {
        count: assessments.len(),
        assessments,
    })))
}

/// # Endpoint
/// `GET /api/assessments/{id}`
///
/// # Errors
/// - 404 if the assessment does not exist or belongs to another user
pub async fn get_assessment(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<ApiResponse<AssessmentDetailDto>>, ApiError> {
    let id = validate_assessment_id(path_params(id)?)?;
    let assessment = state.assessment_service().get(user.id, id).await?;
    Ok(Json(ApiResponse::success(assessment.into())))
}

/// Downloads the CSV report of one assessment.
///
/// # Endpoint
/// `GET /api/assessments/{id}/export`
///
/// # Response
/// `text/csv` attachment named after today's date.
pub async fn export(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Response, ApiError> {
    let id = validate_assessment_id(path_params(id)?)?;
    let body = state.assessment_service().export(user.id, id).await?;

    let filename = report_filename(chrono::Utc::now().date_naive());
    let headers = [
        (header::CONTENT_TYPE, CONTENT_TYPE.to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        ),
    ];

    Ok((headers, body).into_response())
}
