use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
};
use std::sync::Arc;
use tower_sessions::Session;

use super::auth::{require_admin, require_user};
use super::validation::{
    DEFAULT_PERIOD_LIMIT, json_body, path_params, query_params, validate_limit, validate_period,
};
use super::{
    ApiError, ApiResponse, AppState, LimitQuery, PeriodEntryDto, PeriodResponse, SummaryRequest,
};
use crate::analytics::Overview;
use crate::services::AnalyticsError;

impl From<AnalyticsError> for ApiError {
    fn from(err: AnalyticsError) -> Self {
        match err {
            AnalyticsError::Validation(msg) => Self::validation(msg),
            AnalyticsError::NotFound { period, date } => {
                Self::NotFound(format!("No {period} summary for {date}"))
            }
            AnalyticsError::StoreUnavailable(msg) => Self::StoreUnavailable(msg),
        }
    }
}

/// Seven-day dashboard overview.
///
/// # Endpoint
/// `GET /api/analytics/overview`
pub async fn get_overview(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Overview>>, ApiError> {
    let overview = state.analytics_service().overview().await?;
    Ok(Json(ApiResponse::success(overview)))
}

/// # Endpoint
/// `GET /api/analytics/periods/{period}?limit=12`
///
/// # Errors
/// - 400 if `period` is not daily, weekly or monthly
pub async fn get_by_period(
    State(state): State<Arc<AppState>>,
    period: Result<Path<String>, PathRejection>,
    query: Result<Query<LimitQuery>, QueryRejection>,
) -> Result<Json<ApiResponse<PeriodResponse>>, ApiError> {
    let period = validate_period(&path_params(period)?)?;
    let query = query_params(query)?;
    let limit = validate_limit(query.limit.unwrap_or(DEFAULT_PERIOD_LIMIT))?;

    let data = state
        .analytics_service()
        .by_period(period, limit as u64)
        .await?
        .into_iter()
        .map(PeriodEntryDto::from)
        .collect();

    Ok(Json(ApiResponse::success(PeriodResponse { period, data })))
}

/// # Endpoint
/// `GET /api/analytics/periods/{period}/{date}`
pub async fn get_summary(
    State(state): State<Arc<AppState>>,
    path: Result<Path<(String, String)>, PathRejection>,
) -> Result<Json<ApiResponse<PeriodEntryDto>>, ApiError> {
    let (period, date) = path_params(path)?;
    let period = validate_period(&period)?;
    let summary = state.analytics_service().get_summary(period, &date).await?;
    Ok(Json(ApiResponse::success(summary.into())))
}

/// Stores a summary produced by the external aggregation job.
///
/// # Endpoint
/// `PUT /api/analytics/periods/{period}/{date}`
///
/// # Errors
/// - 401 without a session
/// - 403 unless the caller is an admin
/// - 400 for a malformed date label or negative values
pub async fn put_summary(
    State(state): State<Arc<AppState>>,
    session: Session,
    path: Result<Path<(String, String)>, PathRejection>,
    payload: Result<Json<SummaryRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<PeriodEntryDto>>, ApiError> {
    let user = require_user(&state, &session).await?;
    require_admin(&user)?;

    let (period, date) = path_params(path)?;
    let period = validate_period(&period)?;
    let input = json_body(payload)?;

    let summary = state
        .analytics_service()
        .put_summary(period, &date, input.into())
        .await?;

    Ok(Json(ApiResponse::success(summary.into())))
}
