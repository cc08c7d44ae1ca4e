use axum::{
    Json,
    extract::{
        Path, Query,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
};

use super::ApiError;
use crate::domain::{AssessmentId, Period};

pub const DEFAULT_HISTORY_LIMIT: usize = 10;
pub const DEFAULT_PERIOD_LIMIT: usize = 12;

pub fn validate_assessment_id(id: i32) -> Result<AssessmentId, ApiError> {
    if id <= 0 {
        return Err(ApiError::validation(format!(
            "Invalid assessment ID: {}. ID must be a positive integer",
            id
        )));
    }
    Ok(AssessmentId::new(id))
}

pub fn validate_limit(limit: usize) -> Result<usize, ApiError> {
    const MAX_LIMIT: usize = 1000;
    const MIN_LIMIT: usize = 1;

    if !(MIN_LIMIT..=MAX_LIMIT).contains(&limit) {
        return Err(ApiError::validation(format!(
            "Invalid limit: {}. Limit must be between {} and {}",
            limit, MIN_LIMIT, MAX_LIMIT
        )));
    }
    Ok(limit)
}

pub fn validate_period(period: &str) -> Result<Period, ApiError> {
    period.parse().map_err(ApiError::validation)
}

/// Unwraps a JSON body, reporting malformed payloads as validation errors.
pub fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| ApiError::validation(rejection.body_text()))
}

/// Unwraps query parameters, reporting bad values as validation errors.
pub fn query_params<T>(query: Result<Query<T>, QueryRejection>) -> Result<T, ApiError> {
    query
        .map(|Query(params)| params)
        .map_err(|rejection| ApiError::validation(rejection.body_text()))
}

/// Unwraps path segments, reporting unparsable ones as validation errors.
pub fn path_params<T>(path: Result<Path<T>, PathRejection>) -> Result<T, ApiError> {
    path.map(|Path(params)| params)
        .map_err(|rejection| ApiError::validation(rejection.body_text()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_assessment_id() {
        assert!(validate_assessment_id(1).is_ok());
        assert!(validate_assessment_id(12345).is_ok());
        assert!(validate_assessment_id(0).is_err());
        assert!(validate_assessment_id(-1).is_err());
    }

    #[test]
    fn test_validate_limit() {
        assert!(validate_limit(1).is_ok());
        assert!(validate_limit(500).is_ok());
        assert!(validate_limit(1000).is_ok());
        assert!(validate_limit(0).is_err());
        assert!(validate_limit(1001).is_err());
    }

    #[test]
    fn test_validate_period() {
        assert_eq!(validate_period("weekly").unwrap(), Period::Weekly);
        assert!(validate_period("yearly").is_err());
        assert!(validate_period("").is_err());
    }
}
