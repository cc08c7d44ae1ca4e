//! Domain service for submitting and reading SCL-90 assessments.
//!
//! Every derived metric is recomputed from the raw responses. Aggregates sent
//! by the client are only compared against the server's numbers.

use std::collections::BTreeMap;
use thiserror::Error;

use crate::domain::{AssessmentId, UserId};
use crate::models::assessment::Assessment;
use crate::scoring::{ScoreReport, ScoringError};

/// Longest accepted free-text note, in characters.
pub const MAX_NOTES_CHARS: usize = 2000;

/// Errors specific to assessment operations.
#[derive(Debug, Error)]
pub enum AssessmentError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Assessment {0} not found")]
    NotFound(AssessmentId),

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ScoringError> for AssessmentError {
    fn from(err: ScoringError) -> Self {
        Self::Validation(err.to_string())
    }
}

/// Aggregates the client computed on its side. All optional.
#[derive(Debug, Clone, Default)]
pub struct ClaimedAggregates {
    pub total_score: Option<i64>,
    pub positive_item_count: Option<i64>,
    pub average_score: Option<String>,
    pub factor_scores: Option<BTreeMap<String, f64>>,
}

impl ClaimedAggregates {
    /// Names of the claimed fields that disagree with `report`.
    #[must_use]
    pub fn mismatches(&self, report: &ScoreReport) -> Vec<&'static str> {
        let mut fields = Vec::new();

        if self
            .total_score
            .is_some_and(|claimed| claimed != i64::from(report.total))
        {
            fields.push("totalScore");
        }
        if self
            .positive_item_count
            .is_some_and(|claimed| claimed != i64::from(report.positive_count))
        {
            fields.push("positiveItemCount");
        }
        if let Some(claimed) = &self.average_score {
            let agrees = claimed
                .trim()
                .parse::<f64>()
                .is_ok_and(|v| crate::scoring::format_average(v) == report.average);
            if !agrees {
                fields.push("averageScore");
            }
        }
        if let Some(claimed) = &self.factor_scores {
            let agrees = claimed.len() == report.factor_scores.len()
                && report.factor_scores.iter().all(|(name, score)| {
                    claimed
                        .get(name)
                        .is_some_and(|c| (c - score).abs() < 0.005)
                });
            if !agrees {
                fields.push("factorScores");
            }
        }

        fields
    }
}

/// A submission as received from the caller.
#[derive(Debug, Clone, Default)]
pub struct SaveAssessment {
    pub responses: Vec<i64>,
    pub claimed: ClaimedAggregates,
    pub is_anonymous: bool,
    pub notes: Option<String>,
}

/// Domain service trait for assessments.
#[async_trait::async_trait]
pub trait AssessmentService: Send + Sync {
    /// Validates, scores and stores one submission for `user_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AssessmentError::Validation`] for malformed input and
    /// [`AssessmentError::StoreUnavailable`] if the insert fails.
    async fn save(
        &self,
        user_id: UserId,
        submission: SaveAssessment,
    ) -> Result<AssessmentId, AssessmentError>;

    /// Most recent assessments of `user_id`, newest first. Store failures
    /// yield an empty list.
    async fn history(&self, user_id: UserId, limit: u64) -> Result<Vec<Assessment>, AssessmentError>;

    /// One assessment, visible only to its owner.
    ///
    /// # Errors
    ///
    /// Returns [`AssessmentError::NotFound`] for unknown ids and for ids owned
    /// by someone else.
    async fn get(&self, user_id: UserId, id: AssessmentId) -> Result<Assessment, AssessmentError>;

    /// CSV report of one owned assessment.
    async fn export(&self, user_id: UserId, id: AssessmentId) -> Result<Vec<u8>, AssessmentError>;

    /// Scores responses without storing anything.
    fn preview(&self, responses: &[i64]) -> Result<ScoreReport, AssessmentError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::ResponseSet;

    fn report() -> ScoreReport {
        ResponseSet::try_from(vec![5; 90]).unwrap().score()
    }

    fn matching(report: &ScoreReport) -> ClaimedAggregates {
        ClaimedAggregates {
            total_score: Some(i64::from(report.total)),
            positive_item_count: Some(i64::from(report.positive_count)),
            average_score: Some(report.average.clone()),
            factor_scores: Some(report.factor_scores.clone()),
        }
    }

    #[test]
    fn absent_claims_never_mismatch() {
        assert!(ClaimedAggregates::default().mismatches(&report()).is_empty());
    }

    #[test]
    fn matching_claims_pass() {
        let report = report();
        assert!(matching(&report).mismatches(&report).is_empty());
    }

    #[test]
    fn wrong_total_is_reported() {
        let report = report();
        let claimed = ClaimedAggregates {
            total_score: Some(1),
            ..matching(&report)
        };
        assert_eq!(claimed.mismatches(&report), vec!["totalScore"]);
    }

    #[test]
    fn wrong_positive_count_is_reported() {
        let report = report();
        let claimed = ClaimedAggregates {
            positive_item_count: Some(89),
            ..matching(&report)
        };
        assert_eq!(claimed.mismatches(&report), vec!["positiveItemCount"]);
    }

    #[test]
    fn average_is_compared_after_formatting() {
        let report = report();

        let unformatted = ClaimedAggregates {
            average_score: Some("5".to_string()),
            ..matching(&report)
        };
        assert!(unformatted.mismatches(&report).is_empty());

        let wrong = ClaimedAggregates {
            average_score: Some("0.01".to_string()),
            ..matching(&report)
        };
        assert_eq!(wrong.mismatches(&report), vec!["averageScore"]);

        let garbage = ClaimedAggregates {
            average_score: Some("high".to_string()),
            ..matching(&report)
        };
        assert_eq!(garbage.mismatches(&report), vec!["averageScore"]);
    }

    #[test]
    fn factor_scores_tolerate_rounding_only() {
        let report = report();

        let mut rounded = report.factor_scores.clone();
        for score in rounded.values_mut() {
            *score += 0.004;
        }
        let close = ClaimedAggregates {
            factor_scores: Some(rounded),
            ..matching(&report)
        };
        assert!(close.mismatches(&report).is_empty());

        let mut off = report.factor_scores.clone();
        off.insert("躯体化".to_string(), 0.0);
        let wrong = ClaimedAggregates {
            factor_scores: Some(off),
            ..matching(&report)
        };
        assert_eq!(wrong.mismatches(&report), vec!["factorScores"]);
    }

    #[test]
    fn missing_factor_key_is_a_mismatch() {
        let report = report();
        let mut partial = report.factor_scores.clone();
        partial.remove("躯体化");

        let claimed = ClaimedAggregates {
            factor_scores: Some(partial),
            ..matching(&report)
        };
        assert_eq!(claimed.mismatches(&report), vec!["factorScores"]);
    }

    #[test]
    fn every_wrong_field_is_listed() {
        let claimed = ClaimedAggregates {
            total_score: Some(1),
            positive_item_count: Some(0),
            average_score: Some("0.01".to_string()),
            factor_scores: Some(BTreeMap::from([("躯体化".to_string(), 0.0)])),
        };
        assert_eq!(
            claimed.mismatches(&report()),
            vec!["totalScore", "positiveItemCount", "averageScore", "factorScores"]
        );
    }
}
