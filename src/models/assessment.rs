use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::{AssessmentId, UserId};
use crate::scoring::{ResponseSet, ScoreReport};

/// A stored assessment. Rows are never updated after insert.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub id: AssessmentId,
    pub user_id: UserId,
    pub responses: Vec<i64>,
    pub total_score: i32,
    pub positive_item_count: i32,
    pub average_score: String,
    pub factor_scores: BTreeMap<String, f64>,
    pub is_anonymous: bool,
    pub notes: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl Assessment {
    /// Rebuilds the validated response set, or `None` if the stored row is malformed.
    #[must_use]
    pub fn response_set(&self) -> Option<ResponseSet> {
        ResponseSet::try_from(self.responses.as_slice()).ok()
    }

    #[must_use]
    pub fn average_score_value(&self) -> f64 {
        self.average_score.parse().unwrap_or(0.0)
    }
}

/// Everything needed to insert one assessment. The report is always
/// computed from `responses` by the caller.
#[derive(Debug, Clone)]
pub struct NewAssessment {
    pub user_id: UserId,
    pub responses: ResponseSet,
    pub report: ScoreReport,
    pub is_anonymous: bool,
    pub notes: Option<String>,
}

impl NewAssessment {
    #[must_use]
    pub fn new(
        user_id: UserId,
        responses: ResponseSet,
        is_anonymous: bool,
        notes: Option<String>,
    ) -> Self {
        let report = responses.score();
        Self {
            user_id,
            responses,
            report,
            is_anonymous,
            notes,
        }
    }
}
