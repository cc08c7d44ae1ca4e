use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::Period;

/// One pre-aggregated row of dashboard statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    pub period: Period,
    pub period_date: String,
    pub total_assessments: i64,
    pub total_users: i64,
    pub average_total_score: String,
    pub average_positive_items: String,
    pub score_distribution: BTreeMap<String, f64>,
    pub factor_prevalence: BTreeMap<String, f64>,
    pub updated_at: String,
}

impl AnalyticsSummary {
    /// Stored averages are decimal strings. Unparseable values read as zero.
    #[must_use]
    pub fn average_total_score_value(&self) -> f64 {
        self.average_total_score.trim().parse().unwrap_or(0.0)
    }

    #[must_use]
    pub fn average_positive_items_value(&self) -> f64 {
        self.average_positive_items.trim().parse().unwrap_or(0.0)
    }
}

/// Summary fields supplied by the materializer on ingestion.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryInput {
    pub total_assessments: i64,
    pub total_users: i64,
    pub average_total_score: String,
    pub average_positive_items: String,
    pub score_distribution: BTreeMap<String, f64>,
    pub factor_prevalence: BTreeMap<String, f64>,
}
