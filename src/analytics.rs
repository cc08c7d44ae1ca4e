//! Dashboard aggregation over pre-computed daily summaries.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::analytics::AnalyticsSummary;
use crate::scoring::format_average;

/// Number of daily summaries the overview covers.
pub const OVERVIEW_WINDOW_DAYS: u64 = 7;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    pub total_assessments: i64,
    pub total_users: i64,
    pub average_total_score: String,
    pub average_positive_items: String,
    pub recent_trend: Vec<TrendPoint>,
    pub factor_prevalence: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub date: String,
    pub assessments: i64,
    pub avg_score: f64,
}

impl Overview {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            total_assessments: 0,
            total_users: 0,
            average_total_score: format_average(0.0),
            average_positive_items: format_average(0.0),
            recent_trend: Vec::new(),
            factor_prevalence: BTreeMap::new(),
        }
    }
}

/// Combines daily summaries, given newest first, into the dashboard overview.
///
/// Counts are summed. Averages are the plain mean of the per-day averages, not
/// re-weighted by assessment count. The trend runs oldest to newest and factor
/// prevalence is taken from the newest day alone.
#[must_use]
pub fn overview_from_daily(summaries: &[AnalyticsSummary]) -> Overview {
    let Some(latest) = summaries.first() else {
        return Overview::empty();
    };

    let days = summaries.len() as f64;
    let total_assessments = summaries.iter().map(|s| s.total_assessments).sum();
    let total_users = summaries.iter().map(|s| s.total_users).sum();
    let score_sum: f64 = summaries
        .iter()
        .map(AnalyticsSummary::average_total_score_value)
        .sum();
    let positive_sum: f64 = summaries
        .iter()
        .map(AnalyticsSummary::average_positive_items_value)
        .sum();

    let recent_trend = summaries
        .iter()
        .rev()
        .map(|s| TrendPoint {
            date: s.period_date.clone(),
            assessments: s.total_assessments,
            avg_score: s.average_total_score_value(),
        })
        .collect();

    Overview {
        total_assessments,
        total_users,
        average_total_score: format_average(score_sum / days),
        average_positive_items: format_average(positive_sum / days),
        recent_trend,
        factor_prevalence: latest.factor_prevalence.clone(),
    }
}
