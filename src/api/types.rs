use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::catalog::{FACTORS, ITEMS, Item};
use crate::domain::{AssessmentId, Period};
use crate::models::analytics::{AnalyticsSummary, SummaryInput};
use crate::models::assessment::Assessment;
use crate::scoring::{FactorResult, ScoreReport};
use crate::services::{ClaimedAggregates, SaveAssessment};

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub const fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Outcome of a write that returns no record.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl MessageResponse {
    #[must_use]
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
        }
    }

    #[must_use]
    pub const fn bare() -> Self {
        Self {
            success: true,
            message: None,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveAssessmentRequest {
    pub responses: Vec<i64>,
    #[serde(default)]
    pub total_score: Option<i64>,
    #[serde(default)]
    pub positive_item_count: Option<i64>,
    #[serde(default)]
    pub average_score: Option<String>,
    #[serde(default)]
    pub factor_scores: Option<BTreeMap<String, f64>>,
    #[serde(default)]
    pub is_anonymous: bool,
    #[serde(default)]
    pub notes: Option<String>,
}

impl From<SaveAssessmentRequest> for SaveAssessment {
    fn from(req: SaveAssessmentRequest) -> Self {
        Self {
            responses: req.responses,
            claimed: ClaimedAggregates {
                total_score: req.total_score,
                positive_item_count: req.positive_item_count,
                average_score: req.average_score,
                factor_scores: req.factor_scores,
            },
            is_anonymous: req.is_anonymous,
            notes: req.notes,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LimitQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryItemDto {
    pub id: AssessmentId,
    pub total_score: i32,
    pub positive_item_count: i32,
    pub average_score: f64,
    pub factor_scores: BTreeMap<String, f64>,
    pub created_at: String,
}

impl From<Assessment> for HistoryItemDto {
    fn from(a: Assessment) -> Self {
        Self {
            id: a.id,
            total_score: a.total_score,
            positive_item_count: a.positive_item_count,
            average_score: a.average_score_value(),
            factor_scores: a.factor_scores,
            created_at: a.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub assessments: Vec<HistoryItemDto>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentDetailDto {
    pub id: AssessmentId,
    pub responses: Vec<i64>,
    pub total_score: i32,
    pub positive_item_count: i32,
    pub average_score: String,
    pub factor_scores: BTreeMap<String, f64>,
    pub factors: Vec<FactorResult>,
    pub is_anonymous: bool,
    pub notes: Option<String>,
    pub created_at: String,
}

impl From<Assessment> for AssessmentDetailDto {
    fn from(a: Assessment) -> Self {
        let factors = a
            .response_set()
            .map(|set| set.score().factors())
            .unwrap_or_default();

        Self {
            id: a.id,
            responses: a.responses,
            total_score: a.total_score,
            positive_item_count: a.positive_item_count,
            average_score: a.average_score,
            factor_scores: a.factor_scores,
            factors,
            is_anonymous: a.is_anonymous,
            notes: a.notes,
            created_at: a.created_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub responses: Vec<i64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScorePreviewDto {
    pub total_score: u32,
    pub positive_item_count: u32,
    pub average_score: String,
    pub factor_scores: BTreeMap<String, f64>,
    pub factors: Vec<FactorResult>,
}

impl From<ScoreReport> for ScorePreviewDto {
    fn from(report: ScoreReport) -> Self {
        let factors = report.factors();
        Self {
            total_score: report.total,
            positive_item_count: report.positive_count,
            average_score: report.average,
            factor_scores: report.factor_scores,
            factors,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FactorDto {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub item_ids: &'static [u8],
}

#[derive(Debug, Serialize)]
pub struct CatalogDto {
    pub items: &'static [Item],
    pub factors: Vec<FactorDto>,
}

impl CatalogDto {
    #[must_use]
    pub fn build() -> Self {
        Self {
            items: &ITEMS,
            factors: FACTORS
                .iter()
                .map(|f| FactorDto {
                    key: f.kind.key(),
                    name: f.name,
                    description: f.description,
                    item_ids: f.item_ids,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodEntryDto {
    pub date: String,
    pub total_assessments: i64,
    pub total_users: i64,
    pub average_total_score: f64,
    pub average_positive_items: f64,
    pub score_distribution: BTreeMap<String, f64>,
    pub factor_prevalence: BTreeMap<String, f64>,
}

impl From<AnalyticsSummary> for PeriodEntryDto {
    fn from(s: AnalyticsSummary) -> Self {
        Self {
            average_total_score: s.average_total_score_value(),
            average_positive_items: s.average_positive_items_value(),
            date: s.period_date,
            total_assessments: s.total_assessments,
            total_users: s.total_users,
            score_distribution: s.score_distribution,
            factor_prevalence: s.factor_prevalence,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PeriodResponse {
    pub period: Period,
    pub data: Vec<PeriodEntryDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRequest {
    pub total_assessments: i64,
    pub total_users: i64,
    pub average_total_score: String,
    pub average_positive_items: String,
    #[serde(default)]
    pub score_distribution: BTreeMap<String, f64>,
    #[serde(default)]
    pub factor_prevalence: BTreeMap<String, f64>,
}

impl From<SummaryRequest> for SummaryInput {
    fn from(req: SummaryRequest) -> Self {
        Self {
            total_assessments: req.total_assessments,
            total_users: req.total_users,
            average_total_score: req.average_total_score,
            average_positive_items: req.average_positive_items,
            score_distribution: req.score_distribution,
            factor_prevalence: req.factor_prevalence,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub uptime: u64,
    pub database: bool,
}
