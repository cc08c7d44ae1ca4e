//! Domain service for the public analytics dashboard and summary ingestion.

use thiserror::Error;

use crate::analytics::Overview;
use crate::domain::Period;
use crate::models::analytics::{AnalyticsSummary, SummaryInput};

/// Errors specific to analytics operations.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("No {period} summary for {date}")]
    NotFound { period: Period, date: String },

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),
}

/// Domain service trait for analytics.
#[async_trait::async_trait]
pub trait AnalyticsService: Send + Sync {
    /// Dashboard overview over the last seven daily summaries.
    async fn overview(&self) -> Result<Overview, AnalyticsError>;

    /// Most recent summaries of one granularity, newest first.
    async fn by_period(
        &self,
        period: Period,
        limit: u64,
    ) -> Result<Vec<AnalyticsSummary>, AnalyticsError>;

    /// One summary row.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticsError::Validation`] if `date` is not a label of
    /// `period`, and [`AnalyticsError::NotFound`] if no row exists.
    async fn get_summary(
        &self,
        period: Period,
        date: &str,
    ) -> Result<AnalyticsSummary, AnalyticsError>;

    /// Inserts or replaces one summary row.
    async fn put_summary(
        &self,
        period: Period,
        date: &str,
        input: SummaryInput,
    ) -> Result<AnalyticsSummary, AnalyticsError>;
}
