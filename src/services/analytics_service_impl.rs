//! `SeaORM` implementation of the `AnalyticsService` trait.

use async_trait::async_trait;
use tracing::{info, warn};

use crate::analytics::{OVERVIEW_WINDOW_DAYS, Overview, overview_from_daily};
use crate::db::Store;
use crate::domain::Period;
use crate::models::analytics::{AnalyticsSummary, SummaryInput};
use crate::services::analytics_service::{AnalyticsError, AnalyticsService};

pub struct SeaOrmAnalyticsService {
    store: Store,
}

impl SeaOrmAnalyticsService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }

    async fn recent(&self, period: Period, limit: u64) -> Vec<AnalyticsSummary> {
        match self.store.recent_summaries(period, limit).await {
            Ok(summaries) => summaries,
            Err(e) => {
                warn!(period = %period, error = %e, "Failed to load analytics summaries");
                Vec::new()
            }
        }
    }

    fn validate_input(input: &SummaryInput) -> Result<(), AnalyticsError> {
        if input.total_assessments < 0 || input.total_users < 0 {
            return Err(AnalyticsError::Validation(
                "Counts must be non-negative".to_string(),
            ));
        }

        for (field, value) in [
            ("averageTotalScore", &input.average_total_score),
            ("averagePositiveItems", &input.average_positive_items),
        ] {
            let parsed = value.trim().parse::<f64>();
            if !parsed.is_ok_and(|v| v.is_finite() && v >= 0.0) || value.len() > 10 {
                return Err(AnalyticsError::Validation(format!(
                    "{field} must be a non-negative decimal string, got '{value}'"
                )));
            }
        }

        let all_values = input
            .score_distribution
            .values()
            .chain(input.factor_prevalence.values());
        for value in all_values {
            if !value.is_finite() || *value < 0.0 {
                return Err(AnalyticsError::Validation(
                    "Distribution and prevalence values must be non-negative numbers".to_string(),
                ));
            }
        }

        Ok(())
    }
}

#[async_trait]
impl AnalyticsService for SeaOrmAnalyticsService {
    async fn overview(&self) -> Result<Overview, AnalyticsError> {
        let daily = self.recent(Period::Daily, OVERVIEW_WINDOW_DAYS).await;
        Ok(overview_from_daily(&daily))
    }

    async fn by_period(
        &self,
        period: Period,
        limit: u64,
    ) -> Result<Vec<AnalyticsSummary>, AnalyticsError> {
        Ok(self.recent(period, limit).await)
    }

    async fn get_summary(
        &self,
        period: Period,
        date: &str,
    ) -> Result<AnalyticsSummary, AnalyticsError> {
        period.validate_date(date).map_err(AnalyticsError::Validation)?;

        let summary = match self.store.get_summary(period, date).await {
            Ok(summary) => summary,
            Err(e) => {
                warn!(period = %period, date, error = %e, "Failed to load analytics summary");
                None
            }
        };

        summary.ok_or_else(|| AnalyticsError::NotFound {
            period,
            date: date.to_string(),
        })
    }

    async fn put_summary(
        &self,
        period: Period,
        date: &str,
        input: SummaryInput,
    ) -> Result<AnalyticsSummary, AnalyticsError> {
        period.validate_date(date).map_err(AnalyticsError::Validation)?;
        Self::validate_input(&input)?;

        let summary = self
            .store
            .upsert_summary(period, date, &input)
            .await
            .map_err(|e| AnalyticsError::StoreUnavailable(e.to_string()))?;

        info!(period = %period, date, "Analytics summary stored");
        Ok(summary)
    }
}
