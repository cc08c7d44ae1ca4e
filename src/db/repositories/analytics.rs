use anyhow::{Context, Result};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};
use tracing::warn;

use crate::domain::Period;
use crate::entities::{prelude::*, scl_analytics_summary};
use crate::models::analytics::{AnalyticsSummary, SummaryInput};
use crate::models::now_timestamp;

impl TryFrom<scl_analytics_summary::Model> for AnalyticsSummary {
    type Error = anyhow::Error;

    fn try_from(model: scl_analytics_summary::Model) -> Result<Self> {
        let period = model
            .period
            .parse::<Period>()
            .map_err(anyhow::Error::msg)?;

        Ok(Self {
            period,
            score_distribution: serde_json::from_str(&model.score_distribution)
                .with_context(|| format!("Corrupt score distribution on {}", model.period_date))?,
            factor_prevalence: serde_json::from_str(&model.factor_prevalence)
                .with_context(|| format!("Corrupt factor prevalence on {}", model.period_date))?,
            period_date: model.period_date,
            total_assessments: model.total_assessments,
            total_users: model.total_users,
            average_total_score: model.average_total_score,
            average_positive_items: model.average_positive_items,
            updated_at: model.updated_at,
        })
    }
}

pub struct AnalyticsRepository {
    conn: DatabaseConnection,
}

impl AnalyticsRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Most recent summaries of one granularity, newest `period_date` first.
    pub async fn recent_by_period(
        &self,
        period: Period,
        limit: u64,
    ) -> Result<Vec<AnalyticsSummary>> {
        let rows = SclAnalyticsSummary::find()
            .filter(scl_analytics_summary::Column::Period.eq(period.as_str()))
            .order_by_desc(scl_analytics_summary::Column::PeriodDate)
            .limit(limit)
            .all(&self.conn)
            .await
            .context("Failed to list analytics summaries")?;

        Ok(rows
            .into_iter()
            .filter_map(|row| {
                let period_date = row.period_date.clone();
                AnalyticsSummary::try_from(row)
                    .inspect_err(|e| {
                        warn!(period_date = %period_date, error = %e, "Skipping corrupt summary row");
                    })
                    .ok()
            })
            .collect())
    }

    pub async fn get(&self, period: Period, period_date: &str) -> Result<Option<AnalyticsSummary>> {
        let row = SclAnalyticsSummary::find()
            .filter(scl_analytics_summary::Column::Period.eq(period.as_str()))
            .filter(scl_analytics_summary::Column::PeriodDate.eq(period_date))
            .one(&self.conn)
            .await
            .context("Failed to query analytics summary")?;

        row.map(AnalyticsSummary::try_from).transpose()
    }

    /// Inserts or replaces the summary for `(period, period_date)`.
    pub async fn upsert(
        &self,
        period: Period,
        period_date: &str,
        input: &SummaryInput,
    ) -> Result<AnalyticsSummary> {
        let active_model = scl_analytics_summary::ActiveModel {
            period: Set(period.as_str().to_string()),
            period_date: Set(period_date.to_string()),
            total_assessments: Set(input.total_assessments),
            total_users: Set(input.total_users),
            average_total_score: Set(input.average_total_score.clone()),
            average_positive_items: Set(input.average_positive_items.clone()),
            score_distribution: Set(serde_json::to_string(&input.score_distribution)?),
            factor_prevalence: Set(serde_json::to_string(&input.factor_prevalence)?),
            updated_at: Set(now_timestamp()),
            ..Default::default()
        };

        SclAnalyticsSummary::insert(active_model)
            .on_conflict(
                sea_orm::sea_query::OnConflict::columns([
                    scl_analytics_summary::Column::Period,
                    scl_analytics_summary::Column::PeriodDate,
                ])
                .update_columns([
                    scl_analytics_summary::Column::TotalAssessments,
                    scl_analytics_summary::Column::TotalUsers,
                    scl_analytics_summary::Column::AverageTotalScore,
                    scl_analytics_summary::Column::AveragePositiveItems,
                    scl_analytics_summary::Column::ScoreDistribution,
                    scl_analytics_summary::Column::FactorPrevalence,
                    scl_analytics_summary::Column::UpdatedAt,
                ])
                .to_owned(),
            )
            .exec(&self.conn)
            .await
            .context("Failed to upsert analytics summary")?;

        self.get(period, period_date)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Summary {period}/{period_date} missing after upsert"))
    }
}
