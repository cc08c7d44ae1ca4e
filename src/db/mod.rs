use anyhow::Result;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use std::path::Path;
use std::time::Duration;
use tracing::info;

use crate::domain::{AssessmentId, Period, UserId};
use crate::models::analytics::{AnalyticsSummary, SummaryInput};
use crate::models::assessment::{Assessment, NewAssessment};
use crate::models::user::{LoginIdentity, User};

pub mod migrator;
pub mod repositories;

/// Pooled database handle. Cheap to clone; every clone shares the pool.
#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Self> {
        Self::with_pool_options(db_url, 5, 1).await
    }

    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        if !db_url.contains(":memory:") {
            let path_str = db_url
                .trim_start_matches("sqlite://")
                .trim_start_matches("sqlite:");
            let path_str = path_str.split('?').next().unwrap_or(path_str);
            if let Some(parent) = Path::new(path_str).parent() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)?;
            }
        }

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(600))
            .sqlx_logging(false);

        let conn = Database::connect(opt).await?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    pub async fn ping(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        self.conn
            .query_one(Statement::from_string(backend, "SELECT 1".to_string()))
            .await?;
        Ok(())
    }

    fn user_repo(&self) -> repositories::user::UserRepository {
        repositories::user::UserRepository::new(self.conn.clone())
    }

    fn assessment_repo(&self) -> repositories::assessment::AssessmentRepository {
        repositories::assessment::AssessmentRepository::new(self.conn.clone())
    }

    fn analytics_repo(&self) -> repositories::analytics::AnalyticsRepository {
        repositories::analytics::AnalyticsRepository::new(self.conn.clone())
    }

    pub async fn upsert_login(
        &self,
        identity: &LoginIdentity,
        owner_open_id: Option<&str>,
    ) -> Result<User> {
        self.user_repo().upsert_login(identity, owner_open_id).await
    }

    pub async fn get_user(&self, id: UserId) -> Result<Option<User>> {
        self.user_repo().get_by_id(id).await
    }

    pub async fn insert_assessment(&self, assessment: &NewAssessment) -> Result<AssessmentId> {
        self.assessment_repo().insert(assessment).await
    }

    pub async fn recent_assessments(&self, user_id: UserId, limit: u64) -> Result<Vec<Assessment>> {
        self.assessment_repo().recent_for_user(user_id, limit).await
    }

    pub async fn get_assessment(&self, id: AssessmentId) -> Result<Option<Assessment>> {
        self.assessment_repo().get(id).await
    }

    pub async fn recent_summaries(
        &self,
        period: Period,
        limit: u64,
    ) -> Result<Vec<AnalyticsSummary>> {
        self.analytics_repo().recent_by_period(period, limit).await
    }

    pub async fn get_summary(
        &self,
        period: Period,
        period_date: &str,
    ) -> Result<Option<AnalyticsSummary>> {
        self.analytics_repo().get(period, period_date).await
    }

    pub async fn upsert_summary(
        &self,
        period: Period,
        period_date: &str,
        input: &SummaryInput,
    ) -> Result<AnalyticsSummary> {
        self.analytics_repo().upsert(period, period_date, input).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Role;
    use crate::scoring::ResponseSet;
    use std::collections::BTreeMap;

    async fn memory_store() -> Store {
        Store::with_pool_options("sqlite::memory:", 1, 1).await.unwrap()
    }

    fn identity(open_id: &str) -> LoginIdentity {
        LoginIdentity {
            open_id: open_id.to_string(),
            name: Some("Test".to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn login_upsert_keeps_one_row_per_identity() {
        let store = memory_store().await;

        let first = store.upsert_login(&identity("abc"), None).await.unwrap();
        let second = store
            .upsert_login(
                &LoginIdentity {
                    open_id: "abc".to_string(),
                    email: Some("a@example.com".to_string()),
                    ..Default::default()
                },
                None,
            )
            .await
            .unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(second.name.as_deref(), Some("Test"));
        assert_eq!(second.email.as_deref(), Some("a@example.com"));
        assert_eq!(second.role, Role::User);
        assert!(second.last_signed_in >= first.last_signed_in);
    }

    #[tokio::test]
    async fn owner_is_promoted() {
        let store = memory_store().await;

        let plain = store.upsert_login(&identity("owner"), None).await.unwrap();
        assert_eq!(plain.role, Role::User);

        let promoted = store
            .upsert_login(&identity("owner"), Some("owner"))
            .await
            .unwrap();
        assert_eq!(promoted.role, Role::Admin);

        let other = store
            .upsert_login(&identity("someone"), Some("owner"))
            .await
            .unwrap();
        assert_eq!(other.role, Role::User);
    }

    #[tokio::test]
    async fn assessments_round_trip_newest_first() {
        let store = memory_store().await;
        let user = store.upsert_login(&identity("u1"), None).await.unwrap();

        for value in [1, 2, 3] {
            let responses = ResponseSet::try_from(vec![value; 90]).unwrap();
            let new = NewAssessment::new(user.id, responses, false, None);
            store.insert_assessment(&new).await.unwrap();
        }

        let recent = store.recent_assessments(user.id, 2).await.unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].total_score, 270);
        assert_eq!(recent[1].total_score, 180);
        assert_eq!(recent[0].responses.len(), 90);
        assert_eq!(recent[0].factor_scores.len(), 10);

        let fetched = store.get_assessment(recent[0].id).await.unwrap().unwrap();
        assert_eq!(fetched, recent[0]);
        assert!(store
            .get_assessment(AssessmentId::new(999))
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn summary_upsert_replaces_existing_row() {
        let store = memory_store().await;
        let mut input = SummaryInput {
            total_assessments: 3,
            total_users: 2,
            average_total_score: "150.00".to_string(),
            average_positive_items: "20.00".to_string(),
            score_distribution: BTreeMap::new(),
            factor_prevalence: BTreeMap::from([("抑郁".to_string(), 0.5)]),
        };

        store
            .upsert_summary(Period::Daily, "2026-02-10", &input)
            .await
            .unwrap();
        input.total_assessments = 5;
        let stored = store
            .upsert_summary(Period::Daily, "2026-02-10", &input)
            .await
            .unwrap();

        assert_eq!(stored.total_assessments, 5);
        let all = store.recent_summaries(Period::Daily, 10).await.unwrap();
        assert_eq!(all.len(), 1);
        assert!(store
            .recent_summaries(Period::Weekly, 10)
            .await
            .unwrap()
            .is_empty());
    }

    async fn corrupt(store: &Store, sql: &str) {
        let backend = store.conn.get_database_backend();
        store
            .conn
            .execute(Statement::from_string(backend, sql.to_string()))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn corrupt_assessment_rows_are_skipped_in_history() {
        let store = memory_store().await;
        let user = store.upsert_login(&identity("u1"), None).await.unwrap();

        let mut ids = Vec::new();
        for value in [1, 2] {
            let responses = ResponseSet::try_from(vec![value; 90]).unwrap();
            let new = NewAssessment::new(user.id, responses, false, None);
            ids.push(store.insert_assessment(&new).await.unwrap());
        }
        corrupt(
            &store,
            &format!("UPDATE scl_assessments SET responses = 'oops' WHERE id = {}", ids[1]),
        )
        .await;

        let recent = store.recent_assessments(user.id, 10).await.unwrap();
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].id, ids[0]);
        assert!(store.get_assessment(ids[1]).await.is_err());
    }

    #[tokio::test]
    async fn corrupt_summary_rows_are_skipped_in_listings() {
        let store = memory_store().await;
        let input = SummaryInput {
            total_assessments: 1,
            total_users: 1,
            average_total_score: "100.00".to_string(),
            average_positive_items: "10.00".to_string(),
            score_distribution: BTreeMap::new(),
            factor_prevalence: BTreeMap::new(),
        };
        for date in ["2026-02-10", "2026-02-11"] {
            store.upsert_summary(Period::Daily, date, &input).await.unwrap();
        }
        corrupt(
            &store,
            "UPDATE scl_analytics_summary SET factor_prevalence = '{' WHERE period_date = '2026-02-11'",
        )
        .await;

        let all = store.recent_summaries(Period::Daily, 10).await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].period_date, "2026-02-10");
    }
}
