use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "scl_analytics_summary")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// "daily", "weekly" or "monthly"
    pub period: String,

    /// "2026-02-11", "2026-W06" or "2026-02"
    pub period_date: String,

    pub total_assessments: i64,

    pub total_users: i64,

    pub average_total_score: String,

    pub average_positive_items: String,

    /// JSON object
    pub score_distribution: String,

    /// JSON object
    pub factor_prevalence: String,

    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
