use anyhow::{Context, Result};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use std::collections::BTreeMap;
use tracing::warn;

use crate::domain::{AssessmentId, UserId};
use crate::entities::{prelude::*, scl_assessments};
use crate::models::assessment::{Assessment, NewAssessment};
use crate::models::now_timestamp;

impl TryFrom<scl_assessments::Model> for Assessment {
    type Error = anyhow::Error;

    fn try_from(model: scl_assessments::Model) -> Result<Self> {
        let responses: Vec<i64> = serde_json::from_str(&model.responses)
            .with_context(|| format!("Corrupt responses on assessment {}", model.id))?;
        let factor_scores: BTreeMap<String, f64> = serde_json::from_str(&model.factor_scores)
            .with_context(|| format!("Corrupt factor scores on assessment {}", model.id))?;

        Ok(Self {
            id: AssessmentId::new(model.id),
            user_id: UserId::new(model.user_id),
            responses,
            total_score: model.total_score,
            positive_item_count: model.positive_item_count,
            average_score: model.average_score,
            factor_scores,
            is_anonymous: model.is_anonymous,
            notes: model.notes,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

pub struct AssessmentRepository {
    conn: DatabaseConnection,
}

impl AssessmentRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn insert(&self, assessment: &NewAssessment) -> Result<AssessmentId> {
        let now = now_timestamp();
        let report = &assessment.report;

        let active_model = scl_assessments::ActiveModel {
            user_id: Set(assessment.user_id.value()),
            responses: Set(serde_json::to_string(&assessment.responses.to_vec())?),
            total_score: Set(i32::try_from(report.total)?),
            positive_item_count: Set(i32::try_from(report.positive_count)?),
            average_score: Set(report.average.clone()),
            factor_scores: Set(serde_json::to_string(&report.factor_scores)?),
            is_anonymous: Set(assessment.is_anonymous),
            notes: Set(assessment.notes.clone()),
            created_at: Set(now.clone()),
            updated_at: Set(now),
            ..Default::default()
        };

        let model = active_model
            .insert(&self.conn)
            .await
            .context("Failed to insert assessment")?;

        Ok(AssessmentId::new(model.id))
    }

    /// Newest first; rows sharing a timestamp fall back to id order.
    pub async fn recent_for_user(&self, user_id: UserId, limit: u64) -> Result<Vec<Assessment>> {
        let rows = SclAssessments::find()
            .filter(scl_assessments::Column::UserId.eq(user_id.value()))
            .order_by_desc(scl_assessments::Column::CreatedAt)
            .order_by_desc(scl_assessments::Column::Id)
            .limit(limit)
            .all(&self.conn)
            .await
            .context("Failed to list assessments")?;

        Ok(rows
            .into_iter()
            .filter_map(|row| {
                let id = row.id;
                Assessment::try_from(row)
                    .inspect_err(|e| {
                        warn!(assessment_id = id, error = %e, "Skipping corrupt assessment row");
                    })
                    .ok()
            })
            .collect())
    }

    pub async fn get(&self, id: AssessmentId) -> Result<Option<Assessment>> {
        let row = SclAssessments::find_by_id(id.value())
            .one(&self.conn)
            .await
            .context("Failed to query assessment")?;

        row.map(Assessment::try_from).transpose()
    }
}
