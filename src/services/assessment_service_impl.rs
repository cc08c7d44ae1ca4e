//! `SeaORM` implementation of the `AssessmentService` trait.

use async_trait::async_trait;
use tracing::{info, warn};

use crate::db::Store;
use crate::domain::{AssessmentId, UserId};
use crate::models::assessment::{Assessment, NewAssessment};
use crate::scoring::{ResponseSet, ScoreReport};
use crate::services::assessment_service::{
    AssessmentError, AssessmentService, MAX_NOTES_CHARS, SaveAssessment,
};

pub struct SeaOrmAssessmentService {
    store: Store,
}

impl SeaOrmAssessmentService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }

    fn validate(submission: &SaveAssessment) -> Result<ResponseSet, AssessmentError> {
        let responses = ResponseSet::try_from(submission.responses.as_slice())?;

        if submission.claimed.total_score.is_some_and(|v| v < 0) {
            return Err(AssessmentError::Validation(
                "totalScore must be non-negative".to_string(),
            ));
        }
        if submission.claimed.positive_item_count.is_some_and(|v| v < 0) {
            return Err(AssessmentError::Validation(
                "positiveItemCount must be non-negative".to_string(),
            ));
        }
        if let Some(notes) = &submission.notes
            && notes.chars().count() > MAX_NOTES_CHARS
        {
            return Err(AssessmentError::Validation(format!(
                "notes must be {MAX_NOTES_CHARS} characters or less"
            )));
        }

        Ok(responses)
    }

    async fn owned(&self, user_id: UserId, id: AssessmentId) -> Result<Assessment, AssessmentError> {
        let assessment = self
            .store
            .get_assessment(id)
            .await
            .map_err(|e| AssessmentError::StoreUnavailable(e.to_string()))?
            .ok_or(AssessmentError::NotFound(id))?;

        // Foreign rows look exactly like missing ones.
        if assessment.user_id != user_id {
            return Err(AssessmentError::NotFound(id));
        }

        Ok(assessment)
    }
}

#[async_trait]
impl AssessmentService for SeaOrmAssessmentService {
    async fn save(
        &self,
        user_id: UserId,
        submission: SaveAssessment,
    ) -> Result<AssessmentId, AssessmentError> {
        let responses = Self::validate(&submission)?;
        let notes = submission.notes.filter(|n| !n.trim().is_empty());
        let new = NewAssessment::new(user_id, responses, submission.is_anonymous, notes);

        let mismatched = submission.claimed.mismatches(&new.report);
        if !mismatched.is_empty() {
            metrics::counter!("assessment_aggregate_mismatch_total").increment(1);
            warn!(
                user_id = %user_id,
                fields = ?mismatched,
                "Client aggregates disagree with server scoring, keeping server values"
            );
        }

        let id = self
            .store
            .insert_assessment(&new)
            .await
            .map_err(|e| AssessmentError::StoreUnavailable(e.to_string()))?;

        metrics::counter!("assessments_saved_total").increment(1);
        info!(
            user_id = %user_id,
            assessment_id = %id,
            total_score = new.report.total,
            "Assessment saved"
        );

        Ok(id)
    }

    async fn history(&self, user_id: UserId, limit: u64) -> Result<Vec<Assessment>, AssessmentError> {
        match self.store.recent_assessments(user_id, limit).await {
            Ok(assessments) => Ok(assessments),
            Err(e) => {
                warn!(user_id = %user_id, error = %e, "Failed to load assessment history");
                Ok(Vec::new())
            }
        }
    }

    async fn get(&self, user_id: UserId, id: AssessmentId) -> Result<Assessment, AssessmentError> {
        self.owned(user_id, id).await
    }

    async fn export(&self, user_id: UserId, id: AssessmentId) -> Result<Vec<u8>, AssessmentError> {
        let assessment = self.owned(user_id, id).await?;
        let responses = assessment.response_set().ok_or_else(|| {
            AssessmentError::Internal(format!("Assessment {id} has malformed responses"))
        })?;

        crate::export::render_report(&responses)
            .map_err(|e| AssessmentError::Internal(e.to_string()))
    }

    fn preview(&self, responses: &[i64]) -> Result<ScoreReport, AssessmentError> {
        Ok(ResponseSet::try_from(responses)?.score())
    }
}
