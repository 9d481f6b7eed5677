use std::sync::Arc;

use chrono::Utc;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use super::repository::{RepositoryError, ResultRecord, ResultRepository};
use crate::config::SharingConfig;
use crate::inventory::scoring::{ResponseMap, ScoringEngine, ScoringError};

/// Incoming payload for a finished questionnaire. `responses` stays optional
/// so an absent map reaches the engine and surfaces its missing-input
/// failure instead of being conflated with an empty submission.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultSubmission {
    #[serde(default)]
    pub responses: Option<ResponseMap>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub is_public: bool,
}

/// Service composing the scoring engine with the result store: score, mint
/// identifiers, persist, and build share URLs.
pub struct AssessmentService<R> {
    engine: ScoringEngine,
    repository: Arc<R>,
    sharing: SharingConfig,
}

impl<R> AssessmentService<R>
where
    R: ResultRepository + 'static,
{
    pub fn new(engine: ScoringEngine, repository: Arc<R>, sharing: SharingConfig) -> Self {
        Self {
            engine,
            repository,
            sharing,
        }
    }

    pub fn engine(&self) -> &ScoringEngine {
        &self.engine
    }

    /// Score a submission and persist it, returning the stored record.
    pub fn submit(
        &self,
        submission: ResultSubmission,
    ) -> Result<ResultRecord, AssessmentServiceError> {
        let result = self.engine.score(submission.responses.as_ref())?;

        let language = submission
            .language
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| self.default_language());

        let record = ResultRecord {
            id: Uuid::new_v4(),
            responses: submission.responses.unwrap_or_default(),
            result,
            language,
            is_public: submission.is_public,
            share_token: Uuid::new_v4(),
            created_at: Utc::now(),
        };

        let stored = self.repository.insert(record)?;
        info!(result_id = %stored.id, all_valid = stored.result.validity.all_valid, "stored assessment result");
        Ok(stored)
    }

    /// Fetch a stored result by identifier.
    pub fn get(&self, id: &Uuid) -> Result<ResultRecord, AssessmentServiceError> {
        let record = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    /// Share URL for a stored result: absolute when a public base URL is
    /// configured, origin-relative otherwise.
    pub fn share_url(&self, record: &ResultRecord) -> String {
        match self.sharing.public_base_url.as_deref() {
            Some(base) => format!("{base}/results/{}", record.id),
            None => format!("/results/{}", record.id),
        }
    }

    fn default_language(&self) -> String {
        if self.sharing.default_language.is_empty() {
            "ko".to_string()
        } else {
            self.sharing.default_language.clone()
        }
    }
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error(transparent)]
    Scoring(#[from] ScoringError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
