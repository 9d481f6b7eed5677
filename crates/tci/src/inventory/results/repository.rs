use crate::inventory::scoring::{CalculatedResult, ResponseMap};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored assessment: the raw responses and the calculated result, kept
/// verbatim side by side under a generated identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultRecord {
    pub id: Uuid,
    pub responses: ResponseMap,
    pub result: CalculatedResult,
    pub language: String,
    pub is_public: bool,
    pub share_token: Uuid,
    pub created_at: DateTime<Utc>,
}

impl ResultRecord {
    /// Shape returned by the HTTP surface; the share URL is minted by the
    /// service, the rest comes straight off the record.
    pub fn view(&self, share_url: String) -> ResultView {
        ResultView {
            id: self.id,
            created_at: self.created_at,
            language: self.language.clone(),
            is_public: self.is_public,
            result: self.result.clone(),
            share_url,
        }
    }
}

/// Storage abstraction so the service can be exercised without a backing
/// document store; the concrete implementation lives with the API service.
pub trait ResultRepository: Send + Sync {
    fn insert(&self, record: ResultRecord) -> Result<ResultRecord, RepositoryError>;
    fn fetch(&self, id: &Uuid) -> Result<Option<ResultRecord>, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("result already exists")]
    Conflict,
    #[error("result not found")]
    NotFound,
    #[error("result store unavailable: {0}")]
    Unavailable(String),
}

/// Sanitized representation of a stored result for API responses.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultView {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub language: String,
    pub is_public: bool,
    pub result: CalculatedResult,
    pub share_url: String,
}
