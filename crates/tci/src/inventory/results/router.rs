use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;
use uuid::Uuid;

use super::repository::{RepositoryError, ResultRepository};
use super::service::{AssessmentService, AssessmentServiceError, ResultSubmission};

/// Router builder exposing result submission and retrieval.
pub fn result_router<R>(service: Arc<AssessmentService<R>>) -> Router
where
    R: ResultRepository + 'static,
{
    Router::new()
        .route("/api/v1/results", post(submit_handler::<R>))
        .route("/api/v1/results/:result_id", get(fetch_handler::<R>))
        .with_state(service)
}

pub(crate) async fn submit_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    axum::Json(submission): axum::Json<ResultSubmission>,
) -> Response
where
    R: ResultRepository + 'static,
{
    match service.submit(submission) {
        Ok(record) => {
            let view = record.view(service.share_url(&record));
            (StatusCode::CREATED, axum::Json(view)).into_response()
        }
        Err(AssessmentServiceError::Scoring(error)) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
        }
        Err(AssessmentServiceError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({ "error": "result already exists" });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn fetch_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Path(result_id): Path<String>,
) -> Response
where
    R: ResultRepository + 'static,
{
    // A malformed id cannot name a stored result, so it reads as not-found
    // rather than a client syntax error.
    let Ok(id) = Uuid::parse_str(&result_id) else {
        return not_found();
    };

    match service.get(&id) {
        Ok(record) => {
            let view = record.view(service.share_url(&record));
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(AssessmentServiceError::Repository(RepositoryError::NotFound)) => not_found(),
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

fn not_found() -> Response {
    let payload = json!({ "error": "result not found" });
    (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
}
