//! Persistence boundary and HTTP surface for calculated results.

pub mod repository;
pub mod router;
pub mod service;

pub use repository::{RepositoryError, ResultRecord, ResultRepository, ResultView};
pub use router::result_router;
pub use service::{AssessmentService, AssessmentServiceError, ResultSubmission};
