use thiserror::Error;
use uuid::Uuid;

use crate::models::ApplicationStatus;

/// Error type shared across the core. The matching subsystem itself never
/// fails; these variants come from the boundary layers (validation,
/// application submission, storage, drafts).
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate application: applicant {applicant_id} already applied to job {job_id}")]
    DuplicateApplication { job_id: Uuid, applicant_id: Uuid },

    #[error("Invalid status transition: {from:?} -> {to:?}")]
    InvalidTransition {
        from: ApplicationStatus,
        to: ApplicationStatus,
    },

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Draft serialization error: {0}")]
    Draft(#[from] serde_json::Error),
}
