//! Job application submission boundary.
//!
//! Uploads the applicant's documents, snapshots the match score at
//! application time, writes the application record, bumps the job's
//! applicant count and clears any saved draft. Uniqueness over
//! (job, applicant) is enforced here, not by the data model.

use std::sync::Arc;

use bytes::Bytes;
use chrono::Utc;
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use crate::auth::AuthSession;
use crate::drafts::{clear_draft, DraftKey, DraftStore};
use crate::errors::CoreError;
use crate::matching::MatchScore;
use crate::models::{ApplicationStatus, Job, JobApplication};
use crate::storage::ObjectStorage;
use crate::store::{MemoryStore, Query};

pub struct SubmitRequest {
    pub job_id: Uuid,
    pub resume: Bytes,
    pub cover_letter: Option<Bytes>,
    pub custom_answers: Value,
    /// Score computed by the caller's session cache at submission time.
    pub match_score: Option<MatchScore>,
}

pub struct ApplicationService {
    store: MemoryStore,
    storage: Arc<dyn ObjectStorage>,
    drafts: Arc<dyn DraftStore>,
}

impl ApplicationService {
    pub fn new(
        store: MemoryStore,
        storage: Arc<dyn ObjectStorage>,
        drafts: Arc<dyn DraftStore>,
    ) -> Self {
        Self {
            store,
            storage,
            drafts,
        }
    }

    pub async fn submit(
        &self,
        session: AuthSession,
        request: SubmitRequest,
    ) -> Result<JobApplication, CoreError> {
        let applicant_id = session.actor_id;
        let job = self
            .store
            .jobs
            .get(request.job_id)
            .ok_or_else(|| CoreError::NotFound(format!("job {}", request.job_id)))?;
        if !job.is_active {
            return Err(CoreError::Validation(format!(
                "job {} is no longer active",
                job.id
            )));
        }
        self.reject_duplicate(&job, applicant_id)?;

        let resume_url = self
            .storage
            .put(
                &format!("applications/{}/{}/resume.pdf", job.id, applicant_id),
                request.resume,
            )
            .await?;
        let cover_letter_url = match request.cover_letter {
            Some(data) => Some(
                self.storage
                    .put(
                        &format!("applications/{}/{}/cover-letter.pdf", job.id, applicant_id),
                        data,
                    )
                    .await?,
            ),
            None => None,
        };

        let now = Utc::now();
        let application = JobApplication {
            id: Uuid::new_v4(),
            job_id: job.id,
            applicant_id,
            status: ApplicationStatus::Pending,
            resume_url,
            cover_letter_url,
            custom_answers: request.custom_answers,
            applied_at: now,
            last_updated: now,
            match_percentage: request.match_score.map(|m| m.score),
        };

        self.store.job_applications.insert(application.clone())?;
        // The count bump and draft cleanup follow the insert. Jobs are only
        // ever soft-deleted via `is_active`, and the posting's existence was
        // checked above, so `update_with` cannot miss; if that ever changes
        // these steps need a compensating delete of the application.
        self.store
            .jobs
            .update_with(job.id, |j| j.applicant_count += 1)?;
        clear_draft(
            self.drafts.as_ref(),
            &DraftKey::new(job.id, applicant_id),
        )?;

        info!(job = %job.id, applicant = %applicant_id, "application submitted");
        Ok(application)
    }

    /// Moves an application through its status graph. Invalid transitions
    /// error without touching the record.
    pub fn advance_status(
        &self,
        application_id: Uuid,
        to: ApplicationStatus,
    ) -> Result<(), CoreError> {
        let application = self
            .store
            .job_applications
            .get(application_id)
            .ok_or_else(|| CoreError::NotFound(format!("application {application_id}")))?;
        if !application.status.can_transition_to(to) {
            return Err(CoreError::InvalidTransition {
                from: application.status,
                to,
            });
        }
        self.store.job_applications.update_with(application_id, |a| {
            a.status = to;
            a.last_updated = Utc::now();
        })
    }

    fn reject_duplicate(&self, job: &Job, applicant_id: Uuid) -> Result<(), CoreError> {
        let job_id = job.id;
        let existing = self.store.job_applications.fetch(
            &Query::new()
                .filter(move |a: &JobApplication| {
                    a.job_id == job_id && a.applicant_id == applicant_id
                })
                .limit(1),
        );
        if existing.is_empty() {
            Ok(())
        } else {
            Err(CoreError::DuplicateApplication {
                job_id,
                applicant_id,
            })
        }
    }
}
