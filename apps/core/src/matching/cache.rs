//! Per-session memoized match scores.
//!
//! The cache is exclusively owned by the orchestration layer. Recomputation
//! replaces the whole map in one synchronous pass, so a reader never sees a
//! mix of scores computed against old and new inputs.

use std::collections::HashMap;

use tracing::debug;
use uuid::Uuid;

use crate::matching::scorer::{score_job, MatchScore};
use crate::models::{AthleteProfile, HomeLocation, Job};

#[derive(Debug, Default)]
pub struct MatchCache {
    scores: HashMap<Uuid, MatchScore>,
}

impl MatchCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scores every job against the profile and swaps in the new map
    /// wholesale. With no profile (anonymous or non-athlete actor) the cache
    /// empties instead: lookups then mean "unranked", not "zero match".
    pub fn recompute(
        &mut self,
        jobs: &[Job],
        profile: Option<&AthleteProfile>,
        home: Option<&HomeLocation>,
    ) {
        let Some(profile) = profile else {
            self.scores.clear();
            return;
        };
        self.scores = jobs
            .iter()
            .map(|job| (job.id, score_job(job, profile, home)))
            .collect();
        debug!(jobs = jobs.len(), "match cache recomputed");
    }

    pub fn get(&self, job_id: Uuid) -> Option<&MatchScore> {
        self.scores.get(&job_id)
    }

    /// Score as used for ordering. Absent scores sort as 0; display code
    /// must use `get` so absence stays visible as "unranked".
    pub fn sort_key(&self, job_id: Uuid) -> u8 {
        self.scores.get(&job_id).map(|m| m.score).unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn clear(&mut self) {
        self.scores.clear();
    }
}
