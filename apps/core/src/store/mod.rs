pub mod memory;
pub mod query;

pub use memory::{Collection, Document, Subscription};
pub use query::Query;

use uuid::Uuid;

use crate::config::Config;
use crate::models::{AthleteProfile, Job, JobApplication, NilOpportunity, User};

impl Document for User {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Document for AthleteProfile {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Document for Job {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Document for JobApplication {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Document for NilOpportunity {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// The five entity collections the platform reads and writes. Cheap to
/// clone; clones share the underlying collections.
#[derive(Clone)]
pub struct MemoryStore {
    pub users: Collection<User>,
    pub athlete_profiles: Collection<AthleteProfile>,
    pub jobs: Collection<Job>,
    pub job_applications: Collection<JobApplication>,
    pub nil_opportunities: Collection<NilOpportunity>,
    max_results: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    pub fn with_config(config: &Config) -> Self {
        Self {
            users: Collection::new("users"),
            athlete_profiles: Collection::new("athlete_profiles"),
            jobs: Collection::new("jobs"),
            job_applications: Collection::new("job_applications"),
            nil_opportunities: Collection::new("nil_opportunities"),
            max_results: config.max_results,
        }
    }

    /// Active jobs, newest first, capped at the configured result limit.
    /// The discovery-surface query.
    pub fn active_jobs(&self) -> Query<Job> {
        Query::new()
            .filter(|j: &Job| j.is_active)
            .order_by_desc(|j: &Job| j.created_at)
            .limit(self.max_results)
    }

    /// Active NIL opportunities, newest first.
    pub fn active_opportunities(&self) -> Query<NilOpportunity> {
        Query::new()
            .filter(|o: &NilOpportunity| o.is_active)
            .order_by_desc(|o: &NilOpportunity| o.created_at)
            .limit(self.max_results)
    }

    /// The athlete profile owned by `user_id`, if any.
    pub fn athlete_profile_for(&self, user_id: Uuid) -> Option<AthleteProfile> {
        self.athlete_profiles
            .fetch(&Query::new().filter(move |p: &AthleteProfile| p.user_id == user_id).limit(1))
            .into_iter()
            .next()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}
