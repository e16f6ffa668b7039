//! Job-board orchestration: one athlete session's view of the posting set.
//!
//! Owns the match cache and the current filter configuration. Fed from the
//! active-jobs subscription and the athlete-profile lookup; every push of a
//! replacement job sequence goes through `refresh`, and `results` produces
//! the final displayed ordering.

use tracing::debug;
use uuid::Uuid;

use crate::matching::{rank_jobs, JobFilters, MatchCache, MatchScore};
use crate::models::{AthleteProfile, HomeLocation, Job};

#[derive(Default)]
pub struct JobBoard {
    cache: MatchCache,
    filters: JobFilters,
}

impl JobBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_filters(&mut self, filters: JobFilters) {
        self.filters = filters;
    }

    pub fn clear_filters(&mut self) {
        self.filters = JobFilters::default();
    }

    pub fn filters(&self) -> &JobFilters {
        &self.filters
    }

    /// Recomputes scores against the latest job sequence and profile. Called
    /// whenever either changes; the cache swap is atomic from the reader's
    /// side.
    pub fn refresh(
        &mut self,
        jobs: &[Job],
        profile: Option<&AthleteProfile>,
        home: Option<&HomeLocation>,
    ) {
        self.cache.recompute(jobs, profile, home);
        debug!(jobs = jobs.len(), ranked = self.cache.len(), "board refreshed");
    }

    /// Filters then ranks. Unscored jobs sort last (as 0) but stay unranked
    /// for display.
    pub fn results(&self, jobs: &[Job]) -> Vec<Job> {
        rank_jobs(jobs, &self.filters, &self.cache)
    }

    /// Score lookup for one posting. `None` means "unranked", never "zero".
    pub fn score(&self, job_id: Uuid) -> Option<&MatchScore> {
        self.cache.get(job_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EmploymentType, ExperienceLevel, Sector};
    use chrono::Utc;

    fn job(title: &str, sport: Option<&str>) -> Job {
        Job {
            id: Uuid::new_v4(),
            title: title.to_string(),
            company: "Apex Sports".to_string(),
            description: "Role description".to_string(),
            requirements: vec![],
            location: "Mumbai, Maharashtra".to_string(),
            city: None,
            state: None,
            salary: "₹9L".to_string(),
            employment_type: EmploymentType::FullTime,
            sport: sport.map(str::to_string),
            experience_level: ExperienceLevel::Mid,
            posted_by: Uuid::new_v4(),
            created_at: Utc::now(),
            application_deadline: Utc::now(),
            is_active: true,
            sector: Sector::Private,
            applicant_count: 0,
        }
    }

    fn profile(sport: &str) -> AthleteProfile {
        AthleteProfile {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            sport: sport.to_string(),
            position: None,
            achievements: vec![],
            education: vec![],
            experience: vec![],
            nil_earnings: 0.0,
            followers: 0,
            highlights: vec![],
            social_media: None,
        }
    }

    #[test]
    fn test_anonymous_board_is_unranked_but_listed() {
        let jobs = vec![job("A", Some("Cricket")), job("B", None)];
        let mut board = JobBoard::new();
        board.refresh(&jobs, None, None);

        let results = board.results(&jobs);
        assert_eq!(results.len(), 2);
        // Insertion order holds and no job has a score.
        assert_eq!(results[0].title, "A");
        assert!(board.score(results[0].id).is_none());
    }

    #[test]
    fn test_refresh_reorders_by_profile() {
        let jobs = vec![job("Hockey role", Some("Hockey")), job("Cricket role", Some("Cricket"))];
        let mut board = JobBoard::new();
        board.refresh(&jobs, Some(&profile("Cricket")), None);

        let results = board.results(&jobs);
        assert_eq!(results[0].title, "Cricket role");
        assert!(board.score(results[0].id).unwrap().score > board.score(results[1].id).unwrap().score);
    }

    #[test]
    fn test_profile_change_replaces_scores() {
        let jobs = vec![job("Cricket role", Some("Cricket"))];
        let mut board = JobBoard::new();
        board.refresh(&jobs, Some(&profile("Cricket")), None);
        let before = board.score(jobs[0].id).unwrap().score;

        board.refresh(&jobs, Some(&profile("Tennis")), None);
        let after = board.score(jobs[0].id).unwrap().score;
        assert!(before > after);

        board.refresh(&jobs, None, None);
        assert!(board.score(jobs[0].id).is_none());
    }
}
