//! Filtering and ranking for the job board and NIL marketplace surfaces.
//!
//! Filtering is conjunctive: a posting passes only if every active predicate
//! accepts it. Each categorical filter is an `Option` whose `None` is the
//! "all ..." sentinel that always passes. Ranking is a stable sort by
//! descending match score, so equal-score postings keep insertion order and
//! re-running the pipeline on unchanged input is idempotent.

use crate::matching::cache::MatchCache;
use crate::models::{
    EmploymentType, ExperienceLevel, Job, NilCategory, NilOpportunity, Sector,
};

#[derive(Debug, Clone, Default)]
pub struct JobFilters {
    /// Free-text query, matched case-insensitively against title, company
    /// and description. Empty passes everything.
    pub search: String,
    pub sport: Option<String>,
    /// Full filter value, e.g. "Mumbai, Maharashtra". Only the text before
    /// the first comma is matched against the job's location string.
    pub location: Option<String>,
    pub experience_level: Option<ExperienceLevel>,
    pub employment_type: Option<EmploymentType>,
    pub sector: Option<Sector>,
}

impl JobFilters {
    pub fn matches(&self, job: &Job) -> bool {
        matches_search(
            &self.search,
            [&job.title, &job.company, &job.description].map(String::as_str),
        )
            && matches_sport(self.sport.as_deref(), job.sport.as_deref())
            && matches_location(self.location.as_deref(), &job.location)
            && self
                .experience_level
                .map_or(true, |lvl| job.experience_level == lvl)
            && self
                .employment_type
                .map_or(true, |et| job.employment_type == et)
            && self.sector.map_or(true, |s| job.sector == s)
    }
}

#[derive(Debug, Clone, Default)]
pub struct NilFilters {
    pub search: String,
    pub category: Option<NilCategory>,
    pub sport: Option<String>,
    pub platform: Option<String>,
}

impl NilFilters {
    pub fn matches(&self, opp: &NilOpportunity) -> bool {
        matches_search(
            &self.search,
            [&opp.title, &opp.brand_name, &opp.description].map(String::as_str),
        ) && self.category.map_or(true, |c| opp.category == c)
            && matches_sport(self.sport.as_deref(), opp.sport.as_deref())
            && self
                .platform
                .as_deref()
                .map_or(true, |p| opp.platforms.iter().any(|have| have == p))
    }
}

/// Case-insensitive substring containment over any one of the fields.
fn matches_search(query: &str, fields: [&str; 3]) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Sport-agnostic postings (no sport) pass every sport filter.
fn matches_sport(filter: Option<&str>, posting_sport: Option<&str>) -> bool {
    match (filter, posting_sport) {
        (None, _) => true,
        (Some(_), None) => true,
        (Some(want), Some(have)) => want == have,
    }
}

/// Matches on the filter value's primary city token: the text before its
/// first comma, e.g. "Mumbai, Maharashtra" matches any location containing
/// "Mumbai".
fn matches_location(filter: Option<&str>, location: &str) -> bool {
    match filter {
        None => true,
        Some(value) => {
            let city = value.split(',').next().unwrap_or(value).trim();
            location.contains(city)
        }
    }
}

/// Applies the filters, then stable-sorts by descending match score.
/// A job with no cached score sorts as 0 but is never assigned one.
pub fn rank_jobs(jobs: &[Job], filters: &JobFilters, cache: &MatchCache) -> Vec<Job> {
    let mut passed: Vec<Job> = jobs.iter().filter(|j| filters.matches(j)).cloned().collect();
    passed.sort_by(|a, b| cache.sort_key(b.id).cmp(&cache.sort_key(a.id)));
    passed
}

pub fn filter_opportunities(
    opportunities: &[NilOpportunity],
    filters: &NilFilters,
) -> Vec<NilOpportunity> {
    opportunities
        .iter()
        .filter(|o| filters.matches(o))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AthleteProfile;
    use chrono::Utc;
    use uuid::Uuid;

    fn job(title: &str, sport: Option<&str>, location: &str) -> Job {
        Job {
            id: Uuid::new_v4(),
            title: title.to_string(),
            company: "Apex Sports".to_string(),
            description: "Work with elite athletes".to_string(),
            requirements: vec![],
            location: location.to_string(),
            city: None,
            state: None,
            salary: "₹10L".to_string(),
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

    fn opportunity(title: &str, category: NilCategory, platforms: &[&str]) -> NilOpportunity {
        NilOpportunity {
            id: Uuid::new_v4(),
            title: title.to_string(),
            brand_name: "VoltFuel".to_string(),
            description: "Promote on social media".to_string(),
            compensation: "₹25,000".to_string(),
            requirements: vec![],
            sport: None,
            min_followers: 0,
            platforms: platforms.iter().map(|p| p.to_string()).collect(),
            duration: "1 month".to_string(),
            created_by: Uuid::new_v4(),
            created_at: Utc::now(),
            deadline: Utc::now(),
            is_active: true,
            category,
            applicant_count: 0,
        }
    }

    #[test]
    fn test_empty_filters_pass_everything() {
        let j = job("Analyst", Some("Cricket"), "Mumbai, Maharashtra");
        assert!(JobFilters::default().matches(&j));
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let j = job("Performance Analyst", None, "Delhi, NCR");
        for query in ["analyst", "APEX", "elite"] {
            let f = JobFilters {
                search: query.to_string(),
                ..Default::default()
            };
            assert!(f.matches(&j), "query {query:?} should match");
        }
        let f = JobFilters {
            search: "goalkeeper".to_string(),
            ..Default::default()
        };
        assert!(!f.matches(&j));
    }

    #[test]
    fn test_sport_filter_passes_agnostic_jobs() {
        let f = JobFilters {
            sport: Some("Cricket".to_string()),
            ..Default::default()
        };
        assert!(f.matches(&job("A", Some("Cricket"), "Pune")));
        assert!(f.matches(&job("B", None, "Pune")));
        assert!(!f.matches(&job("C", Some("Hockey"), "Pune")));
    }

    #[test]
    fn test_location_filter_uses_primary_city_token() {
        let f = JobFilters {
            location: Some("Mumbai, Maharashtra".to_string()),
            ..Default::default()
        };
        assert!(f.matches(&job("A", None, "Mumbai, Maharashtra")));
        assert!(f.matches(&job("B", None, "Navi Mumbai")));
        assert!(!f.matches(&job("C", None, "Chennai, Tamil Nadu")));
    }

    #[test]
    fn test_filters_are_conjunctive() {
        let j = job("Analyst", Some("Cricket"), "Mumbai, Maharashtra");
        let f = JobFilters {
            search: "analyst".to_string(),
            sport: Some("Cricket".to_string()),
            location: Some("Mumbai, Maharashtra".to_string()),
            ..Default::default()
        };
        assert!(f.matches(&j));

        // One failing predicate fails the whole conjunction.
        let mut miss = f.clone();
        miss.sport = Some("Hockey".to_string());
        assert!(!miss.matches(&j));
    }

    #[test]
    fn test_removing_a_predicate_never_shrinks_results() {
        let jobs = vec![
            job("Analyst", Some("Cricket"), "Mumbai, Maharashtra"),
            job("Scout", Some("Hockey"), "Delhi, NCR"),
            job("Manager", None, "Pune, Maharashtra"),
        ];
        let strict = JobFilters {
            sport: Some("Cricket".to_string()),
            location: Some("Mumbai, Maharashtra".to_string()),
            ..Default::default()
        };
        let mut relaxed = strict.clone();
        relaxed.location = None;

        let cache = MatchCache::new();
        let strict_out = rank_jobs(&jobs, &strict, &cache);
        let relaxed_out = rank_jobs(&jobs, &relaxed, &cache);
        assert!(relaxed_out.len() >= strict_out.len());
        for j in &strict_out {
            assert!(relaxed_out.iter().any(|r| r.id == j.id));
        }
    }

    #[test]
    fn test_ranking_sorts_by_descending_score() {
        let jobs = vec![
            job("Low", Some("Hockey"), "Delhi, NCR"),
            job("High", Some("Cricket"), "Delhi, NCR"),
        ];
        let p = AthleteProfile {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            sport: "Cricket".to_string(),
            position: None,
            achievements: vec![],
            education: vec![],
            experience: vec![],
            nil_earnings: 0.0,
            followers: 0,
            highlights: vec![],
            social_media: None,
        };
        let mut cache = MatchCache::new();
        cache.recompute(&jobs, Some(&p), None);

        let ranked = rank_jobs(&jobs, &JobFilters::default(), &cache);
        assert_eq!(ranked[0].title, "High");
        assert_eq!(ranked[1].title, "Low");
    }

    #[test]
    fn test_ranking_is_stable_for_equal_scores() {
        // Identical jobs score identically; insertion order must hold.
        let jobs: Vec<Job> = (0..5)
            .map(|i| job(&format!("Job {i}"), Some("Cricket"), "Pune"))
            .collect();
        let cache = MatchCache::new(); // all unranked, all sort as 0
        let ranked = rank_jobs(&jobs, &JobFilters::default(), &cache);
        let titles: Vec<&str> = ranked.iter().map(|j| j.title.as_str()).collect();
        assert_eq!(titles, vec!["Job 0", "Job 1", "Job 2", "Job 3", "Job 4"]);
    }

    #[test]
    fn test_ranking_is_idempotent() {
        let jobs = vec![
            job("A", Some("Cricket"), "Pune"),
            job("B", None, "Mumbai"),
            job("C", Some("Hockey"), "Delhi"),
        ];
        let cache = MatchCache::new();
        let filters = JobFilters::default();
        let once = rank_jobs(&jobs, &filters, &cache);
        let twice = rank_jobs(&once, &filters, &cache);
        let ids: Vec<Uuid> = once.iter().map(|j| j.id).collect();
        let ids_again: Vec<Uuid> = twice.iter().map(|j| j.id).collect();
        assert_eq!(ids, ids_again);
    }

    #[test]
    fn test_nil_filters_category_and_platform() {
        let opps = vec![
            opportunity("Shoe drop", NilCategory::Product, &["Instagram"]),
            opportunity("Meet & greet", NilCategory::Event, &["YouTube"]),
        ];
        let f = NilFilters {
            category: Some(NilCategory::Product),
            ..Default::default()
        };
        let out = filter_opportunities(&opps, &f);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].title, "Shoe drop");

        let f = NilFilters {
            platform: Some("YouTube".to_string()),
            ..Default::default()
        };
        let out = filter_opportunities(&opps, &f);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].title, "Meet & greet");
    }

    #[test]
    fn test_nil_search_covers_brand_name() {
        let opps = vec![opportunity("Shoe drop", NilCategory::Product, &["Instagram"])];
        let f = NilFilters {
            search: "voltfuel".to_string(),
            ..Default::default()
        };
        assert_eq!(filter_opportunities(&opps, &f).len(), 1);
    }
}
