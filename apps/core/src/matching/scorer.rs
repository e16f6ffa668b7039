//! Job/athlete compatibility scorer.
//!
//! Pure and deterministic: identical inputs always produce the identical
//! `MatchScore`, no I/O, no side effects. Missing optional fields degrade to
//! their documented default contributions rather than erroring.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{AthleteProfile, ExperienceLevel, HomeLocation, Job};

/// Factor weights. The four contributions sum to at most 100.
const WEIGHT_SPORT_EXACT: u32 = 40;
const WEIGHT_SPORT_RELATED: u32 = 10;
const WEIGHT_SPORT_NEUTRAL: u32 = 20;
const WEIGHT_SAME_CITY: u32 = 25;
const WEIGHT_SAME_STATE: u32 = 15;
const WEIGHT_EXPERIENCE_FIT: u32 = 20;
const WEIGHT_EXPERIENCE_MISS: u32 = 10;
const WEIGHT_ACHIEVEMENTS: u32 = 15;

/// Compatibility between one athlete profile and one job posting.
/// Derived on demand; lives only in the session cache, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchScore {
    pub job_id: Uuid,
    /// 0..=100.
    pub score: u8,
    /// Human-readable justifications in factor-evaluation order:
    /// sport, location, experience, achievements.
    pub reasons: Vec<String>,
}

/// Scores a job against an athlete profile.
///
/// `home` is the athlete's resolved home city/state, joined through the
/// owning `User` record. Callers without that join pass `None` and the
/// location factor contributes 0.
pub fn score_job(job: &Job, profile: &AthleteProfile, home: Option<&HomeLocation>) -> MatchScore {
    let mut score: u32 = 0;
    let mut reasons: Vec<String> = Vec::new();

    // Sport affinity (weight 40)
    match &job.sport {
        Some(job_sport) if *job_sport == profile.sport => {
            score += WEIGHT_SPORT_EXACT;
            reasons.push(format!("Perfect sport match: {job_sport}"));
        }
        // Both specified but different. No cross-sport similarity table;
        // a flat constant stands in for "related".
        Some(_) => {
            score += WEIGHT_SPORT_RELATED;
            reasons.push("Related sport experience".to_string());
        }
        // Sport-agnostic posting: neutral, neither penalize nor reward.
        None => score += WEIGHT_SPORT_NEUTRAL,
    }

    // Location affinity (weight 25)
    if let Some(home) = home {
        let same_city = match (&job.city, &home.city) {
            (Some(jc), Some(hc)) if jc == hc => Some(jc.as_str()),
            _ => None,
        };
        let same_state = match (&job.state, &home.state) {
            (Some(js), Some(hs)) => js == hs,
            _ => false,
        };
        if let Some(city) = same_city {
            score += WEIGHT_SAME_CITY;
            reasons.push(format!("Same city: {city}"));
        } else if same_state {
            score += WEIGHT_SAME_STATE;
            reasons.push("Same state".to_string());
        }
    }

    // Experience-level fit (weight 20)
    let count = profile.experience.len();
    let (fit, reason) = match job.experience_level {
        ExperienceLevel::Entry if count <= 2 => (true, "Perfect for entry level"),
        ExperienceLevel::Mid if (2..=5).contains(&count) => (true, "Great mid-level fit"),
        ExperienceLevel::Senior if count >= 5 => (true, "Senior level experience"),
        _ => (false, ""),
    };
    if fit {
        score += WEIGHT_EXPERIENCE_FIT;
        reasons.push(reason.to_string());
    } else {
        // Partial credit on mismatch; no reason emitted.
        score += WEIGHT_EXPERIENCE_MISS;
    }

    // Track-record bonus (weight 15). Flat: one achievement earns it fully.
    if !profile.achievements.is_empty() {
        score += WEIGHT_ACHIEVEMENTS;
        reasons.push("Strong achievement record".to_string());
    }

    MatchScore {
        job_id: job.id,
        score: score.min(100) as u8,
        reasons,
    }
}
