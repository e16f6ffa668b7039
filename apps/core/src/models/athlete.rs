use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::CoreError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub year: String,
}

/// One engagement record. Immutable once created; editable only by the
/// profile owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub team: String,
    pub position: String,
    pub duration: String,
    pub achievements: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialMedia {
    pub instagram: Option<String>,
    pub twitter: Option<String>,
    pub youtube: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AthleteProfile {
    pub id: Uuid,
    /// Owning reference: each profile belongs to exactly one `User`.
    pub user_id: Uuid,
    pub sport: String,
    pub position: Option<String>,
    pub achievements: Vec<String>,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
    pub nil_earnings: f64,
    pub followers: u64,
    pub highlights: Vec<String>,
    pub social_media: Option<SocialMedia>,
}

impl AthleteProfile {
    /// Checks the model invariants (`nil_earnings >= 0`; sport non-empty).
    /// `followers` is unsigned and needs no check.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.sport.trim().is_empty() {
            return Err(CoreError::Validation("sport must be non-empty".into()));
        }
        if self.nil_earnings < 0.0 {
            return Err(CoreError::Validation(
                "nil_earnings must be non-negative".into(),
            ));
        }
        Ok(())
    }
}
