use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NilCategory {
    Product,
    Service,
    Event,
    BrandAmbassador,
}

/// A brand-sponsored name/image/likeness deal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NilOpportunity {
    pub id: Uuid,
    pub title: String,
    pub brand_name: String,
    pub description: String,
    pub compensation: String,
    pub requirements: Vec<String>,
    /// Absent means open to athletes of any sport.
    pub sport: Option<String>,
    pub min_followers: u64,
    /// Supported platform names. Must be non-empty.
    pub platforms: Vec<String>,
    pub duration: String,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub deadline: DateTime<Utc>,
    pub is_active: bool,
    pub category: NilCategory,
    pub applicant_count: u32,
}

impl NilOpportunity {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.platforms.is_empty() {
            return Err(CoreError::Validation(
                "platforms must be non-empty".into(),
            ));
        }
        Ok(())
    }
}
