use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Athlete,
    Brand,
    Coach,
    Scout,
    Admin,
    Manager,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub profile_pic_url: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
    pub onboarding_complete: bool,
    pub verified: bool,
}

/// The location signal the match scorer compares a job's city/state against.
/// Resolved by joining an athlete profile through its owning `User`, since
/// the profile itself carries no location fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeLocation {
    pub city: Option<String>,
    pub state: Option<String>,
}

impl User {
    pub fn home_location(&self) -> HomeLocation {
        HomeLocation {
            city: self.city.clone(),
            state: self.state.clone(),
        }
    }
}
