use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Contract,
    Internship,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    Entry,
    Mid,
    Senior,
    Executive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sector {
    Private,
    Public,
    Government,
    Ngo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub location: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub salary: String,
    pub employment_type: EmploymentType,
    /// Absent means the posting is open to any sport.
    pub sport: Option<String>,
    pub experience_level: ExperienceLevel,
    pub posted_by: Uuid,
    pub created_at: DateTime<Utc>,
    /// Past-deadline postings stay visible but are non-actionable; that gate
    /// belongs to the caller, not the scorer.
    pub application_deadline: DateTime<Utc>,
    pub is_active: bool,
    pub sector: Sector,
    pub applicant_count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Pending,
    Reviewed,
    Shortlisted,
    Rejected,
    Hired,
}

impl ApplicationStatus {
    /// Legal transitions: pending may move to any later state, reviewed may
    /// move to a decision. Shortlisted/rejected/hired are terminal here.
    pub fn can_transition_to(self, next: ApplicationStatus) -> bool {
        use ApplicationStatus::*;
        match self {
            Pending => matches!(next, Reviewed | Shortlisted | Rejected | Hired),
            Reviewed => matches!(next, Shortlisted | Rejected | Hired),
            Shortlisted | Rejected | Hired => false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobApplication {
    pub id: Uuid,
    pub job_id: Uuid,
    pub applicant_id: Uuid,
    pub status: ApplicationStatus,
    pub resume_url: String,
    pub cover_letter_url: Option<String>,
    pub custom_answers: Value,
    pub applied_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
    /// Snapshot of the match score at application time. Stored, never
    /// recomputed.
    pub match_percentage: Option<u8>,
}
