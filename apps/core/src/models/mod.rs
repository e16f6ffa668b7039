pub mod athlete;
pub mod job;
pub mod nil;
pub mod user;

pub use athlete::{AthleteProfile, EducationEntry, ExperienceEntry, SocialMedia};
pub use job::{
    ApplicationStatus, EmploymentType, ExperienceLevel, Job, JobApplication, Sector,
};
pub use nil::{NilCategory, NilOpportunity};
pub use user::{HomeLocation, Role, User};
