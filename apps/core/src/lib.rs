//! Core of a sports-career platform: athlete profiles, a job board and an
//! NIL deal marketplace. This crate is the embeddable engine a client shell
//! links against; it holds the job/athlete match scorer, the session score
//! cache, the filter/rank pipeline, and the narrow boundary contracts for
//! the external identity provider, document store, object storage and draft
//! persistence. There is no network or process surface here.

pub mod applications;
pub mod auth;
pub mod board;
pub mod config;
pub mod drafts;
pub mod errors;
pub mod matching;
pub mod models;
pub mod storage;
pub mod store;

pub use applications::{ApplicationService, SubmitRequest};
pub use auth::{AuthSession, IdentityProvider, StaticIdentity};
pub use board::JobBoard;
pub use config::Config;
pub use errors::CoreError;
pub use matching::{score_job, JobFilters, MatchCache, MatchScore, NilFilters};
pub use store::MemoryStore;
