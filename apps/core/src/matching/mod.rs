pub mod cache;
pub mod pipeline;
pub mod scorer;

pub use cache::MatchCache;
pub use pipeline::{filter_opportunities, rank_jobs, JobFilters, NilFilters};
pub use scorer::{score_job, MatchScore};
