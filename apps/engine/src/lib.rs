//! Skill-based job matching engine.
//!
//! Scores a job catalog against a candidate's skill profile, sorts it into
//! tiers, and produces resume-analysis summaries whose extracted skills
//! become the next profile.

pub mod analysis;
pub mod config;
pub mod errors;
pub mod matching;
pub mod models;
pub mod profile;
pub mod state;

pub use analysis::analyzer::{ResumeAnalyzer, RubricResumeAnalyzer};
pub use analysis::task::{AnalysisHandle, AnalysisStatus};
pub use config::{Config, MatchingConfig};
pub use errors::EngineError;
pub use matching::categorizer::{categorize, categorize_from_profile, CategorizedCatalog, Tier};
pub use matching::job_scorer::score_jobs;
pub use matching::search::{filter_jobs, JobQuery, SortBy};
pub use matching::skill_matcher::{match_skills, SkillMatch};
pub use models::analysis::{AnalysisResult, SectionFeedback};
pub use models::job::{JobId, JobPosting, ScoredJob};
pub use profile::{ProfileStore, SkillProfile};
pub use state::AppState;
