use std::sync::Arc;

use tracing::info;

use crate::analysis::analyzer::{ResumeAnalyzer, RubricResumeAnalyzer};
use crate::analysis::task::{spawn_analysis, AnalysisHandle, AnalysisSink, AnalysisStatus};
use crate::config::Config;
use crate::errors::EngineError;
use crate::matching::categorizer::{categorize_from_profile_with, CategorizedCatalog};
use crate::matching::job_scorer::score_jobs_with;
use crate::models::analysis::AnalysisResult;
use crate::models::job::{JobPosting, ScoredJob};
use crate::profile::{ProfileStore, SkillProfile};

/// The single coordinating service for one candidate session.
///
/// Owns the skill profile and the job catalog; scoring is delegated to the
/// pure functions in `matching` with the profile passed explicitly.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable analyzer. Default: RubricResumeAnalyzer.
    pub analyzer: Arc<dyn ResumeAnalyzer>,
    pub catalog: Arc<[JobPosting]>,
    pub profile: ProfileStore,
    sink: Arc<AnalysisSink>,
}

impl AppState {
    pub fn new(config: Config, analyzer: Arc<dyn ResumeAnalyzer>, catalog: Vec<JobPosting>) -> Self {
        Self {
            config,
            analyzer,
            catalog: catalog.into(),
            profile: ProfileStore::new(),
            sink: Arc::new(AnalysisSink::default()),
        }
    }

    /// State backed by the rubric analyzer with the configured delay.
    pub fn with_rubric(config: Config, catalog: Vec<JobPosting>) -> Self {
        let analyzer = Arc::new(RubricResumeAnalyzer::new(config.analysis_delay));
        Self::new(config, analyzer, catalog)
    }

    /// Starts analyzing `resume_text` in the background.
    ///
    /// Fails with `ConcurrentProfileUpdate` while another analysis (or any
    /// other profile writer) is still pending.
    pub fn submit_analysis(&self, resume_text: impl Into<String>) -> Result<AnalysisHandle, EngineError> {
        let writer = self.profile.claim_writer()?;
        Ok(spawn_analysis(
            Arc::clone(&self.analyzer),
            resume_text.into(),
            writer,
            Arc::clone(&self.sink),
        ))
    }

    /// Submits and waits in one call.
    pub async fn analyze(&self, resume_text: impl Into<String>) -> Result<AnalysisResult, EngineError> {
        self.submit_analysis(resume_text)?.join().await
    }

    /// Status of the most recent run; each handle also tracks its own.
    pub fn status(&self) -> AnalysisStatus {
        self.sink.status.borrow().clone()
    }

    /// Last successfully completed analysis, if any.
    pub fn latest_analysis(&self) -> Option<AnalysisResult> {
        self.sink.latest.borrow().clone()
    }

    pub fn skills(&self) -> Arc<SkillProfile> {
        self.profile.skills()
    }

    /// Scores the catalog against one consistent profile snapshot.
    pub fn score_current(&self) -> Vec<ScoredJob> {
        let skills = self.profile.skills();
        score_jobs_with(&self.catalog, &skills[..], &self.config.matching)
    }

    pub fn categorize_current(&self) -> CategorizedCatalog {
        let skills = self.profile.skills();
        let categorized = categorize_from_profile_with(&self.catalog, &skills[..], &self.config.matching);
        info!(
            jobs_matched = categorized.total(),
            qualified = categorized.qualified.len(),
            "Categorized catalog for current profile"
        );
        categorized
    }
}
