//! Resume Analyzer: pluggable, trait-based producer of `AnalysisResult`.
//!
//! Default: `RubricResumeAnalyzer` (fixed rubric, deterministic, with an
//! artificial processing delay). A real NLP or remote backend can be
//! substituted behind the same trait.
//!
//! `AppState` holds an `Arc<dyn ResumeAnalyzer>`, chosen at startup.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::analysis::rubric::{analyze_text, is_readable};
use crate::errors::EngineError;
use crate::models::analysis::AnalysisResult;

/// Implement this to swap analysis backends without touching the
/// coordinating service or its callers.
///
/// Implementations must not block the executor and must tolerate being
/// dropped mid-await (that is how cancellation reaches them).
#[async_trait]
pub trait ResumeAnalyzer: Send + Sync {
    async fn analyze(&self, resume_text: &str) -> Result<AnalysisResult, EngineError>;

    /// Short label for logs, e.g. "rubric".
    fn backend(&self) -> &'static str;
}

/// Rejects text that is empty or has nothing alphanumeric in it.
pub fn validate_resume_text(resume_text: &str) -> Result<(), EngineError> {
    if resume_text.trim().is_empty() {
        return Err(EngineError::InvalidInput(
            "resume text cannot be empty".to_string(),
        ));
    }
    if !is_readable(resume_text) {
        return Err(EngineError::InvalidInput(
            "resume text contains no readable content".to_string(),
        ));
    }
    Ok(())
}

pub struct RubricResumeAnalyzer {
    delay: Duration,
}

impl RubricResumeAnalyzer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// No artificial delay.
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }
}

#[async_trait]
impl ResumeAnalyzer for RubricResumeAnalyzer {
    async fn analyze(&self, resume_text: &str) -> Result<AnalysisResult, EngineError> {
        validate_resume_text(resume_text)?;

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let result = analyze_text(resume_text);
        debug!(
            skills = result.extracted_skills.len(),
            gaps = result.skill_gaps.len(),
            overall_score = result.overall_score,
            "Rubric analysis finished"
        );
        Ok(result)
    }

    fn backend(&self) -> &'static str {
        "rubric"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_text_is_invalid_input() {
        let analyzer = RubricResumeAnalyzer::instant();
        for text in ["", "   ", "\n\t"] {
            let err = analyzer.analyze(text).await.unwrap_err();
            assert!(matches!(err, EngineError::InvalidInput(_)), "text {text:?}");
        }
    }

    #[tokio::test]
    async fn test_unreadable_text_is_invalid_input() {
        let err = RubricResumeAnalyzer::instant()
            .analyze("••• --- •••")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("no readable content"));
    }

    #[tokio::test]
    async fn test_analyze_returns_contract_shape() {
        let result = RubricResumeAnalyzer::instant()
            .analyze("Built React and Rust services")
            .await
            .unwrap();
        assert_eq!(result.extracted_skills, vec!["React".to_string(), "Rust".to_string()]);
        assert_eq!(result.sections.len(), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_delay_is_applied_without_blocking() {
        let analyzer = RubricResumeAnalyzer::new(Duration::from_secs(2));
        let start = tokio::time::Instant::now();

        analyzer.analyze("Go developer").await.unwrap();
        assert!(start.elapsed() >= Duration::from_secs(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_invalid_input_fails_before_delay() {
        let analyzer = RubricResumeAnalyzer::new(Duration::from_secs(2));
        let start = tokio::time::Instant::now();

        assert!(analyzer.analyze("").await.is_err());
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_backend_label() {
        assert_eq!(RubricResumeAnalyzer::instant().backend(), "rubric");
    }
}
