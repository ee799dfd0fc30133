//! Background analysis task.
//!
//! One run: `Idle -> Running -> Completed(result) | Failed(reason)`.
//! Every run gets its own status channel; the shared sink only mirrors the
//! most recent run. The task owns the profile writer for its whole lifetime:
//! on success it commits the extracted skills as the new profile in one swap,
//! on failure or cancellation the profile is untouched. The writer is dropped
//! only after the outcome is published.

use std::sync::Arc;

use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;
use tracing::{info, warn};
use uuid::Uuid;

use crate::analysis::analyzer::ResumeAnalyzer;
use crate::errors::EngineError;
use crate::models::analysis::AnalysisResult;
use crate::profile::ProfileWriter;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "detail", rename_all = "snake_case")]
pub enum AnalysisStatus {
    #[default]
    Idle,
    Running,
    Completed(AnalysisResult),
    Failed(String),
}

impl AnalysisStatus {
    pub fn is_running(&self) -> bool {
        matches!(self, AnalysisStatus::Running)
    }
}

/// Session-wide view: status of the most recent run and the last result.
pub struct AnalysisSink {
    pub status: watch::Sender<AnalysisStatus>,
    pub latest: watch::Sender<Option<AnalysisResult>>,
}

impl Default for AnalysisSink {
    fn default() -> Self {
        Self {
            status: watch::channel(AnalysisStatus::Idle).0,
            latest: watch::channel(None).0,
        }
    }
}

/// Caller's handle to one in-flight analysis.
///
/// Dropping the handle detaches the run: it still completes and commits.
/// Use `cancel` to stop it without touching the profile.
#[derive(Debug)]
pub struct AnalysisHandle {
    id: Uuid,
    cancel_tx: Option<oneshot::Sender<()>>,
    join: JoinHandle<Result<AnalysisResult, EngineError>>,
    status: watch::Receiver<AnalysisStatus>,
}

impl AnalysisHandle {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn status(&self) -> AnalysisStatus {
        self.status.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<AnalysisStatus> {
        self.status.clone()
    }

    /// Requests cancellation. Returns false if the run already finished
    /// or cancel was already requested.
    pub fn cancel(&mut self) -> bool {
        match self.cancel_tx.take() {
            Some(tx) => tx.send(()).is_ok(),
            None => false,
        }
    }

    /// Waits for the run to finish.
    pub async fn join(self) -> Result<AnalysisResult, EngineError> {
        match self.join.await {
            Ok(outcome) => outcome,
            Err(e) => Err(EngineError::Internal(anyhow!("analysis task failed: {e}"))),
        }
    }
}

/// Spawns `analyzer` over `resume_text` on the tokio runtime.
///
/// The caller must already hold `writer`; that is what makes this the only
/// pending profile update.
pub fn spawn_analysis(
    analyzer: Arc<dyn ResumeAnalyzer>,
    resume_text: String,
    writer: ProfileWriter,
    sink: Arc<AnalysisSink>,
) -> AnalysisHandle {
    let id = Uuid::new_v4();
    let (cancel_tx, mut cancel_rx) = oneshot::channel::<()>();

    let (status_tx, status) = watch::channel(AnalysisStatus::Running);
    sink.status.send_replace(AnalysisStatus::Running);
    info!(%id, backend = analyzer.backend(), "Resume analysis started");

    let join = tokio::spawn(async move {
        let outcome = tokio::select! {
            result = analyzer.analyze(&resume_text) => result,
            // a dropped sender means the handle was detached, not cancelled
            Ok(()) = &mut cancel_rx => Err(EngineError::Cancelled),
        };

        let outcome = outcome.and_then(|result| {
            writer.commit(result.extracted_skills.clone())?;
            Ok(result)
        });

        let final_status = match &outcome {
            Ok(result) => {
                info!(
                    %id,
                    skills = result.extracted_skills.len(),
                    overall_score = result.overall_score,
                    "Resume analysis completed"
                );
                sink.latest.send_replace(Some(result.clone()));
                AnalysisStatus::Completed(result.clone())
            }
            Err(e) => {
                warn!(%id, code = e.code(), "Resume analysis failed: {e}");
                AnalysisStatus::Failed(e.to_string())
            }
        };
        status_tx.send_replace(final_status.clone());
        sink.status.send_replace(final_status);

        // releases the writer slot; the next run may start from here on
        drop(writer);
        outcome
    });

    AnalysisHandle {
        id,
        cancel_tx: Some(cancel_tx),
        join,
        status,
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::analysis::analyzer::RubricResumeAnalyzer;
    use crate::profile::ProfileStore;

    fn rubric(delay_secs: u64) -> Arc<dyn ResumeAnalyzer> {
        Arc::new(RubricResumeAnalyzer::new(Duration::from_secs(delay_secs)))
    }

    #[tokio::test(start_paused = true)]
    async fn test_completed_run_commits_profile() {
        let store = ProfileStore::new();
        let sink = Arc::new(AnalysisSink::default());

        let handle = spawn_analysis(
            rubric(2),
            "Rust and Go engineer".to_string(),
            store.claim_writer().unwrap(),
            sink.clone(),
        );
        assert!(handle.status().is_running());

        let result = handle.join().await.unwrap();
        assert_eq!(result.extracted_skills, vec!["Go".to_string(), "Rust".to_string()]);
        assert_eq!(&**store.skills(), &result.extracted_skills[..]);
        assert_eq!(store.version(), 1);
        assert!(!store.writer_active());
        assert_eq!(*sink.latest.borrow(), Some(result.clone()));
        assert_eq!(*sink.status.borrow(), AnalysisStatus::Completed(result));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_run_leaves_profile_untouched() {
        let store = ProfileStore::new();
        store.set_skills(vec!["Python".to_string()]).unwrap();
        let sink = Arc::new(AnalysisSink::default());

        let mut handle = spawn_analysis(
            rubric(10),
            "Rust engineer".to_string(),
            store.claim_writer().unwrap(),
            sink.clone(),
        );
        assert!(handle.cancel());
        assert!(!handle.cancel());

        let err = handle.join().await.unwrap_err();
        assert!(matches!(err, EngineError::Cancelled));
        assert_eq!(&**store.skills(), &["Python".to_string()][..]);
        assert!(!store.writer_active());
        assert_eq!(
            *sink.status.borrow(),
            AnalysisStatus::Failed("Analysis cancelled".to_string())
        );
        assert_eq!(*sink.latest.borrow(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_detached_run_still_commits() {
        let store = ProfileStore::new();
        let sink = Arc::new(AnalysisSink::default());

        let handle = spawn_analysis(
            rubric(2),
            "Docker and Kubernetes".to_string(),
            store.claim_writer().unwrap(),
            sink.clone(),
        );
        let mut status = handle.subscribe();
        drop(handle);

        status
            .wait_for(|s| matches!(s, AnalysisStatus::Completed(_)))
            .await
            .unwrap();
        assert_eq!(store.skills().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_each_run_keeps_its_own_status() {
        let store = ProfileStore::new();
        let sink = Arc::new(AnalysisSink::default());

        let first = spawn_analysis(
            rubric(1),
            "Rust engineer".to_string(),
            store.claim_writer().unwrap(),
            sink.clone(),
        );
        let first_id = first.id();
        let first_status = first.subscribe();
        first.join().await.unwrap();

        let second = spawn_analysis(
            rubric(1),
            "Go engineer".to_string(),
            store.claim_writer().unwrap(),
            sink.clone(),
        );
        assert_ne!(second.id(), first_id);
        assert!(second.status().is_running());
        assert!(sink.status.borrow().is_running());
        assert!(matches!(
            *first_status.borrow(),
            AnalysisStatus::Completed(ref r) if r.extracted_skills == vec!["Rust".to_string()]
        ));

        second.join().await.unwrap();
        assert!(matches!(*first_status.borrow(), AnalysisStatus::Completed(_)));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_outcome_is_published_before_writer_is_released() {
        let store = ProfileStore::new();
        let sink = Arc::new(AnalysisSink::default());

        for _ in 0..50 {
            let handle = spawn_analysis(
                rubric(0),
                "Python and SQL".to_string(),
                store.claim_writer().unwrap(),
                sink.clone(),
            );
            while store.writer_active() {
                tokio::task::yield_now().await;
            }
            assert!(matches!(handle.status(), AnalysisStatus::Completed(_)));
            assert!(matches!(*sink.status.borrow(), AnalysisStatus::Completed(_)));
            handle.join().await.unwrap();
        }
    }

    #[tokio::test]
    async fn test_invalid_input_fails_run() {
        let store = ProfileStore::new();
        let sink = Arc::new(AnalysisSink::default());

        let handle = spawn_analysis(
            rubric(0),
            "   ".to_string(),
            store.claim_writer().unwrap(),
            sink.clone(),
        );
        let err = handle.join().await.unwrap_err();
        assert!(matches!(err, EngineError::InvalidInput(_)));
        assert_eq!(store.version(), 0);
        assert!(matches!(*sink.status.borrow(), AnalysisStatus::Failed(_)));
    }

    #[test]
    fn test_status_serializes_with_state_tag() {
        let value = serde_json::to_value(AnalysisStatus::Failed("nope".to_string())).unwrap();
        assert_eq!(value["state"], "failed");
        assert_eq!(value["detail"], "nope");
        let idle = serde_json::to_value(AnalysisStatus::Idle).unwrap();
        assert_eq!(idle["state"], "idle");
    }
}
