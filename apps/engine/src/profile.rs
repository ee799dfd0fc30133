//! Skill profile store: the only mutable shared state in the engine.
//!
//! The profile is published through a `watch` channel as a versioned,
//! immutable snapshot. Readers clone an `Arc`; writers replace the whole
//! value in one compare-and-swap, so nobody ever sees a half-written list.
//! At most one `ProfileWriter` exists at a time.

use std::ops::Deref;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::{info, warn};

use crate::errors::EngineError;

/// The candidate's current skill set. Replaced wholesale, never merged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillProfile(Vec<String>);

impl SkillProfile {
    pub fn new(skills: Vec<String>) -> Self {
        Self(skills)
    }
}

impl Deref for SkillProfile {
    type Target = [String];

    fn deref(&self) -> &[String] {
        &self.0
    }
}

/// One published state of the profile.
#[derive(Debug, Clone)]
pub struct ProfileSnapshot {
    /// 0 for the initial empty profile; +1 per commit.
    pub version: u64,
    pub skills: Arc<SkillProfile>,
    pub updated_at: DateTime<Utc>,
}

struct ProfileInner {
    tx: watch::Sender<ProfileSnapshot>,
    writer_active: AtomicBool,
}

/// Cloneable handle to the session's skill profile.
#[derive(Clone)]
pub struct ProfileStore {
    inner: Arc<ProfileInner>,
}

impl Default for ProfileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileStore {
    /// Creates a store holding an empty profile at version 0.
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(ProfileSnapshot {
            version: 0,
            skills: Arc::new(SkillProfile::default()),
            updated_at: Utc::now(),
        });
        Self {
            inner: Arc::new(ProfileInner {
                tx,
                writer_active: AtomicBool::new(false),
            }),
        }
    }

    pub fn snapshot(&self) -> ProfileSnapshot {
        self.inner.tx.borrow().clone()
    }

    /// Current skills; cheap to call from any number of readers.
    pub fn skills(&self) -> Arc<SkillProfile> {
        Arc::clone(&self.inner.tx.borrow().skills)
    }

    pub fn version(&self) -> u64 {
        self.inner.tx.borrow().version
    }

    /// Receiver that observes every committed snapshot.
    pub fn subscribe(&self) -> watch::Receiver<ProfileSnapshot> {
        self.inner.tx.subscribe()
    }

    pub fn writer_active(&self) -> bool {
        self.inner.writer_active.load(Ordering::Acquire)
    }

    /// Claims the single writer slot.
    ///
    /// Fails with `ConcurrentProfileUpdate` when another writer (usually an
    /// in-flight analysis) already holds it. The slot is released when the
    /// returned writer is committed or dropped.
    pub fn claim_writer(&self) -> Result<ProfileWriter, EngineError> {
        if self
            .inner
            .writer_active
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            warn!("Rejected profile writer: another update is in flight");
            return Err(EngineError::ConcurrentProfileUpdate(
                "another profile update is already in flight".to_string(),
            ));
        }

        Ok(ProfileWriter {
            store: self.clone(),
            base_version: self.version(),
        })
    }

    /// Replaces the whole profile immediately.
    pub fn set_skills(&self, skills: Vec<String>) -> Result<ProfileSnapshot, EngineError> {
        self.claim_writer()?.commit(skills)
    }
}

/// Exclusive right to replace the profile.
///
/// The slot stays claimed until the writer is dropped, so the holder can
/// publish follow-up state before anyone else may write. Only the first
/// commit can succeed; later ones see a newer version and are rejected.
pub struct ProfileWriter {
    store: ProfileStore,
    base_version: u64,
}

impl ProfileWriter {
    /// Version this writer expects to replace.
    pub fn base_version(&self) -> u64 {
        self.base_version
    }

    /// Atomically swaps in `skills` if the profile is still at `base_version`.
    pub fn commit(&self, skills: Vec<String>) -> Result<ProfileSnapshot, EngineError> {
        let base = self.base_version;
        let mut outcome: Result<ProfileSnapshot, u64> = Err(base);

        self.store.inner.tx.send_if_modified(|current| {
            if current.version != base {
                outcome = Err(current.version);
                return false;
            }
            *current = ProfileSnapshot {
                version: base + 1,
                skills: Arc::new(SkillProfile::new(skills)),
                updated_at: Utc::now(),
            };
            outcome = Ok(current.clone());
            true
        });

        match outcome {
            Ok(snapshot) => {
                info!(
                    version = snapshot.version,
                    skills = snapshot.skills.len(),
                    "Skill profile replaced"
                );
                Ok(snapshot)
            }
            Err(found) => {
                warn!(expected = base, found, "Stale skill profile commit rejected");
                Err(EngineError::ConcurrentProfileUpdate(format!(
                    "expected profile version {base}, found {found}"
                )))
            }
        }
    }
}

impl Drop for ProfileWriter {
    fn drop(&mut self) {
        self.store
            .inner
            .writer_active
            .store(false, Ordering::Release);
    }
}
