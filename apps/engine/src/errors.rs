use thiserror::Error;

/// Engine-level error type.
///
/// Scoring and categorization are total functions and never produce one of
/// these; every failure surface lives in resume analysis and profile updates.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Empty or unreadable resume text handed to an analyzer.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The single-writer contract on the skill profile was violated.
    /// Callers must treat this as fatal for the operation that hit it.
    #[error("Concurrent profile update: {0}")]
    ConcurrentProfileUpdate(String),

    #[error("Analysis cancelled")]
    Cancelled,

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl EngineError {
    /// Stable machine-readable code, mirrored in logs and status reasons.
    pub fn code(&self) -> &'static str {
        match self {
            EngineError::InvalidInput(_) => "INVALID_INPUT",
            EngineError::ConcurrentProfileUpdate(_) => "CONCURRENT_PROFILE_UPDATE",
            EngineError::Cancelled => "CANCELLED",
            EngineError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concurrent_update_message_carries_detail() {
        let err = EngineError::ConcurrentProfileUpdate("writer already active".to_string());
        let msg = err.to_string();
        assert!(msg.starts_with("Concurrent profile update"));
        assert!(msg.contains("writer already active"));
        assert_eq!(err.code(), "CONCURRENT_PROFILE_UPDATE");
    }

    #[test]
    fn test_internal_wraps_anyhow() {
        let err: EngineError = anyhow::anyhow!("boom").into();
        assert_eq!(err.code(), "INTERNAL_ERROR");
        assert!(err.to_string().contains("boom"));
    }
}
