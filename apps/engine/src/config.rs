use std::str::FromStr;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// Highest score a job can reach, even when every required skill matches.
pub const DEFAULT_SCORE_CAP: u8 = 95;
/// Minimum score for the `qualified` tier.
pub const DEFAULT_QUALIFIED_THRESHOLD: u8 = 80;
/// Minimum score for the `close_match` tier.
pub const DEFAULT_CLOSE_MATCH_THRESHOLD: u8 = 60;
pub const DEFAULT_ANALYSIS_DELAY_MS: u64 = 2000;

/// Business constants for scoring and tiering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchingConfig {
    pub score_cap: u8,
    pub qualified_threshold: u8,
    pub close_match_threshold: u8,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            score_cap: DEFAULT_SCORE_CAP,
            qualified_threshold: DEFAULT_QUALIFIED_THRESHOLD,
            close_match_threshold: DEFAULT_CLOSE_MATCH_THRESHOLD,
        }
    }
}

impl MatchingConfig {
    pub fn validate(&self) -> Result<()> {
        if self.score_cap > 100 {
            bail!("score cap must be at most 100, got {}", self.score_cap);
        }
        if self.close_match_threshold > self.qualified_threshold {
            bail!(
                "close-match threshold ({}) must not exceed qualified threshold ({})",
                self.close_match_threshold,
                self.qualified_threshold
            );
        }
        Ok(())
    }
}

/// Engine configuration loaded from environment variables.
/// Every variable is optional; defaults preserve the product's constants.
#[derive(Debug, Clone)]
pub struct Config {
    pub matching: MatchingConfig,
    pub analysis_delay: Duration,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            matching: MatchingConfig::default(),
            analysis_delay: Duration::from_millis(DEFAULT_ANALYSIS_DELAY_MS),
            rust_log: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let matching = MatchingConfig {
            score_cap: optional_env("MATCH_SCORE_CAP", DEFAULT_SCORE_CAP)?,
            qualified_threshold: optional_env("QUALIFIED_THRESHOLD", DEFAULT_QUALIFIED_THRESHOLD)?,
            close_match_threshold: optional_env(
                "CLOSE_MATCH_THRESHOLD",
                DEFAULT_CLOSE_MATCH_THRESHOLD,
            )?,
        };
        matching.validate().context("Invalid matching configuration")?;

        Ok(Config {
            matching,
            analysis_delay: Duration::from_millis(optional_env(
                "ANALYSIS_DELAY_MS",
                DEFAULT_ANALYSIS_DELAY_MS,
            )?),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn optional_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => parse_value(key, &raw),
        Err(_) => Ok(default),
    }
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.trim()
        .parse::<T>()
        .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'"))
}
