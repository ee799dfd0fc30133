//! Job Categorizer: splits a scored catalog into qualified / close-match / skill-gap tiers.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::MatchingConfig;
use crate::matching::job_scorer::score_jobs_with;
use crate::models::job::{JobPosting, ScoredJob};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Tier {
    Qualified,
    CloseMatch,
    SkillGap,
}

impl Tier {
    pub fn for_score(score: u8, config: &MatchingConfig) -> Self {
        if score >= config.qualified_threshold {
            Tier::Qualified
        } else if score >= config.close_match_threshold {
            Tier::CloseMatch
        } else {
            Tier::SkillGap
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tier::Qualified => "qualified",
            Tier::CloseMatch => "closeMatch",
            Tier::SkillGap => "skillGap",
        }
    }
}

/// Three disjoint, exhaustive partitions of a scored catalog.
/// Each tier keeps the scorer's order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorizedCatalog {
    pub qualified: Vec<ScoredJob>,
    pub close_match: Vec<ScoredJob>,
    pub skill_gap: Vec<ScoredJob>,
}

impl CategorizedCatalog {
    pub fn tier(&self, tier: Tier) -> &[ScoredJob] {
        match tier {
            Tier::Qualified => &self.qualified,
            Tier::CloseMatch => &self.close_match,
            Tier::SkillGap => &self.skill_gap,
        }
    }

    /// Number of jobs across all tiers.
    pub fn total(&self) -> usize {
        self.qualified.len() + self.close_match.len() + self.skill_gap.len()
    }
}

pub fn categorize(scored: Vec<ScoredJob>) -> CategorizedCatalog {
    categorize_with(scored, &MatchingConfig::default())
}

pub fn categorize_with(scored: Vec<ScoredJob>, config: &MatchingConfig) -> CategorizedCatalog {
    let mut catalog = CategorizedCatalog::default();

    for job in scored {
        match Tier::for_score(job.match_score, config) {
            Tier::Qualified => catalog.qualified.push(job),
            Tier::CloseMatch => catalog.close_match.push(job),
            Tier::SkillGap => catalog.skill_gap.push(job),
        }
    }

    debug!(
        qualified = catalog.qualified.len(),
        close_match = catalog.close_match.len(),
        skill_gap = catalog.skill_gap.len(),
        "Categorized scored catalog"
    );

    catalog
}

/// Scores `catalog` against `candidate_skills` and tiers the result.
/// This is the primary entry point for collaborators.
pub fn categorize_from_profile<S: AsRef<str>>(
    catalog: &[JobPosting],
    candidate_skills: &[S],
) -> CategorizedCatalog {
    categorize_from_profile_with(catalog, candidate_skills, &MatchingConfig::default())
}

pub fn categorize_from_profile_with<S: AsRef<str>>(
    catalog: &[JobPosting],
    candidate_skills: &[S],
    config: &MatchingConfig,
) -> CategorizedCatalog {
    categorize_with(score_jobs_with(catalog, candidate_skills, config), config)
}
