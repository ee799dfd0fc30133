//! Job Scorer: runs the skill matcher across a catalog and ranks it.

use tracing::debug;

use crate::config::MatchingConfig;
use crate::matching::skill_matcher::match_skills;
use crate::models::job::{JobPosting, ScoredJob};

/// `round(100 * matching / required)`, capped at `cap`.
///
/// A job with no required skills scores 0 rather than dividing by zero.
pub fn compute_match_score(matching: usize, required: usize, cap: u8) -> u8 {
    if required == 0 {
        return 0;
    }
    // integer round-half-up of 100 * matching / required
    let percent = (matching * 200 + required) / (required * 2);
    percent.min(cap as usize) as u8
}

/// Scores one posting against `candidate_skills`.
pub fn score_job<S: AsRef<str>>(
    job: &JobPosting,
    candidate_skills: &[S],
    config: &MatchingConfig,
) -> ScoredJob {
    let skill_match = match_skills(&job.skills, candidate_skills);
    let match_score = compute_match_score(
        skill_match.matching.len(),
        job.skills.len(),
        config.score_cap,
    );

    ScoredJob {
        job: job.clone(),
        match_score,
        matching_skills: skill_match.matching,
        missing_skills: skill_match.missing,
    }
}

/// Scores every posting with the default business constants.
pub fn score_jobs<S: AsRef<str>>(catalog: &[JobPosting], candidate_skills: &[S]) -> Vec<ScoredJob> {
    score_jobs_with(catalog, candidate_skills, &MatchingConfig::default())
}

/// Scores every posting and sorts by descending score.
///
/// The sort is stable: equal scores keep their catalog order.
pub fn score_jobs_with<S: AsRef<str>>(
    catalog: &[JobPosting],
    candidate_skills: &[S],
    config: &MatchingConfig,
) -> Vec<ScoredJob> {
    let mut scored: Vec<ScoredJob> = catalog
        .iter()
        .map(|job| score_job(job, candidate_skills, config))
        .collect();

    scored.sort_by(|a, b| b.match_score.cmp(&a.match_score));

    debug!(
        jobs = scored.len(),
        skills = candidate_skills.len(),
        top_score = scored.first().map(|j| j.match_score).unwrap_or(0),
        "Scored job catalog"
    );

    scored
}
