//! Catalog search: free-text search, employment-type filter and re-sorting
//! over already-scored jobs. Works on a whole catalog or a single tier.

use serde::{Deserialize, Serialize};

use crate::models::job::ScoredJob;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    /// Highest match score first; ties keep their incoming order.
    #[default]
    Match,
    /// Highest job id first.
    Recent,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobQuery {
    /// Matched case-insensitively against title, company and location.
    pub search_term: Option<String>,
    /// `None` keeps every employment type.
    pub employment_type: Option<String>,
    #[serde(default)]
    pub sort_by: SortBy,
}

impl JobQuery {
    fn matches(&self, job: &ScoredJob) -> bool {
        let term_ok = match self.search_term.as_deref().map(str::trim) {
            Some(term) if !term.is_empty() => {
                let term = term.to_lowercase();
                [&job.job.title, &job.job.company, &job.job.location]
                    .iter()
                    .any(|field| field.to_lowercase().contains(&term))
            }
            _ => true,
        };

        let type_ok = match self.employment_type.as_deref() {
            Some(kind) => job.job.employment_type.eq_ignore_ascii_case(kind),
            None => true,
        };

        term_ok && type_ok
    }
}

/// Returns the jobs that satisfy `query`, sorted per `query.sort_by`.
pub fn filter_jobs(jobs: &[ScoredJob], query: &JobQuery) -> Vec<ScoredJob> {
    let mut filtered: Vec<ScoredJob> = jobs.iter().filter(|j| query.matches(j)).cloned().collect();

    match query.sort_by {
        SortBy::Match => filtered.sort_by(|a, b| b.match_score.cmp(&a.match_score)),
        SortBy::Recent => filtered.sort_by(|a, b| b.id().cmp(&a.id())),
    }

    filtered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::categorizer::categorize;
    use crate::matching::job_scorer::score_jobs;
    use crate::models::catalog::sample_catalog;

    fn scored() -> Vec<ScoredJob> {
        score_jobs(&sample_catalog(), &["React".to_string(), "JavaScript".to_string()])
    }

    fn ids(jobs: &[ScoredJob]) -> Vec<u32> {
        jobs.iter().map(|j| j.id()).collect()
    }

    #[test]
    fn test_empty_query_keeps_everything_in_score_order() {
        let jobs = scored();
        let result = filter_jobs(&jobs, &JobQuery::default());
        assert_eq!(ids(&result), ids(&jobs));
    }

    #[test]
    fn test_search_term_hits_title_company_location() {
        let jobs = scored();
        let by_title = JobQuery {
            search_term: Some("react".to_string()),
            ..JobQuery::default()
        };
        assert_eq!(ids(&filter_jobs(&jobs, &by_title)), vec![4]);

        let by_company = JobQuery {
            search_term: Some("DATAFLOW".to_string()),
            ..JobQuery::default()
        };
        assert_eq!(ids(&filter_jobs(&jobs, &by_company)), vec![5]);

        let by_location = JobQuery {
            search_term: Some("remote".to_string()),
            ..JobQuery::default()
        };
        assert_eq!(ids(&filter_jobs(&jobs, &by_location)), vec![4]);
    }

    #[test]
    fn test_blank_search_term_is_ignored() {
        let jobs = scored();
        let query = JobQuery {
            search_term: Some("   ".to_string()),
            ..JobQuery::default()
        };
        assert_eq!(filter_jobs(&jobs, &query).len(), 5);
    }

    #[test]
    fn test_employment_type_filter_case_insensitive() {
        let jobs = scored();
        let query = JobQuery {
            employment_type: Some("internship".to_string()),
            ..JobQuery::default()
        };
        assert_eq!(ids(&filter_jobs(&jobs, &query)), vec![3]);
    }

    #[test]
    fn test_sort_recent_orders_by_id_descending() {
        let jobs = scored();
        let query = JobQuery {
            employment_type: Some("Full-time".to_string()),
            sort_by: SortBy::Recent,
            ..JobQuery::default()
        };
        assert_eq!(ids(&filter_jobs(&jobs, &query)), vec![5, 2, 1]);
    }

    #[test]
    fn test_match_sort_keeps_incoming_order_for_ties() {
        let no_skills: [&str; 0] = [];
        let mut tied = score_jobs(&sample_catalog(), &no_skills);
        assert!(tied.iter().all(|j| j.match_score == 0));
        tied.reverse();

        let result = filter_jobs(&tied, &JobQuery::default());
        assert_eq!(ids(&result), vec![5, 4, 3, 2, 1]);

        tied.swap(0, 2);
        let result = filter_jobs(&tied, &JobQuery::default());
        assert_eq!(ids(&result), vec![3, 4, 5, 2, 1]);
    }

    #[test]
    fn test_sort_recent_within_a_single_tier() {
        let no_skills: [&str; 0] = [];
        let tiers = categorize(score_jobs(&sample_catalog(), &no_skills));
        let query = JobQuery {
            sort_by: SortBy::Recent,
            ..JobQuery::default()
        };
        assert_eq!(ids(&filter_jobs(&tiers.skill_gap, &query)), vec![5, 4, 3, 2, 1]);
        assert!(filter_jobs(&tiers.qualified, &query).is_empty());
    }
}
