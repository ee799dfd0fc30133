use serde::{Deserialize, Serialize};

pub type JobId = u32;

/// An immutable job posting as supplied by the catalog owner.
///
/// `skills` is display-ordered and may contain duplicates; the order carries
/// no meaning for scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    pub id: JobId,
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(rename = "type")]
    pub employment_type: String,
    pub salary: String,
    pub description: String,
    pub experience: String,
    pub skills: Vec<String>,
}

/// A posting annotated with its match against one skill profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredJob {
    #[serde(flatten)]
    pub job: JobPosting,
    pub match_score: u8, // 0 – score cap
    pub matching_skills: Vec<String>,
    pub missing_skills: Vec<String>,
}

impl ScoredJob {
    pub fn id(&self) -> JobId {
        self.job.id
    }
}
