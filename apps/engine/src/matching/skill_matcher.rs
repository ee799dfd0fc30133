//! Skill Matcher: splits a job's required skills into matching and missing
//! relative to a candidate's skills.
//!
//! Two skills match when either one, lower-cased, contains the other. This is
//! deliberately permissive: "JS" matches "JavaScript", but "C" also matches
//! "CSS", and an empty candidate skill matches everything.

use serde::{Deserialize, Serialize};

/// Partition of one job's required skills.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillMatch {
    pub matching: Vec<String>, // required-skill order
    pub missing: Vec<String>,  // required-skill order
}

/// Bidirectional case-insensitive substring test.
pub fn skills_overlap(a: &str, b: &str) -> bool {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    a.contains(&b) || b.contains(&a)
}

/// Partitions `required` into skills covered by `candidate` and the rest.
///
/// Both outputs preserve the order (and any duplicates) of `required`.
pub fn match_skills<R, C>(required: &[R], candidate: &[C]) -> SkillMatch
where
    R: AsRef<str>,
    C: AsRef<str>,
{
    let candidate_lower: Vec<String> = candidate
        .iter()
        .map(|c| c.as_ref().to_lowercase())
        .collect();

    let mut result = SkillMatch::default();

    for skill in required {
        let skill = skill.as_ref();
        let skill_lower = skill.to_lowercase();
        let covered = candidate_lower
            .iter()
            .any(|c| c.contains(&skill_lower) || skill_lower.contains(c.as_str()));

        if covered {
            result.matching.push(skill.to_string());
        } else {
            result.missing.push(skill.to_string());
        }
    }

    result
}
