// Skill matching engine: per-job skill matching, catalog scoring, tiering and search.
// Everything here is a pure function of its inputs; the skill profile is always
// passed in explicitly.

pub mod categorizer;
pub mod job_scorer;
pub mod search;
pub mod skill_matcher;
