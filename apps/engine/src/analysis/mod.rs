// Resume analysis: the pluggable analyzer, its fixed rubric, and the
// cancellable background task that applies results to the skill profile.

pub mod analyzer;
pub mod rubric;
pub mod task;
