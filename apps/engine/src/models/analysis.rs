use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const SECTION_CONTACT: &str = "contact";
pub const SECTION_SUMMARY: &str = "summary";
pub const SECTION_EXPERIENCE: &str = "experience";
pub const SECTION_SKILLS: &str = "skills";
pub const SECTION_EDUCATION: &str = "education";

/// Sections every analysis must report on.
pub const REQUIRED_SECTIONS: &[&str] = &[
    SECTION_CONTACT,
    SECTION_SUMMARY,
    SECTION_EXPERIENCE,
    SECTION_SKILLS,
    SECTION_EDUCATION,
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionFeedback {
    pub score: u8, // 0 – 100
    pub feedback: String,
}

/// Durable analysis output. The collaborator persists this shape as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub extracted_skills: Vec<String>,
    pub suggestions: Vec<String>,
    pub skill_gaps: Vec<String>,
    pub overall_score: u8, // 0 – 100
    pub sections: BTreeMap<String, SectionFeedback>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persisted_shape_keys() {
        let mut sections = BTreeMap::new();
        sections.insert(
            SECTION_CONTACT.to_string(),
            SectionFeedback {
                score: 95,
                feedback: "Complete and professional".to_string(),
            },
        );
        let result = AnalysisResult {
            extracted_skills: vec!["Rust".to_string()],
            suggestions: vec![],
            skill_gaps: vec!["Docker".to_string()],
            overall_score: 78,
            sections,
        };

        let value = serde_json::to_value(&result).unwrap();
        for key in [
            "extractedSkills",
            "suggestions",
            "skillGaps",
            "overallScore",
            "sections",
        ] {
            assert!(value.get(key).is_some(), "missing key {key}");
        }
        assert_eq!(value["sections"]["contact"]["score"], 95);
    }
}
