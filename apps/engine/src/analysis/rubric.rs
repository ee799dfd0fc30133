//! Fixed analysis rubric: skill vocabulary scan, per-section heuristics and
//! suggestion selection. Pure and synchronous; the async analyzer wraps it.

use std::collections::BTreeMap;

use crate::matching::skill_matcher::skills_overlap;
use crate::models::analysis::{
    AnalysisResult, SectionFeedback, SECTION_CONTACT, SECTION_EDUCATION, SECTION_EXPERIENCE,
    SECTION_SKILLS, SECTION_SUMMARY,
};

/// Skills the extractor recognizes, in reporting order.
const SKILL_VOCABULARY: &[&str] = &[
    "JavaScript",
    "TypeScript",
    "React",
    "Next.js",
    "Vue",
    "Angular",
    "Node.js",
    "Express",
    "HTML",
    "CSS",
    "Tailwind CSS",
    "Python",
    "Django",
    "Flask",
    "Java",
    "Spring",
    "Go",
    "Rust",
    "C++",
    "C#",
    "SQL",
    "PostgreSQL",
    "MySQL",
    "MongoDB",
    "Redis",
    "GraphQL",
    "Docker",
    "Kubernetes",
    "Terraform",
    "AWS",
    "Azure",
    "GCP",
    "Linux",
    "Git",
    "CI/CD",
    "Testing",
    "Jest",
];

/// Reported when the vocabulary scan finds nothing.
const BASELINE_SKILLS: &[&str] = &["JavaScript", "React", "CSS", "HTML", "Git", "Node.js"];

/// Skills that show up in most postings; anything the resume lacks is a gap.
const TYPICAL_POSTING_SKILLS: &[&str] = &["TypeScript", "Docker", "AWS", "Testing"];

const SECTION_WEIGHTS: &[(&str, f64)] = &[
    (SECTION_CONTACT, 0.15),
    (SECTION_SUMMARY, 0.15),
    (SECTION_EXPERIENCE, 0.35),
    (SECTION_SKILLS, 0.20),
    (SECTION_EDUCATION, 0.15),
];

const SUMMARY_HEADINGS: &[&str] = &["summary", "objective", "profile", "about me"];
const EXPERIENCE_HEADINGS: &[&str] = &["experience", "employment", "work history"];
const EDUCATION_KEYWORDS: &[&str] = &[
    "university",
    "college",
    "bachelor",
    "master",
    "degree",
    "b.s",
    "b.sc",
    "m.s",
    "phd",
];
const ACTION_VERBS: &[&str] = &[
    "led",
    "built",
    "developed",
    "designed",
    "implemented",
    "managed",
    "launched",
    "shipped",
];
const IMPACT_NOUNS: &[&str] = &["users", "customers", "requests", "hours", "million", "x faster"];

const SUGGEST_METRICS: &str = "Add more quantifiable achievements to your experience section";
const SUGGEST_KEYWORDS: &str = "Include relevant keywords for ATS optimization";
const SUGGEST_SUMMARY: &str = "Consider adding a professional summary";
const SUGGEST_PROJECTS: &str = "Highlight your most impactful projects";
const SUGGEST_TAILOR: &str = "Keep tailoring your resume to each role you apply for";

/// Returns true when the text has something a reader could analyze.
pub fn is_readable(text: &str) -> bool {
    text.chars().any(char::is_alphanumeric)
}

/// Runs the full rubric over already-validated resume text.
pub fn analyze_text(text: &str) -> AnalysisResult {
    let tokens = tokenize(text);
    let found = scan_vocabulary(&tokens);
    let found_count = found.len();

    let extracted_skills = if found.is_empty() {
        BASELINE_SKILLS.iter().map(|s| s.to_string()).collect()
    } else {
        found
    };
    let skill_gaps = skill_gaps(&extracted_skills);

    let lower = text.to_lowercase();
    let lines: Vec<&str> = lower.lines().map(str::trim).collect();

    let mut sections = BTreeMap::new();
    sections.insert(SECTION_CONTACT.to_string(), score_contact(&lower));
    sections.insert(SECTION_SUMMARY.to_string(), score_summary(&lines, &tokens));
    sections.insert(
        SECTION_EXPERIENCE.to_string(),
        score_experience(&lines, &tokens),
    );
    sections.insert(SECTION_SKILLS.to_string(), score_skills(&lines, found_count));
    sections.insert(SECTION_EDUCATION.to_string(), score_education(&lines, &lower));

    let overall_score = overall_score(&sections);
    let suggestions = build_suggestions(&sections, &skill_gaps, &tokens);

    AnalysisResult {
        extracted_skills,
        suggestions,
        skill_gaps,
        overall_score,
        sections,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Skill extraction
// ────────────────────────────────────────────────────────────────────────────

/// Lower-cased tokens; keeps `+ # . /` inside tokens so "c++", "node.js" and
/// "ci/cd" survive, and strips them from the edges.
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || matches!(c, '+' | '#' | '.' | '/' | '@')))
        .map(|t| t.trim_matches(|c: char| matches!(c, '.' | '/')))
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

fn contains_phrase(tokens: &[String], phrase: &[String]) -> bool {
    !phrase.is_empty() && tokens.windows(phrase.len()).any(|w| w == phrase)
}

fn scan_vocabulary(tokens: &[String]) -> Vec<String> {
    SKILL_VOCABULARY
        .iter()
        .filter(|skill| contains_phrase(tokens, &tokenize(skill)))
        .map(|skill| skill.to_string())
        .collect()
}

/// Typical posting skills not already covered by `extracted`.
fn skill_gaps(extracted: &[String]) -> Vec<String> {
    TYPICAL_POSTING_SKILLS
        .iter()
        .filter(|gap| !extracted.iter().any(|s| skills_overlap(s, gap)))
        .map(|gap| gap.to_string())
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Section heuristics
// ────────────────────────────────────────────────────────────────────────────

fn section<'a>(score: u32, bands: [(u32, &'a str); 2], fallback: &'a str) -> SectionFeedback {
    let score = score.min(100);
    let feedback = bands
        .iter()
        .find(|(min, _)| score >= *min)
        .map(|(_, text)| *text)
        .unwrap_or(fallback);
    SectionFeedback {
        score: score as u8,
        feedback: feedback.to_string(),
    }
}

fn has_heading(lines: &[&str], headings: &[&str]) -> bool {
    lines
        .iter()
        .any(|line| headings.iter().any(|h| line.starts_with(h)))
}

fn has_any(tokens: &[String], words: &[&str]) -> bool {
    words.iter().any(|w| tokens.iter().any(|t| t == w))
}

/// True when some run of phone-ish characters holds at least 10 digits.
fn has_phone(text: &str) -> bool {
    let mut digits = 0;
    for c in text.chars() {
        if c.is_ascii_digit() {
            digits += 1;
            if digits >= 10 {
                return true;
            }
        } else if !matches!(c, ' ' | '-' | '(' | ')' | '+' | '.') {
            digits = 0;
        }
    }
    false
}

fn score_contact(lower: &str) -> SectionFeedback {
    let has_email = lower
        .split_whitespace()
        .any(|w| w.contains('@') && w.contains('.'));
    let has_link = ["linkedin", "github", "http"]
        .iter()
        .any(|k| lower.contains(k));

    let score = 20
        + 40 * u32::from(has_email)
        + 25 * u32::from(has_phone(lower))
        + 15 * u32::from(has_link);

    section(
        score,
        [
            (90, "Complete and professional"),
            (60, "Add the missing contact details (email, phone or profile link)"),
        ],
        "Contact information is missing or incomplete",
    )
}

fn score_summary(lines: &[&str], tokens: &[String]) -> SectionFeedback {
    let score = if has_heading(lines, SUMMARY_HEADINGS) {
        if has_any(tokens, &["years"]) {
            90
        } else {
            65
        }
    } else {
        30
    };

    section(
        score,
        [(85, "Clear and compelling"), (60, "Could be more compelling")],
        "Add a professional summary",
    )
}

/// A line counts as quantified when it carries a percentage, a currency
/// amount, or a number next to an impact noun.
fn is_quantified(line: &str) -> bool {
    let has_digit = line.chars().any(|c| c.is_ascii_digit());
    line.contains('%')
        || line.contains('$')
        || (has_digit && IMPACT_NOUNS.iter().any(|n| line.contains(n)))
}

fn score_experience(lines: &[&str], tokens: &[String]) -> SectionFeedback {
    let heading = has_heading(lines, EXPERIENCE_HEADINGS);
    let verbs = has_any(tokens, ACTION_VERBS);
    let quantified = lines.iter().filter(|l| is_quantified(l)).count() as u32;

    let score = match (heading, verbs) {
        (true, _) => 50 + 20 * u32::from(verbs) + (quantified * 10).min(30),
        (false, true) => 40 + (quantified * 10).min(20),
        (false, false) => 20,
    };

    section(
        score,
        [
            (85, "Strong, quantified experience"),
            (60, "Good detail, add more metrics"),
        ],
        "Describe your experience with concrete achievements",
    )
}

fn score_skills(lines: &[&str], found: usize) -> SectionFeedback {
    let heading = has_heading(lines, &["skills", "technical skills", "technologies"]);
    let score = 40 + (found as u32 * 8).min(50) + 10 * u32::from(heading);

    section(
        score,
        [(85, "Broad, relevant skill set"), (60, "Add trending technologies")],
        "List your technical skills explicitly",
    )
}

fn score_education(lines: &[&str], lower: &str) -> SectionFeedback {
    let heading = has_heading(lines, &["education"]);
    let degree = EDUCATION_KEYWORDS.iter().any(|k| lower.contains(k));

    let score = match (heading, degree) {
        (true, true) => 90,
        (true, false) | (false, true) => 65,
        (false, false) => 30,
    };

    section(
        score,
        [(85, "Well structured"), (60, "Add degree, institution and dates")],
        "Add your education background",
    )
}

fn overall_score(sections: &BTreeMap<String, SectionFeedback>) -> u8 {
    let weighted: f64 = SECTION_WEIGHTS
        .iter()
        .map(|(name, weight)| sections.get(*name).map(|s| s.score as f64).unwrap_or(0.0) * weight)
        .sum();
    let total_weight: f64 = SECTION_WEIGHTS.iter().map(|(_, w)| w).sum();

    (weighted / total_weight).round().clamp(0.0, 100.0) as u8
}

fn build_suggestions(
    sections: &BTreeMap<String, SectionFeedback>,
    gaps: &[String],
    tokens: &[String],
) -> Vec<String> {
    let score_of = |name: &str| sections.get(name).map(|s| s.score).unwrap_or(0);
    let mut suggestions = Vec::new();

    if score_of(SECTION_EXPERIENCE) < 85 {
        suggestions.push(SUGGEST_METRICS.to_string());
    }
    if !gaps.is_empty() || score_of(SECTION_SKILLS) < 85 {
        suggestions.push(SUGGEST_KEYWORDS.to_string());
    }
    if score_of(SECTION_SUMMARY) < 60 {
        suggestions.push(SUGGEST_SUMMARY.to_string());
    }
    if !has_any(tokens, &["project", "projects"]) {
        suggestions.push(SUGGEST_PROJECTS.to_string());
    }
    if suggestions.is_empty() {
        suggestions.push(SUGGEST_TAILOR.to_string());
    }

    suggestions
}
