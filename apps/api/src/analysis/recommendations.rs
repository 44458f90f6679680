use crate::analysis::sections::{Section, SectionMap};

/// Sections every résumé is expected to have.
const REQUIRED_SECTIONS: &[Section] = &[Section::Education, Section::Experience, Section::Skills];

/// Sections with fewer words than this get a "too short" tip.
const MIN_SECTION_WORDS: usize = 10;

pub const WELL_STRUCTURED: &str = "Your resume looks well-structured. No major issues found.";

/// Heuristic advice, in rule order. Rules are not exclusive; the positive
/// message appears only when nothing else fired.
pub fn generate_recommendations(sections: &SectionMap, missing_keywords: &[String]) -> Vec<String> {
    let mut tips = Vec::new();

    for section in REQUIRED_SECTIONS {
        if !sections.contains_key(section) {
            tips.push(format!("Consider adding a '{section}' section to your resume."));
        }
    }

    for (section, content) in sections {
        if content.split_whitespace().count() < MIN_SECTION_WORDS {
            tips.push(format!(
                "The '{section}' section seems very short. Consider adding more detail."
            ));
        }
    }

    if !missing_keywords.is_empty() {
        tips.push(format!(
            "Your resume is missing {} keywords from the job description. Consider incorporating relevant ones.",
            missing_keywords.len()
        ));
    }

    if tips.is_empty() {
        tips.push(WELL_STRUCTURED.to_string());
    }

    tips
}
