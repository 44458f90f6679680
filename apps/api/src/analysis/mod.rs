// Résumé analysis pipeline.
// Each stage is a pure function of the previous stage's output:
// keyword match → highlight → skills → sections → recommendations.

pub mod handlers;
pub mod highlight;
pub mod keywords;
pub mod recommendations;
pub mod sections;
pub mod skills;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::analysis::highlight::{escape_html, highlight, HighlightLabel};
use crate::analysis::keywords::match_keywords;
use crate::analysis::recommendations::generate_recommendations;
use crate::analysis::sections::detect_sections;
use crate::analysis::skills::extract_skills;
use crate::extraction::DocumentKind;
use crate::models::report::AnalysisReport;

#[derive(Debug, Clone)]
pub struct AnalysisInput {
    pub file_name: String,
    pub document_kind: Option<DocumentKind>,
    pub resume_text: String,
    pub job_description: String,
}

/// Runs the full pipeline over already-extracted résumé text.
///
/// Extraction placeholders ("[Error reading PDF: …]") are analysed like any
/// other text; they simply produce a low score and "add a section" tips.
pub fn run_analysis(input: AnalysisInput) -> AnalysisReport {
    let analysis_id = Uuid::new_v4();
    let result = match_keywords(&input.resume_text, &input.job_description);

    let escaped_jd = escape_html(&input.job_description);
    let highlighted_job_description = highlight(
        &highlight(&escaped_jd, &result.matched, HighlightLabel::Match),
        &result.missing,
        HighlightLabel::Missing,
    );
    let highlighted_resume = highlight(
        &escape_html(&input.resume_text),
        &result.matched,
        HighlightLabel::Match,
    );

    let skills = extract_skills(&input.resume_text);
    let sections = detect_sections(&input.resume_text);
    let recommendations = generate_recommendations(&sections, &result.missing);

    info!(
        %analysis_id,
        match_percent = result.match_percent,
        matched = result.matched.len(),
        missing = result.missing.len(),
        skills = skills.len(),
        sections = sections.len(),
        "Analysis complete for '{}'",
        input.file_name
    );

    AnalysisReport {
        analysis_id,
        created_at: Utc::now(),
        file_name: input.file_name,
        document_kind: input.document_kind,
        resume_text: input.resume_text,
        job_description: input.job_description,
        highlighted_resume,
        highlighted_job_description,
        match_percent: result.match_percent,
        matched_keywords: result.matched.into_iter().collect(),
        missing_keywords: result.missing,
        skills,
        sections,
        recommendations,
    }
}
