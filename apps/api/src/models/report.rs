use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analysis::sections::SectionMap;
use crate::extraction::DocumentKind;

/// Handle returned by an analysis and used to fetch or export it later.
pub type AnalysisId = Uuid;

/// Everything one analysis produced. Stored as-is and returned as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub analysis_id: AnalysisId,
    pub created_at: DateTime<Utc>,
    pub file_name: String,
    pub document_kind: Option<DocumentKind>,
    /// Raw extracted text, possibly a placeholder such as "[Error reading PDF: …]".
    pub resume_text: String,
    pub job_description: String,
    /// HTML-escaped résumé with matched keywords wrapped in `<span class="match">`.
    pub highlighted_resume: String,
    /// HTML-escaped job description with `match` and `missing` spans.
    pub highlighted_job_description: String,
    pub match_percent: f64,
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub skills: Vec<String>,
    pub sections: SectionMap,
    pub recommendations: Vec<String>,
}
