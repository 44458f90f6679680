//! Report export — renders a stored analysis as a downloadable DOCX document.
//!
//! Built from the raw texts, never from the highlighted HTML, so no markup
//! leaks into the document.

use std::io::Cursor;

use anyhow::{anyhow, Result};
use docx_rs::{Docx, Paragraph, Run};

use crate::models::report::AnalysisReport;

pub const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const REPORT_FILE_NAME: &str = "resume_analysis.docx";

// Run sizes are in half-points.
const TITLE_SIZE: usize = 36;
const HEADING_SIZE: usize = 28;

fn title(text: &str) -> Paragraph {
    Paragraph::new().add_run(Run::new().add_text(text).bold().size(TITLE_SIZE))
}

fn heading(text: &str) -> Paragraph {
    Paragraph::new().add_run(Run::new().add_text(text).bold().size(HEADING_SIZE))
}

fn line(text: &str) -> Paragraph {
    Paragraph::new().add_run(Run::new().add_text(text))
}

fn labelled(label: &str, value: &str) -> Paragraph {
    Paragraph::new()
        .add_run(Run::new().add_text(format!("{label}: ")).bold())
        .add_run(Run::new().add_text(value))
}

fn list_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "None".to_string()
    } else {
        items.join(", ")
    }
}

pub fn render_report_docx(report: &AnalysisReport) -> Result<Vec<u8>> {
    let mut doc = Docx::new()
        .add_paragraph(title("Resume Analysis Report"))
        .add_paragraph(labelled("File", &report.file_name))
        .add_paragraph(labelled(
            "Generated",
            &report.created_at.format("%Y-%m-%d %H:%M UTC").to_string(),
        ))
        .add_paragraph(labelled(
            "Match Score",
            &format!("{:.2}%", report.match_percent),
        ))
        .add_paragraph(heading("Keywords"))
        .add_paragraph(labelled("Matched", &list_or_none(&report.matched_keywords)))
        .add_paragraph(labelled("Missing", &list_or_none(&report.missing_keywords)))
        .add_paragraph(heading("Skills"))
        .add_paragraph(line(&list_or_none(&report.skills)))
        .add_paragraph(heading("Detected Sections"));

    if report.sections.is_empty() {
        doc = doc.add_paragraph(line("No sections detected."));
    }
    for (section, content) in &report.sections {
        doc = doc.add_paragraph(
            Paragraph::new().add_run(Run::new().add_text(section.name()).bold()),
        );
        for text in content.lines() {
            doc = doc.add_paragraph(line(text));
        }
    }

    doc = doc.add_paragraph(heading("Recommendations"));
    for (i, tip) in report.recommendations.iter().enumerate() {
        doc = doc.add_paragraph(line(&format!("{}. {tip}", i + 1)));
    }

    let mut buffer = Cursor::new(Vec::new());
    doc.build()
        .pack(&mut buffer)
        .map_err(|e| anyhow!("Failed to pack DOCX report: {e}"))?;
    Ok(buffer.into_inner())
}
