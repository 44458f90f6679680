use std::path::Path;

use docx_rs::{read_docx, DocumentChild, InsertChild, Paragraph, ParagraphChild, Run, RunChild};

use super::ExtractError;

/// Joins the text of each top-level paragraph with `\n`, in document order.
/// Tables, headers and footers are not read.
pub(super) fn extract(path: &Path) -> Result<String, ExtractError> {
    let bytes = std::fs::read(path)?;
    let document = read_docx(&bytes).map_err(|e| ExtractError::Parse(e.to_string()))?;

    let paragraphs: Vec<String> = document
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(paragraph) => Some(paragraph_text(paragraph)),
            _ => None,
        })
        .collect();

    Ok(paragraphs.join("\n"))
}

fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut buffer = String::new();
    for child in &paragraph.children {
        append_child_text(child, &mut buffer);
    }
    buffer
}

fn append_child_text(child: &ParagraphChild, buffer: &mut String) {
    match child {
        ParagraphChild::Run(run) => append_run_text(run, buffer),
        ParagraphChild::Hyperlink(link) => {
            for inner in &link.children {
                append_child_text(inner, buffer);
            }
        }
        ParagraphChild::Insert(insert) => {
            for inner in &insert.children {
                if let InsertChild::Run(run) = inner {
                    append_run_text(run, buffer);
                }
            }
        }
        _ => {}
    }
}

fn append_run_text(run: &Run, buffer: &mut String) {
    for child in &run.children {
        match child {
            RunChild::Text(text) => buffer.push_str(&text.text),
            RunChild::Tab(_) => buffer.push('\t'),
            RunChild::Break(_) => buffer.push('\n'),
            _ => {}
        }
    }
}
