//! Document text extraction — turns an uploaded résumé file into plain text.
//!
//! Extraction never fails past this boundary. Parser errors and empty documents
//! are reported inline as bracketed placeholder strings, and the pipeline keeps
//! running on whatever text comes back.

mod docx;
mod pdf;

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

pub const UNSUPPORTED_FILE_TYPE: &str = "Unsupported file type";

/// The two document formats the service accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(DocumentKind::Pdf),
            "docx" => Some(DocumentKind::Docx),
            _ => None,
        }
    }

    /// Dispatches on the extension after the last dot, like `name.rsplit('.', 1)`.
    /// A bare ".pdf" counts as a PDF, which `Path::extension` would reject.
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        path.as_ref()
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(|name| name.rsplit_once('.'))
            .and_then(|(_, ext)| Self::from_extension(ext))
    }

    /// Suffix for temp files so the extension survives the round-trip to disk.
    pub fn suffix(&self) -> &'static str {
        match self {
            DocumentKind::Pdf => ".pdf",
            DocumentKind::Docx => ".docx",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DocumentKind::Pdf => "PDF",
            DocumentKind::Docx => "DOCX",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Why a parser gave up. Only ever surfaces as the message inside a placeholder.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Parse(String),

    #[error("parser aborted: {0}")]
    Aborted(String),
}

/// Extracts plain text from the file at `path`, dispatching on its extension.
///
/// Returns real content, `"[No extractable text found in PDF|DOCX]"`,
/// `"[Error reading PDF|DOCX: <message>]"`, or `"Unsupported file type"`.
pub async fn extract_text(path: &Path) -> String {
    let Some(kind) = DocumentKind::from_path(path) else {
        return UNSUPPORTED_FILE_TYPE.to_string();
    };

    let owned: PathBuf = path.to_path_buf();
    // Parsers are synchronous and some of them panic on malformed input.
    let outcome = tokio::task::spawn_blocking(move || match kind {
        DocumentKind::Pdf => pdf::extract(&owned),
        DocumentKind::Docx => docx::extract(&owned),
    })
    .await;

    let result = match outcome {
        Ok(result) => result,
        Err(join_err) => Err(ExtractError::Aborted(join_err.to_string())),
    };

    into_text(kind, path, result)
}

fn into_text(kind: DocumentKind, path: &Path, result: Result<String, ExtractError>) -> String {
    match result {
        Ok(text) if text.trim().is_empty() => {
            warn!("No extractable text in {kind} '{}'", path.display());
            format!("[No extractable text found in {kind}]")
        }
        Ok(text) => text,
        Err(e) => {
            warn!("Failed to read {kind} '{}': {e}", path.display());
            format!("[Error reading {kind}: {e}]")
        }
    }
}
