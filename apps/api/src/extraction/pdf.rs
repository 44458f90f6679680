use std::path::Path;

use super::ExtractError;

/// Extracts the text of every page, in page order.
pub(super) fn extract(path: &Path) -> Result<String, ExtractError> {
    let bytes = std::fs::read(path)?;
    pdf_extract::extract_text_from_mem(&bytes).map_err(|e| ExtractError::Parse(e.to_string()))
}
