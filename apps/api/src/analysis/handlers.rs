//! Axum route handlers for the Analysis API.

use axum::{
    extract::{multipart::MultipartError, Multipart, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use bytes::Bytes;
use tracing::info;

use crate::analysis::{run_analysis, AnalysisInput};
use crate::errors::AppError;
use crate::extraction::{extract_text, DocumentKind};
use crate::models::report::{AnalysisId, AnalysisReport};
use crate::render::{render_report_docx, DOCX_CONTENT_TYPE, REPORT_FILE_NAME};
use crate::state::AppState;

const RESUME_FIELD: &str = "resume";
const JOB_DESCRIPTION_FIELD: &str = "job_description";

struct Upload {
    file_name: String,
    data: Bytes,
}

/// Keeps ASCII alphanumerics, `.`, `_` and `-`; whitespace becomes `_`.
/// Path separators are treated as whitespace so nothing can escape a directory.
pub fn secure_filename(name: &str) -> String {
    let flattened = name.replace(['/', '\\'], " ");
    let joined = flattened.split_whitespace().collect::<Vec<_>>().join("_");
    joined
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        .collect::<String>()
        .trim_matches(|c| c == '.' || c == '_')
        .to_string()
}

fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge("Uploaded file exceeds the size limit.".to_string())
    } else {
        AppError::Validation(e.body_text())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analyze
///
/// Multipart form: `resume` (PDF or DOCX file) and optional `job_description`.
/// Extracts text, runs the pipeline, stores the report and returns it.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisReport>, AppError> {
    let mut upload: Option<Upload> = None;
    let mut job_description = String::new();

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            RESUME_FIELD => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let data = field.bytes().await.map_err(multipart_error)?;
                upload = Some(Upload { file_name, data });
            }
            JOB_DESCRIPTION_FIELD => {
                job_description = field.text().await.map_err(multipart_error)?;
            }
            _ => {}
        }
    }

    let upload = upload.ok_or_else(|| AppError::Validation("No file uploaded.".to_string()))?;
    if upload.file_name.is_empty() {
        return Err(AppError::Validation("No selected file.".to_string()));
    }
    let kind = DocumentKind::from_path(&upload.file_name).ok_or_else(|| {
        AppError::Validation("File type not allowed. Please upload a PDF or DOCX.".to_string())
    })?;
    if upload.data.len() > state.config.max_upload_bytes {
        return Err(AppError::PayloadTooLarge(format!(
            "Uploaded file exceeds the {} byte limit.",
            state.config.max_upload_bytes
        )));
    }

    let file_name = secure_filename(&upload.file_name);
    info!(
        "Received {kind} upload '{file_name}' ({} bytes)",
        upload.data.len()
    );

    // Deleted when `temp` drops at the end of the request.
    let temp = tempfile::Builder::new()
        .prefix("resume-")
        .suffix(kind.suffix())
        .tempfile()
        .map_err(|e| AppError::Internal(e.into()))?;
    tokio::fs::write(temp.path(), &upload.data)
        .await
        .map_err(|e| AppError::Internal(e.into()))?;

    let resume_text = extract_text(temp.path()).await;

    let report = run_analysis(AnalysisInput {
        file_name,
        document_kind: Some(kind),
        resume_text,
        job_description,
    });
    state.results.put(&report).await?;

    Ok(Json(report))
}

/// GET /api/v1/analyze/:analysis_id
pub async fn handle_get_analysis(
    State(state): State<AppState>,
    Path(analysis_id): Path<AnalysisId>,
) -> Result<Json<AnalysisReport>, AppError> {
    let report = state
        .results
        .get(analysis_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Analysis {analysis_id} not found")))?;
    Ok(Json(report))
}

/// GET /api/v1/analyze/:analysis_id/download
///
/// Renders the stored analysis as a DOCX attachment.
pub async fn handle_download(
    State(state): State<AppState>,
    Path(analysis_id): Path<AnalysisId>,
) -> Result<impl IntoResponse, AppError> {
    let report = state
        .results
        .get(analysis_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Analysis {analysis_id} not found")))?;

    let document = render_report_docx(&report)?;
    info!(%analysis_id, bytes = document.len(), "Exported analysis report");

    Ok((
        [
            (header::CONTENT_TYPE, DOCX_CONTENT_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{REPORT_FILE_NAME}\""),
            ),
        ],
        document,
    ))
}
