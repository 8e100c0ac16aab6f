//! Upload flow shared by `POST /` and `POST /upload`:
//! save → extract → persist → match skills → recommend jobs.

use std::path::{Path, PathBuf};

use axum::extract::Multipart;
use bytes::Bytes;
use tracing::{error, info, warn};

use crate::config::StoreFailurePolicy;
use crate::errors::AppError;
use crate::matching::jobs::recommend_jobs;
use crate::resumes::extractor::extract_pdf_text;
use crate::state::AppState;

/// Multipart field carrying the resume file.
pub const RESUME_FIELD: &str = "resume";

/// A file received in the `resume` field.
#[derive(Debug)]
pub struct UploadedFile {
    pub filename: String,
    pub data: Bytes,
}

/// Outcome of an upload request.
#[derive(Debug)]
pub enum UploadOutcome {
    /// No usable `.pdf` file was submitted. Nothing was saved or stored.
    Rejected(&'static str),
    Analyzed { skills: Vec<String>, matches: Vec<String> },
}

/// Runs the full upload flow. Only a store failure under the `abort` policy
/// or a malformed multipart body is returned as an error.
pub async fn process_upload(state: &AppState, multipart: Multipart) -> Result<UploadOutcome, AppError> {
    let Some(upload) = read_resume_field(multipart).await? else {
        return Ok(UploadOutcome::Rejected("Please choose a resume file to upload."));
    };

    if !is_pdf_filename(&upload.filename) {
        info!("Ignoring non-PDF upload '{}'", upload.filename);
        return Ok(UploadOutcome::Rejected("Only .pdf resumes can be analyzed."));
    }

    let content = match save_upload(&state.config.upload_dir, &upload).await {
        Ok(path) => extract_pdf_text(&path).await,
        Err(e) => {
            warn!("Failed to save upload '{}': {e}", upload.filename);
            String::new()
        }
    };

    match state.resumes.insert(&upload.filename, &content).await {
        Ok(row) => info!(resume_id = %row.id, "Stored resume '{}'", row.filename),
        Err(e) => match state.config.store_failure_policy {
            StoreFailurePolicy::Degrade => {
                error!("Failed to store resume '{}': {e}", upload.filename)
            }
            StoreFailurePolicy::Abort => return Err(e),
        },
    }

    let skills = state.skills.extract_skills(&content);
    let matches = recommend_jobs(&skills);
    info!(
        "Resume '{}': {} skills, {} job matches",
        upload.filename,
        skills.len(),
        matches.len()
    );

    Ok(UploadOutcome::Analyzed { skills, matches })
}

/// Reads the first `resume` field that carries a file name. Other fields are skipped.
async fn read_resume_field(mut multipart: Multipart) -> Result<Option<UploadedFile>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed upload: {e}")))?
    {
        if field.name() != Some(RESUME_FIELD) {
            continue;
        }
        let Some(filename) = field.file_name().and_then(sanitize_filename) else {
            continue;
        };
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
        return Ok(Some(UploadedFile { filename, data }));
    }
    Ok(None)
}

/// Keeps the client's file name but strips any directory components.
pub fn sanitize_filename(raw: &str) -> Option<String> {
    let name = raw.rsplit(['/', '\\']).next()?.trim();
    match name {
        "" | "." | ".." => None,
        _ => Some(name.to_string()),
    }
}

pub fn is_pdf_filename(filename: &str) -> bool {
    filename.ends_with(".pdf")
}

/// Writes the upload under `dir`. A same-named earlier upload is overwritten.
async fn save_upload(dir: &Path, upload: &UploadedFile) -> std::io::Result<PathBuf> {
    let path = dir.join(&upload.filename);
    tokio::fs::write(&path, &upload.data).await?;
    Ok(path)
}
