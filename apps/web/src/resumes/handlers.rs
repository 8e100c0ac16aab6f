use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    response::Html,
};

use crate::errors::AppError;
use crate::render::{render_page, IndexPage, ResultPage, UploadPage};
use crate::resumes::upload::{process_upload, UploadOutcome};
use crate::routes::pages::current_year;
use crate::state::AppState;

/// POST /
/// A rejected upload re-renders the landing page.
pub async fn handle_home_upload(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Html<String>, AppError> {
    let multipart = multipart.map_err(|e| AppError::Validation(e.body_text()))?;
    match process_upload(&state, multipart).await? {
        UploadOutcome::Analyzed { skills, matches } => render_page(&ResultPage { skills, matches }),
        UploadOutcome::Rejected(notice) => render_page(&IndexPage {
            year: current_year(),
            notice: notice.to_string(),
        }),
    }
}

/// POST /upload
/// A rejected upload re-renders the upload form.
pub async fn handle_upload(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Html<String>, AppError> {
    let multipart = multipart.map_err(|e| AppError::Validation(e.body_text()))?;
    match process_upload(&state, multipart).await? {
        UploadOutcome::Analyzed { skills, matches } => render_page(&ResultPage { skills, matches }),
        UploadOutcome::Rejected(notice) => render_page(&UploadPage {
            notice: notice.to_string(),
        }),
    }
}
