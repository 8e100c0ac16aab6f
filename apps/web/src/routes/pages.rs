use axum::response::Html;
use chrono::{Datelike, Utc};

use crate::errors::AppError;
use crate::render::{render_page, ChatbotPage, IndexPage, ResultPage, UploadPage};

pub fn current_year() -> i32 {
    Utc::now().year()
}

/// GET /
pub async fn handle_index() -> Result<Html<String>, AppError> {
    render_page(&IndexPage {
        year: current_year(),
        notice: String::new(),
    })
}

/// GET /upload
pub async fn handle_upload_form() -> Result<Html<String>, AppError> {
    render_page(&UploadPage {
        notice: String::new(),
    })
}

/// GET /result
/// Empty result page; results are only produced by an upload.
pub async fn handle_result() -> Result<Html<String>, AppError> {
    render_page(&ResultPage {
        skills: vec![],
        matches: vec![],
    })
}

/// GET /chatbot
pub async fn handle_chatbot() -> Result<Html<String>, AppError> {
    render_page(&ChatbotPage {})
}
