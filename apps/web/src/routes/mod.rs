pub mod health;
pub mod pages;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::careers::handlers as careers;
use crate::quiz::handlers as quiz;
use crate::resumes::handlers as resumes;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Resume upload + analysis
        .route(
            "/",
            get(pages::handle_index).post(resumes::handle_home_upload),
        )
        .route(
            "/upload",
            get(pages::handle_upload_form).post(resumes::handle_upload),
        )
        .route("/result", get(pages::handle_result))
        .route("/chatbot", get(pages::handle_chatbot))
        // Career browser
        .route("/category/:domain", get(careers::handle_category))
        .route("/category/:domain/:role", get(careers::handle_role))
        // Quiz
        .route("/quiz", get(quiz::handle_quiz))
        .route("/quiz/submit", post(quiz::handle_quiz_submit))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
