use std::collections::HashMap;

use axum::{
    extract::{rejection::FormRejection, State},
    response::Html,
    Form,
};
use rand::seq::SliceRandom;
use tracing::info;

use crate::errors::AppError;
use crate::quiz::scoring::{parse_answers, score_answers};
use crate::render::{render_page, QuizPage, QuizResultPage};
use crate::state::AppState;

/// GET /quiz
/// Questions are shuffled on every request.
pub async fn handle_quiz(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let mut questions = state.quiz.list_questions().await?;
    questions.shuffle(&mut rand::rng());
    render_page(&QuizPage { questions })
}

/// POST /quiz/submit
pub async fn handle_quiz_submit(
    State(state): State<AppState>,
    form: Result<Form<HashMap<String, String>>, FormRejection>,
) -> Result<Html<String>, AppError> {
    let Form(form) = form.map_err(|e| AppError::Validation(e.body_text()))?;
    let questions = state.quiz.list_questions().await?;
    let answers = parse_answers(form);
    let score = score_answers(&questions, &answers);
    info!("Quiz submitted: {}/{}", score.correct, score.total);
    render_page(&QuizResultPage { score })
}
