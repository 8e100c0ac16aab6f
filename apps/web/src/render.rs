//! Page templates. Each struct is bound at compile time to one file under
//! `templates/`, so there is no template lookup that can fail at runtime.

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::careers::taxonomy::RoleProfile;
use crate::errors::AppError;
use crate::models::quiz::QuizQuestionRow;
use crate::quiz::scoring::QuizScore;

/// Served when even the error template cannot be rendered.
const FALLBACK_ERROR_HTML: &str = "<!DOCTYPE html><html><head><title>Error</title></head>\
<body><h1>Something went wrong</h1><p><a href=\"/\">Back to home</a></p></body></html>";

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage {
    pub year: i32,
    pub notice: String,
}

#[derive(Template)]
#[template(path = "upload.html")]
pub struct UploadPage {
    pub notice: String,
}

#[derive(Template)]
#[template(path = "result.html")]
pub struct ResultPage {
    pub skills: Vec<String>,
    pub matches: Vec<String>,
}

#[derive(Template)]
#[template(path = "chatbot.html")]
pub struct ChatbotPage {}

#[derive(Template)]
#[template(path = "category.html")]
pub struct CategoryPage<'a> {
    pub domain: &'a str,
    pub title: &'a str,
    pub roles: &'a [&'a str],
}

#[derive(Template)]
#[template(path = "role.html")]
pub struct RolePage<'a> {
    pub domain: &'a str,
    pub role: &'a RoleProfile,
}

#[derive(Template)]
#[template(path = "quiz.html")]
pub struct QuizPage {
    pub questions: Vec<QuizQuestionRow>,
}

#[derive(Template)]
#[template(path = "quiz_result.html")]
pub struct QuizResultPage {
    pub score: QuizScore,
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorPage<'a> {
    pub message: &'a str,
}

/// Renders a page into an HTML response body.
pub fn render_page<T: Template>(page: &T) -> Result<Html<String>, AppError> {
    Ok(Html(page.render()?))
}

/// Renders the generic error view with the given status.
pub fn error_page(status: StatusCode, message: &str) -> Response {
    let body = match (ErrorPage { message }).render() {
        Ok(html) => html,
        Err(e) => {
            tracing::error!("Failed to render error page: {e}");
            FALLBACK_ERROR_HTML.to_string()
        }
    };
    (status, Html(body)).into_response()
}
