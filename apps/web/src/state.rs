use std::sync::Arc;

use crate::config::Config;
use crate::matching::skills::SkillMatcher;
use crate::quiz::store::QuizStore;
use crate::resumes::store::ResumeStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Append-only resume persistence. Default: PgResumeStore.
    pub resumes: Arc<dyn ResumeStore>,
    /// Read-only quiz question source. Default: PgQuizStore.
    pub quiz: Arc<dyn QuizStore>,
    /// Built once at startup, never mutated afterwards.
    pub skills: Arc<SkillMatcher>,
    pub config: Config,
}
