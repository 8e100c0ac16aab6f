//! In-memory stores and state builders for handler tests.

use std::path::Path;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::config::{Config, StoreFailurePolicy};
use crate::errors::AppError;
use crate::matching::skills::SkillMatcher;
use crate::models::quiz::QuizQuestionRow;
use crate::models::resume::ResumeRow;
use crate::quiz::store::QuizStore;
use crate::resumes::store::ResumeStore;
use crate::state::AppState;

#[derive(Default)]
pub struct MemoryResumeStore {
    rows: Mutex<Vec<ResumeRow>>,
    failing: bool,
}

impl MemoryResumeStore {
    /// A store whose every insert fails like an unreachable database.
    pub fn failing() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            failing: true,
        }
    }

    pub fn rows(&self) -> Vec<ResumeRow> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl ResumeStore for MemoryResumeStore {
    async fn insert(&self, filename: &str, content: &str) -> Result<ResumeRow, AppError> {
        if self.failing {
            return Err(AppError::Database(sqlx::Error::PoolTimedOut));
        }
        let row = ResumeRow {
            id: Uuid::new_v4(),
            filename: filename.to_string(),
            content: content.to_string(),
            created_at: Utc::now(),
        };
        self.rows.lock().unwrap().push(row.clone());
        Ok(row)
    }
}

#[derive(Default)]
pub struct MemoryQuizStore {
    pub questions: Vec<QuizQuestionRow>,
}

#[async_trait]
impl QuizStore for MemoryQuizStore {
    async fn list_questions(&self) -> Result<Vec<QuizQuestionRow>, AppError> {
        Ok(self.questions.clone())
    }
}

pub fn sample_questions() -> Vec<QuizQuestionRow> {
    vec![
        QuizQuestionRow {
            id: 1,
            question: "Which language is primarily used for styling web pages?".into(),
            option_a: "Python".into(),
            option_b: "CSS".into(),
            option_c: "SQL".into(),
            option_d: "Java".into(),
            correct_option: "B".into(),
        },
        QuizQuestionRow {
            id: 2,
            question: "Which tool packages applications into containers?".into(),
            option_a: "Excel".into(),
            option_b: "Git".into(),
            option_c: "Docker".into(),
            option_d: "NumPy".into(),
            correct_option: "C".into(),
        },
    ]
}

pub fn test_config(upload_dir: &Path, policy: StoreFailurePolicy) -> Config {
    Config {
        database_url: "postgres://unused".into(),
        database_max_connections: 1,
        port: 0,
        rust_log: "debug".into(),
        upload_dir: upload_dir.to_path_buf(),
        max_upload_bytes: 1024 * 1024,
        store_failure_policy: policy,
    }
}

pub fn test_state(
    upload_dir: &Path,
    policy: StoreFailurePolicy,
    resumes: Arc<MemoryResumeStore>,
    quiz: MemoryQuizStore,
) -> AppState {
    AppState {
        resumes,
        quiz: Arc::new(quiz),
        skills: Arc::new(SkillMatcher::new()),
        config: test_config(upload_dir, policy),
    }
}

/// A one-page PDF showing `text` in Helvetica, with a valid xref table.
pub fn one_page_pdf(text: &str) -> Vec<u8> {
    let escaped = text
        .replace('\\', "\\\\")
        .replace('(', "\\(")
        .replace(')', "\\)");
    let stream = format!("BT /F1 12 Tf 72 720 Td ({escaped}) Tj ET");
    let objects = [
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
        "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
         /Resources << /Font << /F1 5 0 R >> >> /Contents 4 0 R >>"
            .to_string(),
        format!(
            "<< /Length {} >>\nstream\n{stream}\nendstream",
            stream.len()
        ),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
            .to_string(),
    ];

    let mut pdf = b"%PDF-1.4\n".to_vec();
    let mut offsets = Vec::with_capacity(objects.len());
    for (i, body) in objects.iter().enumerate() {
        offsets.push(pdf.len());
        pdf.extend_from_slice(format!("{} 0 obj\n{body}\nendobj\n", i + 1).as_bytes());
    }

    let xref_start = pdf.len();
    let mut xref = format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1);
    for offset in offsets {
        xref.push_str(&format!("{offset:010} 00000 n \n"));
    }
    xref.push_str(&format!(
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_start}\n%%EOF\n",
        objects.len() + 1
    ));
    pdf.extend_from_slice(xref.as_bytes());
    pdf
}
