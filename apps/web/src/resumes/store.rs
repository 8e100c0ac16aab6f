//! Resume Store: append-only persistence of uploaded resumes.
//!
//! `AppState` holds an `Arc<dyn ResumeStore>`; PostgreSQL is the default backend.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::ResumeRow;

/// Append-only: no update or delete operation exists.
#[async_trait]
pub trait ResumeStore: Send + Sync {
    async fn insert(&self, filename: &str, content: &str) -> Result<ResumeRow, AppError>;
}

pub struct PgResumeStore {
    pool: PgPool,
}

impl PgResumeStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResumeStore for PgResumeStore {
    async fn insert(&self, filename: &str, content: &str) -> Result<ResumeRow, AppError> {
        let row = sqlx::query_as::<_, ResumeRow>(
            r#"
            INSERT INTO resumes (id, filename, content)
            VALUES ($1, $2, $3)
            RETURNING id, filename, content, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(filename)
        .bind(content)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }
}
