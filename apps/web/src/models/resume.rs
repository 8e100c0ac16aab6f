use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One uploaded resume. Rows are append-only: never updated, never deleted.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeRow {
    pub id: Uuid,
    pub filename: String,
    /// Extracted text; empty when extraction failed.
    pub content: String,
    pub created_at: DateTime<Utc>,
}
