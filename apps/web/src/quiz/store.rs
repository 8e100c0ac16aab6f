use async_trait::async_trait;
use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::quiz::QuizQuestionRow;

/// Read-only source of quiz questions. Questions are populated out-of-band.
#[async_trait]
pub trait QuizStore: Send + Sync {
    /// All questions, in no particular order.
    async fn list_questions(&self) -> Result<Vec<QuizQuestionRow>, AppError>;
}

pub struct PgQuizStore {
    pool: PgPool,
}

impl PgQuizStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QuizStore for PgQuizStore {
    async fn list_questions(&self) -> Result<Vec<QuizQuestionRow>, AppError> {
        let rows = sqlx::query_as::<_, QuizQuestionRow>(
            "SELECT id, question, option_a, option_b, option_c, option_d, correct_option FROM quiz_questions",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
