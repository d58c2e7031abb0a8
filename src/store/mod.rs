// src/store/mod.rs

pub mod sql;

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::AppError;
use crate::models::{
    question::Question,
    score::{Score, ScoreHistoryEntry},
    user::User,
};

pub use sql::SqlStore;

/// Storage capability for the quiz flow.
///
/// Injected into handlers as a trait object so the flow can be exercised
/// against fakes as well as the SQL-backed store. Each method is a single
/// short-lived operation; writes are atomic per call and nothing here
/// spans a cross-request transaction.
#[async_trait]
pub trait QuizStore: Send + Sync {
    /// Uniform random sample of up to `limit` questions in `category`.
    /// Fewer matching rows than `limit` returns all of them, not an error.
    async fn fetch_questions(&self, category: &str, limit: i64) -> Result<Vec<Question>, AppError>;

    /// Correct options for the given question ids, keyed by id. Ids absent
    /// from the result do not exist in the question bank.
    async fn answer_keys(&self, ids: &[i64]) -> Result<HashMap<i64, String>, AppError>;

    /// Looks up the user owning an identity-provider subject, creating the
    /// record on first sight.
    async fn resolve_or_create_user(&self, subject_id: &str, email: &str)
    -> Result<User, AppError>;

    /// Appends an immutable attempt record stamped with the current time.
    async fn record_score(
        &self,
        user_id: i64,
        score: i64,
        category: &str,
    ) -> Result<Score, AppError>;

    /// All attempts recorded for `user_id`, newest first.
    async fn score_history(&self, user_id: i64) -> Result<Vec<ScoreHistoryEntry>, AppError>;
}
