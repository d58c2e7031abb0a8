// src/models/score.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Represents the 'scores' table in the database.
/// One row per completed quiz attempt; append-only, never mutated.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Score {
    pub id: i64,
    pub user_id: i64,
    pub score: i64,

    /// The category of the session just completed (not the next one).
    pub category: String,

    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// DTO for one entry in a user's score history.
#[derive(Debug, Serialize, FromRow)]
pub struct ScoreHistoryEntry {
    pub score: i64,
    pub category: String,
    pub date: chrono::DateTime<chrono::Utc>,
}

/// One (question id, selected option) pair of a submission.
///
/// Fields are optional so that a missing field surfaces as an
/// `Invalid answer format` rejection rather than a body-deserialization
/// reject.
#[derive(Debug, Clone, Deserialize)]
pub struct AnswerPair {
    pub question_id: Option<i64>,
    pub selected_option: Option<String>,
}

/// DTO for submitting a completed quiz attempt.
#[derive(Debug, Deserialize)]
pub struct SubmitAnswersRequest {
    #[serde(default)]
    pub answers: Vec<AnswerPair>,

    /// Category of the session being submitted. Defaults to the hardest.
    #[serde(default = "default_category")]
    pub category: String,
}

fn default_category() -> String {
    crate::scoring::DEFAULT_CATEGORY.to_string()
}
