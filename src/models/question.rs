// src/models/question.rs

use serde::{Deserialize, Serialize};
use sqlx::{prelude::FromRow, types::Json};

/// Represents the 'questions' table in the database.
///
/// Pre-seeded reference data; this flow never creates or mutates rows.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,

    /// Single-character difficulty tag (e.g. 'A' = easy, 'C' = hard).
    pub category: String,

    /// The text content of the question.
    pub question_text: String,

    /// The four option strings, stored as a JSON array in the database.
    pub options: Json<Vec<String>>,

    /// The correct option. Always one of the four options.
    pub correct_option: String,
}
