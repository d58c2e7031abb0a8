// src/store/sql.rs

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::error::AppError;
use crate::models::{
    question::Question,
    score::{Score, ScoreHistoryEntry},
    user::User,
};

use super::QuizStore;

/// `QuizStore` backed by SQLite through sqlx.
#[derive(Clone)]
pub struct SqlStore {
    pool: SqlitePool,
}

impl SqlStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QuizStore for SqlStore {
    async fn fetch_questions(&self, category: &str, limit: i64) -> Result<Vec<Question>, AppError> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, category, question_text, options, correct_option
            FROM questions
            WHERE category = ?
            ORDER BY RANDOM()
            LIMIT ?
            "#,
        )
        .bind(category)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch questions for category {}: {:?}", category, e);
            AppError::from(e)
        })?;

        Ok(questions)
    }

    async fn answer_keys(&self, ids: &[i64]) -> Result<HashMap<i64, String>, AppError> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        // QueryBuilder for the dynamic IN clause
        let mut query_builder =
            QueryBuilder::<Sqlite>::new("SELECT id, correct_option FROM questions WHERE id IN (");

        let mut separated = query_builder.separated(",");
        for id in ids {
            separated.push_bind(id);
        }
        separated.push_unseparated(")");

        let rows: Vec<(i64, String)> = query_builder
            .build_query_as()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch answer keys: {:?}", e);
                AppError::from(e)
            })?;

        Ok(rows.into_iter().collect())
    }

    async fn resolve_or_create_user(
        &self,
        subject_id: &str,
        email: &str,
    ) -> Result<User, AppError> {
        let existing = sqlx::query_as::<_, User>(
            "SELECT id, subject_id, email, created_at FROM users WHERE subject_id = ?",
        )
        .bind(subject_id)
        .fetch_optional(&self.pool)
        .await?;

        if let Some(user) = existing {
            return Ok(user);
        }

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (subject_id, email, created_at)
            VALUES (?, ?, ?)
            RETURNING id, subject_id, email, created_at
            "#,
        )
        .bind(subject_id)
        .bind(email)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if e.to_string().contains("UNIQUE constraint failed") {
                AppError::Conflict(format!("Email '{}' is already registered", email))
            } else {
                tracing::error!("Failed to create user {}: {:?}", subject_id, e);
                AppError::from(e)
            }
        })?;

        tracing::info!("Created user {} for subject {}", user.id, subject_id);
        Ok(user)
    }

    async fn record_score(
        &self,
        user_id: i64,
        score: i64,
        category: &str,
    ) -> Result<Score, AppError> {
        let record = sqlx::query_as::<_, Score>(
            r#"
            INSERT INTO scores (user_id, score, category, created_at)
            VALUES (?, ?, ?, ?)
            RETURNING id, user_id, score, category, created_at
            "#,
        )
        .bind(user_id)
        .bind(score)
        .bind(category)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to record score for user {}: {:?}", user_id, e);
            AppError::from(e)
        })?;

        Ok(record)
    }

    async fn score_history(&self, user_id: i64) -> Result<Vec<ScoreHistoryEntry>, AppError> {
        let entries = sqlx::query_as::<_, ScoreHistoryEntry>(
            r#"
            SELECT score, category, created_at AS date
            FROM scores
            WHERE user_id = ?
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch score history for user {}: {:?}", user_id, e);
            AppError::from(e)
        })?;

        Ok(entries)
    }
}
