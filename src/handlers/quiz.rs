// src/handlers/quiz.rs

use axum::{
    Extension, Json,
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::{
    error::AppError,
    models::score::SubmitAnswersRequest,
    scoring::{self, DEFAULT_CATEGORY, SESSION_SIZE},
    state::DynQuizStore,
    utils::jwt::Claims,
};

#[derive(Debug, Deserialize)]
pub struct QuestionsQuery {
    pub category: Option<String>,
}

/// Returns a randomized question set for a category.
///
/// Uniform random sample of up to `SESSION_SIZE` questions; a category
/// with fewer matching questions returns all of them.
pub async fn get_questions(
    State(store): State<DynQuizStore>,
    Query(query): Query<QuestionsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let category = query.category.as_deref().unwrap_or(DEFAULT_CATEGORY);

    let questions = store.fetch_questions(category, SESSION_SIZE).await?;

    Ok(Json(questions))
}

/// Scores a submission, appends the attempt record and picks the
/// category for the next session.
///
/// All-or-nothing: validation and answer-key resolution happen before
/// any write, so a rejected submission never mutates state.
pub async fn submit_answers(
    State(store): State<DynQuizStore>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<SubmitAnswersRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = claims.user_id()?;

    let pairs = scoring::validate_submission(&req.answers)?;

    let ids: Vec<i64> = pairs.iter().map(|(id, _)| *id).collect();
    let keys = store.answer_keys(&ids).await?;

    let score = scoring::score_submission(&pairs, &keys)?;
    let next_category = scoring::next_category(score, &req.category);

    store.record_score(user_id, score, &req.category).await?;

    Ok(Json(serde_json::json!({
        "score": score,
        "next_category": next_category,
    })))
}

/// Lists every past attempt of the calling user.
pub async fn score_history(
    State(store): State<DynQuizStore>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = claims.user_id()?;

    let history = store.score_history(user_id).await?;

    Ok(Json(history))
}
