// src/handlers/auth.rs

use axum::{Json, extract::State, response::IntoResponse};
use serde_json::json;
use validator::Validate;

use crate::{
    config::Config,
    error::AppError,
    models::user::VerifiedIdentity,
    state::DynQuizStore,
    utils::jwt::sign_session,
};

/// Identity callback: exchanges a verified identity assertion for a
/// session token.
///
/// The caller is the trusted end of the external OAuth handshake; by the
/// time this handler runs the (subject id, email) pair has already been
/// verified by the identity provider. Looks up the user by subject id,
/// creating it on first login, and returns a signed session token.
pub async fn identity_callback(
    State(store): State<DynQuizStore>,
    State(config): State<Config>,
    Json(payload): Json<VerifiedIdentity>,
) -> Result<impl IntoResponse, AppError> {
    if payload.validate().is_err() {
        return Err(AppError::BadRequest("Login failed".to_string()));
    }

    let user = store
        .resolve_or_create_user(&payload.subject_id, &payload.email)
        .await?;

    let token = sign_session(user.id, &config.session_secret, config.session_ttl_secs)?;

    Ok(Json(json!({
        "token": token,
        "type": "Bearer",
        "email": user.email,
    })))
}
