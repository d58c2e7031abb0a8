// src/routes.rs

use axum::{
    Json, Router,
    http::{HeaderValue, Method},
    middleware,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    handlers::{auth, quiz},
    state::AppState,
    utils::jwt::auth_middleware,
};

/// Assembles the main application router.
///
/// * Merges the auth and quiz sub-routers.
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (store capability + config).
pub fn create_router(state: AppState) -> Router {
    let origins: [HeaderValue; 2] = [
        "http://localhost:3000".parse().unwrap(),
        "http://127.0.0.1:3000".parse().unwrap(),
    ];

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
        ]);

    let auth_routes = Router::new().route("/callback", post(auth::identity_callback));

    let quiz_routes = Router::new()
        .route("/questions", get(quiz::get_questions))
        // Protected quiz routes
        .merge(
            Router::new()
                .route("/submit", post(quiz::submit_answers))
                .route("/history", get(quiz::score_history))
                .layer(middleware::from_fn_with_state(
                    state.clone(),
                    auth_middleware,
                )),
        );

    Router::new()
        .route("/", get(service_status))
        .nest("/api/auth", auth_routes)
        .nest("/api/quiz", quiz_routes)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint; page rendering is out of scope, so this just reports
/// that the service is up.
async fn service_status() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "service": "quiz-server",
        "status": "ok",
    }))
}
