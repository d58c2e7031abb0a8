// tests/store_tests.rs

use std::collections::HashSet;

use quiz_server::error::AppError;
use quiz_server::store::{QuizStore, SqlStore};
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

async fn memory_store() -> (SqlStore, SqlitePool) {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to migrate database");

    (SqlStore::new(pool.clone()), pool)
}

async fn seed_questions(pool: &SqlitePool, category: &str, count: usize) -> Vec<i64> {
    let mut ids = Vec::new();
    for i in 0..count {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO questions (category, question_text, options, correct_option)
            VALUES (?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(category)
        .bind(format!("Question {}", i))
        .bind(serde_json::json!(["A", "B", "C", "D"]).to_string())
        .bind("A")
        .fetch_one(pool)
        .await
        .expect("Failed to seed question");
        ids.push(id);
    }
    ids
}

#[tokio::test]
async fn fetch_returns_all_when_fewer_than_limit() {
    let (store, pool) = memory_store().await;
    seed_questions(&pool, "A", 4).await;

    let questions = store.fetch_questions("A", 10).await.unwrap();
    assert_eq!(questions.len(), 4);
    for q in &questions {
        assert_eq!(q.category, "A");
        assert_eq!(q.options.0.len(), 4);
    }
}

#[tokio::test]
async fn fetch_samples_at_most_limit_from_the_category() {
    let (store, pool) = memory_store().await;
    let seeded: HashSet<i64> = seed_questions(&pool, "B", 25).await.into_iter().collect();
    seed_questions(&pool, "C", 5).await;

    for _ in 0..3 {
        let sample = store.fetch_questions("B", 10).await.unwrap();
        assert_eq!(sample.len(), 10);

        let ids: HashSet<i64> = sample.iter().map(|q| q.id).collect();
        assert_eq!(ids.len(), 10, "Sample must not repeat questions");
        assert!(ids.is_subset(&seeded), "Sample must stay in the category");
    }
}

#[tokio::test]
async fn fetch_unknown_category_is_empty_not_an_error() {
    let (store, _pool) = memory_store().await;
    let questions = store.fetch_questions("Z", 10).await.unwrap();
    assert!(questions.is_empty());
}

#[tokio::test]
async fn answer_keys_omits_unknown_ids() {
    let (store, pool) = memory_store().await;
    let ids = seed_questions(&pool, "A", 2).await;

    let keys = store.answer_keys(&[ids[0], ids[1], 999999]).await.unwrap();
    assert_eq!(keys.len(), 2);
    assert_eq!(keys[&ids[0]], "A");
    assert!(!keys.contains_key(&999999));
}

#[tokio::test]
async fn resolve_or_create_is_idempotent_per_subject() {
    let (store, pool) = memory_store().await;

    let first = store
        .resolve_or_create_user("subject-1", "one@example.com")
        .await
        .unwrap();
    let second = store
        .resolve_or_create_user("subject-1", "one@example.com")
        .await
        .unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(second.subject_id, "subject-1");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn duplicate_email_for_new_subject_is_a_conflict() {
    let (store, _pool) = memory_store().await;

    store
        .resolve_or_create_user("subject-1", "shared@example.com")
        .await
        .unwrap();

    let err = store
        .resolve_or_create_user("subject-2", "shared@example.com")
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Conflict(_)));
}

#[tokio::test]
async fn recorded_scores_are_append_only_and_per_user() {
    let (store, _pool) = memory_store().await;

    let alice = store
        .resolve_or_create_user("subject-a", "a@example.com")
        .await
        .unwrap();
    let bob = store
        .resolve_or_create_user("subject-b", "b@example.com")
        .await
        .unwrap();

    // Two attempts for the same user append two independent records.
    let first = store.record_score(alice.id, 7, "B").await.unwrap();
    let second = store.record_score(alice.id, 9, "B").await.unwrap();
    assert_ne!(first.id, second.id);

    let history = store.score_history(alice.id).await.unwrap();
    assert_eq!(history.len(), 2);
    let scores: Vec<i64> = history.iter().map(|e| e.score).collect();
    assert!(scores.contains(&7) && scores.contains(&9));
    assert!(history.iter().all(|e| e.category == "B"));

    // The other user's ledger is untouched.
    let other = store.score_history(bob.id).await.unwrap();
    assert!(other.is_empty());
}

#[tokio::test]
async fn history_is_empty_for_a_new_user() {
    let (store, _pool) = memory_store().await;
    let user = store
        .resolve_or_create_user("subject-new", "new@example.com")
        .await
        .unwrap();

    let history = store.score_history(user.id).await.unwrap();
    assert!(history.is_empty());
}
