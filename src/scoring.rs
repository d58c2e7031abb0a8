// src/scoring.rs

use std::collections::HashMap;

use crate::error::AppError;
use crate::models::score::AnswerPair;

/// Number of questions presented per quiz session.
pub const SESSION_SIZE: i64 = 10;

/// The hardest category; also the default when none is given.
pub const DEFAULT_CATEGORY: &str = "C";

/// The easiest category, used for the fallback on low scores.
pub const EASIEST_CATEGORY: &str = "A";

// Progression thresholds for a 10-question session.
const ADVANCE_THRESHOLD: i64 = 8;
const HOLD_THRESHOLD: i64 = 5;

/// Checks the shape of a submission before any store access.
///
/// Fail-fast: the whole submission is rejected if it is empty or if any
/// pair is missing its question id or selected option. Returns the
/// cleaned (question id, selected option) pairs on success.
pub fn validate_submission(answers: &[AnswerPair]) -> Result<Vec<(i64, String)>, AppError> {
    if answers.is_empty() {
        return Err(AppError::BadRequest("No answers submitted".to_string()));
    }

    let mut pairs = Vec::with_capacity(answers.len());
    for answer in answers {
        match (answer.question_id, answer.selected_option.as_deref()) {
            (Some(id), Some(option)) if !option.is_empty() => {
                pairs.push((id, option.to_string()));
            }
            _ => return Err(AppError::BadRequest("Invalid answer format".to_string())),
        }
    }

    Ok(pairs)
}

/// Counts correct answers against the store's answer keys.
///
/// Strict string match, no case or whitespace normalization. A pair
/// whose question id has no answer key fails the whole submission,
/// naming the offending id.
pub fn score_submission(
    pairs: &[(i64, String)],
    keys: &HashMap<i64, String>,
) -> Result<i64, AppError> {
    let mut score = 0;
    for (question_id, selected_option) in pairs {
        let correct_option = keys
            .get(question_id)
            .ok_or_else(|| AppError::NotFound(format!("Question {} not found", question_id)))?;

        if selected_option == correct_option {
            score += 1;
        }
    }

    Ok(score)
}

/// Picks the category for the next session from the score just achieved.
///
/// Pure and deterministic: >= 8 resets to the hardest category, 5..=7
/// stays put, <= 4 drops to the easiest. Thresholds assume a session of
/// `SESSION_SIZE` questions.
pub fn next_category(score: i64, current_category: &str) -> String {
    if score >= ADVANCE_THRESHOLD {
        DEFAULT_CATEGORY.to_string()
    } else if score >= HOLD_THRESHOLD {
        current_category.to_string()
    } else {
        EASIEST_CATEGORY.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(id: i64, option: &str) -> AnswerPair {
        AnswerPair {
            question_id: Some(id),
            selected_option: Some(option.to_string()),
        }
    }

    #[test]
    fn next_category_boundaries() {
        // Exact threshold values: 4, 5, 7, 8.
        assert_eq!(next_category(8, "A"), "C");
        assert_eq!(next_category(10, "B"), "C");
        assert_eq!(next_category(7, "B"), "B");
        assert_eq!(next_category(5, "A"), "A");
        assert_eq!(next_category(4, "B"), "A");
        assert_eq!(next_category(0, "C"), "A");
    }

    #[test]
    fn empty_submission_is_rejected() {
        let err = validate_submission(&[]).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(msg) if msg == "No answers submitted"));
    }

    #[test]
    fn missing_selected_option_rejects_whole_submission() {
        let answers = vec![
            pair(1, "B"),
            AnswerPair {
                question_id: Some(2),
                selected_option: None,
            },
            pair(3, "D"),
        ];
        let err = validate_submission(&answers).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(msg) if msg == "Invalid answer format"));
    }

    #[test]
    fn empty_selected_option_rejects_whole_submission() {
        let answers = vec![pair(1, "B"), pair(2, "")];
        let err = validate_submission(&answers).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(msg) if msg == "Invalid answer format"));
    }

    #[test]
    fn missing_question_id_rejects_whole_submission() {
        let answers = vec![AnswerPair {
            question_id: None,
            selected_option: Some("A".to_string()),
        }];
        let err = validate_submission(&answers).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(msg) if msg == "Invalid answer format"));
    }

    #[test]
    fn score_counts_exact_matches_only() {
        let keys: HashMap<i64, String> = [
            (1, "B".to_string()),
            (2, "C".to_string()),
            (3, "D".to_string()),
        ]
        .into_iter()
        .collect();

        let pairs = vec![
            (1, "B".to_string()),
            (2, "A".to_string()),
            (3, "D".to_string()),
        ];

        let score = score_submission(&pairs, &keys).unwrap();
        assert_eq!(score, 2);
        assert_eq!(next_category(score, "C"), "A");
    }

    #[test]
    fn score_does_not_normalize_case() {
        let keys: HashMap<i64, String> = [(1, "B".to_string())].into_iter().collect();
        let pairs = vec![(1, "b".to_string())];
        assert_eq!(score_submission(&pairs, &keys).unwrap(), 0);
    }

    #[test]
    fn zero_and_full_match_scores() {
        let keys: HashMap<i64, String> =
            [(1, "A".to_string()), (2, "B".to_string())].into_iter().collect();

        let all_wrong = vec![(1, "B".to_string()), (2, "A".to_string())];
        assert_eq!(score_submission(&all_wrong, &keys).unwrap(), 0);

        let all_right = vec![(1, "A".to_string()), (2, "B".to_string())];
        assert_eq!(score_submission(&all_right, &keys).unwrap(), 2);
    }

    #[test]
    fn unknown_question_id_names_the_id() {
        let keys: HashMap<i64, String> = [(1, "A".to_string())].into_iter().collect();
        let pairs = vec![(1, "A".to_string()), (42, "B".to_string())];
        let err = score_submission(&pairs, &keys).unwrap_err();
        assert!(matches!(err, AppError::NotFound(msg) if msg == "Question 42 not found"));
    }
}
