//! Quiz scoring against submitted option labels.

use std::collections::HashMap;

use serde::Serialize;

use crate::models::quiz::{OptionLabel, QuizQuestionRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuizScore {
    pub correct: usize,
    pub total: usize,
}

/// Maps submitted form fields (`q<id>` → label) to question id → label.
/// Fields that do not name a question are ignored.
pub fn parse_answers(form: HashMap<String, String>) -> HashMap<i32, String> {
    form.into_iter()
        .filter_map(|(key, value)| {
            let id = key.strip_prefix('q')?.parse::<i32>().ok()?;
            Some((id, value))
        })
        .collect()
}

/// One point per stored question whose submitted label equals the correct one
/// (case-insensitive). Missing or unrecognized answers score nothing.
pub fn score_answers(questions: &[QuizQuestionRow], answers: &HashMap<i32, String>) -> QuizScore {
    let correct = questions
        .iter()
        .filter(|q| {
            let submitted = answers.get(&q.id).and_then(|a| OptionLabel::parse(a));
            submitted.is_some() && submitted == q.correct_label()
        })
        .count();

    QuizScore {
        correct,
        total: questions.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: i32, correct: &str) -> QuizQuestionRow {
        QuizQuestionRow {
            id,
            question: format!("Question {id}"),
            option_a: "first".into(),
            option_b: "second".into(),
            option_c: "third".into(),
            option_d: "fourth".into(),
            correct_option: correct.into(),
        }
    }

    fn answers(pairs: &[(i32, &str)]) -> HashMap<i32, String> {
        pairs.iter().map(|(id, a)| (*id, a.to_string())).collect()
    }

    #[test]
    fn test_no_answers_scores_zero() {
        let questions: Vec<_> = (1..=5).map(|id| question(id, "A")).collect();
        let score = score_answers(&questions, &HashMap::new());
        assert_eq!(score, QuizScore { correct: 0, total: 5 });
    }

    #[test]
    fn test_no_questions_scores_zero_of_zero() {
        let score = score_answers(&[], &answers(&[(1, "A")]));
        assert_eq!(score, QuizScore { correct: 0, total: 0 });
    }

    #[test]
    fn test_labels_compare_case_insensitively() {
        let questions = vec![question(1, "B"), question(2, "c")];
        let score = score_answers(&questions, &answers(&[(1, "b"), (2, "C")]));
        assert_eq!(score.correct, 2);
    }

    #[test]
    fn test_wrong_missing_and_garbage_answers_are_incorrect() {
        let questions = vec![
            question(1, "A"),
            question(2, "B"),
            question(3, "C"),
            question(4, "D"),
        ];
        let score = score_answers(&questions, &answers(&[(1, "A"), (2, "C"), (4, "Z")]));
        assert_eq!(score, QuizScore { correct: 1, total: 4 });
    }

    #[test]
    fn test_invalid_stored_label_never_matches() {
        let questions = vec![question(1, "X")];
        let score = score_answers(&questions, &answers(&[(1, "X")]));
        assert_eq!(score.correct, 0);
    }

    #[test]
    fn test_answers_for_unknown_questions_are_ignored() {
        let questions = vec![question(1, "A")];
        let score = score_answers(&questions, &answers(&[(99, "A")]));
        assert_eq!(score, QuizScore { correct: 0, total: 1 });
    }

    #[test]
    fn test_parse_answers_strips_prefix() {
        let form: HashMap<String, String> = [
            ("q3".to_string(), "B".to_string()),
            ("q10".to_string(), "d".to_string()),
            ("submit".to_string(), "Submit".to_string()),
            ("qx".to_string(), "A".to_string()),
        ]
        .into_iter()
        .collect();
        let parsed = parse_answers(form);
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed.get(&3).map(String::as_str), Some("B"));
        assert_eq!(parsed.get(&10).map(String::as_str), Some("d"));
    }
}
