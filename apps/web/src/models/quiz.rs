use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Label of one of the four answer options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OptionLabel {
    A,
    B,
    C,
    D,
}

impl OptionLabel {
    /// Case-insensitive, surrounding whitespace ignored.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "A" => Some(OptionLabel::A),
            "B" => Some(OptionLabel::B),
            "C" => Some(OptionLabel::C),
            "D" => Some(OptionLabel::D),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OptionLabel::A => "A",
            OptionLabel::B => "B",
            OptionLabel::C => "C",
            OptionLabel::D => "D",
        }
    }
}

/// A single answer choice as shown on the quiz page.
#[derive(Debug, Clone)]
pub struct QuizOption<'a> {
    pub label: OptionLabel,
    pub text: &'a str,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct QuizQuestionRow {
    pub id: i32,
    pub question: String,
    pub option_a: String,
    pub option_b: String,
    pub option_c: String,
    pub option_d: String,
    pub correct_option: String,
}

impl QuizQuestionRow {
    pub fn options(&self) -> [QuizOption<'_>; 4] {
        [
            QuizOption { label: OptionLabel::A, text: &self.option_a },
            QuizOption { label: OptionLabel::B, text: &self.option_b },
            QuizOption { label: OptionLabel::C, text: &self.option_c },
            QuizOption { label: OptionLabel::D, text: &self.option_d },
        ]
    }

    /// `None` if the stored label is outside A-D; such a question can never be answered correctly.
    pub fn correct_label(&self) -> Option<OptionLabel> {
        OptionLabel::parse(&self.correct_option)
    }

    /// Name of the radio group carrying this question's answer.
    pub fn field_name(&self) -> String {
        format!("q{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_parse_ignores_case_and_whitespace() {
        assert_eq!(OptionLabel::parse("b"), Some(OptionLabel::B));
        assert_eq!(OptionLabel::parse(" D "), Some(OptionLabel::D));
    }

    #[test]
    fn test_label_parse_rejects_other_values() {
        assert_eq!(OptionLabel::parse("E"), None);
        assert_eq!(OptionLabel::parse(""), None);
        assert_eq!(OptionLabel::parse("AB"), None);
    }

    #[test]
    fn test_options_are_in_label_order() {
        let q = QuizQuestionRow {
            id: 7,
            question: "Which keyword declares an immutable binding in Rust?".into(),
            option_a: "let".into(),
            option_b: "var".into(),
            option_c: "const mut".into(),
            option_d: "static mut".into(),
            correct_option: "A".into(),
        };
        let labels: Vec<_> = q.options().iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec!["A", "B", "C", "D"]);
        assert_eq!(q.options()[1].text, "var");
        assert_eq!(q.correct_label(), Some(OptionLabel::A));
        assert_eq!(q.field_name(), "q7");
    }

    #[test]
    fn test_schema_stores_correct_option_as_text() {
        // correct_option decodes into a String; the column must be TEXT with an A-D check
        let schema = include_str!("../../migrations/20240601000001_create_quiz_questions.sql");
        let column = schema
            .lines()
            .find(|l| l.trim_start().starts_with("correct_option"))
            .unwrap();
        assert!(column.contains("TEXT"), "{column}");
        assert!(column.contains("('A', 'B', 'C', 'D')"), "{column}");
    }
}
