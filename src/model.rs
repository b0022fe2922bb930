use std::convert::TryFrom;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One author-defined question inside a quiz.
///
/// Stored quizzes carry loose JSON records with a `type` discriminator and ad
/// hoc fields per type; deserialization funnels each record into exactly one
/// variant so grading can match exhaustively instead of probing fields.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawQuestion")]
pub enum Question {
    MultipleChoice {
        options: Vec<String>,
        correct_answer: Option<usize>,
    },
    WordSearch {
        answers: Vec<String>,
    },
    FreeText {
        answer: String,
    },
}

/// Wire shape of a stored question. Every field is optional; `translate`,
/// `image`, unknown and missing tags all land on the free-text variant.
#[derive(Deserialize)]
struct RawQuestion {
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    options: Vec<String>,
    #[serde(rename = "correctAnswer", default)]
    correct_answer: Option<i64>,
    #[serde(default)]
    answers: Vec<String>,
    #[serde(default)]
    answer: Value,
}

impl From<RawQuestion> for Question {
    fn from(raw: RawQuestion) -> Self {
        match raw.kind.as_str() {
            "multiple_choice" => Question::MultipleChoice {
                options: raw.options,
                // A negative stored index is as unanswerable as a missing one.
                correct_answer: raw
                    .correct_answer
                    .and_then(|i| usize::try_from(i).ok()),
            },
            "word_search" => Question::WordSearch {
                answers: raw.answers,
            },
            _ => Question::FreeText {
                answer: to_comparable_text(&raw.answer),
            },
        }
    }
}

/// A quiz as stored: the question list plus the metadata the grader cares
/// about.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Quiz {
    #[serde(default)]
    pub title: String,
    pub questions: Vec<Question>,
}

/// One member's answer to one question. The value's shape depends on the
/// question type (option index, list of strings, or free text), so it stays a
/// raw JSON value until grading normalizes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmittedAnswer {
    #[serde(rename = "questionIndex")]
    pub question_index: usize,
    #[serde(default)]
    pub answer: Value,
}

/// One member's submission to one quiz.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    #[serde(rename = "memberOmjCard", default)]
    pub member_omj_card: String,
    pub answers: Vec<SubmittedAnswer>,
}

/// Advisory grade for one submitted answer. Computed on read, never stored;
/// recomputing keeps scores honest after a quiz is edited.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarityResult {
    pub question_index: usize,
    pub similarity: u8,
    pub expected_answer: String,
    pub user_answer: String,
}

impl fmt::Display for SimilarityResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "q{} {:>3}% expected {:?} got {:?}",
            self.question_index, self.similarity, self.expected_answer, self.user_answer
        )
    }
}

/// A submission enriched with its similarity scores, the payload shape the
/// admin view consumes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradedSubmission {
    #[serde(flatten)]
    pub submission: Submission,
    #[serde(rename = "similarityScores")]
    pub similarity_scores: Vec<SimilarityResult>,
}

/// Flatten a submitted value into the text form used for comparison: null
/// becomes empty, sequences join with ", ", scalars print as-is.
pub fn to_comparable_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Array(items) => items
            .iter()
            .map(to_comparable_text)
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(_) => value.to_string(),
    }
}

/// Coerce a submitted value into one string per expected blank. A lone scalar
/// counts as a single-element sequence; null as no answers at all.
pub fn to_answer_list(value: &Value) -> Vec<String> {
    match value {
        Value::Null => Vec::new(),
        Value::Array(items) => items.iter().map(to_comparable_text).collect(),
        other => vec![to_comparable_text(other)],
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::{to_answer_list, to_comparable_text, Question, Submission};

    #[test]
    fn test_deserialize_multiple_choice() {
        let q: Question = serde_json::from_value(json!({
            "type": "multiple_choice",
            "options": ["A", "B", "C"],
            "correctAnswer": 1,
        }))
        .unwrap();

        assert_eq!(
            q,
            Question::MultipleChoice {
                options: vec_into!["A", "B", "C"],
                correct_answer: Some(1),
            }
        );
    }

    #[test]
    fn test_deserialize_negative_correct_answer() {
        let q: Question = serde_json::from_value(json!({
            "type": "multiple_choice",
            "options": ["A"],
            "correctAnswer": -1,
        }))
        .unwrap();

        assert_eq!(
            q,
            Question::MultipleChoice {
                options: vec_into!["A"],
                correct_answer: None,
            }
        );
    }

    #[test]
    fn test_deserialize_word_search() {
        let q: Question = serde_json::from_value(json!({
            "type": "word_search",
            "answers": ["cat", "dog"],
        }))
        .unwrap();

        assert_eq!(
            q,
            Question::WordSearch {
                answers: vec_into!["cat", "dog"],
            }
        );
    }

    #[test]
    fn test_unknown_and_missing_tags_fall_back_to_free_text() {
        for value in [
            json!({ "type": "translate", "answer": "hello" }),
            json!({ "type": "mystery", "answer": "hello" }),
            json!({ "answer": "hello" }),
        ]
        .iter()
        {
            let q: Question = serde_json::from_value(value.clone()).unwrap();
            assert_eq!(
                q,
                Question::FreeText {
                    answer: "hello".to_owned(),
                }
            );
        }
    }

    #[test]
    fn test_free_text_without_answer_field() {
        let q: Question = serde_json::from_value(json!({ "type": "image" })).unwrap();
        assert_eq!(
            q,
            Question::FreeText {
                answer: String::new(),
            }
        );
    }

    #[test]
    fn test_deserialize_submission_wire_fields() {
        let s: Submission = serde_json::from_value(json!({
            "memberOmjCard": "OMJ-1042",
            "answers": [
                { "questionIndex": 0, "answer": 2 },
                { "questionIndex": 1 },
            ],
        }))
        .unwrap();

        assert_eq!(s.member_omj_card, "OMJ-1042");
        assert_eq!(s.answers.len(), 2);
        assert_eq!(s.answers[0].answer, json!(2));
        assert_eq!(s.answers[1].answer, json!(null));
    }

    #[test]
    fn test_to_comparable_text() {
        assert_eq!(to_comparable_text(&json!(null)), "");
        assert_eq!(to_comparable_text(&json!("hi")), "hi");
        assert_eq!(to_comparable_text(&json!(3)), "3");
        assert_eq!(to_comparable_text(&json!(true)), "true");
        assert_eq!(to_comparable_text(&json!(["a", 1, null])), "a, 1, ");
    }

    #[test]
    fn test_to_answer_list() {
        assert_eq!(to_answer_list(&json!(null)), Vec::<String>::new());
        let single: Vec<String> = vec_into!["lone"];
        assert_eq!(to_answer_list(&json!("lone")), single);
        let pair: Vec<String> = vec_into!["cat", "dog"];
        assert_eq!(to_answer_list(&json!(["cat", "dog"])), pair);
    }
}
