use std::convert::TryFrom;

use crate::{
    model::{to_answer_list, to_comparable_text, Question, SimilarityResult, SubmittedAnswer},
    similarity::text_similarity,
};

/// Grade one submitted answer against the quiz's question list.
///
/// Never fails: an answer the grader cannot line up with a question scores
/// zero. The grade is advisory for human review, not a gate on the
/// submission.
pub fn grade(submitted: &SubmittedAnswer, questions: &[Question]) -> SimilarityResult {
    let question = match questions.get(submitted.question_index) {
        Some(question) => question,
        None => {
            return SimilarityResult {
                question_index: submitted.question_index,
                similarity: 0,
                expected_answer: String::new(),
                user_answer: to_comparable_text(&submitted.answer),
            }
        }
    };

    match question {
        Question::MultipleChoice {
            options,
            correct_answer,
        } => grade_multiple_choice(submitted, options, *correct_answer),
        Question::WordSearch { answers } => grade_word_search(submitted, answers),
        Question::FreeText { answer } => {
            let user_answer = to_comparable_text(&submitted.answer);

            SimilarityResult {
                question_index: submitted.question_index,
                similarity: text_similarity(&user_answer, answer),
                expected_answer: answer.clone(),
                user_answer,
            }
        }
    }
}

/// Grade every answer in one submission: same order, one result per answer.
pub fn grade_submission(
    answers: &[SubmittedAnswer],
    questions: &[Question],
) -> Vec<SimilarityResult> {
    answers
        .iter()
        .map(|submitted| grade(submitted, questions))
        .collect()
}

fn grade_multiple_choice(
    submitted: &SubmittedAnswer,
    options: &[String],
    correct_answer: Option<usize>,
) -> SimilarityResult {
    let expected_answer = correct_answer
        .and_then(|i| options.get(i))
        .cloned()
        .unwrap_or_default();

    let submitted_index = submitted
        .answer
        .as_u64()
        .and_then(|i| usize::try_from(i).ok());

    let user_answer = submitted_index
        .and_then(|i| options.get(i))
        .cloned()
        .unwrap_or_else(|| to_comparable_text(&submitted.answer));

    // An exact index match is authoritative. Option text can be duplicated or
    // empty, so it must not go through the fuzzy comparison. Anything else
    // (wrong index, or legacy data where the answer arrived as free text)
    // falls back to text similarity against the correct option.
    let similarity = if submitted_index.is_some() && submitted_index == correct_answer {
        100
    } else {
        text_similarity(&user_answer, &expected_answer)
    };

    SimilarityResult {
        question_index: submitted.question_index,
        similarity,
        expected_answer,
        user_answer,
    }
}

fn grade_word_search(submitted: &SubmittedAnswer, answers: &[String]) -> SimilarityResult {
    let submitted_list = to_answer_list(&submitted.answer);

    let total: u32 = answers
        .iter()
        .enumerate()
        .map(|(i, expected)| {
            let given = submitted_list.get(i).map(String::as_str).unwrap_or("");
            u32::from(text_similarity(given, expected))
        })
        .sum();

    // A question with zero expected answers scores zero: nothing can earn
    // credit when nothing is expected.
    let similarity = (f64::from(total) / answers.len().max(1) as f64).round() as u8;

    SimilarityResult {
        question_index: submitted.question_index,
        similarity,
        expected_answer: answers.join(", "),
        user_answer: submitted_list.join(", "),
    }
}
