//! Answer-grading core for the Paigham quiz platform.
//!
//! Compares each submitted answer against its question's expected answer and
//! produces an advisory 0-100 similarity score per question. Grading is a
//! pure function of (submission, quiz questions): no I/O, no state, and by
//! contract it never fails on malformed input. Anything that cannot be
//! lined up with a question scores zero.

use model::{GradedSubmission, Quiz, Submission};

#[macro_use]
#[cfg(test)]
mod macros;

pub mod grader;
pub mod model;
pub mod parallel_grader;
pub mod similarity;

/// special-cased runner for when user passes --jobs=1. This avoids the
/// threading & communication overhead of the parallel mode, which is never
/// worth paying for the handful of submissions a typical quiz collects.
pub fn grade_all_single_core(quiz: &Quiz, submissions: Vec<Submission>) -> Vec<GradedSubmission> {
    submissions
        .into_iter()
        .map(|submission| {
            let similarity_scores = grader::grade_submission(&submission.answers, &quiz.questions);

            GradedSubmission {
                submission,
                similarity_scores,
            }
        })
        .collect()
}
