use std::sync::{Arc, Mutex};

use crossbeam_channel::Sender;
use rayon::ThreadPoolBuilder;

use crate::{
    grader,
    model::{GradedSubmission, Question, Submission},
};

type WorkQueue = Arc<Mutex<std::iter::Enumerate<std::vec::IntoIter<Submission>>>>;

/// Grade a batch of submissions across a worker pool. Each submission is
/// graded independently, so workers just pull from a shared queue; results
/// come back in submission order regardless of which worker finished first.
pub fn run(
    questions: Arc<Vec<Question>>,
    submissions: Vec<Submission>,
    jobs: usize,
) -> Vec<GradedSubmission> {
    let pool = ThreadPoolBuilder::new()
        .num_threads(jobs)
        .thread_name(|i| format!("quizscore-wrk-{}", i))
        .build()
        .unwrap();

    let (tx, rx) = crossbeam_channel::bounded(pool.current_num_threads());
    let queue: WorkQueue = Arc::new(Mutex::new(submissions.into_iter().enumerate()));

    for _ in 0..pool.current_num_threads() {
        let tx = tx.clone();
        let queue = queue.clone();
        let questions = questions.clone();

        pool.spawn(move || {
            run_single_thread(tx, queue, &questions);
        });
    }

    drop(tx);

    let mut graded: Vec<(usize, GradedSubmission)> = rx.iter().collect();
    graded.sort_by_key(|(index, _)| *index);

    graded.into_iter().map(|(_, g)| g).collect()
}

fn run_single_thread(
    tx: Sender<(usize, GradedSubmission)>,
    queue: WorkQueue,
    questions: &[Question],
) {
    loop {
        let next = queue.lock().unwrap().next();

        let (index, submission) = match next {
            Some(item) => item,
            None => break,
        };

        let similarity_scores = grader::grade_submission(&submission.answers, questions);

        tx.send((
            index,
            GradedSubmission {
                submission,
                similarity_scores,
            },
        ))
        .unwrap();
    }
}
