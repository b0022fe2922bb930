use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context;
use quizscore_rs::model::{Quiz, Submission};
use structopt::StructOpt;

#[derive(structopt::StructOpt)]
/// Grade quiz submissions against the owning quiz's expected answers
struct Options {
    /// Number of parallel threads to run
    #[structopt(long, short)]
    jobs: Option<usize>,

    /// Emit graded submissions as JSON (the admin payload shape) instead of a
    /// plain-text report
    #[structopt(long)]
    json: bool,

    /// Path to the quiz JSON: an object with a "questions" array
    quiz: PathBuf,

    /// Path to the submissions JSON: an array of submission objects
    submissions: PathBuf,
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let opts = Options::from_args();

    let quiz: Quiz = read_json(&opts.quiz)?;
    let submissions: Vec<Submission> = read_json(&opts.submissions)?;

    if quiz.questions.is_empty() {
        anyhow::bail!("quiz has no questions to grade against");
    }

    log::info!(
        "grading {} submissions against {} questions",
        submissions.len(),
        quiz.questions.len()
    );

    let jobs = opts.jobs.unwrap_or_else(num_cpus::get_physical);

    let graded = if jobs == 1 {
        quizscore_rs::grade_all_single_core(&quiz, submissions)
    } else {
        quizscore_rs::parallel_grader::run(Arc::new(quiz.questions), submissions, jobs)
    };

    if opts.json {
        println!("{}", serde_json::to_string_pretty(&graded)?);
        return Ok(());
    }

    for g in &graded {
        println!("{}", g.submission.member_omj_card);
        for result in &g.similarity_scores {
            println!("  {}", result);
        }
    }

    Ok(())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let file =
        File::open(path).with_context(|| format!("failed to open {}", path.display()))?;

    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to parse {}", path.display()))
}
