use std::path::PathBuf;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use switch_quiz::{Quiz, QuizConfig, QuizError, load_quiz_config};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file to load the quiz from (defaults to the built-in animal cell quiz)
    #[arg(short, long)]
    quiz: Option<PathBuf>,

    /// Seed for the initial selection of every row
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() {
    pretty_env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), QuizError> {
    let config = match &args.quiz {
        Some(path) => load_quiz_config(path)?,
        None => QuizConfig::animal_cell(),
    };

    let quiz = match args.seed {
        Some(seed) => Quiz::from_config(config, &mut StdRng::seed_from_u64(seed))?,
        None => Quiz::from_config(config, &mut rand::thread_rng())?,
    };

    quiz.run()
}
