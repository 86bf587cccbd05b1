//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for quiz
#[derive(Parser, Debug)]
#[command(name = "quiz")]
#[command(author, version, about = "Build a multiple-choice question and grade answers against it")]
#[command(long_about = r#"
Builds a question from the given flags, applies topic edits and grades each
--answer against it.

The first --topic seeds the question; later ones are added one by one.

Configuration files are loaded from (in priority order):
1. QUIZ_* environment variables
2. --config <path>     Explicit config file
3. ./quiz.toml         Project-level config
4. ~/.config/quiz/config.toml   Global config

Example:
  quiz --body "Harry Potter's pet owl?" -c Scabbers -c Hedwig --correct 1 \
       -t "Harry Potter Trivia" -t Owls --weight 10 -a 1 -a 0
"#)]
pub struct Cli {
    /// Question prompt
    #[arg(short, long, required_unless_present = "show_config")]
    pub body: Option<String>,

    /// Answer choices, in order (can be specified multiple times)
    #[arg(short, long = "choice", value_name = "TEXT")]
    pub choices: Vec<String>,

    /// Index of the correct choice (0-based)
    #[arg(long, value_name = "N", default_value_t = 0)]
    pub correct: usize,

    /// Topics; the first one seeds the question (can be specified multiple times)
    #[arg(short, long = "topic", value_name = "TEXT", required_unless_present = "show_config")]
    pub topics: Vec<String>,

    /// Topics to remove after all topics were added
    #[arg(long = "remove-topic", value_name = "TEXT")]
    pub remove_topics: Vec<String>,

    /// Question weight (1-15)
    #[arg(short, long, default_value_t = 1)]
    pub weight: u32,

    /// Selected choices to grade (can be specified multiple times)
    #[arg(short, long = "answer", value_name = "N")]
    pub answers: Vec<usize>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
