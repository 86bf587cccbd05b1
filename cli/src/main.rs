//! CLI entrypoint for quiz
//!
//! Wires configuration, logging and the domain layer together.

mod commands;

use anyhow::{Context, Result, bail};
use clap::Parser;
use commands::Cli;
use quiz_domain::{Question, TopicPolicy};
use quiz_infrastructure::{ConfigLoader, FileConfig};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*, reload};

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    // Initialize logging based on verbosity level, before config loading
    // so config source events are recorded
    let (filter, filter_handle) = reload::Layer::new(verbosity_filter(cli.verbose));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .init();

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        if let Some(path) = &cli.config {
            if !path.exists() {
                bail!("Config file not found: {}", path.display());
            }
        }
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };
    config.validate()?;

    if let Some(filter) = configured_filter(cli.verbose, &config) {
        filter_handle.reload(filter).context("Failed to apply logging.level")?;
    }

    info!("Starting quiz");

    let question = build_question(&cli, &config)?;

    println!("{}", question);
    println!("Topics: {}", question.topics().join(", "));
    println!("Weight: {}", question.weight());

    for &answer in &cli.answers {
        println!("Answer {}: {}", answer, question.grade(answer));
    }

    Ok(())
}

/// Log filter for the `-v` count.
fn verbosity_filter(verbose: u8) -> EnvFilter {
    match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    }
}

/// `logging.level` from config, which only applies when no `-v` flag is given.
fn configured_filter(verbose: u8, config: &FileConfig) -> Option<EnvFilter> {
    if verbose > 0 {
        return None;
    }
    config.logging.level.as_deref().map(EnvFilter::new)
}

/// Construct the question and apply topic edits in command-line order.
fn build_question(cli: &Cli, config: &FileConfig) -> Result<Question> {
    let policy: TopicPolicy = config.to_topic_policy()?;

    let Some(body) = &cli.body else {
        bail!("--body is required");
    };
    let Some((seed, extra_topics)) = cli.topics.split_first() else {
        bail!("At least one --topic is required");
    };

    let mut question = Question::with_policy(
        policy,
        body.as_str(),
        cli.choices.iter().map(String::as_str),
        cli.correct,
        seed.as_str(),
        cli.weight,
    )
    .context("Invalid question")?;

    for topic in extra_topics {
        question
            .add(topic.as_str())
            .with_context(|| format!("Cannot add topic '{}'", topic))?;
    }
    for topic in &cli.remove_topics {
        question
            .remove(topic)
            .with_context(|| format!("Cannot remove topic '{}'", topic))?;
    }

    Ok(question)
}
