//! `dockside quiz` - serve the quiz

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use dockside_quiz::{run_server, QuestionBank, QuizServerConfig};

use crate::config::QuizSection;

/// Arguments for the quiz command
#[derive(Parser, Debug)]
pub struct QuizArgs {
    /// Address to bind to (default: 127.0.0.1:5000)
    #[arg(long, short = 'b', env = "QUIZ_BIND")]
    pub bind: Option<SocketAddr>,

    /// Question bank TOML file (default: built-in Docker bank)
    #[arg(long, env = "QUIZ_QUESTIONS", value_name = "PATH")]
    pub questions: Option<PathBuf>,
}

fn server_config(args: &QuizArgs, file: &QuizSection) -> QuizServerConfig {
    let defaults = QuizServerConfig::default();
    QuizServerConfig {
        bind_addr: args.bind.or(file.bind).unwrap_or(defaults.bind_addr),
    }
}

fn question_bank(args: &QuizArgs, file: &QuizSection) -> Result<QuestionBank> {
    match args.questions.as_ref().or(file.questions.as_ref()) {
        Some(path) => QuestionBank::load(path)
            .with_context(|| format!("Failed to load question bank {}", path.display())),
        None => Ok(QuestionBank::default()),
    }
}

/// Run the quiz server
pub async fn run_quiz(args: QuizArgs, file: &QuizSection) -> Result<()> {
    let bank = question_bank(&args, file)?;
    let config = server_config(&args, file);

    tracing::info!(questions = bank.len(), "Starting quiz server on {}", config.bind_addr);

    run_server(bank, config, super::shutdown_signal())
        .await
        .context("Quiz server error")?;

    Ok(())
}
