//! `dockside questions` - inspect question banks

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dockside_quiz::QuestionBank;

#[derive(Parser, Debug)]
pub struct QuestionsArgs {
    #[command(subcommand)]
    pub command: QuestionsCommands,
}

#[derive(Subcommand, Debug)]
pub enum QuestionsCommands {
    /// Validate a question bank file and print a summary
    Check {
        /// Path to the question bank TOML file
        path: PathBuf,
    },
    /// Print the built-in question bank as TOML (a starting point for custom banks)
    Export,
}

pub fn run_questions(args: QuestionsArgs) -> Result<()> {
    match args.command {
        QuestionsCommands::Check { path } => {
            let bank = QuestionBank::load(&path)
                .with_context(|| format!("Invalid question bank {}", path.display()))?;
            println!("✅ {}: {} questions", path.display(), bank.len());
            for q in bank.iter() {
                println!("  {:>3}. {}", q.id.0, q.prompt);
            }
        }
        QuestionsCommands::Export => {
            let text = QuestionBank::default()
                .to_toml_string()
                .context("Failed to serialize built-in question bank")?;
            print!("{}", text);
        }
    }
    Ok(())
}
