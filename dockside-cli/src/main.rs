//! dockside - quiz and item management services
//!
//! Entry point for the `dockside` binary:
//! - `quiz`: serve the multiple-choice quiz page and score submissions
//! - `items`: serve the item JSON API backed by PostgreSQL
//! - `questions`: validate or export question banks
//! - `completions`: generate shell completion scripts

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

mod commands;
mod config;
mod tracing_setup;

use config::DocksideConfig;
use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "dockside",
    author,
    version,
    about = "Docker quiz and item management services",
    long_about = "Two small stateless HTTP services: a multiple-choice quiz scored server-side, \
                  and a JSON API listing and creating rows of a PostgreSQL items table."
)]
struct Cli {
    /// Enable debug logging (RUST_LOG still takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    /// Export traces over OTLP (requires the telemetry feature)
    #[arg(long, global = true)]
    otel: bool,

    /// Config file (default: ~/.dockside/config.toml, optional)
    #[arg(long, global = true, env = "DOCKSIDE_CONFIG", value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Serve the multiple-choice quiz (GET /, POST /submit)
    Quiz(commands::quiz::QuizArgs),
    /// Serve the item API (GET/POST /api/items)
    Items(commands::items::ItemsArgs),
    /// Validate or export question banks
    Questions(commands::questions::QuestionsArgs),
    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(Parser, Debug)]
struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    shell: Shell,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)] // PowerShell is a proper noun, not a suffix
enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is normal
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&TracingConfig {
        debug: cli.debug,
        otel: cli.otel,
    })
    .ok();

    let result = run(cli).await;
    tracing_setup::shutdown();
    result
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Quiz(args) => {
            let config = DocksideConfig::load(cli.config.as_deref())?;
            commands::run_quiz(args, &config.quiz).await?
        }
        Commands::Items(args) => {
            let config = DocksideConfig::load(cli.config.as_deref())?;
            commands::run_items(args, &config.items).await?
        }
        Commands::Questions(args) => commands::run_questions(args)?,
        Commands::Completions(args) => run_completions(args)?,
    }
    Ok(())
}

fn run_completions(args: CompletionsArgs) -> Result<()> {
    use clap::CommandFactory;
    use clap_complete::{generate, Shell as CompletionShell};
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();

    let shell = match args.shell {
        Shell::Bash => CompletionShell::Bash,
        Shell::Zsh => CompletionShell::Zsh,
        Shell::Fish => CompletionShell::Fish,
        Shell::PowerShell => CompletionShell::PowerShell,
        Shell::Elvish => CompletionShell::Elvish,
    };

    generate(shell, &mut cmd, bin_name, &mut io::stdout());

    Ok(())
}
