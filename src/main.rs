use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use signquiz::quiz::Modality;
use signquiz::{App, Config, QuestionBank};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "signquiz")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Question bank to play instead of the configured one
    #[arg(short, long)]
    bank: Option<PathBuf>,

    /// Seed for question order and answer shuffling
    #[arg(long)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a question bank file for mistakes
    Validate {
        /// Path to the bank JSON file
        path: PathBuf,
    },
    /// List the questions in a bank
    List {
        /// Path to the bank JSON file (defaults to the configured bank)
        #[arg(short, long)]
        bank: Option<PathBuf>,
    },
    /// Print the config file location and current settings
    Config,
}

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| "signquiz=info".into())
}

/// Log to a file while the terminal belongs to the TUI
fn init_file_logging() -> Result<()> {
    let path = Config::log_path()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {:?}", parent))?;
    }
    let file =
        File::create(&path).with_context(|| format!("Failed to create log file {:?}", path))?;

    tracing_subscriber::registry()
        .with(filter())
        .with(fmt::layer().with_target(false).with_ansi(false).with_writer(Mutex::new(file)))
        .init();
    Ok(())
}

fn init_stderr_logging() {
    tracing_subscriber::registry()
        .with(filter())
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}

/// Pick the bank from the command line, then the config, then the bundled one
fn resolve_bank(flag: Option<&Path>, config: &Config) -> Result<QuestionBank> {
    match flag.or(config.bank_path.as_deref()) {
        Some(path) => QuestionBank::load(path)
            .with_context(|| format!("Failed to load question bank {:?}", path)),
        None => QuestionBank::bundled().context("Bundled question bank is invalid"),
    }
}

fn list(bank: &QuestionBank) {
    println!("{} ({} questions)", bank.name(), bank.len());
    for question in bank.questions() {
        let answer = question.correct_answer().map(|a| a.text.as_str()).unwrap_or("-");
        println!(
            "  {:<12} {:<16} {:<40} {}",
            question.id,
            question.modality.label(),
            question.prompt,
            answer
        );
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Validate { path }) => {
            init_stderr_logging();
            let bank = QuestionBank::load(&path)
                .with_context(|| format!("Question bank {:?} is invalid", path))?;
            println!(
                "{}: {} questions ({} multiple choice, {} scan) OK",
                bank.name(),
                bank.len(),
                bank.count_modality(Modality::MultipleChoice),
                bank.count_modality(Modality::ScanMode),
            );
        }
        Some(Commands::List { bank }) => {
            init_stderr_logging();
            let config = Config::load()?;
            let bank = resolve_bank(bank.as_deref().or(cli.bank.as_deref()), &config)?;
            list(&bank);
        }
        Some(Commands::Config) => {
            init_stderr_logging();
            let config = Config::load()?;
            println!("{}", Config::config_path()?.display());
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        None => {
            // Launch TUI
            init_file_logging()?;
            let config = Config::load()?;
            let bank = resolve_bank(cli.bank.as_deref(), &config)?;
            tracing::info!("Loaded bank '{}' with {} questions", bank.name(), bank.len());
            let mut app = App::new(config, bank, cli.seed)?;
            app.run().await?;
        }
    }

    Ok(())
}
