use cipherforge::api::ModelSource;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Reference text to learn bigram statistics from
    #[arg(global = true, short, long)]
    corpus: Option<PathBuf>,

    /// Pre-counted bigram table (TSV: pair, count)
    #[arg(global = true, short, long)]
    bigrams: Option<PathBuf>,

    /// Model JSON written by `train`
    #[arg(global = true, short, long)]
    model: Option<PathBuf>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build a transition model and save it as JSON
    Train(cmd::train::TrainArgs),
    /// Encipher a plaintext with a random or given key
    Encrypt(cmd::encrypt::EncryptArgs),
    /// Recover the plaintext of a substitution cipher
    Solve(cmd::solve::SolveArgs),
    /// Encipher a known text, solve it, and measure the recovery
    Demo(cmd::demo::DemoArgs),
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    info!("🚀 Initializing CipherForge...");

    let source = ModelSource {
        model: cli.model.as_deref(),
        bigrams: cli.bigrams.as_deref(),
        corpus: cli.corpus.as_deref(),
    };

    let outcome = match cli.command {
        Commands::Train(args) => cmd::train::run(args, &source),
        Commands::Encrypt(args) => cmd::encrypt::run(args),
        Commands::Solve(args) => cmd::solve::run(args, &source),
        Commands::Demo(args) => cmd::demo::run(args, &source),
    };

    if let Err(e) = outcome {
        error!("❌ {}", e);
        process::exit(1);
    }
}
