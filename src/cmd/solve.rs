use super::CliLogger;
use crate::reports;
use cipherforge::api::{self, ModelSource};
use cipherforge::config::Config;
use cipherforge::scorer::loader;
use cipherforge::CipherResult;
use clap::Args;
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct SolveArgs {
    /// File holding the ciphertext
    pub input: PathBuf,

    #[command(flatten)]
    pub config: Config,

    /// Print the result as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Write the recovered plaintext to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: SolveArgs, source: &ModelSource) -> CipherResult<()> {
    let ciphertext = loader::read_text(&args.input)?;
    let scorer = api::load_scorer(source, &args.config.model)?;

    let result = api::solve(scorer, &ciphertext, &args.config, CliLogger)?;

    if let Some(path) = &args.output {
        fs::write(path, &result.plaintext)?;
        info!("💾 Plaintext written to {}", path.display());
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("\n=== 🏆 FINAL RESULT ===");
    println!("Score: {:.3}", result.score);
    println!("Key: {}", result.key);
    if result.degenerate {
        println!("(ciphertext too short to score; identity key returned)");
    }
    reports::print_key_grid("RECOVERED", &result.key);
    reports::print_result_table(&result);
    reports::print_text("Plaintext", &result.plaintext);
    Ok(())
}
