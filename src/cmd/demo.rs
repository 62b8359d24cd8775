use super::CliLogger;
use crate::reports;
use cipherforge::api::{self, ModelSource};
use cipherforge::config::Config;
use cipherforge::scorer::loader;
use cipherforge::CipherResult;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct DemoArgs {
    /// File holding a known plaintext to encipher and recover
    pub input: PathBuf,

    #[command(flatten)]
    pub config: Config,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: DemoArgs, source: &ModelSource) -> CipherResult<()> {
    let plaintext = loader::read_text(&args.input)?;
    let scorer = api::load_scorer(source, &args.config.model)?;

    let report = api::demo(scorer, &plaintext, &args.config, CliLogger)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    reports::print_text("Ciphertext", &report.ciphertext);
    reports::print_key_grid("TRUE", &report.true_key);
    reports::print_key_grid("RECOVERED", &report.result.key);
    reports::print_result_table(&report.result);
    reports::print_demo_report(&report);
    reports::print_text("Recovered plaintext", &report.result.plaintext);
    Ok(())
}
