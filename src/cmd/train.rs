use cipherforge::api::{self, ModelSource};
use cipherforge::config::ModelParams;
use cipherforge::scorer::loader;
use cipherforge::CipherResult;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct TrainArgs {
    #[command(flatten)]
    pub model: ModelParams,

    /// Where to write the model JSON
    #[arg(short, long)]
    pub output: PathBuf,
}

pub fn run(args: TrainArgs, source: &ModelSource) -> CipherResult<()> {
    let scorer = api::load_scorer(source, &args.model)?;
    loader::save_model_to_file(scorer.model(), &args.output)?;
    println!("Model: {}", args.output.display());
    println!("Pairs: {}", scorer.model().total_pairs());
    Ok(())
}
