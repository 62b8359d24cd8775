use crate::error::{CipherError, CipherResult};
use crate::optimizer::mutation::InitStrategy;
use crate::scorer::TransitionModel;
use clap::Args;

#[derive(Args, Debug, Clone, Default)]
pub struct Config {
    #[command(flatten)]
    pub search: SearchParams,
    #[command(flatten)]
    pub model: ModelParams,
}

#[derive(Args, Debug, Clone)]
pub struct SearchParams {
    /// Iterations per chain
    #[arg(short = 'i', long, default_value_t = 10_000)]
    pub iterations: usize,

    #[arg(short = 'S', long)]
    pub seed: Option<u64>,

    /// Independent chains, best result wins
    #[arg(long, default_value_t = 1)]
    pub chains: usize,

    #[arg(long, value_enum, default_value_t = InitStrategy::Identity)]
    pub init: InitStrategy,

    #[arg(long, default_value_t = 1.0)]
    pub temperature: f64,

    /// Stop after this many report intervals without improvement (0 = never)
    #[arg(long, default_value_t = 0)]
    pub patience: usize,

    #[arg(long, default_value_t = 1_000)]
    pub report_interval: usize,

    /// Wall-clock limit in seconds
    #[arg(short = 'T', long)]
    pub max_time: Option<u64>,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            iterations: 10_000,
            seed: None,
            chains: 1,
            init: InitStrategy::Identity,
            temperature: 1.0,
            patience: 0,
            report_interval: 1_000,
            max_time: None,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct ModelParams {
    /// Additive constant applied to every bigram count
    #[arg(long, default_value_t = TransitionModel::DEFAULT_SMOOTHING)]
    pub smoothing: f64,
}

impl Default for ModelParams {
    fn default() -> Self {
        Self {
            smoothing: TransitionModel::DEFAULT_SMOOTHING,
        }
    }
}

impl Config {
    pub fn validate(&self) -> CipherResult<()> {
        self.search.validate()?;
        self.model.validate()
    }
}

impl SearchParams {
    pub fn validate(&self) -> CipherResult<()> {
        if self.iterations == 0 {
            return Err(CipherError::Config("--iterations must be at least 1".into()));
        }
        if self.chains == 0 {
            return Err(CipherError::Config("--chains must be at least 1".into()));
        }
        if self.report_interval == 0 {
            return Err(CipherError::Config(
                "--report-interval must be at least 1".into(),
            ));
        }
        if !self.temperature.is_finite() || self.temperature <= 0.0 {
            return Err(CipherError::Config(format!(
                "--temperature must be positive, got {}",
                self.temperature
            )));
        }
        Ok(())
    }
}

impl ModelParams {
    pub fn validate(&self) -> CipherResult<()> {
        if !self.smoothing.is_finite() || self.smoothing <= 0.0 {
            return Err(CipherError::Config(format!(
                "--smoothing must be positive, got {}",
                self.smoothing
            )));
        }
        Ok(())
    }
}
