use crate::config::Config;
use crate::error::{CipherError, CipherResult};
use crate::key::Key;
use crate::optimizer::mutation::InitStrategy;
use crate::optimizer::MetropolisSampler;
use crate::scorer::Scorer;
use fastrand::Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

pub struct SearchOptions {
    pub iterations: usize,
    pub chains: usize,
    pub seed: Option<u64>,
    pub init: InitStrategy,
    pub temperature: f64,
    pub patience: usize,
    pub report_interval: usize,
    pub max_time: Option<Duration>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for SearchOptions {
    fn from(cfg: &Config) -> Self {
        Self {
            iterations: cfg.search.iterations,
            chains: cfg.search.chains,
            seed: cfg.search.seed,
            init: cfg.search.init,
            temperature: cfg.search.temperature,
            patience: cfg.search.patience,
            report_interval: cfg.search.report_interval,
            max_time: cfg.search.max_time.map(Duration::from_secs),
        }
    }
}

/// Best state found by a search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub key: Key,
    pub plaintext: String,
    pub score: f64,
    /// Iteration (within its chain) at which the best state was reached
    pub best_iteration: usize,
    /// Iterations the winning chain actually ran
    pub iterations: usize,
    pub accepted: usize,
    pub chain: usize,
    /// True when the ciphertext had no letter pair to score
    pub degenerate: bool,
}

impl SearchResult {
    pub fn acceptance_rate(&self) -> f64 {
        if self.iterations == 0 {
            0.0
        } else {
            self.accepted as f64 / self.iterations as f64
        }
    }
}

/// Receives updates between epochs of a search.
/// Boolean return value indicates if the search should continue (true) or abort (false).
pub trait ProgressCallback: Send + Sync {
    fn on_progress(&self, iteration: usize, best_score: f64, best_plaintext: &str, ips: f64)
        -> bool;
}

impl<T: ProgressCallback + ?Sized> ProgressCallback for &T {
    fn on_progress(&self, iteration: usize, best_score: f64, best_plaintext: &str, ips: f64) -> bool {
        (**self).on_progress(iteration, best_score, best_plaintext, ips)
    }
}

/// Callback that never reports and never aborts.
pub struct Silent;

impl ProgressCallback for Silent {
    fn on_progress(&self, _: usize, _: f64, _: &str, _: f64) -> bool {
        true
    }
}

/// Runs one or more independent chains and keeps the best result.
///
/// Chains never talk to each other: each owns its state and its generator
/// (seeded `seed + chain`), and the only shared data is the read-only
/// scorer. They are advanced in parallel one epoch of `report_interval`
/// iterations at a time so progress, deadlines and plateaus can be checked
/// between epochs.
pub struct Optimizer {
    scorer: Arc<Scorer>,
    options: SearchOptions,
}

impl Optimizer {
    pub fn new(scorer: Arc<Scorer>, options: SearchOptions) -> Self {
        Self { scorer, options }
    }

    pub fn run<CB: ProgressCallback>(
        &self,
        ciphertext: &str,
        callback: CB,
    ) -> CipherResult<SearchResult> {
        let opts = &self.options;
        if opts.chains == 0 {
            return Err(CipherError::Config("at least one chain is required".into()));
        }
        if opts.iterations == 0 {
            return Err(CipherError::Config("iteration budget must be at least 1".into()));
        }
        if !opts.temperature.is_finite() || opts.temperature <= 0.0 {
            return Err(CipherError::Config(format!(
                "temperature must be positive, got {}",
                opts.temperature
            )));
        }

        // 1. Initialize Chains
        let mut chains: Vec<MetropolisSampler> = (0..opts.chains)
            .map(|i| {
                let rng = match opts.seed {
                    Some(s) => Rng::with_seed(s.wrapping_add(i as u64)),
                    None => Rng::new(),
                };
                MetropolisSampler::new(self.scorer.clone(), ciphertext, opts.init, rng)
                    .map(|c| c.with_temperature(opts.temperature))
            })
            .collect::<CipherResult<_>>()?;

        if chains[0].is_degenerate() {
            warn!("Ciphertext has no letter pairs to score; returning the identity key");
            return Ok(chains[0].result(0));
        }

        info!(
            "🔍 Searching: {} chain(s) x {} iterations",
            opts.chains, opts.iterations
        );

        // 2. Main Loop
        let epoch_len = opts.report_interval.max(1);
        let start_time = Instant::now();
        let mut last_report = Instant::now();
        let mut done = 0;
        let mut best_seen = f64::NEG_INFINITY;
        let mut stale_epochs = 0;

        while done < opts.iterations {
            if let Some(limit) = opts.max_time {
                if start_time.elapsed() >= limit {
                    info!("⏱️  Time limit reached after {} iterations", done);
                    break;
                }
            }

            // A. Evolve in Parallel
            let steps = epoch_len.min(opts.iterations - done);
            chains.par_iter_mut().for_each(|c| {
                c.evolve(steps);
            });
            done += steps;

            // B. Check Improvements
            let leader = best_chain(&chains);
            let leader_score = chains[leader].best.score;
            if leader_score > best_seen {
                best_seen = leader_score;
                stale_epochs = 0;
            } else {
                stale_epochs += 1;
            }

            debug!(
                "Iter {:7} | Best: {:.3} (chain {}) | Current[0]: {:.3}",
                done, leader_score, leader, chains[0].current.score
            );

            if opts.patience > 0 && stale_epochs >= opts.patience {
                info!("Plateau at {:.3} after {} iterations. Stopping.", best_seen, done);
                break;
            }

            // C. Report Progress
            let now = Instant::now();
            let elapsed = now.duration_since(last_report).as_secs_f64();
            let ips = if elapsed > 0.0 {
                (steps * chains.len()) as f64 / elapsed
            } else {
                0.0
            };
            last_report = now;

            let keep_going =
                callback.on_progress(done, leader_score, &chains[leader].best.plaintext, ips);
            if !keep_going {
                info!("Search aborted by caller after {} iterations", done);
                break;
            }
        }

        let winner = best_chain(&chains);
        let result = chains[winner].result(winner);
        info!(
            "🏁 Best score {:.3} (chain {}, iteration {})",
            result.score, result.chain, result.best_iteration
        );
        Ok(result)
    }
}

/// Index of the chain holding the highest best-so-far score; ties go to the
/// lowest index so seeded runs are reproducible.
fn best_chain(chains: &[MetropolisSampler]) -> usize {
    let mut winner = 0;
    for (i, c) in chains.iter().enumerate().skip(1) {
        if c.best.score > chains[winner].best.score {
            winner = i;
        }
    }
    winner
}
