pub mod mutation;
pub mod runner;

pub use self::mutation::InitStrategy;
pub use self::runner::{Optimizer, ProgressCallback, SearchOptions, SearchResult, Silent};

use crate::alphabet::{letter_count, pair_count};
use crate::error::{CipherError, CipherResult};
use crate::key::Key;
use crate::scorer::Scorer;
use fastrand::Rng;
use std::sync::Arc;
use tracing::{debug, warn};

/// A key together with the plaintext it produces and that plaintext's score.
///
/// Always evaluated from scratch: a single swap changes every occurrence of
/// two letters, so there is no cheap incremental update.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyState {
    pub key: Key,
    pub plaintext: String,
    pub score: f64,
}

impl KeyState {
    pub fn evaluate(key: Key, ciphertext: &str, scorer: &Scorer) -> Self {
        let plaintext = key.decode(ciphertext);
        let score = scorer.score(&plaintext);
        Self {
            key,
            plaintext,
            score,
        }
    }
}

/// Metropolis acceptance probability `min(1, exp((proposal - current) / T))`.
///
/// Scores are log-likelihoods, so the exponent is the log of the likelihood
/// ratio. Moves that do not lower the score are always accepted.
#[inline(always)]
pub fn acceptance_probability(current: f64, proposal: f64, temperature: f64) -> f64 {
    let diff = proposal - current;
    if diff >= 0.0 {
        1.0
    } else {
        (diff / temperature).exp()
    }
}

/// One Metropolis-Hastings chain over substitution keys.
///
/// The chain owns all of its state (current position, best-so-far and its
/// random generator) and only borrows the scorer, so several chains can run
/// side by side on one shared model.
pub struct MetropolisSampler {
    scorer: Arc<Scorer>,
    ciphertext: String,

    pub current: KeyState,
    pub best: KeyState,
    pub best_iteration: usize,
    pub iteration: usize,
    pub accepted: usize,
    pub temperature: f64,

    degenerate: bool,
    rng: Rng,
}

impl MetropolisSampler {
    /// Sets up a chain at its initial key.
    ///
    /// Fails with `EmptyCiphertext` when the ciphertext holds no letters. A
    /// ciphertext with a single letter has no pair to score: the chain is
    /// marked degenerate, pinned to the identity key, and never moves.
    pub fn new(
        scorer: Arc<Scorer>,
        ciphertext: &str,
        init: InitStrategy,
        mut rng: Rng,
    ) -> CipherResult<Self> {
        if letter_count(ciphertext) == 0 {
            return Err(CipherError::EmptyCiphertext);
        }

        let degenerate = pair_count(ciphertext) == 0;
        let start = if degenerate {
            Key::identity()
        } else {
            mutation::initial_key(init, &mut rng)
        };

        let current = KeyState::evaluate(start, ciphertext, &scorer);
        debug!("Chain initialised ({}), score {:.3}", init, current.score);

        Ok(Self {
            scorer,
            ciphertext: ciphertext.to_string(),
            best: current.clone(),
            current,
            best_iteration: 0,
            iteration: 0,
            accepted: 0,
            temperature: 1.0,
            degenerate,
            rng,
        })
    }

    /// Sets the acceptance temperature. Values that are not positive and
    /// finite would accept every downhill move, so they leave the chain at
    /// its current temperature.
    pub fn with_temperature(mut self, temperature: f64) -> Self {
        if temperature.is_finite() && temperature > 0.0 {
            self.temperature = temperature;
        } else {
            warn!("Ignoring invalid temperature {}", temperature);
        }
        self
    }

    pub fn is_degenerate(&self) -> bool {
        self.degenerate
    }

    /// Runs one propose / accept / track-best iteration. Returns whether the
    /// proposal was accepted.
    #[inline(always)]
    pub fn step(&mut self) -> bool {
        if self.degenerate {
            return false;
        }
        self.iteration += 1;

        let proposal = mutation::propose(&self.current.key, &mut self.rng);
        let candidate = KeyState::evaluate(proposal, &self.ciphertext, &self.scorer);

        let p = acceptance_probability(self.current.score, candidate.score, self.temperature);
        let accepted = self.rng.f64() < p;
        if accepted {
            self.current = candidate;
            self.accepted += 1;
        }

        if self.current.score > self.best.score {
            self.best = self.current.clone();
            self.best_iteration = self.iteration;
        }
        accepted
    }

    /// Advances the chain `steps` iterations, returning how many proposals
    /// were accepted.
    pub fn evolve(&mut self, steps: usize) -> usize {
        let mut accepted = 0;
        for _ in 0..steps {
            if self.degenerate {
                break;
            }
            if self.step() {
                accepted += 1;
            }
        }
        accepted
    }

    /// Runs the full budget and reports the best state seen.
    pub fn run(mut self, iterations: usize) -> SearchResult {
        if self.degenerate {
            warn!("Ciphertext has no letter pairs to score; returning the identity key");
        } else {
            self.evolve(iterations);
        }
        self.result(0)
    }

    pub fn result(&self, chain: usize) -> SearchResult {
        SearchResult {
            key: self.best.key,
            plaintext: self.best.plaintext.clone(),
            score: self.best.score,
            best_iteration: self.best_iteration,
            iterations: self.iteration,
            accepted: self.accepted,
            chain,
            degenerate: self.degenerate,
        }
    }
}
