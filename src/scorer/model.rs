use crate::alphabet::{letter_count, letter_indices, ALPHABET_SIZE};
use crate::error::{CipherError, CipherResult};
use tracing::debug;

/// Raw counts of every ordered letter pair, indexed `[prev][next]`.
pub type BigramCounts = [[u64; ALPHABET_SIZE]; ALPHABET_SIZE];

/// Bigram transition model: `log P(next | prev)` for every ordered pair of
/// letters, learned from reference text.
///
/// Counts receive additive smoothing before each row is normalised, so every
/// pair has a strictly positive probability and every log-probability is
/// finite. The raw counts are kept so the model can be persisted and rebuilt.
#[derive(Debug, Clone)]
pub struct TransitionModel {
    counts: BigramCounts,
    smoothing: f64,
    log_probs: [[f64; ALPHABET_SIZE]; ALPHABET_SIZE],
}

impl TransitionModel {
    pub const DEFAULT_SMOOTHING: f64 = 1.0;

    /// Builds a model from corpus text with the default smoothing constant.
    pub fn build(corpus: &str) -> CipherResult<Self> {
        Self::build_with_smoothing(corpus, Self::DEFAULT_SMOOTHING)
    }

    pub fn build_with_smoothing(corpus: &str, smoothing: f64) -> CipherResult<Self> {
        let letters = letter_count(corpus);
        if letters < 2 {
            return Err(CipherError::InsufficientData(format!(
                "corpus has {} usable letters, at least 2 are required",
                letters
            )));
        }

        Self::from_counts(count_bigrams(corpus), smoothing)
    }

    /// Builds a model from pre-counted bigrams.
    pub fn from_counts(counts: BigramCounts, smoothing: f64) -> CipherResult<Self> {
        if !smoothing.is_finite() || smoothing <= 0.0 {
            return Err(CipherError::Config(format!(
                "smoothing must be a positive finite number, got {}",
                smoothing
            )));
        }

        let total: u64 = counts.iter().flatten().sum();
        if total == 0 {
            return Err(CipherError::InsufficientData(
                "no letter pairs were counted".to_string(),
            ));
        }

        let mut log_probs = [[0.0; ALPHABET_SIZE]; ALPHABET_SIZE];
        for (prev, row) in counts.iter().enumerate() {
            let row_total: u64 = row.iter().sum();
            let denom = row_total as f64 + smoothing * ALPHABET_SIZE as f64;
            for (next, &count) in row.iter().enumerate() {
                log_probs[prev][next] = ((count as f64 + smoothing) / denom).ln();
            }
        }

        debug!(
            "Transition model built: {} pairs counted, smoothing {}",
            total, smoothing
        );

        Ok(TransitionModel {
            counts,
            smoothing,
            log_probs,
        })
    }

    /// `log P(next | prev)` for alphabet indices.
    #[inline(always)]
    pub fn log_prob(&self, prev: usize, next: usize) -> f64 {
        self.log_probs[prev][next]
    }

    pub fn probability(&self, prev: usize, next: usize) -> f64 {
        self.log_probs[prev][next].exp()
    }

    pub fn counts(&self) -> &BigramCounts {
        &self.counts
    }

    pub fn smoothing(&self) -> f64 {
        self.smoothing
    }

    pub fn total_pairs(&self) -> u64 {
        self.counts.iter().flatten().sum()
    }
}

/// Counts consecutive letter pairs, skipping over anything outside the
/// alphabet exactly as scoring does.
pub fn count_bigrams(text: &str) -> BigramCounts {
    let mut counts = [[0u64; ALPHABET_SIZE]; ALPHABET_SIZE];
    let mut prev: Option<usize> = None;
    for idx in letter_indices(text) {
        if let Some(p) = prev {
            counts[p][idx] += 1;
        }
        prev = Some(idx);
    }
    counts
}
