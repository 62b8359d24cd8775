pub mod loader;
pub mod metrics;
pub mod model;

pub use self::model::{BigramCounts, TransitionModel};
use crate::alphabet::letter_indices;
use crate::config::ModelParams;
use crate::error::CipherResult;

/// Scores candidate plaintexts against a transition model.
///
/// The scorer owns its model for the lifetime of a search and is shared
/// read-only (behind an `Arc`) by every chain.
pub struct Scorer {
    model: TransitionModel,
}

impl Scorer {
    pub fn new(model: TransitionModel) -> Self {
        Self { model }
    }

    pub fn from_corpus(corpus: &str, params: &ModelParams) -> CipherResult<Self> {
        let model = TransitionModel::build_with_smoothing(corpus, params.smoothing)?;
        Ok(Self::new(model))
    }

    pub fn model(&self) -> &TransitionModel {
        &self.model
    }

    /// Log-likelihood of `text` under the model.
    pub fn score(&self, text: &str) -> f64 {
        score(text, &self.model)
    }
}

/// Sum of `log P(next | prev)` over every consecutive letter pair of `text`.
///
/// Letters are matched case-insensitively and anything outside the alphabet
/// is skipped over, so "he, said" scores the pair `e`-`s`. A text with fewer
/// than two letters scores 0.0.
pub fn score(text: &str, model: &TransitionModel) -> f64 {
    let mut total = 0.0;
    let mut prev: Option<usize> = None;
    for idx in letter_indices(text) {
        if let Some(p) = prev {
            total += model.log_prob(p, idx);
        }
        prev = Some(idx);
    }
    total
}
