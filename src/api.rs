use crate::config::{Config, ModelParams};
use crate::error::{CipherError, CipherResult};
use crate::key::Key;
use crate::optimizer::{Optimizer, ProgressCallback, SearchOptions, SearchResult, Silent};
use crate::scorer::loader;
use crate::scorer::metrics::{bigram_overlap, letter_accuracy};
use crate::scorer::{Scorer, TransitionModel};
use fastrand::Rng;
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Where the transition model comes from. The first source set wins, in the
/// order model file, bigram table, corpus text.
#[derive(Debug, Default, Clone)]
pub struct ModelSource<'a> {
    pub model: Option<&'a Path>,
    pub bigrams: Option<&'a Path>,
    pub corpus: Option<&'a Path>,
}

/// Service: build the shared scorer from whichever model source was given.
pub fn load_scorer(source: &ModelSource, params: &ModelParams) -> CipherResult<Arc<Scorer>> {
    params.validate()?;

    let model = if let Some(path) = source.model {
        loader::load_model_from_file(path)?
    } else if let Some(path) = source.bigrams {
        let counts = loader::load_bigram_counts_from_file(path)?;
        TransitionModel::from_counts(counts, params.smoothing)?
    } else if let Some(path) = source.corpus {
        info!("📚 Building model from corpus: {}", path.display());
        let text = loader::read_text(path)?;
        TransitionModel::build_with_smoothing(&text, params.smoothing)?
    } else {
        return Err(CipherError::Config(
            "one of --model, --bigrams or --corpus is required".into(),
        ));
    };

    info!(
        "Model ready: {} pairs, smoothing {}",
        model.total_pairs(),
        model.smoothing()
    );
    Ok(Arc::new(Scorer::new(model)))
}

/// Service: search for the key that best deciphers `ciphertext`.
pub fn solve<CB: ProgressCallback>(
    scorer: Arc<Scorer>,
    ciphertext: &str,
    config: &Config,
    callback: CB,
) -> CipherResult<SearchResult> {
    config.validate()?;
    let optimizer = Optimizer::new(scorer, SearchOptions::from(config));
    optimizer.run(ciphertext, callback)
}

/// Service: one-shot decipherment from raw corpus text.
pub fn decipher(corpus: &str, ciphertext: &str, config: &Config) -> CipherResult<SearchResult> {
    let scorer = Arc::new(Scorer::from_corpus(corpus, &config.model)?);
    solve(scorer, ciphertext, config, Silent)
}

/// Enciphers `plaintext` so that `key` deciphers it. Without a key, a fresh
/// random one is drawn from `seed`. Returns the deciphering key and the
/// ciphertext.
pub fn encipher(plaintext: &str, key: Option<Key>, seed: Option<u64>) -> (Key, String) {
    let key = key.unwrap_or_else(|| {
        let mut rng = match seed {
            Some(s) => Rng::with_seed(s),
            None => Rng::new(),
        };
        Key::random(&mut rng)
    });
    let ciphertext = key.encode(plaintext);
    (key, ciphertext)
}

#[derive(Debug, Clone, Serialize)]
pub struct DemoReport {
    /// Plaintext-to-ciphertext mapping used to build the puzzle
    pub cipher_key: Key,
    /// The deciphering key the search is looking for
    pub true_key: Key,
    pub ciphertext: String,
    pub result: SearchResult,
    pub baseline_score: f64,
    pub true_score: f64,
    pub letter_accuracy: f64,
    pub bigram_overlap: f64,
}

/// Service: encipher a known plaintext with a random key, solve it, and
/// measure how close the recovered text is to the original.
pub fn demo<CB: ProgressCallback>(
    scorer: Arc<Scorer>,
    plaintext: &str,
    config: &Config,
    callback: CB,
) -> CipherResult<DemoReport> {
    // Offset so the cipher key is not drawn from the same stream as chain 0
    let cipher_seed = config.search.seed.map(|s| s.wrapping_add(0x5eed));
    let (true_key, ciphertext) = encipher(plaintext, None, cipher_seed);
    let cipher_key = true_key.inverse();

    let baseline_score = scorer.score(&ciphertext);
    let true_score = scorer.score(plaintext);

    let result = solve(scorer, &ciphertext, config, callback)?;

    Ok(DemoReport {
        letter_accuracy: letter_accuracy(&result.plaintext, plaintext),
        bigram_overlap: bigram_overlap(&result.plaintext, plaintext),
        cipher_key,
        true_key,
        ciphertext,
        result,
        baseline_score,
        true_score,
    })
}
