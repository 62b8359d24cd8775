use crate::alphabet::ALPHABET_SIZE;
use crate::key::Key;
use clap::ValueEnum;
use fastrand::Rng;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// How a chain picks its starting key.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum InitStrategy {
    /// Start from the no-op key: the first decoding is the ciphertext itself
    #[default]
    Identity,
    /// Start from a uniformly random permutation
    Random,
}

pub fn initial_key(strategy: InitStrategy, rng: &mut Rng) -> Key {
    match strategy {
        InitStrategy::Identity => Key::identity(),
        InitStrategy::Random => Key::random(rng),
    }
}

/// Two distinct positions drawn uniformly from `0..n`. Requires `n >= 2`.
#[inline(always)]
pub fn pick_distinct_pair(rng: &mut Rng, n: usize) -> (usize, usize) {
    let a = rng.usize(0..n);
    let mut b = rng.usize(0..n - 1);
    if b >= a {
        b += 1;
    }
    (a, b)
}

/// The proposal move: exchange the images of two distinct random letters.
///
/// Every transposition is equally likely and is its own inverse, so the
/// proposal distribution is symmetric.
pub fn random_swap(key: &Key, rng: &mut Rng) -> Key {
    let (a, b) = pick_distinct_pair(rng, ALPHABET_SIZE);
    key.swapped(a, b)
}

/// Proposes the next candidate key for a chain sitting at `current`.
#[inline(always)]
pub fn propose(current: &Key, rng: &mut Rng) -> Key {
    random_swap(current, rng)
}
