//! Similarity between a decoded candidate and a known plaintext.

use crate::alphabet::{letter_indices, ALPHABET_SIZE};
use crate::scorer::model::count_bigrams;

/// Fraction of aligned letters that agree, comparing the letter streams of
/// both texts position by position. Two texts without letters are identical.
pub fn letter_accuracy(candidate: &str, reference: &str) -> f64 {
    let a: Vec<usize> = letter_indices(candidate).collect();
    let b: Vec<usize> = letter_indices(reference).collect();

    let len = a.len().max(b.len());
    if len == 0 {
        return 1.0;
    }

    let matching = a.iter().zip(b.iter()).filter(|(x, y)| x == y).count();
    matching as f64 / len as f64
}

/// Multiset overlap of letter pairs: the number of pairs the candidate shares
/// with the reference (each pair counted at most as often as it appears in
/// both), divided by the number of pairs in the reference.
pub fn bigram_overlap(candidate: &str, reference: &str) -> f64 {
    let cand = count_bigrams(candidate);
    let refr = count_bigrams(reference);

    let mut shared = 0u64;
    let mut total = 0u64;
    for prev in 0..ALPHABET_SIZE {
        for next in 0..ALPHABET_SIZE {
            shared += cand[prev][next].min(refr[prev][next]);
            total += refr[prev][next];
        }
    }

    if total == 0 {
        let cand_total: u64 = cand.iter().flatten().sum();
        return if cand_total == 0 { 1.0 } else { 0.0 };
    }
    shared as f64 / total as f64
}
