mod common;

use cipherforge::alphabet::{index_of, ALPHABET_SIZE};
use cipherforge::scorer::{self, Scorer, TransitionModel};
use cipherforge::CipherError;
use common::{corpus, secret_key, PANGRAM, PARAGRAPH};
use rstest::rstest;

fn idx(c: char) -> usize {
    index_of(c as u8).unwrap()
}

#[rstest]
#[case("")]
#[case("a")]
#[case("   ")]
#[case("1, 2, 3... !")]
#[case("x 123")]
fn test_insufficient_corpus(#[case] corpus: &str) {
    let result = TransitionModel::build(corpus);
    assert!(
        matches!(result, Err(CipherError::InsufficientData(_))),
        "corpus {:?} should be rejected",
        corpus
    );
}

#[test]
fn test_two_letters_are_enough() {
    let model = TransitionModel::build("a b").unwrap();
    assert_eq!(model.total_pairs(), 1);
    assert!(model.log_prob(idx('a'), idx('b')) > model.log_prob(idx('a'), idx('c')));
}

#[test]
fn test_every_pair_is_finite() {
    let model = TransitionModel::build(PANGRAM).unwrap();
    for prev in 0..ALPHABET_SIZE {
        for next in 0..ALPHABET_SIZE {
            let lp = model.log_prob(prev, next);
            assert!(lp.is_finite(), "log P({} | {}) = {}", next, prev, lp);
            assert!(lp < 0.0);
        }
    }
}

#[test]
fn test_conditional_rows_sum_to_one() {
    let model = TransitionModel::build(&corpus()).unwrap();
    for prev in 0..ALPHABET_SIZE {
        let total: f64 = (0..ALPHABET_SIZE).map(|n| model.probability(prev, n)).sum();
        assert!((total - 1.0).abs() < 1e-9, "row {} sums to {}", prev, total);
    }
}

#[test]
fn test_additive_smoothing_values() {
    // "ab" gives exactly one counted pair: a -> b
    let model = TransitionModel::build_with_smoothing("ab", 1.0).unwrap();
    let expected_seen = (2.0f64 / 27.0).ln();
    let expected_unseen = (1.0f64 / 27.0).ln();
    let expected_empty_row = (1.0f64 / 26.0).ln();

    assert!((model.log_prob(idx('a'), idx('b')) - expected_seen).abs() < 1e-12);
    assert!((model.log_prob(idx('a'), idx('z')) - expected_unseen).abs() < 1e-12);
    assert!((model.log_prob(idx('q'), idx('u')) - expected_empty_row).abs() < 1e-12);
}

#[rstest]
#[case(0.0)]
#[case(-1.0)]
#[case(f64::NAN)]
#[case(f64::INFINITY)]
fn test_invalid_smoothing(#[case] smoothing: f64) {
    let result = TransitionModel::build_with_smoothing(PANGRAM, smoothing);
    assert!(matches!(result, Err(CipherError::Config(_))));
}

#[test]
fn test_from_counts_requires_pairs() {
    let counts = [[0u64; ALPHABET_SIZE]; ALPHABET_SIZE];
    assert!(matches!(
        TransitionModel::from_counts(counts, 1.0),
        Err(CipherError::InsufficientData(_))
    ));
}

#[test]
fn test_score_is_deterministic() {
    let scorer = Scorer::new(TransitionModel::build(&corpus()).unwrap());
    let a = scorer.score(PARAGRAPH);
    let b = scorer.score(PARAGRAPH);
    assert_eq!(a, b);
    assert!(a.is_finite());
}

#[test]
fn test_score_matches_manual_sum() {
    let model = TransitionModel::build(&corpus()).unwrap();
    let expected =
        model.log_prob(idx('t'), idx('h')) + model.log_prob(idx('h'), idx('e'));
    assert_eq!(scorer::score("The", &model), expected);
    // the space is skipped, so the e -> s pair is scored
    let with_gap = scorer::score("he s", &model);
    let manual = model.log_prob(idx('h'), idx('e')) + model.log_prob(idx('e'), idx('s'));
    assert!((with_gap - manual).abs() < 1e-12);
}

#[test]
fn test_english_outscores_scrambled() {
    let scorer = Scorer::new(TransitionModel::build(&corpus()).unwrap());
    let plain = scorer.score(PARAGRAPH);
    let scrambled = scorer.score(&secret_key().decode(PARAGRAPH));
    assert!(
        plain > scrambled,
        "plain {:.2} should beat scrambled {:.2}",
        plain,
        scrambled
    );
}

#[test]
fn test_unseen_pairs_stay_finite_in_scores() {
    let scorer = Scorer::new(TransitionModel::build("aaaa bbbb").unwrap());
    let s = scorer.score("zqxj vkwy");
    assert!(s.is_finite());
    assert!(s < 0.0);
}
