use cipherforge::alphabet::ALPHABET_SIZE;
use cipherforge::key::Key;
use cipherforge::optimizer::acceptance_probability;
use cipherforge::scorer::{Scorer, TransitionModel};
use fastrand::Rng;
use proptest::prelude::*;

// --- STRATEGIES ---

prop_compose! {
    fn arb_key()(seed in any::<u64>()) -> Key {
        Key::random(&mut Rng::with_seed(seed))
    }
}

prop_compose! {
    fn arb_corpus()(text in "[a-zA-Z ,.!]{2,200}") -> String {
        text
    }
}

fn is_permutation(key: &Key) -> bool {
    let mut seen = [false; ALPHABET_SIZE];
    for &b in key.as_slice() {
        if (b as usize) >= ALPHABET_SIZE || seen[b as usize] {
            return false;
        }
        seen[b as usize] = true;
    }
    true
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn test_random_swap_preserves_bijection(key in arb_key(), seed in any::<u64>()) {
        let mut rng = Rng::with_seed(seed);
        let next = key.random_swap(&mut rng);

        prop_assert!(is_permutation(&next));
        let changed: Vec<usize> = (0..ALPHABET_SIZE)
            .filter(|&i| key.image(i) != next.image(i))
            .collect();
        prop_assert_eq!(changed.len(), 2);
        prop_assert_eq!(key.image(changed[0]), next.image(changed[1]));
    }

    #[test]
    fn test_decode_round_trip(key in arb_key(), text in "\\PC{0,200}") {
        let scrambled = key.decode(&text);
        prop_assert_eq!(key.inverse().decode(&scrambled), text.clone());
        prop_assert_eq!(key.decode(&key.encode(&text)), text);
    }

    #[test]
    fn test_identity_decode_is_noop(text in "\\PC{0,200}") {
        prop_assert_eq!(Key::identity().decode(&text), text);
    }

    #[test]
    fn test_log_probs_always_finite(corpus in arb_corpus(), smoothing in 0.001..10.0f64) {
        if let Ok(model) = TransitionModel::build_with_smoothing(&corpus, smoothing) {
            for prev in 0..ALPHABET_SIZE {
                let mut row = 0.0;
                for next in 0..ALPHABET_SIZE {
                    let lp = model.log_prob(prev, next);
                    prop_assert!(lp.is_finite(), "log prob not finite: {}", lp);
                    row += lp.exp();
                }
                prop_assert!((row - 1.0).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_scores_finite_and_deterministic(
        corpus in arb_corpus(),
        text in "[ -~]{0,300}"
    ) {
        if let Ok(model) = TransitionModel::build(&corpus) {
            let scorer = Scorer::new(model);
            let a = scorer.score(&text);
            let b = scorer.score(&text);
            prop_assert!(a.is_finite());
            prop_assert!(a <= 0.0);
            prop_assert_eq!(a, b);
        }
    }

    #[test]
    fn test_non_worse_moves_always_accepted(
        current in -1e6..0.0f64,
        gain in 0.0..1e6f64,
        temperature in 0.01..100.0f64
    ) {
        prop_assert_eq!(acceptance_probability(current, current + gain, temperature), 1.0);
    }

    #[test]
    fn test_worse_moves_accepted_below_one(
        current in -1e3..0.0f64,
        loss in 1e-3..1e3f64
    ) {
        let p = acceptance_probability(current, current - loss, 1.0);
        prop_assert!(p < 1.0);
        prop_assert!(p >= 0.0);
    }
}
