#![allow(dead_code)]

use cipherforge::key::Key;
use cipherforge::scorer::{Scorer, TransitionModel};
use std::sync::Arc;

pub const PANGRAM: &str = "the quick brown fox jumps over the lazy dog";

pub const PARAGRAPH: &str = "It was a bright cold morning and the old harbour was \
already busy with boats coming in from the night. The fishermen called to one \
another as they tied their ropes, and the smell of salt and smoke drifted over \
the water. Along the wall a small boy sat watching the gulls, waiting for his \
father to return with the morning catch. He had been told many times that the \
sea could be cruel, but on a day like this it seemed gentle and kind, and he \
dreamed of the moment when he would be old enough to sail out beyond the \
lighthouse and see the open ocean for himself.";

/// Reference text with enough repetition to populate bigram statistics.
pub fn corpus() -> String {
    let mut text = String::new();
    for _ in 0..5 {
        text.push_str(PANGRAM);
        text.push_str(". ");
    }
    for _ in 0..3 {
        text.push_str(PARAGRAPH);
        text.push(' ');
    }
    text
}

pub fn pangram_corpus() -> String {
    vec![PANGRAM; 20].join(". ")
}

pub fn scorer() -> Arc<Scorer> {
    let model = TransitionModel::build(&corpus()).expect("corpus should build a model");
    Arc::new(Scorer::new(model))
}

/// A fixed, non-trivial deciphering key.
pub fn secret_key() -> Key {
    Key::parse("qwertyuiopasdfghjklzxcvbnm").expect("valid key")
}
