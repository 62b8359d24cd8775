//! The fixed 26-letter alphabet every key, model and score works over.
//!
//! Letters are case-insensitive. Anything that is not an ASCII letter is
//! outside the alphabet: it passes through decoding untouched and is skipped
//! when scoring.

pub const ALPHABET_SIZE: usize = 26;
pub const ALPHABET: &[u8; ALPHABET_SIZE] = b"abcdefghijklmnopqrstuvwxyz";

/// Index of a letter in the alphabet, or `None` for any other byte.
#[inline(always)]
pub fn index_of(byte: u8) -> Option<usize> {
    if byte.is_ascii_alphabetic() {
        Some((byte.to_ascii_lowercase() - b'a') as usize)
    } else {
        None
    }
}

#[inline(always)]
pub fn index_of_char(c: char) -> Option<usize> {
    if c.is_ascii() {
        index_of(c as u8)
    } else {
        None
    }
}

/// Lowercase letter at `idx`. Panics if `idx >= ALPHABET_SIZE`.
#[inline(always)]
pub fn letter_at(idx: usize) -> u8 {
    ALPHABET[idx]
}

/// Alphabet indices of the letters in `text`, in order, non-letters skipped.
pub fn letter_indices(text: &str) -> impl Iterator<Item = usize> + '_ {
    text.bytes().filter_map(index_of)
}

pub fn letter_count(text: &str) -> usize {
    letter_indices(text).count()
}

/// Number of consecutive letter pairs once non-letters are dropped.
pub fn pair_count(text: &str) -> usize {
    letter_count(text).saturating_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_is_case_insensitive() {
        assert_eq!(index_of(b'a'), Some(0));
        assert_eq!(index_of(b'A'), Some(0));
        assert_eq!(index_of(b'z'), Some(25));
        assert_eq!(index_of(b'Z'), Some(25));
        assert_eq!(index_of(b' '), None);
        assert_eq!(index_of(b'!'), None);
        assert_eq!(index_of(0xC3), None);
    }

    #[test]
    fn test_pairs_skip_punctuation() {
        assert_eq!(letter_count("Hi, there!"), 7);
        assert_eq!(pair_count("Hi, there!"), 6);
        assert_eq!(pair_count("x"), 0);
        assert_eq!(pair_count(""), 0);
        assert_eq!(pair_count("12 34"), 0);
    }
}
