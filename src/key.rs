use crate::alphabet::{index_of_char, letter_at, ALPHABET_SIZE};
use crate::error::{CipherError, CipherResult};
use crate::optimizer::mutation;
use fastrand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A reverse-cipher key: a permutation of the alphabet mapping each
/// ciphertext letter to the plaintext letter it decodes to.
///
/// Keys are small `Copy` values. Every operation that changes the mapping
/// returns a new `Key`, so a rejected proposal can never leak into the
/// state it was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Key {
    // map[cipher] = plain
    map: [u8; ALPHABET_SIZE],
}

impl Key {
    pub fn identity() -> Self {
        let mut map = [0u8; ALPHABET_SIZE];
        for (i, slot) in map.iter_mut().enumerate() {
            *slot = i as u8;
        }
        Key { map }
    }

    /// Uniformly random permutation.
    pub fn random(rng: &mut Rng) -> Self {
        let mut key = Self::identity();
        rng.shuffle(&mut key.map);
        key
    }

    /// Builds a key from explicit images, rejecting anything that is not a
    /// bijection over the alphabet.
    pub fn from_permutation(map: [u8; ALPHABET_SIZE]) -> CipherResult<Self> {
        let mut seen = [false; ALPHABET_SIZE];
        for &target in &map {
            let t = target as usize;
            if t >= ALPHABET_SIZE {
                return Err(CipherError::InvalidKey(format!(
                    "image {} is outside the alphabet",
                    t
                )));
            }
            if seen[t] {
                return Err(CipherError::InvalidKey(format!(
                    "letter '{}' is mapped to twice",
                    letter_at(t) as char
                )));
            }
            seen[t] = true;
        }
        Ok(Key { map })
    }

    /// Parses the 26-letter form produced by `Display`: the i-th letter is
    /// the plaintext image of the i-th ciphertext letter.
    pub fn parse(s: &str) -> CipherResult<Self> {
        let s = s.trim();
        let len = s.chars().count();
        if len != ALPHABET_SIZE {
            return Err(CipherError::InvalidKey(format!(
                "expected {} letters, got {}",
                ALPHABET_SIZE, len
            )));
        }

        let mut map = [0u8; ALPHABET_SIZE];
        for (slot, c) in map.iter_mut().zip(s.chars()) {
            *slot = index_of_char(c)
                .ok_or_else(|| CipherError::InvalidKey(format!("'{}' is not a letter", c)))?
                as u8;
        }
        Self::from_permutation(map)
    }

    /// Plaintext index that ciphertext letter `cipher` decodes to.
    #[inline(always)]
    pub fn image(&self, cipher: usize) -> usize {
        self.map[cipher] as usize
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.map
    }

    /// New key with the images of `a` and `b` exchanged.
    pub fn swapped(&self, a: usize, b: usize) -> Self {
        let mut map = self.map;
        map.swap(a, b);
        Key { map }
    }

    /// New key differing from this one by a single random transposition.
    pub fn random_swap(&self, rng: &mut Rng) -> Self {
        mutation::random_swap(self, rng)
    }

    pub fn inverse(&self) -> Self {
        let mut map = [0u8; ALPHABET_SIZE];
        for (cipher, &plain) in self.map.iter().enumerate() {
            map[plain as usize] = cipher as u8;
        }
        Key { map }
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    /// Applies the substitution letter by letter. Non-letters pass through
    /// and the case of each letter is kept.
    pub fn decode(&self, text: &str) -> String {
        text.chars()
            .map(|c| {
                let cipher = match index_of_char(c) {
                    Some(idx) => idx,
                    None => return c,
                };
                let plain = letter_at(self.image(cipher)) as char;
                if c.is_ascii_uppercase() {
                    plain.to_ascii_uppercase()
                } else {
                    plain
                }
            })
            .collect()
    }

    /// Applies the inverse substitution: the ciphertext that this key
    /// decodes back to `text`.
    pub fn encode(&self, text: &str) -> String {
        self.inverse().decode(text)
    }
}

impl Default for Key {
    fn default() -> Self {
        Self::identity()
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &plain in &self.map {
            write!(f, "{}", letter_at(plain as usize) as char)?;
        }
        Ok(())
    }
}

impl FromStr for Key {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Key> for String {
    fn from(key: Key) -> Self {
        key.to_string()
    }
}

impl TryFrom<String> for Key {
    type Error = CipherError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}
