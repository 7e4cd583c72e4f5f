//! # Identifier Alphabet
//!
//! The symbol set identifiers are drawn from. Case-sensitive; the default is
//! `A-Z`, `a-z`, `0-9` (62 symbols).
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use rand::Rng;

use crate::constants::DEFAULT_ID_ALPHABET;

/// A non-empty set of symbols for identifier generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    /// Builds an alphabet from the characters of `chars`.
    ///
    /// Returns `None` if `chars` is empty.
    pub fn new(chars: &str) -> Option<Self> {
        let symbols: Vec<char> = chars.chars().collect();
        if symbols.is_empty() {
            None
        } else {
            Some(Self { symbols })
        }
    }

    /// Number of symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false; an alphabet cannot be constructed empty.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Returns true if `c` is one of the symbols.
    pub fn contains(&self, c: char) -> bool {
        self.symbols.contains(&c)
    }

    /// Draws one symbol uniformly at random.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> char {
        self.symbols[rng.random_range(0..self.symbols.len())]
    }

    /// Number of distinct identifiers of `length` symbols, saturating at `u128::MAX`.
    pub fn combinations(&self, length: usize) -> u128 {
        let base = self.symbols.len() as u128;
        (0..length).fold(1u128, |acc, _| acc.saturating_mul(base))
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self {
            symbols: DEFAULT_ID_ALPHABET.chars().collect(),
        }
    }
}
