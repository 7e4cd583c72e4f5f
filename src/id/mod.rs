//! # ID Generation
//!
//! Fixed-length random identifiers drawn from an [`Alphabet`], and the
//! run-scoped [`IdPool`] that keeps them unique across every task of a run.
//!
//! The pool is always passed in explicitly; nothing here holds global state.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod alphabet;

use std::collections::HashSet;

use rand::Rng;

pub use self::alphabet::Alphabet;

/// Generates an identifier of `length` independent uniform draws from `alphabet`.
pub fn generate(length: usize, alphabet: &Alphabet) -> String {
    generate_with(&mut rand::rng(), length, alphabet)
}

/// Like [`generate`], with a caller-supplied random source.
pub fn generate_with<R: Rng + ?Sized>(rng: &mut R, length: usize, alphabet: &Alphabet) -> String {
    (0..length).map(|_| alphabet.pick(rng)).collect()
}

/// Set of identifiers considered in use during one run.
#[derive(Debug, Clone, Default)]
pub struct IdPool {
    ids: HashSet<String>,
}

impl IdPool {
    /// Creates an empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if `id` is already in use.
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Marks `id` as in use. Returns false if it already was.
    pub fn claim(&mut self, id: &str) -> bool {
        if self.ids.contains(id) {
            return false;
        }
        self.ids.insert(id.to_string())
    }

    /// Number of identifiers in use.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns true if no identifier has been claimed.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Generates identifiers until one is absent from `pool`, claims it and returns it.
///
/// There is no retry cap: with the default 62-symbol alphabet even 5 symbols
/// give ~9.2e8 combinations, so the loop ends almost immediately. A tiny
/// alphabet/length pair with a saturated pool would spin forever.
pub fn allocate_unique(pool: &mut IdPool, length: usize, alphabet: &Alphabet) -> String {
    allocate_unique_with(&mut rand::rng(), pool, length, alphabet)
}

/// Like [`allocate_unique`], with a caller-supplied random source.
pub fn allocate_unique_with<R: Rng + ?Sized>(
    rng: &mut R,
    pool: &mut IdPool,
    length: usize,
    alphabet: &Alphabet,
) -> String {
    loop {
        let id = generate_with(rng, length, alphabet);
        if pool.claim(&id) {
            return id;
        }
        tracing::debug!(
            %id,
            in_use = pool.len(),
            space = %alphabet.combinations(length),
            "identifier already in use, retrying"
        );
    }
}
