// Copyright (c) 2024-present, fjall-rs
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

use crate::murmur::{hash64, rehash64, SEED};
use crate::selector::{MAX_TRIES, SHIFT};

/// Number of 64-bit words needed to cover the highest bit index the selector
/// can reach: the bit cursor starts at `SHIFT` at most, and each of the up to
/// `MAX_TRIES` attempts consumes at most `SHIFT` bits spaced `SHIFT` apart.
pub(crate) const CACHE_WORDS: usize =
    (SHIFT as usize + SHIFT as usize * SHIFT as usize * MAX_TRIES as usize) / 64 + 1;

/// A lazily extended stream of pseudorandom bits derived from one key.
///
/// Word 0 is the murmur hash of the key itself; every following word is
/// derived from its predecessor by rehashing, so the stream extends
/// indefinitely without touching the key bytes again. Words are computed on
/// demand and cached, never recomputed.
///
/// The buffer is entirely stack-resident and performs no heap allocation. It
/// can be reused across repeated lookups of the *same* key (see
/// [`select_bucket_with_cache`](crate::select_bucket_with_cache)); call
/// [`reset`](Self::reset) before switching to a different key, otherwise
/// stale words of the previous key are served. The `&mut` receivers make
/// unsynchronized sharing across threads a compile error.
pub struct BitstreamCache {
    words: [u64; CACHE_WORDS],

    /// Number of valid words in `words`
    computed: usize,
}

impl Default for BitstreamCache {
    fn default() -> Self {
        Self::new()
    }
}

impl BitstreamCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self {
            words: [0; CACHE_WORDS],
            computed: 0,
        }
    }

    /// Forgets all computed hash words.
    ///
    /// Must be called before reusing the buffer for a different key.
    pub fn reset(&mut self) {
        self.computed = 0;
    }

    /// Returns the bit at index `idx` of the key's bit stream, deriving and
    /// caching any hash words not computed yet.
    //
    // NOTE: indexing is in bounds: the selector never advances the bit cursor
    // past `SHIFT + SHIFT * SHIFT * MAX_TRIES`, which `CACHE_WORDS` covers
    #[allow(clippy::indexing_slicing)]
    pub(crate) fn get_bit(&mut self, key: &[u8], idx: u32) -> u32 {
        let order = idx as usize / 64;
        debug_assert!(order < CACHE_WORDS, "bit index {idx} out of range");

        while self.computed <= order {
            self.words[self.computed] = if self.computed == 0 {
                hash64(key, SEED)
            } else {
                rehash64(self.words[self.computed - 1])
            };
            self.computed += 1;
        }

        ((self.words[order] >> (idx % 64)) & 1) as u32
    }
}
