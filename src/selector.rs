// Copyright (c) 2024-present, fjall-rs
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

use crate::{BitstreamCache, Error};

/// Stride between the bit positions consumed by consecutive tree levels.
///
/// Adjacent bits of one hash word are structurally correlated across tree
/// depths, so decisions are spread `SHIFT` bits apart instead. The stride
/// also fixes the maximum supported pool size, `2^SHIFT`; raising it makes
/// lookups modestly slower.
pub const SHIFT: u32 = 23;

/// Upper bound of candidate draws before a lookup gives up and falls back to
/// bucket 0.
pub const MAX_TRIES: u32 = 32;

/// Returns the maximum supported pool size (`2^SHIFT`).
#[must_use]
pub const fn maximum_pool_size() -> u32 {
    1 << SHIFT
}

/// Maps keys to buckets by walking a binary decision tree.
///
/// Carries the tunable attempt bound; use [`select_bucket`] directly unless
/// you need a non-default one.
///
/// ```
/// # fn main() -> furc::Result<()> {
/// let selector = furc::Selector::new().max_tries(8);
/// let bucket = selector.select(b"user:42", 100)?;
/// # assert!(bucket < 100);
/// # Ok(())
/// # }
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Selector {
    max_tries: u32,
}

impl Default for Selector {
    fn default() -> Self {
        Self {
            max_tries: MAX_TRIES,
        }
    }
}

impl Selector {
    /// Creates a selector with the default attempt bound ([`MAX_TRIES`]).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of candidate draws before falling back to bucket 0.
    ///
    /// Lower values trade a slightly higher fallback rate for a tighter
    /// worst-case latency. Clamped to `1..=MAX_TRIES`; the bit cache capacity
    /// is sized for [`MAX_TRIES`].
    #[must_use]
    pub fn max_tries(mut self, n: u32) -> Self {
        self.max_tries = n.clamp(1, MAX_TRIES);
        self
    }

    /// Selects a bucket in `[0, pool_size)` for the given key, using a fresh
    /// internal bit cache.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PoolSizeExceeded`] if `pool_size` exceeds
    /// [`maximum_pool_size`].
    pub fn select(&self, key: &[u8], pool_size: u32) -> crate::Result<u32> {
        let mut cache = BitstreamCache::new();
        self.select_with_cache(key, pool_size, &mut cache)
    }

    /// Selects a bucket in `[0, pool_size)`, reusing a caller-provided bit
    /// cache.
    ///
    /// The cache is *not* reset here: repeated calls for the same key (with
    /// any pool sizes) reuse the hash words derived so far. The caller must
    /// [`reset`](BitstreamCache::reset) the cache before switching keys.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PoolSizeExceeded`] if `pool_size` exceeds
    /// [`maximum_pool_size`].
    pub fn select_with_cache(
        &self,
        key: &[u8],
        pool_size: u32,
        cache: &mut BitstreamCache,
    ) -> crate::Result<u32> {
        if pool_size > maximum_pool_size() {
            return Err(Error::PoolSizeExceeded {
                got: pool_size,
                max: maximum_pool_size(),
            });
        }

        if pool_size <= 1 {
            return Ok(0);
        }

        // Smallest depth d with 2^d >= pool_size
        let mut d = 0;
        while pool_size > (1 << d) {
            d += 1;
        }

        let mut a = d;

        for _ in 0..self.max_tries {
            // Backtrack towards the root until a level answers with a 1-bit
            while cache.get_bit(key, a) == 0 {
                d -= 1;

                if d == 0 {
                    // Ran out of tree; 0 is a legal bucket in every pool
                    return Ok(0);
                }

                a = d;
            }
            a += SHIFT;

            // Descend the subtree, drawing one bit per level; num ends up
            // uniform over [1, 2^d)
            let mut num: u32 = 1;

            for _ in 1..d {
                num = (num << 1) | cache.get_bit(key, a);
                a += SHIFT;
            }

            if num < pool_size {
                return Ok(num);
            }

            // Candidate overshoots the pool, draw again
        }

        log::trace!(
            "no candidate below pool size {pool_size} after {} tries, falling back to bucket 0",
            self.max_tries,
        );

        Ok(0)
    }
}

/// Selects a bucket in `[0, pool_size)` for the given key.
///
/// Deterministic: the same key and pool size produce the same bucket in any
/// process. When the pool grows from `m1` to `m2` buckets, only about
/// `1 - m1/m2` of all keys change buckets.
///
/// `pool_size` values of 0 and 1 both map every key to bucket 0.
///
/// ```
/// # fn main() -> furc::Result<()> {
/// let bucket = furc::select_bucket(b"user:42", 100)?;
/// assert!(bucket < 100);
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns [`Error::PoolSizeExceeded`] if `pool_size` exceeds
/// [`maximum_pool_size`].
pub fn select_bucket(key: &[u8], pool_size: u32) -> crate::Result<u32> {
    Selector::new().select(key, pool_size)
}

/// Selects a bucket in `[0, pool_size)`, reusing a caller-provided bit cache
/// across repeated lookups of the same key.
///
/// See [`Selector::select_with_cache`].
///
/// # Errors
///
/// Returns [`Error::PoolSizeExceeded`] if `pool_size` exceeds
/// [`maximum_pool_size`].
pub fn select_bucket_with_cache(
    key: &[u8],
    pool_size: u32,
    cache: &mut BitstreamCache,
) -> crate::Result<u32> {
    Selector::new().select_with_cache(key, pool_size, cache)
}
