// Copyright (c) 2024-present, fjall-rs
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

/// Seed constant, selected by search for optimum diffusion including
/// recursive application (see [`rehash64`]).
pub(crate) const SEED: u32 = 4_193_360_111;

const M: u64 = 0xc6a4_a793_5bd1_e995;
const R: u32 = 47;

/// Hashes a byte buffer using MurmurHash64A.
///
/// Matches the reference implementation bit for bit; downstream systems rely
/// on the exact output values, so this is an interoperability contract, not
/// an implementation detail.
#[must_use]
pub fn hash64(bytes: &[u8], seed: u32) -> u64 {
    let mut h = u64::from(seed) ^ (bytes.len() as u64).wrapping_mul(M);

    let mut chunks = bytes.chunks_exact(8);

    for chunk in &mut chunks {
        // NOTE: chunks_exact yields exactly 8 bytes
        #[allow(clippy::expect_used)]
        let mut k = u64::from_le_bytes(chunk.try_into().expect("should be 8 bytes"));

        k = k.wrapping_mul(M);
        k ^= k >> R;
        k = k.wrapping_mul(M);

        h ^= k;
        h = h.wrapping_mul(M);
    }

    // Fold the 0..=7 trailing bytes, byte i at bit shift 8 * i
    let tail = chunks.remainder();

    if !tail.is_empty() {
        for (i, byte) in tail.iter().enumerate() {
            h ^= u64::from(*byte) << (8 * i);
        }
        h = h.wrapping_mul(M);
    }

    h ^= h >> R;
    h = h.wrapping_mul(M);
    h ^= h >> R;

    h
}

/// Derives a new pseudorandom 64-bit word from a previous hash value.
///
/// [`hash64`] specialized to a single full 8-byte block at [`SEED`], so
/// `rehash64(k) == hash64(&k.to_le_bytes(), SEED)` for all `k`. Extending the
/// bit supply this way avoids touching the original key bytes again.
pub(crate) fn rehash64(mut k: u64) -> u64 {
    let mut h = u64::from(SEED) ^ 8u64.wrapping_mul(M);

    k = k.wrapping_mul(M);
    k ^= k >> R;
    k = k.wrapping_mul(M);

    h ^= k;
    h = h.wrapping_mul(M);

    h ^= h >> R;
    h = h.wrapping_mul(M);
    h ^= h >> R;

    h
}
