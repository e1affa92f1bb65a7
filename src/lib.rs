// Copyright (c) 2024-present, fjall-rs
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

//! A consistent hash function using a binary decision tree (furc hash).
//!
//! Maps an arbitrary byte string key to one of `pool_size` numbered buckets,
//! such that when the pool grows from `m1` to `m2` buckets, only about
//! `1 - m1/m2` of all keys move to a different bucket. This makes it suitable
//! for routing keys to a dynamically sized pool of downstream destinations
//! (e.g. cache shards) without a lookup table and without coordination when
//! the pool is resized.
//!
//! The algorithm walks a binary decision tree using pseudorandom bits derived
//! from a 64-bit hash of the key (MurmurHash64A). Additional bits are
//! generated by recursively rehashing the initial hash, so performance is
//! fairly insensitive to key length. Lookups stay in the sub-microsecond
//! range even for pools with hundreds of thousands of buckets.
//!
//! # Examples
//!
//! ```
//! # fn main() -> furc::Result<()> {
//! let bucket = furc::select_bucket(b"user:42", 100)?;
//! assert!(bucket < 100);
//!
//! // Same key, same pool size => same bucket, in any process, forever
//! assert_eq!(bucket, furc::select_bucket(b"user:42", 100)?);
//! # Ok(())
//! # }
//! ```
//!
//! Repeated lookups of the same key against different pool sizes can share a
//! [`BitstreamCache`] to avoid re-deriving hash words:
//!
//! ```
//! # fn main() -> furc::Result<()> {
//! use furc::BitstreamCache;
//!
//! let mut cache = BitstreamCache::new();
//!
//! let before = furc::select_bucket_with_cache(b"user:42", 100, &mut cache)?;
//! let after = furc::select_bucket_with_cache(b"user:42", 101, &mut cache)?;
//!
//! // The cache is tied to the key; reset it before switching keys
//! cache.reset();
//! let other = furc::select_bucket_with_cache(b"user:43", 100, &mut cache)?;
//! # let _ = (before, after, other);
//! # Ok(())
//! # }
//! ```

#![deny(clippy::all, missing_docs, clippy::cargo)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::indexing_slicing)]
#![warn(clippy::pedantic, clippy::nursery)]
#![warn(clippy::expect_used)]
#![allow(clippy::missing_const_for_fn)]
#![warn(clippy::multiple_crate_versions)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod bitstream;
mod crc32;
mod error;
mod murmur;
mod selector;

pub use bitstream::BitstreamCache;
pub use crc32::crc32;
pub use error::{Error, Result};
pub use murmur::hash64;
pub use selector::{
    maximum_pool_size, select_bucket, select_bucket_with_cache, Selector, MAX_TRIES, SHIFT,
};
