// Copyright (c) 2024-present, fjall-rs
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

/// Represents errors that can occur during bucket selection
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The requested pool size exceeds [`maximum_pool_size`](crate::maximum_pool_size)
    PoolSizeExceeded {
        /// Requested pool size
        got: u32,

        /// Maximum supported pool size
        max: u32,
    },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FurcError: {self:?}")
    }
}

impl std::error::Error for Error {}

/// Furc result
pub type Result<T> = std::result::Result<T, Error>;
