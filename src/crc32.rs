// Copyright (c) 2024-present, fjall-rs
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

//! CRC-32 checksum (IEEE 802.3 variant).
//!
//! Independent of bucket selection; kept as a standalone utility for callers
//! that need the classic memcache-style key checksum.

/// Reflected IEEE 802.3 polynomial
const POLYNOMIAL: u32 = 0xedb8_8320;

static TABLE: [u32; 256] = build_table();

#[allow(clippy::indexing_slicing)]
const fn build_table() -> [u32; 256] {
    let mut table = [0u32; 256];

    let mut i = 0;
    while i < 256 {
        let mut crc = i as u32;

        let mut bit = 0;
        while bit < 8 {
            crc = if crc & 1 == 1 {
                (crc >> 1) ^ POLYNOMIAL
            } else {
                crc >> 1
            };
            bit += 1;
        }

        table[i] = crc;
        i += 1;
    }

    table
}

/// Computes the CRC-32 checksum (IEEE 802.3) of a byte buffer.
///
/// ```
/// assert_eq!(0xCBF4_3926, furc::crc32(b"123456789"));
/// ```
#[must_use]
pub fn crc32(bytes: &[u8]) -> u32 {
    let mut crc = !0u32;

    for byte in bytes {
        // NOTE: in bounds because of the & 0xff mask
        #[allow(clippy::indexing_slicing)]
        let entry = TABLE[((crc ^ u32::from(*byte)) & 0xff) as usize];

        crc = (crc >> 8) ^ entry;
    }

    !crc
}
