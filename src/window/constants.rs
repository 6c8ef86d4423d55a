// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Constants and width arithmetic for sequence windows.
//!
//! A sequence of `n` bits is checked with windows of width
//! `w = ceil(log2(n))`, so that there are at least as many window codes
//! (`2^w`) as there are cyclic windows (`n`).
//!
//! | bit length | window width | window codes |
//! |-----------:|-------------:|-------------:|
//! | 4          | 2            | 4            |
//! | 5..=8      | 3            | 8            |
//! | 33..=64    | 6            | 64           |

/// Longest supported sequence, in bits.
///
/// Sequences are packed into a `u64`, and the widest window (6 bits) has
/// exactly 64 codes, so every [`WindowSet`](super::WindowSet) fits in a `u64`.
pub const MAX_BIT_LENGTH: u32 = 64;

/// Length of the card-deck sequences (one bit per card).
pub const DECK_BIT_LENGTH: u32 = 52;

/// Window width used for card-deck sequences.
pub const DECK_WINDOW_WIDTH: u32 = window_width(DECK_BIT_LENGTH);

/// Compute the window width for a sequence of `bit_length` bits.
///
/// This is the exponent of the smallest power of two that is at least
/// `bit_length`, but never less than 1: a one-bit sequence still has a
/// one-bit window.
pub const fn window_width(bit_length: u32) -> u32 {
    if bit_length <= 2 {
        1
    } else {
        u32::BITS - (bit_length - 1).leading_zeros()
    }
}

/// Mask selecting the low `width` bits of a value.
pub const fn window_mask(width: u32) -> u64 {
    (1u64 << width) - 1
}

/// Mask selecting the low `bit_length` bits of a value.
pub const fn sequence_mask(bit_length: u32) -> u64 {
    if bit_length >= u64::BITS {
        u64::MAX
    } else {
        (1u64 << bit_length) - 1
    }
}
