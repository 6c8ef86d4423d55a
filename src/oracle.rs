// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Subsequence uniqueness checks.
//!
//! A cyclic sequence of `n` bits has `n` windows of width `w`. To read the
//! windows that wrap past the end without special cases, the low `w - 1`
//! bits are copied above bit `n - 1`; the `n` windows are then the low `w`
//! bits of the extended value at shifts `0..n`.
//!
//! [`has_unique_subsequences`] is the fixed form for card-deck sequences
//! (52 bits, width 6). [`has_unique_windows`] is the same check for any
//! length from 1 to 64 bits.
//!
//! # Example
//!
//! ```
//! use dbn_search::oracle::{has_unique_subsequences, has_unique_windows};
//!
//! // 0011 read cyclically has windows 00, 01, 11, 10.
//! assert!(has_unique_windows(0b0011, 4));
//! assert!(!has_unique_windows(0b0101, 4));
//!
//! assert!(has_unique_subsequences(0x3F79_D71B_4C95));
//! assert!(!has_unique_subsequences(0));
//! ```

use crate::window::{
    sequence_mask, window_mask, window_width, WindowSet, DECK_BIT_LENGTH, DECK_WINDOW_WIDTH,
};

/// Check that all 52 cyclic 6-bit windows of a 52-bit sequence are distinct.
///
/// Only the low 52 bits are meaningful; the caller is expected to pass a
/// 52-bit value.
pub fn has_unique_subsequences(sequence: u64) -> bool {
    const WRAP_MASK: u64 = window_mask(DECK_WINDOW_WIDTH - 1);
    const MASK: u64 = window_mask(DECK_WINDOW_WIDTH);

    let mut seq = sequence | ((sequence & WRAP_MASK) << DECK_BIT_LENGTH);
    let mut seen = WindowSet::empty();

    for _ in 0..DECK_BIT_LENGTH {
        let code = seq & MASK;
        if seen.contains(code) {
            return false;
        }
        seen.insert(code);
        seq >>= 1;
    }

    true
}

/// Check that all cyclic windows of a `bit_length`-bit sequence are distinct.
///
/// The window width is [`window_width`]`(bit_length)`. Bits of `sequence` at
/// or above `bit_length` are ignored.
///
/// # Panics
///
/// Panics if `bit_length` is 0 or greater than 64.
pub fn has_unique_windows(sequence: u64, bit_length: u32) -> bool {
    cyclic_windows(sequence, bit_length)
        .try_fold(WindowSet::empty(), |seen, code| {
            (!seen.contains(code)).then(|| seen.with(code))
        })
        .is_some()
}

/// Check whether any cyclic window of the sequence is all zeros or all ones.
///
/// # Panics
///
/// Panics if `bit_length` is 0 or greater than 64.
pub fn has_uniform_window(sequence: u64, bit_length: u32) -> bool {
    let mask = window_mask(window_width(bit_length));
    cyclic_windows(sequence, bit_length).any(|code| code == 0 || code == mask)
}

/// Iterate over the `bit_length` cyclic window codes of a sequence.
///
/// The window at shift `i` covers bits `i..i + w` of the sequence, wrapping
/// from bit `bit_length - 1` back to bit 0.
///
/// # Panics
///
/// Panics if `bit_length` is 0 or greater than 64.
pub fn cyclic_windows(sequence: u64, bit_length: u32) -> impl Iterator<Item = u64> {
    assert!(
        (1..=64).contains(&bit_length),
        "bit length out of range: {}",
        bit_length
    );

    let width = window_width(bit_length);
    let mask = window_mask(width) as u128;
    let sequence = (sequence & sequence_mask(bit_length)) as u128;
    let wrap = sequence & window_mask(width - 1) as u128;
    let extended = sequence | (wrap << bit_length);

    (0..bit_length).map(move |shift| ((extended >> shift) & mask) as u64)
}
