// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for enumerator construction and bit-text parsing.

use std::collections::TryReserveError;
use thiserror::Error;

use crate::window::MAX_BIT_LENGTH;

/// Errors that can occur while constructing a sequence enumerator.
///
/// These are the only failures of the enumerator: once built, `reset` and
/// `next_sequence` always succeed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnumeratorError {
    /// The requested sequence length is outside `1..=64`.
    #[error("bit length {bit_length} is out of range (expected 1..={max})", max = MAX_BIT_LENGTH)]
    BadArgument { bit_length: u32 },

    /// The choice-point stack could not be allocated.
    #[error("could not allocate the search stack: {0}")]
    OutOfMemory(#[from] TryReserveError),
}

/// Errors from parsing a binary text sequence.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseBitsError {
    /// A character other than '0', '1', space, tab or carriage return was
    /// found before the first newline.
    #[error("invalid binary digit {found:?} at position {position}")]
    InvalidDigit { position: usize, found: char },

    /// More digits than fit in a 64-bit value.
    #[error("sequence has {digits} digits (max {max})", max = MAX_BIT_LENGTH)]
    TooLong { digits: usize },
}
