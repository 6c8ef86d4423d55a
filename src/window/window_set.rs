// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! WindowSet type for recording which window codes have been seen.
//!
//! A WindowSet is a bitset over window codes, where bit i is set when the
//! window whose value is i has occurred. Windows are at most 6 bits wide, so
//! the whole set fits in a `u64`.
//!
//! # Examples
//!
//! ```
//! use dbn_search::window::WindowSet;
//!
//! let seen = WindowSet::empty().with(0b01).with(0b11);
//!
//! assert!(seen.contains(0b01));
//! assert!(!seen.contains(0b10));
//! assert_eq!(seen.len(), 2);
//! assert_eq!(format!("{}", seen), "{1, 3}");
//! ```

use std::fmt;

/// A set of window codes represented as a bitset.
///
/// Bit i (counting from LSB) is set if window code i is in the set.
/// The type is `Copy`: each search frame carries its own snapshot, so
/// extending the set for one branch never affects a sibling branch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct WindowSet(u64);

impl WindowSet {
    /// Create an empty window set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Create a window set from a raw bit value.
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    /// Create a window set from a slice of window codes.
    ///
    /// Codes must be below 64.
    pub fn from_codes(codes: &[u64]) -> Self {
        let mut set = Self::empty();
        for &code in codes {
            set.insert(code);
        }
        set
    }

    /// Check if the set contains a window code.
    ///
    /// Codes must be below 64.
    pub const fn contains(self, code: u64) -> bool {
        debug_assert!(code < 64, "window code out of range");
        (self.0 >> code) & 1 != 0
    }

    /// Insert a window code into the set.
    ///
    /// Codes must be below 64.
    pub fn insert(&mut self, code: u64) {
        debug_assert!(code < 64, "window code out of range: {}", code);
        self.0 |= 1 << code;
    }

    /// Return a copy of this set with `code` added.
    ///
    /// Codes must be below 64.
    #[must_use]
    pub const fn with(self, code: u64) -> Self {
        debug_assert!(code < 64, "window code out of range");
        Self(self.0 | (1 << code))
    }

    /// Get the number of codes in the set (population count).
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Check if the set is empty.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Get the underlying bitset value.
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Iterate over all codes in the set, in ascending order.
    pub fn iter(self) -> impl Iterator<Item = u64> {
        WindowSetIter { bits: self.0 }
    }
}

struct WindowSetIter {
    bits: u64,
}

impl Iterator for WindowSetIter {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        let code = self.bits.trailing_zeros() as u64;
        self.bits &= self.bits - 1;
        Some(code)
    }
}

impl fmt::Display for WindowSet {
    /// Format a window set as "{1, 3, 6}".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, code) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", code)?;
        }
        write!(f, "}}")
    }
}

/// Codes must be below 64.
impl From<&[u64]> for WindowSet {
    fn from(codes: &[u64]) -> Self {
        Self::from_codes(codes)
    }
}
