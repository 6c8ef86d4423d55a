// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Choice points for the depth-first sequence search.
//!
//! A choice point is one pending binary decision: "extend this prefix with
//! `next_bit`". Both children of a decision are pushed before either is
//! explored, so the stack always holds one frame for every alternative not
//! yet tried.

use crate::window::WindowSet;

/// A saved partial sequence together with the bit to try next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoicePoint {
    /// Bits chosen so far, most significant (earliest) first.
    pub partial_value: u64,

    /// Number of bits chosen so far.
    pub length: u32,

    /// Number of one bits among those chosen.
    pub set_bit_count: u32,

    /// Window codes completed by the prefix.
    pub seen: WindowSet,

    /// Bit appended when this frame is popped (0 or 1).
    pub next_bit: u8,
}

impl ChoicePoint {
    /// A frame for the first bit of a sequence.
    pub const fn root(next_bit: u8) -> Self {
        Self {
            partial_value: 0,
            length: 0,
            set_bit_count: 0,
            seen: WindowSet::empty(),
            next_bit,
        }
    }

    /// The same prefix, trying a different bit.
    pub const fn with_next_bit(self, next_bit: u8) -> Self {
        Self { next_bit, ..self }
    }
}
