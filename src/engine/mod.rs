// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Resumable depth-first search for de Bruijn-style sequences.
//!
//! This module implements a backtracking enumerator over the binary tree of
//! "the next bit is 0 or 1". The search never recurses: pending decisions
//! live on an explicit stack of [`ChoicePoint`]s, so each call to
//! [`SequenceEnumerator::next_sequence`] resumes exactly where the previous
//! call stopped.
//!
//! # Architecture
//!
//! Each stack entry holds a prefix, its one-bit count, the set of window
//! codes it has completed, and the bit to append next. Popping an entry:
//! 1. Appends the bit; discards the branch if it has too many one bits
//! 2. Once the prefix is at least one window wide, checks the newest window
//!    against the entry's [`WindowSet`] (and the uniform-window rule)
//! 3. At full length, checks the `w - 1` windows that wrap past the end;
//!    if they are unique the sequence is returned
//! 4. Otherwise pushes both children, each carrying its own copy of the set
//!
//! Live stack depth never exceeds `bit_length + 1`.
//!
//! # Example
//!
//! ```
//! use dbn_search::engine::EnumeratorBuilder;
//!
//! let mut enumerator = EnumeratorBuilder::new(4).build().unwrap();
//!
//! // Every 4-bit cycle whose four 2-bit windows are all different.
//! let found: Vec<u64> = enumerator.by_ref().collect();
//! assert_eq!(found, vec![0b0011, 0b0110, 0b1001, 0b1100]);
//!
//! // Exhausted until reset.
//! assert_eq!(enumerator.next_sequence(), None);
//! enumerator.reset();
//! assert_eq!(enumerator.next_sequence(), Some(0b0011));
//! ```

pub mod choice_point;
pub mod statistics;

pub use choice_point::ChoicePoint;
pub use statistics::{Counter, Statistics};

use std::iter::FusedIterator;
use tracing::{debug, trace};

use crate::bits::BitString;
use crate::error::EnumeratorError;
use crate::window::{window_mask, window_width, WindowRule, WindowSet, MAX_BIT_LENGTH};

/// Number of choice points reserved when an enumerator is created.
///
/// The live depth is at most 65 frames, so this is never exceeded and the
/// stack never reallocates during a search.
pub const STACK_CAPACITY: usize = 8192;

/// Depth-first enumerator of sequences with unique cyclic windows.
///
/// Created with [`SequenceEnumerator::new`] or [`EnumeratorBuilder`]. Each
/// enumerator owns its stack; separate enumerators can run on separate
/// threads.
#[derive(Debug, Clone)]
pub struct SequenceEnumerator {
    /// Pending choice points (LIFO).
    stack: Vec<ChoicePoint>,

    /// Sequence length `n`.
    bit_length: u32,

    /// Required number of one bits, or 0 for any number.
    target_one_count: u32,

    /// Window width `w`.
    window_width: u32,

    /// Low `w` bits.
    window_mask: u64,

    window_rule: WindowRule,

    /// Window codes that may never occur (empty unless uniform windows are forbidden).
    forbidden_windows: WindowSet,

    /// Set once the stack has emptied; cleared by `reset`.
    exhausted: bool,

    /// Largest stack depth since the last reset.
    peak_depth: usize,

    statistics: Statistics,
}

impl SequenceEnumerator {
    /// Create an enumerator positioned at the start of the search.
    ///
    /// `target_one_count` of 0 accepts any number of one bits. A count larger
    /// than `bit_length` is not an error; the search simply finds nothing.
    ///
    /// # Errors
    ///
    /// - [`EnumeratorError::BadArgument`] if `bit_length` is not in `1..=64`
    /// - [`EnumeratorError::OutOfMemory`] if the stack cannot be reserved
    pub fn new(
        bit_length: u32,
        target_one_count: u32,
        window_rule: WindowRule,
    ) -> Result<Self, EnumeratorError> {
        if !(1..=MAX_BIT_LENGTH).contains(&bit_length) {
            return Err(EnumeratorError::BadArgument { bit_length });
        }

        let mut stack = Vec::new();
        stack.try_reserve_exact(STACK_CAPACITY)?;

        let window_width = window_width(bit_length);
        let window_mask = window_mask(window_width);
        let forbidden_windows = if window_rule.forbids_uniform() {
            WindowSet::from_codes(&[0, window_mask])
        } else {
            WindowSet::empty()
        };

        debug!(
            bit_length,
            target_one_count,
            window_width,
            %window_rule,
            "created sequence enumerator"
        );

        let mut enumerator = Self {
            stack,
            bit_length,
            target_one_count,
            window_width,
            window_mask,
            window_rule,
            forbidden_windows,
            exhausted: false,
            peak_depth: 0,
            statistics: Statistics::new(),
        };
        enumerator.reset();
        Ok(enumerator)
    }

    /// Restart the search from the beginning.
    ///
    /// Clears the stack and statistics, then seeds the two possible first
    /// bits. The zero bit is pushed last, so it is explored first.
    pub fn reset(&mut self) {
        self.stack.clear();
        self.stack.push(ChoicePoint::root(1));
        self.stack.push(ChoicePoint::root(0));
        self.statistics.reset();
        self.exhausted = false;
        self.peak_depth = self.stack.len();
    }

    /// Find the next valid sequence.
    ///
    /// Returns `None` once the search space is exhausted, and keeps returning
    /// `None` until [`reset`](Self::reset) is called. A returned value is
    /// never 0.
    pub fn next_sequence(&mut self) -> Option<u64> {
        while let Some(frame) = self.stack.pop() {
            self.statistics.increment(Counter::FramesPopped);

            let set_bit_count = frame.set_bit_count + u32::from(frame.next_bit);
            if self.target_one_count != 0 && set_bit_count > self.target_one_count {
                self.statistics.increment(Counter::OneCountPruned);
                continue;
            }

            let value = (frame.partial_value << 1) | u64::from(frame.next_bit);
            let length = frame.length + 1;
            let mut seen = frame.seen;

            if length >= self.window_width {
                let code = value & self.window_mask;
                if let Some(reason) = self.window_rejection(seen, code) {
                    self.statistics.increment(reason);
                    continue;
                }
                seen = seen.with(code);
            }

            if length == self.bit_length {
                if self.target_one_count != 0 && set_bit_count != self.target_one_count {
                    self.statistics.increment(Counter::OneCountPruned);
                    continue;
                }
                if value == 0 || !self.wrap_windows_valid(value, seen) {
                    self.statistics.increment(Counter::WrapWindowRejected);
                    continue;
                }

                self.statistics.increment(Counter::SequencesFound);
                trace!(sequence = %BitString::new(value, self.bit_length), "found sequence");
                return Some(value);
            }

            // While the first window is incomplete, try 0 before 1; afterwards try 1 first.
            let pushed_first = u8::from(length < self.window_width);
            let child = ChoicePoint {
                partial_value: value,
                length,
                set_bit_count,
                seen,
                next_bit: pushed_first,
            };
            self.stack.push(child);
            self.stack.push(child.with_next_bit(1 - pushed_first));
            self.peak_depth = self.peak_depth.max(self.stack.len());
        }

        if !self.exhausted {
            self.exhausted = true;
            debug!(
                bit_length = self.bit_length,
                target_one_count = self.target_one_count,
                statistics = %self.statistics,
                "sequence search exhausted"
            );
        }
        None
    }

    /// Why a window code may not extend a prefix with `seen` windows, if at all.
    fn window_rejection(&self, seen: WindowSet, code: u64) -> Option<Counter> {
        if seen.contains(code) {
            Some(Counter::DuplicateWindowPruned)
        } else if self.forbidden_windows.contains(code) {
            Some(Counter::UniformWindowPruned)
        } else {
            None
        }
    }

    /// Check the `w - 1` windows that wrap from the end of `value` to its start.
    ///
    /// `seen` holds the windows lying entirely inside `value`.
    fn wrap_windows_valid(&self, value: u64, mut seen: WindowSet) -> bool {
        let wrap_count = self.window_width - 1;
        if wrap_count == 0 {
            return true;
        }

        let mut wrapped = (value << wrap_count) | (value >> (self.bit_length - wrap_count));
        for _ in 0..wrap_count {
            let code = wrapped & self.window_mask;
            if self.window_rejection(seen, code).is_some() {
                return false;
            }
            seen.insert(code);
            wrapped >>= 1;
        }
        true
    }

    pub fn bit_length(&self) -> u32 {
        self.bit_length
    }

    pub fn target_one_count(&self) -> u32 {
        self.target_one_count
    }

    pub fn window_width(&self) -> u32 {
        self.window_width
    }

    pub fn window_mask(&self) -> u64 {
        self.window_mask
    }

    pub fn window_rule(&self) -> WindowRule {
        self.window_rule
    }

    /// Number of pending choice points.
    pub fn stack_depth(&self) -> usize {
        self.stack.len()
    }

    /// Largest number of pending choice points at any point since the last
    /// reset. Never more than `bit_length + 1`.
    pub fn peak_stack_depth(&self) -> usize {
        self.peak_depth
    }

    /// The pending choice points, bottom of the stack first.
    pub fn pending_choices(&self) -> &[ChoicePoint] {
        &self.stack
    }

    /// Counters accumulated since the last reset.
    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }
}

impl Iterator for SequenceEnumerator {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        self.next_sequence()
    }
}

impl FusedIterator for SequenceEnumerator {}

/// Builder for configuring a [`SequenceEnumerator`].
///
/// # Example
///
/// ```
/// use dbn_search::engine::EnumeratorBuilder;
/// use dbn_search::oracle::has_unique_subsequences;
///
/// let mut enumerator = EnumeratorBuilder::deck()
///     .one_count(26)
///     .forbid_uniform_windows()
///     .build()
///     .unwrap();
///
/// let first = enumerator.next_sequence().unwrap();
/// assert_eq!(first.count_ones(), 26);
/// assert!(has_unique_subsequences(first));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumeratorBuilder {
    bit_length: u32,
    target_one_count: u32,
    window_rule: WindowRule,
}

impl EnumeratorBuilder {
    /// Start configuring an enumerator for `bit_length`-bit sequences.
    ///
    /// Defaults to any number of one bits and allowing uniform windows.
    pub fn new(bit_length: u32) -> Self {
        Self {
            bit_length,
            target_one_count: 0,
            window_rule: WindowRule::AllowUniform,
        }
    }

    /// Start configuring an enumerator for 52-bit card-deck sequences.
    pub fn deck() -> Self {
        Self::new(crate::window::DECK_BIT_LENGTH)
    }

    /// Require exactly `count` one bits (0 accepts any number).
    pub fn one_count(mut self, count: u32) -> Self {
        self.target_one_count = count;
        self
    }

    pub fn window_rule(mut self, rule: WindowRule) -> Self {
        self.window_rule = rule;
        self
    }

    /// Reject sequences containing an all-zero or all-one window.
    pub fn forbid_uniform_windows(self) -> Self {
        self.window_rule(WindowRule::ForbidUniform)
    }

    /// Build the enumerator.
    ///
    /// # Errors
    ///
    /// See [`SequenceEnumerator::new`].
    pub fn build(self) -> Result<SequenceEnumerator, EnumeratorError> {
        SequenceEnumerator::new(self.bit_length, self.target_one_count, self.window_rule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(enumerator: &mut SequenceEnumerator) -> Vec<u64> {
        enumerator.by_ref().collect()
    }

    #[test]
    fn test_reset_seeds_two_roots() {
        let enumerator = SequenceEnumerator::new(8, 0, WindowRule::AllowUniform).unwrap();
        assert_eq!(
            enumerator.pending_choices(),
            &[ChoicePoint::root(1), ChoicePoint::root(0)]
        );
        assert_eq!(enumerator.window_width(), 3);
        assert_eq!(enumerator.window_mask(), 0b111);
    }

    #[test]
    fn test_bad_bit_lengths() {
        assert_eq!(
            SequenceEnumerator::new(0, 0, WindowRule::AllowUniform).unwrap_err(),
            EnumeratorError::BadArgument { bit_length: 0 }
        );
        assert_eq!(
            SequenceEnumerator::new(65, 0, WindowRule::AllowUniform).unwrap_err(),
            EnumeratorError::BadArgument { bit_length: 65 }
        );
        assert!(SequenceEnumerator::new(64, 0, WindowRule::AllowUniform).is_ok());
    }

    #[test]
    fn test_four_bits_in_order() {
        let mut enumerator = EnumeratorBuilder::new(4).build().unwrap();
        assert_eq!(drain(&mut enumerator), vec![3, 6, 9, 12]);
        assert_eq!(enumerator.stack_depth(), 0);
        assert_eq!(enumerator.statistics().get(Counter::SequencesFound), 4);
    }

    #[test]
    fn test_five_bits_in_order() {
        let mut enumerator = EnumeratorBuilder::new(5).build().unwrap();
        assert_eq!(
            drain(&mut enumerator),
            vec![3, 7, 6, 14, 12, 19, 17, 25, 24, 28]
        );
    }

    #[test]
    fn test_single_bit_never_yields_zero() {
        let mut enumerator = EnumeratorBuilder::new(1).build().unwrap();
        assert_eq!(drain(&mut enumerator), vec![1]);

        let mut strict = EnumeratorBuilder::new(1).forbid_uniform_windows().build().unwrap();
        assert!(drain(&mut strict).is_empty());
    }

    #[test]
    fn test_two_bits() {
        let mut enumerator = EnumeratorBuilder::new(2).build().unwrap();
        assert_eq!(drain(&mut enumerator), vec![1, 2]);
    }

    #[test]
    fn test_one_count_too_large_finds_nothing() {
        let mut enumerator = EnumeratorBuilder::new(6).one_count(7).build().unwrap();
        assert_eq!(enumerator.next_sequence(), None);
        assert!(enumerator.statistics().get(Counter::OneCountPruned) > 0);
    }

    #[test]
    fn test_exhausted_until_reset() {
        let mut enumerator = EnumeratorBuilder::new(4).build().unwrap();
        let first = drain(&mut enumerator);
        assert_eq!(enumerator.next_sequence(), None);
        assert_eq!(enumerator.next(), None);

        enumerator.reset();
        assert_eq!(enumerator.statistics().get(Counter::FramesPopped), 0);
        assert_eq!(drain(&mut enumerator), first);
    }

    #[test]
    fn test_stack_depth_bounded() {
        for (bit_length, one_count, rule) in [
            (16, 0, WindowRule::AllowUniform),
            (16, 8, WindowRule::AllowUniform),
            (16, 8, WindowRule::ForbidUniform),
            (12, 6, WindowRule::AllowUniform),
            (4, 0, WindowRule::AllowUniform),
            (1, 0, WindowRule::AllowUniform),
        ] {
            let mut enumerator = SequenceEnumerator::new(bit_length, one_count, rule).unwrap();
            assert_eq!(enumerator.peak_stack_depth(), 2);

            let mut sampled = enumerator.stack_depth();
            while enumerator.next_sequence().is_some() {
                sampled = sampled.max(enumerator.stack_depth());
            }
            let peak = enumerator.peak_stack_depth();
            assert!(peak >= sampled);
            assert!(
                peak <= bit_length as usize + 1,
                "n={} k={} peak {}",
                bit_length,
                one_count,
                peak
            );
        }
    }

    #[test]
    fn test_peak_depth_cleared_by_reset() {
        let mut enumerator = EnumeratorBuilder::new(10).one_count(5).build().unwrap();
        let _ = enumerator.by_ref().count();
        assert!(enumerator.peak_stack_depth() > 2);

        enumerator.reset();
        assert_eq!(enumerator.peak_stack_depth(), 2);
    }

    #[test]
    fn test_first_sequence_of_length_64_is_de_bruijn() {
        let mut enumerator = EnumeratorBuilder::new(64).build().unwrap();
        assert_eq!(enumerator.next_sequence(), Some(0x03F7_9D71_B4CB_0A89));
    }

    #[test]
    fn test_deck_sequences() {
        let mut enumerator = EnumeratorBuilder::deck().build().unwrap();
        assert_eq!(enumerator.next_sequence(), Some(0x3F79_D71B_4C95));
        assert_eq!(enumerator.next_sequence(), Some(0x3F79_D71B_4C8B));

        let mut balanced = EnumeratorBuilder::deck()
            .one_count(26)
            .forbid_uniform_windows()
            .build()
            .unwrap();
        assert_eq!(balanced.next_sequence(), Some(0x7DE7_5C6C_9851));
    }

    #[test]
    fn test_builder_matches_new() {
        let builder = EnumeratorBuilder::new(10)
            .one_count(5)
            .window_rule(WindowRule::ForbidUniform);
        let built = builder.build().unwrap();
        assert_eq!(built.bit_length(), 10);
        assert_eq!(built.target_one_count(), 5);
        assert_eq!(built.window_rule(), WindowRule::ForbidUniform);

        let mut a = built;
        let mut b = SequenceEnumerator::new(10, 5, WindowRule::ForbidUniform).unwrap();
        assert_eq!(drain(&mut a), drain(&mut b));
    }
}
