// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Statistics are owned by each enumerator and record how the search space
//! was pruned. They are cleared by `reset`.

use std::fmt;
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter};

#[derive(EnumCountMacro, EnumIter, Display, Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counter {
    /// Choice points taken off the stack.
    FramesPopped,
    /// Branches with too many one bits, or too few at full length.
    OneCountPruned,
    /// Branches whose newest window had already occurred.
    DuplicateWindowPruned,
    /// Branches whose newest window was all zeros or all ones.
    UniformWindowPruned,
    /// Full-length candidates rejected at the final check.
    WrapWindowRejected,
    /// Sequences returned to the caller.
    SequencesFound,
}

const COUNT: usize = Counter::COUNT;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment(&mut self, counter: Counter) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counter) -> u64 {
        self.stats[counter as usize]
    }

    /// Total number of branches discarded for any reason.
    pub fn total_pruned(&self) -> u64 {
        self.get(Counter::OneCountPruned)
            + self.get(Counter::DuplicateWindowPruned)
            + self.get(Counter::UniformWindowPruned)
            + self.get(Counter::WrapWindowRejected)
    }

    /// Set every counter back to zero.
    pub fn reset(&mut self) {
        self.stats = [0; COUNT];
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, counter) in Counter::iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", counter, self.get(counter))?;
        }
        Ok(())
    }
}
