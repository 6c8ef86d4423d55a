// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Restartable lists of enumerated sequences.
//!
//! Search clients combine several independently generated sequence families
//! in nested loops, restarting the inner families many times. Re-running the
//! enumerator for every restart is wasteful, so the values are collected once
//! into a [`SequenceList`], which is then read with a rewindable cursor.
//!
//! Share one list between several readers with `Arc<SequenceList>` and
//! [`SequenceList::reader`], or clone it.
//!
//! # Example
//!
//! ```
//! use dbn_search::cursor::SequenceList;
//! use dbn_search::engine::EnumeratorBuilder;
//!
//! let mut enumerator = EnumeratorBuilder::new(4).build().unwrap();
//! let mut list = SequenceList::from_enumerator(&mut enumerator);
//!
//! assert_eq!(list.len(), 4);
//! assert_eq!(list.next_value(), Some(3));
//! list.reset();
//! assert_eq!(list.by_ref().collect::<Vec<_>>(), vec![3, 6, 9, 12]);
//! assert_eq!(list.next_value(), None);
//! ```

use tracing::debug;

use crate::engine::SequenceEnumerator;

/// An ordered list of sequence values with a read cursor.
///
/// Reading ends at the end of the data; no value is reserved as a
/// terminator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SequenceList {
    values: Vec<u64>,
    position: usize,
}

impl SequenceList {
    /// Collect every sequence an enumerator produces, in generation order.
    ///
    /// The enumerator is reset first, and is left exhausted.
    pub fn from_enumerator(enumerator: &mut SequenceEnumerator) -> Self {
        enumerator.reset();
        let values: Vec<u64> = enumerator.by_ref().collect();
        debug!(
            bit_length = enumerator.bit_length(),
            target_one_count = enumerator.target_one_count(),
            count = values.len(),
            "collected sequence list"
        );
        Self::from(values)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.values
    }

    /// Index of the next value to be read.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Move the cursor back to the first value.
    pub fn reset(&mut self) {
        self.position = 0;
    }

    /// Read the value under the cursor and advance.
    pub fn next_value(&mut self) -> Option<u64> {
        let value = self.values.get(self.position).copied()?;
        self.position += 1;
        Some(value)
    }

    /// A separate cursor over the same values, starting at the beginning.
    pub fn reader(&self) -> SequenceReader<'_> {
        SequenceReader {
            values: &self.values,
            position: 0,
        }
    }
}

impl From<Vec<u64>> for SequenceList {
    fn from(values: Vec<u64>) -> Self {
        Self {
            values,
            position: 0,
        }
    }
}

impl Iterator for SequenceList {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        self.next_value()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.values.len() - self.position;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SequenceList {}

/// A borrowed, restartable cursor over a [`SequenceList`].
#[derive(Debug, Clone)]
pub struct SequenceReader<'a> {
    values: &'a [u64],
    position: usize,
}

impl SequenceReader<'_> {
    pub fn reset(&mut self) {
        self.position = 0;
    }

    pub fn position(&self) -> usize {
        self.position
    }
}

impl Iterator for SequenceReader<'_> {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let value = self.values.get(self.position).copied()?;
        self.position += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.values.len() - self.position;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SequenceReader<'_> {}
