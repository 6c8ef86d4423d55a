// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Enumeration of binary de Bruijn-style sequences.
//!
//! A sequence of `n` bits (1 ≤ n ≤ 64) qualifies when every one of its `n`
//! cyclic windows of width `w = ceil(log2(n))` is different. Optionally the
//! sequence must contain exactly `k` one bits, and optionally no window may
//! be all zeros or all ones. 52-bit sequences of this kind encode the
//! identity of playing cards by their position in a deck.
//!
//! # Architecture
//!
//! ## Window arithmetic ([`window`])
//!
//! Width and mask computations, and [`WindowSet`], a 64-bit set of window
//! codes that each search frame copies rather than shares.
//!
//! ## Oracle ([`oracle`])
//!
//! Pure checks that a finished sequence has unique cyclic windows, in a fixed
//! 52-bit form and a general form.
//!
//! ## Enumerator ([`engine`])
//!
//! A resumable depth-first search with an explicit stack of choice points.
//! It prunes on the one-bit count and on each newly completed window, and
//! checks the wrap-around windows only for full-length candidates.
//!
//! ## Clients
//!
//! [`bits`] reads and writes sequences as binary text; [`cursor`] stores
//! enumerated sequences in restartable lists.
//!
//! # Example
//!
//! ```
//! use dbn_search::{has_unique_subsequences, EnumeratorBuilder};
//!
//! let mut enumerator = EnumeratorBuilder::deck().one_count(26).build().unwrap();
//! for sequence in enumerator.by_ref().take(3) {
//!     assert!(has_unique_subsequences(sequence));
//!     assert_eq!(sequence.count_ones(), 26);
//! }
//! ```

pub mod bits;
pub mod cursor;
pub mod engine;
pub mod error;
pub mod oracle;
pub mod window;

// Re-export commonly used types
pub use bits::{parse_bits, BitString};
pub use cursor::SequenceList;
pub use engine::{EnumeratorBuilder, SequenceEnumerator, Statistics};
pub use error::{EnumeratorError, ParseBitsError};
pub use oracle::{has_unique_subsequences, has_unique_windows};
pub use window::{WindowRule, WindowSet};
