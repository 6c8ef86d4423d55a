// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use std::collections::BTreeSet;

use dbn_search::oracle::{has_uniform_window, has_unique_windows};
use dbn_search::window::sequence_mask;
use dbn_search::{SequenceEnumerator, WindowRule};
use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber honouring `RUST_LOG`, once per test binary.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Every non-zero `bit_length`-bit value with unique cyclic windows,
/// found by checking each value in turn.
pub fn brute_force(bit_length: u32, rule: WindowRule) -> BTreeSet<u64> {
    (1..=sequence_mask(bit_length))
        .filter(|&value| has_unique_windows(value, bit_length))
        .filter(|&value| !rule.forbids_uniform() || !has_uniform_window(value, bit_length))
        .collect()
}

/// Restrict a brute-force set to the values with `one_count` one bits (0 keeps all).
pub fn with_one_count(values: &BTreeSet<u64>, one_count: u32) -> BTreeSet<u64> {
    values
        .iter()
        .copied()
        .filter(|value| one_count == 0 || value.count_ones() == one_count)
        .collect()
}

/// Drain an enumerator from its current position.
pub fn drain(enumerator: &mut SequenceEnumerator) -> Vec<u64> {
    enumerator.by_ref().collect()
}
