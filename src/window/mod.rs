// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Window arithmetic shared by the oracle and the enumerator.
//!
//! - constants: width and mask computations
//! - WindowSet: bitset of seen window codes
//! - WindowRule: whether all-zero / all-one windows are allowed

pub mod constants;
pub mod rule;
pub mod window_set;

pub use constants::*;
pub use rule::WindowRule;
pub use window_set::WindowSet;
