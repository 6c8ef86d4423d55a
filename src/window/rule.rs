// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Rule for windows whose bits are all the same.

use strum_macros::{Display, EnumString};

/// Whether a sequence may contain a window that is all zeros or all ones.
///
/// `ForbidUniform` produces the "short" sequences used when a run of
/// identical bits would be ambiguous to a reader of the deck.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum WindowRule {
    /// Any window code may occur once.
    #[default]
    AllowUniform,

    /// The codes `0` and `2^w - 1` may not occur at all.
    ForbidUniform,
}

impl WindowRule {
    /// Pick a rule from a "forbid uniform windows" flag.
    pub fn from_forbid_flag(forbid_uniform: bool) -> Self {
        if forbid_uniform {
            WindowRule::ForbidUniform
        } else {
            WindowRule::AllowUniform
        }
    }

    pub fn forbids_uniform(self) -> bool {
        self == WindowRule::ForbidUniform
    }
}
