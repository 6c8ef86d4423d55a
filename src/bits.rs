// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Binary text form of sequences.
//!
//! Sequences are written most significant (earliest) bit first, as strings
//! of '0' and '1'. Spaces and tabs may be used to group digits.
//!
//! # Example
//!
//! ```
//! use dbn_search::bits::{parse_bits, BitString};
//!
//! assert_eq!(parse_bits("0011 0101").unwrap(), 0b0011_0101);
//!
//! let text = BitString::new(0b0011_0101, 8);
//! assert_eq!(text.to_string(), "00110101");
//! assert_eq!(text.rotated(2).to_string(), "11010100");
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::ParseBitsError;
use crate::window::MAX_BIT_LENGTH;

/// Parse a binary text sequence into a value.
///
/// Reading stops at the end of the text or at the first newline.
///
/// # Errors
///
/// - [`ParseBitsError::InvalidDigit`] for any character other than '0',
///   '1', space, tab or carriage return
/// - [`ParseBitsError::TooLong`] for more than 64 digits
pub fn parse_bits(text: &str) -> Result<u64, ParseBitsError> {
    parse_bit_string(text).map(|bits| bits.value)
}

/// Parse a binary text sequence, keeping its length.
///
/// Leading zeros count towards the length, so `"0011"` is a 4-bit sequence.
pub fn parse_bit_string(text: &str) -> Result<BitString, ParseBitsError> {
    let mut value = 0u64;
    let mut digits = 0usize;

    for (position, found) in text.chars().enumerate() {
        let bit = match found {
            ' ' | '\t' | '\r' => continue,
            '\n' => break,
            '0' => 0,
            '1' => 1,
            _ => return Err(ParseBitsError::InvalidDigit { position, found }),
        };
        value = (value << 1) | bit;
        digits += 1;
    }

    if digits > MAX_BIT_LENGTH as usize {
        return Err(ParseBitsError::TooLong { digits });
    }

    Ok(BitString {
        value,
        bit_length: digits as u32,
        first_bit: 0,
    })
}

/// A sequence value displayed as binary text.
///
/// `first_bit` selects where the cyclic sequence starts: index 0 is the
/// earliest (most significant) bit, and the digits before `first_bit` are
/// printed last. The length is at most 64 and `first_bit` is always below
/// the length (or 0 for an empty sequence).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitString {
    value: u64,
    bit_length: u32,
    first_bit: u32,
}

impl BitString {
    /// The low `bit_length` bits of `value`, starting at the earliest bit.
    ///
    /// # Panics
    ///
    /// Panics if `bit_length` is greater than 64.
    pub fn new(value: u64, bit_length: u32) -> Self {
        assert!(
            bit_length <= MAX_BIT_LENGTH,
            "bit length out of range: {}",
            bit_length
        );
        Self {
            value,
            bit_length,
            first_bit: 0,
        }
    }

    /// Start the text at logical bit `first_bit` (taken modulo the length).
    #[must_use]
    pub fn rotated(self, first_bit: u32) -> Self {
        let first_bit = if self.bit_length == 0 {
            0
        } else {
            first_bit % self.bit_length
        };
        Self { first_bit, ..self }
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn bit_length(&self) -> u32 {
        self.bit_length
    }

    pub fn first_bit(&self) -> u32 {
        self.first_bit
    }

    /// The digit at logical index `index` (0 is the most significant bit).
    fn digit(&self, index: u32) -> char {
        let shift = self.bit_length - 1 - index;
        if (self.value >> shift) & 1 == 0 {
            '0'
        } else {
            '1'
        }
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let indices = (self.first_bit..self.bit_length).chain(0..self.first_bit);
        let text: String = indices.map(|index| self.digit(index)).collect();
        f.pad(&text)
    }
}

impl FromStr for BitString {
    type Err = ParseBitsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_bit_string(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        assert_eq!(parse_bits("0"), Ok(0));
        assert_eq!(parse_bits("1"), Ok(1));
        assert_eq!(parse_bits("0110"), Ok(6));
        assert_eq!(parse_bits(""), Ok(0));
    }

    #[test]
    fn test_parse_skips_spacing_and_stops_at_newline() {
        assert_eq!(parse_bits("10 01\t11"), Ok(0b100111));
        assert_eq!(parse_bits("11\n00"), Ok(0b11));
        assert_eq!(parse_bits("101\r\n"), Ok(0b101));
    }

    #[test]
    fn test_parse_keeps_length() {
        let bits: BitString = "0011".parse().unwrap();
        assert_eq!(bits, BitString::new(3, 4));
    }

    #[test]
    fn test_parse_invalid_digit() {
        assert_eq!(
            parse_bits("01x1"),
            Err(ParseBitsError::InvalidDigit {
                position: 2,
                found: 'x'
            })
        );
    }

    #[test]
    fn test_parse_too_long() {
        let text = "1".repeat(65);
        assert_eq!(parse_bits(&text), Err(ParseBitsError::TooLong { digits: 65 }));
        assert_eq!(parse_bits(&text[1..]), Ok(u64::MAX));
    }

    #[test]
    fn test_display() {
        assert_eq!(BitString::new(0b0110, 4).to_string(), "0110");
        assert_eq!(BitString::new(1, 6).to_string(), "000001");
        assert_eq!(BitString::new(0, 0).to_string(), "");
        assert_eq!(format!("{:>6}", BitString::new(0b11, 2)), "    11");
    }

    #[test]
    fn test_empty_and_full_length() {
        let empty = BitString::new(u64::MAX, 0).rotated(3);
        assert_eq!(empty.first_bit(), 0);
        assert_eq!(empty.to_string(), "");

        let full = BitString::new(1, 64);
        assert_eq!(full.to_string(), format!("{}1", "0".repeat(63)));
        assert_eq!(full.rotated(64).first_bit(), 0);
        assert_eq!(full.rotated(63).to_string(), format!("1{}", "0".repeat(63)));
    }

    #[test]
    #[should_panic(expected = "bit length out of range")]
    fn test_too_long_rejected() {
        let _ = BitString::new(1, 65);
    }

    #[test]
    fn test_accessors() {
        let bits = BitString::new(0b101, 3).rotated(4);
        assert_eq!(bits.value(), 0b101);
        assert_eq!(bits.bit_length(), 3);
        assert_eq!(bits.first_bit(), 1);
    }

    #[test]
    fn test_display_rotated() {
        let bits = BitString::new(0b1000_0001, 8);
        assert_eq!(bits.rotated(1).to_string(), "00000011");
        assert_eq!(bits.rotated(7).to_string(), "11000000");
        assert_eq!(bits.rotated(8).to_string(), "10000001");
    }

    #[test]
    fn test_round_trip_deck_sequence() {
        let value = 0x3F79_D71B_4C95;
        let text = BitString::new(value, 52).to_string();
        assert_eq!(text.len(), 52);
        assert_eq!(parse_bits(&text), Ok(value));
    }
}
