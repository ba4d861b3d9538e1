//! Syndrome-based coset leader search.
//!
//! Every error pattern of weight three or less takes one of the
//! following shapes, and each shape is recognised from the syndrome alone:
//!
//! 1. all errors in the parity half
//! 2. one data error plus at most two parity errors
//! 3. all errors in the data half
//! 4. one parity error plus at most two data errors
//!
//! Shapes 3 and 4 are found by mapping the syndrome through the alternate
//! matrix, which swaps the roles of the two halves.

use super::matrix::{alternate_transform, weight12, ALTERNATE_MATRIX, FORWARD_MATRIX};
use super::{syndrome, CODEWORD_MASK, DATA_BITS, DATA_MASK};
use std::fmt;

/// Bitmask of flipped bits within a 24-bit codeword.
///
/// Bits 0-11 mark data-bit errors, bits 12-23 mark parity-bit errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ErrorPattern(u32);

impl ErrorPattern {
    /// Wraps a raw 24-bit mask. Bits above 23 are dropped.
    pub fn new(bits: u32) -> Self {
        ErrorPattern(bits & CODEWORD_MASK)
    }

    /// Builds a pattern from its data and parity halves.
    pub fn from_parts(data: u16, parity: u16) -> Self {
        ErrorPattern(u32::from(data & DATA_MASK) | (u32::from(parity & DATA_MASK) << DATA_BITS))
    }

    /// The raw 24-bit mask.
    pub fn bits(&self) -> u32 {
        self.0
    }

    /// Errors in the data field.
    pub fn data_errors(&self) -> u16 {
        (self.0 & u32::from(DATA_MASK)) as u16
    }

    /// Errors in the parity field.
    pub fn parity_errors(&self) -> u16 {
        ((self.0 >> DATA_BITS) & u32::from(DATA_MASK)) as u16
    }

    /// Number of flipped bits.
    pub fn weight(&self) -> u32 {
        self.0.count_ones()
    }

    /// True when no bit is flagged.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for ErrorPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#08X}", self.0)
    }
}

/// Finds the error pattern of weight at most three that explains `word`.
///
/// Returns `None` when no such pattern exists, which means the word carries
/// four or more bit errors. Bits above position 23 are ignored.
pub fn locate_errors(word: u32) -> Option<ErrorPattern> {
    let syndrome = syndrome(word);

    if weight12(syndrome) <= 3 {
        log::trace!("syndrome {:#05X}: parity-only errors", syndrome);
        return Some(ErrorPattern::from_parts(0, syndrome));
    }

    for (i, &row) in FORWARD_MATRIX.rows().iter().enumerate() {
        let candidate = syndrome ^ row;
        if weight12(candidate) <= 2 {
            log::trace!(
                "syndrome {:#05X}: data bit {} plus parity {:#05X}",
                syndrome,
                i,
                candidate
            );
            return Some(ErrorPattern::from_parts(1 << i, candidate));
        }
    }

    let inv_syndrome = alternate_transform(syndrome);
    if weight12(inv_syndrome) <= 3 {
        log::trace!("syndrome {:#05X}: data-only errors", syndrome);
        return Some(ErrorPattern::from_parts(inv_syndrome, 0));
    }

    for (i, &row) in ALTERNATE_MATRIX.rows().iter().enumerate() {
        let candidate = inv_syndrome ^ row;
        if weight12(candidate) <= 2 {
            log::trace!(
                "syndrome {:#05X}: parity bit {} plus data {:#05X}",
                syndrome,
                i,
                candidate
            );
            return Some(ErrorPattern::from_parts(candidate, 1 << i));
        }
    }

    None
}
