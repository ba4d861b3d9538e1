//! Generator matrices and GF(2) helpers for the extended Golay code.
//!
//! Both matrices are stored row-major, one 12-bit row per data bit. Multiplying
//! a vector by a matrix is the XOR of the rows selected by the vector's set
//! bits. The alternate matrix is the inverse of the forward one, so the second
//! decoding phase can map a syndrome back into data-bit space.

use super::DATA_MASK;

/// Number of rows (and row width in bits) of each generator matrix.
const ROWS: usize = 12;

/// A fixed 12x12 bit matrix over GF(2).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorMatrix {
    rows: [u16; ROWS],
}

/// Matrix used to derive parity from data and to compute syndromes.
pub const FORWARD_MATRIX: GeneratorMatrix = GeneratorMatrix {
    rows: [
        0xC75, 0x49F, 0xD4B, 0x6E3, 0x9B3, 0xB66, 0xECC, 0x1ED, 0x3DA, 0x7B4, 0xB1D, 0xE3A,
    ],
};

/// Matrix used by the decoder's second search phase.
pub const ALTERNATE_MATRIX: GeneratorMatrix = GeneratorMatrix {
    rows: [
        0x49F, 0x93E, 0x6E3, 0xDC6, 0xF13, 0xAB9, 0x1ED, 0x3DA, 0x7B4, 0xF68, 0xA4F, 0xC75,
    ],
};

impl GeneratorMatrix {
    /// Returns row `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 12`.
    pub const fn row(&self, index: usize) -> u16 {
        self.rows[index]
    }

    /// All twelve rows, index 0 first.
    pub fn rows(&self) -> &[u16; ROWS] {
        &self.rows
    }

    /// Multiplies `vector` (low 12 bits) by this matrix.
    pub fn transform(&self, vector: u16) -> u16 {
        self.rows
            .iter()
            .enumerate()
            .filter(|&(i, _)| vector & (1 << i) != 0)
            .fold(0, |acc, (_, &row)| acc ^ row)
    }
}

/// Hamming weight of the low 12 bits of `vector`.
#[inline]
pub fn weight12(vector: u16) -> u32 {
    (vector & DATA_MASK).count_ones()
}

/// Parity of a data word, or the parity contribution of a received data field.
#[inline]
pub fn forward_transform(vector: u16) -> u16 {
    FORWARD_MATRIX.transform(vector)
}

/// Maps a syndrome into data-bit coordinates.
#[inline]
pub fn alternate_transform(vector: u16) -> u16 {
    ALTERNATE_MATRIX.transform(vector)
}
