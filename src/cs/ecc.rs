//! Error correction code implementations.
//!
//! Error correction codes are used to detect and correct errors in data
//! transmission and storage, making digital communications more reliable.
//!
//! Currently implemented:
//! - Extended binary Golay (24,12,8) code
//!
//! # Examples
//!
//! ```rust
//! use golay24::cs::ecc::golay::{golay_decode, golay_encode};
//!
//! let codeword = golay_encode(0x5A5);
//! assert_eq!(golay_decode(codeword ^ 0b110), Ok(0x5A5));
//! ```

use crate::cs::error::Error;

/// Result type for error correction operations
pub type Result<T> = std::result::Result<T, Error>;

/// Extended binary Golay (24,12,8) code
pub mod golay;
pub use golay::{
    golay_decode, golay_encode, is_codeword, locate_errors, syndrome, Correction, ErrorPattern,
    GolayCode, GolayCodeBuilder, InputPolicy,
};
