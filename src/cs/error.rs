//! Error type shared by the coding modules.

use thiserror::Error;

/// Errors produced while encoding or decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A parameter or configuration value was rejected.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A value had significant bits beyond the width the code accepts.
    #[error("input too large: {length} bits exceeds the maximum of {max_length} bits")]
    InputTooLarge { length: usize, max_length: usize },

    /// The received word carries more bit errors than can be corrected.
    #[error("uncorrectable word: 4 or more bit errors detected")]
    Uncorrectable,
}

impl Error {
    /// Shorthand for [`Error::InvalidInput`].
    pub fn invalid(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Error::Uncorrectable.to_string(),
            "uncorrectable word: 4 or more bit errors detected"
        );
        assert_eq!(
            Error::InputTooLarge {
                length: 13,
                max_length: 12
            }
            .to_string(),
            "input too large: 13 bits exceeds the maximum of 12 bits"
        );
        assert_eq!(
            Error::invalid("bad limit").to_string(),
            "invalid input: bad limit"
        );
    }
}
