//! Error type shared by every fallible operation in the crate.

use thiserror::Error;

/// Failures reported by construction and projection.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A constructor argument is outside its admissible range (e.g. radius ≤ 0).
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// Output and input buffers have different lengths.
    #[error("dimension mismatch: expected {expected} elements, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
}

/// Result alias with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_values() {
        let e = Error::DimensionMismatch {
            expected: 3,
            found: 2,
        };
        assert_eq!(
            e.to_string(),
            "dimension mismatch: expected 3 elements, found 2"
        );

        let e = Error::InvalidParameter {
            name: "r",
            reason: "must be positive".into(),
        };
        assert_eq!(e.to_string(), "invalid parameter `r`: must be positive");
    }
}
