//! Error taxonomy for the solver.
//!
//! Every failure is either an input problem the caller must fix
//! ([`ErrorKind::InvalidInput`]) or an unexpected fault inside the
//! computation ([`ErrorKind::Internal`]). Neither is retryable: the solver is
//! deterministic, so the same input always fails the same way.

use serde_json::{json, Value};

/// Broad classification used by hosting transports to pick a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request was malformed; report as a client error.
    InvalidInput,
    /// The computation failed on a valid request; report as a server error.
    Internal,
}

/// Errors raised while validating dimensions or solving a chain.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SolveError {
    /// The request body has no `dimensions` field.
    #[error("Invalid input. 'dimensions' list is required.")]
    MissingDimensions,
    /// `dimensions` is not a flat list of values.
    #[error("Dimensions must be a list of at least 2 integers.")]
    NotASequence,
    /// Fewer than two entries means there is no matrix at all.
    #[error("Dimensions must be a list of at least 2 integers, got {len}.")]
    TooFewDimensions { len: usize },
    /// An entry is zero, negative, fractional or not a number.
    #[error("Dimension at index {index} must be a positive integer, got {value}.")]
    InvalidDimension { index: usize, value: String },
    /// A sub-chain cost does not fit in 64 bits.
    #[error("Cost of multiplying A{i}..A{j} overflows 64-bit arithmetic.")]
    CostOverflow { i: usize, j: usize },
}

impl SolveError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SolveError::CostOverflow { .. } => ErrorKind::Internal,
            _ => ErrorKind::InvalidInput,
        }
    }

    /// HTTP-equivalent status for this error: 400 or 500.
    pub fn status_code(&self) -> u16 {
        match self.kind() {
            ErrorKind::InvalidInput => 400,
            ErrorKind::Internal => 500,
        }
    }

    /// Error payload in the `{"error": <message>}` shape.
    pub fn to_json(&self) -> Value {
        json!({ "error": self.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_are_client_errors() {
        let errs = [
            SolveError::MissingDimensions,
            SolveError::NotASequence,
            SolveError::TooFewDimensions { len: 1 },
            SolveError::InvalidDimension {
                index: 0,
                value: "-3".into(),
            },
        ];
        for e in errs {
            assert_eq!(e.kind(), ErrorKind::InvalidInput);
            assert_eq!(e.status_code(), 400);
        }
    }

    #[test]
    fn overflow_is_internal() {
        let e = SolveError::CostOverflow { i: 1, j: 3 };
        assert_eq!(e.kind(), ErrorKind::Internal);
        assert_eq!(e.status_code(), 500);
    }

    #[test]
    fn json_payload_carries_message() {
        let e = SolveError::TooFewDimensions { len: 1 };
        assert_eq!(
            e.to_json(),
            json!({ "error": "Dimensions must be a list of at least 2 integers, got 1." })
        );
    }
}
