//! Error type shared by construction, arithmetic and the permutation tests.

use std::fmt;

use thiserror::Error;

/// Arithmetic operation that rejected its operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Number × number or scalar × number.
    Multiplication,
    /// Number ÷ number or scalar ÷ number.
    Division,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Multiplication => f.write_str("multiplication"),
            Operation::Division => f.write_str("division"),
        }
    }
}

/// Errors reported by this crate.
///
/// Variants fall into three groups:
/// - malformed numbers: [`BoundaryCount`](Self::BoundaryCount),
///   [`MalformedBoundaries`](Self::MalformedBoundaries),
///   [`InvalidShape`](Self::InvalidShape)
/// - unsupported operand combinations:
///   [`UnsupportedOperands`](Self::UnsupportedOperands)
/// - usage-contract violations of the permutation tests: the remaining variants
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FuzzyError {
    #[error("trapezoidal number requires exactly 4 boundaries, got {0}")]
    BoundaryCount(usize),

    #[error("boundaries must be finite and satisfy a1 <= a2 <= a3 <= a4, got {0:?}")]
    MalformedBoundaries([f64; 4]),

    #[error("table {table}, row {row}: {source}")]
    InvalidShape {
        table: usize,
        row: usize,
        #[source]
        source: Box<FuzzyError>,
    },

    #[error("unsupported operands for {operation}: {reason}")]
    UnsupportedOperands { operation: Operation, reason: String },

    #[error("permutation test requires exactly 2 samples, got {0}")]
    SampleArity(usize),

    #[error("paired samples must have equal length, got {left} and {right}")]
    LengthMismatch { left: usize, right: usize },

    #[error("sample {sample} is empty")]
    EmptySample { sample: usize },

    #[error("sample {sample} has a non-finite value at index {index}")]
    NonFiniteValue { sample: usize, index: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl FuzzyError {
    /// True for errors raised while building a number from raw boundaries.
    pub fn is_malformed_number(&self) -> bool {
        matches!(
            self,
            FuzzyError::BoundaryCount(_)
                | FuzzyError::MalformedBoundaries(_)
                | FuzzyError::InvalidShape { .. }
        )
    }

    /// True for violations of the permutation tests' calling contract.
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            FuzzyError::SampleArity(_)
                | FuzzyError::LengthMismatch { .. }
                | FuzzyError::EmptySample { .. }
                | FuzzyError::NonFiniteValue { .. }
                | FuzzyError::InvalidConfig(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_message_lists_boundaries() {
        let err = FuzzyError::MalformedBoundaries([4.0, 3.0, 2.0, 1.0]);
        assert_eq!(
            err.to_string(),
            "boundaries must be finite and satisfy a1 <= a2 <= a3 <= a4, got [4.0, 3.0, 2.0, 1.0]"
        );
        assert!(err.is_malformed_number());
        assert!(!err.is_usage_error());
    }

    #[test]
    fn test_invalid_shape_wraps_source() {
        let err = FuzzyError::InvalidShape {
            table: 1,
            row: 3,
            source: Box::new(FuzzyError::BoundaryCount(3)),
        };
        assert_eq!(
            err.to_string(),
            "table 1, row 3: trapezoidal number requires exactly 4 boundaries, got 3"
        );
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(
            source.to_string(),
            "trapezoidal number requires exactly 4 boundaries, got 3"
        );
    }

    #[test]
    fn test_usage_errors() {
        assert!(FuzzyError::SampleArity(3).is_usage_error());
        assert!(FuzzyError::LengthMismatch { left: 2, right: 3 }.is_usage_error());
        let unsupported = FuzzyError::UnsupportedOperands {
            operation: Operation::Division,
            reason: "divisor must be strictly positive".into(),
        };
        assert!(!unsupported.is_usage_error());
        assert!(!unsupported.is_malformed_number());
        assert_eq!(
            unsupported.to_string(),
            "unsupported operands for division: divisor must be strictly positive"
        );
    }
}
