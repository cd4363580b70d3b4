//! Sign classification of trapezoidal boundaries.
//!
//! Number × number multiplication has no single closed form across sign
//! regimes. Each operand is therefore tagged once with a [`SignClass`],
//! and the pair of tags selects the boundary formula.
//!
//! # Categories
//!
//! | Class | Condition |
//! |---|---|
//! | [`SignClass::Positive`] | a₁ ≥ 0 |
//! | [`SignClass::Negative`] | a₄ ≤ 0 (and a₁ < 0) |
//! | [`SignClass::NearZero`] | one of the three [`NearZeroPattern`]s |
//! | [`SignClass::Arbitrary`] | a₁ < 0 < a₄, not near-zero |
//!
//! The predicates below are not mutually exclusive (every near-zero number
//! is also arbitrary, and `(0, 0, 0, 0)` is both positive and negative);
//! [`SignClass::of`] resolves them in the order of the table.

use std::fmt;

/// Returns true if a₁ ≥ 0.
pub fn is_positive(b: &[f64; 4]) -> bool {
    b[0] >= 0.0
}

/// Returns true if a₄ ≤ 0.
pub fn is_negative(b: &[f64; 4]) -> bool {
    b[3] <= 0.0
}

/// Returns true if a₁ < 0 < a₄.
pub fn is_arbitrary(b: &[f64; 4]) -> bool {
    b[0] < 0.0 && 0.0 < b[3]
}

/// Returns true if the boundaries match any [`NearZeroPattern`].
pub fn is_near_zero(b: &[f64; 4]) -> bool {
    NearZeroPattern::of(b).is_some()
}

/// Sign of a number that does not straddle zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Positive,
    Negative,
}

/// The three strict zero-straddling shapes of a near-zero number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NearZeroPattern {
    /// a₁ < a₂ ≤ a₃ < 0 < a₄: core entirely below zero.
    NegativeCore,
    /// a₁ < a₂ < 0 < a₃ < a₄: core contains zero.
    StraddlingCore,
    /// a₁ < 0 ≤ a₂ < a₃ < a₄: core at or above zero.
    PositiveCore,
}

impl NearZeroPattern {
    /// Matches the boundaries against the three patterns.
    pub fn of(b: &[f64; 4]) -> Option<Self> {
        let [a1, a2, a3, a4] = *b;
        if a1 < a2 && a2 <= a3 && a3 < 0.0 && 0.0 < a4 {
            Some(NearZeroPattern::NegativeCore)
        } else if a1 < a2 && a2 < 0.0 && 0.0 < a3 && a3 < a4 {
            Some(NearZeroPattern::StraddlingCore)
        } else if a1 < 0.0 && 0.0 <= a2 && a2 < a3 && a3 < a4 {
            Some(NearZeroPattern::PositiveCore)
        } else {
            None
        }
    }
}

/// Dispatch tag computed once per multiplication operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignClass {
    Positive,
    Negative,
    NearZero(NearZeroPattern),
    Arbitrary,
}

impl SignClass {
    /// Classifies ordered boundaries.
    ///
    /// # Examples
    /// ```
    /// use u_fuzzy::classify::{NearZeroPattern, SignClass};
    /// assert_eq!(SignClass::of(&[1.0, 2.0, 3.0, 4.0]), SignClass::Positive);
    /// assert_eq!(SignClass::of(&[-3.0, -2.0, -1.0, 0.0]), SignClass::Negative);
    /// assert_eq!(
    ///     SignClass::of(&[-2.0, 2.0, 3.0, 4.0]),
    ///     SignClass::NearZero(NearZeroPattern::PositiveCore)
    /// );
    /// assert_eq!(SignClass::of(&[-1.0, -1.0, 2.0, 3.0]), SignClass::Arbitrary);
    /// ```
    pub fn of(b: &[f64; 4]) -> Self {
        if is_positive(b) {
            SignClass::Positive
        } else if is_negative(b) {
            SignClass::Negative
        } else if let Some(pattern) = NearZeroPattern::of(b) {
            SignClass::NearZero(pattern)
        } else {
            SignClass::Arbitrary
        }
    }

    /// The sign of a positive or negative number, `None` otherwise.
    pub fn sign(self) -> Option<Sign> {
        match self {
            SignClass::Positive => Some(Sign::Positive),
            SignClass::Negative => Some(Sign::Negative),
            SignClass::NearZero(_) | SignClass::Arbitrary => None,
        }
    }
}

impl fmt::Display for SignClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignClass::Positive => f.write_str("positive"),
            SignClass::Negative => f.write_str("negative"),
            SignClass::NearZero(NearZeroPattern::NegativeCore) => {
                f.write_str("near-zero (negative core)")
            }
            SignClass::NearZero(NearZeroPattern::StraddlingCore) => {
                f.write_str("near-zero (straddling core)")
            }
            SignClass::NearZero(NearZeroPattern::PositiveCore) => {
                f.write_str("near-zero (positive core)")
            }
            SignClass::Arbitrary => f.write_str("arbitrary"),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
