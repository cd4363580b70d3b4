//! Trapezoidal fuzzy numbers.
//!
//! A trapezoidal number is fixed by four ordered boundaries
//! a₁ ≤ a₂ ≤ a₃ ≤ a₄: membership rises linearly on [a₁, a₂], is 1 on the
//! core [a₂, a₃] and falls linearly on [a₃, a₄]. A triangular number is the
//! case a₂ = a₃, a crisp number the case where all four coincide.
//!
//! # Operators
//!
//! | Expression | Output |
//! |---|---|
//! | `a + b`, `a - b`, `-a` | `TrapezoidalNumber` |
//! | `a * b`, `a * k`, `k * a` | `Result<TrapezoidalNumber, FuzzyError>` |
//! | `a / b`, `k / a` | `Result<TrapezoidalNumber, FuzzyError>` |
//!
//! Subtraction is not the inverse of addition: `a - a` has the combined
//! spread of both operands and is not the crisp zero.
//!
//! # Examples
//! ```
//! use u_fuzzy::{FuzzyNumber, TrapezoidalNumber};
//!
//! let a = TrapezoidalNumber::new(1.0, 2.0, 3.0, 4.0).unwrap();
//! let b = TrapezoidalNumber::new(2.0, 3.0, 4.0, 5.0).unwrap();
//!
//! assert_eq!(a.core(), (2.0, 3.0));
//! assert!((a.ambiguity() - 5.0 / 6.0).abs() < 1e-12);
//! assert_eq!((a * b).unwrap().boundaries(), [2.0, 6.0, 12.0, 20.0]);
//! assert_eq!((a - a).boundaries(), [-3.0, -1.0, 1.0, 3.0]);
//! ```

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::arithmetic;
use crate::classify::{self, SignClass};
use crate::error::FuzzyError;
use crate::fuzzy::FuzzyNumber;

/// Four ordered boundaries a₁ ≤ a₂ ≤ a₃ ≤ a₄.
///
/// Constructors and the fallible operators guarantee finite boundaries.
/// `+` and `-` never fail: a sum that overflows holds a ±∞ boundary,
/// still in order. Use [`checked_add`](Self::checked_add) and
/// [`checked_sub`](Self::checked_sub) to keep every boundary finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrapezoidalNumber {
    bounds: [f64; 4],
}

impl TrapezoidalNumber {
    /// Creates a number from four boundaries.
    ///
    /// The boundaries are taken as given and never sorted.
    ///
    /// # Errors
    /// Returns [`FuzzyError::MalformedBoundaries`] if a boundary is not
    /// finite or the boundaries are not non-decreasing.
    ///
    /// # Examples
    /// ```
    /// use u_fuzzy::TrapezoidalNumber;
    /// assert!(TrapezoidalNumber::new(1.0, 2.0, 3.0, 4.0).is_ok());
    /// assert!(TrapezoidalNumber::new(4.0, 3.0, 2.0, 1.0).is_err());
    /// ```
    pub fn new(a1: f64, a2: f64, a3: f64, a4: f64) -> Result<Self, FuzzyError> {
        Self::try_from([a1, a2, a3, a4])
    }

    /// Creates the triangular number (a, m, m, b).
    ///
    /// # Errors
    /// Same conditions as [`new`](Self::new).
    pub fn triangular(a: f64, m: f64, b: f64) -> Result<Self, FuzzyError> {
        Self::new(a, m, m, b)
    }

    /// Creates the crisp number (x, x, x, x).
    ///
    /// # Errors
    /// Returns [`FuzzyError::MalformedBoundaries`] if `x` is not finite.
    pub fn crisp(x: f64) -> Result<Self, FuzzyError> {
        Self::new(x, x, x, x)
    }

    /// Sum that rejects an overflowing boundary.
    ///
    /// # Errors
    /// Returns [`FuzzyError::MalformedBoundaries`] if a boundary of the
    /// sum is not finite.
    pub fn checked_add(self, rhs: Self) -> Result<Self, FuzzyError> {
        Self::try_from(arithmetic::add(&self, &rhs).bounds)
    }

    /// Difference that rejects an overflowing boundary.
    ///
    /// # Errors
    /// Returns [`FuzzyError::MalformedBoundaries`] if a boundary of the
    /// difference is not finite.
    pub fn checked_sub(self, rhs: Self) -> Result<Self, FuzzyError> {
        Self::try_from(arithmetic::subtract(&self, &rhs).bounds)
    }

    /// Wraps boundaries already known to be ordered.
    pub(crate) fn from_ordered(bounds: [f64; 4]) -> Self {
        debug_assert!(bounds.windows(2).all(|w| w[0] <= w[1]));
        Self { bounds }
    }

    pub fn a1(&self) -> f64 {
        self.bounds[0]
    }

    pub fn a2(&self) -> f64 {
        self.bounds[1]
    }

    pub fn a3(&self) -> f64 {
        self.bounds[2]
    }

    pub fn a4(&self) -> f64 {
        self.bounds[3]
    }

    /// The boundaries as `[a₁, a₂, a₃, a₄]`.
    pub fn boundaries(&self) -> [f64; 4] {
        self.bounds
    }

    /// True if a₂ = a₃.
    pub fn is_triangular(&self) -> bool {
        self.bounds[1] == self.bounds[2]
    }

    /// True if a₁ ≥ 0.
    pub fn is_positive(&self) -> bool {
        classify::is_positive(&self.bounds)
    }

    /// True if a₄ ≤ 0.
    pub fn is_negative(&self) -> bool {
        classify::is_negative(&self.bounds)
    }

    /// True if the support straddles zero: a₁ < 0 < a₄.
    pub fn is_arbitrary(&self) -> bool {
        classify::is_arbitrary(&self.bounds)
    }

    /// True if the number matches one of the near-zero patterns.
    pub fn is_near_zero(&self) -> bool {
        classify::is_near_zero(&self.bounds)
    }

    /// The tag used to pick a multiplication formula.
    pub fn sign_class(&self) -> SignClass {
        SignClass::of(&self.bounds)
    }

    /// Defuzzified value (a₁ + 2a₂ + 2a₃ + a₄)/6, the sum of the endpoints
    /// of the [`alpha_interval`](FuzzyNumber::alpha_interval).
    pub fn value(&self) -> f64 {
        let [a1, a2, a3, a4] = self.bounds;
        (a1 + 2.0 * a2 + 2.0 * a3 + a4) / 6.0
    }

    /// The α-cut [a₁ + α(a₂ − a₁), a₄ − α(a₄ − a₃)].
    ///
    /// Returns `None` if `alpha` is outside [0, 1].
    ///
    /// # Examples
    /// ```
    /// use u_fuzzy::TrapezoidalNumber;
    /// let a = TrapezoidalNumber::new(1.0, 2.0, 3.0, 4.0).unwrap();
    /// assert_eq!(a.alpha_cut(0.5), Some((1.5, 3.5)));
    /// assert_eq!(a.alpha_cut(1.5), None);
    /// ```
    pub fn alpha_cut(&self, alpha: f64) -> Option<(f64, f64)> {
        if !(0.0..=1.0).contains(&alpha) {
            return None;
        }
        let [a1, a2, a3, a4] = self.bounds;
        Some((a1 + alpha * (a2 - a1), a4 - alpha * (a4 - a3)))
    }
}

impl FuzzyNumber for TrapezoidalNumber {
    fn core(&self) -> (f64, f64) {
        (self.bounds[1], self.bounds[2])
    }

    fn support(&self) -> (f64, f64) {
        (self.bounds[0], self.bounds[3])
    }

    fn alpha_interval(&self) -> (f64, f64) {
        let [a1, a2, a3, a4] = self.bounds;
        ((a1 + 2.0 * a2) / 6.0, (a4 + 2.0 * a3) / 6.0)
    }

    fn ambiguity(&self) -> f64 {
        let [a1, a2, a3, a4] = self.bounds;
        let spread = (a3 - a2) / 2.0;
        let left = a2 - a1;
        let right = a4 - a3;
        spread + (right + left) / 6.0
    }

    fn expected_interval(&self) -> (f64, f64) {
        let [a1, a2, a3, a4] = self.bounds;
        ((a1 + a2) / 2.0, (a3 + a4) / 2.0)
    }

    fn membership(&self, x: f64) -> f64 {
        let [a1, a2, a3, a4] = self.bounds;
        if x < a1 || x > a4 {
            0.0
        } else if x < a2 {
            (x - a1) / (a2 - a1)
        } else if x <= a3 {
            1.0
        } else {
            (a4 - x) / (a4 - a3)
        }
    }
}

impl TryFrom<[f64; 4]> for TrapezoidalNumber {
    type Error = FuzzyError;

    fn try_from(bounds: [f64; 4]) -> Result<Self, Self::Error> {
        let finite = bounds.iter().all(|b| b.is_finite());
        let ordered = bounds.windows(2).all(|w| w[0] <= w[1]);
        if finite && ordered {
            Ok(Self { bounds })
        } else {
            Err(FuzzyError::MalformedBoundaries(bounds))
        }
    }
}

impl TryFrom<&[f64]> for TrapezoidalNumber {
    type Error = FuzzyError;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        let bounds: [f64; 4] = values
            .try_into()
            .map_err(|_| FuzzyError::BoundaryCount(values.len()))?;
        Self::try_from(bounds)
    }
}

impl fmt::Display for TrapezoidalNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (s1, s2) = self.support();
        let (c1, c2) = self.core();
        write!(
            f,
            "Tra({}, {}, {}, {}) support=({s1}, {s2}) core=({c1}, {c2}) ambiguity={:.4} width={:.4}",
            self.a1(),
            self.a2(),
            self.a3(),
            self.a4(),
            self.ambiguity(),
            self.width()
        )
    }
}

// ============================================================================
// Operators
// ============================================================================

impl Add for TrapezoidalNumber {
    type Output = TrapezoidalNumber;

    fn add(self, rhs: Self) -> Self::Output {
        arithmetic::add(&self, &rhs)
    }
}

impl Sub for TrapezoidalNumber {
    type Output = TrapezoidalNumber;

    fn sub(self, rhs: Self) -> Self::Output {
        arithmetic::subtract(&self, &rhs)
    }
}

impl Neg for TrapezoidalNumber {
    type Output = TrapezoidalNumber;

    fn neg(self) -> Self::Output {
        arithmetic::negate(&self)
    }
}

impl Mul for TrapezoidalNumber {
    type Output = Result<TrapezoidalNumber, FuzzyError>;

    fn mul(self, rhs: Self) -> Self::Output {
        arithmetic::multiply(&self, &rhs)
    }
}

impl Mul<f64> for TrapezoidalNumber {
    type Output = Result<TrapezoidalNumber, FuzzyError>;

    fn mul(self, k: f64) -> Self::Output {
        arithmetic::scale(k, &self)
    }
}

impl Mul<TrapezoidalNumber> for f64 {
    type Output = Result<TrapezoidalNumber, FuzzyError>;

    fn mul(self, rhs: TrapezoidalNumber) -> Self::Output {
        arithmetic::scale(self, &rhs)
    }
}

impl Div for TrapezoidalNumber {
    type Output = Result<TrapezoidalNumber, FuzzyError>;

    fn div(self, rhs: Self) -> Self::Output {
        arithmetic::divide(&self, &rhs)
    }
}

impl Div<TrapezoidalNumber> for f64 {
    type Output = Result<TrapezoidalNumber, FuzzyError>;

    fn div(self, rhs: TrapezoidalNumber) -> Self::Output {
        arithmetic::divide_scalar(self, &rhs)
    }
}

// ============================================================================
// Tests
// ============================================================================
