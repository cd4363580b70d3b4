//! Boundary arithmetic behind the operators of [`TrapezoidalNumber`].
//!
//! Addition, subtraction and negation always succeed: the raw boundary
//! combinations are sorted back into ascending order. Multiplication and
//! division depend on the operands' signs and may reject a combination.
//!
//! # Multiplication dispatch
//!
//! Each operand is tagged with a [`SignClass`]; the pair of tags selects a
//! [`Strategy`]:
//!
//! | lhs × rhs | Strategy |
//! |---|---|
//! | arbitrary × arbitrary | [`Strategy::Arbitrary`] |
//! | signed × signed | [`Strategy::Restricted`] |
//! | arbitrary × signed (either order) | [`Strategy::SemiRestricted`] |
//! | near-zero × arbitrary (either order) | [`Strategy::NearZero`] |
//! | anything else | rejected |
//!
//! Every product is rebuilt through [`TrapezoidalNumber::try_from`], so a
//! formula that produced out-of-order boundaries surfaces as an error
//! rather than an invalid number.

use tracing::trace;

use crate::classify::{NearZeroPattern, Sign, SignClass};
use crate::error::{FuzzyError, Operation};
use crate::trapezoidal::TrapezoidalNumber;

/// Operand position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Boundary formula for a number × number product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Both operands straddle zero: min/max over the four corner products
    /// of the supports and of the cores.
    Arbitrary,
    /// Neither operand straddles zero: index-paired products, reversed for
    /// the boundaries of a negative operand.
    Restricted { lhs: Sign, rhs: Sign },
    /// The operand on side `arbitrary` straddles zero, the other has a sign.
    SemiRestricted { arbitrary: Side, signed: Sign },
    /// The operand on side `holder` is near-zero, the other is arbitrary.
    NearZero { holder: Side, pattern: NearZeroPattern },
}

impl Strategy {
    /// Selects the formula for `lhs × rhs`, or `None` for an unsupported pair.
    ///
    /// # Examples
    /// ```
    /// use u_fuzzy::arithmetic::Strategy;
    /// use u_fuzzy::classify::{Sign, SignClass};
    ///
    /// assert_eq!(
    ///     Strategy::select(SignClass::Positive, SignClass::Positive),
    ///     Some(Strategy::Restricted { lhs: Sign::Positive, rhs: Sign::Positive })
    /// );
    /// assert_eq!(
    ///     Strategy::select(SignClass::Arbitrary, SignClass::Arbitrary),
    ///     Some(Strategy::Arbitrary)
    /// );
    /// ```
    pub fn select(lhs: SignClass, rhs: SignClass) -> Option<Self> {
        match (lhs, rhs) {
            (SignClass::Arbitrary, SignClass::Arbitrary) => Some(Strategy::Arbitrary),
            (SignClass::NearZero(pattern), SignClass::Arbitrary) => Some(Strategy::NearZero {
                holder: Side::Left,
                pattern,
            }),
            (SignClass::Arbitrary, SignClass::NearZero(pattern)) => Some(Strategy::NearZero {
                holder: Side::Right,
                pattern,
            }),
            (SignClass::Arbitrary, other) => other.sign().map(|signed| Strategy::SemiRestricted {
                arbitrary: Side::Left,
                signed,
            }),
            (other, SignClass::Arbitrary) => other.sign().map(|signed| Strategy::SemiRestricted {
                arbitrary: Side::Right,
                signed,
            }),
            (lhs, rhs) => Some(Strategy::Restricted {
                lhs: lhs.sign()?,
                rhs: rhs.sign()?,
            }),
        }
    }

    /// Raw product boundaries; not yet validated.
    fn apply(self, a: [f64; 4], b: [f64; 4]) -> [f64; 4] {
        match self {
            Strategy::Arbitrary => arbitrary_product(a, b),
            Strategy::Restricted { lhs, rhs } => restricted_product(a, lhs, b, rhs),
            Strategy::SemiRestricted {
                arbitrary: Side::Right,
                signed,
            } => semi_restricted_product(a, signed, b),
            Strategy::SemiRestricted {
                arbitrary: Side::Left,
                signed,
            } => semi_restricted_product(b, signed, a),
            Strategy::NearZero {
                holder: Side::Left,
                pattern,
            } => near_zero_product(a, pattern, b),
            Strategy::NearZero {
                holder: Side::Right,
                pattern,
            } => near_zero_product(b, pattern, a),
        }
    }
}

// ============================================================================
// Addition, subtraction, negation
// ============================================================================

/// Component-wise sum, re-sorted.
pub fn add(lhs: &TrapezoidalNumber, rhs: &TrapezoidalNumber) -> TrapezoidalNumber {
    let [a1, a2, a3, a4] = lhs.boundaries();
    let [b1, b2, b3, b4] = rhs.boundaries();
    TrapezoidalNumber::from_ordered(sort4([a1 + b1, a2 + b2, a3 + b3, a4 + b4]))
}

/// Cross subtraction aᵢ − b₅₋ᵢ, re-sorted.
pub fn subtract(lhs: &TrapezoidalNumber, rhs: &TrapezoidalNumber) -> TrapezoidalNumber {
    let [a1, a2, a3, a4] = lhs.boundaries();
    let [b1, b2, b3, b4] = rhs.boundaries();
    TrapezoidalNumber::from_ordered(sort4([a1 - b4, a2 - b3, a3 - b2, a4 - b1]))
}

/// Boundary-reversing sign flip.
pub fn negate(x: &TrapezoidalNumber) -> TrapezoidalNumber {
    let [a1, a2, a3, a4] = x.boundaries();
    TrapezoidalNumber::from_ordered([-a4, -a3, -a2, -a1])
}

// ============================================================================
// Multiplication
// ============================================================================

/// Scalar multiple `k × x`.
///
/// The support pair and the core pair are scaled independently; min/max
/// inside each pair restores the order a negative `k` reverses.
///
/// # Errors
/// Returns [`FuzzyError::UnsupportedOperands`] if `k` is not finite.
pub fn scale(k: f64, x: &TrapezoidalNumber) -> Result<TrapezoidalNumber, FuzzyError> {
    if !k.is_finite() {
        return Err(FuzzyError::UnsupportedOperands {
            operation: Operation::Multiplication,
            reason: format!("scalar must be finite, got {k}"),
        });
    }
    let [a1, a2, a3, a4] = x.boundaries();
    let (lo, hi) = (k * a1, k * a4);
    let (left, right) = (k * a2, k * a3);
    TrapezoidalNumber::try_from([lo.min(hi), left.min(right), left.max(right), lo.max(hi)])
}

/// Number × number product, dispatched on the operands' sign classes.
///
/// # Errors
/// Returns [`FuzzyError::UnsupportedOperands`] when no [`Strategy`] covers
/// the pair, e.g. a near-zero number times a signed or another near-zero
/// number.
///
/// # Examples
/// ```
/// use u_fuzzy::{arithmetic, TrapezoidalNumber};
/// let a = TrapezoidalNumber::new(1.0, 2.0, 3.0, 4.0).unwrap();
/// let b = TrapezoidalNumber::new(2.0, 3.0, 4.0, 5.0).unwrap();
/// let p = arithmetic::multiply(&a, &b).unwrap();
/// assert_eq!(p.boundaries(), [2.0, 6.0, 12.0, 20.0]);
/// ```
pub fn multiply(
    lhs: &TrapezoidalNumber,
    rhs: &TrapezoidalNumber,
) -> Result<TrapezoidalNumber, FuzzyError> {
    let (lhs_class, rhs_class) = (lhs.sign_class(), rhs.sign_class());
    let strategy = Strategy::select(lhs_class, rhs_class).ok_or_else(|| {
        FuzzyError::UnsupportedOperands {
            operation: Operation::Multiplication,
            reason: format!("no product formula for {lhs_class} × {rhs_class}"),
        }
    })?;
    trace!(?strategy, %lhs, %rhs, "selected product formula");
    TrapezoidalNumber::try_from(strategy.apply(lhs.boundaries(), rhs.boundaries()))
}

fn arbitrary_product(a: [f64; 4], b: [f64; 4]) -> [f64; 4] {
    let outer = [a[0] * b[0], a[0] * b[3], a[3] * b[0], a[3] * b[3]];
    let inner = [a[1] * b[1], a[1] * b[2], a[2] * b[1], a[2] * b[2]];
    [min_of(&outer), min_of(&inner), max_of(&inner), max_of(&outer)]
}

fn restricted_product(a: [f64; 4], lhs: Sign, b: [f64; 4], rhs: Sign) -> [f64; 4] {
    let [a1, a2, a3, a4] = a;
    let [b1, b2, b3, b4] = b;
    match (lhs, rhs) {
        (Sign::Positive, Sign::Positive) => [a1 * b1, a2 * b2, a3 * b3, a4 * b4],
        (Sign::Negative, Sign::Negative) => [a4 * b4, a3 * b3, a2 * b2, a1 * b1],
        (Sign::Positive, Sign::Negative) => [a4 * b1, a3 * b2, a2 * b3, a1 * b4],
        (Sign::Negative, Sign::Positive) => [a1 * b4, a2 * b3, a3 * b2, a4 * b1],
    }
}

/// `s` has a sign, `w` straddles zero.
fn semi_restricted_product(s: [f64; 4], sign: Sign, w: [f64; 4]) -> [f64; 4] {
    let [s1, s2, s3, s4] = s;
    let [w1, w2, w3, w4] = w;
    match sign {
        Sign::Positive => [
            (s1 * w1).min(s4 * w1),
            (s2 * w2).min(s3 * w2),
            (s2 * w3).max(s3 * w3),
            (s1 * w4).max(s4 * w4),
        ],
        Sign::Negative => [
            (s1 * w4).min(s4 * w4),
            (s2 * w3).min(s3 * w3),
            (s2 * w2).max(s3 * w2),
            (s1 * w1).max(s4 * w1),
        ],
    }
}

/// `z` is near-zero with `pattern`, `w` straddles zero.
///
/// Both supports straddle zero, so the outer bounds come from the mixed-sign
/// and same-sign corner products. The core bounds depend on where zero sits
/// relative to the core of `z`.
fn near_zero_product(z: [f64; 4], pattern: NearZeroPattern, w: [f64; 4]) -> [f64; 4] {
    let [z1, z2, z3, z4] = z;
    let [w1, w2, w3, w4] = w;
    let (inner_lo, inner_hi) = match pattern {
        NearZeroPattern::NegativeCore => ((z2 * w3).min(z3 * w3), (z2 * w2).max(z3 * w2)),
        NearZeroPattern::StraddlingCore => ((z2 * w3).min(z3 * w2), (z2 * w2).max(z3 * w3)),
        NearZeroPattern::PositiveCore => ((z2 * w2).min(z3 * w2), (z2 * w3).max(z3 * w3)),
    };
    [
        (z1 * w4).min(z4 * w1),
        inner_lo,
        inner_hi,
        (z1 * w1).max(z4 * w4),
    ]
}

// ============================================================================
// Division
// ============================================================================

/// Quotient `lhs / rhs` of a positive number by a strictly positive one.
///
/// # Errors
/// Returns [`FuzzyError::UnsupportedOperands`] if `lhs` has a negative
/// boundary or `rhs` has a boundary ≤ 0.
pub fn divide(
    lhs: &TrapezoidalNumber,
    rhs: &TrapezoidalNumber,
) -> Result<TrapezoidalNumber, FuzzyError> {
    if !lhs.is_positive() {
        return Err(FuzzyError::UnsupportedOperands {
            operation: Operation::Division,
            reason: format!("dividend must be positive, got {lhs}"),
        });
    }
    require_positive_divisor(rhs)?;
    let [a1, a2, a3, a4] = lhs.boundaries();
    let [b1, b2, b3, b4] = rhs.boundaries();
    TrapezoidalNumber::try_from(sort4([a1 / b4, a2 / b3, a3 / b2, a4 / b1]))
}

/// Quotient `k / rhs` of a positive scalar by a number whose support
/// excludes zero.
///
/// `1/x` decreases on each half-line, so (k/b₄, k/b₃, k/b₂, k/b₁) is
/// already ascending for a strictly positive or strictly negative `rhs`.
///
/// # Errors
/// Returns [`FuzzyError::UnsupportedOperands`] if `k` is not a positive
/// real or the support of `rhs` contains zero (b₁ ≤ 0 ≤ b₄).
pub fn divide_scalar(k: f64, rhs: &TrapezoidalNumber) -> Result<TrapezoidalNumber, FuzzyError> {
    if !(k.is_finite() && k > 0.0) {
        return Err(FuzzyError::UnsupportedOperands {
            operation: Operation::Division,
            reason: format!("scalar dividend must be a positive real, got {k}"),
        });
    }
    let [b1, b2, b3, b4] = rhs.boundaries();
    if b1 <= 0.0 && 0.0 <= b4 {
        return Err(FuzzyError::UnsupportedOperands {
            operation: Operation::Division,
            reason: format!("divisor support must exclude zero, got {rhs}"),
        });
    }
    TrapezoidalNumber::try_from([k / b4, k / b3, k / b2, k / b1])
}

fn require_positive_divisor(rhs: &TrapezoidalNumber) -> Result<(), FuzzyError> {
    if rhs.a1() > 0.0 {
        Ok(())
    } else {
        Err(FuzzyError::UnsupportedOperands {
            operation: Operation::Division,
            reason: format!("divisor boundaries must be strictly positive, got {rhs}"),
        })
    }
}

// ============================================================================
// Helpers
// ============================================================================

pub(crate) fn sort4(mut values: [f64; 4]) -> [f64; 4] {
    values.sort_by(f64::total_cmp);
    values
}

fn min_of(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::INFINITY, f64::min)
}

fn max_of(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

// ============================================================================
// Tests
// ============================================================================
