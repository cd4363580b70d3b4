//! The descriptor contract shared by fuzzy-number shapes.
//!
//! [`TrapezoidalNumber`](crate::TrapezoidalNumber) is the only shape
//! implemented. Other shapes (Gaussian, piecewise-linear) would implement
//! this trait instead of reusing trapezoidal arithmetic.

/// Scalar and interval descriptors of a fuzzy number.
pub trait FuzzyNumber {
    /// Interval where the membership is 1.
    fn core(&self) -> (f64, f64);

    /// Interval where the membership is positive (closed).
    fn support(&self) -> (f64, f64);

    /// Weighted interval ((a₁ + 2a₂)/6, (a₄ + 2a₃)/6) for trapezoids.
    fn alpha_interval(&self) -> (f64, f64);

    /// Spread measure; zero only for a crisp number.
    fn ambiguity(&self) -> f64;

    /// Expected interval of the number.
    fn expected_interval(&self) -> (f64, f64);

    /// Midpoint of [`expected_interval`](Self::expected_interval).
    fn expected_value(&self) -> f64 {
        let (lower, upper) = self.expected_interval();
        (lower + upper) / 2.0
    }

    /// Span of [`expected_interval`](Self::expected_interval).
    fn width(&self) -> f64 {
        let (lower, upper) = self.expected_interval();
        upper - lower
    }

    /// Membership grade μ(x) ∈ [0, 1].
    fn membership(&self, x: f64) -> f64;
}
