//! Monte Carlo permutation tests for equal ambiguity of two samples.
//!
//! Both tests follow the same pattern:
//!
//! 1. compute the observed statistic t₀ once, before resampling;
//! 2. draw K statistics under the null hypothesis of equal ambiguity;
//! 3. report p = #{|t| ≥ |t₀|} / K.
//!
//! # Tests
//!
//! | Pairing | t₀ | Null resample |
//! |---|---|---|
//! | [`Independent`](Pairing::Independent) | mean(X) − mean(Y) | shuffle X ++ Y, split at ⌊n/2⌋ |
//! | [`Dependent`](Pairing::Dependent) | Σ (Xᵢ − Yᵢ) | flip the sign of each difference at random |
//!
//! In the independent test the first ⌊n/2⌋ shuffled values form the second
//! group and the rest the first, whatever the input sample sizes were.
//!
//! # Reproducibility
//!
//! Iteration `i` draws from a generator seeded with
//! [`counter_seed`](crate::random::counter_seed)`(seed, i)`, so a fixed seed
//! gives the same outcome with and without the `parallel` feature.
//!
//! # Complexity
//! Independent: O(K·(n + m)). Dependent: O(K·n).
//!
//! # Examples
//! ```
//! use u_fuzzy::{PermutationConfig, PermutationTest};
//!
//! let x = [6.67, 4.83, 4.0, 4.33, 5.5, 3.67];
//! let y = [8.5, 5.17, 10.0, 6.67, 7.0, 6.5];
//!
//! let test = PermutationTest::new(PermutationConfig::quick().seed(42));
//! let outcome = test.independent(&x, &y).unwrap();
//! assert!(outcome.observed < 0.0);
//! assert!((0.0..=1.0).contains(&outcome.p_value()));
//!
//! // Identical samples never reject.
//! assert_eq!(test.independent(&x, &x).unwrap().p_value(), 1.0);
//! ```

use std::fmt;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::debug;

use crate::config::PermutationConfig;
use crate::error::FuzzyError;
use crate::random::{counter_seed, create_rng, random_sign, shuffle};
use crate::stats::{mean, mean_difference};

/// Whether the two samples are paired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pairing {
    /// Unpaired samples, lengths may differ.
    Independent,
    /// Paired samples of equal length.
    Dependent,
}

impl fmt::Display for Pairing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pairing::Independent => f.write_str("independent"),
            Pairing::Dependent => f.write_str("dependent"),
        }
    }
}

/// Result of one permutation test run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PermutationOutcome {
    pub pairing: Pairing,
    /// Observed statistic t₀.
    pub observed: f64,
    /// Resamples with |t| ≥ |t₀|.
    pub exceedances: usize,
    /// Number of resamples K.
    pub iterations: usize,
    /// Base seed of the run; passing it back through
    /// [`PermutationConfig::seed`] reproduces the outcome.
    pub seed: u64,
}

impl PermutationOutcome {
    /// Monte Carlo p-value `exceedances / iterations`, in [0, 1].
    pub fn p_value(&self) -> f64 {
        self.exceedances as f64 / self.iterations as f64
    }
}

impl fmt::Display for PermutationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} permutation test: statistic={:.4}, p={:.4} ({}/{}, seed={})",
            self.pairing,
            self.observed,
            self.p_value(),
            self.exceedances,
            self.iterations,
            self.seed
        )
    }
}

/// Permutation tester bound to a [`PermutationConfig`].
#[derive(Debug, Clone, Default)]
pub struct PermutationTest {
    config: PermutationConfig,
}

impl PermutationTest {
    pub fn new(config: PermutationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PermutationConfig {
        &self.config
    }

    /// Runs the test selected by `pairing` on exactly two samples.
    ///
    /// # Errors
    /// Returns [`FuzzyError::SampleArity`] unless `samples` holds exactly
    /// two samples, plus every error of [`independent`](Self::independent)
    /// and [`dependent`](Self::dependent).
    pub fn run<S: AsRef<[f64]>>(
        &self,
        pairing: Pairing,
        samples: &[S],
    ) -> Result<PermutationOutcome, FuzzyError> {
        let [x, y] = samples else {
            return Err(FuzzyError::SampleArity(samples.len()));
        };
        match pairing {
            Pairing::Independent => self.independent(x.as_ref(), y.as_ref()),
            Pairing::Dependent => self.dependent(x.as_ref(), y.as_ref()),
        }
    }

    /// Unpaired test of H₀: AMB(X) = AMB(Y).
    ///
    /// # Errors
    /// - [`FuzzyError::InvalidConfig`] for zero iterations.
    /// - [`FuzzyError::EmptySample`] if either sample is empty.
    /// - [`FuzzyError::NonFiniteValue`] for NaN or infinite values.
    pub fn independent(&self, x: &[f64], y: &[f64]) -> Result<PermutationOutcome, FuzzyError> {
        self.config.validate()?;
        let observed = checked_mean(x, 0)? - checked_mean(y, 1)?;
        let pooled: Vec<f64> = x.iter().chain(y).copied().collect();
        let seed = self.resolve_seed();
        debug!(
            pairing = %Pairing::Independent,
            iterations = self.config.iterations,
            seed,
            observed,
            "starting permutation test"
        );

        let exceedances = independent_exceedances(&pooled, observed, self.config.iterations, seed);
        Ok(self.finish(Pairing::Independent, observed, exceedances, seed))
    }

    /// Paired test of H₀: AMB(X) = AMB(Y).
    ///
    /// # Errors
    /// - [`FuzzyError::LengthMismatch`] if the samples differ in length.
    /// - Otherwise as [`independent`](Self::independent).
    pub fn dependent(&self, x: &[f64], y: &[f64]) -> Result<PermutationOutcome, FuzzyError> {
        self.config.validate()?;
        if x.len() != y.len() {
            return Err(FuzzyError::LengthMismatch {
                left: x.len(),
                right: y.len(),
            });
        }
        checked_mean(x, 0)?;
        checked_mean(y, 1)?;

        let differences: Vec<f64> = x.iter().zip(y).map(|(a, b)| a - b).collect();
        let observed: f64 = differences.iter().sum();
        let seed = self.resolve_seed();
        debug!(
            pairing = %Pairing::Dependent,
            iterations = self.config.iterations,
            seed,
            observed,
            "starting permutation test"
        );

        let exceedances =
            dependent_exceedances(&differences, observed, self.config.iterations, seed);
        Ok(self.finish(Pairing::Dependent, observed, exceedances, seed))
    }

    fn resolve_seed(&self) -> u64 {
        self.config.seed.unwrap_or_else(rand::random)
    }

    fn finish(
        &self,
        pairing: Pairing,
        observed: f64,
        exceedances: usize,
        seed: u64,
    ) -> PermutationOutcome {
        let outcome = PermutationOutcome {
            pairing,
            observed,
            exceedances,
            iterations: self.config.iterations,
            seed,
        };
        debug!(
            %pairing,
            exceedances,
            p_value = outcome.p_value(),
            "permutation test finished"
        );
        outcome
    }
}

/// Independent test with the default configuration; returns the p-value.
///
/// # Errors
/// As [`PermutationTest::independent`].
pub fn independent_test(x: &[f64], y: &[f64]) -> Result<f64, FuzzyError> {
    PermutationTest::default()
        .independent(x, y)
        .map(|outcome| outcome.p_value())
}

/// Dependent test with the default configuration; returns the p-value.
///
/// # Errors
/// As [`PermutationTest::dependent`].
pub fn dependent_test(x: &[f64], y: &[f64]) -> Result<f64, FuzzyError> {
    PermutationTest::default()
        .dependent(x, y)
        .map(|outcome| outcome.p_value())
}

/// Mean of a sample that must be non-empty and finite.
fn checked_mean(values: &[f64], sample: usize) -> Result<f64, FuzzyError> {
    if let Some(index) = values.iter().position(|v| !v.is_finite()) {
        return Err(FuzzyError::NonFiniteValue { sample, index });
    }
    mean(values).ok_or(FuzzyError::EmptySample { sample })
}

// ============================================================================
// Resampling loops
// ============================================================================

/// One independent resample: reshuffle `pooled` into `buffer` and compare.
fn independent_hit(
    pooled: &[f64],
    buffer: &mut [f64],
    threshold: f64,
    seed: u64,
    iteration: usize,
) -> bool {
    buffer.copy_from_slice(pooled);
    let mut rng = create_rng(counter_seed(seed, iteration as u64));
    shuffle(buffer, &mut rng);
    let (second, first) = buffer.split_at(buffer.len() / 2);
    mean_difference(first, second).is_some_and(|t| t.abs() >= threshold)
}

/// One dependent resample: random signs on every difference.
fn dependent_hit(differences: &[f64], threshold: f64, seed: u64, iteration: usize) -> bool {
    let mut rng = create_rng(counter_seed(seed, iteration as u64));
    let statistic: f64 = differences
        .iter()
        .map(|d| random_sign(&mut rng) * d)
        .sum();
    statistic.abs() >= threshold
}

#[cfg(feature = "parallel")]
fn independent_exceedances(pooled: &[f64], observed: f64, iterations: usize, seed: u64) -> usize {
    let threshold = observed.abs();
    (0..iterations)
        .into_par_iter()
        .fold_with((vec![0.0; pooled.len()], 0_usize), |(mut buffer, hits), i| {
            let hit = independent_hit(pooled, &mut buffer, threshold, seed, i);
            (buffer, hits + usize::from(hit))
        })
        .map(|(_, hits)| hits)
        .sum()
}

#[cfg(not(feature = "parallel"))]
fn independent_exceedances(pooled: &[f64], observed: f64, iterations: usize, seed: u64) -> usize {
    let threshold = observed.abs();
    let mut buffer = vec![0.0; pooled.len()];
    (0..iterations)
        .filter(|&i| independent_hit(pooled, &mut buffer, threshold, seed, i))
        .count()
}

#[cfg(feature = "parallel")]
fn dependent_exceedances(differences: &[f64], observed: f64, iterations: usize, seed: u64) -> usize {
    let threshold = observed.abs();
    (0..iterations)
        .into_par_iter()
        .filter(|&i| dependent_hit(differences, threshold, seed, i))
        .count()
}

#[cfg(not(feature = "parallel"))]
fn dependent_exceedances(differences: &[f64], observed: f64, iterations: usize, seed: u64) -> usize {
    let threshold = observed.abs();
    (0..iterations)
        .filter(|&i| dependent_hit(differences, threshold, seed, i))
        .count()
}

// ============================================================================
// Tests
// ============================================================================


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        #[test]
        fn p_value_in_unit_interval(
            x in proptest::collection::vec(0.0_f64..20.0, 1..15),
            y in proptest::collection::vec(0.0_f64..20.0, 1..15),
            seed in any::<u64>(),
        ) {
            let test = PermutationTest::new(PermutationConfig::new().iterations(200).seed(seed));
            let outcome = test.independent(&x, &y).unwrap();
            prop_assert!(outcome.exceedances <= outcome.iterations);
            prop_assert!((0.0..=1.0).contains(&outcome.p_value()));
        }

        #[test]
        fn dependent_observed_is_sum_of_differences(
            pairs in proptest::collection::vec((0.0_f64..20.0, 0.0_f64..20.0), 1..15),
        ) {
            let (x, y): (Vec<f64>, Vec<f64>) = pairs.into_iter().unzip();
            let test = PermutationTest::new(PermutationConfig::quick().seed(1));
            let outcome = test.dependent(&x, &y).unwrap();
            let expected: f64 = x.iter().zip(&y).map(|(a, b)| a - b).sum();
            prop_assert_eq!(outcome.observed, expected);
        }
    }
}
