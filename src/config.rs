//! Configuration for the permutation tests.

use crate::error::FuzzyError;

/// Resample count used by [`PermutationConfig::new`].
pub const DEFAULT_ITERATIONS: usize = 10_000;

/// Settings shared by the independent and dependent permutation tests.
///
/// # Examples
/// ```
/// use u_fuzzy::PermutationConfig;
///
/// let config = PermutationConfig::quick().seed(42);
/// assert_eq!(config.iterations, 1_000);
/// assert_eq!(config.seed, Some(42));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermutationConfig {
    /// Number of resampled statistics K; the p-value resolution is 1/K.
    /// Default: 10,000.
    pub iterations: usize,

    /// Base seed for the per-iteration generators.
    ///
    /// `None` draws a fresh seed per run; the seed actually used is
    /// reported in the outcome so the run can be replayed.
    pub seed: Option<u64>,
}

impl Default for PermutationConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            seed: None,
        }
    }
}

impl PermutationConfig {
    /// Create a configuration with the default 10,000 resamples.
    pub fn new() -> Self {
        Self::default()
    }

    /// 1,000 resamples. For smoke tests and interactive use.
    pub fn quick() -> Self {
        Self {
            iterations: 1_000,
            ..Self::default()
        }
    }

    /// 100,000 resamples. For p-values near a decision threshold.
    pub fn thorough() -> Self {
        Self {
            iterations: 100_000,
            ..Self::default()
        }
    }

    // =========================================================================
    // Builder methods
    // =========================================================================

    /// Set the number of resamples.
    pub fn iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set a deterministic base seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check that the configuration can run.
    ///
    /// # Errors
    /// Returns [`FuzzyError::InvalidConfig`] if `iterations` is zero.
    pub fn validate(&self) -> Result<(), FuzzyError> {
        if self.iterations == 0 {
            return Err(FuzzyError::InvalidConfig(
                "iterations must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        assert_eq!(PermutationConfig::new().iterations, DEFAULT_ITERATIONS);
        assert_eq!(PermutationConfig::default(), PermutationConfig::new());
        assert_eq!(PermutationConfig::quick().iterations, 1_000);
        assert_eq!(PermutationConfig::thorough().iterations, 100_000);
        assert_eq!(PermutationConfig::new().seed, None);
    }

    #[test]
    fn test_builder() {
        let config = PermutationConfig::thorough().iterations(500).seed(7);
        assert_eq!(config.iterations, 500);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_validate_rejects_zero_iterations() {
        let err = PermutationConfig::new().iterations(0).validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid configuration: iterations must be positive"
        );
        assert!(err.is_usage_error());
    }
}
