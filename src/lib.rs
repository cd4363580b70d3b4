//! # u-fuzzy
//!
//! Trapezoidal fuzzy number arithmetic and permutation tests for comparing
//! the ambiguity of two fuzzy samples.
//!
//! ## Modules
//!
//! - [`trapezoidal`]: the [`TrapezoidalNumber`] value type and its operators
//! - [`fuzzy`]: the [`FuzzyNumber`] descriptor trait
//! - [`classify`]: sign classification driving multiplication dispatch
//! - [`arithmetic`]: boundary formulas behind the operators
//! - [`ambiguity`]: tables of rows → [`AmbiguitySample`]s
//! - [`permutation`]: independent and dependent permutation tests
//! - [`config`]: [`PermutationConfig`]
//! - [`stats`], [`random`]: compensated means and seeded resampling
//!
//! ## Quick start
//!
//! ```
//! use u_fuzzy::ambiguity::measure_ambiguity;
//! use u_fuzzy::{Pairing, PermutationConfig, PermutationTest};
//!
//! let x = [[65.0, 75.0, 85.0, 85.0], [35.0, 37.0, 44.0, 50.0], [66.0, 70.0, 75.0, 80.0]];
//! let y = [[50.0, 50.0, 63.0, 75.0], [39.0, 47.0, 52.0, 60.0], [60.0, 70.0, 85.0, 90.0]];
//!
//! let samples = measure_ambiguity([x, y])?;
//! let test = PermutationTest::new(PermutationConfig::quick().seed(7));
//! let outcome = test.run(Pairing::Dependent, &samples)?;
//! assert!((0.0..=1.0).contains(&outcome.p_value()));
//! # Ok::<(), u_fuzzy::FuzzyError>(())
//! ```
//!
//! ## Features
//!
//! - `parallel`: run the resampling loops on rayon. Seeded runs give the
//!   same outcome with and without it.

pub mod ambiguity;
pub mod arithmetic;
pub mod classify;
pub mod config;
pub mod error;
pub mod fuzzy;
pub mod permutation;
pub mod random;
pub mod stats;
pub mod trapezoidal;

pub use ambiguity::AmbiguitySample;
pub use config::PermutationConfig;
pub use error::{FuzzyError, Operation};
pub use fuzzy::FuzzyNumber;
pub use permutation::{Pairing, PermutationOutcome, PermutationTest};
pub use trapezoidal::TrapezoidalNumber;
