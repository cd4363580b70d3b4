//! End-to-end: two tables of fuzzy exam scores → ambiguity samples →
//! permutation tests.

use u_fuzzy::ambiguity::measure_ambiguity;
use u_fuzzy::{FuzzyError, Pairing, PermutationConfig, PermutationTest};

const SCORES_X: [[f64; 4]; 20] = [
    [65.0, 75.0, 85.0, 85.0],
    [35.0, 37.0, 44.0, 50.0],
    [66.0, 70.0, 75.0, 80.0],
    [70.0, 74.0, 80.0, 84.0],
    [65.0, 70.0, 75.0, 80.0],
    [45.0, 50.0, 57.0, 65.0],
    [60.0, 66.0, 70.0, 75.0],
    [65.0, 65.0, 70.0, 76.0],
    [60.0, 65.0, 75.0, 80.0],
    [55.0, 60.0, 66.0, 70.0],
    [60.0, 65.0, 70.0, 74.0],
    [30.0, 44.0, 46.0, 54.0],
    [60.0, 65.0, 75.0, 75.0],
    [70.0, 75.0, 85.0, 85.0],
    [44.0, 45.0, 50.0, 56.0],
    [51.0, 56.0, 64.0, 70.0],
    [40.0, 46.0, 54.0, 60.0],
    [55.0, 60.0, 65.0, 70.0],
    [80.0, 85.0, 90.0, 94.0],
    [80.0, 84.0, 90.0, 90.0],
];

const SCORES_Y: [[f64; 4]; 20] = [
    [50.0, 50.0, 63.0, 75.0],
    [39.0, 47.0, 52.0, 60.0],
    [60.0, 70.0, 85.0, 90.0],
    [50.0, 56.0, 64.0, 74.0],
    [39.0, 45.0, 53.0, 57.0],
    [55.0, 60.0, 70.0, 76.0],
    [50.0, 50.0, 57.0, 67.0],
    [65.0, 67.0, 80.0, 87.0],
    [50.0, 50.0, 65.0, 75.0],
    [50.0, 55.0, 64.0, 70.0],
    [39.0, 46.0, 53.0, 56.0],
    [19.0, 29.0, 41.0, 50.0],
    [40.0, 47.0, 52.0, 56.0],
    [54.0, 55.0, 65.0, 76.0],
    [59.0, 65.0, 75.0, 85.0],
    [50.0, 52.0, 57.0, 60.0],
    [60.0, 60.0, 70.0, 80.0],
    [50.0, 54.0, 61.0, 67.0],
    [40.0, 46.0, 50.0, 50.0],
    [44.0, 50.0, 56.0, 66.0],
];

fn tester() -> PermutationTest {
    PermutationTest::new(PermutationConfig::new().seed(2024))
}

#[test]
fn test_sample_means() {
    let samples = measure_ambiguity([SCORES_X, SCORES_Y]).unwrap();
    assert_eq!(samples[0].len(), 20);
    assert_eq!(samples[1].len(), 20);
    assert!((samples[0].mean().unwrap() - 4.7917).abs() < 1e-3);
    assert!((samples[1].mean().unwrap() - 6.4333).abs() < 1e-3);
}

#[test]
fn test_independent_rejects_equal_ambiguity() {
    let samples = measure_ambiguity([SCORES_X, SCORES_Y]).unwrap();
    let outcome = tester().run(Pairing::Independent, &samples).unwrap();
    assert!((outcome.observed + 1.6417).abs() < 1e-3);
    assert_eq!(outcome.iterations, 10_000);
    assert!(
        outcome.p_value() > 0.0 && outcome.p_value() < 0.01,
        "{outcome}"
    );
}

#[test]
fn test_dependent_rejects_equal_ambiguity() {
    let samples = measure_ambiguity([SCORES_X, SCORES_Y]).unwrap();
    let outcome = tester().run(Pairing::Dependent, &samples).unwrap();
    assert!((outcome.observed + 32.8333).abs() < 1e-3);
    assert!(
        outcome.p_value() > 0.0 && outcome.p_value() < 0.01,
        "{outcome}"
    );
}

#[test]
fn test_same_table_gives_p_one() {
    let samples = measure_ambiguity([SCORES_X, SCORES_X]).unwrap();
    let outcome = tester().run(Pairing::Independent, &samples).unwrap();
    assert_eq!(outcome.p_value(), 1.0);
}

#[test]
fn test_dependent_needs_paired_tables() {
    let samples = measure_ambiguity([&SCORES_X[..], &SCORES_Y[..19]]).unwrap();
    let err = tester().run(Pairing::Dependent, &samples).unwrap_err();
    assert_eq!(err, FuzzyError::LengthMismatch { left: 20, right: 19 });
    // Unpaired samples of different length are fine.
    assert!(tester().run(Pairing::Independent, &samples).is_ok());
}
