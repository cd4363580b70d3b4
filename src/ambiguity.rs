//! Ambiguity extraction from tables of trapezoidal rows.
//!
//! A table is any sequence of rows, each row the four boundaries of one
//! trapezoidal number. Extraction builds every number and keeps only its
//! [`ambiguity`](FuzzyNumber::ambiguity), producing one
//! [`AmbiguitySample`] per table in row order.
//!
//! # Examples
//! ```
//! use u_fuzzy::ambiguity::measure_ambiguity;
//!
//! let x = [[65.0, 75.0, 85.0, 85.0], [35.0, 37.0, 44.0, 50.0]];
//! let y = [[50.0, 50.0, 63.0, 75.0], [39.0, 47.0, 52.0, 60.0]];
//! let samples = measure_ambiguity([x, y]).unwrap();
//!
//! assert_eq!(samples.len(), 2);
//! assert!((samples[0].as_slice()[0] - 6.6667).abs() < 1e-4);
//! assert!((samples[1].as_slice()[0] - 8.5).abs() < 1e-12);
//! ```

use tracing::debug;

use crate::error::FuzzyError;
use crate::fuzzy::FuzzyNumber;
use crate::stats;
use crate::trapezoidal::TrapezoidalNumber;

/// Ambiguity values of one table, one per row, in row order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AmbiguitySample(Vec<f64>);

impl AmbiguitySample {
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Mean ambiguity; `None` for an empty sample.
    pub fn mean(&self) -> Option<f64> {
        stats::mean(&self.0)
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

impl AsRef<[f64]> for AmbiguitySample {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

impl From<Vec<f64>> for AmbiguitySample {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

impl FromIterator<f64> for AmbiguitySample {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Measures the ambiguity of every row of a single table.
///
/// # Errors
/// Returns [`FuzzyError::InvalidShape`] with `table = 0` for the first row
/// that is not exactly four finite non-decreasing values.
pub fn measure_table<I, R>(rows: I) -> Result<AmbiguitySample, FuzzyError>
where
    I: IntoIterator<Item = R>,
    R: AsRef<[f64]>,
{
    measure_rows(0, rows)
}

/// Measures every table, returning one sample per table in input order.
///
/// # Errors
/// Returns [`FuzzyError::InvalidShape`] for the first malformed row,
/// carrying its table and row index.
pub fn measure_ambiguity<T, I, R>(tables: T) -> Result<Vec<AmbiguitySample>, FuzzyError>
where
    T: IntoIterator<Item = I>,
    I: IntoIterator<Item = R>,
    R: AsRef<[f64]>,
{
    tables
        .into_iter()
        .enumerate()
        .map(|(table, rows)| measure_rows(table, rows))
        .collect()
}

fn measure_rows<I, R>(table: usize, rows: I) -> Result<AmbiguitySample, FuzzyError>
where
    I: IntoIterator<Item = R>,
    R: AsRef<[f64]>,
{
    let sample = rows
        .into_iter()
        .enumerate()
        .map(|(row, values)| {
            TrapezoidalNumber::try_from(values.as_ref())
                .map(|number| number.ambiguity())
                .map_err(|source| FuzzyError::InvalidShape {
                    table,
                    row,
                    source: Box::new(source),
                })
        })
        .collect::<Result<AmbiguitySample, _>>()?;
    debug!(table, rows = sample.len(), "measured table ambiguity");
    Ok(sample)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE_X: [[f64; 4]; 4] = [
        [65.0, 75.0, 85.0, 85.0],
        [35.0, 37.0, 44.0, 50.0],
        [66.0, 70.0, 75.0, 80.0],
        [70.0, 74.0, 80.0, 84.0],
    ];

    const TABLE_Y: [[f64; 4]; 4] = [
        [50.0, 50.0, 63.0, 75.0],
        [39.0, 47.0, 52.0, 60.0],
        [60.0, 70.0, 85.0, 90.0],
        [50.0, 56.0, 64.0, 74.0],
    ];

    fn assert_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-4, "got {actual:?}, expected {expected:?}");
        }
    }

    #[test]
    fn test_measure_two_tables() {
        let samples = measure_ambiguity([TABLE_X, TABLE_Y]).unwrap();
        assert_eq!(samples.len(), 2);
        assert_close(samples[0].as_slice(), &[6.6667, 4.8333, 4.0, 4.3333]);
        assert_close(samples[1].as_slice(), &[8.5, 5.1667, 10.0, 6.6667]);
    }

    #[test]
    fn test_measure_table_from_vectors() {
        let rows: Vec<Vec<f64>> = TABLE_Y.iter().map(|r| r.to_vec()).collect();
        let sample = measure_table(&rows).unwrap();
        assert_close(sample.as_slice(), &[8.5, 5.1667, 10.0, 6.6667]);
    }

    #[test]
    fn test_empty_table_gives_empty_sample() {
        let rows: Vec<[f64; 4]> = Vec::new();
        let sample = measure_table(rows).unwrap();
        assert!(sample.is_empty());
        assert_eq!(sample.mean(), None);
    }

    #[test]
    fn test_short_row_reports_position() {
        let x: Vec<Vec<f64>> = vec![vec![1.0, 2.0, 3.0, 4.0]];
        let y: Vec<Vec<f64>> = vec![vec![1.0, 2.0, 3.0, 4.0], vec![1.0, 2.0, 3.0]];
        let err = measure_ambiguity([x, y]).unwrap_err();
        assert_eq!(
            err,
            FuzzyError::InvalidShape {
                table: 1,
                row: 1,
                source: Box::new(FuzzyError::BoundaryCount(3)),
            }
        );
        assert!(err.is_malformed_number());
    }

    #[test]
    fn test_unordered_row_is_not_sorted() {
        let err = measure_table([[4.0, 3.0, 2.0, 1.0]]).unwrap_err();
        assert!(matches!(
            err,
            FuzzyError::InvalidShape { table: 0, row: 0, ref source }
                if **source == FuzzyError::MalformedBoundaries([4.0, 3.0, 2.0, 1.0])
        ));
    }

    #[test]
    fn test_sample_helpers() {
        let sample: AmbiguitySample = [1.0, 2.0, 3.0].into_iter().collect();
        assert_eq!(sample.len(), 3);
        assert_eq!(sample.mean(), Some(2.0));
        assert_eq!(AsRef::<[f64]>::as_ref(&sample), &[1.0, 2.0, 3.0]);
        assert_eq!(sample.clone().into_inner(), vec![1.0, 2.0, 3.0]);
        assert_eq!(AmbiguitySample::from(vec![1.0, 2.0, 3.0]), sample);
        assert_eq!(AmbiguitySample::new(vec![]), AmbiguitySample::default());
    }
}
