use crate::binning::{histogram_counts, quantile_breakpoints};
use crate::error::DriftError;
use ndarray::ArrayView1;

pub const DEFAULT_PSI_BINS: usize = 10;

/// Population Stability Index between a baseline (`expected`) and a
/// production (`actual`) sample.
///
/// Breakpoints are quantiles of `expected` only, so the bins always reflect
/// the baseline distribution. Bin percentages use additive smoothing,
/// `(count + 1) / (n + num_bins)`, which keeps every log-ratio finite even
/// when a bin receives no observations. A baseline that collapses to fewer
/// than two distinct breakpoints (a constant column) yields PSI 0: no shift
/// is measurable against a constant.
pub fn population_stability_index(
    expected: &ArrayView1<f64>,
    actual: &ArrayView1<f64>,
    bins: usize,
) -> Result<f64, DriftError> {
    if expected.is_empty() || actual.is_empty() {
        return Err(DriftError::InsufficientDataError(
            "PSI requires non-empty expected and actual collections".to_string(),
        ));
    }

    let breakpoints = quantile_breakpoints(expected, bins)?;
    if breakpoints.len() < 2 {
        return Ok(0.0);
    }

    let num_bins = breakpoints.len() - 1;
    let expected_counts = histogram_counts(expected, &breakpoints);
    let actual_counts = histogram_counts(actual, &breakpoints);

    let expected_total = expected.len() as f64 + num_bins as f64;
    let actual_total = actual.len() as f64 + num_bins as f64;

    let psi = expected_counts
        .iter()
        .zip(actual_counts.iter())
        .map(|(&expected_count, &actual_count)| {
            let expected_pct = (expected_count as f64 + 1.0) / expected_total;
            let actual_pct = (actual_count as f64 + 1.0) / actual_total;
            (actual_pct - expected_pct) * (actual_pct / expected_pct).ln()
        })
        .sum();

    Ok(psi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::Array1;
    use ndarray_rand::rand_distr::Uniform;
    use ndarray_rand::RandomExt;

    #[test]
    fn test_psi_identical_collections_is_zero() {
        let data = Array1::random(500, Uniform::new(0.0, 10.0));

        let psi =
            population_stability_index(&data.view(), &data.view(), DEFAULT_PSI_BINS).unwrap();

        // identical same-length samples bin identically, so every term is 0
        assert_relative_eq!(psi, 0.0);
    }

    #[test]
    fn test_psi_constant_baseline_is_zero() {
        let expected = Array1::from_vec(vec![1.0; 10]);
        let actual = Array1::from_vec(vec![1.0; 10]);

        let psi =
            population_stability_index(&expected.view(), &actual.view(), DEFAULT_PSI_BINS).unwrap();

        assert_relative_eq!(psi, 0.0);
    }

    #[test]
    fn test_psi_large_shift_is_significant() {
        let expected = Array1::random(1000, Uniform::new(0.0, 10.0));
        let actual = &expected + 50.0;

        let psi =
            population_stability_index(&expected.view(), &actual.view(), DEFAULT_PSI_BINS).unwrap();

        assert!(psi >= 0.25, "expected significant PSI, got {psi}");
    }

    #[test]
    fn test_psi_is_non_negative_for_mild_shift() {
        let expected = Array1::random(1000, Uniform::new(0.0, 10.0));
        let actual = Array1::random(1000, Uniform::new(0.5, 10.5));

        let psi =
            population_stability_index(&expected.view(), &actual.view(), DEFAULT_PSI_BINS).unwrap();

        assert!(psi >= 0.0);
    }

    #[test]
    fn test_psi_stabilizes_with_bin_count() {
        let expected = Array1::random(2000, Uniform::new(0.0, 10.0));
        let actual = Array1::random(2000, Uniform::new(1.0, 11.0));

        let psi_10 =
            population_stability_index(&expected.view(), &actual.view(), 10).unwrap();
        let psi_40 =
            population_stability_index(&expected.view(), &actual.view(), 40).unwrap();

        // more bins shouldn't blow the measurement up for well-behaved data
        assert!((psi_40 - psi_10).abs() < psi_10.max(0.5));
    }

    #[test]
    fn test_psi_empty_input_fails() {
        let data = Array1::from_vec(vec![1.0, 2.0]);
        let empty = Array1::from_vec(Vec::<f64>::new());

        assert!(population_stability_index(&data.view(), &empty.view(), 10).is_err());
        assert!(population_stability_index(&empty.view(), &data.view(), 10).is_err());
    }
}
