use crate::error::DriftError;
use ndarray::ArrayView1;
use num_traits::{Float, FromPrimitive};

/// Computes quantile breakpoints for binning using the R-7 method
/// (Hyndman & Fan Type 7), the default quantile definition in R and numpy.
///
/// Returns `num_bins + 1` edges covering the 0th through 100th percentile of
/// `arr`, with exact duplicates removed. A constant-valued input therefore
/// collapses to a single edge, which callers treat as "no measurable bins".
///
/// Hyndman, R. J. and Fan, Y. (1996) "Sample quantiles in statistical
/// packages," The American Statistician, 50(4), pp. 361-365.
pub fn quantile_breakpoints<F>(
    arr: &ArrayView1<F>,
    num_bins: usize,
) -> Result<Vec<F>, DriftError>
where
    F: Float + FromPrimitive,
{
    if num_bins < 2 {
        return Err(DriftError::InvalidParameterError(
            "num_bins must be at least 2".to_string(),
        ));
    }

    if arr.is_empty() {
        return Err(DriftError::InsufficientDataError(
            "cannot compute quantile breakpoints of an empty collection".to_string(),
        ));
    }

    let mut data: Vec<F> = arr.to_vec();
    data.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let n = data.len();
    let mut edges = Vec::with_capacity(num_bins + 1);

    for i in 0..=num_bins {
        let p = i as f64 / num_bins as f64;

        // R-7: m = 1 - p, j = floor(np + m), h = np + m - j,
        // Q(p) = (1 - h) * x[j] + h * x[j + 1]
        let m = 1.0 - p;
        let np_plus_m = (n as f64) * p + m;
        let j = np_plus_m.floor() as usize;
        let h = np_plus_m - (j as f64);

        let j_zero_indexed = if j > 0 { j - 1 } else { 0 };
        let j_plus_1_zero_indexed = std::cmp::min(j_zero_indexed + 1, n - 1);

        let one_minus_h = F::from_f64(1.0 - h).unwrap_or_else(F::zero);
        let h_f = F::from_f64(h).unwrap_or_else(F::zero);

        let quantile = one_minus_h * data[j_zero_indexed] + h_f * data[j_plus_1_zero_indexed];

        edges.push(quantile);
    }

    // quantiles are nondecreasing, so adjacent dedup removes all duplicates
    edges.dedup_by(|a, b| a == b);

    Ok(edges)
}

/// Histograms `data` into the bins defined by strictly increasing `edges`,
/// numpy-style: every bin is half-open except the last, which also includes
/// the upper edge. Values outside `[edges[0], edges[last]]` are not counted.
pub fn histogram_counts(data: &ArrayView1<f64>, edges: &[f64]) -> Vec<usize> {
    let num_bins = edges.len() - 1;
    let mut counts = vec![0usize; num_bins];

    for &value in data {
        if value < edges[0] || value > edges[num_bins] {
            continue;
        }
        if value == edges[num_bins] {
            counts[num_bins - 1] += 1;
            continue;
        }
        let idx = edges.partition_point(|&edge| edge <= value);
        counts[idx - 1] += 1;
    }

    counts
}

/// Equal-width bin edges spanning `[min, max]`.
pub fn linspace_edges(min: f64, max: f64, num_bins: usize) -> Vec<f64> {
    (0..=num_bins)
        .map(|i| min + (max - min) * (i as f64) / (num_bins as f64))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::Array1;

    #[test]
    fn test_quantile_breakpoints_include_extrema() {
        let data = Array1::from_vec((1..=10).map(f64::from).collect());
        let edges = quantile_breakpoints(&data.view(), 2).unwrap();

        assert_eq!(edges.len(), 3);
        assert_relative_eq!(edges[0], 1.0);
        assert_relative_eq!(edges[1], 5.5);
        assert_relative_eq!(edges[2], 10.0);
    }

    #[test]
    fn test_quantile_breakpoints_interpolation() {
        // R-7 on [1, 2, 3, 4] at p = 0.25 gives 1.75
        let data = Array1::from_vec(vec![1.0, 2.0, 3.0, 4.0]);
        let edges = quantile_breakpoints(&data.view(), 4).unwrap();

        assert_eq!(edges.len(), 5);
        assert_relative_eq!(edges[1], 1.75);
        assert_relative_eq!(edges[2], 2.5);
        assert_relative_eq!(edges[3], 3.25);
    }

    #[test]
    fn test_quantile_breakpoints_constant_collapse() {
        let data = Array1::from_vec(vec![7.0; 25]);
        let edges = quantile_breakpoints(&data.view(), 10).unwrap();

        assert_eq!(edges.len(), 1);
    }

    #[test]
    fn test_quantile_breakpoints_rejects_bad_input() {
        let data = Array1::from_vec(vec![1.0, 2.0]);
        assert!(quantile_breakpoints(&data.view(), 1).is_err());

        let empty = Array1::from_vec(Vec::<f64>::new());
        assert!(quantile_breakpoints(&empty.view(), 10).is_err());
    }

    #[test]
    fn test_histogram_counts_edge_semantics() {
        let edges = vec![0.0, 1.0, 2.0, 3.0];
        let data = Array1::from_vec(vec![-0.5, 0.0, 0.5, 1.0, 2.0, 3.0, 3.5]);

        let counts = histogram_counts(&data.view(), &edges);

        // -0.5 and 3.5 fall outside; 1.0 opens the second bin;
        // 3.0 lands in the closed last bin
        assert_eq!(counts, vec![2, 1, 2]);
    }

    #[test]
    fn test_linspace_edges_span() {
        let edges = linspace_edges(0.0, 3.0, 3);
        assert_eq!(edges, vec![0.0, 1.0, 2.0, 3.0]);
    }
}
