use crate::binning::{histogram_counts, linspace_edges};
use crate::error::DriftError;
use ndarray::ArrayView1;

pub const DEFAULT_JS_BINS: usize = 30;

/// Square-root Jensen-Shannon distance between two numeric samples.
///
/// Unlike PSI, both samples inform the bin range: JS is symmetric, so the
/// shared equal-width edges span the combined min/max. Histograms are
/// normalized with a small additive constant per bin so zero-probability
/// terms never enter the divergence. Natural log throughout, matching the
/// scipy definition, so the result lives in `[0, sqrt(ln 2)]`.
pub fn jensen_shannon_distance(
    reference: &ArrayView1<f64>,
    current: &ArrayView1<f64>,
    bins: usize,
) -> Result<f64, DriftError> {
    if reference.is_empty() || current.is_empty() {
        return Err(DriftError::InsufficientDataError(
            "JS divergence requires non-empty reference and current collections".to_string(),
        ));
    }

    if bins == 0 {
        return Err(DriftError::InvalidParameterError(
            "bins must be at least 1".to_string(),
        ));
    }

    let min_val = reference
        .iter()
        .chain(current.iter())
        .copied()
        .fold(f64::INFINITY, f64::min);
    let max_val = reference
        .iter()
        .chain(current.iter())
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);

    // both samples concentrated on a single point: identical distributions
    if (max_val - min_val).abs() < 1e-10 {
        return Ok(0.0);
    }

    let edges = linspace_edges(min_val, max_val, bins);
    let ref_probs = normalize(&histogram_counts(reference, &edges));
    let cur_probs = normalize(&histogram_counts(current, &edges));

    let mixture: Vec<f64> = ref_probs
        .iter()
        .zip(cur_probs.iter())
        .map(|(&p, &q)| (p + q) / 2.0)
        .collect();

    let divergence =
        (kl_divergence(&ref_probs, &mixture) + kl_divergence(&cur_probs, &mixture)) / 2.0;

    Ok(divergence.max(0.0).sqrt())
}

fn normalize(counts: &[usize]) -> Vec<f64> {
    let epsilon = 1e-10;
    let total: usize = counts.iter().sum();
    let denominator = total as f64 + epsilon * counts.len() as f64;

    counts
        .iter()
        .map(|&count| (count as f64 + epsilon) / denominator)
        .collect()
}

fn kl_divergence(p: &[f64], q: &[f64]) -> f64 {
    p.iter()
        .zip(q.iter())
        .map(|(&pi, &qi)| if pi > 0.0 { pi * (pi / qi).ln() } else { 0.0 })
        .sum()
}
