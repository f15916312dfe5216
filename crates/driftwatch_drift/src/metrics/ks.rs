use crate::error::DriftError;
use ndarray::ArrayView1;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KsTestResult {
    pub statistic: f64,
    pub p_value: f64,
}

/// Two-sample Kolmogorov-Smirnov test.
///
/// The statistic is the exact maximum absolute gap between the two empirical
/// CDFs, evaluated at every distinct sample value. The p-value is the
/// asymptotic Kolmogorov approximation at
/// `lambda = sqrt(n1 * n2 / (n1 + n2)) * D`.
pub fn ks_two_sample(
    reference: &ArrayView1<f64>,
    current: &ArrayView1<f64>,
) -> Result<KsTestResult, DriftError> {
    if reference.is_empty() || current.is_empty() {
        return Err(DriftError::InsufficientDataError(
            "KS test requires non-empty reference and current collections".to_string(),
        ));
    }

    let mut ref_sorted: Vec<f64> = reference.iter().copied().collect();
    let mut cur_sorted: Vec<f64> = current.iter().copied().collect();
    ref_sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    cur_sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    let n1 = ref_sorted.len();
    let n2 = cur_sorted.len();

    let mut statistic = 0.0_f64;
    let (mut i, mut j) = (0_usize, 0_usize);

    // walk both samples, consuming every tie of the next distinct value
    // before comparing the CDFs
    while i < n1 && j < n2 {
        let x = if ref_sorted[i] < cur_sorted[j] {
            ref_sorted[i]
        } else {
            cur_sorted[j]
        };

        while i < n1 && ref_sorted[i] == x {
            i += 1;
        }
        while j < n2 && cur_sorted[j] == x {
            j += 1;
        }

        let diff = (i as f64 / n1 as f64 - j as f64 / n2 as f64).abs();
        if diff > statistic {
            statistic = diff;
        }
    }

    let en = ((n1 * n2) as f64 / (n1 + n2) as f64).sqrt();
    let p_value = kolmogorov_survival(en * statistic);

    Ok(KsTestResult { statistic, p_value })
}

/// Survival function of the Kolmogorov distribution:
/// `P(D > d) = 2 * sum_{k>=1} (-1)^{k-1} * exp(-2 * k^2 * lambda^2)`.
fn kolmogorov_survival(lambda: f64) -> f64 {
    if lambda <= 0.0 {
        return 1.0;
    }

    let mut sum = 0.0;
    for k in 1..=100 {
        let sign = if k % 2 == 1 { 1.0 } else { -1.0 };
        let term = sign * (-2.0 * f64::from(k * k) * lambda.powi(2)).exp();
        sum += term;
        if term.abs() < 1e-10 {
            break;
        }
    }

    (2.0 * sum).clamp(0.0, 1.0)
}
