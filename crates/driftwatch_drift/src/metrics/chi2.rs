use crate::error::DriftError;
use statrs::distribution::{ChiSquared, ContinuousCDF};
use std::collections::{BTreeSet, HashMap};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Chi2TestResult {
    pub statistic: f64,
    pub p_value: f64,
    pub cramers_v: f64,
}

impl Chi2TestResult {
    /// Degenerate outcome: no measurable association, no evidence of change.
    pub fn no_association() -> Self {
        Chi2TestResult {
            statistic: 0.0,
            p_value: 1.0,
            cramers_v: 0.0,
        }
    }
}

/// Chi-square test of independence on the 2 x k contingency table of
/// category counts (rows = reference/current, columns = observed categories),
/// plus Cramér's V as an effect-size complement.
///
/// The category set is the sorted union of labels seen on either side, so the
/// table layout is deterministic. Yates' continuity correction is applied at
/// one degree of freedom (two categories), matching the standard contingency
/// test defaults. One or zero distinct categories means the table carries no
/// information, which reports as no association.
pub fn chi_square_test(
    reference: &[String],
    current: &[String],
) -> Result<Chi2TestResult, DriftError> {
    if reference.is_empty() || current.is_empty() {
        return Err(DriftError::InsufficientDataError(
            "chi-square test requires non-empty reference and current collections".to_string(),
        ));
    }

    let categories: Vec<&String> = reference
        .iter()
        .chain(current.iter())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    if categories.len() <= 1 {
        return Ok(Chi2TestResult::no_association());
    }

    let ref_counts = count_labels(reference);
    let cur_counts = count_labels(current);

    let observed: Vec<[f64; 2]> = categories
        .iter()
        .map(|category| {
            [
                ref_counts.get(*category).copied().unwrap_or(0) as f64,
                cur_counts.get(*category).copied().unwrap_or(0) as f64,
            ]
        })
        .collect();

    let row_totals = [reference.len() as f64, current.len() as f64];
    let n = row_totals[0] + row_totals[1];
    let dof = categories.len() - 1;

    let mut statistic = 0.0;
    for cell in &observed {
        let column_total = cell[0] + cell[1];
        for (row, &count) in cell.iter().enumerate() {
            let expected = row_totals[row] * column_total / n;
            let observed_count = if dof == 1 {
                yates_adjust(count, expected)
            } else {
                count
            };
            statistic += (observed_count - expected).powi(2) / expected;
        }
    }

    let p_value = if statistic <= 0.0 {
        1.0
    } else {
        ChiSquared::new(dof as f64)
            .map_err(|e| DriftError::ChiSquaredError(e.to_string()))?
            .sf(statistic)
    };

    let min_dim = std::cmp::min(2, categories.len()) - 1;
    let cramers_v = (statistic / (n * min_dim as f64)).sqrt();

    Ok(Chi2TestResult {
        statistic,
        p_value,
        cramers_v,
    })
}

// Yates: move the observed count half a unit toward its expectation. An
// exact match stays put.
fn yates_adjust(observed: f64, expected: f64) -> f64 {
    let diff = expected - observed;
    if diff == 0.0 {
        observed
    } else {
        observed + 0.5 * diff.signum()
    }
}

fn count_labels(labels: &[String]) -> HashMap<&String, usize> {
    let mut counts = HashMap::new();
    for label in labels {
        *counts.entry(label).or_insert(0) += 1;
    }
    counts
}
