use driftwatch_types::DriftSeverity;

pub const PSI_MODERATE_THRESHOLD: f64 = 0.10;
pub const PSI_SIGNIFICANT_THRESHOLD: f64 = 0.25;
pub const KS_ALPHA: f64 = 0.05;
pub const KS_SMALL_SHIFT_STATISTIC: f64 = 0.20;
pub const CHI2_ALPHA: f64 = 0.05;
pub const CRAMERS_V_MODERATE_THRESHOLD: f64 = 0.10;
pub const CRAMERS_V_SIGNIFICANT_THRESHOLD: f64 = 0.30;

/// Severity for a numeric feature.
///
/// Severity requires corroboration between the magnitude measure (PSI) and
/// the significance measure (KS): a large PSI is downgraded to moderate when
/// the KS test reads it as a small shift. JS divergence is diagnostic context
/// and does not enter the decision.
pub fn classify_numeric(psi: f64, ks_statistic: f64, ks_pvalue: f64) -> DriftSeverity {
    if psi < PSI_MODERATE_THRESHOLD && ks_pvalue >= KS_ALPHA {
        DriftSeverity::None
    } else if psi < PSI_SIGNIFICANT_THRESHOLD
        || (ks_pvalue < KS_ALPHA && ks_statistic < KS_SMALL_SHIFT_STATISTIC)
    {
        DriftSeverity::Moderate
    } else {
        DriftSeverity::Significant
    }
}

/// Severity for a categorical feature: significant drift needs both a
/// significant chi-square p-value and a large Cramér's V effect size.
pub fn classify_categorical(chi2_pvalue: f64, cramers_v: f64) -> DriftSeverity {
    if chi2_pvalue >= CHI2_ALPHA && cramers_v < CRAMERS_V_MODERATE_THRESHOLD {
        DriftSeverity::None
    } else if chi2_pvalue < CHI2_ALPHA && cramers_v >= CRAMERS_V_SIGNIFICANT_THRESHOLD {
        DriftSeverity::Significant
    } else {
        DriftSeverity::Moderate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_none() {
        assert_eq!(classify_numeric(0.0, 0.0, 1.0), DriftSeverity::None);
        assert_eq!(classify_numeric(0.09, 0.5, 0.05), DriftSeverity::None);
    }

    #[test]
    fn test_numeric_moderate() {
        // PSI below the significant threshold
        assert_eq!(classify_numeric(0.15, 0.05, 0.5), DriftSeverity::Moderate);
        // small PSI but significant KS p-value
        assert_eq!(classify_numeric(0.05, 0.1, 0.01), DriftSeverity::Moderate);
        // large PSI tolerated because KS reads a small shift
        assert_eq!(classify_numeric(0.4, 0.15, 0.01), DriftSeverity::Moderate);
    }

    #[test]
    fn test_numeric_significant() {
        assert_eq!(classify_numeric(0.3, 0.5, 0.001), DriftSeverity::Significant);
        // large PSI with an insignificant KS p-value still escalates
        assert_eq!(classify_numeric(0.3, 0.5, 0.5), DriftSeverity::Significant);
    }

    #[test]
    fn test_numeric_boundaries() {
        // PSI exactly at 0.10 is no longer "none"
        assert_eq!(classify_numeric(0.10, 0.0, 1.0), DriftSeverity::Moderate);
        // PSI exactly at 0.25 with no KS exception escalates
        assert_eq!(classify_numeric(0.25, 0.5, 0.5), DriftSeverity::Significant);
        // KS statistic exactly at 0.20 does not qualify as a small shift
        assert_eq!(classify_numeric(0.25, 0.20, 0.01), DriftSeverity::Significant);
    }

    #[test]
    fn test_categorical_levels() {
        assert_eq!(classify_categorical(0.9, 0.01), DriftSeverity::None);
        assert_eq!(classify_categorical(0.01, 0.15), DriftSeverity::Moderate);
        // strong effect size without significance stays moderate
        assert_eq!(classify_categorical(0.5, 0.5), DriftSeverity::Moderate);
        assert_eq!(classify_categorical(0.01, 0.5), DriftSeverity::Significant);
    }

    #[test]
    fn test_categorical_boundaries() {
        assert_eq!(classify_categorical(0.05, 0.05), DriftSeverity::None);
        assert_eq!(classify_categorical(0.05, 0.10), DriftSeverity::Moderate);
        assert_eq!(classify_categorical(0.049, 0.30), DriftSeverity::Significant);
        assert_eq!(classify_categorical(0.049, 0.29), DriftSeverity::Moderate);
    }

    #[test]
    fn test_policy_is_deterministic() {
        let first = classify_numeric(0.2, 0.18, 0.03);
        let second = classify_numeric(0.2, 0.18, 0.03);
        assert_eq!(first, second);
    }
}
