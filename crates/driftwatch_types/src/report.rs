use crate::dataset::FeatureKind;
use crate::error::UtilError;
use crate::util::{FileName, ProfileFuncs};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Display;
use std::path::{Path, PathBuf};

/// Ordered drift severity levels assigned by the severity policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DriftSeverity {
    None,
    Moderate,
    Significant,
}

impl Display for DriftSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriftSeverity::None => write!(f, "none"),
            DriftSeverity::Moderate => write!(f, "moderate"),
            DriftSeverity::Significant => write!(f, "significant"),
        }
    }
}

/// Per-feature drift metrics. Exactly one metric subset is populated
/// depending on the feature kind; inapplicable metrics stay `None` so that
/// "not computed" is never confused with a zero reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureDriftResult {
    pub feature: String,
    pub kind: FeatureKind,
    pub psi: Option<f64>,
    pub ks_statistic: Option<f64>,
    pub ks_pvalue: Option<f64>,
    pub js_divergence: Option<f64>,
    pub chi2: Option<f64>,
    pub chi2_pvalue: Option<f64>,
    pub cramers_v: Option<f64>,
    pub severity: DriftSeverity,
}

impl FeatureDriftResult {
    pub fn numeric(
        feature: impl Into<String>,
        psi: f64,
        ks_statistic: f64,
        ks_pvalue: f64,
        js_divergence: Option<f64>,
        severity: DriftSeverity,
    ) -> Self {
        FeatureDriftResult {
            feature: feature.into(),
            kind: FeatureKind::Numeric,
            psi: Some(psi),
            ks_statistic: Some(ks_statistic),
            ks_pvalue: Some(ks_pvalue),
            js_divergence,
            chi2: None,
            chi2_pvalue: None,
            cramers_v: None,
            severity,
        }
    }

    pub fn categorical(
        feature: impl Into<String>,
        chi2: f64,
        chi2_pvalue: f64,
        cramers_v: f64,
        severity: DriftSeverity,
    ) -> Self {
        FeatureDriftResult {
            feature: feature.into(),
            kind: FeatureKind::Categorical,
            psi: None,
            ks_statistic: None,
            ks_pvalue: None,
            js_divergence: None,
            chi2: Some(chi2),
            chi2_pvalue: Some(chi2_pvalue),
            cramers_v: Some(cramers_v),
            severity,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityCounts {
    pub none: usize,
    pub moderate: usize,
    pub significant: usize,
}

impl SeverityCounts {
    pub fn get(&self, severity: DriftSeverity) -> usize {
        match severity {
            DriftSeverity::None => self.none,
            DriftSeverity::Moderate => self.moderate,
            DriftSeverity::Significant => self.significant,
        }
    }

    fn increment(&mut self, severity: DriftSeverity) {
        match severity {
            DriftSeverity::None => self.none += 1,
            DriftSeverity::Moderate => self.moderate += 1,
            DriftSeverity::Significant => self.significant += 1,
        }
    }
}

/// Output of a single analysis run. Row order matches the analyzer's
/// iteration order; the report is never mutated after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriftReport {
    pub features: Vec<FeatureDriftResult>,
    pub created_at: DateTime<Utc>,
}

impl DriftReport {
    pub fn new(features: Vec<FeatureDriftResult>) -> Self {
        DriftReport {
            features,
            created_at: Utc::now(),
        }
    }

    pub fn severity_counts(&self) -> SeverityCounts {
        let mut counts = SeverityCounts::default();
        for result in &self.features {
            counts.increment(result.severity);
        }
        counts
    }

    pub fn significant_features(&self) -> Vec<&str> {
        self.features
            .iter()
            .filter(|r| r.severity == DriftSeverity::Significant)
            .map(|r| r.feature.as_str())
            .collect()
    }

    pub fn summary(&self) -> DriftSummary {
        DriftSummary {
            timestamp: self.created_at,
            total_features: self.features.len(),
            severity_counts: self.severity_counts(),
            significant_features: self
                .significant_features()
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }

    pub fn to_pretty_json(&self) -> Result<String, UtilError> {
        ProfileFuncs::to_pretty_json(self)
    }

    pub fn save_to_json(&self, path: Option<PathBuf>) -> Result<PathBuf, UtilError> {
        ProfileFuncs::save_to_json(self, path, FileName::DriftReport.to_str())
    }

    pub fn load_from_json_file(path: &Path) -> Result<Self, UtilError> {
        ProfileFuncs::load_from_json(path)
    }
}

/// Timestamped terminal summary consumed by downstream reporting and
/// alerting. A snapshot only; it is never fed back into the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriftSummary {
    pub timestamp: DateTime<Utc>,
    pub total_features: usize,
    pub severity_counts: SeverityCounts,
    pub significant_features: Vec<String>,
}

impl DriftSummary {
    pub fn to_pretty_json(&self) -> Result<String, UtilError> {
        ProfileFuncs::to_pretty_json(self)
    }

    pub fn save_to_json(&self, path: Option<PathBuf>) -> Result<PathBuf, UtilError> {
        ProfileFuncs::save_to_json(self, path, FileName::DriftSummary.to_str())
    }

    pub fn load_from_json_file(path: &Path) -> Result<Self, UtilError> {
        ProfileFuncs::load_from_json(path)
    }
}
