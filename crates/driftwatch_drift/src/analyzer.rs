use crate::classifier::{feature_schema, FeatureSchema};
use crate::error::DriftError;
use crate::metrics::{
    chi_square_test, jensen_shannon_distance, ks_two_sample, population_stability_index,
    DEFAULT_JS_BINS, DEFAULT_PSI_BINS,
};
use crate::severity::{classify_categorical, classify_numeric};
use driftwatch_types::{
    ColumnData, Dataset, DriftReport, DriftSeverity, FeatureDriftResult, FeatureKind,
};
use itertools::Itertools;
use ndarray::Array1;
use rayon::prelude::*;
use std::collections::BTreeSet;
use tracing::debug;

/// Orchestrates per-feature drift analysis across a reference/current dataset
/// pair. Stateless between runs; every invocation produces a fresh report.
pub struct DriftAnalyzer {
    psi_bins: usize,
    js_bins: usize,
}

impl Default for DriftAnalyzer {
    fn default() -> Self {
        DriftAnalyzer {
            psi_bins: DEFAULT_PSI_BINS,
            js_bins: DEFAULT_JS_BINS,
        }
    }
}

impl DriftAnalyzer {
    pub fn new() -> Self {
        DriftAnalyzer::default()
    }

    pub fn with_bins(psi_bins: usize, js_bins: usize) -> Result<Self, DriftError> {
        if psi_bins < 2 {
            return Err(DriftError::InvalidParameterError(
                "psi_bins must be at least 2".to_string(),
            ));
        }
        if js_bins == 0 {
            return Err(DriftError::InvalidParameterError(
                "js_bins must be at least 1".to_string(),
            ));
        }

        Ok(DriftAnalyzer { psi_bins, js_bins })
    }

    /// Computes drift metrics and severity for every non-excluded feature,
    /// returning one report row per feature in dataset column order.
    pub fn analyze(
        &self,
        reference: &Dataset,
        current: &Dataset,
        excluded: &BTreeSet<String>,
    ) -> Result<DriftReport, DriftError> {
        let schema = feature_schema(reference, current, excluded)?;

        debug!(
            features = schema.len(),
            reference_rows = reference.num_rows(),
            current_rows = current.num_rows(),
            "analyzing drift"
        );

        let results = schema
            .iter()
            .collect_vec()
            .into_par_iter()
            .map(|entry| {
                self.analyze_feature(entry, reference, current)
                    .map_err(|e| DriftError::FeatureError {
                        feature: entry.name.clone(),
                        source: Box::new(e),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(DriftReport::new(results))
    }

    fn analyze_feature(
        &self,
        entry: &FeatureSchema,
        reference: &Dataset,
        current: &Dataset,
    ) -> Result<FeatureDriftResult, DriftError> {
        match entry.kind {
            FeatureKind::Numeric => self.analyze_numeric(entry, reference, current),
            FeatureKind::Categorical => self.analyze_categorical(entry, reference, current),
        }
    }

    fn analyze_numeric(
        &self,
        entry: &FeatureSchema,
        reference: &Dataset,
        current: &Dataset,
    ) -> Result<FeatureDriftResult, DriftError> {
        let ref_values = clean_numeric(reference, &entry.name);
        let cur_values = clean_numeric(current, &entry.name);

        // an empty side (all-missing or absent feature) is not evidence of
        // drift; report the degenerate no-drift row instead of erroring
        if ref_values.is_empty() || cur_values.is_empty() {
            debug!(feature = %entry.name, "no usable numeric values, reporting degenerate result");
            return Ok(FeatureDriftResult::numeric(
                entry.name.clone(),
                0.0,
                0.0,
                1.0,
                None,
                DriftSeverity::None,
            ));
        }

        let psi =
            population_stability_index(&ref_values.view(), &cur_values.view(), self.psi_bins)?;
        let ks = ks_two_sample(&ref_values.view(), &cur_values.view())?;
        let js = jensen_shannon_distance(&ref_values.view(), &cur_values.view(), self.js_bins)?;

        let severity = classify_numeric(psi, ks.statistic, ks.p_value);

        Ok(FeatureDriftResult::numeric(
            entry.name.clone(),
            psi,
            ks.statistic,
            ks.p_value,
            Some(js),
            severity,
        ))
    }

    fn analyze_categorical(
        &self,
        entry: &FeatureSchema,
        reference: &Dataset,
        current: &Dataset,
    ) -> Result<FeatureDriftResult, DriftError> {
        let ref_labels = clean_categorical(reference, &entry.name);
        let cur_labels = clean_categorical(current, &entry.name);

        if ref_labels.is_empty() || cur_labels.is_empty() {
            debug!(feature = %entry.name, "no usable categorical values, reporting degenerate result");
            return Ok(FeatureDriftResult::categorical(
                entry.name.clone(),
                0.0,
                1.0,
                0.0,
                DriftSeverity::None,
            ));
        }

        let chi2 = chi_square_test(&ref_labels, &cur_labels)?;
        let severity = classify_categorical(chi2.p_value, chi2.cramers_v);

        Ok(FeatureDriftResult::categorical(
            entry.name.clone(),
            chi2.statistic,
            chi2.p_value,
            chi2.cramers_v,
            severity,
        ))
    }
}

fn clean_numeric(dataset: &Dataset, name: &str) -> Array1<f64> {
    match dataset.column(name).map(|c| &c.data) {
        Some(ColumnData::Numeric(values)) => values.iter().copied().filter(|x| x.is_finite()).collect(),
        _ => Array1::from_vec(Vec::new()),
    }
}

fn clean_categorical(dataset: &Dataset, name: &str) -> Vec<String> {
    match dataset.column(name).map(|c| &c.data) {
        Some(ColumnData::Categorical(values)) => values.iter().flatten().cloned().collect(),
        _ => Vec::new(),
    }
}
