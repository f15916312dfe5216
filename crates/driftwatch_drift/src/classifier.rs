use crate::error::DriftError;
use driftwatch_types::{Dataset, FeatureKind};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureSchema {
    pub name: String,
    pub kind: FeatureKind,
}

/// Builds the ordered analysis plan for a dataset pair: reference columns in
/// dataset order, then any current-only columns, minus the explicit exclusion
/// set. The exclusion set is always caller input, never inferred, so the plan
/// is reproducible across runs.
///
/// A feature present in both datasets with disagreeing kinds is a fatal
/// schema mismatch; types are never silently coerced.
pub fn feature_schema(
    reference: &Dataset,
    current: &Dataset,
    excluded: &BTreeSet<String>,
) -> Result<Vec<FeatureSchema>, DriftError> {
    let mut schema = Vec::with_capacity(reference.num_columns());

    for column in reference.columns() {
        if excluded.contains(&column.name) {
            continue;
        }

        let kind = column.data.kind();

        if let Some(other) = current.column(&column.name) {
            if other.data.kind() != kind {
                return Err(DriftError::SchemaMismatchError {
                    feature: column.name.clone(),
                    reference: kind,
                    current: other.data.kind(),
                });
            }
        }

        schema.push(FeatureSchema {
            name: column.name.clone(),
            kind,
        });
    }

    // features only the current dataset knows about still get exactly one row
    for column in current.columns() {
        if excluded.contains(&column.name) || reference.column(&column.name).is_some() {
            continue;
        }

        schema.push(FeatureSchema {
            name: column.name.clone(),
            kind: column.data.kind(),
        });
    }

    Ok(schema)
}
