use crate::error::DataError;
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureKind {
    Numeric,
    Categorical,
}

impl Display for FeatureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureKind::Numeric => write!(f, "numeric"),
            FeatureKind::Categorical => write!(f, "categorical"),
        }
    }
}

/// Column storage for a single feature. Numeric columns use NaN to mark
/// missing values; categorical columns use `None`.
#[derive(Debug, Clone)]
pub enum ColumnData {
    Numeric(Array1<f64>),
    Categorical(Vec<Option<String>>),
}

impl ColumnData {
    pub fn kind(&self) -> FeatureKind {
        match self {
            ColumnData::Numeric(_) => FeatureKind::Numeric,
            ColumnData::Categorical(_) => FeatureKind::Categorical,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ColumnData::Numeric(values) => values.len(),
            ColumnData::Categorical(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone)]
pub struct Column {
    pub name: String,
    pub data: ColumnData,
}

/// An ordered collection of named, typed columns with a fixed row count.
/// Column insertion order is preserved and drives report row order downstream.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    columns: Vec<Column>,
}

impl Dataset {
    pub fn new() -> Self {
        Dataset::default()
    }

    pub fn add_numeric(
        &mut self,
        name: impl Into<String>,
        values: Array1<f64>,
    ) -> Result<(), DataError> {
        self.add_column(Column {
            name: name.into(),
            data: ColumnData::Numeric(values),
        })
    }

    pub fn add_categorical(
        &mut self,
        name: impl Into<String>,
        values: Vec<Option<String>>,
    ) -> Result<(), DataError> {
        self.add_column(Column {
            name: name.into(),
            data: ColumnData::Categorical(values),
        })
    }

    fn add_column(&mut self, column: Column) -> Result<(), DataError> {
        if self.columns.iter().any(|c| c.name == column.name) {
            return Err(DataError::DuplicateColumnError(column.name));
        }

        if let Some(first) = self.columns.first() {
            if first.data.len() != column.data.len() {
                return Err(DataError::ColumnLengthError {
                    column: column.name,
                    expected: first.data.len(),
                    actual: column.data.len(),
                });
            }
        }

        self.columns.push(column);
        Ok(())
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn num_rows(&self) -> usize {
        self.columns.first().map_or(0, |c| c.data.len())
    }
}
