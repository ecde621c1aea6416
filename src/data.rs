//! Data
//!
//! Tabular input handed over by the dataset collaborator: named columns, each either
//! numeric or categorical, plus the name of the class column.
use crate::errors::FuzzyError;
use serde::{Deserialize, Serialize};

/// Type of a column, as decided by the upstream feature typing.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Numeric,
    Categorical,
}

/// Raw values of one column.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub enum Column {
    Numeric(Vec<f64>),
    Categorical(Vec<String>),
}

impl Column {
    pub fn len(&self) -> usize {
        match self {
            Column::Numeric(v) => v.len(),
            Column::Categorical(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn column_type(&self) -> ColumnType {
        match self {
            Column::Numeric(_) => ColumnType::Numeric,
            Column::Categorical(_) => ColumnType::Categorical,
        }
    }

    /// Distinct values of a categorical column, in order of first appearance.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        if let Column::Categorical(values) = self {
            for v in values {
                if !seen.contains(&v.as_str()) {
                    seen.push(v.as_str());
                }
            }
        }
        seen
    }
}

/// A dataset with its columns kept in insertion order.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Dataset {
    columns: Vec<(String, Column)>,
    class_name: String,
    rows: usize,
}

impl Dataset {
    /// Create a new dataset.
    ///
    /// * `columns` - Named columns, all of the same length.
    /// * `class_name` - Name of the class column, it has to be categorical.
    pub fn new(columns: Vec<(String, Column)>, class_name: &str) -> Result<Self, FuzzyError> {
        let rows = columns.first().map(|(_, c)| c.len()).unwrap_or(0);
        for (name, column) in &columns {
            if column.len() != rows {
                return Err(FuzzyError::LengthMismatch(name.clone(), rows, column.len()));
            }
        }
        match columns.iter().find(|(name, _)| name == class_name) {
            None => return Err(FuzzyError::MissingColumn(class_name.to_string())),
            Some((_, Column::Numeric(_))) => return Err(FuzzyError::NotCategorical(class_name.to_string())),
            Some(_) => {}
        }
        Ok(Dataset {
            columns,
            class_name: class_name.to_string(),
            rows,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Get a column by name.
    pub fn column(&self, name: &str) -> Result<&Column, FuzzyError> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, c)| c)
            .ok_or_else(|| FuzzyError::MissingColumn(name.to_string()))
    }

    /// Values of the class column.
    pub fn class_labels(&self) -> Result<&[String], FuzzyError> {
        match self.column(&self.class_name)? {
            Column::Categorical(v) => Ok(v),
            Column::Numeric(_) => Err(FuzzyError::NotCategorical(self.class_name.clone())),
        }
    }

    /// Numeric feature columns, the class column excluded.
    pub fn numerical_columns(&self) -> Vec<(&str, &[f64])> {
        self.columns
            .iter()
            .filter(|(name, _)| *name != self.class_name)
            .filter_map(|(name, column)| match column {
                Column::Numeric(v) => Some((name.as_str(), v.as_slice())),
                Column::Categorical(_) => None,
            })
            .collect()
    }

    /// Categorical feature columns, the class column excluded.
    pub fn categorical_columns(&self) -> Vec<(&str, &Column)> {
        self.columns
            .iter()
            .filter(|(name, column)| *name != self.class_name && column.column_type() == ColumnType::Categorical)
            .map(|(name, column)| (name.as_str(), column))
            .collect()
    }
}
