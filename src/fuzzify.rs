//! Fuzzify
//!
//! Turn every feature column of a dataset into a table of membership degrees:
//! triangular fuzzy sets for numeric columns and crisp sets for categorical ones.
use crate::config::FuzzifierConfig;
use crate::data::{Column, Dataset};
use crate::discretize::{get_fuzzy_points, FuzzyPoints};
use crate::errors::FuzzyError;
use crate::membership::{get_fuzzy_triangle, MembershipTable};
use crate::rule::InstanceMembership;
use crate::variable::FuzzyVariable;
use hashbrown::HashMap;
use rayon::prelude::*;

/// Membership tables of every feature column of a dataset.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FuzzySetTable {
    columns: HashMap<String, MembershipTable>,
    rows: usize,
}

impl FuzzySetTable {
    pub fn get(&self, column: &str) -> Option<&MembershipTable> {
        self.columns.get(column)
    }

    pub fn columns(&self) -> impl Iterator<Item = (&str, &MembershipTable)> {
        self.columns.iter().map(|(c, t)| (c.as_str(), t))
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Membership of a single row to every fuzzy set of every column,
    /// `None` if the row is out of range.
    pub fn instance(&self, row: usize) -> Option<InstanceMembership> {
        if row >= self.rows {
            return None;
        }
        Some(
            self.columns
                .iter()
                .map(|(column, table)| {
                    let degrees = table.iter().map(|(label, d)| (label.to_string(), d[row])).collect();
                    (column.clone(), degrees)
                })
                .collect(),
        )
    }
}

/// Labels of the fuzzy sets of a numeric column: the configured ones, or the
/// peaks themselves.
fn column_labels(config: &FuzzifierConfig, column: &str, points: &[f64]) -> Result<Vec<String>, FuzzyError> {
    match config.labels.get(column) {
        Some(labels) if labels.len() == points.len() => Ok(labels.clone()),
        Some(labels) => Err(FuzzyError::InvalidParameter(
            format!("labels of {}", column),
            format!("{} labels", points.len()),
            labels.len().to_string(),
        )),
        None => Ok(points.iter().map(|p| format!("{}", p)).collect()),
    }
}

/// Crisp membership of a categorical column, one set per distinct value.
fn categorical_table(column: &Column) -> MembershipTable {
    let mut table = MembershipTable::new();
    if let Column::Categorical(values) = column {
        for category in column.categories() {
            let degrees = values.iter().map(|v| if v == category { 1.0 } else { 0.0 }).collect();
            table.insert(category, degrees);
        }
    }
    table
}

/// Get the fuzzy sets of every feature column of a dataset, and the membership
/// degree of every row to each of them.
///
/// * `dataset` - Dataset to fuzzify.
/// * `fuzzy_points` - Peaks of the triangles of every numeric column.
/// * `config` - Labels of the fuzzy sets and parallelism.
pub fn get_fuzzy_set_table(
    dataset: &Dataset,
    fuzzy_points: &FuzzyPoints,
    config: &FuzzifierConfig,
) -> Result<FuzzySetTable, FuzzyError> {
    let numerical = dataset.numerical_columns();
    let categorical = dataset.categorical_columns();

    let numeric_table = |(name, values): &(&str, &[f64])| -> Result<(String, MembershipTable), FuzzyError> {
        let points = fuzzy_points
            .get(*name)
            .ok_or_else(|| FuzzyError::MissingColumn(name.to_string()))?;
        let labels = column_labels(config, name, points)?;
        let divisions: Vec<(&str, f64)> = labels.iter().map(|l| l.as_str()).zip(points.iter().copied()).collect();
        Ok((name.to_string(), get_fuzzy_triangle(values, &divisions)))
    };
    let categorical_entry = |(name, column): &(&str, &Column)| (name.to_string(), categorical_table(column));

    let (numeric, crisp): (Vec<(String, MembershipTable)>, Vec<(String, MembershipTable)>) = if config.parallel {
        (
            numerical.par_iter().map(numeric_table).collect::<Result<_, _>>()?,
            categorical.par_iter().map(categorical_entry).collect(),
        )
    } else {
        (
            numerical.iter().map(numeric_table).collect::<Result<_, _>>()?,
            categorical.iter().map(categorical_entry).collect(),
        )
    };

    Ok(FuzzySetTable {
        columns: numeric.into_iter().chain(crisp).collect(),
        rows: dataset.rows(),
    })
}

/// Compute the peaks of every numeric column with the configured method and
/// fuzzify the whole dataset with them.
pub fn fuzzify_dataset(dataset: &Dataset, config: &FuzzifierConfig) -> Result<(FuzzyPoints, FuzzySetTable), FuzzyError> {
    let fuzzy_points = get_fuzzy_points(dataset, config)?;
    let table = get_fuzzy_set_table(dataset, &fuzzy_points, config)?;
    Ok((fuzzy_points, table))
}

/// Fuzzy variables matching the fuzzy sets `get_fuzzy_set_table` creates, so
/// rules learned on a dataset can be mapped between partitions.
pub fn get_fuzzy_variables(
    dataset: &Dataset,
    fuzzy_points: &FuzzyPoints,
    config: &FuzzifierConfig,
) -> Result<Vec<FuzzyVariable>, FuzzyError> {
    let mut variables = Vec::new();
    for (name, _) in dataset.numerical_columns() {
        let points = fuzzy_points
            .get(name)
            .ok_or_else(|| FuzzyError::MissingColumn(name.to_string()))?;
        let labels = column_labels(config, name, points)?;
        variables.push(FuzzyVariable::from_points(name, &labels, points));
    }
    for (name, column) in dataset.categorical_columns() {
        variables.push(FuzzyVariable::categorical(name, &column.categories()));
    }
    Ok(variables)
}
