//! Errors
//!
//! Custom error types used throughout the `flore` crate.
use thiserror::Error;

/// Errors that can occur while fuzzifying data or reasoning with fuzzy rules.
#[derive(Debug, Error, PartialEq)]
pub enum FuzzyError {
    /// The origin and destination fuzzy variables are not defined over the same features.
    #[error("The universes of the fuzzy variables are not the same.")]
    DomainMismatch,
    /// A feature referenced by a rule is not present.
    #[error("Feature {0} is not defined.")]
    UnknownFeature(String),
    /// First value is the feature, second the fuzzy set that could not be found in it.
    #[error("Fuzzy set {1} is not defined for feature {0}.")]
    UnknownFuzzySet(String, String),
    /// A fuzzy variable without fuzzy sets.
    #[error("Fuzzy variable {0} has no fuzzy sets.")]
    EmptyVariable(String),
    /// First value is the column name, second the expected length, third the length found.
    #[error("Column {0} has length {2}, expected {1}.")]
    LengthMismatch(String, usize, usize),
    /// Column not found in the dataset.
    #[error("Column {0} not found in the dataset.")]
    MissingColumn(String),
    /// The class column has to hold categorical values.
    #[error("Column {0} is not categorical.")]
    NotCategorical(String),
    /// A numeric column without values cannot be partitioned.
    #[error("Column {0} has no values.")]
    EmptyColumn(String),
    /// Invalid value parsing.
    #[error("Invalid value {0} passed for {1}, expected one of {2}.")]
    ParseString(String, String, String),
    /// First value is the name of the parameter, second is expected, third is what was passed.
    #[error("Invalid parameter value passed for {0}, expected {1} but {2} provided.")]
    InvalidParameter(String, String, String),
    /// Unable to read a configuration.
    #[error("Unable to read configuration {0}")]
    UnableToRead(String),
}
