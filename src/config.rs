//! Fuzzifier Configuration
//!
//! Defines how numeric columns are partitioned into fuzzy sets and how the
//! resulting sets are labeled.
use crate::errors::FuzzyError;
use crate::utils::{items_to_strings, validate_min_usize_parameter};
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Methods to obtain the peaks of the triangular fuzzy sets of a numeric column.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum DivisionMethod {
    /// Recursive fuzzy entropy partitioning guided by the class column.
    #[default]
    Entropy,
    /// Peaks evenly spaced between the minimum and the maximum.
    EqualWidth,
    /// Peaks at evenly spaced quantiles.
    EqualFreq,
}

impl FromStr for DivisionMethod {
    type Err = FuzzyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "entropy" => Ok(DivisionMethod::Entropy),
            "equal_width" => Ok(DivisionMethod::EqualWidth),
            "equal_freq" => Ok(DivisionMethod::EqualFreq),
            _ => Err(FuzzyError::ParseString(
                s.to_string(),
                "DivisionMethod".to_string(),
                items_to_strings(vec!["entropy", "equal_width", "equal_freq"]),
            )),
        }
    }
}

fn default_sets() -> usize {
    3
}
fn default_labels() -> HashMap<String, Vec<String>> {
    HashMap::new()
}
fn default_parallel() -> bool {
    true
}

/// Configuration of the dataset fuzzifier.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct FuzzifierConfig {
    /// Method used to find the peaks of numeric columns.
    #[serde(default)]
    pub method: DivisionMethod,
    /// Number of fuzzy sets for the equal width and equal frequency methods.
    #[serde(default = "default_sets")]
    pub sets: usize,
    /// Display labels of the fuzzy sets of each numeric column. Columns without
    /// labels use their peaks as labels.
    #[serde(default = "default_labels")]
    pub labels: HashMap<String, Vec<String>>,
    /// Process the columns in parallel.
    #[serde(default = "default_parallel")]
    pub parallel: bool,
}

impl Default for FuzzifierConfig {
    fn default() -> Self {
        FuzzifierConfig {
            method: DivisionMethod::default(),
            sets: default_sets(),
            labels: default_labels(),
            parallel: default_parallel(),
        }
    }
}

impl FuzzifierConfig {
    /// Load a configuration from a JSON string.
    pub fn from_json(json_str: &str) -> Result<Self, FuzzyError> {
        let cfg: FuzzifierConfig =
            serde_json::from_str(json_str).map_err(|e| FuzzyError::UnableToRead(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, FuzzyError> {
        let json_str = fs::read_to_string(path).map_err(|e| FuzzyError::UnableToRead(e.to_string()))?;
        Self::from_json(&json_str)
    }

    pub fn validate(&self) -> Result<(), FuzzyError> {
        validate_min_usize_parameter(self.sets, 2, "sets")
    }

    /// Set the division method.
    /// * `method` - Method used to find the peaks of the numeric columns.
    pub fn set_method(mut self, method: DivisionMethod) -> Self {
        self.method = method;
        self
    }

    /// Set the number of fuzzy sets.
    /// * `sets` - Number of fuzzy sets for the equal width and equal frequency methods.
    pub fn set_sets(mut self, sets: usize) -> Self {
        self.sets = sets;
        self
    }

    /// Set the labels of one column.
    /// * `column` - Name of the numeric column.
    /// * `labels` - Names of its fuzzy sets, one per peak.
    pub fn set_labels(mut self, column: &str, labels: Vec<String>) -> Self {
        self.labels.insert(column.to_string(), labels);
        self
    }

    /// Set parallel processing of the columns.
    pub fn set_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_division_method_from_str() {
        assert_eq!(DivisionMethod::from_str("equal_freq").unwrap(), DivisionMethod::EqualFreq);
        assert_eq!("entropy".parse::<DivisionMethod>().unwrap(), DivisionMethod::Entropy);
        let err = DivisionMethod::from_str("kmeans").unwrap_err();
        assert!(matches!(err, FuzzyError::ParseString(ref v, _, _) if v == "kmeans"));
    }

    #[test]
    fn test_config_defaults_from_json() {
        let cfg = FuzzifierConfig::from_json("{}").unwrap();
        assert_eq!(cfg, FuzzifierConfig::default());
        assert_eq!(cfg.sets, 3);
        assert!(cfg.parallel);
    }

    #[test]
    fn test_config_from_json() {
        let cfg = FuzzifierConfig::from_json(
            r#"{"method": "EqualWidth", "sets": 5, "labels": {"age": ["young", "old"]}, "parallel": false}"#,
        )
        .unwrap();
        assert_eq!(cfg.method, DivisionMethod::EqualWidth);
        assert_eq!(cfg.sets, 5);
        assert_eq!(cfg.labels["age"], vec!["young".to_string(), "old".to_string()]);
        assert!(!cfg.parallel);
    }

    #[test]
    fn test_config_invalid() {
        assert!(matches!(
            FuzzifierConfig::from_json(r#"{"sets": 1}"#),
            Err(FuzzyError::InvalidParameter(_, _, _))
        ));
        assert!(matches!(
            FuzzifierConfig::from_json("not json"),
            Err(FuzzyError::UnableToRead(_))
        ));
        assert!(matches!(
            FuzzifierConfig::from_file("resources/missing_config.json"),
            Err(FuzzyError::UnableToRead(_))
        ));
    }

    #[test]
    fn test_config_setters() {
        let cfg = FuzzifierConfig::default()
            .set_method(DivisionMethod::EqualFreq)
            .set_sets(4)
            .set_labels("x", vec!["a".to_string()])
            .set_parallel(false);
        assert_eq!(cfg.method, DivisionMethod::EqualFreq);
        assert_eq!(cfg.sets, 4);
        assert_eq!(cfg.labels.len(), 1);
        assert!(!cfg.parallel);
        let json = serde_json::to_string(&cfg).unwrap();
        assert_eq!(FuzzifierConfig::from_json(&json).unwrap(), cfg);
    }
}
