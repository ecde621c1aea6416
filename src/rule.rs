//! Rule
//!
//! Fuzzy rules of the form `feature is set AND ... => consequent`, weighted by
//! their confidence, and their matching against the fuzzy membership of an instance.
use crate::errors::FuzzyError;
use crate::utils::items_to_strings;
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Membership of an instance with the format `{feature: {fuzzy set: degree}}`.
pub type InstanceMembership = HashMap<String, HashMap<String, f64>>;

/// Conjunction operator used to combine the degrees of the conditions of a rule.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum TNorm {
    /// Gödel t-norm, `min(a, b)`.
    #[default]
    Minimum,
    /// `a * b`.
    Product,
    /// `max(0, a + b - 1)`.
    Lukasiewicz,
}

impl TNorm {
    /// Combine a list of degrees. An empty list gives the identity, 1.
    pub fn apply(&self, degrees: &[f64]) -> f64 {
        match self {
            TNorm::Minimum => degrees.iter().copied().fold(1.0, f64::min),
            TNorm::Product => degrees.iter().product(),
            TNorm::Lukasiewicz => degrees.iter().fold(1.0, |acc, d| (acc + d - 1.0).max(0.0)),
        }
    }
}

impl FromStr for TNorm {
    type Err = FuzzyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "min" | "minimum" => Ok(TNorm::Minimum),
            "product" => Ok(TNorm::Product),
            "lukasiewicz" => Ok(TNorm::Lukasiewicz),
            _ => Err(FuzzyError::ParseString(
                s.to_string(),
                "TNorm".to_string(),
                items_to_strings(vec!["minimum", "product", "lukasiewicz"]),
            )),
        }
    }
}

/// A weighted fuzzy rule.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Rule {
    antecedent: Vec<(String, String)>,
    consequent: String,
    weight: f64,
}

impl Rule {
    /// Create a new rule.
    ///
    /// * `antecedent` - Conditions as `(feature, fuzzy set)` pairs.
    /// * `consequent` - Class predicted by the rule.
    /// * `weight` - Confidence of the rule.
    pub fn new<I, F, V>(antecedent: I, consequent: &str, weight: f64) -> Self
    where
        I: IntoIterator<Item = (F, V)>,
        F: Into<String>,
        V: Into<String>,
    {
        Rule {
            antecedent: antecedent.into_iter().map(|(f, v)| (f.into(), v.into())).collect(),
            consequent: consequent.to_string(),
            weight,
        }
    }

    pub fn antecedent(&self) -> &[(String, String)] {
        &self.antecedent
    }

    pub fn consequent(&self) -> &str {
        &self.consequent
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Matching degree of an instance with the rule, combining the conditions with the minimum.
    ///
    /// If some feature or fuzzy set of the rule does not exist in the instance,
    /// the matching degree is 0.
    pub fn matching(&self, instance_membership: &InstanceMembership) -> f64 {
        self.matching_with(instance_membership, TNorm::Minimum)
    }

    /// Matching degree of an instance with the rule, using the given t-norm.
    pub fn matching_with(&self, instance_membership: &InstanceMembership, t_norm: TNorm) -> f64 {
        self.try_matching(instance_membership, t_norm).unwrap_or(0.0)
    }

    /// Matching degree of an instance with the rule, failing when the rule
    /// references a feature or fuzzy set the instance does not have.
    pub fn try_matching(&self, instance_membership: &InstanceMembership, t_norm: TNorm) -> Result<f64, FuzzyError> {
        let degrees = self
            .antecedent
            .iter()
            .map(|(feature, value)| {
                instance_membership
                    .get(feature)
                    .ok_or_else(|| FuzzyError::UnknownFeature(feature.clone()))?
                    .get(value)
                    .copied()
                    .ok_or_else(|| FuzzyError::UnknownFuzzySet(feature.clone(), value.clone()))
            })
            .collect::<Result<Vec<f64>, FuzzyError>>()?;
        Ok(t_norm.apply(&degrees))
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let antecedents: Vec<String> = self
            .antecedent
            .iter()
            .map(|(feature, value)| format!("{}: {}", feature, value))
            .collect();
        write!(
            f,
            "{} => {} (Weight: {})",
            antecedents.join(" AND "),
            self.consequent,
            self.weight
        )
    }
}
