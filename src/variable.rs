//! Fuzzy Variables
//!
//! Named fuzzy sets defined over the universe of a feature, and the
//! intersection measure used to relate sets of two different partitions.
use crate::membership::{triangle_vertices, triangular};
use crate::utils::float_cmp;
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

/// Triangular fuzzy set over a numeric universe.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct FuzzyContinuousSet {
    pub name: String,
    /// Left vertex, peak and right vertex of the triangle.
    pub fuzzy_points: [f64; 3],
}

impl FuzzyContinuousSet {
    pub fn new(name: &str, fuzzy_points: [f64; 3]) -> Self {
        FuzzyContinuousSet {
            name: name.to_string(),
            fuzzy_points,
        }
    }

    pub fn membership(&self, x: f64) -> f64 {
        let [left, peak, right] = self.fuzzy_points;
        triangular(x, left, peak, right)
    }

    /// Values of the set at both ends of an interval where it is linear.
    fn piece(&self, x0: f64, x1: f64) -> (f64, f64) {
        let [left, peak, right] = self.fuzzy_points;
        let mid = (x0 + x1) / 2.0;
        if mid > left && mid < peak {
            ((x0 - left) / (peak - left), (x1 - left) / (peak - left))
        } else if mid > peak && mid < right {
            ((right - x0) / (right - peak), (right - x1) / (right - peak))
        } else {
            (0.0, 0.0)
        }
    }

    /// Area under the minimum of both membership functions, over the
    /// span of their vertices.
    pub fn intersection(&self, other: &FuzzyContinuousSet) -> f64 {
        let mut knots: Vec<f64> = self.fuzzy_points.iter().chain(other.fuzzy_points.iter()).copied().collect();
        knots.sort_unstable_by(float_cmp);
        knots.dedup();

        let mut area = 0.0;
        for w in knots.windows(2) {
            let (x0, x1) = (w[0], w[1]);
            let (f0, f1) = self.piece(x0, x1);
            let (g0, g1) = other.piece(x0, x1);
            let (d0, d1) = (f0 - g0, f1 - g1);
            if d0 * d1 < 0.0 {
                // The functions cross inside the interval.
                let t = d0 / (d0 - d1);
                let xc = x0 + t * (x1 - x0);
                let yc = f0 + t * (f1 - f0);
                area += (xc - x0) * (f0.min(g0) + yc) / 2.0;
                area += (x1 - xc) * (yc + f1.min(g1)) / 2.0;
            } else {
                area += (x1 - x0) * (f0.min(g0) + f1.min(g1)) / 2.0;
            }
        }
        area
    }
}

/// Crisp fuzzy set holding a single categorical value.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct FuzzyDiscreteSet {
    pub name: String,
    pub value: String,
}

impl FuzzyDiscreteSet {
    pub fn new(name: &str, value: &str) -> Self {
        FuzzyDiscreteSet {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    pub fn membership(&self, x: &str) -> f64 {
        if x == self.value {
            1.0
        } else {
            0.0
        }
    }

    pub fn intersection(&self, other: &FuzzyDiscreteSet) -> f64 {
        if self.value == other.value {
            1.0
        } else {
            0.0
        }
    }
}

/// A fuzzy set of a fuzzy variable.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub enum FuzzySet {
    Continuous(FuzzyContinuousSet),
    Discrete(FuzzyDiscreteSet),
}

impl FuzzySet {
    pub fn name(&self) -> &str {
        match self {
            FuzzySet::Continuous(s) => &s.name,
            FuzzySet::Discrete(s) => &s.name,
        }
    }

    /// Degree of intersection with another set. Sets of different kinds
    /// do not intersect.
    pub fn intersection(&self, other: &FuzzySet) -> f64 {
        match (self, other) {
            (FuzzySet::Continuous(a), FuzzySet::Continuous(b)) => a.intersection(b),
            (FuzzySet::Discrete(a), FuzzySet::Discrete(b)) => a.intersection(b),
            _ => 0.0,
        }
    }
}

/// Raw value of a feature for a single instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    Numeric(f64),
    Categorical(&'a str),
}

/// A feature together with the fuzzy sets defined over its universe.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct FuzzyVariable {
    pub name: String,
    pub fuzzy_sets: Vec<FuzzySet>,
}

impl FuzzyVariable {
    pub fn new(name: &str, fuzzy_sets: Vec<FuzzySet>) -> Self {
        FuzzyVariable {
            name: name.to_string(),
            fuzzy_sets,
        }
    }

    /// Triangular fuzzy variable with a set peaking at each point, the first and
    /// last sets being shoulders.
    ///
    /// * `labels` - Names of the sets, one per point.
    /// * `points` - Peaks of the sets, strictly increasing.
    pub fn from_points<S: AsRef<str>>(name: &str, labels: &[S], points: &[f64]) -> Self {
        debug_assert_eq!(labels.len(), points.len());
        let fuzzy_sets = labels
            .iter()
            .zip(triangle_vertices(points))
            .map(|(label, (left, peak, right))| {
                FuzzySet::Continuous(FuzzyContinuousSet::new(label.as_ref(), [left, peak, right]))
            })
            .collect();
        FuzzyVariable::new(name, fuzzy_sets)
    }

    /// Categorical fuzzy variable with a crisp set named after each value.
    pub fn categorical<S: AsRef<str>>(name: &str, values: &[S]) -> Self {
        let fuzzy_sets = values
            .iter()
            .map(|v| FuzzySet::Discrete(FuzzyDiscreteSet::new(v.as_ref(), v.as_ref())))
            .collect();
        FuzzyVariable::new(name, fuzzy_sets)
    }

    pub fn get(&self, set_name: &str) -> Option<&FuzzySet> {
        self.fuzzy_sets.iter().find(|fs| fs.name() == set_name)
    }

    /// Membership of a single value to every set of the variable. Sets of a
    /// different kind than the value get degree 0.
    pub fn membership(&self, value: Value) -> HashMap<String, f64> {
        self.fuzzy_sets
            .iter()
            .map(|fs| {
                let degree = match (fs, value) {
                    (FuzzySet::Continuous(s), Value::Numeric(x)) => s.membership(x),
                    (FuzzySet::Discrete(s), Value::Categorical(x)) => s.membership(x),
                    _ => 0.0,
                };
                (fs.name().to_string(), degree)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersection_with_itself_is_area() {
        let a = FuzzyContinuousSet::new("a", [0.0, 2.0, 4.0]);
        assert!((a.intersection(&a) - 2.0).abs() < 1e-12);
        let shoulder = FuzzyContinuousSet::new("s", [0.0, 0.0, 4.0]);
        assert!((shoulder.intersection(&shoulder) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_intersection_of_neighbours() {
        // Crossing at x = 1, height 0.5: area 0.5 * 2 / 2.
        let a = FuzzyContinuousSet::new("a", [0.0, 0.0, 2.0]);
        let b = FuzzyContinuousSet::new("b", [0.0, 2.0, 4.0]);
        assert!((a.intersection(&b) - 0.5).abs() < 1e-12);
        assert!((b.intersection(&a) - 0.5).abs() < 1e-12);
        let far = FuzzyContinuousSet::new("far", [10.0, 12.0, 14.0]);
        assert_eq!(a.intersection(&far), 0.0);
    }

    #[test]
    fn test_intersection_kinds() {
        let c = FuzzySet::Continuous(FuzzyContinuousSet::new("a", [0.0, 1.0, 2.0]));
        let d = FuzzySet::Discrete(FuzzyDiscreteSet::new("x", "x"));
        let e = FuzzySet::Discrete(FuzzyDiscreteSet::new("y", "x"));
        assert_eq!(c.intersection(&d), 0.0);
        assert_eq!(d.intersection(&e), 1.0);
        assert_eq!(d.intersection(&FuzzySet::Discrete(FuzzyDiscreteSet::new("z", "z"))), 0.0);
    }

    #[test]
    fn test_from_points() {
        let v = FuzzyVariable::from_points("age", &["young", "adult", "old"], &[18.0, 40.0, 80.0]);
        assert_eq!(v.fuzzy_sets.len(), 3);
        assert_eq!(
            v.get("young"),
            Some(&FuzzySet::Continuous(FuzzyContinuousSet::new("young", [18.0, 18.0, 40.0])))
        );
        assert_eq!(
            v.get("old"),
            Some(&FuzzySet::Continuous(FuzzyContinuousSet::new("old", [40.0, 80.0, 80.0])))
        );
        let m = v.membership(Value::Numeric(60.0));
        assert_eq!(m["young"], 0.0);
        assert_eq!(m["adult"], 0.5);
        assert_eq!(m["old"], 0.5);
        assert_eq!(v.membership(Value::Numeric(10.0))["young"], 1.0);
        assert_eq!(v.membership(Value::Categorical("x"))["adult"], 0.0);
    }

    #[test]
    fn test_categorical() {
        let v = FuzzyVariable::categorical("city", &["paris", "rome"]);
        let m = v.membership(Value::Categorical("rome"));
        assert_eq!(m["paris"], 0.0);
        assert_eq!(m["rome"], 1.0);
        assert!(v.get("berlin").is_none());
    }

    #[test]
    fn test_serde() {
        let v = FuzzyVariable::from_points("x", &["lo", "hi"], &[0.0, 1.0]);
        let json = serde_json::to_string(&v).unwrap();
        let back: FuzzyVariable = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
    }
}
