//! Membership
//!
//! Triangular membership functions and the tables of membership degrees
//! they produce over a numeric column.
use serde::{Deserialize, Serialize};

/// Membership degree of `x` in the triangle `(left, peak, right)`.
///
/// A triangle whose left vertex equals its peak is a left shoulder and keeps
/// degree 1 for every value below the peak; in the same way a triangle whose
/// right vertex equals its peak is a right shoulder.
#[inline]
pub fn triangular(x: f64, left: f64, peak: f64, right: f64) -> f64 {
    if x == peak {
        1.0
    } else if x < peak {
        if left == peak {
            1.0
        } else if x > left {
            (x - left) / (peak - left)
        } else {
            0.0
        }
    } else if right == peak {
        1.0
    } else if x < right {
        (right - x) / (right - peak)
    } else {
        0.0
    }
}

/// Vertices of every set of a triangular partition with the given peaks.
///
/// The first and last sets are shoulders, interior sets span their neighbouring peaks.
pub fn triangle_vertices(peaks: &[f64]) -> Vec<(f64, f64, f64)> {
    let k = peaks.len();
    (0..k)
        .map(|i| {
            let left = if i == 0 { peaks[0] } else { peaks[i - 1] };
            let right = if i + 1 == k { peaks[k - 1] } else { peaks[i + 1] };
            (left, peaks[i], right)
        })
        .collect()
}

/// Membership degrees of a fuzzy variable, one array per fuzzy set,
/// kept in the order the sets were defined.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct MembershipTable {
    sets: Vec<(String, Vec<f64>)>,
}

impl MembershipTable {
    pub fn new() -> Self {
        MembershipTable { sets: Vec::new() }
    }

    /// Add the degrees of a fuzzy set, replacing a set with the same label.
    pub fn insert(&mut self, label: &str, degrees: Vec<f64>) {
        match self.sets.iter_mut().find(|(l, _)| l == label) {
            Some((_, d)) => *d = degrees,
            None => self.sets.push((label.to_string(), degrees)),
        }
    }

    pub fn get(&self, label: &str) -> Option<&[f64]> {
        self.sets.iter().find(|(l, _)| l == label).map(|(_, d)| d.as_slice())
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.sets.iter().map(|(l, _)| l.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.sets.iter().map(|(l, d)| (l.as_str(), d.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}

/// Generate the membership of every value of a variable to each triangular
/// fuzzy set, given the peaks of the triangles.
///
/// * `variable` - Values to fuzzify.
/// * `divisions` - Names of the sets and their peaks, like
///   `[("low", 0.0), ("mid", 2.0), ("high", 5.0)]`, with strictly increasing
///   peaks. A single division gives a set with degree 1 everywhere.
pub fn get_fuzzy_triangle<S: AsRef<str>>(variable: &[f64], divisions: &[(S, f64)]) -> MembershipTable {
    debug_assert!(!divisions.is_empty(), "at least one division is needed");
    debug_assert!(
        divisions.windows(2).all(|w| w[0].1 < w[1].1),
        "peaks have to be strictly increasing"
    );
    let peaks: Vec<f64> = divisions.iter().map(|(_, p)| *p).collect();
    let mut table = MembershipTable::new();
    for ((label, _), (left, peak, right)) in divisions.iter().zip(triangle_vertices(&peaks)) {
        let degrees = variable.iter().map(|x| triangular(*x, left, peak, right)).collect();
        table.insert(label.as_ref(), degrees);
    }
    table
}
