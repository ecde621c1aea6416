//! Fuzzy Entropy
//!
//! Shannon entropy computed with fuzzy class cardinalities, the measure the
//! entropy based discretization minimizes.
use crate::membership::MembershipTable;
use hashbrown::{HashMap, HashSet};
use std::hash::Hash;

/// Fuzzy cardinality of each class inside a fuzzy set, in order of first appearance.
fn class_cardinalities<'a, C: Eq + Hash>(degrees: &[f64], class_labels: &'a [C]) -> Vec<(&'a C, f64)> {
    let mut position: HashMap<&C, usize> = HashMap::new();
    let mut cardinalities: Vec<(&C, f64)> = Vec::new();
    for (d, c) in degrees.iter().zip(class_labels) {
        match position.get(c) {
            Some(&i) => cardinalities[i].1 += *d,
            None => {
                position.insert(c, cardinalities.len());
                cardinalities.push((c, *d));
            }
        }
    }
    cardinalities
}

/// Number of distinct classes present in the labels.
pub fn n_classes<C: Eq + Hash>(class_labels: &[C]) -> usize {
    class_labels.iter().collect::<HashSet<_>>().len()
}

/// Fuzzy entropy of a fuzzy set.
///
/// Classes without elements in the set are skipped, so an empty
/// fuzzy set has an entropy of 0.
///
/// * `degrees` - Membership degree of every element to the fuzzy set.
/// * `class_labels` - Class of every element, paired positionally with `degrees`.
pub fn fuzzy_entropy<C: Eq + Hash>(degrees: &[f64], class_labels: &[C]) -> f64 {
    debug_assert_eq!(degrees.len(), class_labels.len());
    let fuzzy_cardinality: f64 = degrees.iter().sum();
    class_cardinalities(degrees, class_labels)
        .into_iter()
        .filter(|(_, class_cardinality)| *class_cardinality > 0.0)
        .map(|(_, class_cardinality)| {
            let ratio = class_cardinality / fuzzy_cardinality;
            -ratio * ratio.log2()
        })
        .sum()
}

/// Weighted average of the fuzzy entropy of a family of fuzzy sets, each
/// weighted by its fuzzy cardinality.
///
/// Returns 0 when every set is empty.
pub fn weighted_entropy_of<'a, I, C>(sets: I, class_labels: &[C]) -> f64
where
    I: IntoIterator<Item = &'a [f64]>,
    C: Eq + Hash,
{
    let mut wef = 0.0;
    let mut crisp_cardinality = 0.0;
    for degrees in sets {
        let fuzzy_cardinality: f64 = degrees.iter().sum();
        crisp_cardinality += fuzzy_cardinality;
        if fuzzy_cardinality > 0.0 {
            wef += fuzzy_cardinality * fuzzy_entropy(degrees, class_labels);
        }
    }
    if crisp_cardinality > 0.0 {
        wef / crisp_cardinality
    } else {
        0.0
    }
}

/// Weighted fuzzy entropy of every fuzzy set in a membership table.
pub fn weighted_fuzzy_entropy<C: Eq + Hash>(fuzzy_triangle: &MembershipTable, class_labels: &[C]) -> f64 {
    weighted_entropy_of(fuzzy_triangle.iter().map(|(_, d)| d), class_labels)
}

/// Description length term of the split acceptance criterion.
///
/// `log2(3^k - 2) - (old - new)`, where `old` adds `k` times the entropy of every
/// set of the unsplit partition and `new` adds, for every set of the split partition,
/// its entropy times the number of classes among the elements it covers.
///
/// * `global_sets` - Membership degrees of the unsplit partition.
/// * `split_sets` - Membership degrees of the candidate split partition.
/// * `class_labels` - Class of every element.
pub fn mdl_delta<C: Eq + Hash>(global_sets: &[Vec<f64>], split_sets: &[Vec<f64>], class_labels: &[C]) -> f64 {
    let k = n_classes(class_labels);
    let old_entropy: f64 = global_sets
        .iter()
        .map(|degrees| k as f64 * fuzzy_entropy(degrees, class_labels))
        .sum();
    let new_entropy: f64 = split_sets
        .iter()
        .map(|degrees| {
            let covered: HashSet<&C> = degrees
                .iter()
                .zip(class_labels)
                .filter(|(d, _)| **d > 0.0)
                .map(|(_, c)| c)
                .collect();
            covered.len() as f64 * fuzzy_entropy(degrees, class_labels)
        })
        .sum();
    (3f64.powi(k as i32) - 2.0).log2() - (old_entropy - new_entropy)
}
