//! Discretize
//!
//! Find the peaks of the triangular fuzzy sets of numeric columns, either from the
//! class distribution (recursive fuzzy entropy partitioning) or from the column values
//! alone (equal width and equal frequency divisions).
use crate::config::{DivisionMethod, FuzzifierConfig};
use crate::data::Dataset;
use crate::entropy::{mdl_delta, n_classes, weighted_entropy_of};
use crate::errors::FuzzyError;
use crate::membership::{triangle_vertices, triangular};
use crate::utils::{float_cmp, fmt_vec_output, linspace, min_max, quantiles, sorted_unique};
use hashbrown::HashMap;
use log::{debug, info, warn};
use rayon::prelude::*;
use std::hash::Hash;

/// Peaks of the fuzzy sets of every numeric column.
pub type FuzzyPoints = HashMap<String, Vec<f64>>;

/// A value of the variable with its encoded class and position in the original sample.
#[derive(Debug, Clone, Copy)]
struct Entry {
    value: f64,
    class: usize,
    order: usize,
}

/// Outcome of the search over one range of the sorted sample.
#[derive(Debug, PartialEq)]
enum SplitDecision {
    /// Split the range, elements lower or equal than `point` go left.
    Accept { point: f64, left_len: usize },
    /// Keep the range as a single partition spanning `[min_point, max_point]`.
    Reject { min_point: f64, max_point: f64 },
}

/// Membership degrees of the values to each set of the triangular partition with the given peaks.
fn partition_degrees(values: &[f64], peaks: &[f64]) -> Vec<Vec<f64>> {
    triangle_vertices(peaks)
        .into_iter()
        .map(|(left, peak, right)| values.iter().map(|x| triangular(*x, left, peak, right)).collect())
        .collect()
}

/// Best candidate split point of a range.
#[derive(Debug)]
struct Candidate {
    point: f64,
    first_seen: usize,
    wef: f64,
    sets: Vec<Vec<f64>>,
}

/// Evaluate every distinct value strictly between `min_point` and `max_point` as the
/// peak of the partition `low@min_point, mid@point, high@max_point`.
///
/// The candidate with the lowest weighted fuzzy entropy wins, ties going to the value
/// seen first in the original sample.
fn best_candidate(
    entries: &[Entry],
    values: &[f64],
    classes: &[usize],
    min_point: f64,
    max_point: f64,
) -> Option<Candidate> {
    let mut best: Option<Candidate> = None;
    let mut i = 0;
    while i < entries.len() {
        let point = entries[i].value;
        let mut j = i;
        let mut first_seen = entries[i].order;
        while j < entries.len() && entries[j].value == point {
            first_seen = first_seen.min(entries[j].order);
            j += 1;
        }
        if point > min_point && point < max_point {
            let sets = partition_degrees(values, &[min_point, point, max_point]);
            let wef = weighted_entropy_of(sets.iter().map(|s| s.as_slice()), classes);
            let better = match &best {
                None => true,
                Some(b) => wef < b.wef || (wef == b.wef && first_seen < b.first_seen),
            };
            if better {
                best = Some(Candidate {
                    point,
                    first_seen,
                    wef,
                    sets,
                });
            }
        }
        i = j;
    }
    best
}

/// Search the best split point of a range of entries sorted by value, and decide
/// whether to split.
///
/// The split is accepted when the entropy gain of the best candidate over the
/// unsplit partition reaches the description length threshold.
fn best_split(entries: &[Entry], min_point: f64) -> SplitDecision {
    let values: Vec<f64> = entries.iter().map(|e| e.value).collect();
    let classes: Vec<usize> = entries.iter().map(|e| e.class).collect();
    let max_point = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let (best_point, best_wef, best_sets) = match best_candidate(entries, &values, &classes, min_point, max_point) {
        Some(c) => (c.point, c.wef, c.sets),
        None => {
            debug!(
                "No candidate point in range [{}, {}] of {} values.",
                min_point,
                max_point,
                values.len()
            );
            return SplitDecision::Reject { min_point, max_point };
        }
    };

    let global_sets = partition_degrees(&values, &[min_point, max_point]);
    let global_wef = weighted_entropy_of(global_sets.iter().map(|s| s.as_slice()), &classes);
    let f_gain = global_wef - best_wef;

    let cardinality = values.len() as f64;
    let delta = mdl_delta(&global_sets, &best_sets, &classes);
    let threshold = ((cardinality - 1.0).log2() + delta) / cardinality;
    let accept = f_gain >= threshold;
    debug!(
        "Range [{}, {}]: best point {}, gain {:.6}, threshold {:.6}, classes {}, accepted {}.",
        min_point,
        max_point,
        best_point,
        f_gain,
        threshold,
        n_classes(&classes),
        accept
    );

    if accept {
        let left_len = entries.partition_point(|e| e.value <= best_point);
        SplitDecision::Accept {
            point: best_point,
            left_len,
        }
    } else {
        SplitDecision::Reject { min_point, max_point }
    }
}

/// Find the peaks of the fuzzy sets of a numeric variable by recursive fuzzy
/// entropy partitioning.
///
/// The sample is sorted once, and every accepted split divides a range of it in
/// two: values lower or equal than the split point, which keep `min_point`, and
/// values above it, which take the split point as their minimum. A side is only
/// searched again if it holds more than one value. A rejected range contributes
/// its minimum and maximum as peaks.
///
/// * `variable` - Values of the numeric variable.
/// * `class_variable` - Class of every value.
/// * `min_point` - Minimum of the domain of the variable.
///
/// Returns the peaks sorted ascending without repeated values.
pub fn fuzzy_partitioning<C: Eq + Hash>(variable: &[f64], class_variable: &[C], min_point: f64) -> Vec<f64> {
    debug_assert_eq!(variable.len(), class_variable.len());
    if variable.is_empty() {
        return Vec::new();
    }

    let mut class_ids: HashMap<&C, usize> = HashMap::new();
    let mut entries: Vec<Entry> = variable
        .iter()
        .zip(class_variable)
        .enumerate()
        .map(|(order, (value, c))| {
            let next_id = class_ids.len();
            let class = *class_ids.entry(c).or_insert(next_id);
            Entry {
                value: *value,
                class,
                order,
            }
        })
        .collect();
    // Stable, so equal values keep their original order.
    entries.sort_by(|a, b| float_cmp(&a.value, &b.value));

    let mut points = Vec::new();
    let mut ranges = vec![(0, entries.len(), min_point)];
    while let Some((start, stop, range_min)) = ranges.pop() {
        match best_split(&entries[start..stop], range_min) {
            SplitDecision::Accept { point, left_len } => {
                let split = start + left_len;
                if split - start > 1 {
                    ranges.push((start, split, range_min));
                }
                if stop - split > 1 {
                    ranges.push((split, stop, point));
                }
            }
            SplitDecision::Reject { min_point, max_point } => {
                points.push(min_point);
                points.push(max_point);
            }
        }
    }
    sorted_unique(&points)
}

/// Widen a degenerate range so that it still spans a positive width.
fn widen(min: f64, max: f64) -> (f64, f64) {
    let adjust = |v: f64| if v == 0.0 { 0.001 } else { 0.001 * v.abs() };
    (min - adjust(min), max + adjust(max))
}

/// Peaks of `sets` fuzzy sets evenly spaced between the minimum and the maximum of the variable.
///
/// A constant variable is widened by 0.1% on both sides, and the first peak is always
/// the minimum. Coinciding peaks are collapsed, giving fewer sets than requested.
pub fn equal_width_division(variable: &[f64], sets: usize) -> Vec<f64> {
    let (min, max) = match min_max(variable) {
        Some(v) => v,
        None => return Vec::new(),
    };
    let mut points = if min == max {
        let (lo, hi) = widen(min, max);
        linspace(lo, hi, sets)
    } else {
        linspace(min, max, sets)
    };
    if let Some(first) = points.first_mut() {
        *first = min;
    }
    let points = sorted_unique(&points);
    if points.len() < sets {
        warn!(
            "Only {} of {} equal width divisions could be created, using fewer fuzzy sets.",
            points.len(),
            sets
        );
    }
    points
}

/// Peaks of `sets` fuzzy sets placed at evenly spaced quantiles of the variable.
///
/// Quantiles repeated because of repeated values are collapsed, giving fewer sets than
/// requested. The first peak is always the minimum of the variable.
pub fn equal_freq_division(variable: &[f64], sets: usize) -> Vec<f64> {
    let min = match min_max(variable) {
        Some((min, _)) => min,
        None => return Vec::new(),
    };
    let mut points = quantiles(variable, &linspace(0.0, 1.0, sets));
    if let Some(first) = points.first_mut() {
        *first = min;
    }
    let unique = sorted_unique(&points);
    if unique.len() < 2 {
        warn!("Equal frequency division of a constant variable, falling back to equal width.");
        return equal_width_division(variable, 2);
    }
    if unique.len() < points.len() {
        warn!(
            "Only {} of {} equal frequency divisions could be created, using fewer fuzzy sets.",
            unique.len(),
            points.len()
        );
    }
    unique
}

/// Obtain the peaks of the fuzzy sets of every numeric column of a dataset.
///
/// * `dataset` - Dataset with the numeric columns and the class column.
/// * `config` - Division method and number of sets.
pub fn get_fuzzy_points(dataset: &Dataset, config: &FuzzifierConfig) -> Result<FuzzyPoints, FuzzyError> {
    config.validate()?;
    let class_labels = dataset.class_labels()?;
    let columns = dataset.numerical_columns();

    let column_points = |(name, values): &(&str, &[f64])| -> Result<(String, Vec<f64>), FuzzyError> {
        let (min, _) = min_max(values).ok_or_else(|| FuzzyError::EmptyColumn(name.to_string()))?;
        let points = match config.method {
            DivisionMethod::Entropy => fuzzy_partitioning(values, class_labels, min),
            DivisionMethod::EqualWidth => equal_width_division(values, config.sets),
            DivisionMethod::EqualFreq => equal_freq_division(values, config.sets),
        };
        info!("Fuzzy points of {}: [{}]", name, fmt_vec_output(&points));
        Ok((name.to_string(), points))
    };

    let points: Vec<(String, Vec<f64>)> = if config.parallel {
        columns.par_iter().map(column_points).collect::<Result<_, _>>()?
    } else {
        columns.iter().map(column_points).collect::<Result<_, _>>()?
    };
    Ok(points.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Column;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn strings(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_two_points_reject() {
        // With two values there is no point strictly inside the range.
        let points = fuzzy_partitioning(&[0.0, 10.0], &["A", "B"], 0.0);
        assert_eq!(points, vec![0.0, 10.0]);
    }

    #[test]
    fn test_single_value() {
        assert_eq!(fuzzy_partitioning(&[4.0], &["A"], 4.0), vec![4.0]);
        assert_eq!(fuzzy_partitioning(&[4.0, 4.0, 4.0], &["A", "B", "A"], 4.0), vec![4.0]);
        assert!(fuzzy_partitioning::<&str>(&[], &[], 0.0).is_empty());
    }

    #[test]
    fn test_three_points_boundary() {
        // Values 0, 5, 10 with classes A, A, B. The only candidate is 5, whose
        // partition is crisp: wef 0.
        // Unsplit: low = [1, .5, 0], high = [0, .5, 1].
        //   low: A 1.5 of 1.5 -> entropy 0; high: A .5, B 1 of 1.5 -> H(1/3).
        //   global wef = 1.5 * H(1/3) / 3 = H(1/3) / 2.
        // delta = log2(7) - (2 * H(1/3) - 0), threshold = (log2(2) + delta) / 3.
        let h = -(1.0 / 3.0) * (1.0f64 / 3.0).log2() - (2.0 / 3.0) * (2.0f64 / 3.0).log2();
        let gain = h / 2.0;
        let threshold = (1.0 + 7f64.log2() - 2.0 * h) / 3.0;
        let decision = {
            let entries = vec![
                Entry { value: 0.0, class: 0, order: 0 },
                Entry { value: 5.0, class: 0, order: 1 },
                Entry { value: 10.0, class: 1, order: 2 },
            ];
            best_split(&entries, 0.0)
        };
        if gain >= threshold {
            assert_eq!(decision, SplitDecision::Accept { point: 5.0, left_len: 2 });
        } else {
            assert_eq!(
                decision,
                SplitDecision::Reject {
                    min_point: 0.0,
                    max_point: 10.0
                }
            );
        }
        // gain ~0.459 and threshold ~0.657: the split is rejected.
        assert!(gain < threshold);
        assert_eq!(fuzzy_partitioning(&[0.0, 5.0, 10.0], &["A", "A", "B"], 0.0), vec![0.0, 10.0]);
    }

    #[test]
    fn test_separable_classes_split() {
        let mut variable = Vec::new();
        let mut classes = Vec::new();
        for i in 0..40 {
            variable.push(i as f64);
            classes.push(if i < 20 { "A" } else { "B" });
        }
        let points = fuzzy_partitioning(&variable, &classes, 0.0);
        assert!(points.len() > 2, "{:?}", points);
        assert_eq!(points[0], 0.0);
        assert!(points.iter().any(|p| (15.0..=24.0).contains(p)), "{:?}", points);
    }

    #[test]
    fn test_single_class_rejects() {
        let variable: Vec<f64> = (0..30).map(|i| i as f64 * 0.5).collect();
        let classes = vec!["A"; 30];
        assert_eq!(fuzzy_partitioning(&variable, &classes, 0.0), vec![0.0, 14.5]);
    }

    #[test]
    fn test_tie_keeps_first_seen() {
        // A single class gives every candidate an entropy of 0.
        let entries = vec![
            Entry { value: 0.0, class: 0, order: 0 },
            Entry { value: 1.0, class: 0, order: 3 },
            Entry { value: 2.0, class: 0, order: 4 },
            Entry { value: 2.0, class: 0, order: 1 },
            Entry { value: 3.0, class: 0, order: 2 },
            Entry { value: 4.0, class: 0, order: 5 },
        ];
        let values: Vec<f64> = entries.iter().map(|e| e.value).collect();
        let classes: Vec<usize> = entries.iter().map(|e| e.class).collect();
        let best = best_candidate(&entries, &values, &classes, 0.0, 4.0).unwrap();
        assert_eq!(best.point, 2.0);
        assert_eq!(best.first_seen, 1);
        assert_eq!(best.wef, 0.0);
        assert_eq!(best.sets.len(), 3);
        assert!(best_candidate(&entries[..2], &values[..2], &classes[..2], 0.0, 1.0).is_none());
    }

    #[test]
    fn test_output_sorted_unique_starts_at_min() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let n = rng.gen_range(1..60);
            let variable: Vec<f64> = (0..n).map(|_| rng.gen_range(0..25) as f64 / 2.0).collect();
            let classes: Vec<u8> = (0..n).map(|_| rng.gen_range(0..3)).collect();
            let min = variable.iter().copied().fold(f64::INFINITY, f64::min);
            let points = fuzzy_partitioning(&variable, &classes, min);
            assert!(!points.is_empty());
            assert_eq!(points[0], min);
            assert!(points.windows(2).all(|w| w[0] < w[1]), "{:?}", points);
        }
    }

    #[test]
    fn test_equal_width_division() {
        assert_eq!(equal_width_division(&[0.0, 3.0, 10.0, 7.0], 3), vec![0.0, 5.0, 10.0]);
        let widened = equal_width_division(&[2.0, 2.0], 2);
        assert_eq!(widened.len(), 2);
        assert_eq!(widened[0], 2.0);
        assert!((widened[1] - 2.002).abs() < 1e-12);
        assert_eq!(equal_width_division(&[0.0, 0.0], 3), vec![0.0, 0.001]);
        assert!(equal_width_division(&[], 3).is_empty());
    }

    #[test]
    fn test_equal_freq_division() {
        let v = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
        assert_eq!(equal_freq_division(&v, 3), vec![1.0, 5.0, 9.0]);
        // Repeated values collapse quantiles.
        let v = vec![1.0, 1.0, 1.0, 1.0, 1.0, 5.0, 6.0, 8.0, 9.0];
        assert_eq!(equal_freq_division(&v, 5), vec![1.0, 6.0, 9.0]);
        let constant = equal_freq_division(&[3.0, 3.0, 3.0], 4);
        assert_eq!(constant.len(), 2);
        assert_eq!(constant[0], 3.0);
        assert!((constant[1] - 3.003).abs() < 1e-12);
    }

    #[test]
    fn test_get_fuzzy_points() {
        let dataset = Dataset::new(
            vec![
                ("x".to_string(), Column::Numeric(vec![0.0, 1.0, 2.0, 3.0, 4.0])),
                ("c".to_string(), Column::Categorical(strings(&["u", "v", "u", "u", "v"]))),
                ("class".to_string(), Column::Categorical(strings(&["a", "a", "b", "b", "b"]))),
            ],
            "class",
        )
        .unwrap();
        let config = FuzzifierConfig::default()
            .set_method(DivisionMethod::EqualWidth)
            .set_sets(3);
        let points = get_fuzzy_points(&dataset, &config).unwrap();
        assert_eq!(points.len(), 1);
        assert_eq!(points["x"], vec![0.0, 2.0, 4.0]);

        let config = FuzzifierConfig::default().set_parallel(false);
        let points = get_fuzzy_points(&dataset, &config).unwrap();
        assert_eq!(points["x"][0], 0.0);

        let config = FuzzifierConfig::default().set_sets(1);
        assert!(get_fuzzy_points(&dataset, &config).is_err());
    }
}
