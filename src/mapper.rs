//! Mapper
//!
//! Rewrite rules learned over one set of fuzzy variables so they can be used with
//! another set of fuzzy variables defined over the same universes.
use crate::errors::FuzzyError;
use crate::rule::Rule;
use crate::variable::{FuzzySet, FuzzyVariable};
use hashbrown::{HashMap, HashSet};

/// Change the fuzzy sets of the rule for the ones of the destination variables
/// that intersect the most with them.
///
/// * `rule` - Original rule to map to the new variables.
/// * `origin_fuzzy_variables` - Fuzzy variables the rule was defined with.
/// * `dest_fuzzy_variables` - Fuzzy variables to define the new rule with.
///
/// Returns a rule with the same consequent and weight, or
/// [`FuzzyError::DomainMismatch`] if both lists do not define the same features.
pub fn map_rule_variables(
    rule: &Rule,
    origin_fuzzy_variables: &[FuzzyVariable],
    dest_fuzzy_variables: &[FuzzyVariable],
) -> Result<Rule, FuzzyError> {
    let origin: HashMap<&str, &FuzzyVariable> =
        origin_fuzzy_variables.iter().map(|fv| (fv.name.as_str(), fv)).collect();
    let dest: HashMap<&str, &FuzzyVariable> = dest_fuzzy_variables.iter().map(|fv| (fv.name.as_str(), fv)).collect();

    let origin_names: HashSet<&str> = origin.keys().copied().collect();
    let dest_names: HashSet<&str> = dest.keys().copied().collect();
    if origin_names != dest_names {
        return Err(FuzzyError::DomainMismatch);
    }

    let mut new_antecedent = Vec::with_capacity(rule.antecedent().len());
    for (feature, value) in rule.antecedent() {
        let origin_feature = origin
            .get(feature.as_str())
            .ok_or_else(|| FuzzyError::UnknownFeature(feature.clone()))?;
        let dest_feature = dest
            .get(feature.as_str())
            .ok_or_else(|| FuzzyError::UnknownFeature(feature.clone()))?;
        let origin_fs = origin_feature
            .get(value)
            .ok_or_else(|| FuzzyError::UnknownFuzzySet(feature.clone(), value.clone()))?;

        // First set with the largest intersection.
        let mut best: Option<(&FuzzySet, f64)> = None;
        for fs in &dest_feature.fuzzy_sets {
            let overlap = fs.intersection(origin_fs);
            match best {
                Some((_, best_overlap)) if overlap <= best_overlap => {}
                _ => best = Some((fs, overlap)),
            }
        }
        let (dest_fs, _) = best.ok_or_else(|| FuzzyError::EmptyVariable(feature.clone()))?;
        new_antecedent.push((feature.clone(), dest_fs.name().to_string()));
    }

    Ok(Rule::new(new_antecedent, rule.consequent(), rule.weight()))
}
