//! Inference
//!
//! Classification of an instance from a list of fuzzy rules, and the strategies
//! combining the class weights of the fuzzy tree leaves an instance reaches.
use crate::rule::{InstanceMembership, Rule};
use serde::{Deserialize, Serialize};

/// Score of every class, kept in the order the classes were first seen.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct ClassScores {
    scores: Vec<(String, f64)>,
}

impl ClassScores {
    pub fn new() -> Self {
        ClassScores { scores: Vec::new() }
    }

    fn entry(&mut self, class: &str) -> &mut f64 {
        let idx = match self.scores.iter().position(|(c, _)| c == class) {
            Some(idx) => idx,
            None => {
                self.scores.push((class.to_string(), 0.0));
                self.scores.len() - 1
            }
        };
        &mut self.scores[idx].1
    }

    /// Add a value to the score of a class, starting from 0.
    pub fn add(&mut self, class: &str, value: f64) {
        *self.entry(class) += value;
    }

    /// Keep the maximum between the score of a class, starting from 0, and a value.
    pub fn update_max(&mut self, class: &str, value: f64) {
        let score = self.entry(class);
        *score = score.max(value);
    }

    pub fn get(&self, class: &str) -> Option<f64> {
        self.scores.iter().find(|(c, _)| c == class).map(|(_, s)| *s)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.scores.iter().map(|(c, s)| (c.as_str(), *s))
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Class with the highest score. Ties go to the class seen first.
    pub fn argmax(&self) -> Option<&str> {
        let mut best: Option<(&str, f64)> = None;
        for (class, score) in self.iter() {
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((class, score)),
            }
        }
        best.map(|(class, _)| class)
    }
}

impl<S: AsRef<str>> FromIterator<(S, f64)> for ClassScores {
    fn from_iter<T: IntoIterator<Item = (S, f64)>>(iter: T) -> Self {
        let mut scores = ClassScores::new();
        for (class, score) in iter {
            scores.add(class.as_ref(), score);
        }
        scores
    }
}

/// A fuzzy tree leaf reached by an instance: the weight of every class in
/// the leaf and the degree the instance reaches it with.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Leaf {
    pub class_weights: ClassScores,
    pub activation: f64,
}

impl Leaf {
    pub fn new(class_weights: ClassScores, activation: f64) -> Self {
        Leaf {
            class_weights,
            activation,
        }
    }
}

/// Sum of the activation of the rules of every consequent, the activation
/// being the matching degree of the instance times the weight of the rule.
pub fn weighted_vote_scores(rule_list: &[Rule], instance_membership: &InstanceMembership) -> ClassScores {
    let mut scores = ClassScores::new();
    for rule in rule_list {
        scores.add(rule.consequent(), rule.matching(instance_membership) * rule.weight());
    }
    scores
}

/// Consequent of an instance by the weighted vote inference method.
///
/// Returns the consequent with the largest summed activation, the first
/// consequent in the rule list winning ties, and `None` for an empty list.
pub fn weighted_vote(rule_list: &[Rule], instance_membership: &InstanceMembership) -> Option<String> {
    weighted_vote_scores(rule_list, instance_membership)
        .argmax()
        .map(|c| c.to_string())
}

/// Sum over the leaves of the class weights times the leaf activation.
pub fn aggregated_vote(leaves: &[Leaf]) -> ClassScores {
    let mut agg_vote = ClassScores::new();
    for leaf in leaves {
        for (class, weight) in leaf.class_weights.iter() {
            agg_vote.add(class, weight * leaf.activation);
        }
    }
    agg_vote
}

/// Maximum over the leaves of the class weights times the leaf activation.
pub fn maximum_matching(leaves: &[Leaf]) -> ClassScores {
    let mut max_match = ClassScores::new();
    for leaf in leaves {
        for (class, weight) in leaf.class_weights.iter() {
            max_match.update_max(class, weight * leaf.activation);
        }
    }
    max_match
}
