// Modules
pub mod config;
pub mod data;
pub mod discretize;
pub mod entropy;
pub mod errors;
pub mod fuzzify;
pub mod inference;
pub mod mapper;
pub mod membership;
pub mod rule;
pub mod utils;
pub mod variable;

// Individual classes, and functions
pub use config::{DivisionMethod, FuzzifierConfig};
pub use data::{Column, Dataset};
pub use discretize::{equal_freq_division, equal_width_division, fuzzy_partitioning, get_fuzzy_points, FuzzyPoints};
pub use entropy::{fuzzy_entropy, weighted_fuzzy_entropy};
pub use errors::FuzzyError;
pub use fuzzify::{fuzzify_dataset, get_fuzzy_set_table, get_fuzzy_variables, FuzzySetTable};
pub use inference::{aggregated_vote, maximum_matching, weighted_vote, ClassScores, Leaf};
pub use mapper::map_rule_variables;
pub use membership::{get_fuzzy_triangle, MembershipTable};
pub use rule::{InstanceMembership, Rule, TNorm};
pub use variable::{FuzzyContinuousSet, FuzzyDiscreteSet, FuzzySet, FuzzyVariable, Value};
