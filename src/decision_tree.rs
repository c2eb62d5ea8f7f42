//! A Gini-impurity decision tree.

pub mod predicate;
pub mod impurity;
pub mod split;
pub mod node;
pub(crate) mod dtree;
pub(crate) mod classifier;

pub use predicate::{Condition, Predicate};
pub use impurity::{impurity, information_gain, LabelCounts};
pub use split::{find_best_split, partition, Split};
pub use node::Node;
pub use dtree::DecisionTree;
pub use classifier::DecisionTreeClassifier;
