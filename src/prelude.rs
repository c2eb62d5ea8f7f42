//! Exports the standard types and traits.
//! 
pub use crate::error::{
    Result,
    TreeError,
};


pub use crate::sample::{
    Example,
    Feature,
    Label,
    Row,
    Sample,
    SampleReader,
    Value,
    ValueKind,
    ValueRef,
};


pub use crate::decision_tree::{
    // Learner
    DecisionTree,
    DecisionTreeClassifier,

    // Building blocks
    Condition,
    LabelCounts,
    Node,
    Predicate,
    Split,
    find_best_split,
    impurity,
    information_gain,
    partition,
};


pub use crate::{
    Classifier,
    Learner,
};
