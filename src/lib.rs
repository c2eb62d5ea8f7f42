//! 
//! A crate that provides a decision tree classifier
//! grown by Gini information gain.
//! 
//! Given a labeled [`Sample`], [`DecisionTree`] searches every
//! question "is feature `f` at least `v`?" (numeric features) and
//! "is feature `f` equal to `v`?" (categorical features)
//! over the values observed in the current rows,
//! asks the one with the highest information gain,
//! and recurses on both answers until no question helps.
//! The result is a [`DecisionTreeClassifier`]
//! that predicts the majority label of the leaf an example reaches.
//! 
//! ```
//! use minitree::prelude::*;
//! use polars::prelude::{DataFrame, NamedFrom, Series};
//! 
//! let colour = Series::new("colour", &["Green", "Yellow", "Red", "Red", "Yellow"]);
//! let diameter = Series::new("diameter", &[3i64, 3, 1, 1, 3]);
//! let label = Series::new("label", &["Apple", "Apple", "Grape", "Grape", "Lemon"]);
//! let df = DataFrame::new(vec![colour, diameter, label]).unwrap();
//! 
//! let sample = Sample::from_dataframe(df).unwrap()
//!     .set_target("label")
//!     .unwrap();
//! let f = DecisionTree::new().fit(&sample).unwrap();
//! 
//! let row = Row::new().with("colour", "Red").with("diameter", 1);
//! assert_eq!(f.predict(&row).unwrap(), Value::from("Grape"));
//! ```

pub mod constants;
pub mod error;
pub mod sample;
pub mod hypothesis;
pub mod learner;
pub mod decision_tree;
pub mod prelude;


pub use error::{Result, TreeError};

pub use sample::{
    Example,
    Feature,
    Label,
    Row,
    Sample,
    SampleReader,
    SampleRow,
    Value,
    ValueKind,
    ValueRef,
};

pub use hypothesis::Classifier;
pub use learner::Learner;

pub use decision_tree::{
    DecisionTree,
    DecisionTreeClassifier,
    Node,
    Predicate,
};
