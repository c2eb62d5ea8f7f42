//! Errors
//!
//! Custom error types used throughout the `minitree` crate.
use polars::prelude::PolarsError;
use thiserror::Error;

use crate::sample::ValueKind;

/// Errors that can occur while building or using a decision tree.
#[derive(Debug, Error)]
pub enum TreeError {
    /// A predicate compared against a value of the other kind.
    #[error("Feature \"{feature}\" holds a {found} value, but the predicate expects a {expected} one.")]
    TypeMismatch {
        feature: String,
        expected: ValueKind,
        found: ValueKind,
    },
    /// An example lacks a feature the tree depends on.
    #[error("Feature \"{0}\" does not exist in the given example.")]
    UnknownFeature(String),
    /// Information gain was requested for a split with two empty sides.
    #[error("Cannot compute the information gain of a split whose sides are both empty.")]
    DegenerateSplit,
    /// Prediction reached a leaf that was grown from zero rows.
    #[error("Reached a leaf with no label counts.")]
    EmptyLeaf,
    /// The label column has not been chosen yet.
    #[error("The target column is not specified. Use `Sample::set_target`.")]
    TargetNotSpecified,
    /// A row index beyond the end of the sample.
    #[error("Row {row} is out of range for a sample of {n_sample} rows.")]
    RowOutOfRange { row: usize, n_sample: usize },
    /// The requested label column does not exist.
    #[error("The target column \"{0}\" does not exist.")]
    UnknownTarget(String),
    /// Two columns share a name.
    #[error("Column \"{0}\" appears more than once.")]
    DuplicateFeature(String),
    /// A column does not have as many rows as the others.
    #[error("Column \"{name}\" has {found} rows, expected {expected}.")]
    LengthMismatch {
        name: String,
        expected: usize,
        found: usize,
    },
    /// A null was found in the source table.
    #[error("Column \"{feature}\" has a missing value at row {row}.")]
    MissingValue { feature: String, row: usize },
    /// A column whose dtype cannot be used as a feature.
    #[error("Column \"{feature}\" has unsupported dtype {dtype}.")]
    UnsupportedType { feature: String, dtype: String },
    /// A CSV line with the wrong number of cells.
    #[error("Line {line} has {found} cells, expected {expected}.")]
    MalformedRow {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Polars(#[from] PolarsError),
}

pub type Result<T> = std::result::Result<T, TreeError>;
