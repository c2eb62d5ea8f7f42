//! The `Learner` trait implemented by training algorithms.
use crate::{error::Result, Sample};

/// A trait that produces a hypothesis from a labeled sample.
pub trait Learner {
    /// The model this learner returns.
    type Hypothesis;


    /// Returns the name of this learner.
    fn name(&self) -> &str;


    /// Train a hypothesis on `sample`.
    /// `sample` must have its label column set.
    fn fit(&self, sample: &Sample) -> Result<Self::Hypothesis>;
}
