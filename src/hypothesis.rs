//! The `Classifier` trait implemented by trained models.
use crate::{
    error::Result,
    sample::{Example, Label, Sample},
};


/// A trait that defines the behavior of classifier.
/// You only need to implement `predict` method.
pub trait Classifier {
    /// Predicts the label of a single example.
    fn predict<E>(&self, example: &E) -> Result<Label>
        where E: Example + ?Sized;


    /// Predicts the labels of every row of `sample`, in row order.
    /// The label column of `sample`, if any, is ignored.
    fn predict_all(&self, sample: &Sample) -> Result<Vec<Label>> {
        let n_sample = sample.shape().0;
        (0..n_sample).map(|row| self.predict(&sample.row(row)))
            .collect()
    }


    /// Predicts the labels of `examples`, in the given order.
    fn predict_batch<E>(&self, examples: &[E]) -> Result<Vec<Label>>
        where E: Example
    {
        examples.iter()
            .map(|example| self.predict(example))
            .collect()
    }
}
