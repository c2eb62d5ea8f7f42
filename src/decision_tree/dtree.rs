use log::{debug, info};

use crate::{
    error::{Result, TreeError},
    sample::{Label, Sample},
    Learner,
};
use super::{
    classifier::DecisionTreeClassifier,
    impurity::LabelCounts,
    node::Node,
    split::*,
};

use std::fmt;

/// The Decision Tree algorithm.  
/// Given a labeled [`Sample`],
/// [`DecisionTree`] grows a binary tree named [`DecisionTreeClassifier`]
/// by repeatedly asking the question of highest Gini information gain.
///
/// Growth stops only when no question improves the impurity,
/// so the tree fits the training rows as closely as the features allow.
/// There is no depth limit and no pruning.
///
/// # Example
/// ```no_run
/// use minitree::prelude::*;
///
/// // Read the training data from the CSV file.
/// // The label column is named `label`.
/// let file = "/path/to/data/file.csv";
/// let sample = SampleReader::<_, &str>::default()
///     .file(file)
///     .has_header(true)
///     .read()
///     .unwrap();
///
/// let f = DecisionTree::new().fit(&sample).unwrap();
/// let predictions = f.predict_all(&sample).unwrap();
///
/// let n_sample = sample.shape().0;
/// let loss = sample.target()
///     .unwrap()
///     .iter()
///     .zip(predictions)
///     .filter(|(ty, py)| **ty != *py)
///     .count() as f64
///     / n_sample as f64;
/// println!("loss (train) is: {loss}");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DecisionTree;

impl DecisionTree {
    /// Initialize [`DecisionTree`].
    #[inline]
    pub fn new() -> Self {
        Self
    }

    /// Grow a sub-tree over the rows at `indices`.
    fn grow(
        &self,
        sample:  &Sample,
        target:  &[Label],
        indices: Vec<usize>,
        depth:   usize,
    ) -> Result<Box<Node>>
    {
        let Split { gain, predicate } = find_best_split(sample, &indices)?;

        // If no question reduces the impurity, construct a leaf node.
        let predicate = match predicate {
            Some(predicate) if gain > 0f64 => predicate,
            _ => {
                let counts = indices.iter()
                    .map(|&i| &target[i])
                    .collect::<LabelCounts>();
                debug!("Leaf at depth {depth}: {counts}");
                return Ok(Box::new(Node::leaf(counts)));
            },
        };

        // Split the rows for yes/no children.
        let (yes, no) = partition(sample, &indices, &predicate)?;
        debug!(
            "{predicate} at depth {depth} \
             (gain = {gain:.5}, {} / {} rows)",
            yes.len(), no.len(),
        );

        let yes = self.grow(sample, target, yes, depth + 1)?;
        let no  = self.grow(sample, target, no,  depth + 1)?;

        Ok(Box::new(Node::branch(predicate, yes, no)))
    }
}

impl Learner for DecisionTree {
    type Hypothesis = DecisionTreeClassifier;

    fn name(&self) -> &str {
        "Decision Tree"
    }

    /// Grow a tree over every row of `sample`.
    /// If no label column is set, the feature named `label` is used.
    /// An empty sample yields a single leaf without label counts.
    fn fit(&self, sample: &Sample) -> Result<Self::Hypothesis> {
        let sample = sample.labeled()?;
        let target = sample.target()
            .ok_or(TreeError::TargetNotSpecified)?;
        let (n_sample, n_feature) = sample.shape();
        info!(
            "{}: fitting {n_sample} rows with {n_feature} features",
            self.name(),
        );

        let indices = (0..n_sample).collect::<Vec<_>>();
        let root = self.grow(&sample, target, indices, 0)?;

        info!(
            "{}: grew {} leaves, depth {}",
            self.name(), root.leaves(), root.depth(),
        );
        Ok(DecisionTreeClassifier::from(root))
    }
}

impl fmt::Display for DecisionTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\
            ----------\n\
            # Decision Tree\n\n\
            - Splitting criterion: Gini index\n\
            - Stopping rule: no positive gain\n\
            ----------\
            "
        )
    }
}
