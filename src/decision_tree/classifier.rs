//! Defines the decision tree classifier.
use serde::{Serialize, Deserialize};

use std::path::Path;
use std::fs::File;
use std::io::prelude::*;

use crate::{
    error::Result,
    sample::{Example, Label},
    Classifier,
};
use super::node::*;

/// Decision tree classifier.
/// This struct is just a wrapper of `Node`.
/// It is built once by [`DecisionTree`](super::DecisionTree)
/// and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTreeClassifier {
    root: Node,
}

impl From<Box<Node>> for DecisionTreeClassifier {
    #[inline]
    fn from(root: Box<Node>) -> Self {
        Self { root: *root }
    }
}

impl From<Node> for DecisionTreeClassifier {
    #[inline]
    fn from(root: Node) -> Self {
        Self { root }
    }
}

impl Classifier for DecisionTreeClassifier {
    fn predict<E>(&self, example: &E) -> Result<Label>
        where E: Example + ?Sized,
    {
        self.root.predict(example).cloned()
    }
}

impl DecisionTreeClassifier {
    /// Returns the root node.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Returns the number of leaves.
    pub fn n_leaves(&self) -> usize {
        self.root.leaves()
    }

    /// Returns the depth. A single leaf has depth `0`.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Write the current decision tree to dot file.
    #[inline]
    pub fn to_dot_file<P>(&self, path: P) -> std::io::Result<()>
        where P: AsRef<Path>
    {
        let mut f = File::create(path)?;
        f.write_all(b"graph DecisionTree {\n")?;

        let info = self.root.to_dot_info(0).0;
        for row in info {
            f.write_all(row.as_bytes())?;
        }

        f.write_all(b"}\n")?;

        Ok(())
    }
}
