//! A node struct used in the decision tree algorithm.
use serde::{Serialize, Deserialize};

use std::fmt;

use crate::{
    error::{Result, TreeError},
    sample::{Example, Label},
};
use super::{
    impurity::LabelCounts,
    predicate::Predicate,
};

/// A node of a decision tree.
/// Each node owns its children exclusively.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// A node that asks `predicate` and has two children.
    /// Rows matching `predicate` go to `yes`, the others go to `no`.
    Branch {
        predicate: Predicate,
        yes:       Box<Node>,
        no:        Box<Node>,
    },
    /// A node that has no child.
    Leaf {
        counts: LabelCounts,
    },
}

impl Node {
    pub fn branch(predicate: Predicate, yes: Box<Node>, no: Box<Node>)
        -> Self
    {
        Self::Branch { predicate, yes, no, }
    }

    pub fn leaf(counts: LabelCounts) -> Self {
        Self::Leaf { counts, }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }

    /// Returns the number of leaves of this sub-tree.
    pub fn leaves(&self) -> usize {
        match self {
            Self::Branch { yes, no, .. } => yes.leaves() + no.leaves(),
            Self::Leaf { .. } => 1,
        }
    }

    /// Returns the depth of this sub-tree. A leaf has depth `0`.
    pub fn depth(&self) -> usize {
        match self {
            Self::Branch { yes, no, .. }
                => 1 + yes.depth().max(no.depth()),
            Self::Leaf { .. } => 0,
        }
    }

    /// Walk down from this node to a leaf
    /// and return the majority label there.
    pub fn predict<E>(&self, example: &E) -> Result<&Label>
        where E: Example + ?Sized,
    {
        let mut node = self;
        loop {
            match node {
                Self::Branch { predicate, yes, no } => {
                    node = if predicate.matches(example)? { &**yes } else { &**no };
                },
                Self::Leaf { counts } => {
                    return counts.majority().ok_or(TreeError::EmptyLeaf);
                },
            }
        }
    }

    pub(crate) fn to_dot_info(&self, id: usize) -> (Vec<String>, usize) {
        match self {
            Node::Branch { predicate, yes, no } => {
                let label = escape_dot(&predicate.to_string());
                let question = format!(
                    "\tnode_{id} [ label = \"{label}\" ];\n",
                );

                let yes_id = id + 1;
                let (    yes,    no_id) = yes.to_dot_info(yes_id);
                let (mut no, return_id) = no.to_dot_info(no_id);

                let mut info = yes;
                info.push(question);
                info.append(&mut no);

                let yes_edge = format!(
                    "\tnode_{id} -- node_{yes_id} [ label = \"Yes\" ];\n",
                );
                info.push(yes_edge);
                let no_edge = format!(
                    "\tnode_{id} -- node_{no_id} [ label = \"No\" ];\n",
                );
                info.push(no_edge);

                (info, return_id)
            },
            Node::Leaf { counts } => {
                let label = escape_dot(&counts.to_string());
                let info = format!(
                    "\tnode_{id} [ label = \"{label}\", shape = box ];\n",
                );

                (vec![info], id + 1)
            }
        }
    }
}

/// Escape `"` and `\` so that `text` fits in a quoted DOT string.
fn escape_dot(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if c == '"' || c == '\\' {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Branch { predicate, yes, no } => {
                f.debug_struct("Branch")
                    .field("predicate", &format_args!("{predicate}"))
                    .field("yes", &yes)
                    .field("no", &no)
                    .finish()
            },
            Self::Leaf { counts } => {
                f.debug_struct("Leaf")
                    .field("counts", &format_args!("{counts}"))
                    .finish()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::{Row, Value};

    fn counts(names: &[&str]) -> LabelCounts {
        let ys = names.iter()
            .map(|&s| Value::from(s))
            .collect::<Vec<_>>();
        ys.iter().collect()
    }

    fn fruit_tree() -> Node {
        let apples = Node::leaf(counts(&["Apple", "Apple", "Lemon"]));
        let lemon = Node::leaf(counts(&["Lemon"]));
        let grapes = Node::leaf(counts(&["Grape", "Grape"]));

        let no = Node::branch(
            Predicate::new("colour", "Yellow"),
            Box::new(Node::branch(
                Predicate::new("diameter", 3),
                Box::new(apples),
                Box::new(lemon),
            )),
            Box::new(Node::leaf(counts(&["Apple"]))),
        );
        Node::branch(
            Predicate::new("colour", "Red"),
            Box::new(grapes),
            Box::new(no),
        )
    }

    #[test]
    fn test_shape() {
        let tree = fruit_tree();
        assert_eq!(tree.leaves(), 4);
        assert_eq!(tree.depth(), 3);
        assert!(!tree.is_leaf());
    }

    #[test]
    fn test_predict() {
        let tree = fruit_tree();

        let row = Row::new().with("colour", "Red").with("diameter", 1);
        assert_eq!(tree.predict(&row).unwrap(), &Value::from("Grape"));

        let row = Row::new().with("colour", "Yellow").with("diameter", 1);
        assert_eq!(tree.predict(&row).unwrap(), &Value::from("Lemon"));

        let row = Row::new().with("colour", "Green").with("diameter", 1);
        assert_eq!(tree.predict(&row).unwrap(), &Value::from("Apple"));
    }

    #[test]
    fn test_predict_unknown_feature() {
        let tree = fruit_tree();
        let row = Row::new().with("diameter", 1);
        let err = tree.predict(&row).unwrap_err();
        assert!(matches!(err, TreeError::UnknownFeature(name) if name == "colour"));
    }

    #[test]
    fn test_tied_leaf_is_deterministic() {
        let leaf = Node::leaf(counts(&["Apple", "Grape", "Grape", "Apple"]));
        let row = Row::new();
        let first = leaf.predict(&row).unwrap().clone();
        for _ in 0..10 {
            assert_eq!(leaf.predict(&row).unwrap(), &first);
        }
        assert_eq!(first, Value::from("Apple"));
    }

    #[test]
    fn test_empty_leaf() {
        let leaf = Node::leaf(LabelCounts::new());
        assert!(matches!(leaf.predict(&Row::new()), Err(TreeError::EmptyLeaf)));
    }

    #[test]
    fn test_dot_info() {
        let (info, next_id) = fruit_tree().to_dot_info(0);
        assert_eq!(next_id, 7);
        assert!(info.iter().any(|l| l.contains("Is colour == Red?")));
        assert!(info.iter().any(|l| l.contains("{Grape: 2}")));
    }

    #[test]
    fn test_dot_info_escapes_quotes() {
        let tree = Node::branch(
            Predicate::new("size", r#"5" \ 7""#),
            Box::new(Node::leaf(counts(&[r#"say "hi""#]))),
            Box::new(Node::leaf(counts(&["plain"]))),
        );
        let (info, _) = tree.to_dot_info(0);
        assert!(info.contains(
            &"\tnode_0 [ label = \"Is size == 5\\\" \\\\ 7\\\"?\" ];\n".to_string()
        ));
        assert!(info.contains(
            &"\tnode_1 [ label = \"{say \\\"hi\\\": 1}\", shape = box ];\n".to_string()
        ));
    }
}
