//! Gini impurity and information gain.
use serde::{Serialize, Deserialize};

use std::fmt;

use crate::{
    error::{Result, TreeError},
    sample::Label,
};

/// Occurrence count of each label,
/// kept in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LabelCounts {
    counts: Vec<(Label, usize)>,
}

impl LabelCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more occurrence of `label`.
    pub fn add(&mut self, label: &Label) {
        match self.counts.iter_mut().find(|(y, _)| y == label) {
            Some((_, cnt)) => { *cnt += 1; },
            None => { self.counts.push((label.clone(), 1)); },
        }
    }

    /// Returns the number of occurrences of `label`.
    pub fn get(&self, label: &Label) -> usize {
        self.counts.iter()
            .find(|(y, _)| y == label)
            .map(|(_, cnt)| *cnt)
            .unwrap_or(0)
    }

    /// Returns the number of counted labels.
    pub fn total(&self) -> usize {
        self.counts.iter()
            .map(|(_, cnt)| cnt)
            .sum::<usize>()
    }

    /// Returns the number of distinct labels.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over `(label, count)` pairs in order of first appearance.
    pub fn iter(&self) -> impl Iterator<Item = (&Label, usize)> + '_ {
        self.counts.iter().map(|(y, cnt)| (y, *cnt))
    }

    /// Returns the label with the highest count.
    /// On ties, the label that appeared first wins.
    pub fn majority(&self) -> Option<&Label> {
        let mut best: Option<(&Label, usize)> = None;
        for (y, cnt) in self.iter() {
            match best {
                Some((_, c)) if c >= cnt => {},
                _ => { best = Some((y, cnt)); },
            }
        }
        best.map(|(y, _)| y)
    }

    /// Returns the Gini impurity `1 - sum_i p_i^2`.
    /// An empty multiset has zero impurity.
    pub fn gini(&self) -> f64 {
        let total = self.total();
        if total == 0 { return 0f64; }

        let total = total as f64;
        let correct = self.counts.iter()
            .map(|(_, cnt)| (*cnt as f64 / total).powi(2))
            .sum::<f64>();

        (1f64 - correct).max(0f64)
    }
}

impl<'a> FromIterator<&'a Label> for LabelCounts {
    fn from_iter<I: IntoIterator<Item = &'a Label>>(iter: I) -> Self {
        let mut counts = Self::new();
        iter.into_iter().for_each(|y| counts.add(y));
        counts
    }
}

impl fmt::Display for LabelCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = self.iter()
            .map(|(y, cnt)| format!("{y}: {cnt}"))
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{{{line}}}")
    }
}

/// Returns the Gini impurity of the given labels.
pub fn impurity<'a, I>(labels: I) -> f64
    where I: IntoIterator<Item = &'a Label>
{
    labels.into_iter()
        .collect::<LabelCounts>()
        .gini()
}

/// Returns the information gain of splitting a node of impurity
/// `parent_impurity` into `left` and `right`.
///
/// Each side is weighted by its share of the labels.
/// Fails with [`TreeError::DegenerateSplit`] when both sides are empty.
pub fn information_gain<'a, L, R>(left: L, right: R, parent_impurity: f64)
    -> Result<f64>
    where L: IntoIterator<Item = &'a Label>,
          R: IntoIterator<Item = &'a Label>,
{
    let left = left.into_iter().collect::<LabelCounts>();
    let right = right.into_iter().collect::<LabelCounts>();
    gain_from_counts(&left, &right, parent_impurity)
}

pub(crate) fn gain_from_counts(
    left: &LabelCounts,
    right: &LabelCounts,
    parent_impurity: f64,
) -> Result<f64>
{
    let n_left = left.total();
    let total = n_left + right.total();
    if total == 0 {
        return Err(TreeError::DegenerateSplit);
    }

    let lp = n_left as f64 / total as f64;
    let rp = 1f64 - lp;

    Ok(parent_impurity - lp * left.gini() - rp * right.gini())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::Value;

    const TEST_TOLERANCE: f64 = 1e-9;

    fn labels(names: &[&str]) -> Vec<Label> {
        names.iter().map(|&s| Value::from(s)).collect()
    }

    #[test]
    fn test_pure_set_has_zero_impurity() {
        let ys = labels(&["Apple", "Apple"]);
        assert_eq!(impurity(&ys), 0f64);

        let ys = labels(&["Grape"; 7]);
        assert_eq!(impurity(&ys), 0f64);
    }

    #[test]
    fn test_two_labels() {
        let ys = labels(&["Apple", "Orange"]);
        assert_eq!(impurity(&ys), 0.5);
    }

    #[test]
    fn test_uniform_labels() {
        for k in 1..=8 {
            let ys = (0..k)
                .flat_map(|i| std::iter::repeat(Value::from(i)).take(3))
                .collect::<Vec<_>>();
            let expected = 1f64 - 1f64 / k as f64;
            let got = impurity(&ys);
            assert!(
                (expected - got).abs() < TEST_TOLERANCE,
                "expected {expected}, got {got}.",
            );
        }
    }

    #[test]
    fn test_empty_set_has_zero_impurity() {
        let ys: Vec<Label> = Vec::new();
        assert_eq!(impurity(&ys), 0f64);
    }

    #[test]
    fn test_information_gain() {
        let parent = labels(&["Apple", "Apple", "Grape", "Grape", "Lemon"]);
        let left = labels(&["Grape", "Grape"]);
        let right = labels(&["Apple", "Apple", "Lemon"]);

        let gain = information_gain(&left, &right, impurity(&parent)).unwrap();
        let expected = 0.64 - 0.6 * (4f64 / 9f64);
        assert!(
            (expected - gain).abs() < TEST_TOLERANCE,
            "expected {expected}, got {gain}.",
        );
    }

    #[test]
    fn test_information_gain_one_side_empty() {
        let ys = labels(&["Apple", "Grape"]);
        let none: Vec<Label> = Vec::new();
        let gain = information_gain(&ys, &none, impurity(&ys)).unwrap();
        assert!(gain.abs() < TEST_TOLERANCE);
    }

    #[test]
    fn test_information_gain_degenerate() {
        let none: Vec<Label> = Vec::new();
        let err = information_gain(&none, &none, 0.5).unwrap_err();
        assert!(matches!(err, TreeError::DegenerateSplit));
    }

    #[test]
    fn test_label_counts_order_and_majority() {
        let ys = labels(&["Grape", "Apple", "Apple", "Grape", "Lemon"]);
        let counts = ys.iter().collect::<LabelCounts>();

        assert_eq!(counts.len(), 3);
        assert_eq!(counts.total(), 5);
        assert_eq!(counts.get(&Value::from("Apple")), 2);
        assert_eq!(counts.get(&Value::from("Kiwi")), 0);
        // Grape and Apple tie; Grape appeared first.
        assert_eq!(counts.majority(), Some(&Value::from("Grape")));
        assert_eq!(counts.to_string(), "{Grape: 2, Apple: 2, Lemon: 1}");

        assert_eq!(LabelCounts::new().majority(), None);
    }
}
