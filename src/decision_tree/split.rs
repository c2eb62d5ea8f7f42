//! Exhaustive search for the best splitting predicate.
use log::trace;

use crate::{
    constants::GAIN_TOLERANCE,
    error::{Result, TreeError},
    sample::{Feature, Sample},
};
use super::{
    impurity::*,
    predicate::Predicate,
};

/// The best split found on a set of rows.
/// `predicate` is `None` when no split improves the impurity.
#[derive(Debug, Clone, PartialEq)]
pub struct Split {
    pub gain: f64,
    pub predicate: Option<Predicate>,
}

impl Split {
    #[inline]
    fn none() -> Self {
        Self { gain: 0f64, predicate: None }
    }
}

/// Split `indices` into the rows matching `predicate`
/// and the rows that do not. Both keep the order of `indices`.
pub fn partition(sample: &Sample, indices: &[usize], predicate: &Predicate)
    -> Result<(Vec<usize>, Vec<usize>)>
{
    sample.check_rows(indices)?;
    let feature = sample.feature(predicate.feature())
        .ok_or_else(|| TreeError::UnknownFeature(predicate.feature().to_string()))?;
    partition_feature(feature, indices, predicate)
}

fn partition_feature(
    feature: &Feature,
    indices: &[usize],
    predicate: &Predicate,
) -> Result<(Vec<usize>, Vec<usize>)>
{
    let mut yes = Vec::new();
    let mut no = Vec::new();
    for &i in indices {
        if predicate.test(feature.at(i))? {
            yes.push(i);
        } else {
            no.push(i);
        }
    }
    Ok((yes, no))
}

/// Find the predicate with the highest information gain over
/// the rows at `indices`.
///
/// Candidates are every distinct value of every feature,
/// restricted to the given rows.
/// Features are visited in their declared order and values in order
/// of first appearance. A candidate that sends every row to one side
/// is skipped. On ties, the first candidate wins.
///
/// If `sample` has no label column set,
/// its feature named `label` is used as one.
pub fn find_best_split(sample: &Sample, indices: &[usize]) -> Result<Split> {
    let sample = sample.labeled()?;
    sample.check_rows(indices)?;
    let target = sample.target()
        .ok_or(TreeError::TargetNotSpecified)?;
    let parent_impurity = impurity(indices.iter().map(|&i| &target[i]));

    let mut best = Split::none();
    for feature in sample.features() {
        for value in feature.distinct_values(indices) {
            let predicate = Predicate::new(feature.name(), value);

            let mut left = LabelCounts::new();
            let mut right = LabelCounts::new();
            for &i in indices {
                if predicate.test(feature.at(i))? {
                    left.add(&target[i]);
                } else {
                    right.add(&target[i]);
                }
            }

            if left.is_empty() || right.is_empty() {
                continue;
            }

            let gain = gain_from_counts(&left, &right, parent_impurity)?;
            trace!("{predicate} gain = {gain:.5}");

            if gain > best.gain + GAIN_TOLERANCE {
                best = Split { gain, predicate: Some(predicate) };
            }
        }
    }
    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::BufReader;

    const TEST_TOLERANCE: f64 = 1e-9;

    fn fruit_sample() -> Sample {
        let csv = b"\
        colour,diameter,label\n\
        Green,3,Apple\n\
        Yellow,3,Apple\n\
        Red,1,Grape\n\
        Red,1,Grape\n\
        Yellow,3,Lemon\n";
        Sample::from_reader(BufReader::new(&csv[..]), true)
            .unwrap()
            .set_target("label")
            .unwrap()
    }

    fn all_rows(sample: &Sample) -> Vec<usize> {
        (0..sample.shape().0).collect()
    }

    #[test]
    fn test_best_split_fruit() {
        let sample = fruit_sample();
        let ix = all_rows(&sample);
        let split = find_best_split(&sample, &ix).unwrap();

        // `diameter >= 3` reaches the same gain,
        // but `colour` comes first.
        let expected = Predicate::new("colour", "Red");
        assert_eq!(split.predicate, Some(expected));

        let expected_gain = 0.37333333333333324;
        assert!(
            (expected_gain - split.gain).abs() < TEST_TOLERANCE,
            "expected {expected_gain}, got {}.", split.gain,
        );
    }

    #[test]
    fn test_best_split_on_subset() {
        let sample = fruit_sample();
        // Apple, Apple, Lemon; only `colour == Green` and
        // `colour == Yellow` split these rows.
        let split = find_best_split(&sample, &[0, 1, 4]).unwrap();
        let expected = Predicate::new("colour", "Green");
        assert_eq!(split.predicate, Some(expected));
        assert!(split.gain > 0f64);
    }

    #[test]
    fn test_single_row_has_no_split() {
        let sample = fruit_sample();
        let split = find_best_split(&sample, &[2]).unwrap();
        assert_eq!(split, Split { gain: 0f64, predicate: None });
    }

    #[test]
    fn test_pure_rows_have_no_split() {
        let sample = fruit_sample();
        let split = find_best_split(&sample, &[2, 3]).unwrap();
        assert!(split.predicate.is_none());
    }

    #[test]
    fn test_constant_feature_has_no_split() {
        let sample = Sample::new(vec![
            Feature::from_numeric("x", [1f64, 1f64, 1f64]),
            Feature::from_categorical("label", ["a", "b", "a"]),
        ])
        .unwrap()
        .set_target("label")
        .unwrap();
        let split = find_best_split(&sample, &[0, 1, 2]).unwrap();
        assert_eq!(split.gain, 0f64);
        assert!(split.predicate.is_none());
    }

    #[test]
    fn test_ties_keep_first_feature() {
        let sample = Sample::new(vec![
            Feature::from_numeric("a", [1f64, 2f64, 3f64, 4f64]),
            Feature::from_numeric("b", [1f64, 2f64, 3f64, 4f64]),
            Feature::from_categorical("label", ["x", "x", "y", "y"]),
        ])
        .unwrap()
        .set_target("label")
        .unwrap();
        let split = find_best_split(&sample, &[0, 1, 2, 3]).unwrap();
        assert_eq!(split.predicate, Some(Predicate::new("a", 3)));
        assert!((split.gain - 0.5).abs() < TEST_TOLERANCE);
    }

    #[test]
    fn test_partition() {
        let sample = fruit_sample();
        let ix = all_rows(&sample);

        let (yes, no) = partition(&sample, &ix, &Predicate::new("colour", "Red"))
            .unwrap();
        assert_eq!(yes, vec![2, 3]);
        assert_eq!(no, vec![0, 1, 4]);

        let (yes, no) = partition(&sample, &ix, &Predicate::new("diameter", 3))
            .unwrap();
        assert_eq!(yes, vec![0, 1, 4]);
        assert_eq!(no, vec![2, 3]);
    }

    #[test]
    fn test_partition_errors() {
        let sample = fruit_sample();
        let ix = all_rows(&sample);

        let err = partition(&sample, &ix, &Predicate::new("weight", 1))
            .unwrap_err();
        assert!(matches!(err, TreeError::UnknownFeature(_)));

        let err = partition(&sample, &ix, &Predicate::new("colour", 1))
            .unwrap_err();
        assert!(matches!(err, TreeError::TypeMismatch { .. }));
    }

    #[test]
    fn test_target_not_specified() {
        let sample = Sample::new(vec![
            Feature::from_numeric("x", [1f64, 2f64]),
        ]).unwrap();
        let err = find_best_split(&sample, &[0, 1]).unwrap_err();
        assert!(matches!(err, TreeError::TargetNotSpecified));
    }

    #[test]
    fn test_best_split_uses_label_column_by_default() {
        let csv = b"\
        colour,diameter,label\n\
        Green,3,Apple\n\
        Yellow,3,Apple\n\
        Red,1,Grape\n\
        Red,1,Grape\n\
        Yellow,3,Lemon\n";
        let sample = Sample::from_reader(BufReader::new(&csv[..]), true)
            .unwrap();
        let ix = all_rows(&sample);

        let split = find_best_split(&sample, &ix).unwrap();
        assert_eq!(split, find_best_split(&fruit_sample(), &ix).unwrap());

        // The pure `label` column must never be chosen.
        let predicate = split.predicate.unwrap();
        assert_eq!(predicate.feature(), "colour");
    }

    #[test]
    fn test_rows_out_of_range() {
        let sample = fruit_sample();

        let err = find_best_split(&sample, &[0, 9]).unwrap_err();
        assert!(matches!(err, TreeError::RowOutOfRange { row: 9, n_sample: 5 }));

        let predicate = Predicate::new("colour", "Red");
        let err = partition(&sample, &[5], &predicate).unwrap_err();
        assert!(matches!(err, TreeError::RowOutOfRange { row: 5, n_sample: 5 }));
    }
}
