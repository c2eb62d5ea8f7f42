use polars::prelude::DataFrame;

use std::path::Path;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::borrow::Cow;
use std::collections::HashMap;
use std::ops::Index;

use crate::{
    constants::DEFAULT_TARGET,
    error::{Result, TreeError},
};
use super::{
    example::Example,
    feature::*,
    value::*,
};

/// Struct `Sample` holds a batch of rows as named feature columns
/// plus, once [`Sample::set_target`] is called, a label column.
///
/// Columns keep their declared order,
/// and lookup by name is `O(1)`.
#[derive(Debug, Clone)]
pub struct Sample {
    pub(super) name_to_index: HashMap<String, usize>,
    pub(super) features: Vec<Feature>,
    pub(super) target: Option<Vec<Label>>,
    pub(super) n_sample: usize,
    pub(super) n_feature: usize,
}

impl Sample {
    /// Construct a `Sample` from columns.
    /// Every column must have the same number of rows
    /// and a unique name.
    pub fn new(features: Vec<Feature>) -> Result<Self> {
        let n_sample = features.first()
            .map(|feat| feat.len())
            .unwrap_or(0);

        for feat in features.iter() {
            if feat.len() != n_sample {
                return Err(TreeError::LengthMismatch {
                    name: feat.name().to_string(),
                    expected: n_sample,
                    found: feat.len(),
                });
            }
        }

        let name_to_index = index_names(features.iter().map(Feature::name))?;
        let n_feature = features.len();

        let sample = Self {
            name_to_index, features, target: None, n_sample, n_feature,
        };
        Ok(sample)
    }

    /// Convert `polars::DataFrame` into `Sample`.
    /// Every column becomes a feature;
    /// call [`Sample::set_target`] to choose the label column.
    /// Without that call, training uses the column named `label`.
    pub fn from_dataframe(data: DataFrame) -> Result<Self> {
        let features = data.get_columns()
            .iter()
            .map(Feature::from_series)
            .collect::<Result<Vec<_>>>()?;

        Self::new(features)
    }

    /// Read a CSV format file to [`Sample`] type.
    /// This method returns `Err` if the file does not exist.
    pub(crate) fn from_csv<P>(file: P, has_header: bool) -> Result<Self>
        where P: AsRef<Path>,
    {
        let file = File::open(file)?;
        let reader = BufReader::new(file);
        Self::from_reader(reader, has_header)
    }

    /// Read a CSV from [`BufReader`].
    ///
    /// If the CSV does not have a header row,
    /// this method assigns a default name for each column:
    /// `Feat. [1]`, `Feat. [2]`, ..., `Feat. [n]`.
    /// A column is numeric if all of its cells parse as `f64`,
    /// and categorical otherwise.
    pub fn from_reader<R>(reader: BufReader<R>, has_header: bool)
        -> Result<Self>
        where R: Read,
    {
        let mut lines = reader.lines()
            .enumerate()
            .filter(|(_, line)| {
                line.as_ref().map(|l| !l.trim().is_empty()).unwrap_or(true)
            });

        let mut names = Vec::new();
        if has_header {
            if let Some((_, line)) = lines.next() {
                names = line?.split(',')
                    .map(|name| name.trim().to_string())
                    .collect::<Vec<_>>();
            }
        }

        let mut columns: Vec<Vec<String>> = Vec::new();
        for (i, line) in lines {
            let line = line?;
            let cells = line.split(',').collect::<Vec<_>>();

            // If the header does not exist,
            // construct a dummy header from the first row.
            if names.is_empty() {
                names = (1..=cells.len())
                    .map(|k| format!("Feat. [{k}]"))
                    .collect();
            }
            if columns.is_empty() {
                columns = vec![Vec::new(); names.len()];
            }

            if cells.len() != names.len() {
                return Err(TreeError::MalformedRow {
                    line: i + 1,
                    expected: names.len(),
                    found: cells.len(),
                });
            }

            cells.into_iter()
                .zip(columns.iter_mut())
                .for_each(|(cell, column)| { column.push(cell.to_string()); });
        }

        if columns.is_empty() {
            columns = vec![Vec::new(); names.len()];
        }

        let features = names.into_iter()
            .zip(columns)
            .map(|(name, cells)| Feature::from_cells(name, cells))
            .collect::<Vec<_>>();

        Self::new(features)
    }

    /// Set the feature of name `target` to the label column.
    /// The old label column, if any, is dropped.
    pub fn set_target<S: AsRef<str>>(mut self, target: S) -> Result<Self> {
        let target = target.as_ref();
        let pos = self.features.iter()
            .position(|feat| feat.name() == target)
            .ok_or_else(|| TreeError::UnknownTarget(target.to_string()))?;

        let target = self.features.remove(pos).into_vals();
        self.target = Some(target);
        self.n_feature -= 1;

        self.name_to_index = index_names(self.features.iter().map(Feature::name))?;

        Ok(self)
    }

    /// Returns this sample with its label column resolved.
    /// If no label column has been set,
    /// the feature named [`DEFAULT_TARGET`] becomes the label column
    /// of a copy of `self`.
    pub(crate) fn labeled(&self) -> Result<Cow<'_, Sample>> {
        if self.target.is_some() {
            return Ok(Cow::Borrowed(self));
        }
        if self.feature(DEFAULT_TARGET).is_none() {
            return Err(TreeError::TargetNotSpecified);
        }
        let sample = self.clone().set_target(DEFAULT_TARGET)?;
        Ok(Cow::Owned(sample))
    }

    /// Returns `Err` if some index in `indices` is not a row of `self`.
    pub(crate) fn check_rows(&self, indices: &[usize]) -> Result<()> {
        match indices.iter().find(|&&row| row >= self.n_sample) {
            Some(&row) => Err(TreeError::RowOutOfRange {
                row, n_sample: self.n_sample,
            }),
            None => Ok(()),
        }
    }

    /// Returns the slice of labels,
    /// or `None` if the label column is not specified.
    pub fn target(&self) -> Option<&[Label]> {
        self.target.as_deref()
    }

    /// Returns a slice of the features.
    pub fn features(&self) -> &[Feature] {
        &self.features[..]
    }

    /// Returns the feature named `name`.
    pub fn feature<S: AsRef<str>>(&self, name: S) -> Option<&Feature> {
        self.name_to_index.get(name.as_ref())
            .map(|&k| &self.features[k])
    }

    /// Returns the pair of the number of examples and
    /// the number of features
    pub fn shape(&self) -> (usize, usize) {
        (self.n_sample, self.n_feature)
    }

    /// Returns `true` if this sample has no rows.
    pub fn is_empty(&self) -> bool {
        self.n_sample == 0
    }

    /// Returns a view of the `row`-th example.
    pub fn row(&self, row: usize) -> SampleRow<'_> {
        SampleRow { sample: self, row }
    }

    /// Set the feature (column) names and return the old ones.
    pub fn replace_names<S, T>(&mut self, names: T) -> Result<Vec<String>>
        where S: ToString,
              T: AsRef<[S]>,
    {
        let names = names.as_ref();

        if self.n_feature != names.len() {
            return Err(TreeError::LengthMismatch {
                name: "names".to_string(),
                expected: self.n_feature,
                found: names.len(),
            });
        }

        // Validate the new names before touching any column.
        let name_to_index = index_names(names.iter().map(|name| name.to_string()))?;

        let old_names = names.iter()
            .zip(&mut self.features[..])
            .map(|(name, feature)| feature.replace_name(name.to_string()))
            .collect();

        self.name_to_index = name_to_index;
        Ok(old_names)
    }
}

fn index_names<I, S>(names: I) -> Result<HashMap<String, usize>>
    where I: IntoIterator<Item = S>,
          S: ToString,
{
    let names = names.into_iter();
    let mut name_to_index = HashMap::with_capacity(names.size_hint().0);
    for (i, name) in names.enumerate() {
        let name = name.to_string();
        if name_to_index.contains_key(&name) {
            return Err(TreeError::DuplicateFeature(name));
        }
        name_to_index.insert(name, i);
    }
    Ok(name_to_index)
}

impl<S> Index<S> for Sample
    where S: AsRef<str>
{
    type Output = Feature;

    fn index(&self, name: S) -> &Self::Output {
        let name = name.as_ref();
        self.feature(name)
            .unwrap_or_else(|| {
                panic!("The feature named `{name}` does not exist")
            })
    }
}

/// A borrowed row of a [`Sample`].
#[derive(Debug, Clone, Copy)]
pub struct SampleRow<'a> {
    sample: &'a Sample,
    row: usize,
}

impl SampleRow<'_> {
    /// Returns the row index in the underlying sample.
    pub fn index(&self) -> usize {
        self.row
    }
}

impl Example for SampleRow<'_> {
    fn value(&self, feature: &str) -> Option<ValueRef<'_>> {
        self.sample.feature(feature)
            .and_then(|feat| feat.get(self.row))
    }
}
