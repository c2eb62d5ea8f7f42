use polars::prelude::{DataType, Series};

use std::collections::HashSet;

use crate::{
    constants::BUFFER_SIZE,
    error::{Result, TreeError},
};
use super::value::*;

/// A named column of a `Sample`.
/// Every cell of a column has the same `ValueKind`.
#[derive(Debug, Clone)]
pub enum Feature {
    Numeric {
        name: String,
        vals: Vec<f64>,
    },
    Categorical {
        name: String,
        vals: Vec<String>,
    },
}

impl Feature {
    /// Construct an empty numeric column.
    pub fn numeric<T: ToString>(name: T) -> Self {
        Self::Numeric {
            name: name.to_string(),
            vals: Vec::with_capacity(BUFFER_SIZE),
        }
    }

    /// Construct an empty categorical column.
    pub fn categorical<T: ToString>(name: T) -> Self {
        Self::Categorical {
            name: name.to_string(),
            vals: Vec::with_capacity(BUFFER_SIZE),
        }
    }

    /// Construct a numeric column from the given values.
    pub fn from_numeric<T, I>(name: T, vals: I) -> Self
        where T: ToString,
              I: IntoIterator<Item = f64>,
    {
        Self::Numeric { name: name.to_string(), vals: vals.into_iter().collect() }
    }

    /// Construct a categorical column from the given values.
    pub fn from_categorical<T, I, S>(name: T, vals: I) -> Self
        where T: ToString,
              I: IntoIterator<Item = S>,
              S: ToString,
    {
        let vals = vals.into_iter()
            .map(|s| s.to_string())
            .collect();
        Self::Categorical { name: name.to_string(), vals }
    }

    /// Build a column from raw text cells.
    /// The column is numeric when every cell parses as `f64`.
    pub(crate) fn from_cells<T: ToString>(name: T, cells: Vec<String>)
        -> Self
    {
        let parsed = cells.iter()
            .map(|cell| cell.trim().parse::<f64>())
            .collect::<std::result::Result<Vec<_>, _>>();

        match parsed {
            Ok(vals) if !vals.is_empty() => Self::from_numeric(name, vals),
            _ => {
                let cells = cells.into_iter().map(|c| c.trim().to_string());
                Self::from_categorical(name, cells)
            },
        }
    }

    /// Convert `polars::Series` into `Feature`.
    pub fn from_series(series: &Series) -> Result<Self> {
        let name = series.name().to_string();

        let missing = |row: usize| TreeError::MissingValue {
            feature: name.clone(),
            row,
        };

        let feature = match series.dtype() {
            DataType::Utf8 => {
                let vals = series.utf8()?
                    .into_iter()
                    .enumerate()
                    .map(|(i, v)| v.map(str::to_string).ok_or_else(|| missing(i)))
                    .collect::<Result<Vec<_>>>()?;
                Self::Categorical { name: name.clone(), vals }
            },
            DataType::Boolean => {
                let vals = series.bool()?
                    .into_iter()
                    .enumerate()
                    .map(|(i, v)| v.map(|b| b.to_string()).ok_or_else(|| missing(i)))
                    .collect::<Result<Vec<_>>>()?;
                Self::Categorical { name: name.clone(), vals }
            },
            dtype if dtype.is_numeric() => {
                let casted = series.cast(&DataType::Float64)?;
                let vals = casted.f64()?
                    .into_iter()
                    .enumerate()
                    .map(|(i, v)| v.ok_or_else(|| missing(i)))
                    .collect::<Result<Vec<_>>>()?;
                Self::Numeric { name: name.clone(), vals }
            },
            dtype => {
                return Err(TreeError::UnsupportedType {
                    feature: name.clone(),
                    dtype: dtype.to_string(),
                });
            },
        };
        Ok(feature)
    }

    /// Get the feature name.
    pub fn name(&self) -> &str {
        match self {
            Self::Numeric     { name, .. } => name,
            Self::Categorical { name, .. } => name,
        }
    }

    /// Returns the kind of values this column holds.
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Numeric     { .. } => ValueKind::Numeric,
            Self::Categorical { .. } => ValueKind::Categorical,
        }
    }

    /// Returns the number of rows in this column.
    pub fn len(&self) -> usize {
        match self {
            Self::Numeric     { vals, .. } => vals.len(),
            Self::Categorical { vals, .. } => vals.len(),
        }
    }

    /// Returns `true` if the column has no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the value at `row`, or `None` when out of range.
    pub fn get(&self, row: usize) -> Option<ValueRef<'_>> {
        match self {
            Self::Numeric { vals, .. }
                => vals.get(row).copied().map(ValueRef::Numeric),
            Self::Categorical { vals, .. }
                => vals.get(row).map(|s| ValueRef::Categorical(s)),
        }
    }

    /// Returns the value at `row`.
    /// Panics if `row` is out of range, as slice indexing does.
    #[inline]
    pub fn at(&self, row: usize) -> ValueRef<'_> {
        match self {
            Self::Numeric     { vals, .. } => ValueRef::Numeric(vals[row]),
            Self::Categorical { vals, .. } => ValueRef::Categorical(&vals[row]),
        }
    }

    /// Append a value at the end of this column.
    pub fn append(&mut self, value: Value) -> Result<()> {
        match (self, value) {
            (Self::Numeric { vals, .. }, Value::Numeric(x)) => {
                vals.push(x);
            },
            (Self::Categorical { vals, .. }, Value::Categorical(s)) => {
                vals.push(s);
            },
            (feature, value) => {
                return Err(TreeError::TypeMismatch {
                    feature: feature.name().to_string(),
                    expected: feature.kind(),
                    found: value.kind(),
                });
            },
        }
        Ok(())
    }

    pub(crate) fn replace_name<S: ToString>(&mut self, new: S) -> String {
        let name = match self {
            Self::Numeric     { name, .. } => name,
            Self::Categorical { name, .. } => name,
        };
        std::mem::replace(name, new.to_string())
    }

    /// Consume the column and return its cells.
    pub fn into_vals(self) -> Vec<Value> {
        match self {
            Self::Numeric { vals, .. }
                => vals.into_iter().map(Value::Numeric).collect(),
            Self::Categorical { vals, .. }
                => vals.into_iter().map(Value::Categorical).collect(),
        }
    }

    /// Returns the distinct values at `indices`,
    /// in order of their first appearance.
    pub fn distinct_values(&self, indices: &[usize]) -> Vec<Value> {
        match self {
            Self::Numeric { vals, .. } => {
                let mut seen = HashSet::new();
                indices.iter()
                    .map(|&i| vals[i])
                    .filter(|&x| seen.insert(numeric_bits(x)))
                    .map(Value::Numeric)
                    .collect()
            },
            Self::Categorical { vals, .. } => {
                let mut seen = HashSet::new();
                indices.iter()
                    .map(|&i| vals[i].as_str())
                    .filter(|&s| seen.insert(s))
                    .map(|s| Value::Categorical(s.to_string()))
                    .collect()
            },
        }
    }

    /// Returns the number of distinct values over all rows.
    pub fn distinct_value_count(&self) -> usize {
        let indices = (0..self.len()).collect::<Vec<_>>();
        self.distinct_values(&indices).len()
    }
}
