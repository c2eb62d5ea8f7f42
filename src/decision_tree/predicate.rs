//! A single-feature test used to split a sample.
use serde::{Serialize, Deserialize};

use std::fmt;

use crate::{
    error::{Result, TreeError},
    sample::{Example, Value, ValueKind, ValueRef},
};

/// The comparison a [`Predicate`] performs.
/// It is fixed by the kind of the comparison value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Condition {
    /// `feature >= threshold`.
    AtLeast(f64),
    /// `feature == category`.
    Equals(String),
}

/// A question "does `feature` satisfy the condition?".
///
/// A numeric comparison value yields `feature >= value`,
/// a categorical one yields `feature == value`.
/// Comparing against a value of the other kind is an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Predicate {
    feature: String,
    condition: Condition,
}

impl Predicate {
    /// Construct a predicate on `feature` against `value`.
    pub fn new<T, V>(feature: T, value: V) -> Self
        where T: ToString,
              V: Into<Value>,
    {
        let condition = match value.into() {
            Value::Numeric(x) => Condition::AtLeast(x),
            Value::Categorical(s) => Condition::Equals(s),
        };
        Self { feature: feature.to_string(), condition }
    }

    /// Returns the feature name this predicate tests.
    pub fn feature(&self) -> &str {
        &self.feature
    }

    pub fn condition(&self) -> &Condition {
        &self.condition
    }

    /// Returns the comparison value.
    pub fn value(&self) -> Value {
        match &self.condition {
            Condition::AtLeast(x) => Value::Numeric(*x),
            Condition::Equals(s) => Value::Categorical(s.clone()),
        }
    }

    /// Returns the kind of values this predicate accepts.
    pub fn kind(&self) -> ValueKind {
        match self.condition {
            Condition::AtLeast(_) => ValueKind::Numeric,
            Condition::Equals(_) => ValueKind::Categorical,
        }
    }

    /// Test a single feature value.
    #[inline]
    pub fn test(&self, value: ValueRef<'_>) -> Result<bool> {
        match (&self.condition, value) {
            (Condition::AtLeast(threshold), ValueRef::Numeric(x))
                => Ok(x >= *threshold),
            (Condition::Equals(category), ValueRef::Categorical(s))
                => Ok(s == category.as_str()),
            (_, value) => Err(TreeError::TypeMismatch {
                feature: self.feature.clone(),
                expected: self.kind(),
                found: value.kind(),
            }),
        }
    }

    /// Look up the feature in `example` and test it.
    pub fn matches<E>(&self, example: &E) -> Result<bool>
        where E: Example + ?Sized,
    {
        let value = example.value(&self.feature)
            .ok_or_else(|| TreeError::UnknownFeature(self.feature.clone()))?;
        self.test(value)
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let feature = &self.feature;
        match &self.condition {
            Condition::AtLeast(x) => write!(f, "Is {feature} >= {x}?"),
            Condition::Equals(s) => write!(f, "Is {feature} == {s}?"),
        }
    }
}
