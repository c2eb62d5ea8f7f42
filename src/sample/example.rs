//! Feature lookup for a single example.
use std::collections::HashMap;

use super::value::*;

/// A single example whose features can be looked up by name.
/// Classifiers accept anything that implements this trait.
pub trait Example {
    /// Returns the value of `feature`,
    /// or `None` if this example lacks it.
    fn value(&self, feature: &str) -> Option<ValueRef<'_>>;
}

/// A free-standing example, e.g., a new observation to classify.
///
/// ```
/// use minitree::prelude::*;
///
/// let row = Row::new()
///     .with("colour", "Red")
///     .with("diameter", 1);
/// assert_eq!(row.value("diameter"), Some(ValueRef::Numeric(1.0)));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    values: HashMap<String, Value>,
}

impl Row {
    /// Construct an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the value of `feature`. This method consumes `self`.
    pub fn with<K, V>(mut self, feature: K, value: V) -> Self
        where K: ToString,
              V: Into<Value>,
    {
        self.insert(feature, value);
        self
    }

    /// Set the value of `feature` and return the old one.
    pub fn insert<K, V>(&mut self, feature: K, value: V) -> Option<Value>
        where K: ToString,
              V: Into<Value>,
    {
        self.values.insert(feature.to_string(), value.into())
    }

    /// Returns the number of features in this row.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if this row has no features.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Row
    where K: ToString,
          V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let values = iter.into_iter()
            .map(|(k, v)| (k.to_string(), v.into()))
            .collect();
        Self { values }
    }
}

impl Example for Row {
    fn value(&self, feature: &str) -> Option<ValueRef<'_>> {
        self.values.get(feature).map(Value::as_value_ref)
    }
}

impl Example for HashMap<String, Value> {
    fn value(&self, feature: &str) -> Option<ValueRef<'_>> {
        self.get(feature).map(Value::as_value_ref)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_from_pairs() {
        let row = [("colour", Value::from("Red")), ("diameter", Value::from(1))]
            .into_iter()
            .collect::<Row>();
        assert_eq!(row.len(), 2);
        assert_eq!(row.value("colour"), Some(ValueRef::Categorical("Red")));
        assert_eq!(row.value("weight"), None);
        assert!(Row::new().is_empty());
    }

    #[test]
    fn test_hash_map_as_example() {
        let mut map = HashMap::new();
        map.insert("diameter".to_string(), Value::from(2.5));
        map.insert("colour".to_string(), Value::from("Green"));

        assert_eq!(map.value("diameter"), Some(ValueRef::Numeric(2.5)));
        assert_eq!(map.value("colour"), Some(ValueRef::Categorical("Green")));
        assert_eq!(map.value("label"), None);
    }
}
