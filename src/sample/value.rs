//! Cell values stored in a `Sample`.
use serde::{Serialize, Deserialize};

use std::fmt;
use std::hash::{Hash, Hasher};

/// A label is just a cell value of the target column.
pub type Label = Value;

/// The two kinds of values a feature can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueKind {
    /// Ordered values, compared with `>=`.
    Numeric,
    /// Unordered values, compared with `==`.
    Categorical,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Numeric => "numeric",
            Self::Categorical => "categorical",
        };
        write!(f, "{name}")
    }
}

/// An owned cell value.
///
/// Equality and hashing of numeric values go through the bit pattern
/// (with `-0.0` folded into `0.0`), so `Value` can key hash maps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Value {
    Numeric(f64),
    Categorical(String),
}

/// A borrowed view of a cell value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValueRef<'a> {
    Numeric(f64),
    Categorical(&'a str),
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Numeric(_) => ValueKind::Numeric,
            Self::Categorical(_) => ValueKind::Categorical,
        }
    }

    pub fn as_value_ref(&self) -> ValueRef<'_> {
        match self {
            Self::Numeric(x) => ValueRef::Numeric(*x),
            Self::Categorical(s) => ValueRef::Categorical(s),
        }
    }
}

impl ValueRef<'_> {
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Numeric(_) => ValueKind::Numeric,
            Self::Categorical(_) => ValueKind::Categorical,
        }
    }

    pub fn to_value(self) -> Value {
        match self {
            Self::Numeric(x) => Value::Numeric(x),
            Self::Categorical(s) => Value::Categorical(s.to_string()),
        }
    }
}

#[inline(always)]
pub(crate) fn numeric_bits(x: f64) -> u64 {
    if x == 0f64 { 0f64.to_bits() } else { x.to_bits() }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Numeric(a), Self::Numeric(b))
                => numeric_bits(*a) == numeric_bits(*b),
            (Self::Categorical(a), Self::Categorical(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Numeric(x) => {
                0u8.hash(state);
                numeric_bits(*x).hash(state);
            },
            Self::Categorical(s) => {
                1u8.hash(state);
                s.hash(state);
            },
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.as_value_ref(), f)
    }
}

impl fmt::Display for ValueRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(x) => write!(f, "{x}"),
            Self::Categorical(s) => write!(f, "{s}"),
        }
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Self::Numeric(x)
    }
}

impl From<i64> for Value {
    fn from(x: i64) -> Self {
        Self::Numeric(x as f64)
    }
}

impl From<i32> for Value {
    fn from(x: i32) -> Self {
        Self::Numeric(x as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Categorical(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Categorical(s)
    }
}
