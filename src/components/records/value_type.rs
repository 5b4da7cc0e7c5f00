use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ValueType {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl ValueType {
    /// Numeric view used by sums. NaN and non-numeric values yield `None`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ValueType::Int(i) => Some(*i as f64),
            ValueType::Float(f) if !f.is_nan() => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ValueType::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            ValueType::Str(_) => "STRING",
            ValueType::Int(_) => "INTEGER",
            ValueType::Float(_) => "FLOAT",
            ValueType::Bool(_) => "BOOLEAN",
        }
    }
}

// Float comparison tolerates rounding noise and treats NaN as equal to NaN
impl PartialEq for ValueType {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => {
                if a.is_nan() && b.is_nan() {
                    true
                } else {
                    (a - b).abs() < f64::EPSILON
                }
            }
            _ => false,
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueType::Str(s) => write!(f, "{}", s),
            ValueType::Int(i) => write!(f, "{}", i),
            ValueType::Float(x) => write!(f, "{}", x),
            ValueType::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for ValueType {
    fn from(value: &str) -> Self {
        ValueType::Str(value.to_string())
    }
}

impl From<String> for ValueType {
    fn from(value: String) -> Self {
        ValueType::Str(value)
    }
}

impl From<i64> for ValueType {
    fn from(value: i64) -> Self {
        ValueType::Int(value)
    }
}

impl From<f64> for ValueType {
    fn from(value: f64) -> Self {
        ValueType::Float(value)
    }
}

impl From<bool> for ValueType {
    fn from(value: bool) -> Self {
        ValueType::Bool(value)
    }
}
