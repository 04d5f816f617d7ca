//! Variant values and their canonical key form
//!
//! Axis keys and caller-supplied values are compared through one coercion:
//! everything is stringified (`true` -> `"true"`, `2` -> `"2"`). Truthiness is
//! computed on the typed value, so `0` and `false` are falsy while `"0"` is not.
//!
//! Floats have no variant of their own. Integral floats become integers
//! (`1.0` -> `1`) and the rest keep their decimal text (`0.5` -> `"0.5"`).

use serde::de::{self, Deserialize, Deserializer, Visitor};
use std::borrow::Cow;
use std::fmt::{self, Display, Formatter};

/// A value chosen for a variant axis.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum VariantValue {
    Str(String),
    Int(i64),
    Bool(bool),
}

impl VariantValue {
    /// Canonical key used for axis lookup and compound equality.
    pub fn key(&self) -> Cow<'_, str> {
        match self {
            Self::Str(s) => Cow::Borrowed(s.as_str()),
            Self::Int(i) => Cow::Owned(i.to_string()),
            Self::Bool(true) => Cow::Borrowed("true"),
            Self::Bool(false) => Cow::Borrowed("false"),
        }
    }

    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Str(s) => !s.is_empty(),
            Self::Int(i) => *i != 0,
            Self::Bool(b) => *b,
        }
    }

    /// Canonicalize a float: integral values become `Int`, others their decimal text.
    pub fn from_f64(v: f64) -> Self {
        const MAX_EXACT: f64 = 9_007_199_254_740_992.0;
        if v.is_finite() && v.fract() == 0.0 && v.abs() <= MAX_EXACT {
            Self::Int(v as i64)
        } else {
            Self::Str(v.to_string())
        }
    }

    /// Parse a command-line style literal: `true`/`false`, numbers, else a string.
    pub fn parse_literal(s: &str) -> Self {
        match s {
            "true" => Self::Bool(true),
            "false" => Self::Bool(false),
            _ => {
                if let Ok(i) = s.parse::<i64>() {
                    return Self::Int(i);
                }
                match s.parse::<f64>() {
                    Ok(f) if f.is_finite() => Self::from_f64(f),
                    _ => Self::Str(s.to_string()),
                }
            }
        }
    }
}

impl Display for VariantValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

struct VariantValueVisitor;

impl<'de> Visitor<'de> for VariantValueVisitor {
    type Value = VariantValue;

    fn expecting(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str("a string, number or boolean variant value")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(VariantValue::Str(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(VariantValue::Str(v))
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(VariantValue::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(VariantValue::Int(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(i64::try_from(v)
            .map(VariantValue::Int)
            .unwrap_or_else(|_| VariantValue::Str(v.to_string())))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(VariantValue::from_f64(v))
    }
}

impl<'de> Deserialize<'de> for VariantValue {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_any(VariantValueVisitor)
    }
}

impl From<String> for VariantValue {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<&str> for VariantValue {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<&String> for VariantValue {
    fn from(v: &String) -> Self {
        Self::Str(v.clone())
    }
}

impl From<bool> for VariantValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for VariantValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for VariantValue {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<u32> for VariantValue {
    fn from(v: u32) -> Self {
        Self::Int(i64::from(v))
    }
}

/// Values past `i64::MAX` keep their exact decimal key as a string.
impl From<usize> for VariantValue {
    fn from(v: usize) -> Self {
        i64::try_from(v)
            .map(Self::Int)
            .unwrap_or_else(|_| Self::Str(v.to_string()))
    }
}

impl From<f64> for VariantValue {
    fn from(v: f64) -> Self {
        Self::from_f64(v)
    }
}
