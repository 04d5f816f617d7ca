//! Compound variant rules
//!
//! A rule is a conjunction of per-axis constraints. Within one axis a value
//! set is an OR; across axes every constraint must hold.

use serde::de::{self, Deserialize, Deserializer, SeqAccess, Visitor};
use std::fmt;

use crate::axis::FxIndexMap;
use crate::token::TokenValue;
use crate::value::VariantValue;

/// A constraint on the effective value of one axis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Constraint {
    /// The axis resolved to a truthy value.
    Truthy,
    /// The axis resolved to a falsy value or to nothing.
    Falsy,
    /// The axis resolved to exactly this canonical key.
    Is(String),
    /// The axis resolved to one of these canonical keys.
    AnyOf(Vec<String>),
}

impl Constraint {
    pub fn is(value: impl Into<VariantValue>) -> Self {
        Self::Is(value.into().key().into_owned())
    }

    pub fn any_of<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<VariantValue>,
    {
        Self::AnyOf(
            values
                .into_iter()
                .map(|v| v.into().key().into_owned())
                .collect(),
        )
    }

    /// Check the constraint against an axis's effective value.
    pub fn matches(&self, value: Option<&VariantValue>) -> bool {
        match self {
            Self::Truthy => value.is_some_and(VariantValue::is_truthy),
            Self::Falsy => !value.is_some_and(VariantValue::is_truthy),
            Self::Is(key) => value.is_some_and(|v| v.key() == key.as_str()),
            Self::AnyOf(keys) => value.is_some_and(|v| {
                let k = v.key();
                keys.iter().any(|key| key.as_str() == k)
            }),
        }
    }
}

/// Boolean constraints are the truthy/falsy sentinels.
impl From<bool> for Constraint {
    fn from(v: bool) -> Self {
        if v {
            Self::Truthy
        } else {
            Self::Falsy
        }
    }
}

impl From<&str> for Constraint {
    fn from(v: &str) -> Self {
        Self::is(v)
    }
}

impl From<String> for Constraint {
    fn from(v: String) -> Self {
        Self::Is(v)
    }
}

impl From<i64> for Constraint {
    fn from(v: i64) -> Self {
        Self::is(v)
    }
}

impl From<i32> for Constraint {
    fn from(v: i32) -> Self {
        Self::is(v)
    }
}

impl From<f64> for Constraint {
    fn from(v: f64) -> Self {
        Self::is(v)
    }
}

impl<V: Into<VariantValue>> From<Vec<V>> for Constraint {
    fn from(v: Vec<V>) -> Self {
        Self::any_of(v)
    }
}

impl<V: Into<VariantValue>, const N: usize> From<[V; N]> for Constraint {
    fn from(v: [V; N]) -> Self {
        Self::any_of(v)
    }
}

struct ConstraintVisitor;

impl<'de> Visitor<'de> for ConstraintVisitor {
    type Value = Constraint;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a variant value, a list of variant values, or a boolean")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(Constraint::from(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(Constraint::is(v))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(Constraint::Is(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(Constraint::is(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(Constraint::Is(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(Constraint::is(v))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut keys = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(v) = seq.next_element::<VariantValue>()? {
            keys.push(v.key().into_owned());
        }
        Ok(Constraint::AnyOf(keys))
    }
}

impl<'de> Deserialize<'de> for Constraint {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_any(ConstraintVisitor)
    }
}

/// Tokens appended when every axis constraint holds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompoundRule {
    constraints: FxIndexMap<String, Constraint>,
    tokens: String,
}

impl CompoundRule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Constrain `axis`. A later constraint on the same axis replaces the earlier one.
    pub fn when(mut self, axis: impl Into<String>, constraint: impl Into<Constraint>) -> Self {
        self.constraints.insert(axis.into(), constraint.into());
        self
    }

    /// Append tokens to the rule's token set.
    pub fn class(mut self, tokens: impl Into<TokenValue>) -> Self {
        let joined = tokens.into().join();
        if !joined.is_empty() {
            if !self.tokens.is_empty() {
                self.tokens.push(' ');
            }
            self.tokens.push_str(&joined);
        }
        self
    }

    pub fn constraints(&self) -> impl Iterator<Item = (&str, &Constraint)> + '_ {
        self.constraints.iter().map(|(k, c)| (k.as_str(), c))
    }

    pub fn tokens(&self) -> &str {
        &self.tokens
    }

    /// Evaluate the rule against effective axis values.
    ///
    /// A rule with no constraints always matches.
    pub fn matches<'a, F>(&self, mut effective: F) -> bool
    where
        F: FnMut(&str) -> Option<&'a VariantValue>,
    {
        self.constraints
            .iter()
            .all(|(axis, constraint)| constraint.matches(effective(axis)))
    }
}
