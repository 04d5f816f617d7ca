//! Per-call variant selections

use rustc_hash::FxHashMap;

use crate::token::TokenValue;
use crate::value::VariantValue;

/// The caller's choice of axis values for one resolution.
///
/// Each axis is in one of three states:
/// - omitted: the config default applies
/// - set: the value is looked up on the axis
/// - unset: explicitly nothing, the default is suppressed
///
/// Extra tokens go in the `class` or `class_name` slot. They are aliases for
/// the same slot and `class` wins when both are given.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Selection {
    values: FxHashMap<String, Option<VariantValue>>,
    class: Option<TokenValue>,
    class_name: Option<TokenValue>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose `value` for `axis`.
    pub fn set(mut self, axis: impl Into<String>, value: impl Into<VariantValue>) -> Self {
        self.values.insert(axis.into(), Some(value.into()));
        self
    }

    /// Explicitly select nothing for `axis`, suppressing its default.
    pub fn unset(mut self, axis: impl Into<String>) -> Self {
        self.values.insert(axis.into(), None);
        self
    }

    /// Set the axis on `Some`, explicitly unset it on `None`.
    pub fn maybe(self, axis: impl Into<String>, value: Option<impl Into<VariantValue>>) -> Self {
        match value {
            Some(v) => self.set(axis, v),
            None => self.unset(axis),
        }
    }

    pub fn class(mut self, tokens: impl Into<TokenValue>) -> Self {
        self.class = Some(tokens.into());
        self
    }

    pub fn class_name(mut self, tokens: impl Into<TokenValue>) -> Self {
        self.class_name = Some(tokens.into());
        self
    }

    pub fn insert(&mut self, axis: impl Into<String>, value: Option<VariantValue>) {
        self.values.insert(axis.into(), value);
    }

    /// `None` if the axis was omitted, `Some(None)` if it was explicitly unset.
    pub fn get(&self, axis: &str) -> Option<Option<&VariantValue>> {
        self.values.get(axis).map(Option::as_ref)
    }

    pub fn is_provided(&self, axis: &str) -> bool {
        self.values.contains_key(axis)
    }

    pub fn axes(&self) -> impl Iterator<Item = &str> + '_ {
        self.values.keys().map(String::as_str)
    }

    /// The extra token slot, `class` taking precedence over `class_name`.
    pub fn extra(&self) -> Option<&TokenValue> {
        self.class.as_ref().or(self.class_name.as_ref())
    }

    /// A copy with the extra token slots cleared.
    pub fn without_extra(&self) -> Self {
        Self {
            values: self.values.clone(),
            class: None,
            class_name: None,
        }
    }
}
