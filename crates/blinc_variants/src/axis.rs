//! Variant axes

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

use crate::token::TokenValue;
use crate::value::VariantValue;

pub(crate) type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// One named variant dimension (e.g. `intent`, `size`).
///
/// Keys are stored in canonical string form and their token sets are joined
/// once at construction, so resolution is a hash lookup plus a push.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VariantAxis {
    values: FxIndexMap<String, String>,
}

impl VariantAxis {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare `key` with its token set. Re-declaring a key replaces its tokens
    /// but keeps the original declaration position.
    pub fn value(mut self, key: impl Into<VariantValue>, tokens: impl Into<TokenValue>) -> Self {
        self.insert(key, tokens);
        self
    }

    pub fn insert(&mut self, key: impl Into<VariantValue>, tokens: impl Into<TokenValue>) {
        let key = key.into().key().into_owned();
        self.values.insert(key, tokens.into().join());
    }

    /// Pre-joined tokens for a value, if the axis declares it.
    pub fn tokens(&self, value: &VariantValue) -> Option<&str> {
        self.values.get(&*value.key()).map(String::as_str)
    }

    pub fn contains(&self, value: &VariantValue) -> bool {
        self.values.contains_key(&*value.key())
    }

    /// Declared keys in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.values.keys().map(String::as_str)
    }

    /// Declared `(key, tokens)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, T> FromIterator<(K, T)> for VariantAxis
where
    K: Into<VariantValue>,
    T: Into<TokenValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        let mut axis = Self::new();
        for (k, t) in iter {
            axis.insert(k, t);
        }
        axis
    }
}
