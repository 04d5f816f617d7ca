//! Token values and the token joiner
//!
//! A token set may be a single string, a nested list, or absent. Joining walks
//! it depth-first, left to right, splitting string leaves on whitespace so the
//! output is always single-spaced with no leading or trailing blanks.

use serde::de::{self, Deserialize, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use std::fmt;

/// A possibly nested, possibly empty set of tokens.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum TokenValue {
    Token(String),
    List(Vec<TokenValue>),
    #[default]
    Absent,
}

impl TokenValue {
    pub fn is_absent(&self) -> bool {
        match self {
            Self::Token(s) => s.trim().is_empty(),
            Self::List(items) => items.iter().all(TokenValue::is_absent),
            Self::Absent => true,
        }
    }

    /// Append every token leaf to `out` in traversal order.
    pub fn collect_into<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Self::Token(s) => out.extend(s.split_whitespace()),
            Self::List(items) => {
                for item in items {
                    item.collect_into(out);
                }
            }
            Self::Absent => {}
        }
    }

    /// Join this token set into a single-spaced string.
    pub fn join(&self) -> String {
        let mut parts = Vec::new();
        self.collect_into(&mut parts);
        parts.join(" ")
    }
}

/// Join a single token value. Absent or whitespace-only input yields `""`.
pub fn join(value: &TokenValue) -> String {
    value.join()
}

/// Join any sequence of token-like values.
///
/// ```rust
/// use blinc_variants::cx;
///
/// let active = true;
/// let s = cx(["btn", "  btn-lg ", ""])
///     + " "
///     + &cx([Some("focus"), None, active.then_some("active")]);
/// assert_eq!(s, "btn btn-lg focus active");
/// ```
pub fn cx<I, T>(values: I) -> String
where
    I: IntoIterator<Item = T>,
    T: Into<TokenValue>,
{
    TokenValue::List(values.into_iter().map(Into::into).collect()).join()
}

/// Join a heterogeneous list of token-like values.
///
/// Examples:
/// - `cx!("btn", "btn-lg")`
/// - `cx!("btn", (is_active, "active"), extra_classes)`
#[macro_export]
macro_rules! cx {
    () => {
        ::std::string::String::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::TokenValue::List(vec![$($crate::TokenValue::from($value)),+]).join()
    };
}

impl From<&str> for TokenValue {
    fn from(v: &str) -> Self {
        Self::Token(v.to_string())
    }
}

impl From<String> for TokenValue {
    fn from(v: String) -> Self {
        Self::Token(v)
    }
}

impl From<&String> for TokenValue {
    fn from(v: &String) -> Self {
        Self::Token(v.clone())
    }
}

impl From<&TokenValue> for TokenValue {
    fn from(v: &TokenValue) -> Self {
        v.clone()
    }
}

/// `false` and `true` both contribute nothing on their own.
impl From<bool> for TokenValue {
    fn from(_: bool) -> Self {
        Self::Absent
    }
}

impl From<()> for TokenValue {
    fn from(_: ()) -> Self {
        Self::Absent
    }
}

/// Conditional token: included only when the flag is set.
impl<T: Into<TokenValue>> From<(bool, T)> for TokenValue {
    fn from((on, value): (bool, T)) -> Self {
        if on {
            value.into()
        } else {
            Self::Absent
        }
    }
}

impl<T: Into<TokenValue>> From<Option<T>> for TokenValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Self::Absent)
    }
}

impl<T: Into<TokenValue>> From<Vec<T>> for TokenValue {
    fn from(v: Vec<T>) -> Self {
        Self::List(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<TokenValue>, const N: usize> From<[T; N]> for TokenValue {
    fn from(v: [T; N]) -> Self {
        Self::List(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<TokenValue> + Clone> From<&[T]> for TokenValue {
    fn from(v: &[T]) -> Self {
        Self::List(v.iter().cloned().map(Into::into).collect())
    }
}

struct TokenValueVisitor;

impl<'de> Visitor<'de> for TokenValueVisitor {
    type Value = TokenValue;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a token string, a list of tokens, false or null")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(TokenValue::Token(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(TokenValue::Token(v))
    }

    // Wrong-typed leaves are skipped rather than rejected.
    fn visit_bool<E: de::Error>(self, _: bool) -> Result<Self::Value, E> {
        Ok(TokenValue::Absent)
    }

    fn visit_i64<E: de::Error>(self, _: i64) -> Result<Self::Value, E> {
        Ok(TokenValue::Absent)
    }

    fn visit_u64<E: de::Error>(self, _: u64) -> Result<Self::Value, E> {
        Ok(TokenValue::Absent)
    }

    fn visit_f64<E: de::Error>(self, _: f64) -> Result<Self::Value, E> {
        Ok(TokenValue::Absent)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(TokenValue::Absent)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(TokenValue::Absent)
    }

    fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<Self::Value, D::Error> {
        d.deserialize_any(self)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element::<TokenValue>()? {
            items.push(item);
        }
        Ok(TokenValue::List(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(TokenValue::Absent)
    }
}

impl<'de> Deserialize<'de> for TokenValue {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_any(TokenValueVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn nested_sparse_values_join_depth_first() {
        let v = TokenValue::from(vec![
            TokenValue::from("a"),
            TokenValue::Absent,
            TokenValue::from(vec![TokenValue::from("b"), TokenValue::from(false)]),
            TokenValue::from(Some("c")),
            TokenValue::from(None::<&str>),
        ]);
        assert_eq!(join(&v), "a b c");
    }

    #[test]
    fn whitespace_never_doubles() {
        let v = TokenValue::from(["  a  b ", "", "   ", "c\td"]);
        assert_eq!(v.join(), "a b c d");
    }

    #[test]
    fn empty_inputs_yield_empty_string() {
        assert_eq!(TokenValue::Absent.join(), "");
        assert_eq!(TokenValue::from(Vec::<String>::new()).join(), "");
        assert!(TokenValue::from(["", " "]).is_absent());
        assert_eq!(cx!(), "");
    }

    #[test]
    fn macro_accepts_mixed_inputs() {
        let extra = String::from("mt-2");
        let s = cx!("btn", (true, "on"), (false, "off"), None::<&str>, &extra, ["x", "y"]);
        assert_eq!(s, "btn on mt-2 x y");
    }

    #[test]
    fn deserialize_skips_non_string_leaves() {
        let v: TokenValue = serde_json::from_str(r#"["a", false, null, 3, ["b", ["c"]]]"#).unwrap();
        assert_eq!(v.join(), "a b c");
        let v: TokenValue = serde_json::from_str("false").unwrap();
        assert!(v.is_absent());
        let v: TokenValue = serde_json::from_str(r#"["a", {"b": 1}, "c"]"#).unwrap();
        assert_eq!(v.join(), "a c");
    }
}
