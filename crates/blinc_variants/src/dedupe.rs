//! Token deduplication for composed class strings

use rustc_hash::FxHashSet;

/// Which occurrence of a repeated token survives.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DedupePolicy {
    /// Keep the first occurrence, in first-seen order.
    #[default]
    FirstWins,
    /// Keep the last occurrence, at its last position.
    LastWins,
}

/// Split every input on whitespace and drop repeated tokens, first occurrence wins.
///
/// ```rust
/// assert_eq!(blinc_variants::dedupe(["a b", "b c"]), "a b c");
/// ```
pub fn dedupe<I, S>(inputs: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    dedupe_with(DedupePolicy::FirstWins, inputs)
}

/// [`dedupe`] with an explicit policy.
pub fn dedupe_with<I, S>(policy: DedupePolicy, inputs: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let inputs: Vec<S> = inputs.into_iter().collect();
    let tokens = inputs.iter().flat_map(|s| s.as_ref().split_whitespace());
    dedupe_tokens(policy, tokens).join(" ")
}

pub(crate) fn dedupe_tokens<'a>(
    policy: DedupePolicy,
    tokens: impl IntoIterator<Item = &'a str>,
) -> Vec<&'a str> {
    let mut seen = FxHashSet::default();
    match policy {
        DedupePolicy::FirstWins => tokens.into_iter().filter(|t| seen.insert(*t)).collect(),
        DedupePolicy::LastWins => {
            let all: Vec<&str> = tokens.into_iter().collect();
            let mut out: Vec<&str> = all.into_iter().rev().filter(|t| seen.insert(*t)).collect();
            out.reverse();
            out
        }
    }
}
