//! Variant resolution
//!
//! Output order is fixed: base tokens, axes in declaration order, matching
//! compound rules in declaration order, then the selection's extra tokens.
//! Nothing here can fail; unknown axes and undeclared values contribute nothing.

use std::fmt;
use std::sync::Arc;

use crate::config::VariantConfig;
use crate::dedupe::{dedupe_tokens, DedupePolicy};
use crate::selection::Selection;
use crate::token::TokenValue;
use crate::value::VariantValue;

impl VariantConfig {
    /// Resolve a selection into a class string.
    pub fn resolve(&self, selection: &Selection) -> String {
        let mut out = Vec::new();
        self.collect_variant_tokens(selection, &mut out);
        if let Some(extra) = selection.extra() {
            extra.collect_into(&mut out);
        }
        out.join(" ")
    }

    /// The value an axis resolves to: the caller's choice if provided (even
    /// when explicitly unset), otherwise the default.
    pub fn effective_value<'a>(
        &'a self,
        selection: &'a Selection,
        axis: &str,
    ) -> Option<&'a VariantValue> {
        match selection.get(axis) {
            Some(provided) => provided,
            None => self.default_variants.get(axis),
        }
    }

    /// Base, axis and compound tokens, without the selection's extra tokens.
    fn collect_variant_tokens<'a>(&'a self, selection: &'a Selection, out: &mut Vec<&'a str>) {
        out.extend(self.base.split_whitespace());

        for (name, axis) in &self.variants {
            let Some(value) = self.effective_value(selection, name) else {
                continue;
            };
            match axis.tokens(value) {
                Some(tokens) => out.extend(tokens.split_whitespace()),
                None => tracing::trace!(axis = %name, value = %value, "variant value not declared"),
            }
        }

        if tracing::enabled!(tracing::Level::TRACE) {
            for axis in selection.axes() {
                if !self.variants.contains_key(axis) {
                    tracing::trace!(axis, "selection names an undeclared axis");
                }
            }
        }

        for rule in &self.compound_variants {
            if rule.matches(|axis| self.effective_value(selection, axis)) {
                out.extend(rule.tokens().split_whitespace());
            }
        }
    }
}

/// Resolve `selection` against `config`. `None` behaves like an empty selection.
pub fn resolve(config: &VariantConfig, selection: Option<&Selection>) -> String {
    match selection {
        Some(selection) => config.resolve(selection),
        None => config.resolve(&Selection::new()),
    }
}

/// Resolve several configs against one selection and merge the results.
///
/// Variant tokens from all configs are concatenated in argument order with
/// duplicates removed (first occurrence wins). The selection's extra tokens
/// are appended once at the end.
pub fn compose(configs: &[&VariantConfig], selection: &Selection) -> String {
    let mut variant_tokens = Vec::new();
    for config in configs {
        config.collect_variant_tokens(selection, &mut variant_tokens);
    }
    let mut out = dedupe_tokens(DedupePolicy::FirstWins, variant_tokens);
    if let Some(extra) = selection.extra() {
        extra.collect_into(&mut out);
    }
    out.join(" ")
}

/// Post-processing hook applied to every finished class string.
pub type CompleteHook = Arc<dyn Fn(String) -> String + Send + Sync>;

/// Resolution entry point carrying optional hooks.
///
/// A default `Resolver` behaves exactly like the free [`resolve`], [`compose`]
/// and [`cx`](crate::cx) functions.
///
/// ```rust
/// use blinc_variants::{Resolver, Selection, VariantConfig};
///
/// let config = VariantConfig::builder().base("p-2 p-4").build();
/// let resolver = Resolver::new().on_complete(|s| s.to_uppercase());
/// assert_eq!(resolver.resolve(&config, &Selection::new()), "P-2 P-4");
/// ```
#[derive(Clone, Default)]
pub struct Resolver {
    on_complete: Option<CompleteHook>,
}

impl Resolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a hook run on every output, e.g. a class merging pass.
    pub fn on_complete<F>(mut self, hook: F) -> Self
    where
        F: Fn(String) -> String + Send + Sync + 'static,
    {
        self.on_complete = Some(Arc::new(hook));
        self
    }

    pub fn resolve(&self, config: &VariantConfig, selection: &Selection) -> String {
        self.complete(config.resolve(selection))
    }

    pub fn compose(&self, configs: &[&VariantConfig], selection: &Selection) -> String {
        self.complete(compose(configs, selection))
    }

    pub fn cx<I, T>(&self, values: I) -> String
    where
        I: IntoIterator<Item = T>,
        T: Into<TokenValue>,
    {
        self.complete(crate::token::cx(values))
    }

    fn complete(&self, out: String) -> String {
        match &self.on_complete {
            Some(hook) => hook(out),
            None => out,
        }
    }
}

impl fmt::Debug for Resolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolver")
            .field("on_complete", &self.on_complete.is_some())
            .finish()
    }
}
