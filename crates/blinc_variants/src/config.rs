//! Variant configuration
//!
//! A [`VariantConfig`] is built once, either through [`VariantConfigBuilder`]
//! or from a TOML/JSON document, and is immutable afterwards. All keys are
//! normalized and all token sets joined at construction.
//!
//! # File format
//!
//! ```toml
//! base = ["font-semibold", "border", "rounded"]
//!
//! [variants.intent]
//! primary = ["bg-blue-500", "text-white"]
//! secondary = "bg-white text-gray-800"
//!
//! [variants.size]
//! small = "text-sm py-1 px-2"
//! medium = "text-base py-2 px-4"
//!
//! [[compound_variants]]
//! intent = "primary"
//! size = "medium"
//! class = "uppercase"
//!
//! [default_variants]
//! intent = "primary"
//! size = "medium"
//! ```

use indexmap::IndexMap;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::axis::{FxIndexMap, VariantAxis};
use crate::compound::{CompoundRule, Constraint};
use crate::error::VariantError;
use crate::token::TokenValue;
use crate::value::VariantValue;

/// Base tokens, variant axes, compound rules and default selections.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VariantConfig {
    pub(crate) base: String,
    pub(crate) variants: FxIndexMap<String, VariantAxis>,
    pub(crate) compound_variants: Vec<CompoundRule>,
    pub(crate) default_variants: FxIndexMap<String, VariantValue>,
}

impl VariantConfig {
    pub fn builder() -> VariantConfigBuilder {
        VariantConfigBuilder::default()
    }

    /// Parse a TOML variant config.
    pub fn from_toml_str(src: &str) -> Result<Self, VariantError> {
        let raw: RawConfig = toml::from_str(src)?;
        Ok(raw.into_config())
    }

    /// Parse a JSON variant config.
    pub fn from_json_str(src: &str) -> Result<Self, VariantError> {
        let raw: RawConfig = serde_json::from_str(src)?;
        Ok(raw.into_config())
    }

    /// Load a config file. `.json` files are parsed as JSON, anything else as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, VariantError> {
        let path = path.as_ref();
        let src = fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let config = if is_json {
            Self::from_json_str(&src)?
        } else {
            Self::from_toml_str(&src)?
        };
        tracing::debug!("loaded variant config {}", path.display());
        Ok(config)
    }

    /// Pre-joined base tokens.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Axis names in declaration order.
    pub fn axes(&self) -> impl Iterator<Item = &str> + '_ {
        self.variants.keys().map(String::as_str)
    }

    pub fn axis(&self, name: &str) -> Option<&VariantAxis> {
        self.variants.get(name)
    }

    pub fn default_for(&self, axis: &str) -> Option<&VariantValue> {
        self.default_variants.get(axis)
    }

    pub fn compound_rules(&self) -> &[CompoundRule] {
        &self.compound_variants
    }

    /// Check the config for references that can never match.
    ///
    /// Resolution tolerates all of these; this is a lint for config authors.
    pub fn validate(&self) -> Result<(), VariantError> {
        match self.issues().into_iter().next() {
            Some(issue) => Err(issue),
            None => Ok(()),
        }
    }

    /// Every problem [`validate`](Self::validate) would report, in config order.
    pub fn issues(&self) -> Vec<VariantError> {
        let mut issues = Vec::new();

        for (axis, value) in &self.default_variants {
            match self.variants.get(axis) {
                None => issues.push(VariantError::UnknownAxis {
                    context: "default_variants".to_string(),
                    axis: axis.clone(),
                }),
                Some(declared) if !declared.contains(value) => {
                    issues.push(VariantError::UnknownValue {
                        axis: axis.clone(),
                        value: value.key().into_owned(),
                    })
                }
                Some(_) => {}
            }
        }

        for (idx, rule) in self.compound_variants.iter().enumerate() {
            for (axis, constraint) in rule.constraints() {
                if !self.variants.contains_key(axis) {
                    issues.push(VariantError::UnknownAxis {
                        context: format!("compound rule #{idx}"),
                        axis: axis.to_string(),
                    });
                }
                if matches!(constraint, Constraint::AnyOf(keys) if keys.is_empty()) {
                    issues.push(VariantError::EmptyConstraint {
                        rule: idx,
                        axis: axis.to_string(),
                    });
                }
            }
        }

        issues
    }
}

/// Builder for [`VariantConfig`].
///
/// ```rust
/// use blinc_variants::{CompoundRule, Selection, VariantAxis, VariantConfig};
///
/// let button = VariantConfig::builder()
///     .base(["font-semibold", "border", "rounded"])
///     .variant(
///         "intent",
///         VariantAxis::new()
///             .value("primary", "bg-blue-500 text-white")
///             .value("secondary", "bg-white text-gray-800"),
///     )
///     .compound(CompoundRule::new().when("intent", "primary").class("shadow"))
///     .default_variant("intent", "primary")
///     .build();
///
/// assert_eq!(
///     button.resolve(&Selection::new()),
///     "font-semibold border rounded bg-blue-500 text-white shadow"
/// );
/// ```
#[derive(Clone, Debug, Default)]
pub struct VariantConfigBuilder {
    config: VariantConfig,
}

impl VariantConfigBuilder {
    /// Append tokens to the base set.
    pub fn base(mut self, tokens: impl Into<TokenValue>) -> Self {
        let joined = tokens.into().join();
        if !joined.is_empty() {
            if !self.config.base.is_empty() {
                self.config.base.push(' ');
            }
            self.config.base.push_str(&joined);
        }
        self
    }

    /// Declare an axis. Redeclaring a name replaces the axis in its original position.
    pub fn variant(mut self, name: impl Into<String>, axis: VariantAxis) -> Self {
        self.config.variants.insert(name.into(), axis);
        self
    }

    pub fn compound(mut self, rule: CompoundRule) -> Self {
        self.config.compound_variants.push(rule);
        self
    }

    pub fn default_variant(mut self, axis: impl Into<String>, value: impl Into<VariantValue>) -> Self {
        self.config.default_variants.insert(axis.into(), value.into());
        self
    }

    pub fn build(self) -> VariantConfig {
        tracing::debug!(
            axes = self.config.variants.len(),
            compounds = self.config.compound_variants.len(),
            "built variant config"
        );
        self.config
    }
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(default)]
    base: TokenValue,
    #[serde(default)]
    variants: IndexMap<String, IndexMap<String, TokenValue>>,
    #[serde(default, alias = "compoundVariants")]
    compound_variants: Vec<RawCompound>,
    #[serde(default, alias = "defaultVariants")]
    default_variants: IndexMap<String, Option<VariantValue>>,
}

#[derive(Debug, Deserialize)]
struct RawCompound {
    #[serde(default)]
    class: TokenValue,
    #[serde(default, rename = "className")]
    class_name: TokenValue,
    #[serde(flatten)]
    constraints: IndexMap<String, Constraint>,
}

impl RawConfig {
    fn into_config(self) -> VariantConfig {
        let mut builder = VariantConfig::builder().base(self.base);

        for (name, values) in self.variants {
            builder = builder.variant(name, values.into_iter().collect());
        }

        for raw in self.compound_variants {
            let mut rule = CompoundRule::new();
            for (axis, constraint) in raw.constraints {
                rule = rule.when(axis, constraint);
            }
            builder = builder.compound(rule.class(raw.class).class(raw.class_name));
        }

        // A null default is the same as no default.
        for (axis, value) in self.default_variants {
            if let Some(value) = value {
                builder = builder.default_variant(axis, value);
            }
        }

        let config = builder.build();
        for issue in config.issues() {
            tracing::warn!("variant config: {issue}");
        }
        config
    }
}
