//! Variant config files and selection flags

use anyhow::{Context, Result};
use blinc_variants::{Selection, VariantConfig, VariantValue};
use serde::Serialize;
use std::path::Path;

/// Load a variant config (TOML, or JSON for `.json` files)
pub fn load_config(path: &Path) -> Result<VariantConfig> {
    if !path.exists() {
        anyhow::bail!("No variant config found at {}", path.display());
    }

    VariantConfig::load(path).with_context(|| format!("Failed to load {}", path.display()))
}

/// Resolve a selection, optionally dropping repeated variant tokens.
///
/// Extra tokens are appended as given either way.
pub fn render(config: &VariantConfig, selection: &Selection, dedupe: bool) -> String {
    if dedupe {
        blinc_variants::compose(&[config], selection)
    } else {
        config.resolve(selection)
    }
}

/// Parse an `axis=value` flag
pub fn parse_assignment(s: &str) -> Result<(String, VariantValue)> {
    let Some((axis, value)) = s.split_once('=') else {
        anyhow::bail!("expected `axis=value`, got `{s}`");
    };
    let axis = axis.trim();
    if axis.is_empty() {
        anyhow::bail!("empty axis name in `{s}`");
    }
    Ok((axis.to_string(), VariantValue::parse_literal(value.trim())))
}

/// Selection flags shared by the resolving subcommands
pub struct SelectionArgs<'a> {
    pub set: &'a [String],
    pub unset: &'a [String],
    pub class: Option<&'a str>,
    pub class_name: Option<&'a str>,
}

impl SelectionArgs<'_> {
    pub fn to_selection(&self) -> Result<Selection> {
        let mut selection = Selection::new();
        for assignment in self.set {
            let (axis, value) = parse_assignment(assignment)?;
            selection.insert(axis, Some(value));
        }
        for axis in self.unset {
            selection.insert(axis.clone(), None);
        }
        if let Some(class) = self.class {
            selection = selection.class(class);
        }
        if let Some(class_name) = self.class_name {
            selection = selection.class_name(class_name);
        }
        Ok(selection)
    }
}

/// Axis listing for `blinc-variants axes`
#[derive(Debug, Serialize)]
pub struct AxisSummary {
    pub name: String,
    pub values: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

pub fn summarize(config: &VariantConfig) -> Vec<AxisSummary> {
    config
        .axes()
        .map(|name| AxisSummary {
            name: name.to_string(),
            values: config
                .axis(name)
                .map(|axis| axis.keys().map(str::to_string).collect())
                .unwrap_or_default(),
            default: config.default_for(name).map(|v| v.key().into_owned()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assignments_parse_literals() {
        let (axis, value) = parse_assignment("margin=2").unwrap();
        assert_eq!(axis, "margin");
        assert_eq!(value, VariantValue::Int(2));

        let (_, value) = parse_assignment("disabled = true").unwrap();
        assert_eq!(value, VariantValue::Bool(true));

        let (_, value) = parse_assignment("tone=a=b").unwrap();
        assert_eq!(value, VariantValue::from("a=b"));

        assert!(parse_assignment("intent").is_err());
        assert!(parse_assignment("=primary").is_err());
    }

    #[test]
    fn selection_flags() {
        let set = vec!["size=small".to_string()];
        let unset = vec!["intent".to_string()];
        let args = SelectionArgs {
            set: &set,
            unset: &unset,
            class: Some("mt-2"),
            class_name: None,
        };
        let sel = args.to_selection().unwrap();
        assert_eq!(sel.get("size"), Some(Some(&VariantValue::from("small"))));
        assert_eq!(sel.get("intent"), Some(None));
        assert!(sel.extra().is_some());
    }

    #[test]
    fn dedupe_leaves_extra_tokens_alone() {
        let config = VariantConfig::from_toml_str(
            r#"
base = "btn rounded"

[variants.size]
sm = "rounded text-sm"
"#,
        )
        .unwrap();
        let sel = Selection::new().set("size", "sm").class("rounded mt-2");

        assert_eq!(render(&config, &sel, false), "btn rounded rounded text-sm rounded mt-2");
        assert_eq!(render(&config, &sel, true), "btn rounded text-sm rounded mt-2");
    }

    #[test]
    fn load_config_reads_toml_and_json() {
        let dir = std::env::temp_dir().join(format!("blinc_variants_cli_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let toml_path = dir.join("badge.toml");
        std::fs::write(&toml_path, "base = \"badge\"\n").unwrap();
        let json_path = dir.join("badge.json");
        std::fs::write(&json_path, r#"{"base": ["badge", "json"]}"#).unwrap();
        let broken_path = dir.join("broken.json");
        std::fs::write(&broken_path, "{").unwrap();

        assert_eq!(load_config(&toml_path).unwrap().base(), "badge");
        assert_eq!(load_config(&json_path).unwrap().base(), "badge json");

        let err = load_config(&broken_path).unwrap_err();
        assert!(err.to_string().starts_with("Failed to load"), "{err}");
        let err = load_config(&dir.join("missing.toml")).unwrap_err();
        assert!(err.to_string().starts_with("No variant config found"), "{err}");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn summary_lists_axes_in_order() {
        let config = VariantConfig::from_toml_str(
            r#"
[variants.size]
sm = "text-sm"
lg = "text-lg"

[variants.tone]
calm = "bg-blue-50"

[default_variants]
size = "sm"
"#,
        )
        .unwrap();
        let summary = summarize(&config);
        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].name, "size");
        assert_eq!(summary[0].values, vec!["sm", "lg"]);
        assert_eq!(summary[0].default.as_deref(), Some("sm"));
        assert_eq!(summary[1].default, None);
    }
}
