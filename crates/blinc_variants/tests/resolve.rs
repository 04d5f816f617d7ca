use std::sync::Arc;
use std::thread;

use blinc_variants::{
    cx, dedupe, resolve, CompoundRule, Selection, TokenValue, VariantAxis, VariantConfig,
};
use pretty_assertions::assert_eq;

fn button() -> VariantConfig {
    VariantConfig::builder()
        .base(["font-semibold", "border", "rounded"])
        .variant(
            "intent",
            VariantAxis::new()
                .value("primary", ["bg-blue-500", "text-white", "border-transparent"])
                .value("secondary", ["bg-white", "text-gray-800", "border-gray-400"]),
        )
        .variant(
            "size",
            VariantAxis::new()
                .value("small", ["text-sm", "py-1", "px-2"])
                .value("medium", ["text-base", "py-2", "px-4"]),
        )
        .compound(
            CompoundRule::new()
                .when("intent", "primary")
                .when("size", "medium")
                .class("uppercase"),
        )
        .default_variant("intent", "primary")
        .default_variant("size", "medium")
        .build()
}

const BUTTON_TOML: &str = r#"
base = ["font-semibold", "border", "rounded"]

[variants.intent]
primary = ["bg-blue-500", "text-white", "border-transparent"]
secondary = ["bg-white", "text-gray-800", "border-gray-400"]

[variants.size]
small = ["text-sm", "py-1", "px-2"]
medium = ["text-base", "py-2", "px-4"]

[[compound_variants]]
intent = "primary"
size = "medium"
class = "uppercase"

[default_variants]
intent = "primary"
size = "medium"
"#;

#[test]
fn button_defaults() {
    assert_eq!(
        button().resolve(&Selection::new()),
        "font-semibold border rounded bg-blue-500 text-white border-transparent text-base py-2 px-4 uppercase"
    );
}

#[test]
fn button_secondary_small_skips_compound() {
    let sel = Selection::new().set("intent", "secondary").set("size", "small");
    assert_eq!(
        button().resolve(&sel),
        "font-semibold border rounded bg-white text-gray-800 border-gray-400 text-sm py-1 px-2"
    );
}

#[test]
fn toml_and_builder_configs_agree() {
    let from_toml = VariantConfig::from_toml_str(BUTTON_TOML).unwrap();
    assert_eq!(from_toml, button());

    for sel in [
        Selection::new(),
        Selection::new().set("intent", "secondary"),
        Selection::new().set("size", "small").class("mt-2"),
        Selection::new().unset("intent"),
    ] {
        assert_eq!(from_toml.resolve(&sel), button().resolve(&sel));
    }
}

#[test]
fn no_axes_means_base_plus_extra() {
    let config = VariantConfig::builder().base(["a", "b"]).build();
    let sel = Selection::new().set("anything", "goes").class(["c", "d"]);
    assert_eq!(config.resolve(&sel), format!("{} {}", cx(["a", "b"]), cx(["c", "d"])));
    assert_eq!(resolve(&config, None), "a b");
}

#[test]
fn explicit_falsy_override_suppresses_default() {
    let config = button();
    let with_default = config.resolve(&Selection::new());
    let suppressed = config.resolve(&Selection::new().set("size", false));
    let unset = config.resolve(&Selection::new().unset("size"));

    assert!(with_default.contains("text-base"));
    assert!(!suppressed.contains("text-base"));
    assert!(!unset.contains("text-base"));
    // The compound rule needs size=medium, so it drops out as well.
    assert!(!suppressed.contains("uppercase"));
    assert_eq!(suppressed, unset);
}

#[test]
fn numeric_keys_accept_numbers_and_strings() {
    let config = VariantConfig::builder()
        .variant(
            "margin",
            VariantAxis::new().value(0, "m-0").value(2, "m-2").value(4, "m-4"),
        )
        .build();
    assert_eq!(
        config.resolve(&Selection::new().set("margin", 2)),
        config.resolve(&Selection::new().set("margin", "2"))
    );
    assert_eq!(config.resolve(&Selection::new().set("margin", "0")), "m-0");
}

#[test]
fn compound_or_within_axis() {
    let config = VariantConfig::builder()
        .variant(
            "intent",
            VariantAxis::new()
                .value("primary", "p")
                .value("secondary", "s")
                .value("danger", "d"),
        )
        .variant("size", VariantAxis::new().value("md", "m").value("sm", "x"))
        .compound(
            CompoundRule::new()
                .when("intent", ["primary", "secondary"])
                .when("size", "md")
                .class("hit"),
        )
        .build();

    for intent in ["primary", "secondary"] {
        let out = config.resolve(&Selection::new().set("intent", intent).set("size", "md"));
        assert!(out.ends_with("hit"), "intent={intent} out={out}");
    }
    let out = config.resolve(&Selection::new().set("intent", "danger").set("size", "md"));
    assert!(!out.contains("hit"));
    let out = config.resolve(&Selection::new().set("intent", "primary").set("size", "sm"));
    assert!(!out.contains("hit"));
    let out = config.resolve(&Selection::new().set("intent", "primary"));
    assert!(!out.contains("hit"));
}

#[test]
fn output_order_is_base_axes_compounds_extra() {
    let config = VariantConfig::builder()
        .base("base")
        .variant("b", VariantAxis::new().value("on", "axis-b"))
        .variant("a", VariantAxis::new().value("on", "axis-a"))
        .compound(CompoundRule::new().when("a", "on").class("compound-1"))
        .compound(CompoundRule::new().class("compound-2"))
        .build();
    let sel = Selection::new().set("a", "on").set("b", "on").class("extra base");

    let out = config.resolve(&sel);
    assert_eq!(out, "base axis-b axis-a compound-1 compound-2 extra base");
    assert_eq!(config.resolve(&sel), out);
}

#[test]
fn class_takes_precedence_over_class_name() {
    let config = VariantConfig::builder().base("btn").build();
    let both = Selection::new().class("from-class").class_name("from-class-name");
    assert_eq!(config.resolve(&both), "btn from-class");
    let only_name = Selection::new().class_name("from-class-name");
    assert_eq!(config.resolve(&only_name), "btn from-class-name");
}

#[test]
fn falsy_tokens_leave_no_gaps() {
    let config = VariantConfig::builder()
        .base(TokenValue::from(vec![
            TokenValue::from(""),
            TokenValue::Absent,
            TokenValue::from("  a  "),
        ]))
        .variant("x", VariantAxis::new().value("on", false).value("off", ""))
        .build();
    let sel = Selection::new().set("x", "on").class(vec![None, Some(" b ")]);
    assert_eq!(config.resolve(&sel), "a b");
    assert_eq!(VariantConfig::default().resolve(&Selection::new()), "");
}

#[test]
fn dedupe_composes_outputs() {
    assert_eq!(dedupe(["a b", "b c"]), "a b c");
    let config = button();
    let merged = dedupe([config.resolve(&Selection::new()), "rounded shadow".to_string()]);
    assert!(merged.ends_with("uppercase shadow"));
}

#[test]
fn shared_config_resolves_across_threads() {
    let config = Arc::new(button());
    let expected = config.resolve(&Selection::new().set("size", "small"));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let config = Arc::clone(&config);
            thread::spawn(move || config.resolve(&Selection::new().set("size", "small")))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
