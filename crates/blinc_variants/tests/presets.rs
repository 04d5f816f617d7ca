use blinc_variants::{compose, ComponentPreset, Selection};

#[test]
fn preset_catalog_contains_expected_presets() {
    let mut ids: Vec<&str> = ComponentPreset::all().iter().map(|p| p.id()).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec!["alert", "badge", "button"]);
}

#[test]
fn button_link_drops_padding_for_sized_buttons() {
    let button = ComponentPreset::Button.config();
    for size in ["sm", "default", "lg"] {
        let out = button.resolve(&Selection::new().set("variant", "link").set("size", size));
        assert!(out.ends_with("h-auto px-0"), "size={size} out={out}");
    }

    let icon = button.resolve(&Selection::new().set("variant", "link").set("size", "icon"));
    assert!(!icon.contains("h-auto"));
}

#[test]
fn button_disabled_accepts_booleans() {
    let button = ComponentPreset::Button.config();
    let disabled = button.resolve(&Selection::new().set("disabled", true));
    let enabled = button.resolve(&Selection::new().set("disabled", false));
    let string_flag = button.resolve(&Selection::new().set("disabled", "true"));

    assert!(disabled.contains("opacity-50"));
    assert!(!enabled.contains("opacity-50"));
    assert_eq!(disabled, string_flag);
}

#[test]
fn destructive_alert_with_icon_tints_svg() {
    let alert = ComponentPreset::Alert.config();
    let with_icon = alert.resolve(&Selection::new().set("variant", "destructive").set("icon", true));
    let without_icon = alert.resolve(&Selection::new().set("variant", "destructive"));

    assert!(with_icon.ends_with("pl-11 [&>svg]:text-destructive"));
    assert!(!without_icon.contains("[&>svg]"));
}

#[test]
fn badge_and_button_compose_without_repeats() {
    let badge = ComponentPreset::Badge.config();
    let button = ComponentPreset::Button.config();
    let out = compose(&[&badge, &button], &Selection::new().class("ml-auto"));

    let tokens: Vec<&str> = out.split(' ').collect();
    let inline_flex = tokens.iter().filter(|t| **t == "inline-flex").count();
    assert_eq!(inline_flex, 1, "out={out}");
    assert_eq!(tokens.last(), Some(&"ml-auto"));
}
