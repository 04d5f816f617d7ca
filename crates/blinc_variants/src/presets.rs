//! Built-in component variant presets in the shadcn style.

use std::fmt::{Display, Formatter};

use crate::axis::VariantAxis;
use crate::compound::CompoundRule;
use crate::config::VariantConfig;

/// Built-in component preset catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ComponentPreset {
    Button,
    Badge,
    Alert,
}

impl ComponentPreset {
    /// Stable preset id for config/CLI lookup.
    pub fn id(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Badge => "badge",
            Self::Alert => "alert",
        }
    }

    /// User-facing display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Button => "Button",
            Self::Badge => "Badge",
            Self::Alert => "Alert",
        }
    }

    /// Full preset list.
    pub fn all() -> &'static [ComponentPreset] {
        const PRESETS: [ComponentPreset; 3] = [
            ComponentPreset::Button,
            ComponentPreset::Badge,
            ComponentPreset::Alert,
        ];
        &PRESETS
    }

    /// Look a preset up by its id.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::all().iter().copied().find(|p| p.id() == id)
    }

    /// Build the variant config for this preset.
    pub fn config(self) -> VariantConfig {
        match self {
            Self::Button => button(),
            Self::Badge => badge(),
            Self::Alert => alert(),
        }
    }
}

impl Display for ComponentPreset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Convenience free function for ergonomic imports.
pub fn preset_config(preset: ComponentPreset) -> VariantConfig {
    preset.config()
}

fn button() -> VariantConfig {
    VariantConfig::builder()
        .base([
            "inline-flex",
            "items-center",
            "justify-center",
            "gap-2",
            "whitespace-nowrap",
            "rounded-md",
            "text-sm",
            "font-medium",
            "transition-colors",
            "focus-visible:outline-none",
            "focus-visible:ring-1",
            "focus-visible:ring-ring",
        ])
        .variant(
            "variant",
            VariantAxis::new()
                .value("default", "bg-primary text-primary-foreground shadow hover:bg-primary/90")
                .value(
                    "destructive",
                    "bg-destructive text-destructive-foreground shadow-sm hover:bg-destructive/90",
                )
                .value(
                    "outline",
                    "border border-input bg-background shadow-sm hover:bg-accent hover:text-accent-foreground",
                )
                .value("secondary", "bg-secondary text-secondary-foreground shadow-sm hover:bg-secondary/80")
                .value("ghost", "hover:bg-accent hover:text-accent-foreground")
                .value("link", "text-primary underline-offset-4 hover:underline"),
        )
        .variant(
            "size",
            VariantAxis::new()
                .value("default", "h-9 px-4 py-2")
                .value("sm", "h-8 rounded-md px-3 text-xs")
                .value("lg", "h-10 rounded-md px-8")
                .value("icon", "h-9 w-9"),
        )
        .variant(
            "disabled",
            VariantAxis::new()
                .value(true, "pointer-events-none opacity-50")
                .value(false, ""),
        )
        .compound(
            CompoundRule::new()
                .when("variant", "link")
                .when("size", ["sm", "default", "lg"])
                .class("h-auto px-0"),
        )
        .default_variant("variant", "default")
        .default_variant("size", "default")
        .build()
}

fn badge() -> VariantConfig {
    VariantConfig::builder()
        .base("inline-flex items-center rounded-md border px-2.5 py-0.5 text-xs font-semibold transition-colors")
        .variant(
            "variant",
            VariantAxis::new()
                .value("default", "border-transparent bg-primary text-primary-foreground shadow")
                .value("secondary", "border-transparent bg-secondary text-secondary-foreground")
                .value("destructive", "border-transparent bg-destructive text-destructive-foreground shadow")
                .value("outline", "text-foreground"),
        )
        .default_variant("variant", "default")
        .build()
}

fn alert() -> VariantConfig {
    VariantConfig::builder()
        .base("relative w-full rounded-lg border px-4 py-3 text-sm")
        .variant(
            "variant",
            VariantAxis::new()
                .value("default", "bg-background text-foreground")
                .value("destructive", "border-destructive/50 text-destructive"),
        )
        .variant("icon", VariantAxis::new().value(true, "pl-11"))
        .compound(
            CompoundRule::new()
                .when("variant", "destructive")
                .when("icon", true)
                .class("[&>svg]:text-destructive"),
        )
        .default_variant("variant", "default")
        .build()
}
