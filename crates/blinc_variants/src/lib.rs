//! Blinc Variants
//!
//! Resolves declarative component variants into class strings, independent of
//! any rendering backend.
//!
//! # Overview
//!
//! A [`VariantConfig`] describes a component's styling surface:
//! - **Base tokens**: always emitted
//! - **Variant axes**: named dimensions (`intent`, `size`) mapping each value to tokens
//! - **Compound rules**: extra tokens when a combination of axis values is active
//! - **Default variants**: values used when the caller omits an axis
//!
//! A [`Selection`] picks values per call and may carry extra tokens
//! (`class`/`class_name`). Resolution is pure and infallible; configs are
//! immutable once built and can be shared freely across threads.
//!
//! # Quick Start
//!
//! ```rust
//! use blinc_variants::{CompoundRule, Selection, VariantAxis, VariantConfig};
//!
//! let button = VariantConfig::builder()
//!     .base(["font-semibold", "border", "rounded"])
//!     .variant(
//!         "intent",
//!         VariantAxis::new()
//!             .value("primary", ["bg-blue-500", "text-white"])
//!             .value("secondary", ["bg-white", "text-gray-800"]),
//!     )
//!     .variant(
//!         "size",
//!         VariantAxis::new()
//!             .value("small", ["text-sm", "py-1", "px-2"])
//!             .value("medium", ["text-base", "py-2", "px-4"]),
//!     )
//!     .compound(
//!         CompoundRule::new()
//!             .when("intent", "primary")
//!             .when("size", "medium")
//!             .class("uppercase"),
//!     )
//!     .default_variant("intent", "primary")
//!     .default_variant("size", "medium")
//!     .build();
//!
//! assert_eq!(
//!     button.resolve(&Selection::new().set("intent", "secondary").set("size", "small")),
//!     "font-semibold border rounded bg-white text-gray-800 text-sm py-1 px-2"
//! );
//! ```
//!
//! # Modules
//!
//! - [`cx`] / [`cx!`]: join loose token values
//! - [`dedupe`]: merge class strings without repeats
//! - [`compose`] / [`Resolver`]: combine configs, post-process output
//! - [`Variants`] / [`variant_enum!`]: typed props on top of the dynamic config
//! - [`ComponentPreset`]: built-in shadcn-style component configs

mod axis;
mod compound;
mod config;
mod dedupe;
mod error;
mod presets;
mod props;
mod resolve;
mod selection;
mod token;
mod value;

pub use axis::VariantAxis;
pub use compound::{CompoundRule, Constraint};
pub use config::{VariantConfig, VariantConfigBuilder};
pub use dedupe::{dedupe, dedupe_with, DedupePolicy};
pub use error::VariantError;
pub use presets::{preset_config, ComponentPreset};
pub use props::{VariantProps, Variants};
pub use resolve::{compose, resolve, CompleteHook, Resolver};
pub use selection::Selection;
pub use token::{cx, join, TokenValue};
pub use value::VariantValue;
