//! Typed variant props
//!
//! [`VariantConfig`] is stringly typed so it can be loaded from files. For
//! components defined in code, a props type implementing [`VariantProps`]
//! plus a [`Variants<P>`] wrapper gives compile-time checking of which axes
//! and values a call site may pass.
//!
//! ```rust
//! use blinc_variants::{variant_enum, Selection, VariantAxis, VariantConfig, VariantProps, Variants};
//!
//! variant_enum! {
//!     pub enum Intent {
//!         Primary => "primary",
//!         Secondary => "secondary",
//!     }
//! }
//!
//! #[derive(Default)]
//! struct ButtonProps {
//!     intent: Option<Intent>,
//! }
//!
//! impl VariantProps for ButtonProps {
//!     fn selection(&self) -> Selection {
//!         let sel = Selection::new();
//!         match self.intent {
//!             Some(intent) => sel.set("intent", intent),
//!             None => sel,
//!         }
//!     }
//! }
//!
//! let button: Variants<ButtonProps> = Variants::new(
//!     VariantConfig::builder()
//!         .variant(
//!             "intent",
//!             VariantAxis::new()
//!                 .value(Intent::Primary, "bg-blue-500")
//!                 .value(Intent::Secondary, "bg-white"),
//!         )
//!         .default_variant("intent", Intent::Primary)
//!         .build(),
//! );
//!
//! assert_eq!(button.resolve(&ButtonProps::default()), "bg-blue-500");
//! assert_eq!(
//!     button.resolve(&ButtonProps { intent: Some(Intent::Secondary) }),
//!     "bg-white"
//! );
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::config::VariantConfig;
use crate::selection::Selection;
use crate::token::TokenValue;

/// A typed props value that knows how to describe itself as a [`Selection`].
pub trait VariantProps {
    fn selection(&self) -> Selection;
}

impl VariantProps for Selection {
    fn selection(&self) -> Selection {
        self.clone()
    }
}

/// A [`VariantConfig`] that only accepts props of type `P`.
pub struct Variants<P> {
    config: VariantConfig,
    _props: PhantomData<fn(&P)>,
}

impl<P: VariantProps> Variants<P> {
    pub fn new(config: VariantConfig) -> Self {
        Self {
            config,
            _props: PhantomData,
        }
    }

    pub fn config(&self) -> &VariantConfig {
        &self.config
    }

    pub fn resolve(&self, props: &P) -> String {
        self.config.resolve(&props.selection())
    }

    /// Resolve with extra tokens appended, replacing any extra tokens the props carry.
    pub fn resolve_with(&self, props: &P, class: impl Into<TokenValue>) -> String {
        self.config.resolve(&props.selection().class(class))
    }
}

impl<P> Clone for Variants<P> {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            _props: PhantomData,
        }
    }
}

impl<P> fmt::Debug for Variants<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Variants")
            .field("props", &std::any::type_name::<P>())
            .field("config", &self.config)
            .finish()
    }
}

/// Declare a closed set of axis values as a `Copy` enum.
///
/// Each variant maps to its canonical key. The enum converts into
/// [`VariantValue`](crate::VariantValue) and [`Constraint`](crate::Constraint),
/// so it can be used when building axes, compound rules and selections.
///
/// ```rust
/// blinc_variants::variant_enum! {
///     /// Button sizes
///     pub enum Size {
///         Sm => "sm",
///         Md => "md",
///     }
/// }
///
/// assert_eq!(Size::Md.key(), "md");
/// assert_eq!(Size::ALL.len(), 2);
/// assert_eq!(Size::Sm.to_string(), "sm");
/// ```
#[macro_export]
macro_rules! variant_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $key:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every value in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Canonical key for this value.
            pub fn key(self) -> &'static str {
                match self {
                    $( $name::$variant => $key ),+
                }
            }
        }

        impl ::std::convert::From<$name> for $crate::VariantValue {
            fn from(v: $name) -> Self {
                $crate::VariantValue::Str(v.key().to_string())
            }
        }

        impl ::std::convert::From<$name> for $crate::Constraint {
            fn from(v: $name) -> Self {
                $crate::Constraint::Is(v.key().to_string())
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.key())
            }
        }
    };
}
