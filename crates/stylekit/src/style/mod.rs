//! Resolved style declarations.
//!
//! A [`StyleMap`] is what the engine produces: property names (camelCase, as
//! the style functions write them) mapped to [`StyleValue`]s. A value is a
//! plain [`CssValue`], a list of breakpoint-guarded [`Rule`]s, a nested map
//! for a selector such as `&:hover`, or [`StyleValue::Unset`], an explicit
//! "no value" that overrides a lower layer and disappears from the final
//! style.
//!
//! [`to_css`] renders a map to stylesheet text for a given selector.
//!
//! [`Rule`]: crate::responsive::Rule

mod css;
mod map;

pub use css::{kebab_case, to_css, UNITLESS_PROPERTIES};
pub use map::{px, CssValue, StyleMap, StyleValue};
