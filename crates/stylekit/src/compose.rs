//! Style composition.
//!
//! Combines a flattened descriptor with caller attributes into final
//! attributes and a final style. Layers, lowest precedence first:
//!
//! 1. the descriptor's merged default attributes;
//! 2. caller attributes, overriding defaults key by key;
//! 3. short-hand keys (`p`, `mx`, `f`, `bg`, ...) resolved into properties;
//! 4. the chain's style sources, root ancestor first, evaluated against the
//!    merged attributes and shallow-merged over the short-hand output;
//! 5. explicit caller style overrides ([`compose_with_overrides`]).
//!
//! Non-short-hand attributes (`href`, `is`, `active`) pass through to the
//! final attributes untouched. Composition is a pure function of its inputs.

use std::fmt;

use crate::descriptor::Constraint;
use crate::registry::EffectiveDescriptor;
use crate::shorthand;
use crate::style::StyleMap;
use crate::theme::Theme;
use crate::value::{AttrValue, Attributes};

/// Attribute carrying a component's content.
pub const CHILDREN: &str = "children";

/// The outcome of composing one component.
#[derive(Debug, Clone, PartialEq)]
pub struct Composition {
    /// Defaults merged with caller attributes.
    pub attributes: Attributes,
    /// Final style with `Unset` entries removed.
    pub style: StyleMap,
}

/// Composes `effective` with `caller` attributes.
///
/// # Example
///
/// ```rust
/// use stylekit::compose::compose;
/// use stylekit::descriptor::{Descriptor, RenderTarget};
/// use stylekit::registry::Registry;
/// use stylekit::style::{CssValue, StyleMap};
/// use stylekit::{Attributes, Theme};
///
/// let registry = Registry::builder()
///     .with(
///         Descriptor::new("Box", RenderTarget::primitive("div"))
///             .default("p", 2)
///             .style(StyleMap::new().with("display", "block")),
///     )
///     .and_then(|b| b.build())
///     .unwrap();
/// let theme = Theme::new().with_space([0, 4, 8, 16]);
///
/// let out = compose(registry.resolve("Box").unwrap(), &Attributes::new().with("p", 3), &theme);
/// assert_eq!(out.style.value("padding"), Some(&CssValue::Number(16.0)));
/// assert_eq!(out.style.value("display"), Some(&CssValue::Text("block".into())));
/// ```
pub fn compose(effective: &EffectiveDescriptor, caller: &Attributes, theme: &Theme) -> Composition {
    compose_with_overrides(effective, caller, &StyleMap::new(), theme)
}

/// Composes like [`compose`], then applies `overrides` over everything else.
pub fn compose_with_overrides(
    effective: &EffectiveDescriptor,
    caller: &Attributes,
    overrides: &StyleMap,
    theme: &Theme,
) -> Composition {
    let mut attributes = effective.defaults().clone();
    attributes.merge(caller);

    if !attributes.contains_key(CHILDREN) {
        if let Some(children) = effective.children() {
            let content = children(&attributes);
            attributes.insert(CHILDREN, content);
        }
    }

    let mut style = shorthand::resolve(&attributes, theme);
    for source in effective.styles() {
        style.merge(source.evaluate(&attributes, theme));
    }
    style.merge(overrides.clone());

    Composition {
        attributes,
        style: style.finalize(),
    }
}

/// An attribute whose value does not satisfy its prop constraint.
#[derive(Debug, Clone, PartialEq)]
pub struct PropViolation {
    pub key: String,
    pub expected: Constraint,
    pub found: AttrValue,
}

impl fmt::Display for PropViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "attribute '{}' expected {}, found {:?}", self.key, self.expected, self.found)
    }
}

/// Checks `attributes` against the descriptor's prop constraints.
///
/// Only attributes that are present are checked. Violations are advisory:
/// composition never fails because of them.
pub fn check_constraints(effective: &EffectiveDescriptor, attributes: &Attributes) -> Vec<PropViolation> {
    effective
        .constraints()
        .iter()
        .filter_map(|(key, constraint)| {
            let value = attributes.get(key)?;
            (!constraint.check(value)).then(|| PropViolation {
                key: key.clone(),
                expected: constraint.clone(),
                found: value.clone(),
            })
        })
        .collect()
}
