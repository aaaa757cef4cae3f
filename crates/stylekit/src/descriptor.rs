//! Component descriptors.
//!
//! A [`Descriptor`] is one row of the component table: a name, a render
//! target, default attributes, a style source and prop constraints. Its
//! target is either a primitive element or another descriptor by name, which
//! is how one component builds on another:
//!
//! ```rust
//! use stylekit::descriptor::{Constraint, Descriptor, RenderTarget};
//! use stylekit::style::StyleMap;
//!
//! let text = Descriptor::new("Text", RenderTarget::primitive("p"))
//!     .default("m", 0)
//!     .constraint("bold", Constraint::Bool);
//!
//! let heading = Descriptor::new("Heading", RenderTarget::reference("Text"))
//!     .default("is", "h2")
//!     .default("f", 5)
//!     .style(StyleMap::new().with("lineHeight", 1.25));
//!
//! assert!(heading.target().is_reference());
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::style::StyleMap;
use crate::theme::Theme;
use crate::value::{AttrValue, Attributes, Scalar};

/// Where a descriptor renders to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "name", rename_all = "lowercase")]
pub enum RenderTarget {
    /// A markup element such as `button` or `div`.
    Primitive(String),
    /// Another registered descriptor.
    Reference(String),
}

impl RenderTarget {
    /// A primitive element target.
    pub fn primitive(tag: impl Into<String>) -> Self {
        RenderTarget::Primitive(tag.into())
    }

    /// A reference to another descriptor.
    pub fn reference(name: impl Into<String>) -> Self {
        RenderTarget::Reference(name.into())
    }

    /// The element or descriptor name.
    pub fn name(&self) -> &str {
        match self {
            RenderTarget::Primitive(s) | RenderTarget::Reference(s) => s,
        }
    }

    /// Returns `true` for `Reference`.
    pub fn is_reference(&self) -> bool {
        matches!(self, RenderTarget::Reference(_))
    }
}

impl fmt::Display for RenderTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderTarget::Primitive(tag) => write!(f, "<{}>", tag),
            RenderTarget::Reference(name) => f.write_str(name),
        }
    }
}

/// A pure style function over merged attributes and the theme.
pub type StyleFn = Arc<dyn Fn(&Attributes, &Theme) -> StyleMap + Send + Sync>;

/// Computes the `children` attribute from the merged attributes.
pub type ChildrenFn = Arc<dyn Fn(&Attributes) -> String + Send + Sync>;

/// A descriptor's style contribution.
#[derive(Clone)]
pub enum StyleSource {
    /// Fixed declarations.
    Static(StyleMap),
    /// Declarations computed per render.
    Computed(StyleFn),
}

impl StyleSource {
    /// Produces this source's declarations for `attrs`.
    pub fn evaluate(&self, attrs: &Attributes, theme: &Theme) -> StyleMap {
        match self {
            StyleSource::Static(style) => style.clone(),
            StyleSource::Computed(f) => f(attrs, theme),
        }
    }
}

impl fmt::Debug for StyleSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleSource::Static(style) => f.debug_tuple("Static").field(style).finish(),
            StyleSource::Computed(_) => f.write_str("Computed(<fn>)"),
        }
    }
}

/// The accepted shape of one attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Constraint {
    Bool,
    Number,
    String,
    /// One of a fixed set of strings.
    OneOf(Vec<String>),
}

impl Constraint {
    /// Checks a value. Responsive values are checked tier by tier.
    pub fn check(&self, value: &AttrValue) -> bool {
        match value {
            AttrValue::Scalar(s) => self.check_scalar(s),
            AttrValue::Responsive(tiers) => tiers.iter().all(|s| self.check_scalar(s)),
        }
    }

    fn check_scalar(&self, value: &Scalar) -> bool {
        match (self, value) {
            (Constraint::Bool, Scalar::Bool(_)) => true,
            (Constraint::Number, Scalar::Number(_)) => true,
            (Constraint::String, Scalar::Text(_)) => true,
            (Constraint::OneOf(options), Scalar::Text(s)) => options.iter().any(|o| o == s),
            _ => false,
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::Bool => f.write_str("bool"),
            Constraint::Number => f.write_str("number"),
            Constraint::String => f.write_str("string"),
            Constraint::OneOf(options) => write!(f, "one of [{}]", options.join(", ")),
        }
    }
}

/// Attribute name to constraint.
pub type Constraints = BTreeMap<String, Constraint>;

/// One registered component.
#[derive(Clone)]
pub struct Descriptor {
    name: String,
    target: RenderTarget,
    defaults: Attributes,
    style: Option<StyleSource>,
    constraints: Constraints,
    children: Option<ChildrenFn>,
}

impl Descriptor {
    /// Creates a descriptor with no defaults, style or constraints.
    pub fn new(name: impl Into<String>, target: RenderTarget) -> Self {
        Self {
            name: name.into(),
            target,
            defaults: Attributes::new(),
            style: None,
            constraints: Constraints::new(),
            children: None,
        }
    }

    /// Replaces the default attributes.
    pub fn defaults(mut self, defaults: Attributes) -> Self {
        self.defaults = defaults;
        self
    }

    /// Adds one default attribute.
    pub fn default(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.defaults.insert(key, value);
        self
    }

    /// Sets a static style.
    pub fn style(mut self, style: StyleMap) -> Self {
        self.style = Some(StyleSource::Static(style));
        self
    }

    /// Sets a computed style.
    pub fn style_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&Attributes, &Theme) -> StyleMap + Send + Sync + 'static,
    {
        self.style = Some(StyleSource::Computed(Arc::new(f)));
        self
    }

    /// Constrains one attribute.
    pub fn constraint(mut self, key: impl Into<String>, constraint: Constraint) -> Self {
        self.constraints.insert(key.into(), constraint);
        self
    }

    /// Sets a function that fills `children` when the caller leaves it out.
    pub fn children_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&Attributes) -> String + Send + Sync + 'static,
    {
        self.children = Some(Arc::new(f));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn target(&self) -> &RenderTarget {
        &self.target
    }

    pub fn default_attributes(&self) -> &Attributes {
        &self.defaults
    }

    pub fn style_source(&self) -> Option<&StyleSource> {
        self.style.as_ref()
    }

    pub fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    pub fn children(&self) -> Option<&ChildrenFn> {
        self.children.as_ref()
    }
}

impl fmt::Debug for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Descriptor")
            .field("name", &self.name)
            .field("target", &self.target)
            .field("defaults", &self.defaults)
            .field("style", &self.style)
            .field("constraints", &self.constraints)
            .field("children", &self.children.as_ref().map(|_| "<fn>"))
            .finish()
    }
}
