//! Component factory.
//!
//! [`ComponentFactory`] is the top-level entry point: it owns a frozen
//! [`Registry`] and a [`Theme`] and turns a component name plus caller
//! attributes into a [`RenderInstruction`]. Both are held behind [`Arc`], so a
//! factory is cheap to clone into independent render passes.

use std::sync::Arc;

use serde::Serialize;
use tracing::{trace, warn};

use crate::compose::{check_constraints, compose_with_overrides, Composition, CHILDREN};
use crate::descriptor::RenderTarget;
use crate::error::ConfigError;
use crate::registry::{EffectiveDescriptor, Registry};
use crate::shorthand::is_shorthand;
use crate::style::{self, StyleMap};
use crate::theme::Theme;
use crate::value::Attributes;

/// Attribute naming the element to emit instead of the primitive target.
pub const IS: &str = "is";

/// What the mounting layer receives for one component.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderInstruction {
    /// The component that was requested.
    pub component: String,
    /// The primitive element reached through the descriptor chain.
    pub render_target: String,
    /// Final attributes, defaults merged with caller values.
    pub attributes: Attributes,
    /// Final, conflict-resolved style.
    pub style: StyleMap,
    #[serde(skip)]
    breakpoints: Vec<f64>,
}

impl RenderInstruction {
    /// The element to emit: the `is` attribute when set, otherwise the
    /// render target.
    pub fn element(&self) -> &str {
        self.attributes.text(IS).unwrap_or(&self.render_target)
    }

    /// Attributes meant for the emitted element: everything except short-hand
    /// style keys, `is` and `children`.
    pub fn markup_attributes(&self) -> Attributes {
        self.attributes
            .filtered(|key| !is_shorthand(key) && key != IS && key != CHILDREN)
    }

    /// The text content, if any.
    pub fn children(&self) -> Option<&str> {
        self.attributes.text(CHILDREN)
    }

    /// Renders the style as CSS scoped to `selector`, using the theme's
    /// breakpoints.
    pub fn to_css(&self, selector: &str) -> String {
        style::to_css(selector, &self.style, &self.breakpoints)
    }
}

/// Creates render instructions from a registry and a theme.
///
/// # Example
///
/// ```rust
/// use stylekit::{catalog, Attributes, ComponentFactory, Theme};
///
/// let factory = ComponentFactory::new(catalog::registry().unwrap(), Theme::builtin().clone());
/// let heading = factory.create("Subhead", &Attributes::new()).unwrap();
///
/// assert_eq!(heading.render_target, "p");
/// assert_eq!(heading.element(), "h3");
/// ```
#[derive(Debug, Clone)]
pub struct ComponentFactory {
    registry: Arc<Registry>,
    theme: Arc<Theme>,
}

impl ComponentFactory {
    /// Creates a factory over `registry` and `theme`.
    pub fn new(registry: impl Into<Arc<Registry>>, theme: impl Into<Arc<Theme>>) -> Self {
        Self {
            registry: registry.into(),
            theme: theme.into(),
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Resolves `name` and composes it with `caller`.
    pub fn create(&self, name: &str, caller: &Attributes) -> Result<RenderInstruction, ConfigError> {
        self.create_with_overrides(name, caller, &StyleMap::new())
    }

    /// Like [`create`](Self::create), with explicit style overrides that win
    /// over every other layer.
    pub fn create_with_overrides(
        &self,
        name: &str,
        caller: &Attributes,
        overrides: &StyleMap,
    ) -> Result<RenderInstruction, ConfigError> {
        let effective = self.registry.resolve(name)?;
        let render_target = self.primitive_target(effective)?;

        let Composition { attributes, style } =
            compose_with_overrides(effective, caller, overrides, &self.theme);

        for violation in check_constraints(effective, &attributes) {
            warn!(
                component = name,
                attribute = %violation.key,
                expected = %violation.expected,
                "attribute does not match its prop constraint"
            );
        }

        trace!(component = name, target = %render_target, properties = style.len(), "created component");

        Ok(RenderInstruction {
            component: name.to_string(),
            render_target,
            attributes,
            style,
            breakpoints: self.theme.breakpoints(),
        })
    }

    fn primitive_target(&self, effective: &EffectiveDescriptor) -> Result<String, ConfigError> {
        match effective.render_target() {
            RenderTarget::Primitive(tag) => Ok(tag.clone()),
            RenderTarget::Reference(next) => match self.registry.resolve(next)?.render_target() {
                RenderTarget::Primitive(tag) => Ok(tag.clone()),
                RenderTarget::Reference(target) => Err(ConfigError::Unflattened {
                    name: effective.name().to_string(),
                    target: target.clone(),
                }),
            },
        }
    }
}
