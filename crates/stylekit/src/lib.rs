//! # stylekit - theme-aware component registry
//!
//! stylekit turns a component name plus a bag of attributes into a render
//! instruction: the primitive element to emit, the final attributes and a
//! fully resolved style. It provides:
//!
//! - **Themes** of named design scales (spacing, font sizes, weights, colors,
//!   breakpoints) with partial-theme tolerance
//! - **Short-hand attributes** (`m`, `px`, `f`, `bg`, ...) resolved against
//!   those scales
//! - **Responsive values**: one attribute value per breakpoint tier
//! - **Descriptor chains**: components built on other components, flattened
//!   once when the registry is frozen
//! - **A built-in catalog** of about sixty components
//!
//! ## Core Concepts
//!
//! - [`Theme`]: named scales, loaded from YAML or built in code
//! - [`Descriptor`]: one component (name, render target, defaults, style,
//!   prop constraints)
//! - [`Registry`]: the frozen, flattened descriptor table
//! - [`ComponentFactory`]: registry + theme, the render entry point
//! - [`RenderInstruction`]: what the mounting layer receives; serializable,
//!   and renderable to CSS with [`RenderInstruction::to_css`]
//!
//! ## Quick Start
//!
//! ```rust
//! use stylekit::{catalog, Attributes, ComponentFactory, Theme};
//! use stylekit::style::CssValue;
//!
//! let factory = ComponentFactory::new(catalog::registry().unwrap(), Theme::builtin().clone());
//!
//! let button = factory
//!     .create("Button", &Attributes::new().with("bg", "blue").with("mt", 2))
//!     .unwrap();
//!
//! assert_eq!(button.render_target, "button");
//! assert_eq!(button.style.value("marginTop"), Some(&CssValue::Number(16.0)));
//! println!("{}", button.to_css(".cta"));
//! ```
//!
//! ## Layering
//!
//! For one render, style layers merge in this order, later layers winning
//! per property:
//!
//! 1. default attributes of the chain (ancestor first), then caller
//!    attributes, resolved through the short-hand table;
//! 2. each descriptor's style source, ancestor first;
//! 3. explicit overrides passed to
//!    [`ComponentFactory::create_with_overrides`].
//!
//! Nothing here mutates shared state: a built [`Registry`] and a [`Theme`]
//! are immutable and can be shared across threads.

pub mod catalog;
pub mod color;
pub mod compose;
pub mod descriptor;
mod error;
pub mod factory;
pub mod registry;
pub mod responsive;
pub mod scale;
pub mod shorthand;
pub mod style;
pub mod table;
pub mod theme;
mod value;

pub use descriptor::{Constraint, Descriptor, RenderTarget};
pub use error::{ConfigError, LoadError};
pub use factory::{ComponentFactory, RenderInstruction};
pub use registry::{EffectiveDescriptor, Registry, RegistryBuilder};
pub use style::{CssValue, StyleMap, StyleValue};
pub use theme::{Theme, ThemeValue};
pub use value::{format_number, AttrValue, Attributes, Scalar};
