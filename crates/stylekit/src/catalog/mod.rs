//! The built-in component catalog.
//!
//! About sixty descriptors covering buttons, links, typography, form
//! controls, media, layout and a handful of widgets. Each group lives in its
//! own module and contributes a `descriptors()` list; [`descriptors`] joins
//! them in a fixed order and [`registry`] freezes the result.
//!
//! ```rust
//! use stylekit::{catalog, Attributes, ComponentFactory, Theme};
//!
//! let factory = ComponentFactory::new(catalog::registry().unwrap(), Theme::builtin().clone());
//! let badge = factory.create("Badge", &Attributes::new().with("bg", "red")).unwrap();
//!
//! assert_eq!(badge.style.value("display").unwrap().as_str(), Some("inline-block"));
//! ```
//!
//! The catalog is an ordinary descriptor list. Applications extend it by
//! registering their own descriptors on the same builder:
//!
//! ```rust
//! use stylekit::catalog;
//! use stylekit::descriptor::{Descriptor, RenderTarget};
//! use stylekit::registry::Registry;
//!
//! let mut builder = Registry::builder();
//! builder.extend(catalog::descriptors()).unwrap();
//! builder
//!     .register(Descriptor::new("Danger", RenderTarget::reference("Button")).default("bg", "red"))
//!     .unwrap();
//! let registry = builder.build().unwrap();
//!
//! assert_eq!(registry.resolve("Danger").unwrap().chain(), ["Danger", "Button"]);
//! ```

mod buttons;
mod forms;
mod layout;
mod media;
mod navigation;
mod typography;
mod ui;
mod util;

use crate::descriptor::Descriptor;
use crate::error::ConfigError;
use crate::registry::Registry;

/// Every built-in descriptor, grouped and in declaration order.
pub fn descriptors() -> Vec<Descriptor> {
    [
        buttons::descriptors(),
        navigation::descriptors(),
        typography::descriptors(),
        forms::descriptors(),
        media::descriptors(),
        layout::descriptors(),
        ui::descriptors(),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Builds a registry holding the built-in catalog.
pub fn registry() -> Result<Registry, ConfigError> {
    let mut builder = Registry::builder();
    builder.extend(descriptors())?;
    builder.build()
}
