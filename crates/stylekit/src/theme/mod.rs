//! Design-scale themes.
//!
//! A theme is a tree of named scales. The recognized top-level keys are
//! `space`, `fontSizes`, `weights`, `colors`, `radius`, `breakpoints` and
//! `monospace`; anything else is kept as-is and stays reachable through
//! [`crate::scale::lookup`].
//!
//! Any subset may be supplied. A missing scale never fails a render: lookups
//! against it simply come back empty.
//!
//! ## Construction
//!
//! Programmatic:
//! ```rust
//! use stylekit::Theme;
//!
//! let theme = Theme::new()
//!     .with_space([0, 4, 8, 16, 32])
//!     .with_hue("blue", ["#eaf", "#a5d", "#5ad", "#0bd", "#09b", "#078", "#056", "#034", "#012", "#001"])
//!     .with_color("white", "#fff")
//!     .with_breakpoints([40, 52, 64]);
//! ```
//!
//! YAML:
//! ```rust
//! let theme = stylekit::Theme::from_yaml(r##"
//! space: [0, 8, 16, 32, 64]
//! radius: 4
//! colors:
//!   white: "#fff"
//!   gray: ["#f8f9f9", "#ebeeee", "#dde2e2"]
//! "##).unwrap();
//! ```

mod builtin;
#[allow(clippy::module_inception)]
mod theme;

pub use theme::{
    Theme, ThemeValue, BREAKPOINTS, COLORS, FONT_SIZES, MONOSPACE, RADIUS, SPACE, WEIGHTS,
};
