//! Links and tabs.

use super::util::{attr_color, shade, weight};
use crate::color::{darken, resolve_color};
use crate::descriptor::{Constraint, Descriptor, RenderTarget};
use crate::style::{px, StyleMap};

pub(super) fn descriptors() -> Vec<Descriptor> {
    vec![
        Descriptor::new("Link", RenderTarget::primitive("a"))
            .default("color", "blue")
            .style_fn(|attrs, theme| {
                StyleMap::new().with(
                    "&:hover",
                    StyleMap::new().with_some("color", attr_color(attrs, theme, "color", Some(8))),
                )
            }),
        Descriptor::new("NavLink", RenderTarget::primitive("a"))
            .default("f", 1)
            .default("p", 2)
            .style_fn(|attrs, theme| {
                StyleMap::new()
                    .with("display", "inline-block")
                    .with_some("fontWeight", weight(theme, 1))
                    .with("textDecoration", "none")
                    .with("whiteSpace", "nowrap")
                    .with("color", "inherit")
                    .with_some("backgroundColor", attrs.flag("active").then(|| darken(0.25)))
                    .with("cursor", "pointer")
                    .with("&:hover", StyleMap::new().with("backgroundColor", darken(0.0625)))
                    .with("&:disabled", StyleMap::new().with("opacity", 0.25))
            })
            .constraint("active", Constraint::Bool),
        Descriptor::new("BlockLink", RenderTarget::primitive("a")).style(
            StyleMap::new()
                .with("display", "block")
                .with("textDecoration", "none")
                .with("color", "inherit"),
        ),
        Descriptor::new("Tabs", RenderTarget::primitive("div")).style_fn(|_, theme| {
            StyleMap::new()
                .with("display", "flex")
                .with("borderBottomWidth", px(1.0))
                .with("borderBottomStyle", "solid")
                .with("borderColor", shade(theme, "gray", 2))
        }),
        Descriptor::new("TabItem", RenderTarget::primitive("a"))
            .default("f", 1)
            .default("mr", 3)
            .default("py", 2)
            .style_fn(|attrs, theme| {
                let blue = resolve_color(theme).base("blue");
                let active = attrs.flag("active");
                StyleMap::new()
                    .with("textDecoration", "none")
                    .with_some("fontWeight", weight(theme, 1))
                    .with("color", if active { blue.clone() } else { "inherit".to_string() })
                    .with("borderBottomWidth", if active { 2 } else { 0 })
                    .with("borderBottomStyle", "solid")
                    .with("&:hover", StyleMap::new().with("color", blue))
            })
            .constraint("active", Constraint::Bool),
    ]
}
