//! Form controls.

use super::util::{attr_color, radius, shade, space, PILL};
use crate::color::resolve_color;
use crate::descriptor::{Descriptor, RenderTarget};
use crate::style::{px, StyleMap};
use crate::theme::Theme;

/// Shared look of text-like fields.
fn field(theme: &Theme) -> StyleMap {
    StyleMap::new()
        .with("fontFamily", "inherit")
        .with("fontSize", "inherit")
        .with("borderWidth", px(1.0))
        .with("borderStyle", "solid")
        .with("borderColor", shade(theme, "gray", 2))
        .with_some("borderRadius", radius(theme))
        .with(
            "&:focus",
            StyleMap::new()
                .with("outline", "none")
                .with("borderColor", resolve_color(theme).base("blue")),
        )
        .with("&:disabled", StyleMap::new().with("opacity", 0.25))
}

fn field_descriptor(name: &str, tag: &str) -> Descriptor {
    Descriptor::new(name, RenderTarget::primitive(tag))
        .default("p", 1)
        .default("m", 0)
        .default("w", 1)
        .default("color", "inherit")
        .default("bg", "transparent")
}

pub(super) fn descriptors() -> Vec<Descriptor> {
    vec![
        Descriptor::new("Label", RenderTarget::primitive("label"))
            .default("f", 1)
            .default("mb", 1)
            .style(
                StyleMap::new()
                    .with("display", "flex")
                    .with("alignItems", "center"),
            ),
        field_descriptor("Input", "input")
            .default("type", "text")
            .style_fn(|_, theme| field(theme).with("appearance", "none")),
        field_descriptor("Select", "select").style_fn(|_, theme| field(theme).with("height", 32)),
        field_descriptor("Textarea", "textarea")
            .style_fn(|_, theme| field(theme).with("appearance", "none")),
        Descriptor::new("Checkbox", RenderTarget::primitive("input"))
            .default("type", "checkbox")
            .default("mr", 1),
        Descriptor::new("Radio", RenderTarget::primitive("input"))
            .default("type", "radio")
            .default("mr", 1),
        Descriptor::new("Slider", RenderTarget::primitive("input"))
            .default("w", 1)
            .default("my", 2)
            .default("mx", 0)
            .default("type", "range")
            .style_fn(|_, theme| {
                StyleMap::new()
                    .with("display", "block")
                    .with_some("height", space(theme, 1))
                    .with("cursor", "pointer")
                    .with("color", "inherit")
                    .with("borderRadius", px(PILL))
                    .with("backgroundColor", shade(theme, "gray", 2))
                    .with("appearance", "none")
                    .with(
                        "&::-webkit-slider-thumb",
                        StyleMap::new()
                            .with("width", px(16.0))
                            .with("height", px(16.0))
                            .with("backgroundColor", "currentcolor")
                            .with("border", 0)
                            .with("borderRadius", px(PILL))
                            .with("appearance", "none"),
                    )
            }),
        Descriptor::new("Switch", RenderTarget::primitive("div"))
            .default("role", "checkbox")
            .default("color", "blue")
            .style_fn(|attrs, theme| {
                let checked = attrs.flag("checked");
                let color = attr_color(attrs, theme, "color", None);
                let knob = if checked {
                    resolve_color(theme).base("white")
                } else {
                    color.clone().unwrap_or_else(|| "currentcolor".to_string())
                };
                StyleMap::new()
                    .with("display", "inline-flex")
                    .with("width", px(32.0))
                    .with("height", px(20.0))
                    .with("borderRadius", px(9999.0))
                    .with(
                        "backgroundColor",
                        color.filter(|_| checked).unwrap_or_else(|| "transparent".to_string()),
                    )
                    .with("boxShadow", "inset 0 0 0 2px")
                    .with("transitionProperty", "background-color")
                    .with("transitionDuration", ".2s")
                    .with("transitionTimingFunction", "ease-out")
                    .with(
                        "&::after",
                        StyleMap::new()
                            .with("content", "\" \"")
                            .with("width", px(12.0))
                            .with("height", px(12.0))
                            .with("margin", px(4.0))
                            .with("borderRadius", px(9999.0))
                            .with("transitionProperty", "transform, color")
                            .with("transitionDuration", ".1s")
                            .with("transitionTimingFunction", "ease-out")
                            .with(
                                "transform",
                                if checked { "translateX(12px)" } else { "translateX(0)" },
                            )
                            .with("backgroundColor", knob),
                    )
            }),
    ]
}
