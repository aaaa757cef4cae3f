//! Buttons.

use super::util::{attr_color, radius, weight, PILL};
use crate::descriptor::{Descriptor, RenderTarget};
use crate::style::{px, StyleMap};

pub(super) fn descriptors() -> Vec<Descriptor> {
    vec![
        Descriptor::new("Button", RenderTarget::primitive("button"))
            .default("f", 1)
            .default("m", 0)
            .default("px", 3)
            .default("py", 2)
            .default("color", "white")
            .style_fn(|attrs, theme| {
                let bg = |shade| attr_color(attrs, theme, "bg", shade);
                StyleMap::new()
                    .with("display", "inline-block")
                    .with("fontFamily", "inherit")
                    .with_some("fontWeight", weight(theme, 1))
                    .with("lineHeight", 1.25)
                    .with("textAlign", "center")
                    .with("textDecoration", "none")
                    .with_some("borderRadius", radius(theme))
                    .with("border", 0)
                    .with("appearance", "none")
                    .with_some("backgroundColor", bg(None))
                    .with("&:hover", StyleMap::new().with_some("backgroundColor", bg(Some(6))))
                    .with(
                        "&:focus",
                        StyleMap::new()
                            .with("outline", 0)
                            .with_some("boxShadow", bg(Some(3)).map(|c| format!("0 0 0 2px {}", c))),
                    )
                    .with(
                        "&:active",
                        StyleMap::new()
                            .with_some("backgroundColor", bg(Some(6)))
                            .with_some("boxShadow", bg(Some(9)).map(|c| format!("inset 0 0 8px {}", c))),
                    )
                    .with("&:disabled", StyleMap::new().with("opacity", 0.25))
            }),
        Descriptor::new("ButtonOutline", RenderTarget::reference("Button"))
            .default("color", "blue")
            .default("bg", "transparent")
            .style_fn(|attrs, theme| outline_states(attrs, theme).with("boxShadow", "inset 0 0 0 2px")),
        Descriptor::new("ButtonCircle", RenderTarget::reference("Button"))
            .default("px", 3)
            .style(StyleMap::new().with("borderRadius", px(PILL))),
        Descriptor::new("ButtonTransparent", RenderTarget::reference("Button"))
            .default("color", "inherit")
            .default("bg", "transparent")
            .style_fn(outline_states),
        Descriptor::new("Close", RenderTarget::reference("ButtonTransparent"))
            .default("p", 0)
            .default("f", 3)
            .default("children", "×")
            .style(
                StyleMap::new()
                    .with("lineHeight", 1)
                    .with("width", px(24.0))
                    .with("height", px(24.0)),
            ),
    ]
}

/// Hover, focus and active states keyed off the text color rather than the
/// background.
fn outline_states(attrs: &crate::Attributes, theme: &crate::Theme) -> StyleMap {
    let color = |shade| attr_color(attrs, theme, "color", Some(shade));
    StyleMap::new()
        .with(
            "&:hover",
            StyleMap::new()
                .with_some("color", color(8))
                .with("backgroundColor", "transparent"),
        )
        .with(
            "&:focus",
            StyleMap::new().with_some(
                "boxShadow",
                color(3).map(|c| format!("inset 0 0 0 2px, 0 0 0 2px {}", c)),
            ),
        )
        .with(
            "&:active",
            StyleMap::new()
                .with("backgroundColor", "transparent")
                .with_some(
                    "boxShadow",
                    color(9).map(|c| format!("inset 0 0 0 2px, inset 0 0 8px {}", c)),
                ),
        )
}
