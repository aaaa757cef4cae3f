//! Images and embeds.

use super::util::{ratio_percent, PILL};
use crate::descriptor::{Constraint, Descriptor, RenderTarget};
use crate::style::{px, StyleMap};

pub(super) fn descriptors() -> Vec<Descriptor> {
    vec![
        Descriptor::new("Image", RenderTarget::primitive("img")).style(
            StyleMap::new()
                .with("display", "block")
                .with("maxWidth", "100%")
                .with("height", "auto"),
        ),
        Descriptor::new("Avatar", RenderTarget::primitive("img"))
            .style_fn(|attrs, _| {
                let size = px(attrs.number("size").unwrap_or(48.0));
                StyleMap::new()
                    .with("display", "inline-block")
                    .with("width", size.clone())
                    .with("height", size)
                    .with("borderRadius", px(PILL))
            })
            .constraint("size", Constraint::Number),
        Descriptor::new("BackgroundImage", RenderTarget::primitive("div"))
            .default("w", 1)
            .style_fn(|attrs, _| {
                StyleMap::new()
                    .with_some("backgroundImage", attrs.text("src").map(|src| format!("url({})", src)))
                    .with("backgroundSize", "cover")
                    .with("backgroundPosition", "center")
                    .with("height", 0)
                    .with("paddingBottom", ratio_percent(attrs, "ratio", 0.75))
            })
            .constraint("src", Constraint::String)
            .constraint("ratio", Constraint::Number),
        Descriptor::new("Embed", RenderTarget::primitive("div"))
            .style_fn(|attrs, _| {
                StyleMap::new()
                    .with("position", "relative")
                    .with("height", 0)
                    .with("padding", 0)
                    .with("paddingBottom", ratio_percent(attrs, "ratio", 9.0 / 16.0))
                    .with("overflow", "hidden")
                    .with(
                        "& > iframe",
                        StyleMap::new()
                            .with("position", "absolute")
                            .with("width", "100%")
                            .with("height", "100%")
                            .with("top", 0)
                            .with("bottom", 0)
                            .with("left", 0)
                            .with("border", 0),
                    )
            })
            .constraint("ratio", Constraint::Number),
        Descriptor::new("Donut", RenderTarget::primitive("svg"))
            .default("color", "blue")
            .default("strokeWidth", 2)
            .default("value", 1),
    ]
}
