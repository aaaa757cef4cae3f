//! Text and headings.

use super::util::{align, caps, weight};
use crate::descriptor::{Constraint, Descriptor, RenderTarget};
use crate::style::StyleMap;

const TEXT_FLAGS: [&str; 6] = ["left", "center", "right", "justify", "bold", "caps"];

fn text_flags(descriptor: Descriptor) -> Descriptor {
    TEXT_FLAGS
        .into_iter()
        .fold(descriptor, |d, flag| d.constraint(flag, Constraint::Bool))
}

pub(super) fn descriptors() -> Vec<Descriptor> {
    vec![
        text_flags(
            Descriptor::new("Text", RenderTarget::primitive("p"))
                .default("m", 0)
                .style_fn(|attrs, theme| {
                    let mut style = StyleMap::new()
                        .with_some("textAlign", align(attrs))
                        .with_some("fontWeight", weight(theme, if attrs.flag("bold") { 1 } else { 0 }));
                    style.merge(caps(attrs));
                    style
                }),
        ),
        text_flags(
            Descriptor::new("Heading", RenderTarget::reference("Text"))
                .default("is", "h2")
                .default("f", 5)
                .default("m", 0)
                .default("bold", true)
                .style(StyleMap::new().with("lineHeight", 1.25)),
        ),
        Descriptor::new("Subhead", RenderTarget::reference("Heading"))
            .default("is", "h3")
            .default("f", 4)
            .default("m", 0),
        Descriptor::new("Small", RenderTarget::reference("Text"))
            .default("is", "small")
            .default("f", 0),
        Descriptor::new("Lead", RenderTarget::reference("Text"))
            .default("is", "p")
            .default("f", 3)
            .default("m", 0)
            .style(StyleMap::new().with("lineHeight", 1.25)),
        Descriptor::new("Pre", RenderTarget::primitive("pre"))
            .default("f", 1)
            .default("m", 0)
            .style_fn(|_, theme| {
                StyleMap::new()
                    .with_some("fontFamily", theme.monospace())
                    .with("overflow", "auto")
            }),
        Descriptor::new("Code", RenderTarget::primitive("code"))
            .default("f", 1)
            .style_fn(|_, theme| StyleMap::new().with_some("fontFamily", theme.monospace())),
        Descriptor::new("Samp", RenderTarget::reference("Code")).default("is", "samp"),
        Descriptor::new("Blockquote", RenderTarget::reference("Text"))
            .default("is", "blockquote")
            .default("m", 0)
            .default("f", 3),
    ]
}
