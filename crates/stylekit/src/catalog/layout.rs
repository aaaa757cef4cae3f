//! Layout containers and positioning.

use super::util::{edge, radius, shade, weight};
use crate::descriptor::{Constraint, Descriptor, RenderTarget};
use crate::scale;
use crate::style::{px, CssValue, StyleMap};
use crate::value::Attributes;

const EDGES: [&str; 4] = ["top", "right", "bottom", "left"];

fn edge_flags(descriptor: Descriptor) -> Descriptor {
    EDGES
        .into_iter()
        .fold(descriptor, |d, flag| d.constraint(flag, Constraint::Bool))
        .constraint("z", Constraint::Number)
}

/// `position` plus edge offsets and `zIndex`.
fn positioned(position: &str, attrs: &Attributes) -> StyleMap {
    EDGES
        .into_iter()
        .fold(StyleMap::new().with("position", position), |style, flag| {
            style.with_some(flag, edge(attrs, flag))
        })
        .with_some("zIndex", attrs.number("z"))
}

pub(super) fn descriptors() -> Vec<Descriptor> {
    vec![
        Descriptor::new("Container", RenderTarget::primitive("div"))
            .default("px", 3)
            .default("mx", "auto")
            .style_fn(|attrs, theme| {
                let width = attrs
                    .number("width")
                    .or_else(|| scale::lookup_number("maxWidth", theme))
                    .unwrap_or(1024.0);
                StyleMap::new()
                    .with("maxWidth", px(width))
                    .with("width", "auto")
            })
            .constraint("width", Constraint::Number),
        Descriptor::new("Divider", RenderTarget::primitive("hr"))
            .default("my", 2)
            .style(
                StyleMap::new()
                    .with("border", 0)
                    .with("borderBottomWidth", px(1.0))
                    .with("borderBottomStyle", "solid"),
            ),
        Descriptor::new("Border", RenderTarget::primitive("div"))
            .style_fn(|attrs, theme| {
                let width = px(attrs.number("borderWidth").unwrap_or(1.0));
                let name = attrs.text("color").unwrap_or("gray");
                let style = StyleMap::new()
                    .with("borderStyle", "solid")
                    .with("borderColor", shade(theme, name, 2))
                    .with("color", "inherit");

                if EDGES.iter().any(|flag| attrs.flag(flag)) {
                    style
                        .with("borderTopWidth", side(attrs, "top", &width))
                        .with("borderRightWidth", side(attrs, "right", &width))
                        .with("borderBottomWidth", side(attrs, "bottom", &width))
                        .with("borderLeftWidth", side(attrs, "left", &width))
                } else {
                    style.with("borderWidth", width)
                }
            })
            .constraint("top", Constraint::Bool)
            .constraint("right", Constraint::Bool)
            .constraint("bottom", Constraint::Bool)
            .constraint("left", Constraint::Bool)
            .constraint("borderWidth", Constraint::Number)
            .constraint("color", Constraint::String),
        Descriptor::new("Media", RenderTarget::primitive("div")).style(
            StyleMap::new()
                .with("display", "flex")
                .with("alignItems", "center"),
        ),
        Descriptor::new("Card", RenderTarget::primitive("div"))
            .default("bg", "white")
            .style_fn(|_, theme| {
                let gray = shade(theme, "gray", 2);
                StyleMap::new()
                    .with("overflow", "hidden")
                    .with("boxShadow", format!("inset 0 0 0 1px {}, 0 0 4px {}", gray, gray))
                    .with_some("borderRadius", radius(theme))
            }),
        Descriptor::new("Banner", RenderTarget::primitive("div"))
            .default("p", vec![3, 4])
            .style_fn(|attrs, _| {
                StyleMap::new()
                    .with("display", "flex")
                    .with("flexDirection", "column")
                    .with("alignItems", "center")
                    .with("justifyContent", "center")
                    .with("minHeight", "80vh")
                    .with("backgroundSize", "cover")
                    .with("backgroundPosition", "center")
                    .with_some(
                        "backgroundImage",
                        attrs.text("backgroundImage").map(|src| format!("url({})", src)),
                    )
            })
            .constraint("backgroundImage", Constraint::String),
        Descriptor::new("Panel", RenderTarget::primitive("div")).style_fn(|_, theme| {
            StyleMap::new()
                .with("overflow", "hidden")
                .with_some("borderRadius", radius(theme))
                .with("borderWidth", px(1.0))
                .with("borderStyle", "solid")
        }),
        Descriptor::new("PanelHeader", RenderTarget::primitive("header"))
            .default("f", 2)
            .default("p", 2)
            .style_fn(|_, theme| {
                StyleMap::new()
                    .with_some("fontWeight", weight(theme, 1))
                    .with("borderBottomWidth", px(1.0))
                    .with("borderBottomStyle", "solid")
            }),
        Descriptor::new("PanelFooter", RenderTarget::primitive("footer"))
            .default("f", 1)
            .default("p", 2)
            .style_fn(|_, theme| {
                StyleMap::new()
                    .with_some("fontWeight", weight(theme, 1))
                    .with("borderTopWidth", px(1.0))
                    .with("borderTopStyle", "solid")
            }),
        Descriptor::new("Group", RenderTarget::primitive("div")).style_fn(|_, theme| {
            let r = px(theme.radius().unwrap_or(4.0));
            StyleMap::new()
                .with("& > *", StyleMap::new().with("borderRadius", 0))
                .with(
                    "& > *:first-child",
                    StyleMap::new().with("borderRadius", format!("{} 0 0 {}", r, r)),
                )
                .with(
                    "& > *:last-child",
                    StyleMap::new().with("borderRadius", format!("0 {} {} 0", r, r)),
                )
        }),
        Descriptor::new("Toolbar", RenderTarget::primitive("div"))
            .default("px", 2)
            .default("color", "white")
            .default("bg", "gray9")
            .style(
                StyleMap::new()
                    .with("display", "flex")
                    .with("alignItems", "center"),
            ),
        Descriptor::new("Relative", RenderTarget::primitive("div"))
            .style_fn(|attrs, _| {
                StyleMap::new()
                    .with("position", "relative")
                    .with_some("zIndex", attrs.number("z"))
            })
            .constraint("z", Constraint::Number),
        edge_flags(
            Descriptor::new("Absolute", RenderTarget::primitive("div"))
                .style_fn(|attrs, _| positioned("absolute", attrs)),
        ),
        edge_flags(
            Descriptor::new("Fixed", RenderTarget::primitive("div"))
                .style_fn(|attrs, _| positioned("fixed", attrs)),
        ),
        edge_flags(
            Descriptor::new("Sticky", RenderTarget::primitive("div"))
                .style_fn(|attrs, _| positioned("sticky", attrs)),
        ),
        Descriptor::new("Drawer", RenderTarget::reference("Fixed"))
            .default("bg", "white")
            .default("size", 320)
            .style_fn(|attrs, _| drawer(attrs))
            .constraint("size", Constraint::Number)
            .constraint(
                "position",
                Constraint::OneOf(EDGES.iter().map(|p| p.to_string()).collect()),
            ),
    ]
}

fn side(attrs: &Attributes, flag: &str, width: &CssValue) -> CssValue {
    if attrs.flag(flag) {
        width.clone()
    } else {
        0.into()
    }
}

/// A panel sliding in from one edge; closed drawers are translated out of view.
fn drawer(attrs: &Attributes) -> StyleMap {
    let position = attrs.text("position").unwrap_or("left");
    let size = px(attrs.number("size").unwrap_or(320.0));
    let horizontal = matches!(position, "left" | "right");

    let transform = match position {
        "right" => "translateX(100%)",
        "top" => "translateY(-100%)",
        "bottom" => "translateY(100%)",
        _ => "translateX(-100%)",
    };
    let zero_if = |on: bool| on.then_some(0);

    StyleMap::new()
        .with_some("top", zero_if(matches!(position, "top" | "left" | "right")))
        .with_some("bottom", zero_if(matches!(position, "bottom" | "left" | "right")))
        .with_some("left", zero_if(matches!(position, "left" | "top" | "bottom")))
        .with_some("right", zero_if(matches!(position, "right" | "top" | "bottom")))
        .with_some("width", horizontal.then(|| size.clone()))
        .with_some("height", (!horizontal).then(|| size.clone()))
        .with_some("transform", (!attrs.flag("open")).then_some(transform))
        .with("overflowX", "hidden")
        .with("overflowY", "auto")
        .with("transitionProperty", "transform")
        .with("transitionDuration", ".2s")
        .with("transitionTimingFunction", "ease-out")
}
