//! Badges, overlays, carousels and other widgets.

use super::util::{attr_color, font_size, radius, shade, space, weight, PILL};
use crate::color::{darken, resolve_color};
use crate::descriptor::{Constraint, Descriptor, RenderTarget};
use crate::style::{px, StyleMap};
use crate::value::format_number;

pub(super) fn descriptors() -> Vec<Descriptor> {
    vec![
        Descriptor::new("Progress", RenderTarget::primitive("progress"))
            .default("w", 1)
            .default("m", 0)
            .style_fn(|attrs, theme| {
                let track = shade(theme, "gray", 2);
                let value = attr_color(attrs, theme, "color", None);
                StyleMap::new()
                    .with("display", "block")
                    .with_some("height", space(theme, 1))
                    .with("backgroundColor", track.clone())
                    .with_some("borderRadius", radius(theme))
                    .with("overflow", "hidden")
                    .with("appearance", "none")
                    .with(
                        "&::-webkit-progress-bar",
                        StyleMap::new().with("backgroundColor", track),
                    )
                    .with(
                        "&::-webkit-progress-value",
                        StyleMap::new().with_some("backgroundColor", value.clone()),
                    )
                    .with(
                        "&::-moz-progress-bar",
                        StyleMap::new().with_some("backgroundColor", value),
                    )
            }),
        Descriptor::new("Message", RenderTarget::primitive("div"))
            .default("px", 3)
            .default("py", 2)
            .default("color", "white")
            .default("bg", "blue")
            .style_fn(|_, theme| StyleMap::new().with_some("fontWeight", weight(theme, 1))),
        Descriptor::new("Badge", RenderTarget::primitive("div"))
            .default("f", 0)
            .default("p", 1)
            .default("mx", 1)
            .default("color", "white")
            .default("bg", "blue")
            .style_fn(|_, theme| {
                StyleMap::new()
                    .with_some("fontWeight", weight(theme, 1))
                    .with("display", "inline-block")
                    .with("verticalAlign", "middle")
                    .with_some("borderRadius", radius(theme))
            }),
        Descriptor::new("Circle", RenderTarget::reference("Badge"))
            .default("color", "white")
            .default("bg", "blue")
            .style_fn(|attrs, _| {
                let size = px(attrs.number("size").unwrap_or(24.0));
                StyleMap::new()
                    .with("textAlign", "center")
                    .with("width", size.clone())
                    .with("height", size)
                    .with("borderRadius", px(PILL))
            })
            .constraint("size", Constraint::Number),
        Descriptor::new("Overlay", RenderTarget::primitive("div"))
            .default("p", 3)
            .default("bg", "white")
            .style_fn(|_, theme| {
                StyleMap::new()
                    .with("position", "fixed")
                    .with("top", "50%")
                    .with("left", "50%")
                    .with("transform", "translate(-50%, -50%)")
                    .with("maxWidth", "100vw")
                    .with("maxHeight", "100vh")
                    .with("overflow", "auto")
                    .with_some("borderRadius", radius(theme))
                    .with(
                        "boxShadow",
                        format!("0 0 0 60vmax {}, 0 0 32px {}", darken(0.5), darken(0.25)),
                    )
            }),
        Descriptor::new("DotButton", RenderTarget::primitive("button"))
            .default("m", 0)
            .style_fn(|attrs, theme| {
                let blue = resolve_color(theme).base("blue");
                let background = if attrs.flag("active") {
                    "currentcolor".to_string()
                } else {
                    darken(0.25)
                };
                StyleMap::new()
                    .with("padding", 0)
                    .with_some("width", space(theme, 3))
                    .with_some("height", space(theme, 3))
                    .with("borderWidth", px(4.0))
                    .with("borderStyle", "solid")
                    .with("borderColor", "transparent")
                    .with("backgroundClip", "padding-box")
                    .with("borderRadius", px(PILL))
                    .with("backgroundColor", background)
                    .with("appearance", "none")
                    .with("&:hover", StyleMap::new().with("backgroundColor", blue.clone()))
                    .with("&:focus", StyleMap::new().with("backgroundColor", blue))
                    .with("&:disabled", StyleMap::new().with("opacity", 0.25))
            })
            .constraint("active", Constraint::Bool),
        Descriptor::new("Carousel", RenderTarget::primitive("div"))
            .style_fn(|attrs, _| {
                let index = attrs.number("index").unwrap_or(0.0);
                StyleMap::new()
                    .with("width", "100%")
                    .with("overflow", "hidden")
                    .with("whiteSpace", "nowrap")
                    .with(
                        "& > div:first-child",
                        StyleMap::new()
                            .with("marginLeft", format!("{}%", format_number(index * -100.0)))
                            .with("transitionProperty", "margin")
                            .with("transitionDuration", ".2s")
                            .with("transitionTimingFunction", "ease-out"),
                    )
            })
            .constraint("index", Constraint::Number),
        Descriptor::new("ScrollCarousel", RenderTarget::primitive("div")).style(
            StyleMap::new()
                .with("width", "100%")
                .with("overflow", "auto")
                .with("whiteSpace", "nowrap")
                .with("scrollSnapPointsX", "repeat(100%)")
                .with("scrollSnapType", "mandatory")
                .with("scrollSnapDestination", "0% 100%"),
        ),
        Descriptor::new("CarouselSlide", RenderTarget::primitive("div"))
            .default("w", 1)
            .default("p", 3)
            .style(
                StyleMap::new()
                    .with("display", "inline-block")
                    .with("verticalAlign", "middle"),
            ),
        Descriptor::new("Tooltip", RenderTarget::primitive("div"))
            .default("color", "white")
            .default("bg", "black")
            .style_fn(|attrs, theme| {
                let bg = attr_color(attrs, theme, "bg", None);
                let before = StyleMap::new()
                    .with("display", "none")
                    .with_some("content", attrs.text("text").map(|t| format!("\"{}\"", t)))
                    .with("position", "absolute")
                    .with("bottom", "100%")
                    .with("left", "50%")
                    .with("transform", "translate(-50%, -4px)")
                    .with("whiteSpace", "nowrap")
                    .with_some("fontSize", font_size(theme, 0))
                    .with_some("paddingTop", space(theme, 1))
                    .with_some("paddingBottom", space(theme, 1))
                    .with_some("paddingLeft", space(theme, 2))
                    .with_some("paddingRight", space(theme, 2))
                    .with_some("color", attr_color(attrs, theme, "color", None))
                    .with_some("backgroundColor", bg.clone())
                    .with_some("borderRadius", radius(theme));
                let after = StyleMap::new()
                    .with("display", "none")
                    .with("position", "absolute")
                    .with("bottom", "100%")
                    .with("left", "50%")
                    .with("transform", "translate(-50%, 8px)")
                    .with("content", "\" \"")
                    .with("borderWidth", px(6.0))
                    .with("borderStyle", "solid")
                    .with("borderColor", "transparent")
                    .with_some("borderTopColor", bg);
                StyleMap::new()
                    .with("display", "inline-block")
                    .with("position", "relative")
                    .with("color", "inherit")
                    .with("backgroundColor", "transparent")
                    .with("&::before", before)
                    .with("&::after", after)
                    .with(
                        "&:hover",
                        StyleMap::new().with(
                            "&::before, &::after",
                            StyleMap::new().with("display", "block"),
                        ),
                    )
            })
            .constraint("text", Constraint::String),
        Descriptor::new("Star", RenderTarget::primitive("div"))
            .default("f", 3)
            .default("color", "yellow")
            .children_fn(|attrs| {
                let glyph = if attrs.flag("checked") { "★" } else { "☆" };
                glyph.to_string()
            })
            .style_fn(|attrs, _| {
                StyleMap::new()
                    .with("position", "relative")
                    .with("width", "1em")
                    .with("height", "1em")
                    .with(
                        "&::after",
                        StyleMap::new()
                            .with("display", if attrs.flag("half") { "block" } else { "none" })
                            .with("content", "\"★\"")
                            .with("position", "absolute")
                            .with("left", 0)
                            .with("top", 0)
                            .with("width", "1em")
                            .with("height", "1em")
                            .with("clip", "rect(0, .45em, 1em, 0)"),
                    )
            })
            .constraint("checked", Constraint::Bool)
            .constraint("half", Constraint::Bool),
        Descriptor::new("Arrow", RenderTarget::primitive("div"))
            .default("direction", "down")
            .style_fn(|attrs, _| {
                let direction = attrs.text("direction");
                StyleMap::new()
                    .with("display", "inline-block")
                    .with("width", 0)
                    .with("height", 0)
                    .with("verticalAlign", "middle")
                    .with("borderRight", ".3125em solid transparent")
                    .with("borderLeft", ".3125em solid transparent")
                    .with_some("borderTop", (direction == Some("down")).then_some(".4375em solid"))
                    .with_some("borderBottom", (direction == Some("up")).then_some(".4375em solid"))
            })
            .constraint(
                "direction",
                Constraint::OneOf(vec!["up".to_string(), "down".to_string()]),
            ),
    ]
}
