//! Stylesheet rendering.
//!
//! [`to_css`] walks a [`StyleMap`] and emits three groups of blocks, in this
//! order:
//!
//! 1. base blocks: the selector itself, then every nested selector;
//! 2. one `@media screen and (min-width: Nem)` block per breakpoint, ascending;
//! 3. overflow blocks: tiers past the declared breakpoints, unconditional, so
//!    they override everything above.
//!
//! Nested keys containing `&` have it replaced by the parent selector; other
//! nested keys are treated as descendant selectors.

use std::collections::BTreeMap;

use super::map::{CssValue, StyleMap, StyleValue};
use crate::responsive::Condition;
use crate::value::format_number;

/// Properties whose numeric values are emitted without a unit.
pub const UNITLESS_PROPERTIES: &[&str] = &[
    "flex",
    "flexGrow",
    "flexShrink",
    "fontWeight",
    "lineHeight",
    "opacity",
    "order",
    "zIndex",
    "zoom",
];

/// Converts a camelCase property name to its CSS form.
///
/// ```rust
/// use stylekit::style::kebab_case;
///
/// assert_eq!(kebab_case("backgroundColor"), "background-color");
/// assert_eq!(kebab_case("WebkitAppearance"), "-webkit-appearance");
/// assert_eq!(kebab_case("msFlex"), "-ms-flex");
/// assert_eq!(kebab_case("border-top"), "border-top");
/// ```
pub fn kebab_case(property: &str) -> String {
    let mut out = String::with_capacity(property.len() + 4);
    if property.starts_with("ms") && property[2..].starts_with(|c: char| c.is_ascii_uppercase()) {
        out.push('-');
    }
    for c in property.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

fn declaration(property: &str, value: &CssValue) -> String {
    let rendered = match value {
        CssValue::Number(n) if *n == 0.0 || UNITLESS_PROPERTIES.contains(&property) => {
            format_number(*n)
        }
        CssValue::Number(n) => format!("{}px", format_number(*n)),
        CssValue::Text(s) => s.clone(),
    };
    format!("{}: {};", kebab_case(property), rendered)
}

fn child_selector(parent: &str, key: &str) -> String {
    if key.contains('&') {
        key.replace('&', parent)
    } else {
        format!("{} {}", parent, key)
    }
}

/// Declarations grouped by selector, in first-seen order.
#[derive(Default)]
struct Group {
    blocks: Vec<(String, Vec<String>)>,
}

impl Group {
    fn push(&mut self, selector: &str, decl: String) {
        match self.blocks.iter_mut().find(|(s, _)| s == selector) {
            Some((_, decls)) => decls.push(decl),
            None => self.blocks.push((selector.to_string(), vec![decl])),
        }
    }

    fn write(&self, out: &mut String, indent: &str) {
        for (selector, decls) in &self.blocks {
            out.push_str(indent);
            out.push_str(selector);
            out.push_str(" {\n");
            for decl in decls {
                out.push_str(indent);
                out.push_str("  ");
                out.push_str(decl);
                out.push('\n');
            }
            out.push_str(indent);
            out.push_str("}\n");
        }
    }
}

#[derive(Default)]
struct Sheet {
    base: Group,
    media: BTreeMap<usize, (f64, Group)>,
    overflow: Group,
}

impl Sheet {
    fn collect(&mut self, selector: &str, style: &StyleMap, breakpoints: &[f64]) {
        let mut nested = Vec::new();

        for (property, value) in style {
            match value {
                StyleValue::Value(v) => self.base.push(selector, declaration(property, v)),
                StyleValue::Responsive(rules) => {
                    for rule in rules {
                        let decl = declaration(property, &rule.value);
                        match (rule.condition(breakpoints), rule.breakpoint) {
                            (Condition::MinWidth(width), Some(index)) => self
                                .media
                                .entry(index)
                                .or_insert_with(|| (width, Group::default()))
                                .1
                                .push(selector, decl),
                            (Condition::Overflow, _) => self.overflow.push(selector, decl),
                            _ => self.base.push(selector, decl),
                        }
                    }
                }
                StyleValue::Nested(inner) => nested.push((child_selector(selector, property), inner)),
                StyleValue::Unset => {}
            }
        }

        for (child, inner) in nested {
            self.collect(&child, inner, breakpoints);
        }
    }

    fn render(&self) -> String {
        let mut out = String::new();
        self.base.write(&mut out, "");
        for (width, group) in self.media.values() {
            out.push_str(&format!("@media screen and (min-width: {}em) {{\n", format_number(*width)));
            group.write(&mut out, "  ");
            out.push_str("}\n");
        }
        self.overflow.write(&mut out, "");
        out
    }
}

/// Renders `style` as stylesheet text scoped to `selector`.
///
/// `breakpoints` are the theme's thresholds in `em`.
///
/// # Example
///
/// ```rust
/// use stylekit::responsive::Rule;
/// use stylekit::style::{to_css, StyleMap};
///
/// let style = StyleMap::new()
///     .with("fontWeight", 700)
///     .with("padding", vec![Rule::new(None, 8.0), Rule::new(Some(0), 16.0)])
///     .with("&:hover", StyleMap::new().with("backgroundColor", "#056"));
///
/// let css = to_css(".button", &style, &[40.0]);
/// assert_eq!(
///     css,
///     ".button {\n  font-weight: 700;\n  padding: 8px;\n}\n\
///      .button:hover {\n  background-color: #056;\n}\n\
///      @media screen and (min-width: 40em) {\n  .button {\n    padding: 16px;\n  }\n}\n"
/// );
/// ```
pub fn to_css(selector: &str, style: &StyleMap, breakpoints: &[f64]) -> String {
    let mut sheet = Sheet::default();
    sheet.collect(selector, style, breakpoints);
    sheet.render()
}
