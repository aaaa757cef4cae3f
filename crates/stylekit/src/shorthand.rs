//! Short-hand style attributes.
//!
//! A short-hand attribute is an abbreviated key resolved against a theme
//! scale into one or more style properties:
//!
//! | key | properties | scale |
//! |---|---|---|
//! | `m` `mt` `mr` `mb` `ml` `mx` `my` | margins | `space` |
//! | `p` `pt` `pr` `pb` `pl` `px` `py` | paddings | `space` |
//! | `f` | `fontSize` | `fontSizes` |
//! | `w` | `width` | none |
//! | `color` | `color` | palette |
//! | `bg` | `backgroundColor` | palette |
//!
//! Numbers are scale indices. A negative index negates the step, so `m: -2`
//! is a negative margin. A number that is not an index into the scale (a
//! fraction, or past the end) is used as-is. Strings such as `auto` pass
//! through. For `w`, numbers above 1 are lengths and numbers from 0 to 1 are
//! fractions rendered as percentages. NaN and infinities are dropped.
//!
//! Keys apply in table order, general before specific: `mx` overrides `m`,
//! `ml` overrides `mx`, regardless of how the attributes were ordered.

use crate::color::resolve_color;
use crate::responsive::{expand, Rule};
use crate::scale;
use crate::style::{CssValue, StyleMap, StyleValue};
use crate::theme::{Theme, FONT_SIZES, SPACE};
use crate::value::{format_number, AttrValue, Scalar};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Space,
    FontSize,
    Width,
    Color,
}

struct Shorthand {
    key: &'static str,
    properties: &'static [&'static str],
    kind: Kind,
}

const fn entry(key: &'static str, properties: &'static [&'static str], kind: Kind) -> Shorthand {
    Shorthand { key, properties, kind }
}

const TABLE: &[Shorthand] = &[
    entry("m", &["margin"], Kind::Space),
    entry("mx", &["marginLeft", "marginRight"], Kind::Space),
    entry("my", &["marginTop", "marginBottom"], Kind::Space),
    entry("mt", &["marginTop"], Kind::Space),
    entry("mr", &["marginRight"], Kind::Space),
    entry("mb", &["marginBottom"], Kind::Space),
    entry("ml", &["marginLeft"], Kind::Space),
    entry("p", &["padding"], Kind::Space),
    entry("px", &["paddingLeft", "paddingRight"], Kind::Space),
    entry("py", &["paddingTop", "paddingBottom"], Kind::Space),
    entry("pt", &["paddingTop"], Kind::Space),
    entry("pr", &["paddingRight"], Kind::Space),
    entry("pb", &["paddingBottom"], Kind::Space),
    entry("pl", &["paddingLeft"], Kind::Space),
    entry("f", &["fontSize"], Kind::FontSize),
    entry("w", &["width"], Kind::Width),
    entry("color", &["color"], Kind::Color),
    entry("bg", &["backgroundColor"], Kind::Color),
];

/// Returns `true` if `key` is a short-hand style attribute.
pub fn is_shorthand(key: &str) -> bool {
    TABLE.iter().any(|s| s.key == key)
}

/// Every short-hand key, in application order.
pub fn keys() -> impl Iterator<Item = &'static str> {
    TABLE.iter().map(|s| s.key)
}

/// Resolves the short-hand attributes in `attrs` into style properties.
///
/// Non-short-hand keys are ignored. Values that cannot be resolved (a boolean
/// margin, say) are omitted.
///
/// # Example
///
/// ```rust
/// use stylekit::{shorthand, Attributes, Theme};
/// use stylekit::style::CssValue;
///
/// let theme = Theme::new().with_space([0, 4, 8, 16, 32]);
/// let style = shorthand::resolve(&Attributes::new().with("px", 3).with("m", "auto"), &theme);
///
/// assert_eq!(style.value("paddingLeft"), Some(&CssValue::Number(16.0)));
/// assert_eq!(style.value("paddingRight"), Some(&CssValue::Number(16.0)));
/// assert_eq!(style.value("margin"), Some(&CssValue::Text("auto".into())));
/// ```
pub fn resolve(attrs: &crate::Attributes, theme: &Theme) -> StyleMap {
    let mut style = StyleMap::new();

    for shorthand in TABLE {
        let Some(value) = attrs.get(shorthand.key) else {
            continue;
        };
        let Some(resolved) = resolve_value(shorthand.kind, value, theme) else {
            continue;
        };
        for property in shorthand.properties {
            style.insert(*property, resolved.clone());
        }
    }

    style
}

fn resolve_value(kind: Kind, value: &AttrValue, theme: &Theme) -> Option<StyleValue> {
    match value {
        AttrValue::Scalar(scalar) => resolve_scalar(kind, scalar, theme).map(StyleValue::Value),
        AttrValue::Responsive(_) => {
            let rules: Vec<Rule> = expand(value)
                .into_iter()
                .filter_map(|tier| {
                    resolve_scalar(kind, tier.value, theme).map(|v| Rule::new(tier.breakpoint, v))
                })
                .collect();
            (!rules.is_empty()).then_some(StyleValue::Responsive(rules))
        }
    }
}

fn resolve_scalar(kind: Kind, value: &Scalar, theme: &Theme) -> Option<CssValue> {
    match (kind, value) {
        (_, Scalar::Bool(_)) => None,
        (_, Scalar::Number(n)) if !n.is_finite() => None,
        (Kind::Color, Scalar::Text(name)) => Some(CssValue::Text(resolve_color(theme).base(name))),
        (Kind::Color, Scalar::Number(_)) => None,
        (_, Scalar::Text(s)) => Some(CssValue::Text(s.clone())),
        (Kind::Space, Scalar::Number(n)) => Some(CssValue::Number(scaled(theme, SPACE, *n))),
        (Kind::FontSize, Scalar::Number(n)) => Some(CssValue::Number(scaled(theme, FONT_SIZES, *n))),
        (Kind::Width, Scalar::Number(n)) => Some(width(*n)),
    }
}

/// Looks up `n` as an index into `scale`; negative indices negate the step.
/// Falls back to `n` itself when it is not an index into the scale.
fn scaled(theme: &Theme, scale_name: &str, n: f64) -> f64 {
    if n.fract() != 0.0 {
        return n;
    }
    let step = scale::at(theme, scale_name, n.abs() as usize).and_then(|v| v.as_number());
    match step {
        Some(step) if n < 0.0 => -step,
        Some(step) => step,
        None => n,
    }
}

fn width(n: f64) -> CssValue {
    if n > 1.0 || n <= 0.0 {
        CssValue::Number(n)
    } else {
        CssValue::Text(format!("{}%", format_number(n * 100.0)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Attributes;

    fn theme() -> Theme {
        Theme::new()
            .with_space([0, 4, 8, 16, 32])
            .with_font_sizes([12, 14, 16, 20, 24, 32])
            .with_hue(
                "blue",
                ["#eaf", "#a5d", "#5ad", "#0bd", "#09b", "#078", "#056", "#034", "#012", "#001"],
            )
            .with_color("white", "#fff")
    }

    #[test]
    fn test_space_scale() {
        let style = resolve(&Attributes::new().with("p", 2).with("mt", 4), &theme());
        assert_eq!(style.value("padding"), Some(&CssValue::Number(8.0)));
        assert_eq!(style.value("marginTop"), Some(&CssValue::Number(32.0)));
    }

    #[test]
    fn test_negative_index_negates() {
        let style = resolve(&Attributes::new().with("ml", -2), &theme());
        assert_eq!(style.value("marginLeft"), Some(&CssValue::Number(-8.0)));
    }

    #[test]
    fn test_non_finite_numbers_dropped() {
        let attrs = Attributes::new()
            .with("p", f64::NAN)
            .with("w", f64::INFINITY)
            .with("f", f64::NEG_INFINITY)
            .with("m", vec![f64::NAN, 2.0]);
        let style = resolve(&attrs, &theme());
        assert!(style.get("padding").is_none());
        assert!(style.get("width").is_none());
        assert!(style.get("fontSize").is_none());
        match style.get("margin") {
            Some(StyleValue::Responsive(rules)) => {
                assert_eq!(rules.len(), 1);
                assert_eq!(rules[0].breakpoint, Some(0));
                assert_eq!(rules[0].value, CssValue::Number(8.0));
            }
            other => panic!("unexpected margin: {:?}", other),
        }
    }

    #[test]
    fn test_out_of_scale_number_is_raw() {
        let style = resolve(&Attributes::new().with("p", 24).with("m", 1.5), &theme());
        assert_eq!(style.value("padding"), Some(&CssValue::Number(24.0)));
        assert_eq!(style.value("margin"), Some(&CssValue::Number(1.5)));
    }

    #[test]
    fn test_specific_overrides_general() {
        let attrs = Attributes::new().with("ml", 1).with("mx", 2).with("m", 3);
        let style = resolve(&attrs, &theme());
        assert_eq!(style.value("margin"), Some(&CssValue::Number(16.0)));
        assert_eq!(style.value("marginRight"), Some(&CssValue::Number(8.0)));
        assert_eq!(style.value("marginLeft"), Some(&CssValue::Number(4.0)));
    }

    #[test]
    fn test_font_size() {
        let style = resolve(&Attributes::new().with("f", 5), &theme());
        assert_eq!(style.value("fontSize"), Some(&CssValue::Number(32.0)));
    }

    #[test]
    fn test_width() {
        let theme = theme();
        let half = resolve(&Attributes::new().with("w", 0.5), &theme);
        assert_eq!(half.value("width"), Some(&CssValue::Text("50%".into())));
        let full = resolve(&Attributes::new().with("w", 1), &theme);
        assert_eq!(full.value("width"), Some(&CssValue::Text("100%".into())));
        let fixed = resolve(&Attributes::new().with("w", 256), &theme);
        assert_eq!(fixed.value("width"), Some(&CssValue::Number(256.0)));
        let zero = resolve(&Attributes::new().with("w", 0), &theme);
        assert_eq!(zero.value("width"), Some(&CssValue::Number(0.0)));
    }

    #[test]
    fn test_colors() {
        let attrs = Attributes::new().with("color", "white").with("bg", "blue");
        let style = resolve(&attrs, &theme());
        assert_eq!(style.value("color"), Some(&CssValue::Text("#fff".into())));
        assert_eq!(style.value("backgroundColor"), Some(&CssValue::Text("#078".into())));
    }

    #[test]
    fn test_responsive_values() {
        let style = resolve(&Attributes::new().with("p", vec![1, 2, 3]), &theme());
        let rules = style.get("padding").and_then(StyleValue::as_rules).unwrap();
        assert_eq!(
            rules,
            &[
                Rule::new(None, 4.0),
                Rule::new(Some(0), 8.0),
                Rule::new(Some(1), 16.0),
            ]
        );
    }

    #[test]
    fn test_unresolvable_values_omitted() {
        let attrs = Attributes::new()
            .with("p", true)
            .with("bg", 3)
            .with("m", vec![Scalar::Bool(false)]);
        assert!(resolve(&attrs, &theme()).is_empty());
    }

    #[test]
    fn test_non_shorthand_ignored() {
        let attrs = Attributes::new().with("href", "#").with("is", "h2");
        assert!(resolve(&attrs, &theme()).is_empty());
        assert!(!is_shorthand("href"));
        assert!(is_shorthand("py"));
        assert_eq!(keys().count(), 18);
    }
}
