//! Helpers shared by the catalog's style functions.

use crate::color::resolve_color;
use crate::scale;
use crate::style::{px, CssValue, StyleMap};
use crate::theme::Theme;
use crate::value::Attributes;

/// A fully rounded corner.
pub(super) const PILL: f64 = 99999.0;

/// Font weight at `index` of the `weights` scale.
pub(super) fn weight(theme: &Theme, index: usize) -> Option<f64> {
    scale::lookup_number(&format!("weights.{}", index), theme)
}

/// Step `index` of the `space` scale, in pixels.
pub(super) fn space(theme: &Theme, index: usize) -> Option<CssValue> {
    scale::lookup_number(&format!("space.{}", index), theme).map(px)
}

/// Step `index` of the `fontSizes` scale, in pixels.
pub(super) fn font_size(theme: &Theme, index: usize) -> Option<CssValue> {
    scale::lookup_number(&format!("fontSizes.{}", index), theme).map(px)
}

/// The theme's corner radius, in pixels.
pub(super) fn radius(theme: &Theme) -> Option<CssValue> {
    theme.radius().map(px)
}

/// `color(name, shade)` for a palette name given literally.
pub(super) fn shade(theme: &Theme, name: &str, shade: usize) -> String {
    resolve_color(theme).get(name, Some(shade))
}

/// The palette name in attribute `key`, resolved at `shade`, or at the
/// default shade when `shade` is `None`.
pub(super) fn attr_color(attrs: &Attributes, theme: &Theme, key: &str, shade: Option<usize>) -> Option<String> {
    attrs.text(key).map(|name| resolve_color(theme).get(name, shade))
}

/// `letterSpacing` and `textTransform` when the `caps` flag is set.
pub(super) fn caps(attrs: &Attributes) -> StyleMap {
    if attrs.flag("caps") {
        StyleMap::new()
            .with("letterSpacing", ".1em")
            .with("textTransform", "uppercase")
    } else {
        StyleMap::new()
    }
}

/// `textAlign` from the `left`, `center`, `right` and `justify` flags; the
/// first one set wins.
pub(super) fn align(attrs: &Attributes) -> Option<&'static str> {
    ["left", "center", "right", "justify"]
        .into_iter()
        .find(|flag| attrs.flag(flag))
}

/// `0` when `flag` is set, otherwise nothing.
pub(super) fn edge(attrs: &Attributes, flag: &str) -> Option<i32> {
    attrs.flag(flag).then_some(0)
}

/// A ratio attribute as a percentage, `fallback` when absent.
pub(super) fn ratio_percent(attrs: &Attributes, key: &str, fallback: f64) -> String {
    let ratio = attrs.number(key).unwrap_or(fallback);
    format!("{}%", crate::value::format_number(ratio * 100.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_align_first_flag_wins() {
        assert_eq!(align(&Attributes::new()), None);
        assert_eq!(align(&Attributes::new().with("center", true)), Some("center"));
        assert_eq!(
            align(&Attributes::new().with("right", true).with("left", true)),
            Some("left")
        );
        assert_eq!(align(&Attributes::new().with("justify", false)), None);
    }

    #[test]
    fn test_caps() {
        assert!(caps(&Attributes::new()).is_empty());
        let style = caps(&Attributes::new().with("caps", true));
        assert_eq!(style.value("textTransform"), Some(&CssValue::Text("uppercase".into())));
    }

    #[test]
    fn test_scale_helpers() {
        let theme = Theme::builtin();
        assert_eq!(weight(theme, 1), Some(700.0));
        assert_eq!(space(theme, 1), Some(CssValue::Text("8px".into())));
        assert_eq!(font_size(theme, 0), Some(CssValue::Text("12px".into())));
        assert_eq!(radius(theme), Some(CssValue::Text("4px".into())));
        assert_eq!(weight(&Theme::new(), 1), None);
    }

    #[test]
    fn test_ratio_percent() {
        assert_eq!(ratio_percent(&Attributes::new(), "ratio", 0.75), "75%");
        assert_eq!(ratio_percent(&Attributes::new().with("ratio", 0.5), "ratio", 0.75), "50%");
    }
}
