//! Palette color resolution.
//!
//! A palette entry is either a flat value (`white: "#fff"`) or a hue family:
//! a list of shades, lightest first. [`ColorResolver::get`] turns a color
//! short-hand (a name plus an optional shade) into a concrete value:
//!
//! - names missing from the palette pass through unchanged, so CSS keywords
//!   such as `inherit` or `transparent` keep working without palette entries;
//! - flat entries ignore the shade;
//! - hue families pick the requested shade, [`DEFAULT_SHADE`] when none is
//!   given, and clamp past-the-end shades to the darkest one.
//!
//! A name like `gray9` that is not itself a palette key is read as hue `gray`,
//! shade 9.

use tracing::trace;

use crate::theme::{Theme, ThemeValue};
use crate::value::format_number;

/// Shade used when a hue family is referenced without one.
pub const DEFAULT_SHADE: usize = 5;

/// Resolves color names against one theme's palette.
#[derive(Debug, Clone, Copy)]
pub struct ColorResolver<'t> {
    theme: &'t Theme,
}

/// Binds a color resolver to `theme`.
///
/// # Example
///
/// ```rust
/// use stylekit::{color::resolve_color, Theme};
///
/// let theme = Theme::new()
///     .with_hue("blue", ["#eaf", "#a5d", "#5ad", "#0bd", "#09b", "#078", "#056", "#034", "#012", "#001"])
///     .with_color("white", "#fff");
/// let color = resolve_color(&theme);
///
/// assert_eq!(color.get("blue", Some(2)), "#5ad");
/// assert_eq!(color.get("blue", None), "#078");
/// assert_eq!(color.get("white", Some(9)), "#fff");
/// assert_eq!(color.get("inherit", Some(3)), "inherit");
/// ```
pub fn resolve_color(theme: &Theme) -> ColorResolver<'_> {
    ColorResolver { theme }
}

impl<'t> ColorResolver<'t> {
    /// Resolves `name` at `shade`.
    pub fn get(&self, name: &str, shade: Option<usize>) -> String {
        if let Some(entry) = self.theme.colors().and_then(|c| c.get(name)) {
            if let Some(value) = pick(entry, shade) {
                return value;
            }
        } else if let Some((hue, digit)) = split_flat_shade(name) {
            let family = self
                .theme
                .colors()
                .and_then(|c| c.get(hue))
                .filter(|entry| matches!(entry, ThemeValue::List(_)));
            if let Some(entry) = family {
                if let Some(value) = pick(entry, Some(digit)) {
                    return value;
                }
            }
        }

        trace!(color = name, "color not in palette, passing through");
        name.to_string()
    }

    /// Resolves `name` with the default shade.
    pub fn base(&self, name: &str) -> String {
        self.get(name, None)
    }
}

fn pick(entry: &ThemeValue, shade: Option<usize>) -> Option<String> {
    match entry {
        ThemeValue::Text(s) => Some(s.clone()),
        ThemeValue::Number(n) => Some(format_number(*n)),
        ThemeValue::List(shades) if !shades.is_empty() => {
            let index = shade.unwrap_or(DEFAULT_SHADE).min(shades.len() - 1);
            match &shades[index] {
                ThemeValue::Text(s) => Some(s.clone()),
                ThemeValue::Number(n) => Some(format_number(*n)),
                _ => None,
            }
        }
        _ => None,
    }
}

/// Splits `gray9` into (`gray`, 9).
fn split_flat_shade(name: &str) -> Option<(&str, usize)> {
    let digits = name.len() - name.trim_end_matches(|c: char| c.is_ascii_digit()).len();
    if digits == 0 || digits == name.len() {
        return None;
    }
    let (hue, shade) = name.split_at(name.len() - digits);
    shade.parse().ok().map(|s| (hue, s))
}

/// A translucent black overlay, `amount` in 0–1.
///
/// Used for hover and active shading that works on any background.
///
/// ```rust
/// assert_eq!(stylekit::color::darken(0.25), "rgba(0, 0, 0, 0.25)");
/// ```
pub fn darken(amount: f64) -> String {
    let amount = if amount.is_nan() { 0.0 } else { amount.clamp(0.0, 1.0) };
    format!("rgba(0, 0, 0, {})", format_number(amount))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn theme() -> Theme {
        Theme::new()
            .with_hue(
                "blue",
                ["#eaf", "#a5d", "#5ad", "#0bd", "#09b", "#078", "#056", "#034", "#012", "#001"],
            )
            .with_hue("gray", ["#eee", "#ccc", "#999"])
            .with_color("white", "#fff")
            .with_color("brand", "#c0ffee")
    }

    #[test]
    fn test_shade_index() {
        let theme = theme();
        let color = resolve_color(&theme);
        assert_eq!(color.get("blue", Some(0)), "#eaf");
        assert_eq!(color.get("blue", Some(6)), "#056");
        assert_eq!(color.get("blue", Some(9)), "#001");
    }

    #[test]
    fn test_default_shade() {
        let theme = theme();
        assert_eq!(resolve_color(&theme).get("blue", None), "#078");
        assert_eq!(resolve_color(&theme).base("blue"), "#078");
    }

    #[test]
    fn test_out_of_range_clamps_to_darkest() {
        let theme = theme();
        let color = resolve_color(&theme);
        assert_eq!(color.get("blue", Some(42)), "#001");
        // Short family, default shade past the end.
        assert_eq!(color.get("gray", None), "#999");
    }

    #[test]
    fn test_flat_entry_ignores_shade() {
        let theme = theme();
        let color = resolve_color(&theme);
        assert_eq!(color.get("white", None), "#fff");
        assert_eq!(color.get("brand", Some(3)), "#c0ffee");
    }

    #[test]
    fn test_unknown_name_passes_through() {
        let theme = theme();
        let color = resolve_color(&theme);
        assert_eq!(color.get("inherit", None), "inherit");
        assert_eq!(color.get("transparent", Some(4)), "transparent");
        assert_eq!(color.get("#123456", Some(1)), "#123456");
    }

    #[test]
    fn test_no_palette_passes_through() {
        let theme = Theme::new();
        assert_eq!(resolve_color(&theme).get("blue", Some(2)), "blue");
    }

    #[test]
    fn test_flattened_shade_name() {
        let theme = theme();
        let color = resolve_color(&theme);
        assert_eq!(color.get("blue7", None), "#034");
        assert_eq!(color.get("gray1", Some(0)), "#ccc");
        // Flat entries are not split.
        assert_eq!(color.get("white2", None), "white2");
        assert_eq!(color.get("h2", None), "h2");
    }

    #[test]
    fn test_split_flat_shade() {
        assert_eq!(split_flat_shade("gray9"), Some(("gray", 9)));
        assert_eq!(split_flat_shade("blue10"), Some(("blue", 10)));
        assert_eq!(split_flat_shade("gray"), None);
        assert_eq!(split_flat_shade("42"), None);
    }

    #[test]
    fn test_darken() {
        assert_eq!(darken(0.5), "rgba(0, 0, 0, 0.5)");
        assert_eq!(darken(0.0625), "rgba(0, 0, 0, 0.0625)");
        assert_eq!(darken(2.0), "rgba(0, 0, 0, 1)");
        assert_eq!(darken(-1.0), "rgba(0, 0, 0, 0)");
    }
}
