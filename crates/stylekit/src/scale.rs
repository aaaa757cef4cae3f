//! Dotted-path lookups into a theme.
//!
//! `"space.2"` reads the third step of the spacing scale, `"colors.blue.6"`
//! the seventh blue shade, `"maxWidth"` a top-level entry. Numeric segments
//! index lists and every other segment keys a map. Lookups fail soft: a
//! missing key, an out-of-range index, or a segment that walks into a scalar
//! all give `None`.

use crate::theme::{Theme, ThemeValue};

/// Resolves a dotted path against a theme.
///
/// # Example
///
/// ```rust
/// use stylekit::{scale, Theme, ThemeValue};
///
/// let theme = Theme::new().with_space([0, 4, 8, 16, 32]);
///
/// assert_eq!(scale::lookup("space.3", &theme), Some(&ThemeValue::Number(16.0)));
/// assert_eq!(scale::lookup("space.9", &theme), None);
/// assert_eq!(scale::lookup("fontSizes.0", &theme), None);
/// ```
pub fn lookup<'t>(path: &str, theme: &'t Theme) -> Option<&'t ThemeValue> {
    let mut segments = path.split('.');
    let first = segments.next().filter(|s| !s.is_empty())?;
    let mut current = theme.get(first)?;

    for segment in segments {
        current = step(current, segment)?;
    }

    Some(current)
}

/// Resolves a dotted path and returns it when it is a number.
pub fn lookup_number(path: &str, theme: &Theme) -> Option<f64> {
    lookup(path, theme).and_then(ThemeValue::as_number)
}

/// Returns the step at `index` of the top-level scale `scale`.
///
/// Equivalent to `lookup(&format!("{scale}.{index}"), theme)` without
/// building the path.
pub fn at<'t>(theme: &'t Theme, scale: &str, index: usize) -> Option<&'t ThemeValue> {
    theme.get(scale)?.as_list()?.get(index)
}

fn step<'t>(value: &'t ThemeValue, segment: &str) -> Option<&'t ThemeValue> {
    match value {
        ThemeValue::Map(map) => map.get(segment),
        ThemeValue::List(list) => segment.parse::<usize>().ok().and_then(|i| list.get(i)),
        ThemeValue::Number(_) | ThemeValue::Text(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn theme() -> Theme {
        Theme::new()
            .with_space([0, 4, 8, 16, 32])
            .with_weights([400, 700])
            .with_hue("blue", ["#eaf", "#a5d", "#5ad"])
            .with_color("white", "#fff")
            .with("maxWidth", 1024)
    }

    #[test]
    fn test_lookup_scale_index() {
        let theme = theme();
        assert_eq!(lookup_number("space.0", &theme), Some(0.0));
        assert_eq!(lookup_number("space.4", &theme), Some(32.0));
        assert_eq!(lookup_number("weights.1", &theme), Some(700.0));
    }

    #[test]
    fn test_lookup_out_of_bounds_is_none() {
        let theme = theme();
        assert_eq!(lookup("space.5", &theme), None);
        assert_eq!(lookup("weights.99", &theme), None);
    }

    #[test]
    fn test_lookup_missing_intermediate_is_none() {
        let theme = theme();
        assert_eq!(lookup("fontSizes.1", &theme), None);
        assert_eq!(lookup("colors.purple.2", &theme), None);
        assert_eq!(lookup("space.1.2", &theme), None);
    }

    #[test]
    fn test_lookup_non_numeric_index_into_list() {
        let theme = theme();
        assert_eq!(lookup("space.first", &theme), None);
        assert_eq!(lookup("space.-1", &theme), None);
    }

    #[test]
    fn test_lookup_nested_map_then_list() {
        let theme = theme();
        assert_eq!(
            lookup("colors.blue.2", &theme),
            Some(&ThemeValue::Text("#5ad".into()))
        );
        assert_eq!(
            lookup("colors.white", &theme),
            Some(&ThemeValue::Text("#fff".into()))
        );
    }

    #[test]
    fn test_lookup_top_level_scalar() {
        let theme = theme();
        assert_eq!(lookup_number("maxWidth", &theme), Some(1024.0));
    }

    #[test]
    fn test_lookup_empty_path() {
        assert_eq!(lookup("", &theme()), None);
    }

    #[test]
    fn test_at_matches_lookup() {
        let theme = theme();
        for i in 0..6 {
            assert_eq!(at(&theme, "space", i), lookup(&format!("space.{}", i), &theme));
        }
    }
}
