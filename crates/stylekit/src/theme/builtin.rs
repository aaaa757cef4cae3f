//! The built-in design scale.

use once_cell::sync::Lazy;

use super::Theme;

pub(super) static BUILTIN: Lazy<Theme> = Lazy::new(|| {
    Theme::named("default")
        .with_space([0, 8, 16, 32, 64])
        .with_font_sizes([12, 14, 16, 20, 24, 32, 48, 64, 72])
        .with_weights([400, 700])
        .with_radius(4)
        .with_breakpoints([40, 52, 64])
        .with_monospace(r#""SF Mono", "Roboto Mono", Menlo, monospace"#)
        .with_color("black", "#000")
        .with_color("white", "#fff")
        .with_color("transparent", "transparent")
        .with_hue(
            "gray",
            [
                "#f8f9f9", "#ebeeee", "#dde2e2", "#ced4d4", "#bdc6c6", "#aab5b5", "#95a3a3",
                "#7b8d8d", "#5d6c6c", "#374040",
            ],
        )
        .with_hue(
            "blue",
            [
                "#e5f2fb", "#c9e4f8", "#aad5f4", "#88c4ef", "#5fb0ea", "#0097e3", "#0088cc",
                "#0076b2", "#00608f", "#003856",
            ],
        )
        .with_hue(
            "indigo",
            [
                "#eceefc", "#d7dbf8", "#c1c7f5", "#a8b0f1", "#8b95ec", "#6874e6", "#4f5de3",
                "#3443df", "#2b38bb", "#1a2271",
            ],
        )
        .with_hue(
            "red",
            [
                "#fcebec", "#f8d5d7", "#f4bdc0", "#efa2a6", "#ea8187", "#e4545d", "#dd1b27",
                "#c50612", "#9e050f", "#5c0309",
            ],
        )
        .with_hue(
            "orange",
            [
                "#faede4", "#f5dac6", "#f0c5a5", "#eaad7f", "#e39150", "#da6c0d", "#c45f03",
                "#ab5302", "#8a4302", "#522701",
            ],
        )
        .with_hue(
            "yellow",
            [
                "#f9f9da", "#f2f2b1", "#ecec84", "#e4e44f", "#dada0c", "#c2c204", "#b0b003",
                "#9a9a03", "#7c7c02", "#494901",
            ],
        )
        .with_hue(
            "green",
            [
                "#e5f6e9", "#c9edd2", "#a9e2b8", "#84d69a", "#53c673", "#0ab23b", "#07a133",
                "#068c2c", "#057124", "#034215",
            ],
        )
        .with_hue(
            "teal",
            [
                "#e3f5f3", "#c6ebe7", "#a4e0d9", "#7dd3c9", "#4cc3b6", "#06ae9c", "#059e8d",
                "#048a7b", "#036f63", "#02413a",
            ],
        )
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeValue;

    #[test]
    fn test_builtin_has_every_recognized_scale() {
        let theme = &*BUILTIN;
        for key in [
            "space",
            "fontSizes",
            "weights",
            "colors",
            "radius",
            "breakpoints",
            "monospace",
        ] {
            assert!(theme.get(key).is_some(), "missing {}", key);
        }
    }

    #[test]
    fn test_builtin_hues_have_ten_shades() {
        let colors = BUILTIN.colors().unwrap();
        for (name, entry) in colors {
            if let ThemeValue::List(shades) = entry {
                assert_eq!(shades.len(), 10, "{} should have 10 shades", name);
            }
        }
    }
}
