//! Theme struct and value tree.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::LoadError;

/// Key of the spacing scale.
pub const SPACE: &str = "space";
/// Key of the font size scale.
pub const FONT_SIZES: &str = "fontSizes";
/// Key of the font weight scale.
pub const WEIGHTS: &str = "weights";
/// Key of the color palette.
pub const COLORS: &str = "colors";
/// Key of the corner radius.
pub const RADIUS: &str = "radius";
/// Key of the breakpoint thresholds.
pub const BREAKPOINTS: &str = "breakpoints";
/// Key of the monospace font stack.
pub const MONOSPACE: &str = "monospace";

/// A node in the theme tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ThemeValue {
    /// A numeric step (pixels, weight, em threshold).
    Number(f64),
    /// A textual value (a color, a font stack).
    Text(String),
    /// An ordered scale, addressed by index.
    List(Vec<ThemeValue>),
    /// A keyed group, addressed by name.
    Map(BTreeMap<String, ThemeValue>),
}

impl ThemeValue {
    /// Extracts the number, if this is a `Number`.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            ThemeValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Extracts the text, if this is a `Text`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ThemeValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Extracts the list, if this is a `List`.
    pub fn as_list(&self) -> Option<&[ThemeValue]> {
        match self {
            ThemeValue::List(v) => Some(v),
            _ => None,
        }
    }

    /// Extracts the map, if this is a `Map`.
    pub fn as_map(&self) -> Option<&BTreeMap<String, ThemeValue>> {
        match self {
            ThemeValue::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Returns `true` for numbers and text.
    pub fn is_scalar(&self) -> bool {
        matches!(self, ThemeValue::Number(_) | ThemeValue::Text(_))
    }
}

impl From<f64> for ThemeValue {
    fn from(n: f64) -> Self {
        ThemeValue::Number(n)
    }
}

impl From<i32> for ThemeValue {
    fn from(n: i32) -> Self {
        ThemeValue::Number(n as f64)
    }
}

impl From<&str> for ThemeValue {
    fn from(s: &str) -> Self {
        ThemeValue::Text(s.to_string())
    }
}

impl From<String> for ThemeValue {
    fn from(s: String) -> Self {
        ThemeValue::Text(s)
    }
}

impl<T: Into<ThemeValue>> From<Vec<T>> for ThemeValue {
    fn from(values: Vec<T>) -> Self {
        ThemeValue::List(values.into_iter().map(Into::into).collect())
    }
}

/// A named design scale.
///
/// Themes are immutable once built and cheap to share behind an `Arc`.
///
/// # Example
///
/// ```rust
/// use stylekit::{scale, Theme};
///
/// let theme = Theme::new().with_space([0, 4, 8, 16, 32]).with_radius(4);
///
/// assert_eq!(scale::lookup_number("space.3", &theme), Some(16.0));
/// assert_eq!(theme.radius(), Some(4.0));
/// assert!(theme.breakpoints().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Theme {
    #[serde(skip)]
    name: Option<String>,
    #[serde(flatten)]
    scales: BTreeMap<String, ThemeValue>,
}

impl Theme {
    /// Creates an empty, unnamed theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty theme with the given name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            scales: BTreeMap::new(),
        }
    }

    /// Sets the name on this theme, returning `self` for chaining.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Returns the theme name, if set.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the built-in design scale.
    pub fn builtin() -> &'static Theme {
        &super::builtin::BUILTIN
    }

    /// Creates a theme from YAML content.
    ///
    /// The top level must be a mapping. Recognized keys are checked for the
    /// right shape (`space` must be a list, `radius` a number, ...); unknown
    /// keys are kept verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Parse`] for malformed YAML and
    /// [`LoadError::InvalidDefinition`] for a recognized key of the wrong shape.
    pub fn from_yaml(yaml: &str) -> Result<Self, LoadError> {
        Self::parse(yaml, None)
    }

    /// Loads a theme from a YAML file. The theme is named after the file stem.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Io`] if the file cannot be read, otherwise the
    /// same errors as [`from_yaml`](Theme::from_yaml).
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut theme = Self::parse(&content, Some(path.to_path_buf()))?;
        theme.name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .map(|s| s.to_string());
        Ok(theme)
    }

    fn parse(yaml: &str, path: Option<PathBuf>) -> Result<Self, LoadError> {
        let scales: BTreeMap<String, ThemeValue> =
            serde_yaml::from_str(yaml).map_err(|e| LoadError::Parse {
                path,
                message: e.to_string(),
            })?;

        for (key, value) in &scales {
            check_shape(key, value)?;
        }

        Ok(Self { name: None, scales })
    }

    /// Sets any top-level entry.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ThemeValue>) -> Self {
        self.scales.insert(key.into(), value.into());
        self
    }

    /// Sets the spacing scale.
    pub fn with_space<I, N>(self, steps: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<f64>,
    {
        self.with(SPACE, number_list(steps))
    }

    /// Sets the font size scale.
    pub fn with_font_sizes<I, N>(self, steps: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<f64>,
    {
        self.with(FONT_SIZES, number_list(steps))
    }

    /// Sets the font weight scale.
    pub fn with_weights<I, N>(self, steps: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<f64>,
    {
        self.with(WEIGHTS, number_list(steps))
    }

    /// Sets the breakpoint thresholds, in `em`.
    pub fn with_breakpoints<I, N>(self, thresholds: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<f64>,
    {
        self.with(BREAKPOINTS, number_list(thresholds))
    }

    /// Sets the corner radius.
    pub fn with_radius(self, radius: impl Into<f64>) -> Self {
        self.with(RADIUS, ThemeValue::Number(radius.into()))
    }

    /// Sets the monospace font stack.
    pub fn with_monospace(self, stack: impl Into<String>) -> Self {
        self.with(MONOSPACE, ThemeValue::Text(stack.into()))
    }

    /// Adds a flat palette entry such as `white` or `transparent`.
    pub fn with_color(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.palette_entry(name.into(), ThemeValue::Text(value.into()))
    }

    /// Adds a hue family: an ordered list of shades, lightest first.
    pub fn with_hue<I, S>(self, name: impl Into<String>, shades: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let shades = shades
            .into_iter()
            .map(|s| ThemeValue::Text(s.into()))
            .collect();
        self.palette_entry(name.into(), ThemeValue::List(shades))
    }

    fn palette_entry(mut self, name: String, value: ThemeValue) -> Self {
        let colors = self
            .scales
            .entry(COLORS.to_string())
            .or_insert_with(|| ThemeValue::Map(BTreeMap::new()));
        if !matches!(colors, ThemeValue::Map(_)) {
            *colors = ThemeValue::Map(BTreeMap::new());
        }
        if let ThemeValue::Map(map) = colors {
            map.insert(name, value);
        }
        self
    }

    /// Returns a top-level entry.
    pub fn get(&self, key: &str) -> Option<&ThemeValue> {
        self.scales.get(key)
    }

    /// Returns the color palette, if one is defined.
    pub fn colors(&self) -> Option<&BTreeMap<String, ThemeValue>> {
        self.get(COLORS).and_then(ThemeValue::as_map)
    }

    /// Returns the corner radius.
    pub fn radius(&self) -> Option<f64> {
        self.get(RADIUS).and_then(ThemeValue::as_number)
    }

    /// Returns the breakpoint thresholds; empty when none are declared.
    ///
    /// Non-numeric entries are skipped.
    pub fn breakpoints(&self) -> Vec<f64> {
        self.get(BREAKPOINTS)
            .and_then(ThemeValue::as_list)
            .map(|list| list.iter().filter_map(ThemeValue::as_number).collect())
            .unwrap_or_default()
    }

    /// Returns the monospace font stack.
    pub fn monospace(&self) -> Option<&str> {
        self.get(MONOSPACE).and_then(ThemeValue::as_str)
    }

    /// Iterates top-level entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ThemeValue)> {
        self.scales.iter().map(|(k, v)| (k.as_str(), v))
    }
}

fn number_list<I, N>(values: I) -> ThemeValue
where
    I: IntoIterator<Item = N>,
    N: Into<f64>,
{
    ThemeValue::List(
        values
            .into_iter()
            .map(|n| ThemeValue::Number(n.into()))
            .collect(),
    )
}

fn check_shape(key: &str, value: &ThemeValue) -> Result<(), LoadError> {
    let (ok, shape) = match key {
        SPACE | FONT_SIZES | WEIGHTS | BREAKPOINTS => (matches!(value, ThemeValue::List(_)), "a list"),
        COLORS => (matches!(value, ThemeValue::Map(_)), "a mapping"),
        RADIUS => (matches!(value, ThemeValue::Number(_)), "a number"),
        MONOSPACE => (matches!(value, ThemeValue::Text(_)), "a string"),
        _ => return Ok(()),
    };

    if ok {
        Ok(())
    } else {
        Err(LoadError::InvalidDefinition {
            name: key.to_string(),
            message: format!("expected {}", shape),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builder_sets_scales() {
        let theme = Theme::new()
            .with_space([0, 4, 8])
            .with_weights([400, 700])
            .with_radius(4)
            .with_monospace("Menlo, monospace")
            .with_breakpoints([40, 52]);

        assert_eq!(theme.get(SPACE).and_then(ThemeValue::as_list).map(|l| l.len()), Some(3));
        assert_eq!(theme.radius(), Some(4.0));
        assert_eq!(theme.monospace(), Some("Menlo, monospace"));
        assert_eq!(theme.breakpoints(), vec![40.0, 52.0]);
    }

    #[test]
    fn test_palette_accumulates() {
        let theme = Theme::new()
            .with_color("white", "#fff")
            .with_hue("blue", ["#eaf", "#a5d"]);

        let colors = theme.colors().unwrap();
        assert_eq!(colors.get("white"), Some(&ThemeValue::Text("#fff".into())));
        assert_eq!(colors.get("blue").and_then(ThemeValue::as_list).map(|l| l.len()), Some(2));
    }

    #[test]
    fn test_missing_scales_are_empty() {
        let theme = Theme::new();
        assert!(theme.breakpoints().is_empty());
        assert!(theme.colors().is_none());
        assert!(theme.radius().is_none());
        assert!(theme.monospace().is_none());
    }

    #[test]
    fn test_from_yaml() {
        let theme = Theme::from_yaml(
            r##"
space: [0, 8, 16]
radius: 2
maxWidth: 960
colors:
  black: "#111"
  blue: ["#eaf", "#a5d", "#5ad"]
"##,
        )
        .unwrap();

        assert_eq!(theme.radius(), Some(2.0));
        assert_eq!(theme.get("maxWidth"), Some(&ThemeValue::Number(960.0)));
        assert_eq!(theme.colors().map(|c| c.len()), Some(2));
    }

    #[test]
    fn test_from_yaml_rejects_wrong_shape() {
        let err = Theme::from_yaml("space: 8").unwrap_err();
        match err {
            LoadError::InvalidDefinition { name, message } => {
                assert_eq!(name, "space");
                assert!(message.contains("list"));
            }
            other => panic!("Expected InvalidDefinition, got {:?}", other),
        }
    }

    #[test]
    fn test_from_yaml_parse_error() {
        let err = Theme::from_yaml("space: [0, 8").unwrap_err();
        assert!(matches!(err, LoadError::Parse { path: None, .. }));
    }

    #[test]
    fn test_from_file_uses_stem_as_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("compact.yaml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "space: [0, 2, 4, 8]").unwrap();

        let theme = Theme::from_file(&path).unwrap();
        assert_eq!(theme.name(), Some("compact"));
        assert!(theme.get(SPACE).is_some());
    }

    #[test]
    fn test_from_file_missing() {
        let err = Theme::from_file("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
