//! Style value types.

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::responsive::Rule;
use crate::value::format_number;

/// A concrete CSS-equivalent value.
///
/// Numbers are kept unitless; [`to_css`](super::to_css) appends `px` for
/// properties that are not in [`UNITLESS_PROPERTIES`](super::UNITLESS_PROPERTIES).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CssValue {
    /// A number, pixels unless the property is unitless.
    Number(f64),
    /// Verbatim text.
    Text(String),
}

impl CssValue {
    /// Extracts the number, if this is a `Number`.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CssValue::Number(n) => Some(*n),
            CssValue::Text(_) => None,
        }
    }

    /// Extracts the text, if this is a `Text`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            CssValue::Text(s) => Some(s),
            CssValue::Number(_) => None,
        }
    }
}

impl fmt::Display for CssValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CssValue::Number(n) => f.write_str(&format_number(*n)),
            CssValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for CssValue {
    fn from(n: f64) -> Self {
        CssValue::Number(n)
    }
}

impl From<i32> for CssValue {
    fn from(n: i32) -> Self {
        CssValue::Number(n as f64)
    }
}

impl From<&str> for CssValue {
    fn from(s: &str) -> Self {
        CssValue::Text(s.to_string())
    }
}

impl From<String> for CssValue {
    fn from(s: String) -> Self {
        CssValue::Text(s)
    }
}

/// Formats a length in pixels: `px(16.0)` is `"16px"`.
pub fn px(n: f64) -> CssValue {
    CssValue::Text(format!("{}px", format_number(n)))
}

/// One entry of a [`StyleMap`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StyleValue {
    /// Applies at every width.
    Value(CssValue),
    /// Breakpoint-guarded alternatives, in tier order.
    Responsive(Vec<Rule>),
    /// Declarations for a derived selector (`&:hover`, `& > *`).
    Nested(StyleMap),
    /// Explicitly no value. Overrides a lower layer, removed by
    /// [`StyleMap::finalize`].
    Unset,
}

impl StyleValue {
    /// Returns the plain value, if this is a `Value`.
    pub fn as_value(&self) -> Option<&CssValue> {
        match self {
            StyleValue::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the nested map, if this is `Nested`.
    pub fn as_nested(&self) -> Option<&StyleMap> {
        match self {
            StyleValue::Nested(m) => Some(m),
            _ => None,
        }
    }

    /// Returns the rules, if this is `Responsive`.
    pub fn as_rules(&self) -> Option<&[Rule]> {
        match self {
            StyleValue::Responsive(r) => Some(r),
            _ => None,
        }
    }
}

impl From<CssValue> for StyleValue {
    fn from(v: CssValue) -> Self {
        StyleValue::Value(v)
    }
}

impl From<f64> for StyleValue {
    fn from(n: f64) -> Self {
        StyleValue::Value(CssValue::Number(n))
    }
}

impl From<i32> for StyleValue {
    fn from(n: i32) -> Self {
        StyleValue::Value(CssValue::Number(n as f64))
    }
}

impl From<&str> for StyleValue {
    fn from(s: &str) -> Self {
        StyleValue::Value(CssValue::Text(s.to_string()))
    }
}

impl From<String> for StyleValue {
    fn from(s: String) -> Self {
        StyleValue::Value(CssValue::Text(s))
    }
}

impl From<StyleMap> for StyleValue {
    fn from(m: StyleMap) -> Self {
        StyleValue::Nested(m)
    }
}

impl From<Vec<Rule>> for StyleValue {
    fn from(rules: Vec<Rule>) -> Self {
        StyleValue::Responsive(rules)
    }
}

impl<T: Into<StyleValue>> From<Option<T>> for StyleValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(StyleValue::Unset)
    }
}

/// An ordered map of style declarations.
///
/// # Example
///
/// ```rust
/// use stylekit::style::{px, StyleMap};
///
/// let style = StyleMap::new()
///     .with("display", "inline-block")
///     .with("borderRadius", px(4.0))
///     .with("backgroundColor", None::<&str>)
///     .with("&:hover", StyleMap::new().with("opacity", 0.5));
///
/// let style = style.finalize();
/// assert!(style.get("backgroundColor").is_none());
/// assert_eq!(style.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct StyleMap(BTreeMap<String, StyleValue>);

impl StyleMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a property, returning `self` for chaining.
    pub fn with(mut self, property: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.0.insert(property.into(), value.into());
        self
    }

    /// Sets a property only when `value` is `Some`.
    ///
    /// Unlike `with(key, None)`, which records an explicit `Unset`, this
    /// leaves the map untouched so lower layers keep their value.
    pub fn with_some<V: Into<StyleValue>>(self, property: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.with(property, value),
            None => self,
        }
    }

    /// Sets a property, returning the previous value.
    pub fn insert(&mut self, property: impl Into<String>, value: impl Into<StyleValue>) -> Option<StyleValue> {
        self.0.insert(property.into(), value.into())
    }

    /// Returns the entry for `property`.
    pub fn get(&self, property: &str) -> Option<&StyleValue> {
        self.0.get(property)
    }

    /// Returns the plain value for `property`.
    pub fn value(&self, property: &str) -> Option<&CssValue> {
        self.get(property).and_then(StyleValue::as_value)
    }

    /// Returns the nested map for `selector`.
    pub fn nested(&self, selector: &str) -> Option<&StyleMap> {
        self.get(selector).and_then(StyleValue::as_nested)
    }

    /// Removes `property`.
    pub fn remove(&mut self, property: &str) -> Option<StyleValue> {
        self.0.remove(property)
    }

    /// Returns `true` if `property` has an entry (including `Unset`).
    pub fn contains_key(&self, property: &str) -> bool {
        self.0.contains_key(property)
    }

    /// Shallow merge: every entry of `other` replaces the entry of the same
    /// name. Nested maps are replaced whole, not merged.
    pub fn merge(&mut self, other: StyleMap) {
        self.0.extend(other.0);
    }

    /// Drops `Unset` entries, recursively.
    pub fn finalize(self) -> StyleMap {
        StyleMap(
            self.0
                .into_iter()
                .filter_map(|(k, v)| match v {
                    StyleValue::Unset => None,
                    StyleValue::Nested(inner) => Some((k, StyleValue::Nested(inner.finalize()))),
                    other => Some((k, other)),
                })
                .collect(),
        )
    }

    /// Iterates entries in property order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, StyleValue> {
        self.0.iter()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<StyleValue>> FromIterator<(K, V)> for StyleMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        StyleMap(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<'a> IntoIterator for &'a StyleMap {
    type Item = (&'a String, &'a StyleValue);
    type IntoIter = btree_map::Iter<'a, String, StyleValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_px() {
        assert_eq!(px(16.0), CssValue::Text("16px".into()));
        assert_eq!(px(0.5), CssValue::Text("0.5px".into()));
    }

    #[test]
    fn test_merge_is_shallow() {
        let mut parent = StyleMap::new()
            .with("display", "inline-block")
            .with("&:hover", StyleMap::new().with("color", "red").with("opacity", 1));
        let child = StyleMap::new()
            .with("boxShadow", "inset 0 0 0 2px")
            .with("&:hover", StyleMap::new().with("color", "blue"));

        parent.merge(child);

        assert_eq!(parent.value("display"), Some(&CssValue::Text("inline-block".into())));
        let hover = parent.nested("&:hover").unwrap();
        assert_eq!(hover.len(), 1);
        assert_eq!(hover.value("color"), Some(&CssValue::Text("blue".into())));
    }

    #[test]
    fn test_unset_overrides_then_finalizes_away() {
        let mut parent = StyleMap::new().with("top", 0).with("left", 0);
        parent.merge(StyleMap::new().with("top", None::<i32>));

        assert_eq!(parent.get("top"), Some(&StyleValue::Unset));
        let done = parent.finalize();
        assert!(done.get("top").is_none());
        assert_eq!(done.value("left"), Some(&CssValue::Number(0.0)));
    }

    #[test]
    fn test_with_some_skips_none() {
        let style = StyleMap::new()
            .with_some("zIndex", Some(2))
            .with_some("top", None::<i32>);
        assert_eq!(style.len(), 1);
        assert!(!style.contains_key("top"));
    }

    #[test]
    fn test_finalize_recurses() {
        let style = StyleMap::new()
            .with("&:hover", StyleMap::new().with("color", None::<&str>).with("opacity", 0.5))
            .finalize();
        assert_eq!(style.nested("&:hover").map(StyleMap::len), Some(1));
    }

    #[test]
    fn test_serialize_json() {
        let style = StyleMap::new()
            .with("padding", 16)
            .with("color", "#fff")
            .with("margin", vec![Rule::new(None, 8.0), Rule::new(Some(0), 16.0)]);
        let json = serde_json::to_value(&style).unwrap();
        assert_eq!(json["padding"], serde_json::json!(16.0));
        assert_eq!(json["color"], serde_json::json!("#fff"));
        assert_eq!(json["margin"][1]["breakpoint"], serde_json::json!(0));
    }
}
