//! Attribute value types.
//!
//! Callers describe a component with a bag of [`Attributes`]. Each value is
//! either a single [`Scalar`] or a responsive sequence of scalars, one per
//! breakpoint tier. The two shapes are distinct variants of [`AttrValue`] so
//! nothing has to guess at runtime which one it was given.

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A single attribute value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// Boolean flag (`bold`, `active`, ...).
    Bool(bool),
    /// Numeric value, usually a scale index.
    Number(f64),
    /// Text value: a color name, a keyword such as `auto`, an element name.
    Text(String),
}

impl Scalar {
    /// Extracts the number, if this is a `Number`.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Scalar::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Extracts the text, if this is a `Text`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Extracts the flag, if this is a `Bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Scalar::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Truthiness: `false`, `0`, `NaN` and the empty string are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Scalar::Bool(b) => *b,
            Scalar::Number(n) => *n != 0.0 && !n.is_nan(),
            Scalar::Text(s) => !s.is_empty(),
        }
    }

    /// Returns a short name for the variant, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Scalar::Bool(_) => "bool",
            Scalar::Number(_) => "number",
            Scalar::Text(_) => "string",
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Number(n) => f.write_str(&format_number(*n)),
            Scalar::Text(s) => f.write_str(s),
        }
    }
}

/// Formats a number the way it appears in CSS: integers without a fraction.
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

macro_rules! scalar_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Scalar {
                fn from(n: $ty) -> Self {
                    Scalar::Number(n as f64)
                }
            }

            impl From<$ty> for AttrValue {
                fn from(n: $ty) -> Self {
                    AttrValue::Scalar(Scalar::Number(n as f64))
                }
            }
        )*
    };
}

scalar_from_number!(i32, i64, u32, u64, usize, f32, f64);

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Scalar::Bool(b)
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Text(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::Text(s)
    }
}

/// An attribute value: one scalar, or one scalar per breakpoint tier.
///
/// # Example
///
/// ```rust
/// use stylekit::AttrValue;
///
/// let fixed: AttrValue = 3.into();
/// let responsive: AttrValue = vec![3, 4].into();
///
/// assert!(!fixed.is_responsive());
/// assert!(responsive.is_responsive());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    /// Applies at every width.
    Scalar(Scalar),
    /// Tier 0 applies at every width, tier `i` from breakpoint `i - 1` up.
    Responsive(Vec<Scalar>),
}

impl AttrValue {
    /// Returns the scalar when this is not a responsive value.
    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            AttrValue::Scalar(s) => Some(s),
            AttrValue::Responsive(_) => None,
        }
    }

    /// Returns `true` for the sequence form.
    pub fn is_responsive(&self) -> bool {
        matches!(self, AttrValue::Responsive(_))
    }

    /// Truthiness of the scalar form. Responsive values count as truthy when
    /// non-empty.
    pub fn is_truthy(&self) -> bool {
        match self {
            AttrValue::Scalar(s) => s.is_truthy(),
            AttrValue::Responsive(v) => !v.is_empty(),
        }
    }
}

impl From<Scalar> for AttrValue {
    fn from(s: Scalar) -> Self {
        AttrValue::Scalar(s)
    }
}

impl From<bool> for AttrValue {
    fn from(b: bool) -> Self {
        AttrValue::Scalar(Scalar::Bool(b))
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::Scalar(Scalar::Text(s.to_string()))
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        AttrValue::Scalar(Scalar::Text(s))
    }
}

impl<T: Into<Scalar>> From<Vec<T>> for AttrValue {
    fn from(values: Vec<T>) -> Self {
        AttrValue::Responsive(values.into_iter().map(Into::into).collect())
    }
}

/// An ordered attribute bag.
///
/// Keys are kept sorted so that anything derived from an attribute set is
/// deterministic.
///
/// # Example
///
/// ```rust
/// use stylekit::Attributes;
///
/// let attrs = Attributes::new()
///     .with("px", 3)
///     .with("color", "blue")
///     .with("active", true);
///
/// assert_eq!(attrs.number("px"), Some(3.0));
/// assert_eq!(attrs.text("color"), Some("blue"));
/// assert!(attrs.flag("active"));
/// assert!(!attrs.flag("disabled"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes(BTreeMap<String, AttrValue>);

impl Attributes {
    /// Creates an empty attribute set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an attribute, returning `self` for chaining.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Inserts an attribute, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Option<AttrValue> {
        self.0.insert(key.into(), value.into())
    }

    /// Removes an attribute.
    pub fn remove(&mut self, key: &str) -> Option<AttrValue> {
        self.0.remove(key)
    }

    /// Returns the raw value for `key`.
    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.0.get(key)
    }

    /// Returns the value for `key` when it is a scalar.
    pub fn scalar(&self, key: &str) -> Option<&Scalar> {
        self.get(key).and_then(AttrValue::as_scalar)
    }

    /// Returns the numeric value of `key`.
    pub fn number(&self, key: &str) -> Option<f64> {
        self.scalar(key).and_then(Scalar::as_number)
    }

    /// Returns the text value of `key`.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.scalar(key).and_then(Scalar::as_str)
    }

    /// Returns `true` when `key` is present and truthy.
    pub fn flag(&self, key: &str) -> bool {
        self.get(key).is_some_and(AttrValue::is_truthy)
    }

    /// Returns `true` if `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Copies every entry of `other` over this set; `other` wins on conflicts.
    pub fn merge(&mut self, other: &Attributes) {
        for (key, value) in &other.0 {
            self.0.insert(key.clone(), value.clone());
        }
    }

    /// Returns a copy without the entries for which `keep` returns `false`.
    pub fn filtered(&self, mut keep: impl FnMut(&str) -> bool) -> Attributes {
        Attributes(
            self.0
                .iter()
                .filter(|(k, _)| keep(k))
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        )
    }

    /// Iterates entries in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, AttrValue> {
        self.0.iter()
    }

    /// Iterates keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no attributes are set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<AttrValue>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Attributes(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<'a> IntoIterator for &'a Attributes {
    type Item = (&'a String, &'a AttrValue);
    type IntoIter = btree_map::Iter<'a, String, AttrValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truthiness() {
        assert!(Scalar::Bool(true).is_truthy());
        assert!(!Scalar::Bool(false).is_truthy());
        assert!(!Scalar::Number(0.0).is_truthy());
        assert!(Scalar::Number(-1.0).is_truthy());
        assert!(!Scalar::Text(String::new()).is_truthy());
        assert!(Scalar::Text("h2".into()).is_truthy());
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(16.0), "16");
        assert_eq!(format_number(-8.0), "-8");
        assert_eq!(format_number(0.25), "0.25");
        assert_eq!(format_number(1.25), "1.25");
    }

    #[test]
    fn test_merge_other_wins() {
        let mut base = Attributes::new().with("f", 5).with("m", 0);
        base.merge(&Attributes::new().with("f", 4).with("is", "h3"));

        assert_eq!(base.number("f"), Some(4.0));
        assert_eq!(base.number("m"), Some(0.0));
        assert_eq!(base.text("is"), Some("h3"));
        assert_eq!(base.len(), 3);
    }

    #[test]
    fn test_responsive_from_vec() {
        let value: AttrValue = vec![3, 4].into();
        assert_eq!(
            value,
            AttrValue::Responsive(vec![Scalar::Number(3.0), Scalar::Number(4.0)])
        );
        assert!(value.as_scalar().is_none());
    }

    #[test]
    fn test_deserialize_untagged() {
        let attrs: Attributes = serde_yaml::from_str("p: [3, 4]\ncolor: blue\nbold: true\nf: 2").unwrap();
        assert!(attrs.get("p").unwrap().is_responsive());
        assert_eq!(attrs.text("color"), Some("blue"));
        assert!(attrs.flag("bold"));
        assert_eq!(attrs.number("f"), Some(2.0));
    }

    #[test]
    fn test_filtered() {
        let attrs = Attributes::new().with("p", 2).with("href", "#top");
        let markup = attrs.filtered(|k| k != "p");
        assert_eq!(markup.len(), 1);
        assert!(markup.contains_key("href"));
    }
}
