//! Responsive value expansion.
//!
//! An attribute given as a sequence holds one value per breakpoint tier,
//! mobile first: tier 0 applies at every width, tier `i` applies from
//! breakpoint `i - 1` upward. [`expand`] turns an [`AttrValue`] into its tiers;
//! [`Rule`] is the resolved form stored in a style, and [`Rule::condition`]
//! decides, against a concrete breakpoint list, when a rule applies.
//!
//! Tiers past the end of the breakpoint list have no threshold. They are kept
//! and treated as unconditional overrides emitted after every guarded rule,
//! so the longest array wins.

use serde::Serialize;

use crate::style::CssValue;
use crate::value::{AttrValue, Scalar};

/// One tier of an expanded attribute value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tier<'a> {
    /// Breakpoint guarding this tier; `None` means every width.
    pub breakpoint: Option<usize>,
    /// The tier's value.
    pub value: &'a Scalar,
}

/// Expands an attribute value into breakpoint tiers.
///
/// # Example
///
/// ```rust
/// use stylekit::responsive::expand;
/// use stylekit::AttrValue;
///
/// let scalar: AttrValue = 2.into();
/// let tiers = expand(&scalar);
/// assert_eq!(tiers.len(), 1);
/// assert_eq!(tiers[0].breakpoint, None);
///
/// let responsive: AttrValue = vec![1, 2, 3].into();
/// let tiers = expand(&responsive);
/// let guards: Vec<_> = tiers.iter().map(|t| t.breakpoint).collect();
/// assert_eq!(guards, vec![None, Some(0), Some(1)]);
/// ```
pub fn expand(value: &AttrValue) -> Vec<Tier<'_>> {
    match value {
        AttrValue::Scalar(scalar) => vec![Tier {
            breakpoint: None,
            value: scalar,
        }],
        AttrValue::Responsive(values) => values
            .iter()
            .enumerate()
            .map(|(i, value)| Tier {
                breakpoint: i.checked_sub(1),
                value,
            })
            .collect(),
    }
}

/// A breakpoint-guarded value inside a resolved style.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rule {
    /// Breakpoint index guarding the rule; `None` for the base rule.
    pub breakpoint: Option<usize>,
    /// The value in effect when the rule applies.
    pub value: CssValue,
}

/// When a [`Rule`] applies, given a concrete breakpoint list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Condition {
    /// Base rule, every width.
    Always,
    /// From this width upward (in the breakpoint unit, `em`).
    MinWidth(f64),
    /// Past the declared breakpoints: unconditional, applied after every
    /// guarded rule.
    Overflow,
}

impl Rule {
    /// Creates a rule.
    pub fn new(breakpoint: Option<usize>, value: impl Into<CssValue>) -> Self {
        Self {
            breakpoint,
            value: value.into(),
        }
    }

    /// Decides when this rule applies.
    pub fn condition(&self, breakpoints: &[f64]) -> Condition {
        match self.breakpoint {
            None => Condition::Always,
            Some(i) => match breakpoints.get(i) {
                Some(width) => Condition::MinWidth(*width),
                None => Condition::Overflow,
            },
        }
    }
}

/// Returns the value in effect at `width` for a list of rules.
///
/// Later rules override earlier ones; overflow rules override everything.
///
/// ```rust
/// use stylekit::responsive::{value_at, Rule};
///
/// let rules = vec![Rule::new(None, 16.0), Rule::new(Some(0), 32.0)];
/// let breakpoints = [40.0, 52.0];
///
/// assert_eq!(value_at(&rules, &breakpoints, 20.0), Some(&16.0.into()));
/// assert_eq!(value_at(&rules, &breakpoints, 45.0), Some(&32.0.into()));
/// ```
pub fn value_at<'r>(rules: &'r [Rule], breakpoints: &[f64], width: f64) -> Option<&'r CssValue> {
    let mut current = None;
    for rule in rules {
        match rule.condition(breakpoints) {
            Condition::Always => current = Some(&rule.value),
            Condition::MinWidth(min) if width >= min => current = Some(&rule.value),
            Condition::MinWidth(_) | Condition::Overflow => {}
        }
    }
    rules
        .iter()
        .rev()
        .find(|rule| rule.condition(breakpoints) == Condition::Overflow)
        .map(|rule| &rule.value)
        .or(current)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_expands_to_one_unconditional_tier() {
        let value: AttrValue = "auto".into();
        let tiers = expand(&value);
        assert_eq!(tiers.len(), 1);
        assert_eq!(tiers[0].breakpoint, None);
        assert_eq!(tiers[0].value, &Scalar::Text("auto".into()));
    }

    #[test]
    fn test_sequence_expands_to_n_tiers() {
        let value: AttrValue = vec![3, 4, 5, 6, 7].into();
        let tiers = expand(&value);
        assert_eq!(tiers.len(), 5);
        assert_eq!(tiers[0].breakpoint, None);
        assert_eq!(tiers[4].breakpoint, Some(3));
        assert_eq!(tiers[4].value, &Scalar::Number(7.0));
    }

    #[test]
    fn test_empty_sequence() {
        let value = AttrValue::Responsive(vec![]);
        assert!(expand(&value).is_empty());
    }

    #[test]
    fn test_condition_against_breakpoints() {
        let breakpoints = [40.0, 52.0];
        assert_eq!(Rule::new(None, 1.0).condition(&breakpoints), Condition::Always);
        assert_eq!(
            Rule::new(Some(1), 1.0).condition(&breakpoints),
            Condition::MinWidth(52.0)
        );
        assert_eq!(Rule::new(Some(2), 1.0).condition(&breakpoints), Condition::Overflow);
        assert_eq!(Rule::new(Some(0), 1.0).condition(&[]), Condition::Overflow);
    }

    #[test]
    fn test_value_at_widths() {
        let rules = vec![
            Rule::new(None, 8.0),
            Rule::new(Some(0), 16.0),
            Rule::new(Some(1), 32.0),
        ];
        let breakpoints = [40.0, 52.0, 64.0];
        assert_eq!(value_at(&rules, &breakpoints, 10.0), Some(&CssValue::Number(8.0)));
        assert_eq!(value_at(&rules, &breakpoints, 40.0), Some(&CssValue::Number(16.0)));
        assert_eq!(value_at(&rules, &breakpoints, 80.0), Some(&CssValue::Number(32.0)));
    }

    #[test]
    fn test_overflow_wins_everywhere() {
        let rules = vec![
            Rule::new(None, 8.0),
            Rule::new(Some(0), 16.0),
            Rule::new(Some(1), 32.0),
        ];
        let breakpoints = [40.0];
        assert_eq!(value_at(&rules, &breakpoints, 0.0), Some(&CssValue::Number(32.0)));
        assert_eq!(value_at(&rules, &breakpoints, 50.0), Some(&CssValue::Number(32.0)));
    }
}
