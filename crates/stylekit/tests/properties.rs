//! Property-based tests using proptest.

use proptest::prelude::*;
use stylekit::color::resolve_color;
use stylekit::compose::compose;
use stylekit::descriptor::{Descriptor, RenderTarget};
use stylekit::registry::Registry;
use stylekit::responsive::expand;
use stylekit::{catalog, scale, AttrValue, Attributes, ConfigError, Scalar, Theme, ThemeValue};

// ============================================================================
// Strategies
// ============================================================================

fn scalar_strategy() -> impl Strategy<Value = Scalar> {
    prop_oneof![
        any::<bool>().prop_map(Scalar::Bool),
        (-1000i32..1000).prop_map(|n| Scalar::Number(n as f64)),
        "[a-z]{0,8}".prop_map(Scalar::Text),
    ]
}

fn scale_strategy() -> impl Strategy<Value = Vec<u16>> {
    prop::collection::vec(any::<u16>(), 0..12)
}

/// Caller attributes mixing short-hand keys and plain attributes.
fn attributes_strategy() -> impl Strategy<Value = Attributes> {
    let key = prop::sample::select(vec![
        "m", "mx", "pt", "p", "f", "w", "color", "bg", "active", "href", "bold",
    ]);
    let value = prop_oneof![
        scalar_strategy().prop_map(AttrValue::Scalar),
        prop::collection::vec(scalar_strategy(), 1..5).prop_map(AttrValue::Responsive),
    ];
    prop::collection::vec((key, value), 0..8)
        .prop_map(|pairs| pairs.into_iter().collect::<Attributes>())
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Every in-range index of a scale resolves to exactly that step.
    #[test]
    fn lookup_in_bounds_matches_scale(steps in scale_strategy()) {
        let theme = Theme::new().with_space(steps.iter().copied());
        for (i, step) in steps.iter().enumerate() {
            prop_assert_eq!(
                scale::lookup(&format!("space.{}", i), &theme),
                Some(&ThemeValue::Number(*step as f64))
            );
        }
    }

    /// Out-of-range indices resolve to nothing.
    #[test]
    fn lookup_out_of_bounds_is_none(steps in scale_strategy(), extra in 0usize..100) {
        let theme = Theme::new().with_space(steps.iter().copied());
        let index = steps.len() + extra;
        prop_assert_eq!(scale::lookup(&format!("space.{}", index), &theme), None);
        prop_assert_eq!(scale::at(&theme, "space", index), None);
    }

    /// Names absent from the palette come back unchanged, whatever the shade.
    #[test]
    fn unknown_color_passes_through(name in "[a-z]{1,10}", shade in prop::option::of(0usize..20)) {
        let theme = Theme::new().with_hue("blue", ["#eaf", "#a5d", "#5ad"]);
        prop_assume!(!name.starts_with("blue"));
        prop_assert_eq!(resolve_color(&theme).get(&name, shade), name);
    }

    /// A scalar expands to one unconditional tier carrying the same value.
    #[test]
    fn scalar_expands_to_one_tier(value in scalar_strategy()) {
        let attr = AttrValue::Scalar(value.clone());
        let tiers = expand(&attr);
        prop_assert_eq!(tiers.len(), 1);
        prop_assert_eq!(tiers[0].breakpoint, None);
        prop_assert_eq!(tiers[0].value, &value);
    }

    /// A sequence of length N expands to N tiers; only the first is
    /// unconditional.
    #[test]
    fn sequence_expands_to_n_tiers(values in prop::collection::vec(scalar_strategy(), 0..8)) {
        let attr = AttrValue::Responsive(values.clone());
        let tiers = expand(&attr);
        prop_assert_eq!(tiers.len(), values.len());
        for (i, tier) in tiers.iter().enumerate() {
            prop_assert_eq!(tier.breakpoint, i.checked_sub(1));
        }
    }

    /// Composition is a pure function of its inputs.
    #[test]
    fn compose_is_idempotent(caller in attributes_strategy(), name in prop::sample::select(vec![
        "Button", "Subhead", "Card", "Tooltip", "Drawer", "Star", "Banner",
    ])) {
        let registry = catalog::registry().unwrap();
        let effective = registry.resolve(name).unwrap();
        let theme = Theme::builtin();

        let first = compose(effective, &caller, theme);
        let second = compose(effective, &caller, theme);
        prop_assert_eq!(first, second);
    }

    /// A child's default always overrides the same key from any ancestor,
    /// however long the chain.
    #[test]
    fn child_default_wins_at_any_depth(depth in 1usize..20, value in -50i32..50) {
        let mut builder = Registry::builder();
        builder
            .register(Descriptor::new("L0", RenderTarget::primitive("div")).default("f", 0).default("root", true))
            .unwrap();
        for i in 1..=depth {
            builder
                .register(
                    Descriptor::new(format!("L{}", i), RenderTarget::reference(format!("L{}", i - 1)))
                        .default("f", i as i32),
                )
                .unwrap();
        }
        builder
            .register(Descriptor::new("Leaf", RenderTarget::reference(format!("L{}", depth))).default("f", value))
            .unwrap();
        let registry = builder.build().unwrap();

        let leaf = registry.resolve("Leaf").unwrap();
        prop_assert_eq!(leaf.depth(), depth + 1);
        prop_assert_eq!(leaf.defaults().number("f"), Some(value as f64));
        prop_assert!(leaf.defaults().flag("root"));
        prop_assert_eq!(leaf.render_target(), &RenderTarget::primitive("div"));
    }

    /// Any cycle fails the build, regardless of its length or where the
    /// entry points are.
    #[test]
    fn cycles_fail_the_build(len in 1usize..8) {
        let mut builder = Registry::builder();
        for i in 0..len {
            builder
                .register(Descriptor::new(
                    format!("C{}", i),
                    RenderTarget::reference(format!("C{}", (i + 1) % len)),
                ))
                .unwrap();
        }
        let err = builder.build().unwrap_err();
        prop_assert!(matches!(err, ConfigError::CycleDetected { .. }), "unexpected error: {}", err);
    }
}
