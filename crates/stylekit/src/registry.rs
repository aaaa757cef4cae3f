//! Descriptor registry.
//!
//! Descriptors are collected in a [`RegistryBuilder`] and frozen by
//! [`RegistryBuilder::build`], which flattens every reference chain once, up
//! front. A broken table (a dangling reference, a cycle, a chain that never
//! reaches a primitive) fails the build; nothing is resolved lazily at render
//! time.
//!
//! Flattening a chain `Subhead -> Heading -> Text -> <p>` merges from the root
//! outward:
//!
//! - default attributes: parent first, child keys override;
//! - style sources: kept in ancestor-first order, so evaluating them in
//!   sequence and shallow-merging lets the child win per property;
//! - constraints: unioned, child wins;
//! - the `children` function: nearest one wins.
//!
//! # Example
//!
//! ```rust
//! use stylekit::descriptor::{Descriptor, RenderTarget};
//! use stylekit::registry::Registry;
//!
//! let registry = Registry::builder()
//!     .with(Descriptor::new("Subhead", RenderTarget::reference("Heading")).default("f", 4))
//!     .and_then(|b| b.with(Descriptor::new("Heading", RenderTarget::reference("Text")).default("f", 5)))
//!     .and_then(|b| b.with(Descriptor::new("Text", RenderTarget::primitive("p")).default("m", 0)))
//!     .and_then(|b| b.build())
//!     .unwrap();
//!
//! let subhead = registry.resolve("Subhead").unwrap();
//! assert_eq!(subhead.render_target().name(), "p");
//! assert_eq!(subhead.chain(), ["Subhead", "Heading", "Text"]);
//! assert_eq!(subhead.defaults().number("f"), Some(4.0));
//! assert_eq!(subhead.defaults().number("m"), Some(0.0));
//! ```

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::descriptor::{ChildrenFn, Constraints, Descriptor, RenderTarget, StyleSource};
use crate::error::ConfigError;
use crate::value::Attributes;

/// Maximum number of reference hops from a descriptor to its primitive.
pub const MAX_CHAIN_DEPTH: usize = 64;

/// A descriptor with its whole reference chain merged in.
#[derive(Clone)]
pub struct EffectiveDescriptor {
    name: String,
    render_target: RenderTarget,
    chain: Vec<String>,
    defaults: Attributes,
    styles: Vec<StyleSource>,
    constraints: Constraints,
    children: Option<ChildrenFn>,
}

impl EffectiveDescriptor {
    fn extend(parent: Option<&EffectiveDescriptor>, descriptor: &Descriptor) -> Self {
        let mut defaults = parent.map(|p| p.defaults.clone()).unwrap_or_default();
        defaults.merge(descriptor.default_attributes());

        let mut styles = parent.map(|p| p.styles.clone()).unwrap_or_default();
        styles.extend(descriptor.style_source().cloned());

        let mut constraints = parent.map(|p| p.constraints.clone()).unwrap_or_default();
        constraints.extend(
            descriptor
                .constraints()
                .iter()
                .map(|(k, v)| (k.clone(), v.clone())),
        );

        let mut chain = vec![descriptor.name().to_string()];
        chain.extend(parent.into_iter().flat_map(|p| p.chain.iter().cloned()));

        let render_target = match (descriptor.target(), parent) {
            (RenderTarget::Reference(_), Some(p)) => p.render_target.clone(),
            (target, _) => target.clone(),
        };

        Self {
            name: descriptor.name().to_string(),
            render_target,
            chain,
            defaults,
            styles,
            constraints,
            children: descriptor
                .children()
                .cloned()
                .or_else(|| parent.and_then(|p| p.children.clone())),
        }
    }

    /// The registered name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The primitive reached at the end of the chain.
    pub fn render_target(&self) -> &RenderTarget {
        &self.render_target
    }

    /// Names from this descriptor to the one holding the primitive target.
    pub fn chain(&self) -> &[String] {
        &self.chain
    }

    /// Number of reference hops to the primitive.
    pub fn depth(&self) -> usize {
        self.chain.len() - 1
    }

    /// Merged default attributes.
    pub fn defaults(&self) -> &Attributes {
        &self.defaults
    }

    /// Style sources, root ancestor first.
    pub fn styles(&self) -> &[StyleSource] {
        &self.styles
    }

    /// Merged prop constraints.
    pub fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    /// The nearest `children` function in the chain.
    pub fn children(&self) -> Option<&ChildrenFn> {
        self.children.as_ref()
    }
}

impl fmt::Debug for EffectiveDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EffectiveDescriptor")
            .field("name", &self.name)
            .field("render_target", &self.render_target)
            .field("chain", &self.chain)
            .field("defaults", &self.defaults)
            .field("styles", &self.styles)
            .field("constraints", &self.constraints)
            .field("children", &self.children.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

/// Collects descriptors before the registry is frozen.
#[derive(Debug, Clone, Default)]
pub struct RegistryBuilder {
    order: Vec<String>,
    descriptors: HashMap<String, Descriptor>,
}

impl RegistryBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a descriptor. Names must be unique.
    pub fn register(&mut self, descriptor: Descriptor) -> Result<&mut Self, ConfigError> {
        let name = descriptor.name().to_string();
        if self.descriptors.contains_key(&name) {
            return Err(ConfigError::Duplicate { name });
        }
        self.order.push(name.clone());
        self.descriptors.insert(name, descriptor);
        Ok(self)
    }

    /// Adds a descriptor, consuming and returning the builder.
    pub fn with(mut self, descriptor: Descriptor) -> Result<Self, ConfigError> {
        self.register(descriptor)?;
        Ok(self)
    }

    /// Adds every descriptor in `descriptors`, stopping at the first duplicate.
    pub fn extend<I>(&mut self, descriptors: I) -> Result<&mut Self, ConfigError>
    where
        I: IntoIterator<Item = Descriptor>,
    {
        for descriptor in descriptors {
            self.register(descriptor)?;
        }
        Ok(self)
    }

    /// Returns `true` if `name` has been registered.
    pub fn contains(&self, name: &str) -> bool {
        self.descriptors.contains_key(name)
    }

    /// Number of registered descriptors.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Flattens every descriptor and freezes the registry.
    ///
    /// Every name is resolved, in declaration order, whether or not anything
    /// references it, so a broken table fails here rather than on first use.
    pub fn build(self) -> Result<Registry, ConfigError> {
        let mut resolved = BTreeMap::new();
        for name in &self.order {
            self.flatten(name, &mut resolved)?;
        }

        debug!(descriptors = resolved.len(), "descriptor registry built");

        Ok(Registry {
            order: self.order,
            entries: resolved,
        })
    }

    fn flatten(
        &self,
        name: &str,
        resolved: &mut BTreeMap<String, Arc<EffectiveDescriptor>>,
    ) -> Result<Arc<EffectiveDescriptor>, ConfigError> {
        if let Some(done) = resolved.get(name) {
            return Ok(Arc::clone(done));
        }

        let start = self
            .descriptors
            .get(name)
            .ok_or_else(|| ConfigError::UnknownComponent(name.to_string()))?;

        // Walk references until a primitive or an already flattened ancestor.
        let mut path = vec![start];
        let mut base = None;
        let mut current = start;
        while let RenderTarget::Reference(next) = current.target() {
            if let Some(done) = resolved.get(next.as_str()) {
                base = Some(Arc::clone(done));
                break;
            }
            if path.iter().any(|d| d.name() == next.as_str()) {
                let mut cycle: Vec<String> = path.iter().map(|d| d.name().to_string()).collect();
                cycle.push(next.clone());
                return Err(ConfigError::CycleDetected { path: cycle });
            }
            let parent =
                self.descriptors
                    .get(next.as_str())
                    .ok_or_else(|| ConfigError::UnresolvedReference {
                        from: current.name().to_string(),
                        to: next.clone(),
                        chain: path.iter().map(|d| d.name().to_string()).collect(),
                    })?;
            path.push(parent);
            current = parent;
        }

        // Fold back from the root, memoizing every intermediate link.
        let mut effective = base;
        for descriptor in path.iter().rev() {
            let flat = EffectiveDescriptor::extend(effective.as_deref(), descriptor);
            if flat.depth() > MAX_CHAIN_DEPTH {
                return Err(ConfigError::ChainTooDeep {
                    name: flat.name,
                    limit: MAX_CHAIN_DEPTH,
                });
            }
            trace!(name = flat.name(), chain = ?flat.chain(), "flattened descriptor");
            let flat = Arc::new(flat);
            resolved.insert(descriptor.name().to_string(), Arc::clone(&flat));
            effective = Some(flat);
        }

        effective.ok_or_else(|| ConfigError::UnknownComponent(name.to_string()))
    }
}

/// The frozen, flattened descriptor table.
///
/// Immutable after [`RegistryBuilder::build`]; share it behind an [`Arc`]
/// across render passes.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    order: Vec<String>,
    entries: BTreeMap<String, Arc<EffectiveDescriptor>>,
}

impl Registry {
    /// Starts a new builder.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Returns the flattened descriptor for `name`.
    pub fn resolve(&self, name: &str) -> Result<&EffectiveDescriptor, ConfigError> {
        self.entries
            .get(name)
            .map(Arc::as_ref)
            .ok_or_else(|| ConfigError::UnknownComponent(name.to_string()))
    }

    /// Returns a shared handle to the flattened descriptor for `name`.
    pub fn get(&self, name: &str) -> Option<Arc<EffectiveDescriptor>> {
        self.entries.get(name).cloned()
    }

    /// Returns `true` if `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Registered names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Number of registered descriptors.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
