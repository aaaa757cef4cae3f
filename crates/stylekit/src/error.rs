//! Error types for descriptor registration and configuration loading.
//!
//! Two classes exist. [`ConfigError`] covers a broken descriptor graph and is
//! always fatal. Soft misses (an absent scale step, an unknown color name) are
//! not errors at all: they surface as `None` or pass-through literals.
//! [`LoadError`] wraps parse and I/O failures for YAML themes and tables.

use std::path::PathBuf;

use thiserror::Error;

/// A broken descriptor table.
///
/// Every variant names the descriptor involved so the authoring mistake can be
/// located.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Two descriptors were registered under the same name.
    #[error("descriptor '{name}' is registered more than once")]
    Duplicate { name: String },

    /// A `tag` names a descriptor that is not registered.
    #[error(
        "descriptor '{from}' references unknown descriptor '{to}' (chain: {})",
        .chain.join(" -> ")
    )]
    UnresolvedReference {
        from: String,
        to: String,
        chain: Vec<String>,
    },

    /// Following `tag` references leads back to a name already on the path.
    #[error("cycle detected in descriptor chain: {}", .path.join(" -> "))]
    CycleDetected { path: Vec<String> },

    /// The chain did not reach a primitive within the allowed number of hops.
    #[error("descriptor '{name}' exceeds the maximum chain depth of {limit}")]
    ChainTooDeep { name: String, limit: usize },

    /// A lookup or render asked for a name that was never registered.
    #[error("unknown component '{0}'")]
    UnknownComponent(String),

    /// A flattened descriptor still pointed at another descriptor.
    #[error("descriptor '{name}' did not flatten to a primitive target (stopped at '{target}')")]
    Unflattened { name: String, target: String },
}

/// Failure while reading a theme or descriptor table.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The content is not valid YAML.
    #[error("failed to parse {}: {message}", location(.path))]
    Parse {
        /// Optional source file path.
        path: Option<PathBuf>,
        /// Error message from the YAML parser.
        message: String,
    },

    /// The YAML is well formed but an entry has the wrong shape.
    #[error("invalid definition for '{name}': {message}")]
    InvalidDefinition { name: String, message: String },

    /// The loaded descriptors do not form a valid graph.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

fn location(path: &Option<PathBuf>) -> String {
    match path {
        Some(p) => p.display().to_string(),
        None => "inline content".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unresolved_reference_display_names_chain() {
        let err = ConfigError::UnresolvedReference {
            from: "Subhead".to_string(),
            to: "Heding".to_string(),
            chain: vec!["Title".to_string(), "Subhead".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("'Subhead'"));
        assert!(msg.contains("'Heding'"));
        assert!(msg.contains("Title -> Subhead"));
    }

    #[test]
    fn test_cycle_display() {
        let err = ConfigError::CycleDetected {
            path: vec!["A".to_string(), "B".to_string(), "A".to_string()],
        };
        assert_eq!(err.to_string(), "cycle detected in descriptor chain: A -> B -> A");
    }

    #[test]
    fn test_parse_error_without_path() {
        let err = LoadError::Parse {
            path: None,
            message: "bad indent".to_string(),
        };
        assert_eq!(err.to_string(), "failed to parse inline content: bad indent");
    }

    #[test]
    fn test_config_error_converts() {
        let err: LoadError = ConfigError::UnknownComponent("Nope".to_string()).into();
        assert!(matches!(err, LoadError::Config(_)));
        assert_eq!(err.to_string(), "unknown component 'Nope'");
    }
}
