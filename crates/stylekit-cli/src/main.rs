//! `stylekit`: inspect the component registry and render components.
//!
//! ```text
//! stylekit list
//! stylekit chain Subhead
//! stylekit lookup colors.blue.6
//! stylekit render Button -a bg=red -a px=2,3 --format css --selector .cta
//! ```
//!
//! Every command works on the built-in catalog and theme; `--table` adds
//! descriptors from a YAML table and `--theme` swaps the theme. Logging goes to
//! stderr, filtered by `STYLEKIT_LOG` or raised with `-v`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use stylekit::{catalog, scale, table, AttrValue, Attributes, ComponentFactory, Registry, Scalar, Theme};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Inspect and render stylekit components
#[derive(Parser)]
#[command(name = "stylekit", version, about)]
struct Cli {
    /// Theme file (YAML) to use instead of the built-in theme
    #[arg(long, global = true, value_name = "FILE")]
    theme: Option<PathBuf>,

    /// Descriptor table (YAML) registered after the built-in catalog
    #[arg(long, global = true, value_name = "FILE")]
    table: Option<PathBuf>,

    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List registered components with their render targets
    List,

    /// Show the descriptor chain of a component
    Chain {
        /// Component name
        name: String,
    },

    /// Look up a dotted path in the theme (e.g. space.2, colors.blue.6)
    Lookup {
        /// Dotted theme path
        path: String,
    },

    /// Render a component
    Render {
        /// Component name
        name: String,

        /// Caller attribute as key=value; a comma-separated value is responsive
        #[arg(short = 'a', long = "attr", value_name = "KEY=VALUE", value_parser = parse_attr)]
        attrs: Vec<(String, AttrValue)>,

        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Css)]
        format: Format,

        /// Selector the CSS is scoped to
        #[arg(long, default_value = ".component")]
        selector: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Css,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let theme = match &cli.theme {
        Some(path) => Theme::from_file(path)
            .with_context(|| format!("loading theme {}", path.display()))?,
        None => Theme::builtin().clone(),
    };

    match cli.command {
        Command::Lookup { path } => {
            let value = scale::lookup(&path, &theme)
                .with_context(|| format!("nothing at '{}' in the theme", path))?;
            println!("{}", serde_json::to_string_pretty(value)?);
        }
        Command::List => {
            let registry = build_registry(cli.table.as_ref())?;
            for name in registry.names() {
                let effective = registry.resolve(name)?;
                println!("{:<20} {}", name, effective.render_target());
            }
        }
        Command::Chain { name } => {
            let registry = build_registry(cli.table.as_ref())?;
            let effective = registry.resolve(&name)?;
            println!("{} -> {}", effective.chain().join(" -> "), effective.render_target());
        }
        Command::Render {
            name,
            attrs,
            format,
            selector,
        } => {
            let registry = build_registry(cli.table.as_ref())?;
            let factory = ComponentFactory::new(registry, theme);
            let caller: Attributes = attrs.into_iter().collect();
            let instruction = factory.create(&name, &caller)?;
            match format {
                Format::Css => print!("{}", instruction.to_css(&selector)),
                Format::Json => println!("{}", serde_json::to_string_pretty(&instruction)?),
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_env("STYLEKIT_LOG").unwrap_or_else(|_| {
        EnvFilter::new(match verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        })
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_registry(table_path: Option<&PathBuf>) -> Result<Registry> {
    let mut builder = Registry::builder();
    builder.extend(catalog::descriptors())?;
    if let Some(path) = table_path {
        let extra = table::load_table(path)
            .with_context(|| format!("loading descriptor table {}", path.display()))?;
        debug!(count = extra.len(), path = %path.display(), "registering table descriptors");
        builder.extend(extra)?;
    }
    Ok(builder.build()?)
}

/// Parses `key=value`. Values are booleans, numbers or text; a comma makes
/// the value responsive, one tier per item.
fn parse_attr(input: &str) -> Result<(String, AttrValue), String> {
    let (key, value) = input
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", input))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("attribute name is empty in '{}'", input));
    }

    let value = if value.contains(',') {
        AttrValue::Responsive(value.split(',').map(parse_scalar).collect())
    } else {
        AttrValue::Scalar(parse_scalar(value))
    };
    Ok((key.to_string(), value))
}

fn parse_scalar(raw: &str) -> Scalar {
    let raw = raw.trim();
    match raw {
        "true" => Scalar::Bool(true),
        "false" => Scalar::Bool(false),
        _ => raw
            .parse::<f64>()
            .map(Scalar::Number)
            .unwrap_or_else(|_| Scalar::Text(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_attr_kinds() {
        assert_eq!(parse_attr("px=3").unwrap(), ("px".to_string(), 3.into()));
        assert_eq!(parse_attr("bg=blue").unwrap(), ("bg".to_string(), "blue".into()));
        assert_eq!(parse_attr("active=true").unwrap(), ("active".to_string(), true.into()));
        assert_eq!(
            parse_attr("p=2, 3,auto").unwrap(),
            (
                "p".to_string(),
                AttrValue::Responsive(vec![
                    Scalar::Number(2.0),
                    Scalar::Number(3.0),
                    Scalar::Text("auto".into()),
                ])
            )
        );
    }

    #[test]
    fn test_parse_attr_rejects_malformed() {
        assert!(parse_attr("px").is_err());
        assert!(parse_attr("=3").is_err());
    }

    #[test]
    fn test_cli_parses_render() {
        let cli = Cli::try_parse_from([
            "stylekit", "render", "Button", "-a", "bg=red", "--format", "json", "-vv",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Command::Render { name, attrs, format, .. } => {
                assert_eq!(name, "Button");
                assert_eq!(attrs.len(), 1);
                assert!(matches!(format, Format::Json));
            }
            _ => panic!("expected render"),
        }
    }
}
