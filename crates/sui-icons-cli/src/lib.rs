//! Command-line lookups over the `sui-icons` registry.
//!
//! The binary is a thin wrapper around [`run`], which writes everything to the
//! supplied writer so the commands can be exercised without a process.

use std::io::Write;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use sui_icons::{IconEntry, SUI_ICONS_PREFIX, SuiIcon, SuiIconClassName, strip_prefix};
use tracing::debug;

/// Look up icons and CSS classes in the sui-icons font
#[derive(Parser, Debug)]
#[command(name = "sui-icons")]
#[command(version, about, long_about = None)]
#[command(after_help = "\
Examples:
  sui-icons list                      List every icon and its class
  sui-icons list --format json        Same, as a JSON array
  sui-icons class arrow-left          Print sui-icons-arrow-left
  sui-icons name sui-icons-Buy        Print Buy
  sui-icons check Buy sui-icons-swap  Validate names and class names
")]
pub struct Cli {
    /// Log lookups at debug level (`RUST_LOG` takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// List every icon in table order
    List {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print the CSS class for an icon name
    Class {
        /// Icon name, e.g. `Buy` or `arrow-left`
        name: String,
    },

    /// Print the icon name for a CSS class
    Name {
        /// Class name, e.g. `sui-icons-Buy`
        class: String,
    },

    /// Check whether values are known icon names or class names
    Check {
        /// Values to check
        #[arg(required = true)]
        values: Vec<String>,
    },

    /// Print the class-name prefix
    Prefix,
}

/// Output format for `list`.
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// `name<TAB>class`, one icon per line
    #[default]
    Text,
    /// JSON array of `{ variant, name, class }`
    Json,
}

/// What a `check` argument turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Icon(SuiIcon),
    ClassName(SuiIconClassName),
    Unknown,
}

/// Classify a value as an icon name, a class name, or neither.
#[must_use]
pub fn classify(value: &str) -> Classification {
    if let Some(icon) = SuiIcon::from_name(value) {
        Classification::Icon(icon)
    } else if let Ok(class) = SuiIconClassName::new(value) {
        Classification::ClassName(class)
    } else {
        Classification::Unknown
    }
}

/// Execute a parsed command line, writing results to `out`.
///
/// # Errors
///
/// Unknown names or classes, and write failures.
pub fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    match &cli.command {
        Commands::List { format } => run_list(*format, out),
        Commands::Class { name } => run_class(name, out),
        Commands::Name { class } => run_name(class, out),
        Commands::Check { values } => run_check(values, out),
        Commands::Prefix => {
            writeln!(out, "{SUI_ICONS_PREFIX}")?;
            Ok(())
        }
    }
}

fn run_list(format: OutputFormat, out: &mut impl Write) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for icon in SuiIcon::iter() {
                writeln!(out, "{}\t{}", icon.name(), icon.class_name())?;
            }
        }
        OutputFormat::Json => {
            let entries: Vec<IconEntry> = SuiIcon::iter().map(SuiIcon::entry).collect();
            serde_json::to_writer_pretty(&mut *out, &entries)
                .context("Failed to serialize icon table")?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn run_class(name: &str, out: &mut impl Write) -> Result<()> {
    let icon: SuiIcon = name.parse().with_context(|| {
        format!("No icon named {name:?}. Run `sui-icons list` to see all icons")
    })?;
    debug!(name, class = icon.class_name(), "resolved icon");
    writeln!(out, "{}", icon.class_name())?;
    Ok(())
}

fn run_name(class: &str, out: &mut impl Write) -> Result<()> {
    let icon = strip_prefix(class).with_context(|| format!("Cannot resolve class {class:?}"))?;
    debug!(class, name = icon.name(), "resolved class");
    writeln!(out, "{}", icon.name())?;
    Ok(())
}

fn run_check(values: &[String], out: &mut impl Write) -> Result<()> {
    let mut unknown = 0usize;

    for value in values {
        match classify(value) {
            Classification::Icon(icon) => {
                writeln!(out, "{value}\ticon\t{}", icon.class_name())?;
            }
            Classification::ClassName(class) => {
                writeln!(out, "{value}\tclass\t{}", class.suffix())?;
            }
            Classification::Unknown => {
                debug!(value = value.as_str(), "not in the icon font");
                writeln!(out, "{value}\tunknown")?;
                unknown += 1;
            }
        }
    }

    if unknown > 0 {
        bail!(
            "{unknown} of {} values are not in the icon font",
            values.len()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_verify() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_list_defaults_to_text() {
        let cli = Cli::parse_from(["sui-icons", "list"]);
        assert_eq!(
            cli.command,
            Commands::List {
                format: OutputFormat::Text
            }
        );
        assert!(!cli.verbose);
    }

    #[test]
    fn test_list_json_and_verbose() {
        let cli = Cli::parse_from(["sui-icons", "list", "--format", "json", "-v"]);
        assert_eq!(
            cli.command,
            Commands::List {
                format: OutputFormat::Json
            }
        );
        assert!(cli.verbose);
    }

    #[test]
    fn test_check_requires_values() {
        assert!(Cli::try_parse_from(["sui-icons", "check"]).is_err());
        let cli = Cli::parse_from(["sui-icons", "check", "Buy", "sui-icons-swap"]);
        assert_eq!(
            cli.command,
            Commands::Check {
                values: vec!["Buy".to_string(), "sui-icons-swap".to_string()]
            }
        );
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify("Buy"), Classification::Icon(SuiIcon::Buy));
        assert_eq!(
            classify("sui-icons-arrow-right"),
            Classification::ClassName(SuiIcon::ArrowRight.class())
        );
        assert_eq!(classify("nonexistent"), Classification::Unknown);
        assert_eq!(classify("sui-icons-nonexistent"), Classification::Unknown);
    }
}
