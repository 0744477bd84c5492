mod commands;
mod exit_code;

use clap::{Parser, Subcommand};
use commands::generate::GenerateOverrides;
use std::path::PathBuf;

pub use exit_code::ExitCode;

#[derive(Parser)]
#[command(name = "graphql-fixtures")]
#[command(about = "Generate default fixtures for every type of a GraphQL schema", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to fixtures or codegen config file
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Force colored output even when not a TTY
    #[arg(long, global = true, conflicts_with = "no_color")]
    color: bool,

    /// Disable colored output
    #[arg(long, global = true, conflicts_with = "color")]
    no_color: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Output verbosity options
#[derive(Debug, Clone, Copy)]
pub struct OutputOptions {
    /// Whether to show informational output (success messages, summaries)
    pub show_info: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the TypeScript fixtures module
    Generate {
        /// Schema file (SDL)
        #[arg(short, long, value_name = "FILE")]
        schema: PathBuf,

        /// Output file path (writes to stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Emit the recipe accessor (overrides config)
        #[arg(long)]
        immer: bool,

        /// Module to import type definitions from (overrides config)
        #[arg(long, value_name = "PATH")]
        type_definition_module: Option<String>,
    },

    /// Print the default fixture of a type as JSON
    Show {
        /// Type name
        #[arg(value_name = "TYPE")]
        type_name: String,

        /// Schema file (SDL)
        #[arg(short, long, value_name = "FILE")]
        schema: PathBuf,

        /// Levels of nested objects to resolve
        #[arg(short, long, default_value_t = 1)]
        depth: usize,
    },

    /// List every type that has a fixture
    List {
        /// Schema file (SDL)
        #[arg(short, long, value_name = "FILE")]
        schema: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output with colors
    Human,
    /// JSON output for tooling
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing();
    configure_colors(cli.color, cli.no_color);

    let output_opts = OutputOptions {
        show_info: !cli.quiet,
    };

    match cli.command {
        Commands::Generate {
            schema,
            output,
            immer,
            type_definition_module,
        } => commands::generate::run(
            cli.config,
            &schema,
            output.as_deref(),
            GenerateOverrides {
                immer,
                type_definition_module,
            },
            output_opts,
        ),
        Commands::Show {
            type_name,
            schema,
            depth,
        } => commands::show::run(cli.config, &schema, &type_name, depth),
        Commands::List { schema, format } => commands::list::run(cli.config, &schema, format),
    }
}

/// Initialize tracing, writing to stderr. Filtered by `RUST_LOG`, off by default.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("off")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Apply the color override chosen by [`color_override`], if any.
fn configure_colors(force_color: bool, no_color: bool) {
    let env = |name: &str| std::env::var_os(name).map(|v| v.to_string_lossy().into_owned());
    if let Some(enabled) = color_override(force_color, no_color, env) {
        colored::control::set_override(enabled);
    }
}

/// Decide whether colors are forced on or off.
///
/// Flags win over the environment. `NO_COLOR` disables colors whatever its
/// value, a non-empty non-zero `CLICOLOR_FORCE` enables them, and
/// `CLICOLOR=0` disables them. `None` leaves the decision to TTY detection.
///
/// See <https://no-color.org/> and <https://bixense.com/clicolors/>.
fn color_override(
    force_color: bool,
    no_color: bool,
    env: impl Fn(&str) -> Option<String>,
) -> Option<bool> {
    if force_color {
        return Some(true);
    }
    if no_color || env("NO_COLOR").is_some() {
        return Some(false);
    }
    if let Some(force) = env("CLICOLOR_FORCE") {
        return (!force.is_empty() && force != "0").then_some(true);
    }
    (env("CLICOLOR").as_deref() == Some("0")).then_some(false)
}

#[cfg(test)]
mod color_tests {
    use super::color_override;

    fn env_of<'a>(vars: &'a [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |name| {
            vars.iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value).to_string())
        }
    }

    #[test]
    fn flags_take_priority_over_environment() {
        let env = env_of(&[("NO_COLOR", "1"), ("CLICOLOR_FORCE", "1")]);
        assert_eq!(color_override(true, false, &env), Some(true));
        assert_eq!(color_override(false, true, env_of(&[])), Some(false));
    }

    #[test]
    fn no_color_disables_regardless_of_value() {
        assert_eq!(color_override(false, false, env_of(&[("NO_COLOR", "")])), Some(false));
        let env = env_of(&[("NO_COLOR", "1"), ("CLICOLOR_FORCE", "1")]);
        assert_eq!(color_override(false, false, env), Some(false));
    }

    #[test]
    fn clicolor_force_needs_non_zero_value() {
        assert_eq!(color_override(false, false, env_of(&[("CLICOLOR_FORCE", "1")])), Some(true));
        assert_eq!(color_override(false, false, env_of(&[("CLICOLOR_FORCE", "0")])), None);
        assert_eq!(color_override(false, false, env_of(&[("CLICOLOR_FORCE", "")])), None);
    }

    #[test]
    fn clicolor_zero_disables_and_one_defers_to_tty() {
        assert_eq!(color_override(false, false, env_of(&[("CLICOLOR", "0")])), Some(false));
        assert_eq!(color_override(false, false, env_of(&[("CLICOLOR", "1")])), None);
        assert_eq!(color_override(false, false, env_of(&[])), None);
    }
}
