use crate::ExitCode;
use anyhow::{Context, Result};
use colored::Colorize;
use graphql_fixtures_config::{find_config, load_config, ConfigError, FixturesConfig};
use graphql_fixtures_hir::{parse_schema, SchemaDocument, SchemaError};
use std::path::{Path, PathBuf};

/// Config and schema shared by every command.
pub struct CommandContext {
    pub config: FixturesConfig,
    pub document: SchemaDocument,
}

impl CommandContext {
    /// Load the config and parse the schema.
    ///
    /// Without `--config`, a config file is searched for from the current
    /// directory upwards; when none is found the defaults apply. Failures
    /// are reported on stderr and exit with the matching [`ExitCode`].
    pub fn load(config_path: Option<PathBuf>, schema_path: &Path) -> Result<Self> {
        let config = load_fixtures_config(config_path)?;

        let source = match std::fs::read_to_string(schema_path) {
            Ok(source) => source,
            Err(e) => {
                eprintln!(
                    "{} {}: {e}",
                    "✗ Failed to read schema".red(),
                    schema_path.display()
                );
                ExitCode::SchemaError.exit();
            }
        };

        let document = match parse_schema(&source, &schema_path.display().to_string()) {
            Ok(document) => document,
            Err(err) => {
                report_schema_error(&err);
                ExitCode::ParseError.exit();
            }
        };

        Ok(Self { config, document })
    }
}

fn load_fixtures_config(config_path: Option<PathBuf>) -> Result<FixturesConfig> {
    let config_path = if let Some(path) = config_path {
        Some(path)
    } else {
        let current_dir = std::env::current_dir()?;
        find_config(&current_dir).context("Failed to search for config")?
    };

    let Some(config_path) = config_path else {
        tracing::debug!("No config file found, using defaults");
        return Ok(FixturesConfig::default());
    };

    match load_config(&config_path) {
        Ok(config) => Ok(config),
        Err(err) => {
            report_config_error(&err);
            ExitCode::ConfigError.exit();
        }
    }
}

fn report_config_error(err: &ConfigError) {
    if let ConfigError::Validation { path, errors } = err {
        eprintln!(
            "{} {}",
            "✗ Invalid configuration in".red(),
            path.display()
        );
        for error in errors {
            eprintln!("  {} {}", format!("[{}]", error.code()).dimmed(), error.message());
        }
    } else {
        eprintln!("{} {err}", "✗ Failed to load config:".red());
    }
}

fn report_schema_error(err: &SchemaError) {
    let SchemaError::Syntax { path, errors } = err;
    eprintln!("{} {}", "✗ Syntax errors in".red(), path);
    for error in errors {
        eprintln!("  {} {}", "-".dimmed(), error);
    }
}
