use crate::commands::common::CommandContext;
use crate::ExitCode;
use anyhow::{Context, Result};
use colored::Colorize;
use graphql_fixtures::{build_registry, FixtureRegistry};
use std::path::{Path, PathBuf};

/// Minimum similarity for a type name to be suggested.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Run the show command
#[tracing::instrument(skip_all, fields(type_name))]
pub fn run(
    config_path: Option<PathBuf>,
    schema: &Path,
    type_name: &str,
    depth: usize,
) -> Result<()> {
    let ctx = CommandContext::load(config_path, schema)?;
    let registry = build_registry(&ctx.document, &ctx.config);

    let Some(fixture) = registry.instantiate(type_name) else {
        eprintln!(
            "{} {}",
            "✗ No fixture for type".red(),
            type_name.bold()
        );
        if let Some(suggestion) = suggest(&registry, type_name) {
            eprintln!("  Did you mean '{}'?", suggestion.cyan());
        }
        ExitCode::UnknownType.exit();
    };

    let json = serde_json::to_string_pretty(&fixture.materialize(depth))
        .context("Failed to serialize fixture")?;
    println!("{json}");
    Ok(())
}

fn suggest<'a>(registry: &'a FixtureRegistry, type_name: &str) -> Option<&'a str> {
    registry
        .names()
        .map(|name| (name, strsim::jaro_winkler(type_name, name)))
        .filter(|(_, score)| *score >= SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(name, _)| name)
}
