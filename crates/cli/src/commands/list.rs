use crate::commands::common::CommandContext;
use crate::OutputFormat;
use anyhow::Result;
use colored::Colorize;
use graphql_fixtures::{build_registry, FixtureRegistry};
use std::path::{Path, PathBuf};

/// Run the list command
#[tracing::instrument(skip_all)]
pub fn run(config_path: Option<PathBuf>, schema: &Path, format: OutputFormat) -> Result<()> {
    let ctx = CommandContext::load(config_path, schema)?;
    let registry = build_registry(&ctx.document, &ctx.config);

    match format {
        OutputFormat::Human => print_human(&registry),
        OutputFormat::Json => println!("{}", to_json(&registry)),
    }
    Ok(())
}

fn print_human(registry: &FixtureRegistry) {
    let width = registry.names().map(str::len).max().unwrap_or(0);
    for factory in registry.factories() {
        println!(
            "{:width$}  {}",
            factory.name.as_ref().bold(),
            factory.kind.as_str().dimmed()
        );
    }
    println!(
        "\n{} {}",
        registry.len().to_string().bold(),
        if registry.len() == 1 { "fixture" } else { "fixtures" }
    );
}

fn to_json(registry: &FixtureRegistry) -> serde_json::Value {
    serde_json::Value::Array(
        registry
            .factories()
            .map(|factory| {
                serde_json::json!({
                    "name": &*factory.name,
                    "kind": factory.kind.as_str(),
                })
            })
            .collect(),
    )
}
