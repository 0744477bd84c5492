use crate::commands::common::CommandContext;
use crate::{ExitCode, OutputOptions};
use anyhow::Result;
use colored::Colorize;
use graphql_fixtures::emit;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Command-line overrides for config options.
#[derive(Debug, Default)]
pub struct GenerateOverrides {
    pub immer: bool,
    pub type_definition_module: Option<String>,
}

/// Run the generate command
#[tracing::instrument(skip_all, fields(schema = %schema.display()))]
pub fn run(
    config_path: Option<PathBuf>,
    schema: &Path,
    output: Option<&Path>,
    overrides: GenerateOverrides,
    output_opts: OutputOptions,
) -> Result<()> {
    let start_time = std::time::Instant::now();
    let ctx = CommandContext::load(config_path, schema)?;

    let mut config = ctx.config;
    if overrides.immer {
        config = config.with_immer(true);
    }
    if let Some(module) = overrides.type_definition_module {
        config = config.with_type_definition_module(module);
    }

    let module = emit::generate(&ctx.document, &config);
    let text = module.to_string();

    let Some(output) = output else {
        let mut stdout = std::io::stdout().lock();
        if let Err(e) = stdout.write_all(text.as_bytes()) {
            eprintln!("{} {e}", "✗ Failed to write output:".red());
            ExitCode::IoError.exit();
        }
        return Ok(());
    };

    if let Err(e) = std::fs::write(output, &text) {
        eprintln!(
            "{} {}: {e}",
            "✗ Failed to write".red(),
            output.display()
        );
        ExitCode::IoError.exit();
    }

    if output_opts.show_info {
        println!(
            "{} {}",
            "✓ Fixtures written to".green(),
            output.display().to_string().bold()
        );
        println!(
            "  {} total: {:.2}s",
            "⏱".dimmed(),
            start_time.elapsed().as_secs_f64()
        );
    }
    Ok(())
}
