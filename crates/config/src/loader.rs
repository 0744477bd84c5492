use crate::{validate, ConfigError, FixturesConfig, FixturesPluginConfig, Result};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// File names recognised as fixture configuration, checked in this order
/// within each directory.
pub const CONFIG_FILES: &[&str] = &[
    ".graphql-fixtures.yml",
    ".graphql-fixtures.yaml",
    ".graphql-fixtures.json",
    "codegen.yml",
    "codegen.yaml",
    "codegen.json",
    "codegen.toml",
];

/// Search `start_dir` and each of its ancestors for a config file.
///
/// The nearest directory wins; within a directory [`CONFIG_FILES`] order
/// decides.
#[tracing::instrument(fields(start = %start_dir.display()))]
pub fn find_config(start_dir: &Path) -> Result<Option<PathBuf>> {
    let found = start_dir.ancestors().find_map(|dir| {
        tracing::trace!(dir = %dir.display(), "Looking for config");
        CONFIG_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|candidate| candidate.is_file())
    });

    match &found {
        Some(path) => tracing::info!(path = %path.display(), "Using config file"),
        None => tracing::debug!("No config file in any ancestor directory"),
    }
    Ok(found)
}

/// Load a fixtures config from the specified path.
/// The format is detected from the file extension.
#[tracing::instrument(fields(path = %path.display()))]
pub fn load_config(path: &Path) -> Result<FixturesConfig> {
    tracing::debug!("Reading config file");
    let contents = fs::read_to_string(path)?;
    let config = load_config_from_str(&contents, path)?;
    tracing::info!(
        immer = config.immer,
        scalar_defaults = config.scalar_defaults.len(),
        scalar_aliases = config.scalar_aliases.len(),
        "Config loaded successfully"
    );
    Ok(config)
}

/// Load a fixtures config from a string.
/// The path is used for error messages and format detection.
#[tracing::instrument(skip(contents), fields(path = %path.display(), size = contents.len()))]
pub fn load_config_from_str(contents: &str, path: &Path) -> Result<FixturesConfig> {
    let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or("");

    let raw = match extension {
        "yml" | "yaml" => {
            tracing::trace!("Parsing as YAML");
            parse_yaml(contents, path)?
        }
        "json" => {
            tracing::trace!("Parsing as JSON");
            parse_json(contents, path)?
        }
        "toml" => {
            tracing::trace!("Parsing as TOML");
            parse_toml(contents, path)?
        }
        _ => return Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
    };

    let plugin = plugin_section(raw);

    tracing::debug!("Validating config");
    let errors = validate(&plugin);
    if !errors.is_empty() {
        return Err(ConfigError::Validation {
            path: path.to_path_buf(),
            errors,
        });
    }

    let plugin: FixturesPluginConfig =
        serde_json::from_value(plugin).map_err(|e| ConfigError::Invalid {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    Ok(FixturesConfig::from(plugin))
}

/// Select the plugin options: the `config` value in the codegen layout,
/// otherwise the whole document.
fn plugin_section(raw: Value) -> Value {
    match raw {
        Value::Object(mut map) if map.contains_key("config") => {
            map.remove("config").unwrap_or(Value::Null)
        }
        Value::Null => Value::Object(serde_json::Map::new()),
        other => other,
    }
}

/// Parse YAML configuration
fn parse_yaml(contents: &str, path: &Path) -> Result<Value> {
    serde_saphyr::from_str(contents).map_err(|e| ConfigError::Invalid {
        path: path.to_path_buf(),
        message: format!("YAML parse error: {e}"),
    })
}

/// Parse JSON configuration
fn parse_json(contents: &str, path: &Path) -> Result<Value> {
    serde_json::from_str(contents).map_err(|e| ConfigError::Invalid {
        path: path.to_path_buf(),
        message: format!("JSON parse error: {e}"),
    })
}

/// Parse TOML configuration
fn parse_toml(contents: &str, path: &Path) -> Result<Value> {
    toml::from_str(contents).map_err(|e| ConfigError::Invalid {
        path: path.to_path_buf(),
        message: format!("TOML parse error: {e}"),
    })
}
