//! Configuration validation.
//!
//! Runs on the raw config value before deserialization so that unknown keys,
//! which serde silently ignores, can be reported with a suggestion.

use serde_json::Value;

/// Keys recognized in the `fixtures` section.
const FIXTURES_KEYS: &[&str] = &["typeDefinitionModule", "scalarDefaults", "immer"];

/// Minimum similarity for a known key to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// A problem found in a fixtures configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    /// A key in the `fixtures` section that is not a known option.
    UnknownOption {
        key: String,
        suggestion: Option<&'static str>,
    },
    /// `typeDefinitionModule` is present but blank.
    EmptyTypeDefinitionModule,
    /// A `scalarDefaults` key that cannot name a GraphQL scalar.
    InvalidScalarName { name: String },
    /// A `scalarDefaults` value that is not a string of source text.
    NonStringScalarDefault { name: String },
}

impl ConfigValidationError {
    /// Returns the error code for this validation error.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownOption { .. } => "unknown-option",
            Self::EmptyTypeDefinitionModule => "empty-type-definition-module",
            Self::InvalidScalarName { .. } => "invalid-scalar-name",
            Self::NonStringScalarDefault { .. } => "non-string-scalar-default",
        }
    }

    /// Returns a human-readable error message.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::UnknownOption {
                key,
                suggestion: Some(suggestion),
            } => format!("Unknown fixtures option '{key}'. Did you mean '{suggestion}'?"),
            Self::UnknownOption {
                key,
                suggestion: None,
            } => format!(
                "Unknown fixtures option '{key}'. Expected one of: {}",
                FIXTURES_KEYS.join(", ")
            ),
            Self::EmptyTypeDefinitionModule => {
                "'typeDefinitionModule' must not be empty".to_string()
            }
            Self::InvalidScalarName { name } => {
                format!("'{name}' in 'scalarDefaults' is not a valid GraphQL name")
            }
            Self::NonStringScalarDefault { name } => format!(
                "Default for scalar '{name}' must be a string of source text, e.g. \"'value'\""
            ),
        }
    }
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// Validate the plugin section of a config file.
///
/// `plugin` is the object holding `scalars`/`fixtures` (the `config:` value in
/// the codegen layout). Returns every problem found; an empty list means the
/// configuration is valid.
#[must_use]
pub fn validate(plugin: &Value) -> Vec<ConfigValidationError> {
    let mut errors = Vec::new();

    let Some(fixtures) = plugin.get("fixtures").and_then(Value::as_object) else {
        return errors;
    };

    for key in fixtures.keys() {
        if !FIXTURES_KEYS.contains(&key.as_str()) {
            errors.push(ConfigValidationError::UnknownOption {
                key: key.clone(),
                suggestion: suggest(key),
            });
        }
    }

    if let Some(module) = fixtures.get("typeDefinitionModule").and_then(Value::as_str) {
        if module.trim().is_empty() {
            errors.push(ConfigValidationError::EmptyTypeDefinitionModule);
        }
    }

    if let Some(defaults) = fixtures.get("scalarDefaults").and_then(Value::as_object) {
        for (name, value) in defaults {
            if !is_graphql_name(name) {
                errors.push(ConfigValidationError::InvalidScalarName { name: name.clone() });
            }
            if !value.is_string() {
                errors.push(ConfigValidationError::NonStringScalarDefault { name: name.clone() });
            }
        }
    }

    errors
}

fn suggest(key: &str) -> Option<&'static str> {
    FIXTURES_KEYS
        .iter()
        .map(|known| (*known, strsim::jaro_winkler(key, known)))
        .filter(|(_, score)| *score >= SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(known, _)| known)
}

/// `/[_A-Za-z][_0-9A-Za-z]*/`
fn is_graphql_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c == '_' || c.is_ascii_alphabetic())
        && chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}
