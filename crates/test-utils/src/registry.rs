//! Registry and output builders.

use graphql_fixtures::{build_registry, emit, FixtureRegistry};
use graphql_fixtures_config::{FixturesConfig, ScalarShape};
use graphql_fixtures_hir::{parse_schema, SchemaDocument};

use crate::schemas::GITHUB_SCHEMA;

/// Parse an inline schema, panicking on syntax errors.
pub fn test_document(sdl: &str) -> SchemaDocument {
    match parse_schema(sdl, "schema.graphql") {
        Ok(document) => document,
        Err(err) => panic!("test schema should parse: {err}"),
    }
}

/// Build a registry for an inline schema.
///
/// # Example
///
/// ```ignore
/// let registry = test_registry("type User { id: ID! }", &FixturesConfig::default());
/// ```
pub fn test_registry(sdl: &str, config: &FixturesConfig) -> FixtureRegistry {
    build_registry(&test_document(sdl), config)
}

/// Emit the module for an inline schema as one string.
pub fn test_output(sdl: &str, config: &FixturesConfig) -> String {
    emit::generate(&test_document(sdl), config).to_string()
}

/// The configuration the GitHub schema is usually generated with: string
/// aliases for the date and URI scalars, a URI default and a type module.
pub fn github_config() -> FixturesConfig {
    FixturesConfig::default()
        .with_scalar_alias("Date", ScalarShape::String)
        .with_scalar_alias("DateTime", ScalarShape::String)
        .with_scalar_alias("URI", ScalarShape::String)
        .with_scalar_default("URI", "'https://example.com'")
        .with_type_definition_module("./graphql")
}

pub fn github_document() -> SchemaDocument {
    test_document(GITHUB_SCHEMA)
}

pub fn github_registry() -> FixtureRegistry {
    build_registry(&github_document(), &github_config())
}
