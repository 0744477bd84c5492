//! # GraphQL Fixtures Test Utilities
//!
//! Shared test infrastructure for the graphql-fixtures crates.

// Test utilities are less strict than production code
#![allow(clippy::must_use_candidate)]
#![allow(clippy::needless_raw_string_hashes)]
#![allow(clippy::missing_panics_doc)]
//!
//! ## Quick Start
//!
//! ```ignore
//! use graphql_fixtures_test_utils::{github_registry, schemas::GITHUB_SCHEMA};
//!
//! let registry = github_registry();
//! let repository = registry.instantiate("Repository").unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`schemas`] - Common schema fixtures
//! - [`registry`] - Helpers for building registries and emitted modules
//! - [`assertions`] - Formatting helpers for snapshot tests

pub mod assertions;
pub mod registry;
pub mod schemas;

pub use assertions::{format_fixture, format_output};
pub use registry::{
    github_config, github_document, github_registry, test_document, test_output, test_registry,
};

// Re-export insta for snapshot testing
pub use insta;
