//! Default fixtures for GraphQL schemas.
//!
//! Every scalar, object, interface, union, enum and input object of a schema
//! gets a factory that produces a minimal valid value of that type: empty
//! strings, zeros, `false`, empty lists, the first enum value, the first
//! union member. Non-null fields of other types call that type's factory, but
//! only when the field is first read, so recursive types are fine.
//!
//! ```
//! use graphql_fixtures::{build_registry, PlainAccessor, Value};
//! use graphql_fixtures_config::FixturesConfig;
//! use graphql_fixtures_hir::parse_schema;
//!
//! let document = parse_schema(
//!     "type User { login: String! friends: [User!]! bestFriend: User! }",
//!     "schema.graphql",
//! )?;
//! let fixtures = PlainAccessor::new(build_registry(&document, &FixturesConfig::default()));
//!
//! let user = fixtures.fixture("User").unwrap_or_default();
//! assert_eq!(user.get_path(&["bestFriend", "login"]).and_then(Value::as_str), Some(""));
//! # Ok::<(), graphql_fixtures_hir::SchemaError>(())
//! ```
//!
//! [`emit::generate`] renders the same factories as a TypeScript module.

mod accessor;
pub mod driver;
pub mod emit;
mod expr;
mod produce;
mod registry;
pub mod resolver;
mod value;

pub use accessor::{Accessor, PlainAccessor, RecipeAccessor};
pub use driver::{walk, TypeSystemVisitor};
pub use expr::{DefaultExpr, Literal};
pub use produce::{produce, RecipeOutput};
pub use registry::{FactoryBody, FactoryDefinition, FieldDefault, FixtureRegistry};
pub use resolver::DefaultValueResolver;
pub use value::{Object, Value, TYPENAME_FIELD};

use graphql_fixtures_config::FixturesConfig;
use graphql_fixtures_hir::SchemaDocument;

/// Build the factory registry of a schema.
#[tracing::instrument(skip_all, fields(definitions = document.len()))]
pub fn build_registry(document: &SchemaDocument, config: &FixturesConfig) -> FixtureRegistry {
    let mut resolver = DefaultValueResolver::new(config);
    let registry = FixtureRegistry::from_factories(walk(document, &mut resolver));
    tracing::debug!(factories = registry.len(), "Registry built");
    registry
}
