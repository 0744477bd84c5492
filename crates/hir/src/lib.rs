//! Type-system document model for fixture generation.
//!
//! Parses SDL with `apollo-parser`/`apollo-compiler` and lowers every
//! top-level type-system declaration into a [`TypeDefinition`], keeping
//! document order. Type extensions are folded into the definition they
//! extend, so consumers see one definition per name.

use apollo_compiler::ast;
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

mod structure;

pub use structure::*;

/// A syntax error with position information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// Error message
    pub message: String,
    /// Byte offset where the error occurred
    pub offset: usize,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (at byte {})", self.message, self.offset)
    }
}

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Failed to parse schema {path}:\n{}", list_errors(errors))]
    Syntax {
        path: String,
        errors: Vec<ParseError>,
    },
}

fn list_errors(errors: &[ParseError]) -> String {
    errors
        .iter()
        .map(|e| format!("  - {e}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Ordered type-system declarations of one schema.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaDocument {
    definitions: Vec<TypeDefinition>,
}

impl SchemaDocument {
    /// Build a document from lowered definitions.
    ///
    /// Extensions are merged into the definition with the same name, wherever
    /// it appears. An extension with no base definition stands in for one. When
    /// a name is defined twice, the first definition wins.
    #[must_use]
    pub fn from_definitions(definitions: impl IntoIterator<Item = TypeDefinition>) -> Self {
        let mut by_name: IndexMap<(bool, Arc<str>), TypeDefinition> = IndexMap::new();
        let mut orphan_extensions = Vec::new();

        for def in definitions {
            let key = (def.kind == TypeDefKind::Directive, Arc::clone(&def.name));
            if def.is_extension {
                if let Some(base) = by_name.get_mut(&key) {
                    tracing::debug!(name = %def.name, "Merging type extension");
                    base.merge_extension(def);
                } else {
                    orphan_extensions.push(def);
                }
            } else if by_name.contains_key(&key) {
                tracing::warn!(name = %def.name, kind = %def.kind, "Duplicate definition ignored");
            } else {
                by_name.insert(key, def);
            }
        }

        for ext in orphan_extensions {
            let key = (false, Arc::clone(&ext.name));
            if let Some(base) = by_name.get_mut(&key) {
                tracing::debug!(name = %ext.name, "Merging type extension");
                base.merge_extension(ext);
            } else {
                tracing::debug!(name = %ext.name, "Extension without a base definition");
                by_name.insert(key, ext);
            }
        }

        Self {
            definitions: by_name.into_values().collect(),
        }
    }

    /// Lower a parsed AST document.
    #[must_use]
    pub fn from_ast(document: &ast::Document) -> Self {
        Self::from_definitions(
            document
                .definitions
                .iter()
                .filter_map(structure::extract_definition),
        )
    }

    /// All definitions in document order.
    #[must_use]
    pub fn definitions(&self) -> &[TypeDefinition] {
        &self.definitions
    }

    /// Look up a type (not a directive) by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TypeDefinition> {
        self.definitions
            .iter()
            .find(|def| def.kind != TypeDefKind::Directive && &*def.name == name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

/// Parse SDL into a [`SchemaDocument`].
///
/// Any syntax error is fatal: the document is only returned when both the
/// parser and the AST builder accept the source.
#[tracing::instrument(skip(source), fields(size = source.len()))]
pub fn parse_schema(source: &str, path: &str) -> Result<SchemaDocument, SchemaError> {
    let tree = apollo_parser::Parser::new(source).parse();

    let mut errors: Vec<ParseError> = tree
        .errors()
        .map(|e| ParseError {
            message: e.message().to_string(),
            offset: e.index(),
        })
        .collect();

    let ast = match ast::Document::parse(source, path) {
        Ok(doc) => doc,
        Err(with_errors) => {
            // apollo-compiler errors duplicate the parser's, and carry no offset
            if errors.is_empty() {
                errors.extend(with_errors.errors.iter().map(|e| ParseError {
                    message: e.to_string(),
                    offset: 0,
                }));
            }
            with_errors.partial
        }
    };

    if !errors.is_empty() {
        tracing::debug!(errors = errors.len(), "Schema has syntax errors");
        return Err(SchemaError::Syntax {
            path: path.to_string(),
            errors,
        });
    }

    let document = SchemaDocument::from_ast(&ast);
    tracing::debug!(definitions = document.len(), "Schema lowered");
    Ok(document)
}
