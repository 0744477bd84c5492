//! Default-value rules: which factory each declaration gets and what every
//! field of a record defaults to.

use crate::driver::TypeSystemVisitor;
use crate::expr::{DefaultExpr, Literal};
use crate::registry::{FactoryBody, FactoryDefinition, FieldDefault};
use graphql_fixtures_config::{FixturesConfig, ScalarShape};
use graphql_fixtures_hir::{TypeDefKind, TypeDefinition, TypeNode};
use indexmap::IndexMap;
use std::sync::Arc;

/// Scalars every schema has implicitly.
pub const BUILTIN_SCALARS: &[&str] = &["ID", "String", "Int", "Float", "Boolean"];

/// Root operation types that never get a factory.
const ROOT_OPERATION_TYPES: &[&str] = &["Query", "Mutation"];

/// Turns type definitions into [`FactoryDefinition`]s.
#[derive(Debug, Clone)]
pub struct DefaultValueResolver<'a> {
    config: &'a FixturesConfig,
    scalar_defaults: IndexMap<&'a str, Literal>,
}

impl<'a> DefaultValueResolver<'a> {
    #[must_use]
    pub fn new(config: &'a FixturesConfig) -> Self {
        let scalar_defaults = config
            .scalar_defaults
            .keys()
            .filter_map(|name| {
                config
                    .scalar_default(name)
                    .map(|source| (name.as_str(), Literal::parse(source)))
            })
            .collect();
        Self {
            config,
            scalar_defaults,
        }
    }

    /// Default for a field of the given type.
    ///
    /// Nullable fields are absent, non-null lists are empty, and non-null
    /// named types use [`Self::named_type_default`].
    #[must_use]
    pub fn field_default(&self, ty: &TypeNode) -> DefaultExpr {
        match ty {
            TypeNode::Named(_) | TypeNode::List(_) => DefaultExpr::Absent,
            TypeNode::NonNull(inner) => match inner.as_ref() {
                TypeNode::List(_) => DefaultExpr::EmptyList,
                TypeNode::Named(name) => self.named_type_default(name),
                TypeNode::NonNull(_) => {
                    tracing::warn!(ty = %ty, "Unsupported field type shape, defaulting to absent");
                    DefaultExpr::Absent
                }
            },
        }
    }

    /// Default for a value of a named type: a configured scalar default,
    /// then the built-in scalar defaults, then a call to the type's factory.
    #[must_use]
    pub fn named_type_default(&self, name: &str) -> DefaultExpr {
        if let Some(literal) = self.scalar_defaults.get(name) {
            return DefaultExpr::Literal(literal.clone());
        }
        match name {
            "ID" | "String" => DefaultExpr::EmptyString,
            "Int" => DefaultExpr::ZeroInt,
            "Float" => DefaultExpr::ZeroFloat,
            "Boolean" => DefaultExpr::False,
            _ => DefaultExpr::factory(name),
        }
    }

    fn scalar_default(&self, name: &str) -> DefaultExpr {
        if let Some(literal) = self.scalar_defaults.get(name) {
            return DefaultExpr::Literal(literal.clone());
        }
        match self.config.scalar_shape(name) {
            ScalarShape::String => DefaultExpr::EmptyString,
            ScalarShape::Number => DefaultExpr::ZeroInt,
            ScalarShape::Other => DefaultExpr::EmptyObject,
        }
    }

    fn record(&self, def: &TypeDefinition, typename: bool) -> FactoryDefinition {
        let fields = def
            .fields
            .iter()
            .map(|field| FieldDefault {
                name: Arc::clone(&field.name),
                default: self.field_default(&field.ty),
            })
            .collect();
        FactoryDefinition {
            name: Arc::clone(&def.name),
            kind: def.kind,
            body: FactoryBody::Record {
                typename: typename.then(|| Arc::clone(&def.name)),
                fields,
            },
        }
    }
}

fn is_reserved(def: &TypeDefinition) -> bool {
    def.name.starts_with("__")
}

impl TypeSystemVisitor for DefaultValueResolver<'_> {
    type Output = FactoryDefinition;

    fn scalar(&mut self, def: &TypeDefinition) -> Option<FactoryDefinition> {
        if is_reserved(def) || BUILTIN_SCALARS.contains(&&*def.name) {
            return None;
        }
        Some(FactoryDefinition {
            name: Arc::clone(&def.name),
            kind: TypeDefKind::Scalar,
            body: FactoryBody::Scalar(self.scalar_default(&def.name)),
        })
    }

    fn object(&mut self, def: &TypeDefinition) -> Option<FactoryDefinition> {
        if is_reserved(def) || ROOT_OPERATION_TYPES.contains(&&*def.name) {
            return None;
        }
        Some(self.record(def, true))
    }

    fn interface(&mut self, def: &TypeDefinition) -> Option<FactoryDefinition> {
        if is_reserved(def) {
            return None;
        }
        Some(self.record(def, false))
    }

    fn union(&mut self, def: &TypeDefinition) -> Option<FactoryDefinition> {
        if is_reserved(def) {
            return None;
        }
        let member = def.union_members.first()?;
        Some(FactoryDefinition {
            name: Arc::clone(&def.name),
            kind: TypeDefKind::Union,
            body: FactoryBody::Union {
                member: Arc::clone(member),
            },
        })
    }

    fn enum_type(&mut self, def: &TypeDefinition) -> Option<FactoryDefinition> {
        if is_reserved(def) {
            return None;
        }
        let Some(value) = def.enum_values.first() else {
            tracing::warn!(name = %def.name, "Enum has no values, no factory generated");
            return None;
        };
        Some(FactoryDefinition {
            name: Arc::clone(&def.name),
            kind: TypeDefKind::Enum,
            body: FactoryBody::Enum {
                value: Arc::clone(value),
            },
        })
    }

    fn input_object(&mut self, def: &TypeDefinition) -> Option<FactoryDefinition> {
        if is_reserved(def) {
            return None;
        }
        Some(self.record(def, false))
    }
}
