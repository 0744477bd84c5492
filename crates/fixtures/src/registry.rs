use crate::expr::DefaultExpr;
use crate::value::{LazyField, Object, Value, TYPENAME_FIELD};
use graphql_fixtures_hir::TypeDefKind;
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

/// A named factory: what calling it produces.
#[derive(Debug, Clone, PartialEq)]
pub struct FactoryDefinition {
    pub name: Arc<str>,
    /// Kind of the declaration the factory was built from
    pub kind: TypeDefKind,
    pub body: FactoryBody,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FactoryBody {
    /// Scalars evaluate a single expression
    Scalar(DefaultExpr),
    /// Objects, interfaces and input objects. Only object types carry a
    /// `__typename`.
    Record {
        typename: Option<Arc<str>>,
        fields: Vec<FieldDefault>,
    },
    /// Unions delegate to their first member
    Union { member: Arc<str> },
    /// Enums produce their first value
    Enum { value: Arc<str> },
}

/// Default of one field of a record factory.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDefault {
    pub name: Arc<str>,
    pub default: DefaultExpr,
}

impl FactoryDefinition {
    /// Produce a fresh value. Record fields stay unresolved until read.
    #[must_use]
    pub fn instantiate(&self, registry: &FixtureRegistry) -> Value {
        match &self.body {
            FactoryBody::Scalar(expr) => expr.evaluate(registry),
            FactoryBody::Record { typename, fields } => {
                let discriminator = typename.iter().map(|typename| {
                    (
                        Arc::from(TYPENAME_FIELD),
                        LazyField::resolved(Value::String(Arc::clone(typename))),
                    )
                });
                let lazy = fields.iter().map(|field| {
                    (
                        Arc::clone(&field.name),
                        LazyField::deferred(field.default.clone(), registry.clone()),
                    )
                });
                Value::Object(Object::from_fields(discriminator.chain(lazy)))
            }
            FactoryBody::Union { member } => {
                DefaultExpr::Factory(Arc::clone(member)).evaluate(registry)
            }
            FactoryBody::Enum { value } => Value::Enum(Arc::clone(value)),
        }
    }
}

/// Every factory of a schema, keyed by type name, in document order.
///
/// Cheap to clone; clones share the same factories.
#[derive(Clone, Default)]
pub struct FixtureRegistry {
    factories: Arc<IndexMap<Arc<str>, FactoryDefinition>>,
}

impl FixtureRegistry {
    /// Build a registry. When two factories share a name the first one is
    /// kept.
    #[must_use]
    pub fn from_factories(factories: impl IntoIterator<Item = FactoryDefinition>) -> Self {
        let mut map: IndexMap<Arc<str>, FactoryDefinition> = IndexMap::new();
        for factory in factories {
            if map.contains_key(&factory.name) {
                tracing::warn!(name = %factory.name, "Duplicate factory ignored");
                continue;
            }
            map.insert(Arc::clone(&factory.name), factory);
        }
        Self {
            factories: Arc::new(map),
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FactoryDefinition> {
        self.factories.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Call the named factory.
    #[must_use]
    pub fn instantiate(&self, name: &str) -> Option<Value> {
        self.get(name).map(|factory| factory.instantiate(self))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(AsRef::as_ref)
    }

    pub fn factories(&self) -> impl Iterator<Item = &FactoryDefinition> {
        self.factories.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl fmt::Debug for FixtureRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixtureRegistry")
            .field("factories", &self.factories.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scalar(name: &str, expr: DefaultExpr) -> FactoryDefinition {
        FactoryDefinition {
            name: Arc::from(name),
            kind: TypeDefKind::Scalar,
            body: FactoryBody::Scalar(expr),
        }
    }

    #[test]
    fn test_first_factory_wins() {
        let registry = FixtureRegistry::from_factories([
            scalar("URI", DefaultExpr::EmptyString),
            scalar("URI", DefaultExpr::ZeroInt),
        ]);
        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.instantiate("URI").as_ref().and_then(Value::as_str),
            Some("")
        );
    }

    #[test]
    fn test_unknown_name() {
        let registry = FixtureRegistry::default();
        assert!(registry.is_empty());
        assert!(registry.instantiate("Repository").is_none());
    }

    #[test]
    fn test_record_typename_is_first_field() {
        let registry = FixtureRegistry::from_factories([FactoryDefinition {
            name: Arc::from("User"),
            kind: TypeDefKind::Object,
            body: FactoryBody::Record {
                typename: Some(Arc::from("User")),
                fields: vec![FieldDefault {
                    name: Arc::from("login"),
                    default: DefaultExpr::EmptyString,
                }],
            },
        }]);

        let user = registry.instantiate("User").unwrap_or_default();
        let user = user.as_object().unwrap();
        assert_eq!(user.keys().collect::<Vec<_>>(), vec!["__typename", "login"]);
        assert_eq!(user.typename(), Some("User"));
        assert!(!user.is_resolved("login"));
    }

    #[test]
    fn test_debug_lists_names() {
        let registry = FixtureRegistry::from_factories([scalar("URI", DefaultExpr::EmptyString)]);
        assert_eq!(
            format!("{registry:?}"),
            r#"FixtureRegistry { factories: ["URI"] }"#
        );
    }
}
