use crate::produce::{produce, RecipeOutput};
use crate::registry::FixtureRegistry;
use crate::value::Value;
use graphql_fixtures_config::FixturesConfig;

/// Fixture lookup by type name.
#[derive(Debug, Clone)]
pub struct PlainAccessor {
    registry: FixtureRegistry,
}

impl PlainAccessor {
    #[must_use]
    pub fn new(registry: FixtureRegistry) -> Self {
        Self { registry }
    }

    /// A fresh fixture of the named type, `None` if the type has no factory.
    #[must_use]
    pub fn fixture(&self, name: &str) -> Option<Value> {
        self.registry.instantiate(name)
    }

    #[must_use]
    pub fn registry(&self) -> &FixtureRegistry {
        &self.registry
    }
}

/// Fixture lookup that can also apply a recipe to the fresh fixture.
#[derive(Debug, Clone)]
pub struct RecipeAccessor {
    registry: FixtureRegistry,
}

impl RecipeAccessor {
    #[must_use]
    pub fn new(registry: FixtureRegistry) -> Self {
        Self { registry }
    }

    #[must_use]
    pub fn fixture(&self, name: &str) -> Option<Value> {
        self.registry.instantiate(name)
    }

    /// A fresh fixture with `recipe` applied, see [`produce`].
    pub fn fixture_with<R, F>(&self, name: &str, recipe: F) -> Option<Value>
    where
        R: RecipeOutput,
        F: FnOnce(&mut Value) -> R,
    {
        let fixture = self.registry.instantiate(name)?;
        Some(produce(&fixture, recipe))
    }

    #[must_use]
    pub fn registry(&self) -> &FixtureRegistry {
        &self.registry
    }
}

/// The accessor selected by the `immer` option.
#[derive(Debug, Clone)]
pub enum Accessor {
    Plain(PlainAccessor),
    Recipe(RecipeAccessor),
}

impl Accessor {
    #[must_use]
    pub fn new(registry: FixtureRegistry, config: &FixturesConfig) -> Self {
        if config.immer {
            Self::Recipe(RecipeAccessor::new(registry))
        } else {
            Self::Plain(PlainAccessor::new(registry))
        }
    }

    #[must_use]
    pub fn fixture(&self, name: &str) -> Option<Value> {
        match self {
            Self::Plain(accessor) => accessor.fixture(name),
            Self::Recipe(accessor) => accessor.fixture(name),
        }
    }

    #[must_use]
    pub const fn as_recipe(&self) -> Option<&RecipeAccessor> {
        match self {
            Self::Recipe(accessor) => Some(accessor),
            Self::Plain(_) => None,
        }
    }
}
