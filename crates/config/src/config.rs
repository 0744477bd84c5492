use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Plugin configuration as it appears in a config file.
///
/// Mirrors the options GraphQL Code Generator passes to a plugin: the shared
/// `scalars` and `namingConvention` options plus the plugin's own `fixtures`
/// section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixturesPluginConfig {
    /// Scalar name to TypeScript type mapping
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scalars: Option<ScalarsConfig>,

    /// How type names are converted when referenced through the type module
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub naming_convention: Option<NamingConvention>,

    /// Fixture-specific options
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixtures: Option<FixturesOptions>,
}

/// The `scalars` option.
///
/// Code Generator also accepts a module path here; that form carries no
/// per-scalar information and is ignored for default resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScalarsConfig {
    Map(IndexMap<String, ScalarType>),
    Module(String),
}

/// A scalar's TypeScript type, either shared or split by direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScalarType {
    Single(String),
    InputOutput { input: String, output: String },
}

impl ScalarType {
    /// The type used for values produced by the schema.
    #[must_use]
    pub fn output(&self) -> &str {
        match self {
            Self::Single(ty) => ty,
            Self::InputOutput { output, .. } => output,
        }
    }
}

/// The `fixtures` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixturesOptions {
    /// Import path of the generated type declarations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_definition_module: Option<String>,

    /// Scalar name to literal default-value source text
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub scalar_defaults: IndexMap<String, String>,

    /// Emit the copy-on-write recipe accessor
    #[serde(default)]
    pub immer: bool,
}

/// Naming convention applied to type names rendered through the type module.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NamingConvention {
    /// `change-case` style PascalCase, applied per underscore-separated segment
    #[default]
    #[serde(rename = "pascalCase", alias = "change-case-all#pascalCase")]
    PascalCase,
    /// Names are used exactly as declared
    #[serde(rename = "keep")]
    Keep,
}

/// Primitive shape of a scalar, derived from its configured TypeScript type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarShape {
    String,
    Number,
    Other,
}

impl ScalarShape {
    #[must_use]
    pub fn from_type_name(ty: &str) -> Self {
        match ty.trim() {
            "string" => Self::String,
            "number" => Self::Number,
            _ => Self::Other,
        }
    }
}

/// Resolved options consumed by fixture generation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixturesConfig {
    pub type_definition_module: Option<String>,
    pub scalar_defaults: IndexMap<String, String>,
    pub immer: bool,
    pub scalar_aliases: IndexMap<String, ScalarShape>,
    pub naming_convention: NamingConvention,
}

impl FixturesConfig {
    /// The configured default literal for a scalar.
    ///
    /// Blank literals count as unset.
    #[must_use]
    pub fn scalar_default(&self, name: &str) -> Option<&str> {
        self.scalar_defaults
            .get(name)
            .map(String::as_str)
            .filter(|source| !source.trim().is_empty())
    }

    /// The primitive shape a scalar is aliased to, `Other` when unmapped.
    #[must_use]
    pub fn scalar_shape(&self, name: &str) -> ScalarShape {
        self.scalar_aliases
            .get(name)
            .copied()
            .unwrap_or(ScalarShape::Other)
    }

    #[must_use]
    pub fn with_type_definition_module(mut self, module: impl Into<String>) -> Self {
        self.type_definition_module = Some(module.into());
        self
    }

    #[must_use]
    pub fn with_scalar_default(
        mut self,
        name: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        self.scalar_defaults.insert(name.into(), source.into());
        self
    }

    #[must_use]
    pub fn with_scalar_alias(mut self, name: impl Into<String>, shape: ScalarShape) -> Self {
        self.scalar_aliases.insert(name.into(), shape);
        self
    }

    #[must_use]
    pub const fn with_immer(mut self, immer: bool) -> Self {
        self.immer = immer;
        self
    }

    #[must_use]
    pub const fn with_naming_convention(mut self, convention: NamingConvention) -> Self {
        self.naming_convention = convention;
        self
    }
}

impl From<FixturesPluginConfig> for FixturesConfig {
    fn from(raw: FixturesPluginConfig) -> Self {
        let scalar_aliases = match raw.scalars {
            Some(ScalarsConfig::Map(scalars)) => scalars
                .iter()
                .map(|(name, ty)| (name.clone(), ScalarShape::from_type_name(ty.output())))
                .collect(),
            Some(ScalarsConfig::Module(module)) => {
                tracing::debug!(%module, "Scalars given as a module path, no aliases applied");
                IndexMap::new()
            }
            None => IndexMap::new(),
        };
        let fixtures = raw.fixtures.unwrap_or_default();

        Self {
            type_definition_module: fixtures.type_definition_module,
            scalar_defaults: fixtures.scalar_defaults,
            immer: fixtures.immer,
            scalar_aliases,
            naming_convention: raw.naming_convention.unwrap_or_default(),
        }
    }
}
