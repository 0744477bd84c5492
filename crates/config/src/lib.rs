//! Configuration for GraphQL fixture generation.
//!
//! Config files follow the GraphQL Code Generator layout: plugin options live
//! either at the top level or under a `config:` key, and fixture-specific
//! options under `fixtures:`.
//!
//! ```yaml
//! config:
//!   scalars:
//!     DateTime: string
//!   fixtures:
//!     typeDefinitionModule: ./graphql
//!     scalarDefaults:
//!       URI: "'https://example.com'"
//!     immer: true
//! ```

mod config;
mod error;
mod loader;
mod validation;

pub use config::{
    FixturesConfig, FixturesOptions, FixturesPluginConfig, NamingConvention, ScalarShape,
    ScalarType, ScalarsConfig,
};
pub use error::{ConfigError, Result};
pub use loader::{find_config, load_config, load_config_from_str, CONFIG_FILES};
pub use validation::{validate, ConfigValidationError};
