//! TypeScript module emission.
//!
//! The generated module has three parts: a prologue (imports and the opening
//! of `fixtureMap`), the factories, and an epilogue (the `fixture` accessor
//! and its default export). Factories read the same [`FactoryDefinition`]s
//! the runtime registry is built from.
//!
//! [`FactoryDefinition`]: crate::FactoryDefinition

mod naming;
mod render;

pub use naming::convert_name;

use crate::build_registry;
use graphql_fixtures_config::FixturesConfig;
use graphql_fixtures_hir::SchemaDocument;
use render::FactoryRenderer;
use std::fmt;

/// Emitted module text, split the way code generator plugins return it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PluginOutput {
    pub prepend: Vec<String>,
    pub content: String,
    pub append: Vec<String>,
}

impl fmt::Display for PluginOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.prepend.join("\n"))?;
        writeln!(f, "{}", self.content)?;
        f.write_str(&self.append.join("\n"))
    }
}

/// Emit the fixtures module for a schema.
#[tracing::instrument(skip_all, fields(definitions = document.len(), immer = config.immer))]
pub fn generate(document: &SchemaDocument, config: &FixturesConfig) -> PluginOutput {
    let registry = build_registry(document, config);
    let renderer = FactoryRenderer::new(config, &registry);

    let body = registry
        .factories()
        .map(|factory| renderer.render(factory))
        .collect::<Vec<_>>()
        .join("\n");

    tracing::debug!(factories = registry.len(), "Module emitted");
    PluginOutput {
        prepend: prologue(config),
        content: indent(&body),
        append: epilogue(config.immer),
    }
}

fn prologue(config: &FixturesConfig) -> Vec<String> {
    let mut prepend = Vec::new();
    if config.immer {
        prepend.push("import produce from 'immer'".to_string());
        prepend.push("import { Produced } from 'immer/dist/internal'\n".to_string());
    }
    if let Some(module) = &config.type_definition_module {
        prepend.push(format!("import * as types from '{module}'\n"));
    }
    prepend.push("const fixtureMap = {".to_string());
    prepend
}

fn epilogue(immer: bool) -> Vec<String> {
    ["}".to_string(), accessor_definition(immer), "export default fixture".to_string()]
        .into_iter()
        .map(|line| line + "\n")
        .collect()
}

/// The `fixture` accessor. With immer it also takes an optional recipe and
/// applies it with `produce`.
fn accessor_definition(immer: bool) -> String {
    let mut generics = vec![
        "Name extends keyof typeof fixtureMap",
        "Fixture extends ReturnType<typeof fixtureMap[Name]>",
    ];
    let mut parameters = vec!["name: Name"];
    if immer {
        generics.push("ProduceReturn = void");
        parameters.push("recipe?: (draft: Fixture) => ProduceReturn");
    }
    let (return_type, return_statement) = if immer {
        (
            "Fixture | Produced<Fixture, ProduceReturn>",
            "return recipe ? produce(fixture, recipe) : fixture",
        )
    } else {
        ("Fixture", "return fixture")
    };

    format!(
        "const fixture = <\n  {}\n>(\n  {}\n): {return_type} => {{\n  const fixture = fixtureMap[name]() as Fixture\n  {return_statement}\n}}",
        generics.join(",\n  "),
        parameters.join(",\n  "),
    )
}

/// Indent every non-empty line by two spaces.
fn indent(text: &str) -> String {
    text.lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("  {line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prologue_variants() {
        assert_eq!(prologue(&FixturesConfig::default()), vec!["const fixtureMap = {"]);

        let config = FixturesConfig::default()
            .with_immer(true)
            .with_type_definition_module("./graphql");
        assert_eq!(
            prologue(&config),
            vec![
                "import produce from 'immer'",
                "import { Produced } from 'immer/dist/internal'\n",
                "import * as types from './graphql'\n",
                "const fixtureMap = {",
            ]
        );
    }

    #[test]
    fn test_plain_accessor() {
        insta::assert_snapshot!(accessor_definition(false), @r"
        const fixture = <
          Name extends keyof typeof fixtureMap,
          Fixture extends ReturnType<typeof fixtureMap[Name]>
        >(
          name: Name
        ): Fixture => {
          const fixture = fixtureMap[name]() as Fixture
          return fixture
        }
        ");
    }

    #[test]
    fn test_recipe_accessor() {
        insta::assert_snapshot!(accessor_definition(true), @r"
        const fixture = <
          Name extends keyof typeof fixtureMap,
          Fixture extends ReturnType<typeof fixtureMap[Name]>,
          ProduceReturn = void
        >(
          name: Name,
          recipe?: (draft: Fixture) => ProduceReturn
        ): Fixture | Produced<Fixture, ProduceReturn> => {
          const fixture = fixtureMap[name]() as Fixture
          return recipe ? produce(fixture, recipe) : fixture
        }
        ");
    }

    #[test]
    fn test_epilogue_lines_end_with_newline() {
        let append = epilogue(false);
        assert_eq!(append.len(), 3);
        assert_eq!(append[0], "}\n");
        assert_eq!(append[2], "export default fixture\n");
    }

    #[test]
    fn test_indent_skips_blank_lines() {
        assert_eq!(indent("a\n\n  b"), "  a\n\n    b");
    }
}
