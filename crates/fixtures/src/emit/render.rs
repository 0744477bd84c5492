use super::naming::convert_name;
use crate::expr::DefaultExpr;
use crate::registry::{FactoryBody, FactoryDefinition, FieldDefault, FixtureRegistry};
use graphql_fixtures_config::FixturesConfig;
use std::fmt::Write;
use std::sync::Arc;

/// Renders factories as members of the `fixtureMap` object literal.
pub(super) struct FactoryRenderer<'a> {
    config: &'a FixturesConfig,
    registry: &'a FixtureRegistry,
}

impl<'a> FactoryRenderer<'a> {
    pub(super) const fn new(config: &'a FixturesConfig, registry: &'a FixtureRegistry) -> Self {
        Self { config, registry }
    }

    /// Type reference for a named type.
    fn type_ref(&self, name: &str) -> String {
        if self.config.type_definition_module.is_some() {
            format!("types.{}", convert_name(name, self.config.naming_convention))
        } else {
            name.to_string()
        }
    }

    fn scalar_type_ref(&self, name: &str) -> String {
        format!("{}['{name}']", self.type_ref("Scalars"))
    }

    fn expr(&self, expr: &DefaultExpr) -> String {
        match expr {
            DefaultExpr::Absent => "undefined".to_string(),
            DefaultExpr::EmptyList => "[]".to_string(),
            DefaultExpr::EmptyString => "''".to_string(),
            DefaultExpr::ZeroInt | DefaultExpr::ZeroFloat => "0".to_string(),
            DefaultExpr::False => "false".to_string(),
            DefaultExpr::EmptyObject => "({})".to_string(),
            DefaultExpr::Literal(literal) => literal.source().trim().to_string(),
            DefaultExpr::Factory(name) if self.registry.contains(name) => {
                format!("fixtureMap.{name}()")
            }
            DefaultExpr::Factory(name) => {
                tracing::debug!(factory = %name, "Reference to a type without a factory");
                "undefined".to_string()
            }
        }
    }

    /// One factory, unindented, ending with a trailing comma.
    pub(super) fn render(&self, factory: &FactoryDefinition) -> String {
        let name = &factory.name;
        match &factory.body {
            FactoryBody::Scalar(expr) => format!(
                "{name}(): {} {{\n  return {}\n}},",
                self.scalar_type_ref(name),
                self.expr(expr)
            ),
            FactoryBody::Union { member } => format!(
                "{name}(): {} {{\n  return {}\n}},",
                self.type_ref(name),
                self.expr(&DefaultExpr::Factory(Arc::clone(member)))
            ),
            FactoryBody::Enum { value } => {
                let ty = self.type_ref(name);
                format!("{name}(): {ty} {{\n  return '{value}' as {ty}\n}},")
            }
            FactoryBody::Record { typename, fields } => {
                self.render_record(name, typename.as_deref(), fields)
            }
        }
    }

    fn render_record(&self, name: &str, typename: Option<&str>, fields: &[FieldDefault]) -> String {
        let ty = self.type_ref(name);
        let mut out = String::new();
        let _ = writeln!(out, "{name}(): {ty} {{");
        match typename {
            Some(typename) => {
                let _ = writeln!(out, "  const fixture: Partial<{ty}> = {{");
                let _ = writeln!(out, "    __typename: '{typename}',");
                out.push_str("  }\n");
            }
            None => {
                let _ = writeln!(out, "  const fixture: Partial<{ty}> = {{}}");
            }
        }
        for field in fields {
            self.render_field(&mut out, field);
        }
        let _ = write!(out, "  return fixture as {ty}\n}},");
        out
    }

    /// A getter that computes the default on first read and caches it in a
    /// hidden `__resolved_<field>` slot, plus a setter writing that slot.
    fn render_field(&self, out: &mut String, field: &FieldDefault) {
        let name = &field.name;
        let slot = format!("__resolved_{name}");
        let default = self.expr(&field.default);
        let _ = write!(
            out,
            "  Object.defineProperties(fixture, {{
    {name}: {{
      enumerable: true,
      get(this: any) {{
        if (this.{slot} === undefined) {{
          this.{slot} = {default}
        }}
        return this.{slot}
      }},
      set(this: any, value: unknown) {{
        this.{slot} = value
      }},
    }},
    {slot}: {{
      value: undefined,
      writable: true,
    }},
  }})
"
        );
    }
}
