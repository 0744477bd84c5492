//! Generic traversal of a type-system document.

use graphql_fixtures_hir::{SchemaDocument, TypeDefKind, TypeDefinition};

/// Per-kind handlers for [`walk`].
///
/// Each handler may return an output for the definition or `None` to skip
/// it. Directive definitions are skipped unless a visitor overrides
/// [`TypeSystemVisitor::directive`].
pub trait TypeSystemVisitor {
    type Output;

    fn scalar(&mut self, def: &TypeDefinition) -> Option<Self::Output>;
    fn object(&mut self, def: &TypeDefinition) -> Option<Self::Output>;
    fn interface(&mut self, def: &TypeDefinition) -> Option<Self::Output>;
    fn union(&mut self, def: &TypeDefinition) -> Option<Self::Output>;
    fn enum_type(&mut self, def: &TypeDefinition) -> Option<Self::Output>;
    fn input_object(&mut self, def: &TypeDefinition) -> Option<Self::Output>;

    fn directive(&mut self, _def: &TypeDefinition) -> Option<Self::Output> {
        None
    }
}

/// Visit every definition in document order, collecting the non-skipped
/// outputs in the same order.
#[tracing::instrument(skip_all, fields(definitions = document.len()))]
pub fn walk<V: TypeSystemVisitor>(document: &SchemaDocument, visitor: &mut V) -> Vec<V::Output> {
    let outputs: Vec<V::Output> = document
        .definitions()
        .iter()
        .filter_map(|def| {
            let output = match def.kind {
                TypeDefKind::Scalar => visitor.scalar(def),
                TypeDefKind::Object => visitor.object(def),
                TypeDefKind::Interface => visitor.interface(def),
                TypeDefKind::Union => visitor.union(def),
                TypeDefKind::Enum => visitor.enum_type(def),
                TypeDefKind::InputObject => visitor.input_object(def),
                TypeDefKind::Directive => visitor.directive(def),
            };
            if output.is_none() {
                tracing::debug!(name = %def.name, kind = %def.kind, "Skipped definition");
            }
            output
        })
        .collect();
    tracing::debug!(outputs = outputs.len(), "Walk complete");
    outputs
}
