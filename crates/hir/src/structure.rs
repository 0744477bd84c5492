use apollo_compiler::ast;
use apollo_compiler::Node;
use std::fmt;
use std::sync::Arc;

/// A named top-level declaration of a type-system document
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeDefinition {
    pub name: Arc<str>,
    pub kind: TypeDefKind,
    /// Fields of objects, interfaces and input objects
    pub fields: Vec<FieldDefinition>,
    /// Enum values in source order
    pub enum_values: Vec<Arc<str>>,
    /// Union member type names in source order
    pub union_members: Vec<Arc<str>>,
    pub description: Option<Arc<str>>,
    /// Whether this definition came from a type extension (`extend type`)
    pub is_extension: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeDefKind {
    Scalar,
    Object,
    Interface,
    Union,
    Enum,
    InputObject,
    Directive,
}

impl TypeDefKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scalar => "scalar",
            Self::Object => "object",
            Self::Interface => "interface",
            Self::Union => "union",
            Self::Enum => "enum",
            Self::InputObject => "input object",
            Self::Directive => "directive",
        }
    }
}

impl fmt::Display for TypeDefKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A field of an object, interface or input object
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldDefinition {
    pub name: Arc<str>,
    pub ty: TypeNode,
}

/// Reference to a type, with list and non-null wrappers kept as nodes
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeNode {
    Named(Arc<str>),
    List(Box<TypeNode>),
    NonNull(Box<TypeNode>),
}

impl TypeNode {
    #[must_use]
    pub fn named(name: &str) -> Self {
        Self::Named(Arc::from(name))
    }

    #[must_use]
    pub fn list(inner: Self) -> Self {
        Self::List(Box::new(inner))
    }

    #[must_use]
    pub fn non_null(inner: Self) -> Self {
        Self::NonNull(Box::new(inner))
    }

    /// The named type at the bottom of all wrappers.
    #[must_use]
    pub fn inner_name(&self) -> &str {
        match self {
            Self::Named(name) => name,
            Self::List(inner) | Self::NonNull(inner) => inner.inner_name(),
        }
    }

    #[must_use]
    pub const fn is_non_null(&self) -> bool {
        matches!(self, Self::NonNull(_))
    }
}

impl fmt::Display for TypeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => write!(f, "{name}"),
            Self::List(inner) => write!(f, "[{inner}]"),
            Self::NonNull(inner) => write!(f, "{inner}!"),
        }
    }
}

impl From<&ast::Type> for TypeNode {
    fn from(ty: &ast::Type) -> Self {
        match ty {
            ast::Type::Named(name) => Self::named(name.as_str()),
            ast::Type::NonNullNamed(name) => Self::non_null(Self::named(name.as_str())),
            ast::Type::List(inner) => Self::list(Self::from(inner.as_ref())),
            ast::Type::NonNullList(inner) => {
                Self::non_null(Self::list(Self::from(inner.as_ref())))
            }
        }
    }
}

/// Lower one AST definition. Returns `None` for definitions that carry no
/// type-system declaration (schema definitions, operations, fragments).
pub(crate) fn extract_definition(definition: &ast::Definition) -> Option<TypeDefinition> {
    let def = match definition {
        ast::Definition::ScalarTypeDefinition(scalar) => extract_scalar_type(scalar),
        ast::Definition::ObjectTypeDefinition(obj) => extract_object_type(obj),
        ast::Definition::InterfaceTypeDefinition(iface) => extract_interface_type(iface),
        ast::Definition::UnionTypeDefinition(union_def) => extract_union_type(union_def),
        ast::Definition::EnumTypeDefinition(enum_def) => extract_enum_type(enum_def),
        ast::Definition::InputObjectTypeDefinition(input) => extract_input_object_type(input),
        ast::Definition::DirectiveDefinition(directive) => extract_directive(directive),
        ast::Definition::ScalarTypeExtension(ext) => {
            TypeDefinition::extension(ext.name.as_str(), TypeDefKind::Scalar)
        }
        ast::Definition::ObjectTypeExtension(ext) => TypeDefinition {
            fields: ext.fields.iter().map(|f| extract_field(f)).collect(),
            ..TypeDefinition::extension(ext.name.as_str(), TypeDefKind::Object)
        },
        ast::Definition::InterfaceTypeExtension(ext) => TypeDefinition {
            fields: ext.fields.iter().map(|f| extract_field(f)).collect(),
            ..TypeDefinition::extension(ext.name.as_str(), TypeDefKind::Interface)
        },
        ast::Definition::UnionTypeExtension(ext) => TypeDefinition {
            union_members: ext.members.iter().map(|m| Arc::from(m.as_str())).collect(),
            ..TypeDefinition::extension(ext.name.as_str(), TypeDefKind::Union)
        },
        ast::Definition::EnumTypeExtension(ext) => TypeDefinition {
            enum_values: ext
                .values
                .iter()
                .map(|v| Arc::from(v.value.as_str()))
                .collect(),
            ..TypeDefinition::extension(ext.name.as_str(), TypeDefKind::Enum)
        },
        ast::Definition::InputObjectTypeExtension(ext) => TypeDefinition {
            fields: ext.fields.iter().map(|f| extract_input_field(f)).collect(),
            ..TypeDefinition::extension(ext.name.as_str(), TypeDefKind::InputObject)
        },
        _ => return None,
    };
    Some(def)
}

impl TypeDefinition {
    fn new(name: &str, kind: TypeDefKind, description: Option<&Node<str>>) -> Self {
        Self {
            name: Arc::from(name),
            kind,
            fields: Vec::new(),
            enum_values: Vec::new(),
            union_members: Vec::new(),
            description: description.map(|d| Arc::from(&**d)),
            is_extension: false,
        }
    }

    fn extension(name: &str, kind: TypeDefKind) -> Self {
        Self {
            is_extension: true,
            ..Self::new(name, kind, None)
        }
    }

    /// Append the contents of an extension of the same type.
    pub(crate) fn merge_extension(&mut self, ext: Self) {
        self.fields.extend(ext.fields);
        self.enum_values.extend(ext.enum_values);
        self.union_members.extend(ext.union_members);
    }
}

fn extract_scalar_type(scalar: &Node<ast::ScalarTypeDefinition>) -> TypeDefinition {
    TypeDefinition::new(
        scalar.name.as_str(),
        TypeDefKind::Scalar,
        scalar.description.as_ref(),
    )
}

fn extract_object_type(obj: &Node<ast::ObjectTypeDefinition>) -> TypeDefinition {
    TypeDefinition {
        fields: obj.fields.iter().map(|f| extract_field(f)).collect(),
        ..TypeDefinition::new(
            obj.name.as_str(),
            TypeDefKind::Object,
            obj.description.as_ref(),
        )
    }
}

fn extract_interface_type(iface: &Node<ast::InterfaceTypeDefinition>) -> TypeDefinition {
    TypeDefinition {
        fields: iface.fields.iter().map(|f| extract_field(f)).collect(),
        ..TypeDefinition::new(
            iface.name.as_str(),
            TypeDefKind::Interface,
            iface.description.as_ref(),
        )
    }
}

fn extract_union_type(union_def: &Node<ast::UnionTypeDefinition>) -> TypeDefinition {
    TypeDefinition {
        union_members: union_def
            .members
            .iter()
            .map(|m| Arc::from(m.as_str()))
            .collect(),
        ..TypeDefinition::new(
            union_def.name.as_str(),
            TypeDefKind::Union,
            union_def.description.as_ref(),
        )
    }
}

fn extract_enum_type(enum_def: &Node<ast::EnumTypeDefinition>) -> TypeDefinition {
    TypeDefinition {
        enum_values: enum_def
            .values
            .iter()
            .map(|v| Arc::from(v.value.as_str()))
            .collect(),
        ..TypeDefinition::new(
            enum_def.name.as_str(),
            TypeDefKind::Enum,
            enum_def.description.as_ref(),
        )
    }
}

fn extract_input_object_type(input: &Node<ast::InputObjectTypeDefinition>) -> TypeDefinition {
    TypeDefinition {
        fields: input.fields.iter().map(|f| extract_input_field(f)).collect(),
        ..TypeDefinition::new(
            input.name.as_str(),
            TypeDefKind::InputObject,
            input.description.as_ref(),
        )
    }
}

fn extract_directive(directive: &Node<ast::DirectiveDefinition>) -> TypeDefinition {
    TypeDefinition::new(
        directive.name.as_str(),
        TypeDefKind::Directive,
        directive.description.as_ref(),
    )
}

fn extract_field(field: &ast::FieldDefinition) -> FieldDefinition {
    FieldDefinition {
        name: Arc::from(field.name.as_str()),
        ty: TypeNode::from(&field.ty),
    }
}

fn extract_input_field(field: &ast::InputValueDefinition) -> FieldDefinition {
    FieldDefinition {
        name: Arc::from(field.name.as_str()),
        ty: TypeNode::from(&*field.ty),
    }
}
