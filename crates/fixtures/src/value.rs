//! Fixture values.
//!
//! Objects produced by record factories hold their fields as lazy cells: a
//! field's default is computed on first read and the same value is returned on
//! every later read. Mutation goes through [`Object::get_mut`] and
//! [`Object::set`], which copy only the path being written, so a value that
//! shares structure with another is never changed behind its back.

use crate::expr::DefaultExpr;
use crate::registry::FixtureRegistry;
use indexmap::IndexMap;
use once_cell::sync::OnceCell;
use std::fmt;
use std::sync::Arc;

/// Name of the discriminator field on object fixtures.
pub const TYPENAME_FIELD: &str = "__typename";

/// A fixture value.
#[derive(Clone, Default)]
pub enum Value {
    /// No value. Nullable fields and unresolvable factory calls evaluate to
    /// this; it is distinct from an explicit [`Value::Null`].
    #[default]
    Absent,
    Null,
    Boolean(bool),
    Int(i64),
    Float(f64),
    String(Arc<str>),
    Enum(Arc<str>),
    List(Vec<Value>),
    Object(Object),
    /// Configured default source text that is not a plain literal, kept
    /// verbatim.
    Raw(Arc<str>),
}

impl Value {
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_enum(&self) -> Option<&str> {
        match self {
            Self::Enum(v) => Some(v),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_raw(&self) -> Option<&str> {
        match self {
            Self::Raw(source) => Some(source),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_list_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(obj) => Some(obj),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut Object> {
        match self {
            Self::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Follow a path of field names through nested objects.
    #[must_use]
    pub fn get_path(&self, path: &[&str]) -> Option<&Value> {
        path.iter()
            .try_fold(self, |value, name| value.as_object()?.get(name))
    }

    /// Mutable variant of [`Value::get_path`]. Every object on the path is
    /// copied if it is shared.
    pub fn get_path_mut(&mut self, path: &[&str]) -> Option<&mut Value> {
        path.iter()
            .try_fold(self, |value, name| value.as_object_mut()?.get_mut(name))
    }

    /// Convert to JSON, forcing lazy fields down to `depth` levels of object
    /// nesting. Objects past the limit keep only their `__typename`. Absent
    /// object fields are left out; absent list items become `null`.
    #[must_use]
    pub fn materialize(&self, depth: usize) -> serde_json::Value {
        match self {
            Self::Absent | Self::Null => serde_json::Value::Null,
            Self::Boolean(b) => serde_json::Value::Bool(*b),
            Self::Int(i) => serde_json::Value::from(*i),
            Self::Float(f) => serde_json::Value::from(*f),
            Self::String(s) | Self::Enum(s) | Self::Raw(s) => serde_json::Value::from(&**s),
            Self::List(items) => {
                serde_json::Value::Array(items.iter().map(|v| v.materialize(depth)).collect())
            }
            Self::Object(obj) => obj.materialize(depth),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => f.write_str("Absent"),
            Self::Null => f.write_str("Null"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x:?}"),
            Self::String(s) => write!(f, "{s:?}"),
            Self::Enum(v) => write!(f, "Enum({v})"),
            Self::List(items) => f.debug_list().entries(items).finish(),
            Self::Object(obj) => obj.fmt(f),
            Self::Raw(source) => write!(f, "Raw({source})"),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(Arc::from(s))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(Arc::from(s))
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::List(items)
    }
}

impl From<Object> for Value {
    fn from(obj: Object) -> Self {
        Self::Object(obj)
    }
}

/// A field whose value is computed on first read.
#[derive(Clone)]
pub(crate) struct LazyField {
    cell: OnceCell<Value>,
    deferred: Option<Deferred>,
}

#[derive(Clone)]
struct Deferred {
    expr: DefaultExpr,
    registry: FixtureRegistry,
}

impl LazyField {
    pub(crate) fn resolved(value: Value) -> Self {
        Self {
            cell: OnceCell::with_value(value),
            deferred: None,
        }
    }

    pub(crate) fn deferred(expr: DefaultExpr, registry: FixtureRegistry) -> Self {
        Self {
            cell: OnceCell::new(),
            deferred: Some(Deferred { expr, registry }),
        }
    }

    fn get(&self) -> &Value {
        self.cell.get_or_init(|| match &self.deferred {
            Some(deferred) => {
                tracing::trace!(expr = ?deferred.expr, "Resolving lazy field");
                deferred.expr.evaluate(&deferred.registry)
            }
            None => Value::Absent,
        })
    }

    fn get_mut(&mut self) -> Option<&mut Value> {
        self.get();
        self.deferred = None;
        self.cell.get_mut()
    }

    fn is_resolved(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl fmt::Debug for LazyField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.cell.get() {
            Some(value) => value.fmt(f),
            None => f.write_str("<unresolved>"),
        }
    }
}

/// An object fixture: ordered fields, each resolved at most once.
///
/// Cloning is cheap and the clone shares every field cell, including ones
/// not yet resolved. Writes through a clone copy the field map first.
#[derive(Clone, Default)]
pub struct Object {
    fields: Arc<IndexMap<Arc<str>, Arc<LazyField>>>,
}

impl Object {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_fields(fields: impl IntoIterator<Item = (Arc<str>, LazyField)>) -> Self {
        Self {
            fields: Arc::new(
                fields
                    .into_iter()
                    .map(|(name, field)| (name, Arc::new(field)))
                    .collect(),
            ),
        }
    }

    /// The `__typename` discriminator, present on object type fixtures.
    #[must_use]
    pub fn typename(&self) -> Option<&str> {
        self.get(TYPENAME_FIELD).and_then(Value::as_str)
    }

    /// Read a field, resolving its default on first access.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name).map(|field| field.get())
    }

    /// Mutable access to a field, resolving it first.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Value> {
        let fields = Arc::make_mut(&mut self.fields);
        let field = fields.get_mut(name)?;
        Arc::make_mut(field).get_mut()
    }

    /// Set a field. An existing field keeps its position; a new one is
    /// appended.
    pub fn set(&mut self, name: impl Into<Arc<str>>, value: impl Into<Value>) {
        let fields = Arc::make_mut(&mut self.fields);
        fields.insert(name.into(), Arc::new(LazyField::resolved(value.into())));
    }

    /// Remove a field, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        let fields = Arc::make_mut(&mut self.fields);
        let field = fields.shift_remove(name)?;
        let value = field.get().clone();
        Some(value)
    }

    #[must_use]
    pub fn contains_key(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Whether the field's value has been computed.
    #[must_use]
    pub fn is_resolved(&self, name: &str) -> bool {
        self.fields.get(name).is_some_and(|field| field.is_resolved())
    }

    /// Field names in declaration order, `__typename` first when present.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(AsRef::as_ref)
    }

    /// Fields in declaration order. Iterating resolves every field.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields
            .iter()
            .map(|(name, field)| (name.as_ref(), field.get()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Whether both objects share the same field storage.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.fields, &other.fields)
    }

    fn materialize(&self, depth: usize) -> serde_json::Value {
        let mut map = serde_json::Map::new();
        if depth == 0 {
            if let Some(typename) = self.typename() {
                map.insert(TYPENAME_FIELD.to_string(), serde_json::Value::from(typename));
            }
            return serde_json::Value::Object(map);
        }
        for (name, value) in self.iter() {
            if value.is_absent() {
                continue;
            }
            map.insert(name.to_string(), value.materialize(depth - 1));
        }
        serde_json::Value::Object(map)
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.fields.iter().map(|(name, field)| (name, &**field)))
            .finish()
    }
}
