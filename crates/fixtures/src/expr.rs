use crate::registry::FixtureRegistry;
use crate::value::{Object, Value};
use std::fmt;
use std::sync::Arc;

/// The default a field or scalar factory produces.
#[derive(Debug, Clone, PartialEq)]
pub enum DefaultExpr {
    /// No value
    Absent,
    EmptyList,
    EmptyString,
    ZeroInt,
    ZeroFloat,
    False,
    EmptyObject,
    /// Configured source text
    Literal(Literal),
    /// The result of the named factory
    Factory(Arc<str>),
}

impl DefaultExpr {
    #[must_use]
    pub fn factory(name: &str) -> Self {
        Self::Factory(Arc::from(name))
    }

    /// Produce a fresh value. Factory calls resolve against `registry`; a
    /// name with no factory yields [`Value::Absent`].
    #[must_use]
    pub fn evaluate(&self, registry: &FixtureRegistry) -> Value {
        match self {
            Self::Absent => Value::Absent,
            Self::EmptyList => Value::List(Vec::new()),
            Self::EmptyString => Value::from(""),
            Self::ZeroInt => Value::Int(0),
            Self::ZeroFloat => Value::Float(0.0),
            Self::False => Value::Boolean(false),
            Self::EmptyObject => Value::Object(Object::new()),
            Self::Literal(literal) => literal.to_value(),
            Self::Factory(name) => registry.instantiate(name).unwrap_or_else(|| {
                tracing::debug!(factory = %name, "No factory registered, value is absent");
                Value::Absent
            }),
        }
    }
}

/// Configured default source text, interpreted once.
///
/// Single-quoted and backtick strings become strings, JSON literals become
/// the matching value, `undefined` is absent and a parenthesized literal is
/// read without its parentheses. Anything else is kept verbatim as
/// [`Value::Raw`].
#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    source: Arc<str>,
    parsed: Parsed,
}

#[derive(Debug, Clone, PartialEq)]
enum Parsed {
    Undefined,
    Quoted(Arc<str>),
    Json(serde_json::Value),
    Raw,
}

impl Literal {
    #[must_use]
    pub fn parse(source: &str) -> Self {
        let parsed = parse_source(source.trim());
        if parsed == Parsed::Raw {
            tracing::debug!(source, "Scalar default kept as raw source text");
        }
        Self {
            source: Arc::from(source),
            parsed,
        }
    }

    /// The text as configured.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub fn to_value(&self) -> Value {
        match &self.parsed {
            Parsed::Undefined => Value::Absent,
            Parsed::Quoted(s) => Value::String(Arc::clone(s)),
            Parsed::Json(json) => json_to_value(json),
            Parsed::Raw => Value::Raw(Arc::clone(&self.source)),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

fn parse_source(source: &str) -> Parsed {
    if source == "undefined" {
        return Parsed::Undefined;
    }
    if let Some(inner) = source
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
    {
        return parse_source(inner.trim());
    }
    if let Some(s) = unquote(source, '\'').or_else(|| template(source)) {
        return Parsed::Quoted(Arc::from(s));
    }
    serde_json::from_str(source).map_or(Parsed::Raw, Parsed::Json)
}

/// Contents of a `q`-quoted string with no unescaped `q` inside.
///
/// Escapes follow JavaScript string literals. A malformed `\x` or `\u`
/// escape makes the text unreadable as a string.
fn unquote(source: &str, q: char) -> Option<String> {
    let inner = source.strip_prefix(q)?.strip_suffix(q)?;
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next()? {
                'n' => out.push('\n'),
                't' => out.push('\t'),
                'r' => out.push('\r'),
                'b' => out.push('\u{8}'),
                'f' => out.push('\u{c}'),
                'v' => out.push('\u{b}'),
                '0' if !chars.peek().is_some_and(char::is_ascii_digit) => out.push('\0'),
                'x' => out.push(hex_escape(&mut chars, 2)?),
                'u' if chars.peek() == Some(&'{') => {
                    chars.next();
                    let mut digits = String::new();
                    loop {
                        match chars.next()? {
                            '}' => break,
                            c => digits.push(c),
                        }
                    }
                    out.push(code_point(&digits)?);
                }
                'u' => out.push(hex_escape(&mut chars, 4)?),
                '\n' => {}
                other => out.push(other),
            },
            c if c == q => return None,
            c => out.push(c),
        }
    }
    Some(out)
}

fn hex_escape(chars: &mut impl Iterator<Item = char>, len: usize) -> Option<char> {
    let digits: String = chars.take(len).collect();
    if digits.len() != len {
        return None;
    }
    code_point(&digits)
}

fn code_point(digits: &str) -> Option<char> {
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(digits, 16).ok().and_then(char::from_u32)
}

/// A template literal without substitutions.
fn template(source: &str) -> Option<String> {
    let s = unquote(source, '`')?;
    (!source.contains("${")).then_some(s)
}

fn json_to_value(json: &serde_json::Value) -> Value {
    match json {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Boolean(*b),
        serde_json::Value::Number(n) => n
            .as_i64()
            .map_or_else(|| Value::Float(n.as_f64().unwrap_or_default()), Value::Int),
        serde_json::Value::String(s) => Value::from(s.as_str()),
        serde_json::Value::Array(items) => Value::List(items.iter().map(json_to_value).collect()),
        serde_json::Value::Object(map) => {
            let mut obj = Object::new();
            for (key, value) in map {
                obj.set(key.as_str(), json_to_value(value));
            }
            Value::Object(obj)
        }
    }
}
