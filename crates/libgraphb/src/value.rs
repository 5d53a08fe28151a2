use crate::Argument;
use crate::ArgumentTypeNotSupportedError;
use crate::RenderToken;
use crate::RenderTokenStream;
use crate::ToRenderTokens;
use inherent::inherent;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value as JsonValue;
use std::borrow::Cow;
use std::fmt;

/// The value half of an [`Argument`].
///
/// The set of variants is closed. Values from a dynamic source (e.g. JSON)
/// are coerced with [`Value::try_from`], which rejects anything outside this
/// set.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum Value {
    Bool(bool),
    Int(i64),
    String(String),

    /// A regular expression pattern. Rendered exactly like a string.
    Regex(String),

    BoolList(Vec<bool>),
    IntList(Vec<i64>),
    StringList(Vec<String>),

    /// A nested object, rendered as `{name:value,...}`.
    ///
    /// The same payload is used for the argument list of a function-style
    /// [`Argument`]; only the owning argument decides which way it renders.
    Object(Vec<Argument>),

    /// An argument used directly as a value, rendered as the argument itself.
    ///
    /// A function field's selector `func:eq(name,"x")` is an object-style
    /// `func` argument whose value is the function-style `eq` argument.
    Argument(Box<Argument>),
}

impl Value {
    pub fn regex(pattern: impl Into<String>) -> Self {
        Self::Regex(pattern.into())
    }

    fn list_from_json(items: &[JsonValue]) -> Option<Self> {
        match items.first() {
            // Every empty list renders as `[]`, so the element type is moot.
            None => Some(Self::StringList(vec![])),

            Some(JsonValue::Bool(_)) =>
                items.iter()
                    .map(JsonValue::as_bool)
                    .collect::<Option<Vec<_>>>()
                    .map(Self::BoolList),

            Some(JsonValue::Number(_)) =>
                items.iter()
                    .map(JsonValue::as_i64)
                    .collect::<Option<Vec<_>>>()
                    .map(Self::IntList),

            Some(JsonValue::String(_)) =>
                items.iter()
                    .map(|item| item.as_str().map(str::to_string))
                    .collect::<Option<Vec<_>>>()
                    .map(Self::StringList),

            Some(_) => None,
        }
    }
}

#[inherent]
impl ToRenderTokens for Value {
    pub fn render_tokens(&self) -> RenderTokenStream<'_> {
        match self {
            Self::Bool(value) =>
                RenderTokenStream::once(bool_literal(*value)),

            Self::Int(value) =>
                RenderTokenStream::once(int_literal(*value)),

            Self::String(value) | Self::Regex(value) =>
                RenderTokenStream::once(string_literal(value)),

            Self::BoolList(values) =>
                list_tokens(values.iter().map(|value| bool_literal(*value))),

            Self::IntList(values) =>
                list_tokens(values.iter().map(|value| int_literal(*value))),

            Self::StringList(values) =>
                list_tokens(values.iter().map(|value| string_literal(value))),

            Self::Object(arguments) => RenderTokenStream::delimited(
                RenderToken::CurlyBraceOpen,
                arguments.iter().map(Argument::render_tokens),
                RenderToken::Comma,
                RenderToken::CurlyBraceClose,
            ),

            Self::Argument(argument) => argument.render_tokens(),
        }
    }

    pub fn render(&self) -> String;
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

fn bool_literal<'a>(value: bool) -> RenderToken<'a> {
    RenderToken::Literal(Cow::Borrowed(if value { "true" } else { "false" }))
}

fn int_literal<'a>(value: i64) -> RenderToken<'a> {
    RenderToken::Literal(Cow::Owned(value.to_string()))
}

/// Callers are responsible for any escaping inside `value`; it is quoted
/// verbatim.
fn string_literal<'a>(value: &str) -> RenderToken<'a> {
    RenderToken::Literal(Cow::Owned(format!("\"{value}\"")))
}

fn list_tokens<'a>(
    elements: impl Iterator<Item = RenderToken<'a>> + 'a,
) -> RenderTokenStream<'a> {
    RenderTokenStream::delimited(
        RenderToken::SquareBracketOpen,
        elements.map(RenderTokenStream::once),
        RenderToken::Comma,
        RenderToken::SquareBracketClose,
    )
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<bool>> for Value {
    fn from(values: Vec<bool>) -> Self {
        Self::BoolList(values)
    }
}

impl From<Vec<i64>> for Value {
    fn from(values: Vec<i64>) -> Self {
        Self::IntList(values)
    }
}

impl From<Vec<String>> for Value {
    fn from(values: Vec<String>) -> Self {
        Self::StringList(values)
    }
}

impl From<Vec<&str>> for Value {
    fn from(values: Vec<&str>) -> Self {
        Self::StringList(values.into_iter().map(str::to_string).collect())
    }
}

impl From<Argument> for Value {
    fn from(argument: Argument) -> Self {
        Self::Argument(Box::new(argument))
    }
}

/// Coerce a dynamic JSON value.
///
/// Booleans, integers that fit in an `i64`, strings, and homogeneous arrays
/// of those are supported. Everything else (null, floats, objects, mixed or
/// nested arrays) is rejected with the offending value attached.
impl TryFrom<JsonValue> for Value {
    type Error = ArgumentTypeNotSupportedError;

    fn try_from(value: JsonValue) -> Result<Self, Self::Error> {
        let coerced = match &value {
            JsonValue::Bool(value) => Some(Self::Bool(*value)),
            JsonValue::Number(number) => number.as_i64().map(Self::Int),
            JsonValue::String(value) => Some(Self::String(value.to_owned())),
            JsonValue::Array(items) => Self::list_from_json(items),
            JsonValue::Null | JsonValue::Object(_) => None,
        };

        coerced.ok_or(ArgumentTypeNotSupportedError { value })
    }
}
