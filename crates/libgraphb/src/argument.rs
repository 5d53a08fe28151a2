use crate::ArgumentTypeNotSupportedError;
use crate::RenderToken;
use crate::RenderTokenStream;
use crate::ToRenderTokens;
use crate::Value;
use inherent::inherent;
use serde::Deserialize;
use serde::Serialize;
use std::fmt;

/// The only function name whose rendering differs from every other function:
/// a unary existence predicate that takes a field name and nothing else.
const UNARY_PREDICATE_FUNCTION: &str = "has";

/// A named [`Value`], rendered either object-style (`name:value`) or
/// function-style (`name(field,value)`).
///
/// Function-style arguments are only produced by [`Argument::function`]. They
/// express Dgraph predicate calls on top of the same argument-list wire
/// format:
///
/// ```
/// use libgraphb::Argument;
///
/// let eq = Argument::function("eq", [Argument::string("name@en", "Alien")]);
/// assert_eq!(eq.render(), r#"eq(name@en,"Alien")"#);
///
/// let has = Argument::function("has", [Argument::string("director.film", "")]);
/// assert_eq!(has.render(), "has(director.film)");
/// ```
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Argument {
    name: String,
    value: Value,
    #[serde(default)]
    is_function_style: bool,
}

impl Argument {
    /// Coerce a dynamic JSON value into an object-style argument.
    ///
    /// See [`Value::try_from`] for the supported shapes. JSON has no regular
    /// expression type, so this never produces [`Value::Regex`]; use
    /// [`Argument::regex`] for a pattern.
    pub fn any(
        name: impl Into<String>,
        value: serde_json::Value,
    ) -> Result<Self, ArgumentTypeNotSupportedError> {
        Ok(Self::new(name, Value::try_from(value)?))
    }

    pub fn bool(name: impl Into<String>, value: bool) -> Self {
        Self::new(name, Value::Bool(value))
    }

    pub fn bool_list(
        name: impl Into<String>,
        values: impl IntoIterator<Item = bool>,
    ) -> Self {
        Self::new(name, Value::BoolList(values.into_iter().collect()))
    }

    /// A function-style argument: `name(...)`.
    ///
    /// `arguments` are rendered without braces, with each object separator
    /// (`:`) turned into a comma, so a single inner argument `field:"value"`
    /// becomes `name(field,"value")`. The `has` function is the one exception:
    /// rendering stops at the first separator, producing `has(field)` and
    /// discarding whatever value the inner argument carried.
    pub fn function(
        name: impl Into<String>,
        arguments: impl IntoIterator<Item = Argument>,
    ) -> Self {
        Self {
            name: name.into(),
            value: Value::Object(arguments.into_iter().collect()),
            is_function_style: true,
        }
    }

    pub fn int(name: impl Into<String>, value: i64) -> Self {
        Self::new(name, Value::Int(value))
    }

    pub fn int_list(
        name: impl Into<String>,
        values: impl IntoIterator<Item = i64>,
    ) -> Self {
        Self::new(name, Value::IntList(values.into_iter().collect()))
    }

    pub fn is_function_style(&self) -> bool {
        self.is_function_style
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// An object-style argument: `name:value`.
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            is_function_style: false,
        }
    }

    /// An object-style argument whose value is a nested object:
    /// `name:{a:1,b:2}`.
    pub fn object(
        name: impl Into<String>,
        arguments: impl IntoIterator<Item = Argument>,
    ) -> Self {
        Self::new(name, Value::Object(arguments.into_iter().collect()))
    }

    pub fn regex(name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self::new(name, Value::regex(pattern))
    }

    pub fn string(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, Value::String(value.into()))
    }

    pub fn string_list<S: Into<String>>(
        name: impl Into<String>,
        values: impl IntoIterator<Item = S>,
    ) -> Self {
        Self::new(
            name,
            Value::StringList(values.into_iter().map(Into::into).collect()),
        )
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}

#[inherent]
impl ToRenderTokens for Argument {
    pub fn render_tokens(&self) -> RenderTokenStream<'_> {
        let name = RenderTokenStream::once(RenderToken::name(&self.name));

        if !self.is_function_style {
            return RenderTokenStream::concat([
                name,
                RenderTokenStream::once(RenderToken::Colon),
                self.value.render_tokens(),
            ]);
        }

        RenderTokenStream::concat([
            name,
            RenderTokenStream::once(RenderToken::ParenOpen),
            RenderTokenStream::new(FunctionCallTokens {
                truncate_at_separator: self.name == UNARY_PREDICATE_FUNCTION,
                value_tokens: Some(self.value.render_tokens()),
            }),
            RenderTokenStream::once(RenderToken::ParenClose),
        ])
    }

    pub fn render(&self) -> String;
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in self.render_tokens() {
            write!(f, "{token}")?;
        }
        Ok(())
    }
}

/// Rewrites an object value's tokens into the body of a function call.
///
/// Object braces are dropped. Each object separator becomes a comma, unless
/// `truncate_at_separator` is set, in which case the value's stream is
/// dropped at the first separator and nothing further is produced.
struct FunctionCallTokens<'a> {
    truncate_at_separator: bool,
    /// `None` once the value's tokens are exhausted or abandoned.
    value_tokens: Option<RenderTokenStream<'a>>,
}

impl<'a> Iterator for FunctionCallTokens<'a> {
    type Item = RenderToken<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let token = match self.value_tokens.as_mut()?.next() {
                Some(token) => token,
                None => {
                    self.value_tokens = None;
                    return None;
                },
            };

            match token {
                token if token.is_object_delimiter() => continue,

                RenderToken::Colon if self.truncate_at_separator => {
                    self.value_tokens = None;
                    return None;
                },

                RenderToken::Colon => return Some(RenderToken::Comma),

                token => return Some(token),
            }
        }
    }
}
