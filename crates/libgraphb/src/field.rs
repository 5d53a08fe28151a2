use crate::Argument;
use crate::BooleanClause;
use crate::BooleanClauseError;
use crate::NameKind;
use crate::OperationBuildError;
use crate::RenderToken;
use crate::RenderTokenStream;
use crate::ToRenderTokens;
use crate::Value;
use crate::name_validation::is_valid_name;
use inherent::inherent;
use serde::Deserialize;
use serde::Serialize;
use std::fmt;

/// Name of the argument that carries a function field's selector.
const FUNCTION_FIELD_ARGUMENT: &str = "func";

/// A named selection, optionally with arguments, a `@filter` clause and
/// child selections.
///
/// Renders as:
///
/// ```text
/// [alias:]name[(arguments)][@filter(predicates)][{children}]
/// ```
///
/// Each bracketed part is omitted entirely when empty, so a field never
/// renders empty parens or empty braces.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Field {
    #[serde(default)]
    alias: Option<String>,

    #[serde(default)]
    argument_operators: Vec<String>,

    #[serde(default)]
    arguments: Vec<Argument>,

    #[serde(default)]
    children: Vec<Field>,

    #[serde(default)]
    filter: Option<BooleanClause>,

    #[serde(default)]
    is_function_field: bool,

    name: String,
}

impl Field {
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn arguments(&self) -> &[Argument] {
        self.arguments.as_slice()
    }

    /// The boolean operators joining [`arguments()`](Field::arguments), if
    /// they were set with
    /// [`with_boolean_arguments()`](Field::with_boolean_arguments). Empty when
    /// the arguments are comma-separated.
    pub fn argument_operators(&self) -> &[String] {
        self.argument_operators.as_slice()
    }

    pub fn children(&self) -> &[Field] {
        self.children.as_slice()
    }

    /// Find the first direct child named `name`. Descendants of children are
    /// not searched.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.children.iter().find(|child| child.name == name)
    }

    pub fn filter(&self) -> Option<&BooleanClause> {
        self.filter.as_ref()
    }

    /// A Dgraph function field, e.g. the `me` in `{me(func:eq(...)){...}}`.
    ///
    /// Arguments added with [`with_argument()`](Field::with_argument) are
    /// wrapped as the field's `func:` selector.
    pub fn function(name: impl Into<String>) -> Self {
        Self {
            is_function_field: true,
            ..Self::new(name)
        }
    }

    pub fn is_function_field(&self) -> bool {
        self.is_function_field
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Check this field and every descendant: names and aliases against the
    /// GraphQL name grammar, and boolean arguments for one more argument than
    /// operators.
    pub fn validate(&self) -> Result<(), OperationBuildError> {
        self.validate_with(true)
    }

    /// Like [`validate()`](Field::validate), with name checks optional. Graph
    /// pattern documents skip them but still need consistent boolean
    /// arguments.
    pub(crate) fn validate_with(
        &self,
        check_names: bool,
    ) -> Result<(), OperationBuildError> {
        if check_names && !is_valid_name(&self.name) {
            return Err(OperationBuildError::InvalidName {
                kind: NameKind::Field,
                name: self.name.to_owned(),
            });
        }

        if check_names
            && let Some(alias) = &self.alias
            && !is_valid_name(alias) {
            return Err(OperationBuildError::InvalidName {
                kind: NameKind::Alias,
                name: alias.to_owned(),
            });
        }

        if !self.argument_operators.is_empty()
            && self.argument_operators.len() + 1 != self.arguments.len() {
            return Err(OperationBuildError::BooleanArguments {
                field: self.name.to_owned(),
                source: BooleanClauseError::OperatorCountMismatch {
                    operators: self.argument_operators.len(),
                    predicates: self.arguments.len(),
                },
            });
        }

        self.children
            .iter()
            .try_for_each(|child| child.validate_with(check_names))
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Add an [`Argument`] after any previously added arguments.
    pub fn with_argument(mut self, argument: Argument) -> Self {
        let argument =
            if self.is_function_field {
                Argument::new(FUNCTION_FIELD_ARGUMENT, Value::from(argument))
            } else {
                argument
            };
        self.arguments.push(argument);
        self
    }

    pub fn with_arguments(
        self,
        arguments: impl IntoIterator<Item = Argument>,
    ) -> Self {
        arguments.into_iter().fold(self, Field::with_argument)
    }

    /// Use a boolean combination of predicates as this field's arguments,
    /// rendered as `name(p1 OP p2 ...)`.
    ///
    /// Replaces any previously added arguments.
    pub fn with_boolean_arguments(mut self, clause: BooleanClause) -> Self {
        let BooleanClause { operators, predicates } = clause;
        self.argument_operators = operators;
        self.arguments = predicates;
        self
    }

    /// Add a child [`Field`] after any previously added children.
    pub fn with_field(mut self, field: Field) -> Self {
        self.children.push(field);
        self
    }

    /// Add a plain child [`Field`] for each of `names`, in order.
    pub fn with_field_names<S: Into<String>>(
        self,
        names: impl IntoIterator<Item = S>,
    ) -> Self {
        self.with_fields(names.into_iter().map(Field::new))
    }

    pub fn with_fields(mut self, fields: impl IntoIterator<Item = Field>) -> Self {
        self.children.extend(fields);
        self
    }

    /// Set this field's `@filter(...)` clause.
    pub fn with_filter(mut self, clause: BooleanClause) -> Self {
        self.filter = Some(clause);
        self
    }

    fn argument_tokens(&self) -> RenderTokenStream<'_> {
        let arguments = self.arguments.iter().map(Argument::render_tokens);
        if self.argument_operators.is_empty() {
            RenderTokenStream::separated(arguments, RenderToken::Comma)
        } else {
            RenderTokenStream::interleaved(
                arguments,
                self.argument_operators.iter().map(|op| {
                    RenderToken::BooleanOperator(op.as_str().into())
                }),
            )
        }
    }
}

#[inherent]
impl ToRenderTokens for Field {
    pub fn render_tokens(&self) -> RenderTokenStream<'_> {
        let mut parts = Vec::with_capacity(4);

        parts.push(match &self.alias {
            Some(alias) => RenderTokenStream::new([
                RenderToken::name(alias),
                RenderToken::Colon,
                RenderToken::name(&self.name),
            ]),
            None => RenderTokenStream::once(RenderToken::name(&self.name)),
        });

        if !self.arguments.is_empty() {
            parts.push(RenderTokenStream::concat([
                RenderTokenStream::once(RenderToken::ParenOpen),
                self.argument_tokens(),
                RenderTokenStream::once(RenderToken::ParenClose),
            ]));
        }

        if let Some(filter) = &self.filter {
            parts.push(RenderTokenStream::concat([
                RenderTokenStream::new([
                    RenderToken::FilterDirective,
                    RenderToken::ParenOpen,
                ]),
                filter.render_tokens(),
                RenderTokenStream::once(RenderToken::ParenClose),
            ]));
        }

        if !self.children.is_empty() {
            parts.push(RenderTokenStream::delimited(
                RenderToken::CurlyBraceOpen,
                self.children.iter().map(Field::render_tokens),
                RenderToken::Comma,
                RenderToken::CurlyBraceClose,
            ));
        }

        RenderTokenStream::concat(parts)
    }

    pub fn render(&self) -> String;
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in self.render_tokens() {
            write!(f, "{token}")?;
        }
        Ok(())
    }
}
