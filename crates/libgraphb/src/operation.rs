use crate::Field;
use crate::NameKind;
use crate::OperationBuildError;
use crate::OperationKind;
use crate::RenderToken;
use crate::RenderTokenStream;
use crate::RequestPayload;
use crate::RequestPayloadError;
use crate::ToRenderTokens;
use crate::name_validation::is_valid_name;
use inherent::inherent;
use serde::Deserialize;
use serde::Serialize;
use std::fmt;

/// The root of a document: an [`OperationKind`], an optional name, and the
/// top-level [`Field`]s.
///
/// ```
/// use libgraphb::Argument;
/// use libgraphb::Field;
/// use libgraphb::Operation;
///
/// let op = Operation::graph_pattern().with_field(
///     Field::function("all")
///         .with_argument(Argument::function(
///             "anyofterms",
///             [Argument::string("name", "blob")],
///         ))
///         .with_field_names(["question"]),
/// );
///
/// assert_eq!(op.render(), r#"{all(func:anyofterms(name,"blob")){question}}"#);
/// ```
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Operation {
    #[serde(default)]
    fields: Vec<Field>,
    kind: OperationKind,
    #[serde(default)]
    name: String,
}

impl Operation {
    /// Find the first top-level field named `name`. Nested fields are not
    /// searched.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name() == name)
    }

    /// Like [`field()`](Operation::field), for modifying a top-level field
    /// before rendering.
    pub fn field_mut(&mut self, name: &str) -> Option<&mut Field> {
        self.fields.iter_mut().find(|field| field.name() == name)
    }

    pub fn fields(&self) -> &[Field] {
        self.fields.as_slice()
    }

    pub fn graph_pattern() -> Self {
        Self::new(OperationKind::GraphPattern)
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn mutation() -> Self {
        Self::new(OperationKind::Mutation)
    }

    pub fn name(&self) -> Option<&str> {
        if self.name.is_empty() {
            None
        } else {
            Some(self.name.as_str())
        }
    }

    pub fn new(kind: OperationKind) -> Self {
        Self {
            fields: vec![],
            kind,
            name: String::new(),
        }
    }

    pub fn query() -> Self {
        Self::new(OperationKind::Query)
    }

    pub fn subscription() -> Self {
        Self::new(OperationKind::Subscription)
    }

    /// Validate, render, and wrap the document as a JSON request body:
    /// `{"query":"..."}`.
    pub fn to_request_json(&self) -> Result<String, RequestPayloadError> {
        self.validate()?;
        let query = self.render();
        Ok(serde_json::to_string(&RequestPayload { query: &query })?)
    }

    /// Check names in this operation against the GraphQL name grammar.
    ///
    /// An empty operation name is always accepted. For GraphQL documents
    /// every field name and alias is checked as well; graph-pattern documents
    /// skip field name checks, since Dgraph predicates (`name@en`,
    /// `director.film`) are not GraphQL names. Every field's boolean
    /// arguments must have one more argument than operators, for all kinds.
    ///
    /// Rendering never validates; call this first.
    pub fn validate(&self) -> Result<(), OperationBuildError> {
        if !self.name.is_empty() && !is_valid_name(&self.name) {
            return Err(OperationBuildError::InvalidName {
                kind: NameKind::Operation,
                name: self.name.to_owned(),
            });
        }

        let check_field_names = match self.kind {
            OperationKind::GraphPattern => false,
            OperationKind::Mutation
                | OperationKind::Query
                | OperationKind::Subscription => true,
        };

        self.fields
            .iter()
            .try_for_each(|field| field.validate_with(check_field_names))
    }

    /// Add a top-level [`Field`] after any previously added fields.
    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_fields(mut self, fields: impl IntoIterator<Item = Field>) -> Self {
        self.fields.extend(fields);
        self
    }

    /// Set the operation name. An empty name renders nothing.
    ///
    /// For `query`, `mutation` and `subscription` documents a single space
    /// separates the keyword from the name (`query GetUser{...}`), since
    /// GraphQL needs a separator there. A graph-pattern name is rendered
    /// directly before the opening brace (`movies{...}`).
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    fn header_tokens(&self) -> RenderTokenStream<'_> {
        let keyword = self.kind.keyword().map(RenderToken::Keyword);
        let name = self.name().map(RenderToken::name);
        let separator = match (&keyword, &name) {
            (Some(_), Some(_)) => Some(RenderToken::Whitespace),
            _ => None,
        };

        RenderTokenStream::new(keyword.into_iter().chain(separator).chain(name))
    }
}

#[inherent]
impl ToRenderTokens for Operation {
    pub fn render_tokens(&self) -> RenderTokenStream<'_> {
        RenderTokenStream::concat([
            self.header_tokens(),
            RenderTokenStream::delimited(
                RenderToken::CurlyBraceOpen,
                self.fields.iter().map(Field::render_tokens),
                RenderToken::Comma,
                RenderToken::CurlyBraceClose,
            ),
        ])
    }

    pub fn render(&self) -> String;
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in self.render_tokens() {
            write!(f, "{token}")?;
        }
        Ok(())
    }
}
