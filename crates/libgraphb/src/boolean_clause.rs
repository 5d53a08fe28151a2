use crate::Argument;
use crate::RenderToken;
use crate::RenderTokenStream;
use crate::ToRenderTokens;
use inherent::inherent;
use serde::Deserialize;
use serde::Serialize;
use std::borrow::Cow;
use thiserror::Error;

/// Predicates joined by boolean operators: `p1 OP1 p2 OP2 p3`.
///
/// Used both for a field's `@filter(...)` clause and for a field whose own
/// arguments are a boolean combination of predicates.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(try_from = "BooleanClauseParts")]
pub struct BooleanClause {
    pub(crate) operators: Vec<String>,
    pub(crate) predicates: Vec<Argument>,
}

/// Unchecked shape of a [`BooleanClause`] as loaded from a description.
#[derive(Deserialize)]
struct BooleanClauseParts {
    #[serde(default)]
    operators: Vec<String>,
    predicates: Vec<Argument>,
}

impl TryFrom<BooleanClauseParts> for BooleanClause {
    type Error = BooleanClauseError;

    fn try_from(parts: BooleanClauseParts) -> Result<Self, Self::Error> {
        Self::new(parts.operators, parts.predicates)
    }
}

impl BooleanClause {
    /// Combine `predicates` using `operators`, where `operators[i]` sits
    /// between `predicates[i]` and `predicates[i + 1]`.
    ///
    /// There must be exactly one more predicate than there are operators.
    pub fn new<S: Into<String>>(
        operators: impl IntoIterator<Item = S>,
        predicates: impl IntoIterator<Item = Argument>,
    ) -> Result<Self, BooleanClauseError> {
        let operators: Vec<String> =
            operators.into_iter().map(Into::into).collect();
        let predicates: Vec<Argument> = predicates.into_iter().collect();

        if predicates.len() != operators.len() + 1 {
            return Err(BooleanClauseError::OperatorCountMismatch {
                operators: operators.len(),
                predicates: predicates.len(),
            });
        }

        Ok(Self {
            operators,
            predicates,
        })
    }

    /// A clause with a single predicate and no operators.
    pub fn single(predicate: Argument) -> Self {
        Self {
            operators: vec![],
            predicates: vec![predicate],
        }
    }

    pub fn operators(&self) -> &[String] {
        self.operators.as_slice()
    }

    pub fn predicates(&self) -> &[Argument] {
        self.predicates.as_slice()
    }
}

#[inherent]
impl ToRenderTokens for BooleanClause {
    pub fn render_tokens(&self) -> RenderTokenStream<'_> {
        RenderTokenStream::interleaved(
            self.predicates.iter().map(Argument::render_tokens),
            self.operators.iter().map(|op| {
                RenderToken::BooleanOperator(Cow::Borrowed(op.as_str()))
            }),
        )
    }

    pub fn render(&self) -> String;
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum BooleanClauseError {
    #[error(
        "A boolean clause needs exactly one more predicate than operators, \
        but found {operators} operator(s) and {predicates} predicate(s)"
    )]
    OperatorCountMismatch {
        operators: usize,
        predicates: usize,
    },
}
