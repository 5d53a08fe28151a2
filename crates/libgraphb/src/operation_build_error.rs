use crate::BooleanClauseError;
use serde::Deserialize;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// What kind of name failed validation.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum NameKind {
    Alias,
    Field,
    Operation,
}

impl fmt::Display for NameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Alias => "alias",
            Self::Field => "field",
            Self::Operation => "operation",
        })
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum OperationBuildError {
    #[error(
        "'{name}' is an invalid {kind} name in GraphQL. A valid name matches \
        /[_A-Za-z][_0-9A-Za-z]*/, see: \
        http://facebook.github.io/graphql/October2016/#sec-Names"
    )]
    InvalidName {
        kind: NameKind,
        name: String,
    },

    #[error("Field `{field}` has mismatched boolean arguments")]
    BooleanArguments {
        field: String,
        #[source]
        source: BooleanClauseError,
    },
}
