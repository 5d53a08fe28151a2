use serde::Deserialize;
use serde::Serialize;

/// The kind of an [`Operation`](crate::Operation), which determines the
/// keyword its document starts with.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum OperationKind {
    /// A Dgraph graph-pattern query: `{me(func:...){...}}`. No keyword is
    /// emitted, and field names are not restricted to GraphQL names.
    GraphPattern,
    Mutation,
    Query,
    Subscription,
}

impl OperationKind {
    /// The keyword that opens a document of this kind, if any.
    pub fn keyword(&self) -> Option<&'static str> {
        match self {
            Self::GraphPattern => None,
            Self::Mutation => Some("mutation"),
            Self::Query => Some("query"),
            Self::Subscription => Some("subscription"),
        }
    }
}
