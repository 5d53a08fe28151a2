//! Build GraphQL and Dgraph query documents as a tree of
//! [`Operation`] → [`Field`] → [`Argument`] nodes and render them as request
//! text.
//!
//! Rendering is lazy: every node produces a pull-based
//! [`RenderTokenStream`] that its parent drains in document order. Nothing
//! is rendered until [`render()`](Operation::render) (or iteration over
//! [`render_tokens()`](Operation::render_tokens)) pulls it.
//!
//! ```
//! use libgraphb::Argument;
//! use libgraphb::Field;
//! use libgraphb::Operation;
//!
//! let op = Operation::mutation().with_field(
//!     Field::new("createQuestion")
//!         .with_argument(Argument::object("input", [
//!             Argument::string("title", "what"),
//!             Argument::string_list("tagIds", Vec::<String>::new()),
//!         ]))
//!         .with_field(Field::new("question").with_field_names(["id"])),
//! );
//!
//! assert_eq!(
//!     op.render(),
//!     r#"mutation{createQuestion(input:{title:"what",tagIds:[]}){question{id}}}"#,
//! );
//! ```

mod argument;
mod argument_type_not_supported_error;
mod boolean_clause;
mod field;
mod name_validation;
mod operation;
mod operation_build_error;
mod operation_kind;
mod render_token;
mod render_token_stream;
mod request_payload;
mod value;

pub use argument::Argument;
pub use argument_type_not_supported_error::ArgumentTypeNotSupportedError;
pub use boolean_clause::BooleanClause;
pub use boolean_clause::BooleanClauseError;
pub use field::Field;
pub use name_validation::is_valid_name;
pub use operation::Operation;
pub use operation_build_error::NameKind;
pub use operation_build_error::OperationBuildError;
pub use operation_kind::OperationKind;
pub use render_token::RenderToken;
pub use render_token_stream::RenderTokenStream;
pub use render_token_stream::ToRenderTokens;
pub(crate) use request_payload::RequestPayload;
pub use request_payload::RequestPayloadError;
pub use value::Value;

#[cfg(test)]
mod tests;
