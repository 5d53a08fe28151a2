use std::borrow::Cow;
use std::fmt;

/// A single fragment of rendered document text.
///
/// Nodes never emit raw strings to their parents. Each fragment carries its
/// kind so that rewriting passes (see
/// [`Argument`](crate::Argument)'s function-style rendering) can match on
/// punctuators without confusing them with names or literals that happen to
/// contain the same characters.
///
/// # Lifetime Parameter
///
/// The `'a` lifetime is the lifetime of the tree being rendered. Names are
/// borrowed directly from the tree via `Cow::Borrowed`; literals that need
/// formatting (integers, quoted strings) are `Cow::Owned`.
#[derive(Clone, Debug, PartialEq)]
pub enum RenderToken<'a> {
    // =========================================================================
    // Punctuators
    // =========================================================================
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// `}`
    CurlyBraceClose,
    /// `{`
    CurlyBraceOpen,
    /// `)`
    ParenClose,
    /// `(`
    ParenOpen,
    /// `]`
    SquareBracketClose,
    /// `[`
    SquareBracketOpen,
    /// A single space separating an operation keyword from its name.
    Whitespace,

    // =========================================================================
    // Words
    // =========================================================================
    /// A boolean operator joining two predicates (e.g. `AND`, `OR`).
    ///
    /// Renders padded with a single space on each side.
    BooleanOperator(Cow<'a, str>),

    /// `@filter`
    FilterDirective,

    /// An operation keyword (`query`, `mutation`, `subscription`).
    Keyword(&'static str),

    /// A rendered argument value: `true`/`false`, a decimal integer, or a
    /// double-quoted string.
    Literal(Cow<'a, str>),

    /// An operation, field, alias or argument name.
    Name(Cow<'a, str>),
}

impl<'a> RenderToken<'a> {
    /// Create a `Name` token borrowing from the tree.
    #[inline]
    pub fn name(name: &'a str) -> Self {
        RenderToken::Name(Cow::Borrowed(name))
    }

    /// The text of this token.
    ///
    /// For a [`BooleanOperator`](RenderToken::BooleanOperator) this is the
    /// bare operator, without the surrounding spaces it renders with.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Colon => ":",
            Self::Comma => ",",
            Self::CurlyBraceClose => "}",
            Self::CurlyBraceOpen => "{",
            Self::ParenClose => ")",
            Self::ParenOpen => "(",
            Self::SquareBracketClose => "]",
            Self::SquareBracketOpen => "[",
            Self::Whitespace => " ",
            Self::FilterDirective => "@filter",
            Self::Keyword(keyword) => *keyword,
            Self::BooleanOperator(text)
                | Self::Literal(text)
                | Self::Name(text) => text.as_ref(),
        }
    }

    /// Returns `true` for the braces that delimit an object value.
    pub fn is_object_delimiter(&self) -> bool {
        matches!(self, Self::CurlyBraceOpen | Self::CurlyBraceClose)
    }

    /// Append the rendered text of this token to `out`.
    pub fn push_to(&self, out: &mut String) {
        match self {
            Self::BooleanOperator(op) => {
                out.push(' ');
                out.push_str(op);
                out.push(' ');
            },
            other => out.push_str(other.as_str()),
        }
    }
}

impl fmt::Display for RenderToken<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BooleanOperator(op) => write!(f, " {op} "),
            other => f.write_str(other.as_str()),
        }
    }
}
