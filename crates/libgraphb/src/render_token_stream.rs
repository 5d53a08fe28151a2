//! Pull-based stream of [`RenderToken`]s produced by a node of the tree.

use crate::RenderToken;
use std::iter;

/// Lazy, ordered sequence of [`RenderToken`]s representing one node of the
/// tree.
///
/// Every node renders by composing the streams of its children in a fixed
/// order. Nothing is produced until the consumer pulls, and no work happens
/// on any other thread: a stream that is dropped before it is exhausted
/// simply releases every nested child stream with it. The function-style
/// argument rewrite relies on this when it abandons a value's tokens
/// part-way through.
pub struct RenderTokenStream<'a> {
    tokens: Box<dyn Iterator<Item = RenderToken<'a>> + 'a>,
}

impl<'a> RenderTokenStream<'a> {
    /// Concatenate streams, draining each one fully before the next.
    pub fn concat<I>(streams: I) -> Self
    where
        I: IntoIterator<Item = RenderTokenStream<'a>>,
        I::IntoIter: 'a,
    {
        Self::new(streams.into_iter().flatten())
    }

    /// `open`, then `items` separated by `separator`, then `close`.
    pub fn delimited<I>(
        open: RenderToken<'a>,
        items: I,
        separator: RenderToken<'a>,
        close: RenderToken<'a>,
    ) -> Self
    where
        I: IntoIterator<Item = RenderTokenStream<'a>>,
        I::IntoIter: 'a,
    {
        Self::concat([
            Self::once(open),
            Self::separated(items, separator),
            Self::once(close),
        ])
    }

    pub fn empty() -> Self {
        Self::new(iter::empty())
    }

    /// Emit the tokens of `items` in order, placing the next token pulled from
    /// `separators` between each pair of adjacent items.
    ///
    /// If `separators` runs dry, the remaining items are emitted without
    /// separation.
    pub fn interleaved<I, S>(items: I, separators: S) -> Self
    where
        I: IntoIterator<Item = RenderTokenStream<'a>>,
        I::IntoIter: 'a,
        S: IntoIterator<Item = RenderToken<'a>>,
        S::IntoIter: 'a,
    {
        let mut separators = separators.into_iter();
        Self::new(items.into_iter().enumerate().flat_map(move |(idx, item)| {
            let separator =
                if idx > 0 {
                    separators.next()
                } else {
                    None
                };
            separator.into_iter().chain(item)
        }))
    }

    /// Drain the stream and concatenate the text of every token.
    pub fn into_string(self) -> String {
        let mut out = String::new();
        for token in self {
            token.push_to(&mut out);
        }
        out
    }

    pub fn new<I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = RenderToken<'a>>,
        I::IntoIter: 'a,
    {
        Self {
            tokens: Box::new(tokens.into_iter()),
        }
    }

    pub fn once(token: RenderToken<'a>) -> Self {
        Self::new(iter::once(token))
    }

    /// Emit the tokens of `items` in order with `separator` between each pair
    /// of adjacent items.
    pub fn separated<I>(items: I, separator: RenderToken<'a>) -> Self
    where
        I: IntoIterator<Item = RenderTokenStream<'a>>,
        I::IntoIter: 'a,
    {
        Self::interleaved(items, iter::repeat(separator))
    }
}

impl<'a> Iterator for RenderTokenStream<'a> {
    type Item = RenderToken<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.tokens.next()
    }
}

impl std::fmt::Debug for RenderTokenStream<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderTokenStream").finish_non_exhaustive()
    }
}

/// Implemented by every node that can be rendered as document text.
pub trait ToRenderTokens {
    /// Produce this node's [`RenderTokenStream`].
    fn render_tokens(&self) -> RenderTokenStream<'_>;

    /// Drain [`render_tokens()`](ToRenderTokens::render_tokens) into a
    /// `String`.
    fn render(&self) -> String {
        self.render_tokens().into_string()
    }
}
