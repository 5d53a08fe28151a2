use crate::RenderToken;
use crate::RenderTokenStream;
use std::cell::Cell;
use std::rc::Rc;

fn names(names: &[&'static str]) -> Vec<RenderTokenStream<'static>> {
    names.iter()
        .copied()
        .map(|name| RenderTokenStream::once(RenderToken::name(name)))
        .collect()
}

#[test]
fn separated_places_separator_between_items_only() {
    let stream = RenderTokenStream::separated(names(&["a", "b", "c"]), RenderToken::Comma);
    assert_eq!(stream.into_string(), "a,b,c");
}

#[test]
fn separated_with_no_items_is_empty() {
    let stream = RenderTokenStream::separated(names(&[]), RenderToken::Comma);
    assert_eq!(stream.into_string(), "");
}

#[test]
fn delimited_wraps_separated_items() {
    let stream = RenderTokenStream::delimited(
        RenderToken::CurlyBraceOpen,
        names(&["x", "y"]),
        RenderToken::Comma,
        RenderToken::CurlyBraceClose,
    );
    assert_eq!(stream.into_string(), "{x,y}");
}

#[test]
fn interleaved_pulls_one_separator_per_gap() {
    let stream = RenderTokenStream::interleaved(
        names(&["p1", "p2", "p3"]),
        [
            RenderToken::BooleanOperator("AND".into()),
            RenderToken::BooleanOperator("OR".into()),
        ],
    );
    assert_eq!(stream.into_string(), "p1 AND p2 OR p3");
}

#[test]
fn boolean_operator_text_is_unpadded() {
    let token = RenderToken::BooleanOperator("OR".into());
    assert_eq!(token.as_str(), "OR");
    assert_eq!(token.to_string(), " OR ");
}

#[test]
fn concat_is_lazy() {
    let pulled = Rc::new(Cell::new(0));
    let counter = Rc::clone(&pulled);
    let tail = RenderTokenStream::new((0..3).map(move |_| {
        counter.set(counter.get() + 1);
        RenderToken::Comma
    }));

    let mut stream = RenderTokenStream::concat([
        RenderTokenStream::once(RenderToken::ParenOpen),
        tail,
    ]);

    assert_eq!(stream.next(), Some(RenderToken::ParenOpen));
    assert_eq!(pulled.get(), 0);
    assert_eq!(stream.next(), Some(RenderToken::Comma));
    assert_eq!(pulled.get(), 1);

    // Abandoning the stream part-way through is fine; nothing else runs.
    drop(stream);
    assert_eq!(pulled.get(), 1);
}
