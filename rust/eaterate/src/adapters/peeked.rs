//! A sequence adapter that exposes the upcoming element alongside the current one.

use crate::{
    macros::present_or_return,
    maybe::{Maybe, Present},
    sequence::Sequence,
};

/// Yields `(current, next)` pairs, where `next` is the element that the
/// following call will yield as `current` (or `Absent` at the end).
///
/// Construction pulls the first upstream element into the lookahead slot.
/// Each call moves the lookahead out, refills it from upstream, and reports a
/// copy of the refilled slot as the peeked value.
#[derive(Debug, Clone)]
pub struct Peeked<S: Sequence> {
    inner: S,
    lookahead: Maybe<S::Item>,
}

impl<S: Sequence> Peeked<S> {
    pub fn new(mut inner: S) -> Self {
        let lookahead = inner.advance();
        log::trace!(
            "peeked primed, lookahead present: {}",
            lookahead.is_present()
        );
        Peeked { inner, lookahead }
    }

    /// Returns a reference to the buffered element without advancing.
    pub fn peek(&self) -> Maybe<&S::Item> {
        self.lookahead.as_ref()
    }
}

impl<S> Sequence for Peeked<S>
where
    S: Sequence,
    S::Item: Clone,
{
    type Item = (S::Item, Maybe<S::Item>);

    fn advance(&mut self) -> Maybe<Self::Item> {
        let current = present_or_return!(self.lookahead.take());
        self.lookahead = self.inner.advance();
        Present((current, self.lookahead.clone()))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use crate::prelude::*;

    #[test]
    fn test_peeked_chars() {
        let mut eat = eater("hi!".chars()).peeked();
        assert_eq!(eat.advance(), Maybe::present(('h', Maybe::present('i'))));
        assert_eq!(eat.advance(), Maybe::present(('i', Maybe::present('!'))));
        assert_eq!(eat.advance(), Maybe::present(('!', Maybe::absent())));
        assert_eq!(eat.advance(), Maybe::absent());
        assert_eq!(eat.advance(), Maybe::absent());
    }

    #[test]
    fn test_peek_does_not_advance() {
        let mut eat = eater([1, 2]).peeked();
        assert_eq!(eat.peek(), Maybe::present(&1));
        assert_eq!(eat.peek(), Maybe::present(&1));
        assert_eq!(eat.advance(), Maybe::present((1, Maybe::present(2))));
        assert_eq!(eat.peek(), Maybe::present(&2));
    }

    #[test]
    fn test_peeked_empty() {
        assert_eq!(eater(Vec::<u8>::new()).peeked().count(), 0);
    }

    #[test]
    fn test_peeked_primes_on_construction() {
        let pulls = Cell::new(0);
        let _eat = eater(vec![1, 2, 3])
            .map(|x| {
                pulls.set(pulls.get() + 1);
                x
            })
            .peeked();
        assert_eq!(pulls.get(), 1);
    }
}
