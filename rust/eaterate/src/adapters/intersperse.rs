//! A sequence adapter that places a separator between adjacent elements.

use crate::{
    maybe::{Absent, Maybe, Present},
    sequence::Sequence,
};

/// Yields the upstream elements with a copy of `separator` between each
/// adjacent pair.
///
/// Construction pulls the first upstream element into a lookahead slot, so an
/// upstream with side effects observes one `advance()` before this adapter is
/// first advanced.
#[derive(Debug, Clone)]
pub struct Intersperse<S: Sequence> {
    inner: S,
    separator: S::Item,
    /// The next upstream element to emit; `Absent` once upstream is exhausted.
    lookahead: Maybe<S::Item>,
    /// Whether the next call emits the separator.
    emits: bool,
}

impl<S: Sequence> Intersperse<S> {
    pub fn new(mut inner: S, separator: S::Item) -> Self {
        let lookahead = inner.advance();
        log::trace!(
            "intersperse primed, lookahead present: {}",
            lookahead.is_present()
        );
        Intersperse {
            inner,
            separator,
            lookahead,
            emits: false,
        }
    }
}

impl<S> Sequence for Intersperse<S>
where
    S: Sequence,
    S::Item: Clone,
{
    type Item = S::Item;

    fn advance(&mut self) -> Maybe<S::Item> {
        if self.lookahead.is_absent() {
            return Absent;
        }
        if self.emits {
            self.emits = false;
            return Present(self.separator.clone());
        }
        self.emits = true;
        let value = self.lookahead.take();
        self.lookahead = self.inner.advance();
        value
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use itertools::Itertools;

    use crate::prelude::*;

    #[test]
    fn test_intersperse() {
        let mut eat = eater([0, 1, 2]).intersperse(10);
        assert_eq!(eat.advance(), Maybe::present(0));
        assert_eq!(eat.advance(), Maybe::present(10));
        assert_eq!(eat.advance(), Maybe::present(1));
        assert_eq!(eat.advance(), Maybe::present(10));
        assert_eq!(eat.advance(), Maybe::present(2));
        assert_eq!(eat.advance(), Maybe::absent());
        assert_eq!(eat.advance(), Maybe::absent());
    }

    #[test]
    fn test_intersperse_short_inputs() {
        assert_eq!(eater(Vec::<char>::new()).intersperse(',').count(), 0);
        assert_eq!(eater(['a']).intersperse(',').collect_vec(), vec!['a']);
    }

    #[test]
    fn test_intersperse_matches_itertools() {
        let words = vec!["a", "b", "c", "d"];
        let expected: Vec<_> = Itertools::intersperse(words.clone().into_iter(), "-").collect();
        assert_eq!(eater(words).intersperse("-").collect_vec(), expected);
    }

    #[test]
    fn test_intersperse_primes_on_construction() {
        let pulls = Cell::new(0);
        let source = eater(0..3).map(|x| {
            pulls.set(pulls.get() + 1);
            x
        });
        let mut eat = source.intersperse(-1);
        assert_eq!(pulls.get(), 1);
        assert_eq!(eat.advance(), Maybe::present(0));
        assert_eq!(pulls.get(), 2);
    }
}
