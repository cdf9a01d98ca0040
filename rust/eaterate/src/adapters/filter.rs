//! A sequence adapter that keeps only the elements matching a predicate.

use crate::{
    macros::present_or_return,
    maybe::{Maybe, Present},
    sequence::Sequence,
};

/// Yields the upstream elements for which the predicate returns `true`.
///
/// Each `advance()` keeps pulling from upstream until an element matches or
/// the upstream is exhausted. Long runs of rejected elements are handled in
/// a loop, so the call depth stays constant.
#[derive(Debug, Clone)]
pub struct Filter<S, P> {
    inner: S,
    predicate: P,
}

impl<S, P> Filter<S, P> {
    pub fn new(inner: S, predicate: P) -> Self {
        Filter { inner, predicate }
    }
}

impl<S, P> Sequence for Filter<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn advance(&mut self) -> Maybe<S::Item> {
        loop {
            let value = present_or_return!(self.inner.advance());
            if (self.predicate)(&value) {
                return Present(value);
            }
        }
    }
}
