//! A sequence adapter that pairs each element with its position.

use crate::{
    macros::present_or_return,
    maybe::{Maybe, Present},
    sequence::Sequence,
};

/// Yields `(index, value)` pairs, with `index` counting from 0.
#[derive(Debug, Clone)]
pub struct Enumerate<S> {
    inner: S,
    count: usize,
}

impl<S> Enumerate<S> {
    pub fn new(inner: S) -> Self {
        Enumerate { inner, count: 0 }
    }
}

impl<S: Sequence> Sequence for Enumerate<S> {
    type Item = (usize, S::Item);

    #[inline]
    fn advance(&mut self) -> Maybe<Self::Item> {
        let value = present_or_return!(self.inner.advance());
        let index = self.count;
        self.count += 1;
        Present((index, value))
    }
}
