//! A sequence adapter that discards the first `n` elements.

use crate::{maybe::Maybe, sequence::Sequence};

/// Skips the first `n` upstream elements, then yields the rest.
///
/// The skipped elements are pulled lazily, on the first `advance()`.
#[derive(Debug, Clone)]
pub struct Skip<S> {
    inner: S,
    /// Elements still to discard; stays at 0 once reached.
    remaining: usize,
}

impl<S> Skip<S> {
    pub fn new(inner: S, n: usize) -> Self {
        Skip {
            inner,
            remaining: n,
        }
    }
}

impl<S: Sequence> Sequence for Skip<S> {
    type Item = S::Item;

    fn advance(&mut self) -> Maybe<S::Item> {
        while self.remaining > 0 {
            self.remaining -= 1;
            let _ = self.inner.advance();
        }
        self.inner.advance()
    }
}
