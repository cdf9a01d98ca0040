//! A sequence adapter that yields at most `n` elements.

use crate::{
    maybe::{Absent, Maybe},
    sequence::Sequence,
};

/// Yields the first `n` upstream elements (fewer if upstream ends first).
///
/// Once `n` elements were requested, upstream is no longer consulted.
#[derive(Debug, Clone)]
pub struct Take<S> {
    inner: S,
    remaining: usize,
}

impl<S> Take<S> {
    pub fn new(inner: S, n: usize) -> Self {
        Take {
            inner,
            remaining: n,
        }
    }
}

impl<S: Sequence> Sequence for Take<S> {
    type Item = S::Item;

    #[inline]
    fn advance(&mut self) -> Maybe<S::Item> {
        if self.remaining == 0 {
            return Absent;
        }
        self.remaining -= 1;
        self.inner.advance()
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn test_take() {
        assert_eq!(erange(..).take(3).collect_vec(), vec![0, 1, 2]);
        assert_eq!(erange(..2).take(5).collect_vec(), vec![0, 1]);
        assert_eq!(erange(..2).take(0).count(), 0);
    }

    #[test]
    fn test_take_leaves_rest_of_upstream() {
        let mut source = erange(..5);
        assert_eq!(source.by_ref().take(2).collect_vec(), vec![0, 1]);
        assert_eq!(source.collect_vec(), vec![2, 3, 4]);
    }
}
