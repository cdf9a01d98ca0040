//! A sequence adapter that pairs up the elements of two sequences.

use crate::{
    maybe::{Absent, Maybe, Present},
    sequence::Sequence,
};

/// Yields `(a, b)` pairs until either side is exhausted.
///
/// Both sides are advanced on every call. When only one side produced an
/// element, that element is dropped: there is no push-back.
#[derive(Debug, Clone)]
pub struct Zip<A, B> {
    a: A,
    b: B,
}

impl<A, B> Zip<A, B> {
    pub fn new(a: A, b: B) -> Self {
        Zip { a, b }
    }
}

impl<A, B> Sequence for Zip<A, B>
where
    A: Sequence,
    B: Sequence,
{
    type Item = (A::Item, B::Item);

    #[inline]
    fn advance(&mut self) -> Maybe<Self::Item> {
        let a = self.a.advance();
        let b = self.b.advance();
        match (a, b) {
            (Present(a), Present(b)) => Present((a, b)),
            _ => Absent,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn test_zip_equal_lengths() {
        let mut eat = eater([0, 1, 2]).zip([1, 2, 3]);
        assert_eq!(eat.advance(), Maybe::present((0, 1)));
        assert_eq!(eat.advance(), Maybe::present((1, 2)));
        assert_eq!(eat.advance(), Maybe::present((2, 3)));
        assert_eq!(eat.advance(), Maybe::absent());
    }

    #[test]
    fn test_zip_shorter_left() {
        let result = eater([0, 1, 2]).zip([1, 2, 3, 4, 5]).collect_vec();
        assert_eq!(result, vec![(0, 1), (1, 2), (2, 3)]);
    }

    #[test]
    fn test_zip_discards_unpaired_element() {
        let mut right = eater(vec!['a', 'b', 'c']);
        let pairs = eater([1]).zip(right.by_ref()).collect_vec();
        assert_eq!(pairs, vec![(1, 'a')]);
        // 'b' was pulled by the final zip advance and lost
        assert_eq!(right.advance(), Maybe::present('c'));
    }

    #[test]
    fn test_zip_nested() {
        let result = eater([0, 1])
            .zip([2, 3])
            .zip([4, 5])
            .map(|((a, b), c)| a + b + c)
            .collect_vec();
        assert_eq!(result, vec![6, 9]);
    }
}
