//! A sequence adapter that transforms each element with a function.

use crate::{maybe::Maybe, sequence::Sequence};

/// Applies a function to every element of the upstream sequence.
///
/// The function is only called for present elements; upstream exhaustion
/// passes through untouched.
#[derive(Debug, Clone)]
pub struct Map<S, F> {
    /// The upstream sequence.
    inner: S,
    f: F,
}

impl<S, F> Map<S, F> {
    pub fn new(inner: S, f: F) -> Self {
        Map { inner, f }
    }
}

impl<S, F, K> Sequence for Map<S, F>
where
    S: Sequence,
    F: FnMut(S::Item) -> K,
{
    type Item = K;

    #[inline]
    fn advance(&mut self) -> Maybe<K> {
        self.inner.advance().map(&mut self.f)
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn test_map_values() {
        let result = eater(vec![1, 2, 3]).map(|x| x * 10).collect_vec();
        assert_eq!(result, vec![10, 20, 30]);
    }

    #[test]
    fn test_map_changes_type() {
        let result = eater(vec![1, 22, 333])
            .map(|x: i32| x.to_string())
            .collect_vec();
        assert_eq!(result, vec!["1", "22", "333"]);
    }

    #[test]
    fn test_map_not_called_after_exhaustion() {
        let mut calls = 0;
        let mut mapped = eater(vec![1]).map(|x| {
            calls += 1;
            x
        });
        assert_eq!(mapped.advance(), Maybe::present(1));
        assert_eq!(mapped.advance(), Maybe::absent());
        assert_eq!(mapped.advance(), Maybe::absent());
        drop(mapped);
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_map_empty() {
        let result = eater(Vec::<u8>::new()).map(|x| x + 1).collect_vec();
        assert!(result.is_empty());
    }
}
