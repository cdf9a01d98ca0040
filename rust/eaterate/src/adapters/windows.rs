//! A sequence adapter over overlapping fixed-size windows.

use std::collections::VecDeque;

use eaterate_common::{Result, verify_arg};

use crate::{
    maybe::{Absent, Maybe, Present},
    sequence::Sequence,
};

/// Yields every contiguous run of `size` upstream elements, as an owned `Vec`.
///
/// Construction eagerly pulls up to `size` elements into the window buffer.
/// If upstream has fewer than `size` elements, no window is ever produced.
#[derive(Debug, Clone)]
pub struct Windows<S: Sequence> {
    inner: S,
    size: usize,
    /// Holds at most `size` elements, oldest first.
    buffer: VecDeque<S::Item>,
}

impl<S: Sequence> Windows<S> {
    /// Creates a new `Windows` adapter and fills the initial window.
    ///
    /// Fails with `InvalidArgument` if `size` is 0.
    pub fn new(mut inner: S, size: usize) -> Result<Self> {
        verify_arg!(size, size > 0);
        // grows with what upstream actually yields, not with `size`
        let mut buffer = VecDeque::new();
        while buffer.len() < size {
            match inner.advance() {
                Present(value) => buffer.push_back(value),
                Absent => break,
            }
        }
        log::trace!("windows primed with {} of {} elements", buffer.len(), size);
        Ok(Windows {
            inner,
            size,
            buffer,
        })
    }
}

impl<S> Sequence for Windows<S>
where
    S: Sequence,
    S::Item: Clone,
{
    type Item = Vec<S::Item>;

    fn advance(&mut self) -> Maybe<Vec<S::Item>> {
        if self.buffer.len() < self.size {
            return Absent;
        }
        let window = self.buffer.iter().cloned().collect::<Vec<_>>();
        self.buffer.pop_front();
        if let Present(value) = self.inner.advance() {
            self.buffer.push_back(value);
        }
        Present(window)
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use crate::prelude::*;

    #[test]
    fn test_windows_pairs() {
        let mut eat = eater([1, 2, 3, 4]).windows(2).unwrap();
        assert_eq!(eat.advance(), Maybe::present(vec![1, 2]));
        assert_eq!(eat.advance(), Maybe::present(vec![2, 3]));
        assert_eq!(eat.advance(), Maybe::present(vec![3, 4]));
        assert_eq!(eat.advance(), Maybe::absent());
        assert_eq!(eat.advance(), Maybe::absent());
    }

    #[test]
    fn test_windows_larger_than_input() {
        let mut eat = eater([1, 2, 3]).windows(5).unwrap();
        assert_eq!(eat.advance(), Maybe::absent());
    }

    #[test]
    fn test_windows_huge_size() {
        let mut eat = eater([1u64, 2, 3]).windows(usize::MAX).unwrap();
        assert_eq!(eat.advance(), Maybe::absent());
        assert_eq!(eat.advance(), Maybe::absent());

        let mut eat = eater([1u64, 2, 3]).windows(1 << 40).unwrap();
        assert_eq!(eat.advance(), Maybe::absent());
    }

    #[test]
    fn test_windows_exact_size() {
        let result = eater([1, 2, 3]).windows(3).unwrap().collect_vec();
        assert_eq!(result, vec![vec![1, 2, 3]]);
    }

    #[test]
    fn test_windows_matches_itertools() {
        let data: Vec<u32> = (0..20).map(|_| fastrand::u32(..100)).collect();
        let expected: Vec<Vec<u32>> = data
            .iter()
            .copied()
            .tuple_windows()
            .map(|(a, b, c)| vec![a, b, c])
            .collect();
        assert_eq!(eater(data).windows(3).unwrap().collect_vec(), expected);
    }

    #[test]
    fn test_windows_zero_rejected() {
        assert!(erange(..3).windows(0).is_err());
    }

    #[test]
    fn test_windows_primes_on_construction() {
        let mut source = erange(..10);
        drop(source.by_ref().windows(4).unwrap());
        assert_eq!(source.advance(), Maybe::present(4));
    }
}
