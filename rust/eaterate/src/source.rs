//! Conversion of host iterables and iterators into [`Sequence`]s, and back.
//!
//! Three shapes of input are recognized:
//!
//! - an existing [`Sequence`], which passes through unchanged;
//! - a std [`Iterator`] (a pull-iterator), wrapped so that its `None` becomes
//!   [`Absent`];
//! - a std [`IntoIterator`] (an iterable), turned into an iterator first.
//!
//! Statically, [`eater`] accepts any iterable or iterator and [`IntoSequence`]
//! is the bound that every combinator taking a "sequence-like" argument uses.
//! [`try_eater`] performs the same normalization on a type-erased value and
//! rejects anything else with `UnsupportedInput`.

use std::{
    any::Any,
    collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque},
    iter::Fuse,
    ops::{Range, RangeFrom, RangeInclusive},
};

use eaterate_common::{Result, error::Error};

use crate::{
    maybe::{Absent, Maybe},
    sequence::{BoxedSequence, Sequence},
};

/// A sequence backed by a std iterator.
///
/// The iterator is fused, so once it reports `None` the sequence keeps
/// returning `Absent`.
#[derive(Debug, Clone)]
pub struct Eater<I> {
    iter: Fuse<I>,
}

impl<I: Iterator> Eater<I> {
    pub fn new(iter: I) -> Self {
        Eater { iter: iter.fuse() }
    }
}

impl<I: Iterator> Sequence for Eater<I> {
    type Item = I::Item;

    #[inline]
    fn advance(&mut self) -> Maybe<Self::Item> {
        self.iter.next().into()
    }
}

/// Creates a sequence from an iterable or an iterator.
///
/// ```
/// use eaterate::prelude::*;
///
/// let mut eat = eater(vec![1, 2, 3]);
/// assert_eq!(eat.advance(), Maybe::present(1));
/// assert_eq!(eat.collect_vec(), vec![2, 3]);
/// ```
pub fn eater<I: IntoIterator>(it: I) -> Eater<I::IntoIter> {
    Eater::new(it.into_iter())
}

/// Normalizes a sequence-like value into a [`Sequence`].
///
/// Implemented for every `Sequence` (identity), for the common owned and
/// borrowed std collections, and for the std ranges and collection
/// iterators, so these can be handed straight to combinators such as
/// [`chain`](crate::SequenceExt::chain), [`zip`](crate::SequenceExt::zip) and
/// [`flatten`](crate::SequenceExt::flatten). Any other iterator or iterable
/// goes through [`eater`] first.
pub trait IntoSequence {
    type Item;
    type IntoSeq: Sequence<Item = Self::Item>;

    fn into_sequence(self) -> Self::IntoSeq;
}

impl<S: Sequence> IntoSequence for S {
    type Item = S::Item;
    type IntoSeq = S;

    #[inline]
    fn into_sequence(self) -> S {
        self
    }
}

impl<T> IntoSequence for Vec<T> {
    type Item = T;
    type IntoSeq = Eater<std::vec::IntoIter<T>>;

    fn into_sequence(self) -> Self::IntoSeq {
        eater(self)
    }
}

impl<T> IntoSequence for VecDeque<T> {
    type Item = T;
    type IntoSeq = Eater<std::collections::vec_deque::IntoIter<T>>;

    fn into_sequence(self) -> Self::IntoSeq {
        eater(self)
    }
}

impl<T, const N: usize> IntoSequence for [T; N] {
    type Item = T;
    type IntoSeq = Eater<std::array::IntoIter<T, N>>;

    fn into_sequence(self) -> Self::IntoSeq {
        eater(self)
    }
}

impl<'a, T> IntoSequence for &'a [T] {
    type Item = &'a T;
    type IntoSeq = Eater<std::slice::Iter<'a, T>>;

    fn into_sequence(self) -> Self::IntoSeq {
        eater(self)
    }
}

impl<'a> IntoSequence for &'a str {
    type Item = char;
    type IntoSeq = Eater<std::str::Chars<'a>>;

    fn into_sequence(self) -> Self::IntoSeq {
        eater(self.chars())
    }
}

impl<'a, T> IntoSequence for &'a Vec<T> {
    type Item = &'a T;
    type IntoSeq = Eater<std::slice::Iter<'a, T>>;

    fn into_sequence(self) -> Self::IntoSeq {
        eater(self)
    }
}

/// Owned strings are drained char by char.
impl IntoSequence for String {
    type Item = char;
    type IntoSeq = Eater<std::vec::IntoIter<char>>;

    fn into_sequence(self) -> Self::IntoSeq {
        eater(self.chars().collect::<Vec<_>>())
    }
}

impl<T> IntoSequence for Option<T> {
    type Item = T;
    type IntoSeq = Eater<std::option::IntoIter<T>>;

    fn into_sequence(self) -> Self::IntoSeq {
        eater(self)
    }
}

impl<T, H> IntoSequence for HashSet<T, H> {
    type Item = T;
    type IntoSeq = Eater<std::collections::hash_set::IntoIter<T>>;

    fn into_sequence(self) -> Self::IntoSeq {
        eater(self)
    }
}

impl<K, V, H> IntoSequence for HashMap<K, V, H> {
    type Item = (K, V);
    type IntoSeq = Eater<std::collections::hash_map::IntoIter<K, V>>;

    fn into_sequence(self) -> Self::IntoSeq {
        eater(self)
    }
}

impl<T> IntoSequence for BTreeSet<T> {
    type Item = T;
    type IntoSeq = Eater<std::collections::btree_set::IntoIter<T>>;

    fn into_sequence(self) -> Self::IntoSeq {
        eater(self)
    }
}

impl<K, V> IntoSequence for BTreeMap<K, V> {
    type Item = (K, V);
    type IntoSeq = Eater<std::collections::btree_map::IntoIter<K, V>>;

    fn into_sequence(self) -> Self::IntoSeq {
        eater(self)
    }
}

// Std iterators that are commonly handed to combinators directly. A blanket
// impl over `Iterator` would overlap with the identity impl above.

impl<A> IntoSequence for Range<A>
where
    Range<A>: Iterator<Item = A>,
{
    type Item = A;
    type IntoSeq = Eater<Range<A>>;

    fn into_sequence(self) -> Self::IntoSeq {
        Eater::new(self)
    }
}

impl<A> IntoSequence for RangeInclusive<A>
where
    RangeInclusive<A>: Iterator<Item = A>,
{
    type Item = A;
    type IntoSeq = Eater<RangeInclusive<A>>;

    fn into_sequence(self) -> Self::IntoSeq {
        Eater::new(self)
    }
}

impl<A> IntoSequence for RangeFrom<A>
where
    RangeFrom<A>: Iterator<Item = A>,
{
    type Item = A;
    type IntoSeq = Eater<RangeFrom<A>>;

    fn into_sequence(self) -> Self::IntoSeq {
        Eater::new(self)
    }
}

impl<T> IntoSequence for std::vec::IntoIter<T> {
    type Item = T;
    type IntoSeq = Eater<std::vec::IntoIter<T>>;

    fn into_sequence(self) -> Self::IntoSeq {
        Eater::new(self)
    }
}

impl<'a, T> IntoSequence for std::slice::Iter<'a, T> {
    type Item = &'a T;
    type IntoSeq = Eater<std::slice::Iter<'a, T>>;

    fn into_sequence(self) -> Self::IntoSeq {
        Eater::new(self)
    }
}

impl<'a> IntoSequence for std::str::Chars<'a> {
    type Item = char;
    type IntoSeq = Eater<std::str::Chars<'a>>;

    fn into_sequence(self) -> Self::IntoSeq {
        Eater::new(self)
    }
}

/// Normalizes a type-erased value into a boxed sequence of `T`.
///
/// The value must hold one of:
///
/// - a [`BoxedSequence<'static, T>`], returned as is;
/// - a `Box<dyn Iterator<Item = T>>`;
/// - a `Vec<T>` or a `VecDeque<T>`.
///
/// Anything else fails with `UnsupportedInput`.
pub fn try_eater<T: 'static>(input: Box<dyn Any>) -> Result<BoxedSequence<'static, T>> {
    let input = match input.downcast::<BoxedSequence<'static, T>>() {
        Ok(seq) => return Ok(*seq),
        Err(input) => input,
    };
    let input = match input.downcast::<Box<dyn Iterator<Item = T>>>() {
        Ok(iter) => return Ok(Box::new(eater(*iter))),
        Err(input) => input,
    };
    let input = match input.downcast::<Vec<T>>() {
        Ok(vec) => return Ok(Box::new(eater(*vec))),
        Err(input) => input,
    };
    match input.downcast::<VecDeque<T>>() {
        Ok(deque) => Ok(Box::new(eater(*deque))),
        Err(_) => {
            let expected = std::any::type_name::<T>();
            log::debug!("rejected input: not a sequence, iterator or iterable of {expected}");
            Err(Error::unsupported_input(format!(
                "expected either an iterable, an iterator, or a sequence of {expected}"
            )))
        }
    }
}

/// Std [`Iterator`] view over a [`Sequence`].
///
/// Created by [`SequenceExt::iter`](crate::SequenceExt::iter). Allows `for`
/// loops and the std iterator toolbox on any sequence.
#[derive(Debug, Clone)]
pub struct SeqIter<S> {
    seq: S,
}

impl<S: Sequence> SeqIter<S> {
    pub fn new(seq: S) -> Self {
        SeqIter { seq }
    }

    /// Returns the wrapped sequence.
    pub fn into_inner(self) -> S {
        self.seq
    }
}

impl<S: Sequence> Iterator for SeqIter<S> {
    type Item = S::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        match self.seq.advance() {
            Maybe::Present(v) => Some(v),
            Absent => None,
        }
    }
}
