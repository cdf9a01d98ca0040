//! Sequence adapters.
//!
//! Every adapter owns its upstream sequence(s) and implements [`Sequence`] by
//! pulling from them and applying one transformation. Adapters are built
//! through the [`SequenceExt`] methods, each of which wraps the current
//! sequence in a new adapter, so a pipeline is a chain of owners.
//!
//! # Provided Adapters
//!
//! - [`Map`], [`Filter`], [`Enumerate`]: element-wise transformations.
//! - [`Chain`], [`Zip`]: combining two sequences.
//! - [`Skip`], [`Take`], [`StepBy`]: positional selection.
//! - [`Intersperse`], [`Peeked`], [`Windows`]: lookahead and buffering. These
//!   pull from upstream at construction time.
//! - [`Flatten`]: one level of nesting removed.
//! - [`Fuse`]: permanent exhaustion for sequences that may resume.

use eaterate_common::{Result, verify_arg};

use crate::{
    sequence::{BoxedSequence, Sequence},
    source::{Eater, IntoSequence, SeqIter, eater},
};

pub mod chain;
pub mod enumerate;
pub mod filter;
pub mod flatten;
pub mod fuse;
pub mod intersperse;
pub mod map;
pub mod peeked;
pub mod skip;
pub mod step_by;
pub mod take;
pub mod windows;
pub mod zip;

pub use chain::Chain;
pub use enumerate::Enumerate;
pub use filter::Filter;
pub use flatten::Flatten;
pub use fuse::Fuse;
pub use intersperse::Intersperse;
pub use map::Map;
pub use peeked::Peeked;
pub use skip::Skip;
pub use step_by::StepBy;
pub use take::Take;
pub use windows::Windows;
pub use zip::Zip;

/// Extension trait providing the adapter constructors for every [`Sequence`].
///
/// Arguments described as "sequence-like" accept anything implementing
/// [`IntoSequence`]: another sequence, or a collection such as a `Vec`.
pub trait SequenceExt: Sequence + Sized {
    /// Transforms each element with `f`.
    fn map<K, F>(self, f: F) -> Map<Self, F>
    where
        F: FnMut(Self::Item) -> K,
    {
        Map::new(self, f)
    }

    /// Keeps the elements for which `predicate` returns `true`.
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        Filter::new(self, predicate)
    }

    /// Yields the elements of `self`, then those of `other`.
    ///
    /// ```
    /// use eaterate::prelude::*;
    ///
    /// let all = eater([1, 2, 3]).chain([4, 5, 6]).collect_vec();
    /// assert_eq!(all, vec![1, 2, 3, 4, 5, 6]);
    /// ```
    fn chain<O>(self, other: O) -> Chain<Self, O::IntoSeq>
    where
        O: IntoSequence<Item = Self::Item>,
    {
        Chain::new(self, other.into_sequence())
    }

    /// Chains every sequence-like value of `others` after `self`, left to right.
    fn chain_all<I>(self, others: I) -> Chain<Self, Flatten<Eater<I::IntoIter>>>
    where
        I: IntoIterator,
        I::Item: IntoSequence<Item = Self::Item>,
    {
        Chain::new(self, Flatten::new(eater(others)))
    }

    /// Pairs up the elements of `self` and `other`, stopping at the shorter one.
    fn zip<O>(self, other: O) -> Zip<Self, O::IntoSeq>
    where
        O: IntoSequence,
    {
        Zip::new(self, other.into_sequence())
    }

    /// Places a copy of `separator` between adjacent elements.
    ///
    /// Pulls the first element from `self` immediately.
    fn intersperse(self, separator: Self::Item) -> Intersperse<Self>
    where
        Self::Item: Clone,
    {
        Intersperse::new(self, separator)
    }

    /// Pairs each element with its 0-based position.
    fn enumerate(self) -> Enumerate<Self> {
        Enumerate::new(self)
    }

    /// Yields `(current, next)` pairs.
    ///
    /// Pulls the first element from `self` immediately.
    fn peeked(self) -> Peeked<Self>
    where
        Self::Item: Clone,
    {
        Peeked::new(self)
    }

    /// Discards the first `n` elements.
    fn skip(self, n: usize) -> Skip<Self> {
        Skip::new(self, n)
    }

    /// Yields at most `n` elements.
    fn take(self, n: usize) -> Take<Self> {
        Take::new(self, n)
    }

    /// Yields every `step`-th element, starting with the first.
    ///
    /// Fails with `InvalidArgument` if `step` is 0.
    fn step_by(self, step: usize) -> Result<StepBy<Self>> {
        StepBy::new(self, step)
    }

    /// Flattens a sequence of sequence-like elements.
    fn flatten(self) -> Flatten<Self>
    where
        Self::Item: IntoSequence,
    {
        Flatten::new(self)
    }

    /// Yields overlapping windows of `size` elements.
    ///
    /// Pulls up to `size` elements from `self` immediately.
    /// Fails with `InvalidArgument` if `size` is 0.
    fn windows(self, size: usize) -> Result<Windows<Self>>
    where
        Self::Item: Clone,
    {
        Windows::new(self, size)
    }

    /// Guarantees that `Absent` is returned forever after the first `Absent`.
    fn fuse(self) -> Fuse<Self> {
        Fuse::new(self)
    }

    /// Selects the elements at positions `start`, `start + step`, ... below `stop`.
    ///
    /// Equivalent to `skip(start).take(stop - start).step_by(step)`.
    /// Fails with `InvalidArgument` if `step` is 0 or `stop < start`.
    ///
    /// ```
    /// use eaterate::prelude::*;
    ///
    /// let picked = erange(..10).slice(2, 9, 3).unwrap().collect_vec();
    /// assert_eq!(picked, vec![2, 5, 8]);
    /// ```
    fn slice(self, start: usize, stop: usize, step: usize) -> Result<StepBy<Take<Skip<Self>>>> {
        verify_arg!(stop, stop >= start);
        self.skip(start).take(stop - start).step_by(step)
    }

    /// Converts into a std [`Iterator`].
    fn iter(self) -> SeqIter<Self> {
        SeqIter::new(self)
    }

    /// Erases the concrete adapter type.
    fn boxed<'a>(self) -> BoxedSequence<'a, Self::Item>
    where
        Self: 'a,
    {
        Box::new(self)
    }
}

impl<S: Sequence> SequenceExt for S {}
