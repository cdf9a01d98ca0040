//! The pull-based iteration contract.
//!
//! A [`Sequence`] produces its elements one at a time through
//! [`Sequence::advance`]. Sequences are stateful and single-pass: every call
//! moves an internal cursor, and a sequence cannot be restarted or shared
//! between independent consumers.
//!
//! # Exhaustion
//!
//! Once `advance` has returned [`Absent`](crate::Absent), every later call is
//! expected to return `Absent` as well. All sources in this crate honor that,
//! and every adapter preserves it for an upstream that honors it. A hand-written
//! sequence that may resume after `Absent` can be wrapped with
//! [`fuse`](crate::SequenceExt::fuse) to get the same guarantee.

use crate::maybe::Maybe;

/// The iteration contract: produce the next element or signal exhaustion.
///
/// # Example
///
/// ```
/// use eaterate::prelude::*;
///
/// struct Countdown(u32);
///
/// impl Sequence for Countdown {
///     type Item = u32;
///
///     fn advance(&mut self) -> Maybe<u32> {
///         if self.0 == 0 {
///             return Maybe::absent();
///         }
///         self.0 -= 1;
///         Maybe::present(self.0)
///     }
/// }
///
/// assert_eq!(Countdown(3).collect_vec(), vec![2, 1, 0]);
/// ```
pub trait Sequence {
    /// The type of the elements produced.
    type Item;

    /// Pulls the next element, or returns `Absent` when the sequence is exhausted.
    fn advance(&mut self) -> Maybe<Self::Item>;

    /// Borrows the sequence mutably, so that an adapter chain can consume part
    /// of it and leave the remainder to the caller.
    fn by_ref(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        self
    }
}

impl<S: Sequence + ?Sized> Sequence for &mut S {
    type Item = S::Item;

    #[inline]
    fn advance(&mut self) -> Maybe<Self::Item> {
        (**self).advance()
    }
}

impl<S: Sequence + ?Sized> Sequence for Box<S> {
    type Item = S::Item;

    #[inline]
    fn advance(&mut self) -> Maybe<Self::Item> {
        (**self).advance()
    }
}

/// A type-erased, heap-allocated sequence.
pub type BoxedSequence<'a, T> = Box<dyn Sequence<Item = T> + 'a>;
