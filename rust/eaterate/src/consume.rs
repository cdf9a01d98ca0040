//! Terminal operations that drive a sequence.
//!
//! Every method of [`ConsumeExt`] takes the sequence by `&mut` and advances it
//! until it has its answer: the draining ones (`count`, `fold`, the
//! collectors, ...) run to exhaustion, the searching ones (`nth`, `find`,
//! `all`, `any`) stop as soon as the result is known and leave the remainder
//! in place.

use std::{
    collections::{BTreeMap, HashSet, VecDeque},
    fmt::Display,
    hash::Hash,
};

use eaterate_common::{
    Result,
    error::{Error, StdErrorBoxed},
};

use crate::{
    maybe::{Absent, Maybe, Present},
    sequence::Sequence,
    source::SeqIter,
};

/// Extension trait providing the terminal operations for every [`Sequence`].
pub trait ConsumeExt: Sequence {
    /// Drains the sequence and returns the number of elements it produced.
    fn count(&mut self) -> usize {
        let mut n = 0;
        while self.advance().is_present() {
            n += 1;
        }
        n
    }

    /// Drains the sequence and returns its last element.
    fn last(&mut self) -> Maybe<Self::Item> {
        let mut last = Absent;
        while let Present(value) = self.advance() {
            last = Present(value);
        }
        last
    }

    /// Returns the `n`-th (0-based) element, or `Absent` if the sequence ends first.
    ///
    /// The preceding elements are consumed.
    fn nth(&mut self, mut n: usize) -> Maybe<Self::Item> {
        loop {
            let value = self.advance();
            if n == 0 || value.is_absent() {
                return value;
            }
            n -= 1;
        }
    }

    /// Returns the element at `index`, failing with `IndexOutOfRange` if the
    /// sequence ends first.
    ///
    /// ```
    /// use eaterate::prelude::*;
    ///
    /// assert_eq!(eater([10, 20, 30, 40]).get(2).unwrap(), 30);
    /// assert!(eater([10, 20, 30, 40]).get(10).is_err());
    /// ```
    fn get(&mut self, index: usize) -> Result<Self::Item> {
        match self.nth(index) {
            Present(value) => Ok(value),
            Absent => Err(Error::index_out_of_range(index)),
        }
    }

    /// Tests whether every element satisfies `predicate`.
    ///
    /// Stops at the first failure. `true` for an empty sequence.
    fn all<P>(&mut self, mut predicate: P) -> bool
    where
        P: FnMut(Self::Item) -> bool,
    {
        while let Present(value) = self.advance() {
            if !predicate(value) {
                return false;
            }
        }
        true
    }

    /// Tests whether any element satisfies `predicate`.
    ///
    /// Stops at the first success. `false` for an empty sequence.
    fn any<P>(&mut self, mut predicate: P) -> bool
    where
        P: FnMut(Self::Item) -> bool,
    {
        while let Present(value) = self.advance() {
            if predicate(value) {
                return true;
            }
        }
        false
    }

    /// Returns the first element satisfying `predicate`.
    fn find<P>(&mut self, mut predicate: P) -> Maybe<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        while let Present(value) = self.advance() {
            if predicate(&value) {
                return Present(value);
            }
        }
        Absent
    }

    /// Left fold over all elements.
    ///
    /// ```
    /// use eaterate::prelude::*;
    ///
    /// let res = eater([1, 2, 3]).fold("0".to_string(), |acc, x| format!("({acc} + {x})"));
    /// assert_eq!(res, "(((0 + 1) + 2) + 3)");
    /// ```
    fn fold<B, F>(&mut self, init: B, mut f: F) -> B
    where
        F: FnMut(B, Self::Item) -> B,
    {
        let mut acc = init;
        while let Present(value) = self.advance() {
            acc = f(acc, value);
        }
        acc
    }

    /// Calls `f` on every element.
    fn for_each<F>(&mut self, mut f: F)
    where
        F: FnMut(Self::Item),
    {
        while let Present(value) = self.advance() {
            f(value);
        }
    }

    /// Calls the fallible `f` on every element, stopping at the first error.
    ///
    /// The error is returned as a value; `None` means the sequence was drained
    /// without failure.
    fn try_for_each<E, F>(&mut self, mut f: F) -> Option<E>
    where
        F: FnMut(Self::Item) -> std::result::Result<(), E>,
    {
        let mut visited = 0usize;
        while let Present(value) = self.advance() {
            if let Err(err) = f(value) {
                log::debug!("try_for_each stopped after {visited} elements");
                return Some(err);
            }
            visited += 1;
        }
        None
    }

    /// Like [`try_for_each`](ConsumeExt::try_for_each), but only errors of
    /// type `K` stop the drain and are returned as `Ok(Some(k))`.
    ///
    /// Any other error is passed through as `Err`, unchanged, and also stops
    /// the drain.
    fn try_for_each_kind<K, F>(&mut self, mut f: F) -> std::result::Result<Option<K>, StdErrorBoxed>
    where
        K: std::error::Error + 'static,
        F: FnMut(Self::Item) -> std::result::Result<(), StdErrorBoxed>,
    {
        while let Present(value) = self.advance() {
            if let Err(err) = f(value) {
                return match err.downcast::<K>() {
                    Ok(caught) => {
                        log::debug!("try_for_each_kind caught: {caught}");
                        Ok(Some(*caught))
                    }
                    Err(other) => Err(other),
                };
            }
        }
        Ok(None)
    }

    /// Drains the sequence into any collection implementing [`FromIterator`].
    fn collect<C>(&mut self) -> C
    where
        C: FromIterator<Self::Item>,
    {
        SeqIter::new(self).collect()
    }

    /// Drains the sequence into a `Vec`, in order.
    fn collect_vec(&mut self) -> Vec<Self::Item> {
        self.collect()
    }

    /// Drains the sequence into a `VecDeque`, reversed if `reverse` is set.
    fn collect_deque(&mut self, reverse: bool) -> VecDeque<Self::Item> {
        let mut deque = VecDeque::new();
        while let Present(value) = self.advance() {
            if reverse {
                deque.push_front(value);
            } else {
                deque.push_back(value);
            }
        }
        deque
    }

    /// Drains the sequence into a map keyed by 0-based position.
    fn collect_indexed(&mut self) -> BTreeMap<usize, Self::Item> {
        let mut map = BTreeMap::new();
        let mut index = 0;
        while let Present(value) = self.advance() {
            map.insert(index, value);
            index += 1;
        }
        map
    }

    /// Drains the sequence, concatenating the `Display` form of each element.
    ///
    /// ```
    /// use eaterate::prelude::*;
    ///
    /// assert_eq!(eater(["m", "o", "n", "e", "y"]).collect_string(), "money");
    /// ```
    fn collect_string(&mut self) -> String
    where
        Self::Item: Display,
    {
        let mut s = String::new();
        while let Present(value) = self.advance() {
            s.push_str(&value.to_string());
        }
        s
    }

    /// Drains the sequence into a `HashSet`, dropping duplicates.
    fn collect_set(&mut self) -> HashSet<Self::Item>
    where
        Self::Item: Eq + Hash,
    {
        self.collect()
    }
}

impl<S: Sequence + ?Sized> ConsumeExt for S {}
