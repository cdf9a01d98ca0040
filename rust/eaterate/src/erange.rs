//! Integer range sequences.
//!
//! [`erange`] builds an [`ERange`] from std range syntax:
//!
//! - `..stop` yields `0, 1, ..., stop - 1`;
//! - `start..stop` yields `start, ..., stop - 1`;
//! - `start..` never ends (in practice it stops after `i64::MAX`).
//!
//! Inclusive ends (`..=stop`, `start..=stop`) are accepted as well, and
//! [`ERange::inclusive`] turns a half-open range into a closed one.

use std::ops::{Bound, RangeBounds};

use crate::{
    maybe::{Absent, Maybe, Present},
    sequence::Sequence,
};

/// Exclusive bound one past `i64::MAX`, the end of an unbounded range.
const UNBOUNDED_STOP: i128 = i64::MAX as i128 + 1;

/// A sequence of consecutive `i64` values.
///
/// The cursor and the exclusive bound are kept as `i128`, so the bound can
/// sit one past `i64::MAX` without overflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ERange {
    cursor: i128,
    stop: i128,
    bounded: bool,
}

impl ERange {
    /// Creates the half-open range `[start, stop)`.
    pub fn new(start: i64, stop: i64) -> Self {
        ERange {
            cursor: start as i128,
            stop: stop as i128,
            bounded: true,
        }
    }

    /// Creates the range `[start, +inf)`.
    pub fn unbounded(start: i64) -> Self {
        ERange {
            cursor: start as i128,
            stop: UNBOUNDED_STOP,
            bounded: false,
        }
    }

    /// Makes the range include its end bound by moving the exclusive bound up by one.
    ///
    /// The range is changed in place and returned for chaining. An unbounded
    /// range is left unchanged.
    ///
    /// ```
    /// use eaterate::prelude::*;
    ///
    /// let mut eat = erange(0..3);
    /// eat.inclusive();
    /// assert_eq!(eat.collect_vec(), vec![0, 1, 2, 3]);
    ///
    /// assert_eq!(erange(..2).inclusive().collect_vec(), vec![0, 1, 2]);
    /// ```
    pub fn inclusive(&mut self) -> &mut Self {
        if self.bounded {
            self.stop = (self.stop + 1).min(UNBOUNDED_STOP);
        }
        self
    }

    /// Whether the range has an end bound.
    pub fn is_bounded(&self) -> bool {
        self.bounded
    }
}

impl Sequence for ERange {
    type Item = i64;

    #[inline]
    fn advance(&mut self) -> Maybe<i64> {
        if self.cursor >= self.stop {
            return Absent;
        }
        let value = self.cursor as i64;
        self.cursor += 1;
        Present(value)
    }
}

/// Creates an integer range sequence from std range syntax.
///
/// A missing start bound means 0, a missing end bound means unbounded.
///
/// ```
/// use eaterate::prelude::*;
///
/// assert_eq!(erange(..3).collect_vec(), vec![0, 1, 2]);
/// assert_eq!(erange(5..8).collect_vec(), vec![5, 6, 7]);
/// assert_eq!(erange(10..).take(2).collect_vec(), vec![10, 11]);
/// ```
pub fn erange<R: RangeBounds<i64>>(range: R) -> ERange {
    let start = match range.start_bound() {
        Bound::Included(&s) => s as i128,
        Bound::Excluded(&s) => s as i128 + 1,
        Bound::Unbounded => 0,
    };
    let (stop, bounded) = match range.end_bound() {
        Bound::Included(&e) => (e as i128 + 1, true),
        Bound::Excluded(&e) => (e as i128, true),
        Bound::Unbounded => (UNBOUNDED_STOP, false),
    };
    ERange {
        cursor: start,
        stop,
        bounded,
    }
}
