//! The two-state optional value every sequence produces.
//!
//! [`Maybe<T>`] is either `Present(value)` or `Absent`. Adapters branch on this
//! tag to decide whether an upstream pull produced an element or signaled
//! exhaustion. There is no default state: a `Maybe` is always constructed as
//! one of the two variants.

use eaterate_common::{Result, error::Error};

/// An optional value: `Present(value)` or `Absent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use]
pub enum Maybe<T> {
    /// A value is present.
    Present(T),
    /// No value.
    Absent,
}

pub use Maybe::{Absent, Present};

impl<T> Maybe<T> {
    /// Creates a present value.
    #[inline]
    pub fn present(value: T) -> Self {
        Present(value)
    }

    /// Creates an absent value.
    #[inline]
    pub fn absent() -> Self {
        Absent
    }

    #[inline]
    pub fn is_present(&self) -> bool {
        matches!(self, Present(_))
    }

    #[inline]
    pub fn is_absent(&self) -> bool {
        matches!(self, Absent)
    }

    /// Applies `f` to the contained value. `f` is never invoked on `Absent`.
    #[inline]
    pub fn map<K, F>(self, f: F) -> Maybe<K>
    where
        F: FnOnce(T) -> K,
    {
        match self {
            Present(v) => Present(f(v)),
            Absent => Absent,
        }
    }

    /// Returns the contained value.
    ///
    /// # Panics
    ///
    /// Panics with an invariant violation when called on `Absent`.
    /// Use [`Maybe::try_unwrap`] to receive the violation as an error value.
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Present(v) => v,
            Absent => panic!("invariant violation: cannot unwrap an absent value"),
        }
    }

    /// Returns the contained value, or `InvariantViolation` when absent.
    pub fn try_unwrap(self) -> Result<T> {
        match self {
            Present(v) => Ok(v),
            Absent => Err(Error::invariant_violation(
                "cannot unwrap an absent value",
            )),
        }
    }

    /// Returns the contained value or `default`. Never fails.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Present(v) => v,
            Absent => default,
        }
    }

    /// Overwrites this slot with `Present(value)` and returns it.
    ///
    /// Intended for memo/lookahead slots; the previous state is dropped.
    #[inline]
    pub fn replace(&mut self, value: T) -> &mut Self {
        *self = Present(value);
        self
    }

    /// Moves the value out, leaving `Absent` in its place.
    #[inline]
    pub fn take(&mut self) -> Maybe<T> {
        std::mem::replace(self, Absent)
    }

    #[inline]
    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Present(v) => Present(v),
            Absent => Absent,
        }
    }

    /// Converts into the standard library option.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Present(v) => Some(v),
            Absent => None,
        }
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Present(v),
            None => Absent,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(value: Maybe<T>) -> Self {
        value.into_option()
    }
}
