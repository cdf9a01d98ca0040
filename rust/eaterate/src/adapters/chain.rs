//! A sequence adapter that yields one sequence after another.

use crate::{
    maybe::{Absent, Maybe, Present},
    sequence::Sequence,
};

/// Yields every element of `a`, then every element of `b`.
///
/// Once `a` reports exhaustion it is never consulted again.
#[derive(Debug, Clone)]
pub struct Chain<A, B> {
    a: A,
    b: B,
    /// Set once `a` has returned `Absent`.
    done: bool,
}

impl<A, B> Chain<A, B> {
    pub fn new(a: A, b: B) -> Self {
        Chain { a, b, done: false }
    }
}

impl<A, B> Sequence for Chain<A, B>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
{
    type Item = A::Item;

    #[inline]
    fn advance(&mut self) -> Maybe<A::Item> {
        if !self.done {
            match self.a.advance() {
                Present(value) => return Present(value),
                Absent => self.done = true,
            }
        }
        self.b.advance()
    }
}
