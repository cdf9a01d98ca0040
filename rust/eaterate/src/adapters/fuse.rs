//! A sequence adapter that makes exhaustion permanent.

use crate::{
    maybe::{Absent, Maybe},
    sequence::Sequence,
};

/// Forwards upstream elements until the first `Absent`, then never consults
/// upstream again.
#[derive(Debug, Clone)]
pub struct Fuse<S> {
    inner: S,
    done: bool,
}

impl<S> Fuse<S> {
    pub fn new(inner: S) -> Self {
        Fuse { inner, done: false }
    }
}

impl<S: Sequence> Sequence for Fuse<S> {
    type Item = S::Item;

    #[inline]
    fn advance(&mut self) -> Maybe<S::Item> {
        if self.done {
            return Absent;
        }
        let value = self.inner.advance();
        if value.is_absent() {
            self.done = true;
        }
        value
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    /// Alternates between a value and `Absent`.
    struct Blinking {
        on: bool,
    }

    impl Sequence for Blinking {
        type Item = u8;

        fn advance(&mut self) -> Maybe<u8> {
            self.on = !self.on;
            if self.on {
                Maybe::present(1)
            } else {
                Maybe::absent()
            }
        }
    }

    #[test]
    fn test_fuse_stops_resumption() {
        let mut raw = Blinking { on: false };
        assert_eq!(raw.advance(), Maybe::present(1));
        assert_eq!(raw.advance(), Maybe::absent());
        assert_eq!(raw.advance(), Maybe::present(1));

        let mut fused = Blinking { on: false }.fuse();
        assert_eq!(fused.advance(), Maybe::present(1));
        assert_eq!(fused.advance(), Maybe::absent());
        assert_eq!(fused.advance(), Maybe::absent());
        assert_eq!(fused.advance(), Maybe::absent());
    }
}
