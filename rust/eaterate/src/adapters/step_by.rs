//! A sequence adapter that yields every `step`-th element.

use eaterate_common::{Result, verify_arg};

use crate::{maybe::Maybe, sequence::Sequence};

/// Yields the 0th, `step`-th, `2 * step`-th ... upstream results.
///
/// Positions are counted in upstream pulls, not in present elements: every
/// call pulls until it lands on the next position of the stride, discarding
/// whatever the intermediate pulls returned. With `step == 1` every call is
/// forwarded unchanged.
#[derive(Debug, Clone)]
pub struct StepBy<S> {
    inner: S,
    step: usize,
    /// Position of the next pull within the current stride.
    phase: usize,
}

impl<S> StepBy<S> {
    /// Creates a new `StepBy` adapter.
    ///
    /// Fails with `InvalidArgument` if `step` is 0.
    pub fn new(inner: S, step: usize) -> Result<Self> {
        verify_arg!(step, step > 0);
        Ok(StepBy {
            inner,
            step,
            phase: 0,
        })
    }
}

impl<S: Sequence> Sequence for StepBy<S> {
    type Item = S::Item;

    fn advance(&mut self) -> Maybe<S::Item> {
        if self.step == 1 {
            return self.inner.advance();
        }
        loop {
            let value = self.inner.advance();
            if self.phase == 0 {
                self.phase = 1;
                return value;
            }
            self.phase = (self.phase + 1) % self.step;
        }
    }
}
