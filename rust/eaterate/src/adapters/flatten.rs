//! A sequence adapter that flattens a sequence of sequence-like elements.

use crate::{
    macros::present_or_return,
    maybe::{Absent, Maybe, Present},
    sequence::Sequence,
    source::IntoSequence,
};

/// Yields the elements of each inner sequence in turn.
///
/// Every outer element is normalized through [`IntoSequence`], so the outer
/// sequence may produce sequences, vectors, arrays or any other supported
/// shape. Empty inner sequences are skipped. The adapter reports `Absent`
/// only when the outer sequence is exhausted and no inner sequence is active.
///
/// Construction pulls nothing from the outer sequence: the first outer
/// element is taken by the first `advance`. A side-effecting outer sequence
/// is therefore untouched until the flattened sequence is driven, unlike
/// [`peeked`](crate::SequenceExt::peeked) and friends.
pub struct Flatten<S>
where
    S: Sequence,
    S::Item: IntoSequence,
{
    outer: S,
    /// The inner sequence currently being drained.
    inner: Maybe<<S::Item as IntoSequence>::IntoSeq>,
}

impl<S> Flatten<S>
where
    S: Sequence,
    S::Item: IntoSequence,
{
    pub fn new(outer: S) -> Self {
        Flatten {
            outer,
            inner: Absent,
        }
    }
}

impl<S> Sequence for Flatten<S>
where
    S: Sequence,
    S::Item: IntoSequence,
{
    type Item = <S::Item as IntoSequence>::Item;

    fn advance(&mut self) -> Maybe<Self::Item> {
        loop {
            if let Present(inner) = &mut self.inner {
                if let Present(value) = inner.advance() {
                    return Present(value);
                }
                log::trace!("flatten: inner sequence exhausted");
                self.inner = Absent;
            }
            let next = present_or_return!(self.outer.advance());
            self.inner.replace(next.into_sequence());
        }
    }
}
