//! Lazy, pull-based sequences with composable adapters.
//!
//! This crate is built around a minimal iteration contract, [`Sequence`], whose
//! single operation [`advance`](Sequence::advance) yields the next element as
//! [`Maybe::Present`] or signals exhaustion with [`Maybe::Absent`]. It offers:
//!
//! - **Sources**: [`eater`] for any std iterable or iterator, [`erange`] for
//!   integer ranges, and [`IntoSequence`] so raw collections can be passed
//!   wherever a sequence is expected
//! - **Adapters**: map, filter, chain, zip, intersperse, enumerate, peeked,
//!   skip, take, step_by, flatten, windows and fuse, via [`SequenceExt`]
//! - **Terminal operations**: counting, searching, folding and collecting, via
//!   [`ConsumeExt`]
//!
//! Sequences are single-threaded and single-pass; each adapter owns its
//! upstream, so a pipeline is a chain of owners driven from the outermost
//! adapter.
//!
//! # Example
//!
//! ```
//! use eaterate::prelude::*;
//!
//! let separators = erange(0..20)
//!     .map(|c| char::from(c as u8))
//!     .take(10)
//!     .intersperse('X')
//!     .filter(|&c| c == 'X')
//!     .collect_vec();
//! assert_eq!(separators.len(), 9);
//! ```

mod macros;

pub mod adapters;
pub mod consume;
pub mod erange;
pub mod maybe;
pub mod sequence;
pub mod source;

pub use adapters::SequenceExt;
pub use consume::ConsumeExt;
pub use erange::{ERange, erange};
pub use maybe::{Absent, Maybe, Present};
pub use sequence::{BoxedSequence, Sequence};
pub use source::{Eater, IntoSequence, SeqIter, eater, try_eater};

pub use eaterate_common::{
    Result,
    error::{Error, ErrorKind},
};

/// Glob-importable set of the traits and constructors needed to build and drive pipelines.
pub mod prelude {
    pub use crate::{
        adapters::SequenceExt,
        consume::ConsumeExt,
        erange::{ERange, erange},
        maybe::Maybe,
        sequence::{BoxedSequence, Sequence},
        source::{IntoSequence, eater},
    };
}
