//! Non-empty, immutable sequences and the algebra over them.
//!
//! [`NonEmptyVec`] always holds at least one element, so `head`, `last`, `min`,
//! `max` and `concat_all` are total. Everything that cannot prove its result is
//! non-empty (`from_vec`, `filter`, index-based edits) returns `Option` instead.
//!
//! ```
//! use nonempty_seq::typeclass::Natural;
//! use nonempty_seq::NonEmptyVec;
//!
//! let xs = NonEmptyVec::from_parts(1, vec![2, 1, 1]);
//! let runs = xs.group(&Natural);
//! assert_eq!(runs.len(), 3);
//! assert_eq!(runs.last().len(), 2);
//! ```
//!
//! The capability traits in [`typeclass`] describe the same operations for
//! generic code; `traverse` takes the target effect as a [`typeclass::Kind`]
//! marker such as [`typeclass::OptionKind`].

mod do_notation;
pub mod error;
pub mod typeclass;
pub mod types;

pub use error::{EmptyError, IndexError};
pub use types::{append, group_by, is_non_empty, prepend, NonEmptyVec, NonEmptyVecKind};
