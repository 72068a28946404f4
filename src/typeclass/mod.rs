//! Capability contracts.
//!
//! Two families live here. The element-level descriptors (`TotalOrder`,
//! `Equivalence`, `Semigroup`, `Show`) are supplied by callers and passed by
//! reference into the combinators that need them; closures of the matching shape
//! implement them directly, and [`Natural`] delegates to the std traits.
//!
//! The container-level capabilities (`Functor` through `Alt`) are keyed to a
//! [`Kind`] marker standing in for a type constructor, so generic algorithms such
//! as `traverse` can be written against any effect the caller picks.

mod alt;
mod apply;
mod chain;
mod eq;
mod extend;
mod foldable;
mod functor;
mod kind;
mod ord;
mod semigroup;
mod show;
mod traversable;

pub use alt::Alt;
pub use apply::{Applicative, Apply};
pub use chain::{Chain, Monad};
pub use eq::Equivalence;
pub use extend::{Comonad, Extend};
pub use foldable::{Foldable, FoldableWithIndex};
pub use functor::{Functor, FunctorWithIndex};
pub use kind::{Identity, IdentityKind, Kind, OptionKind, ResultKind, VecKind};
pub use ord::{
    comparing, induced_eq, max_of, min_of, reversed, Comparing, Induced, MaxOf, MinOf, Reversed,
    TotalOrder,
};
pub use semigroup::Semigroup;
pub use show::Show;
pub use traversable::{Traversable, TraversableWithIndex};

/// Descriptor that defers to the element type's own std implementation
/// (`Ord`, `PartialEq` or `Debug`)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Natural;
