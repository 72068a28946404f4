//! Binding sugar over `map`, `chain` and `ap`.
//!
//! Without anonymous records, each step pairs the new value with everything
//! bound so far, so a three-step chain ends as `(((), a), b), c)`-shaped
//! tuples. Start from [`NonEmptyVec::unit`] or lift existing elements with
//! [`NonEmptyVec::tupled`].

use crate::types::NonEmptyVec;

impl NonEmptyVec<()> {
    /// A single `()` to start a binding chain from
    pub fn unit() -> Self {
        NonEmptyVec::new(())
    }
}

impl<T> NonEmptyVec<T> {
    /// Wraps each element in a one-field tuple to start a binding chain from existing values
    pub fn tupled(self) -> NonEmptyVec<(T,)> {
        self.map(|item| (item,))
    }

    /// Dependent step: `f` may look at what is bound so far
    pub fn bind<B, F>(self, mut f: F) -> NonEmptyVec<(T, B)>
    where
        T: Clone,
        F: FnMut(&T) -> NonEmptyVec<B>,
    {
        self.chain(|bound| f(&bound).map(|next| (bound.clone(), next)))
    }

    /// Pure step: binds a single computed value
    pub fn let_<B, F>(self, mut f: F) -> NonEmptyVec<(T, B)>
    where
        F: FnMut(&T) -> B,
    {
        self.map(|bound| {
            let next = f(&bound);
            (bound, next)
        })
    }

    /// Independent step: pairs with every element of `other`
    pub fn ap_s<B>(self, other: &NonEmptyVec<B>) -> NonEmptyVec<(T, B)>
    where
        T: Clone,
        B: Clone,
    {
        self.map(|bound| move |next: B| (bound.clone(), next))
            .ap(other)
    }
}
