use std::marker::PhantomData;

use super::{Alt, Applicative, Apply, Chain, Functor};

/// Stands in for a type constructor: `K::Of<T>` is "K applied to T"
///
/// Implementors are zero-sized markers. They carry no state and exist only so
/// the capability traits have something to hang their static methods on
pub trait Kind {
    type Of<T>;
}

/// The trivial effect: a value with nothing around it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    pub fn into_inner(self) -> A {
        self.0
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityKind;

#[derive(Debug, Clone, Copy, Default)]
pub struct OptionKind;

/// `Result<_, E>` with the error type fixed. The first `Err` encountered wins
#[derive(Debug, Clone, Copy, Default)]
pub struct ResultKind<E>(PhantomData<E>);

/// Possibly-empty lists with cartesian (non-deterministic) application
#[derive(Debug, Clone, Copy, Default)]
pub struct VecKind;

impl Kind for IdentityKind {
    type Of<T> = Identity<T>;
}

impl Kind for OptionKind {
    type Of<T> = Option<T>;
}

impl<E> Kind for ResultKind<E> {
    type Of<T> = Result<T, E>;
}

impl Kind for VecKind {
    type Of<T> = Vec<T>;
}

impl Functor for IdentityKind {
    fn map<A, B, F>(fa: Identity<A>, mut f: F) -> Identity<B>
    where
        F: FnMut(A) -> B,
    {
        Identity(f(fa.0))
    }
}

impl Apply for IdentityKind {
    fn map2<A, B, C, F>(fa: Identity<A>, fb: Identity<B>, mut f: F) -> Identity<C>
    where
        A: Clone,
        B: Clone,
        F: FnMut(A, B) -> C,
    {
        Identity(f(fa.0, fb.0))
    }
}

impl Applicative for IdentityKind {
    fn of<A>(a: A) -> Identity<A> {
        Identity(a)
    }
}

impl Chain for IdentityKind {
    fn chain<A, B, F>(fa: Identity<A>, mut f: F) -> Identity<B>
    where
        F: FnMut(A) -> Identity<B>,
    {
        f(fa.0)
    }
}

impl Functor for OptionKind {
    fn map<A, B, F>(fa: Option<A>, f: F) -> Option<B>
    where
        F: FnMut(A) -> B,
    {
        fa.map(f)
    }
}

impl Apply for OptionKind {
    fn map2<A, B, C, F>(fa: Option<A>, fb: Option<B>, mut f: F) -> Option<C>
    where
        A: Clone,
        B: Clone,
        F: FnMut(A, B) -> C,
    {
        Some(f(fa?, fb?))
    }
}

impl Applicative for OptionKind {
    fn of<A>(a: A) -> Option<A> {
        Some(a)
    }
}

impl Chain for OptionKind {
    fn chain<A, B, F>(fa: Option<A>, f: F) -> Option<B>
    where
        F: FnMut(A) -> Option<B>,
    {
        fa.and_then(f)
    }
}

impl Alt for OptionKind {
    fn alt<A, F>(fa: Option<A>, that: F) -> Option<A>
    where
        F: FnOnce() -> Option<A>,
    {
        fa.or_else(that)
    }
}

impl<E> Functor for ResultKind<E> {
    fn map<A, B, F>(fa: Result<A, E>, f: F) -> Result<B, E>
    where
        F: FnMut(A) -> B,
    {
        fa.map(f)
    }
}

impl<E> Apply for ResultKind<E> {
    fn map2<A, B, C, F>(fa: Result<A, E>, fb: Result<B, E>, mut f: F) -> Result<C, E>
    where
        A: Clone,
        B: Clone,
        F: FnMut(A, B) -> C,
    {
        Ok(f(fa?, fb?))
    }
}

impl<E> Applicative for ResultKind<E> {
    fn of<A>(a: A) -> Result<A, E> {
        Ok(a)
    }
}

impl<E> Chain for ResultKind<E> {
    fn chain<A, B, F>(fa: Result<A, E>, f: F) -> Result<B, E>
    where
        F: FnMut(A) -> Result<B, E>,
    {
        fa.and_then(f)
    }
}

impl<E> Alt for ResultKind<E> {
    fn alt<A, F>(fa: Result<A, E>, that: F) -> Result<A, E>
    where
        F: FnOnce() -> Result<A, E>,
    {
        fa.or_else(|_| that())
    }
}

impl Functor for VecKind {
    fn map<A, B, F>(fa: Vec<A>, f: F) -> Vec<B>
    where
        F: FnMut(A) -> B,
    {
        fa.into_iter().map(f).collect()
    }
}

impl Apply for VecKind {
    fn map2<A, B, C, F>(fa: Vec<A>, fb: Vec<B>, mut f: F) -> Vec<C>
    where
        A: Clone,
        B: Clone,
        F: FnMut(A, B) -> C,
    {
        let mut out = Vec::with_capacity(fa.len() * fb.len());
        for a in fa {
            for b in fb.iter().cloned() {
                out.push(f(a.clone(), b));
            }
        }
        out
    }
}

impl Applicative for VecKind {
    fn of<A>(a: A) -> Vec<A> {
        vec![a]
    }
}

impl Chain for VecKind {
    fn chain<A, B, F>(fa: Vec<A>, f: F) -> Vec<B>
    where
        F: FnMut(A) -> Vec<B>,
    {
        fa.into_iter().flat_map(f).collect()
    }
}

impl Alt for VecKind {
    fn alt<A, F>(mut fa: Vec<A>, that: F) -> Vec<A>
    where
        F: FnOnce() -> Vec<A>,
    {
        fa.extend(that());
        fa
    }
}
