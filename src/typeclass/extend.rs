use super::Functor;

/// Context-aware transformation: `f` sees the whole structure at each position
///
/// Law: `extend(extend(w, f), g) == extend(w, |x| g(&extend(x.clone(), f)))`
pub trait Extend: Functor {
    fn extend<A, B, F>(wa: Self::Of<A>, f: F) -> Self::Of<B>
    where
        A: Clone,
        F: FnMut(&Self::Of<A>) -> B;

    fn duplicate<A>(wa: Self::Of<A>) -> Self::Of<Self::Of<A>>
    where
        A: Clone,
        Self::Of<A>: Clone,
    {
        Self::extend::<A, Self::Of<A>, _>(wa, |w| w.clone())
    }
}

/// Laws: `extract(extend(w, f)) == f(&w)` and `extend(w, extract) == w`
pub trait Comonad: Extend {
    fn extract<A>(wa: Self::Of<A>) -> A;
}
