use super::Functor;

/// Combines independent computations
///
/// `map2` is the primitive; `ap` is derived from it. The `Clone` bounds let
/// list-like kinds reuse operands across every pairing
pub trait Apply: Functor {
    fn map2<A, B, C, F>(fa: Self::Of<A>, fb: Self::Of<B>, f: F) -> Self::Of<C>
    where
        A: Clone,
        B: Clone,
        F: FnMut(A, B) -> C;

    fn ap<A, B, G>(fab: Self::Of<G>, fa: Self::Of<A>) -> Self::Of<B>
    where
        A: Clone,
        G: Clone + FnMut(A) -> B,
    {
        Self::map2::<G, A, B, _>(fab, fa, |mut g, a| g(a))
    }
}

/// `Apply` with a way to lift a plain value
///
/// Laws: identity `ap(of(id), v) == v`, homomorphism
/// `ap(of(f), of(x)) == of(f(x))`, and interchange
pub trait Applicative: Apply {
    fn of<A>(a: A) -> Self::Of<A>;
}
