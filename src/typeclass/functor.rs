use super::Kind;

/// Element-wise transformation that preserves shape
///
/// Laws: `map(fa, |a| a) == fa` and
/// `map(map(fa, f), g) == map(fa, |a| g(f(a)))`
pub trait Functor: Kind {
    fn map<A, B, F>(fa: Self::Of<A>, f: F) -> Self::Of<B>
    where
        F: FnMut(A) -> B;
}

/// `Functor` that also reports each element's position, starting at 0
pub trait FunctorWithIndex: Functor {
    fn map_with_index<A, B, F>(fa: Self::Of<A>, f: F) -> Self::Of<B>
    where
        F: FnMut(usize, A) -> B;
}
