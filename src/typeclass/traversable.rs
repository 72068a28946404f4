use super::{Applicative, Foldable, Functor};

/// Element-wise effectful transformation
///
/// The effect `G` is chosen by the caller. Elements are visited once, strictly
/// left to right, and their effects are combined in that order with `G`'s own
/// `map2`, so whatever short-circuiting `G` does is preserved
pub trait Traversable: Functor + Foldable {
    fn traverse<G, A, B, F>(ta: Self::Of<A>, f: F) -> G::Of<Self::Of<B>>
    where
        G: Applicative,
        B: Clone,
        F: FnMut(A) -> G::Of<B>;

    fn sequence<G, A>(tga: Self::Of<G::Of<A>>) -> G::Of<Self::Of<A>>
    where
        G: Applicative,
        A: Clone,
    {
        Self::traverse::<G, G::Of<A>, A, _>(tga, |ga| ga)
    }
}

pub trait TraversableWithIndex: Traversable {
    fn traverse_with_index<G, A, B, F>(ta: Self::Of<A>, f: F) -> G::Of<Self::Of<B>>
    where
        G: Applicative,
        B: Clone,
        F: FnMut(usize, A) -> G::Of<B>;
}
