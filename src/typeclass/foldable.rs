use super::{Kind, Semigroup};

/// Reduction of a structure with at least one element
///
/// Because there is always a first element, `fold_map` needs only a semigroup
/// It combines left to right, so the semigroup need not be commutative
pub trait Foldable: Kind {
    fn reduce<A, B, F>(fa: Self::Of<A>, init: B, f: F) -> B
    where
        F: FnMut(B, A) -> B;

    fn reduce_right<A, B, F>(fa: Self::Of<A>, init: B, f: F) -> B
    where
        F: FnMut(A, B) -> B;

    fn fold_map<A, M, S, F>(fa: Self::Of<A>, semigroup: &S, f: F) -> M
    where
        S: Semigroup<M>,
        F: FnMut(A) -> M;
}

pub trait FoldableWithIndex: Foldable {
    fn reduce_with_index<A, B, F>(fa: Self::Of<A>, init: B, f: F) -> B
    where
        F: FnMut(usize, B, A) -> B;

    fn reduce_right_with_index<A, B, F>(fa: Self::Of<A>, init: B, f: F) -> B
    where
        F: FnMut(usize, A, B) -> B;

    fn fold_map_with_index<A, M, S, F>(fa: Self::Of<A>, semigroup: &S, f: F) -> M
    where
        S: Semigroup<M>,
        F: FnMut(usize, A) -> M;
}
