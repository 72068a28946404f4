use super::{Applicative, Apply};

/// Dependent sequencing
///
/// Law: `chain(chain(fa, f), g) == chain(fa, |a| chain(f(a), g))`
pub trait Chain: Apply {
    fn chain<A, B, F>(fa: Self::Of<A>, f: F) -> Self::Of<B>
    where
        F: FnMut(A) -> Self::Of<B>;

    fn flatten<A>(ffa: Self::Of<Self::Of<A>>) -> Self::Of<A> {
        Self::chain::<Self::Of<A>, A, _>(ffa, |fa| fa)
    }
}

/// Laws: `chain(of(a), f) == f(a)` and `chain(fa, of) == fa`
pub trait Monad: Applicative + Chain {}

impl<M: Applicative + Chain> Monad for M {}
