use super::Functor;

/// Combines a computation with a lazily supplied alternative
///
/// What "alternative" means is up to the kind: `Option` keeps the first `Some`,
/// while the sequence kinds always evaluate `that` and concatenate
pub trait Alt: Functor {
    fn alt<A, F>(fa: Self::Of<A>, that: F) -> Self::Of<A>
    where
        F: FnOnce() -> Self::Of<A>;
}
