use super::Natural;

/// Structural equality supplied by the caller
///
/// Must be reflexive, symmetric and transitive
pub trait Equivalence<A: ?Sized> {
    fn equals(&self, x: &A, y: &A) -> bool;
}

impl<A: ?Sized, F> Equivalence<A> for F
where
    F: Fn(&A, &A) -> bool,
{
    fn equals(&self, x: &A, y: &A) -> bool {
        self(x, y)
    }
}

impl<A: PartialEq + ?Sized> Equivalence<A> for Natural {
    fn equals(&self, x: &A, y: &A) -> bool {
        x == y
    }
}
