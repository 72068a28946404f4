/// An associative binary combine. No identity element is required
pub trait Semigroup<A> {
    fn combine(&self, x: A, y: A) -> A;
}

impl<A, F> Semigroup<A> for F
where
    F: Fn(A, A) -> A,
{
    fn combine(&self, x: A, y: A) -> A {
        self(x, y)
    }
}
