use std::fmt::Debug;

use super::Natural;

/// Renders a value for display
pub trait Show<A: ?Sized> {
    fn show(&self, a: &A) -> String;
}

impl<A: ?Sized, F> Show<A> for F
where
    F: Fn(&A) -> String,
{
    fn show(&self, a: &A) -> String {
        self(a)
    }
}

impl<A: Debug + ?Sized> Show<A> for Natural {
    fn show(&self, a: &A) -> String {
        format!("{a:?}")
    }
}
