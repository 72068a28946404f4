use std::cmp::Ordering;
use std::marker::PhantomData;

use super::{Equivalence, Natural, Semigroup};

/// A total order supplied by the caller
///
/// `compare` must be reflexive, antisymmetric and transitive. Every total order
/// induces an equivalence (`compare == Equal`) and a pair of left-biased
/// selection semigroups
pub trait TotalOrder<A: ?Sized> {
    fn compare(&self, x: &A, y: &A) -> Ordering;
}

impl<A: ?Sized, F> TotalOrder<A> for F
where
    F: Fn(&A, &A) -> Ordering,
{
    fn compare(&self, x: &A, y: &A) -> Ordering {
        self(x, y)
    }
}

impl<A: Ord + ?Sized> TotalOrder<A> for Natural {
    fn compare(&self, x: &A, y: &A) -> Ordering {
        x.cmp(y)
    }
}

/// Equivalence induced by a total order
#[derive(Debug, Clone, Copy)]
pub struct Induced<'o, O>(&'o O);

pub fn induced_eq<O>(ord: &O) -> Induced<'_, O> {
    Induced(ord)
}

/// Keeps the smaller operand, the left one on ties
pub fn min_of<O>(ord: &O) -> MinOf<'_, O> {
    MinOf(ord)
}

/// Keeps the larger operand, the left one on ties
pub fn max_of<O>(ord: &O) -> MaxOf<'_, O> {
    MaxOf(ord)
}

pub fn reversed<O>(ord: &O) -> Reversed<'_, O> {
    Reversed(ord)
}

impl<A: ?Sized, O: TotalOrder<A>> Equivalence<A> for Induced<'_, O> {
    fn equals(&self, x: &A, y: &A) -> bool {
        self.0.compare(x, y) == Ordering::Equal
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MinOf<'o, O>(&'o O);

impl<A, O: TotalOrder<A>> Semigroup<A> for MinOf<'_, O> {
    fn combine(&self, x: A, y: A) -> A {
        match self.0.compare(&x, &y) {
            Ordering::Greater => y,
            _ => x,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MaxOf<'o, O>(&'o O);

impl<A, O: TotalOrder<A>> Semigroup<A> for MaxOf<'_, O> {
    fn combine(&self, x: A, y: A) -> A {
        match self.0.compare(&x, &y) {
            Ordering::Less => y,
            _ => x,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Reversed<'o, O>(&'o O);

impl<A: ?Sized, O: TotalOrder<A>> TotalOrder<A> for Reversed<'_, O> {
    fn compare(&self, x: &A, y: &A) -> Ordering {
        self.0.compare(y, x)
    }
}

/// Orders values by a projected key
pub struct Comparing<F, K> {
    key: F,
    _key: PhantomData<fn() -> K>,
}

/// Builds a total order that compares `key(x)` with `key(y)`
pub fn comparing<A, K, F>(key: F) -> Comparing<F, K>
where
    K: Ord,
    F: Fn(&A) -> K,
{
    Comparing {
        key,
        _key: PhantomData,
    }
}

impl<A, K, F> TotalOrder<A> for Comparing<F, K>
where
    K: Ord,
    F: Fn(&A) -> K,
{
    fn compare(&self, x: &A, y: &A) -> Ordering {
        (self.key)(x).cmp(&(self.key)(y))
    }
}
