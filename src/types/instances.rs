use std::marker::PhantomData;

use super::non_empty::NonEmptyVec;
use crate::typeclass::{
    Alt, Applicative, Apply, Chain, Comonad, Equivalence, Extend, Foldable, FoldableWithIndex,
    Functor, FunctorWithIndex, Kind, Semigroup, Show, Traversable, TraversableWithIndex,
};

/// Marker for the `NonEmptyVec` type constructor
#[derive(Debug, Clone, Copy, Default)]
pub struct NonEmptyVecKind;

impl Kind for NonEmptyVecKind {
    type Of<T> = NonEmptyVec<T>;
}

impl<T> NonEmptyVec<T> {
    /// Applies `f` to every element, keeping order
    pub fn map<B, F>(self, mut f: F) -> NonEmptyVec<B>
    where
        F: FnMut(T) -> B,
    {
        let (head, tail) = self.unprepend();
        let head = f(head);
        NonEmptyVec::from_parts(head, tail.into_iter().map(f).collect())
    }

    /// Like `map`, with each element's position starting at 0
    pub fn map_with_index<B, F>(self, mut f: F) -> NonEmptyVec<B>
    where
        F: FnMut(usize, T) -> B,
    {
        let mut index = 0;
        self.map(|item| {
            let out = f(index, item);
            index += 1;
            out
        })
    }

    /// Applies `f` to every element and concatenates the results in order
    pub fn chain<B, F>(self, mut f: F) -> NonEmptyVec<B>
    where
        F: FnMut(T) -> NonEmptyVec<B>,
    {
        let (head, tail) = self.unprepend();
        let mut out = f(head);
        for item in tail {
            out.extend_tail(f(item));
        }
        out
    }

    /// Like `chain`, with each element's position
    pub fn chain_with_index<B, F>(self, mut f: F) -> NonEmptyVec<B>
    where
        F: FnMut(usize, T) -> NonEmptyVec<B>,
    {
        let mut index = 0;
        self.chain(|item| {
            let out = f(index, item);
            index += 1;
            out
        })
    }

    /// Runs `f` for each element's effects but keeps the original elements
    pub fn chain_first<B, F>(self, mut f: F) -> Self
    where
        T: Clone,
        F: FnMut(&T) -> NonEmptyVec<B>,
    {
        self.chain(|item| f(&item).map(|_| item.clone()))
    }

    /// Keeps the left elements, once per right element
    pub fn ap_first<B>(self, other: &NonEmptyVec<B>) -> Self
    where
        T: Clone,
    {
        self.chain(|item| NonEmptyVec::replicate(item, other.len()))
    }

    /// Keeps the right elements, once per left element
    pub fn ap_second<B>(self, other: &NonEmptyVec<B>) -> NonEmptyVec<B>
    where
        B: Clone,
    {
        self.chain(|_| other.clone())
    }

    /// Left fold from `init`
    pub fn reduce<B, F>(self, init: B, f: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.into_iter().fold(init, f)
    }

    /// Right fold from `init`, visiting the last element first
    pub fn reduce_right<B, F>(self, init: B, mut f: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        self.into_iter().rev().fold(init, |acc, item| f(item, acc))
    }

    /// Left fold that also sees each position
    pub fn reduce_with_index<B, F>(self, init: B, mut f: F) -> B
    where
        F: FnMut(usize, B, T) -> B,
    {
        self.into_iter()
            .enumerate()
            .fold(init, |acc, (index, item)| f(index, acc, item))
    }

    /// Right fold that also sees each position
    pub fn reduce_right_with_index<B, F>(self, init: B, mut f: F) -> B
    where
        F: FnMut(usize, T, B) -> B,
    {
        self.into_vec()
            .into_iter()
            .enumerate()
            .rev()
            .fold(init, |acc, (index, item)| f(index, item, acc))
    }

    /// Maps every element and combines the results left to right
    pub fn fold_map<M, S, F>(self, semigroup: &S, f: F) -> M
    where
        S: Semigroup<M>,
        F: FnMut(T) -> M,
    {
        self.map(f).concat_all(semigroup)
    }

    /// Like `fold_map`, with each element's position
    pub fn fold_map_with_index<M, S, F>(self, semigroup: &S, f: F) -> M
    where
        S: Semigroup<M>,
        F: FnMut(usize, T) -> M,
    {
        self.map_with_index(f).concat_all(semigroup)
    }

    /// Left fold through `semigroup`, seeded with the head
    pub fn concat_all<S>(self, semigroup: &S) -> T
    where
        S: Semigroup<T>,
    {
        let (head, tail) = self.unprepend();
        tail.into_iter()
            .fold(head, |acc, item| semigroup.combine(acc, item))
    }

    /// Applies `f` to every element inside the effect `G`, visiting elements
    /// left to right and collecting the results with `G`'s `map2`
    pub fn traverse<G, B, F>(self, mut f: F) -> G::Of<NonEmptyVec<B>>
    where
        G: Applicative,
        B: Clone,
        F: FnMut(T) -> G::Of<B>,
    {
        let (head, tail) = self.unprepend();
        let init = G::map::<B, NonEmptyVec<B>, _>(f(head), NonEmptyVec::new);
        tail.into_iter().fold(init, |acc, item| {
            G::map2::<NonEmptyVec<B>, B, NonEmptyVec<B>, _>(acc, f(item), |done, next| {
                done.appended(next)
            })
        })
    }

    /// Like `traverse`, with each element's position
    pub fn traverse_with_index<G, B, F>(self, mut f: F) -> G::Of<NonEmptyVec<B>>
    where
        G: Applicative,
        B: Clone,
        F: FnMut(usize, T) -> G::Of<B>,
    {
        let mut index = 0;
        self.traverse::<G, B, _>(|item| {
            let out = f(index, item);
            index += 1;
            out
        })
    }

    /// `f` sees each suffix in turn: the whole sequence, then without its
    /// first element, and so on
    pub fn extend<B, F>(self, mut f: F) -> NonEmptyVec<B>
    where
        F: FnMut(&NonEmptyVec<T>) -> B,
    {
        let mut out = NonEmptyVec::new(f(&self));
        let (_, mut rest) = self.unprepend();
        while let Some(suffix) = NonEmptyVec::from_remaining(rest) {
            out.push(f(&suffix));
            rest = suffix.unprepend().1;
        }
        out
    }

    /// Every suffix, longest first
    pub fn duplicate(self) -> NonEmptyVec<NonEmptyVec<T>>
    where
        T: Clone,
    {
        self.extend(|suffix| suffix.clone())
    }

    /// The focused element, which is the head
    pub fn extract(self) -> T {
        self.unprepend().0
    }

    /// Concatenation: `that` is always evaluated and appended
    pub fn alt<F>(self, that: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        self.concat(that())
    }

    /// Concatenation as a `Semigroup`
    pub fn semigroup() -> Concat<T> {
        Concat(PhantomData)
    }
}

impl<T> NonEmptyVec<NonEmptyVec<T>> {
    /// Concatenates the inner sequences in order
    pub fn flatten(self) -> NonEmptyVec<T> {
        self.chain(|inner| inner)
    }
}

impl<F> NonEmptyVec<F> {
    /// Applies every function to every argument, functions outermost
    pub fn ap<A, B>(self, args: &NonEmptyVec<A>) -> NonEmptyVec<B>
    where
        A: Clone,
        F: FnMut(A) -> B,
    {
        self.chain(|g| args.clone().map(g))
    }
}

/// Concatenation semigroup for `NonEmptyVec<T>`
#[derive(Debug, Clone, Copy, Default)]
pub struct Concat<T>(PhantomData<fn() -> T>);

impl<T> Semigroup<NonEmptyVec<T>> for Concat<T> {
    fn combine(&self, x: NonEmptyVec<T>, y: NonEmptyVec<T>) -> NonEmptyVec<T> {
        x.concat(y)
    }
}

/// Element-wise equality: same length, then pairwise `equals`
#[derive(Debug, Clone, Copy)]
pub struct ElementwiseEq<'e, E>(&'e E);

/// Lifts an element equivalence to whole sequences
pub fn get_eq<E>(eq: &E) -> ElementwiseEq<'_, E> {
    ElementwiseEq(eq)
}

impl<T, E: Equivalence<T>> Equivalence<NonEmptyVec<T>> for ElementwiseEq<'_, E> {
    fn equals(&self, x: &NonEmptyVec<T>, y: &NonEmptyVec<T>) -> bool {
        x.len() == y.len() && x.iter().zip(y).all(|(a, b)| self.0.equals(a, b))
    }
}

/// Renders `[a, b, c]` using the per-element renderer
#[derive(Debug, Clone, Copy)]
pub struct BracketedShow<'s, S>(&'s S);

/// Lifts an element renderer to whole sequences
pub fn get_show<S>(show: &S) -> BracketedShow<'_, S> {
    BracketedShow(show)
}

impl<T, S: Show<T>> Show<NonEmptyVec<T>> for BracketedShow<'_, S> {
    fn show(&self, items: &NonEmptyVec<T>) -> String {
        let rendered: Vec<String> = items.iter().map(|item| self.0.show(item)).collect();
        format!("[{}]", rendered.join(", "))
    }
}

impl Functor for NonEmptyVecKind {
    fn map<A, B, F>(fa: NonEmptyVec<A>, f: F) -> NonEmptyVec<B>
    where
        F: FnMut(A) -> B,
    {
        fa.map(f)
    }
}

impl FunctorWithIndex for NonEmptyVecKind {
    fn map_with_index<A, B, F>(fa: NonEmptyVec<A>, f: F) -> NonEmptyVec<B>
    where
        F: FnMut(usize, A) -> B,
    {
        fa.map_with_index(f)
    }
}

impl Apply for NonEmptyVecKind {
    fn map2<A, B, C, F>(fa: NonEmptyVec<A>, fb: NonEmptyVec<B>, mut f: F) -> NonEmptyVec<C>
    where
        A: Clone,
        B: Clone,
        F: FnMut(A, B) -> C,
    {
        fa.chain(|a| fb.clone().map(|b| f(a.clone(), b)))
    }

    fn ap<A, B, G>(fab: NonEmptyVec<G>, fa: NonEmptyVec<A>) -> NonEmptyVec<B>
    where
        A: Clone,
        G: Clone + FnMut(A) -> B,
    {
        fab.ap(&fa)
    }
}

impl Applicative for NonEmptyVecKind {
    fn of<A>(a: A) -> NonEmptyVec<A> {
        NonEmptyVec::new(a)
    }
}

impl Chain for NonEmptyVecKind {
    fn chain<A, B, F>(fa: NonEmptyVec<A>, f: F) -> NonEmptyVec<B>
    where
        F: FnMut(A) -> NonEmptyVec<B>,
    {
        fa.chain(f)
    }
}

impl Foldable for NonEmptyVecKind {
    fn reduce<A, B, F>(fa: NonEmptyVec<A>, init: B, f: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        fa.reduce(init, f)
    }

    fn reduce_right<A, B, F>(fa: NonEmptyVec<A>, init: B, f: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        fa.reduce_right(init, f)
    }

    fn fold_map<A, M, S, F>(fa: NonEmptyVec<A>, semigroup: &S, f: F) -> M
    where
        S: Semigroup<M>,
        F: FnMut(A) -> M,
    {
        fa.fold_map(semigroup, f)
    }
}

impl FoldableWithIndex for NonEmptyVecKind {
    fn reduce_with_index<A, B, F>(fa: NonEmptyVec<A>, init: B, f: F) -> B
    where
        F: FnMut(usize, B, A) -> B,
    {
        fa.reduce_with_index(init, f)
    }

    fn reduce_right_with_index<A, B, F>(fa: NonEmptyVec<A>, init: B, f: F) -> B
    where
        F: FnMut(usize, A, B) -> B,
    {
        fa.reduce_right_with_index(init, f)
    }

    fn fold_map_with_index<A, M, S, F>(fa: NonEmptyVec<A>, semigroup: &S, f: F) -> M
    where
        S: Semigroup<M>,
        F: FnMut(usize, A) -> M,
    {
        fa.fold_map_with_index(semigroup, f)
    }
}

impl Traversable for NonEmptyVecKind {
    fn traverse<G, A, B, F>(ta: NonEmptyVec<A>, f: F) -> G::Of<NonEmptyVec<B>>
    where
        G: Applicative,
        B: Clone,
        F: FnMut(A) -> G::Of<B>,
    {
        ta.traverse::<G, B, F>(f)
    }
}

impl TraversableWithIndex for NonEmptyVecKind {
    fn traverse_with_index<G, A, B, F>(ta: NonEmptyVec<A>, f: F) -> G::Of<NonEmptyVec<B>>
    where
        G: Applicative,
        B: Clone,
        F: FnMut(usize, A) -> G::Of<B>,
    {
        ta.traverse_with_index::<G, B, F>(f)
    }
}

impl Extend for NonEmptyVecKind {
    fn extend<A, B, F>(wa: NonEmptyVec<A>, f: F) -> NonEmptyVec<B>
    where
        A: Clone,
        F: FnMut(&NonEmptyVec<A>) -> B,
    {
        wa.extend(f)
    }
}

impl Comonad for NonEmptyVecKind {
    fn extract<A>(wa: NonEmptyVec<A>) -> A {
        wa.extract()
    }
}

impl Alt for NonEmptyVecKind {
    fn alt<A, F>(fa: NonEmptyVec<A>, that: F) -> NonEmptyVec<A>
    where
        F: FnOnce() -> NonEmptyVec<A>,
    {
        fa.alt(that)
    }
}
