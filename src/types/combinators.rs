use std::cmp::Ordering;
use std::hash::Hash;

use indexmap::map::Entry;
use indexmap::IndexMap;
use tracing::{debug, trace};

use super::non_empty::{append, NonEmptyVec};
use crate::error::IndexError;
use crate::typeclass::{induced_eq, max_of, min_of, Equivalence, Semigroup, TotalOrder};

/// Buckets `items` by `key`, keeping each bucket in input order
///
/// Buckets are listed in order of their key's first occurrence
pub fn group_by<T, K, I, F>(items: I, mut key: F) -> IndexMap<K, NonEmptyVec<T>>
where
    K: Eq + Hash,
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> K,
{
    let mut groups: IndexMap<K, NonEmptyVec<T>> = IndexMap::new();
    for item in items {
        match groups.entry(key(&item)) {
            Entry::Occupied(mut bucket) => bucket.get_mut().push(item),
            Entry::Vacant(bucket) => {
                bucket.insert(NonEmptyVec::new(item));
            }
        }
    }
    groups
}

impl<T> NonEmptyVec<T> {
    /// Elements in reverse order
    pub fn reverse(self) -> Self {
        if self.is_singleton() {
            return self;
        }
        self.rearranged(|items| items.reverse())
    }

    /// Repeatedly peels a prefix off the sequence until nothing is left
    ///
    /// `step` receives what remains and returns a produced value together with
    /// the leftovers. The leftovers must be strictly shorter than the input,
    /// otherwise this panics rather than looping forever
    pub fn chop<B, F>(self, mut step: F) -> NonEmptyVec<B>
    where
        F: FnMut(NonEmptyVec<T>) -> (B, Vec<T>),
    {
        let mut consumed_from = self.len();
        let (first, mut rest) = step(self);
        assert!(
            rest.len() < consumed_from,
            "chop step returned {} leftovers from {} elements",
            rest.len(),
            consumed_from
        );
        let mut out = NonEmptyVec::new(first);
        while let Some(next) = NonEmptyVec::from_remaining(rest) {
            consumed_from = next.len();
            let (value, leftovers) = step(next);
            assert!(
                leftovers.len() < consumed_from,
                "chop step returned {} leftovers from {} elements",
                leftovers.len(),
                consumed_from
            );
            out.push(value);
            rest = leftovers;
        }
        debug!(produced = out.len(), "chop finished");
        out
    }

    /// Splits into maximal runs of adjacent elements equal to the run's first element
    pub fn group<E>(self, eq: &E) -> NonEmptyVec<NonEmptyVec<T>>
    where
        E: Equivalence<T>,
    {
        let (head, tail) = self.unprepend();
        let mut runs = Vec::new();
        let mut current = NonEmptyVec::new(head);
        for item in tail {
            if eq.equals(&item, current.head()) {
                current.push(item);
            } else {
                runs.push(std::mem::replace(&mut current, NonEmptyVec::new(item)));
            }
        }
        append(runs, current)
    }

    /// Sorts, then groups by the order's equivalence, so equal elements end up
    /// in a single run wherever they started
    pub fn group_sort<O>(self, ord: &O) -> NonEmptyVec<NonEmptyVec<T>>
    where
        O: TotalOrder<T>,
    {
        self.sort(ord).group(&induced_eq(ord))
    }

    /// Stable ascending sort
    pub fn sort<O>(self, ord: &O) -> Self
    where
        O: TotalOrder<T>,
    {
        if self.is_singleton() {
            return self;
        }
        self.rearranged(|items| items.sort_by(|x, y| ord.compare(x, y)))
    }

    /// Stable sort by several orders; later orders break ties of earlier ones
    pub fn sort_by(self, ords: &[&dyn TotalOrder<T>]) -> Self {
        if ords.is_empty() || self.is_singleton() {
            return self;
        }
        self.rearranged(|items| {
            items.sort_by(|x, y| {
                ords.iter()
                    .map(|ord| ord.compare(x, y))
                    .find(|ordering| *ordering != Ordering::Equal)
                    .unwrap_or(Ordering::Equal)
            })
        })
    }

    /// Pairs elements positionally, stopping at the shorter input
    pub fn zip_with<B, C, F>(self, other: NonEmptyVec<B>, mut f: F) -> NonEmptyVec<C>
    where
        F: FnMut(T, B) -> C,
    {
        let (a, rest_a) = self.unprepend();
        let (b, rest_b) = other.unprepend();
        let head = f(a, b);
        let tail = rest_a
            .into_iter()
            .zip(rest_b)
            .map(|(a, b)| f(a, b))
            .collect();
        NonEmptyVec::from_parts(head, tail)
    }

    /// `zip_with` into tuples
    pub fn zip<B>(self, other: NonEmptyVec<B>) -> NonEmptyVec<(T, B)> {
        self.zip_with(other, |a, b| (a, b))
    }

    /// `[a, b, c]` becomes `[sep, a, sep, b, sep, c]`
    pub fn prepend_all(self, sep: T) -> Self
    where
        T: Clone,
    {
        let mut out = Vec::with_capacity(2 * self.len() - 1);
        let (head, tail) = self.unprepend();
        out.push(head);
        for item in tail {
            out.push(sep.clone());
            out.push(item);
        }
        NonEmptyVec::from_parts(sep, out)
    }

    /// `[a, b, c]` becomes `[a, sep, b, sep, c]`
    pub fn intersperse(self, sep: T) -> Self
    where
        T: Clone,
    {
        let (head, tail) = self.unprepend();
        match NonEmptyVec::from_remaining(tail) {
            Some(rest) => rest.prepend_all(sep).prepended(head),
            None => NonEmptyVec::new(head),
        }
    }

    /// Folds the interspersed sequence, e.g. joining strings with a separator
    pub fn intercalate<S>(self, sep: T, semigroup: &S) -> T
    where
        T: Clone,
        S: Semigroup<T>,
    {
        self.intersperse(sep).concat_all(semigroup)
    }

    /// Replaces the element at `index`; `None` when out of range
    pub fn update_at(&self, index: usize, value: T) -> Option<Self>
    where
        T: Clone,
    {
        self.modify_at(index, |_| value)
    }

    /// Applies `f` to the element at `index` in a copy; `None` when out of range
    pub fn modify_at<F>(&self, index: usize, f: F) -> Option<Self>
    where
        T: Clone,
        F: FnOnce(&T) -> T,
    {
        if index >= self.len() {
            trace!(index, len = self.len(), "modify index out of bounds");
            return None;
        }
        let mut out = self.clone();
        let slot = out.get_mut(index)?;
        let value = f(&*slot);
        *slot = value;
        Some(out)
    }

    /// Like `update_at`, reporting the rejected index as an `IndexError`
    pub fn try_update_at(&self, index: usize, value: T) -> Result<Self, IndexError>
    where
        T: Clone,
    {
        self.update_at(index, value).ok_or(IndexError {
            index,
            len: self.len(),
        })
    }

    /// Like `modify_at`, reporting the rejected index as an `IndexError`
    pub fn try_modify_at<F>(&self, index: usize, f: F) -> Result<Self, IndexError>
    where
        T: Clone,
        F: FnOnce(&T) -> T,
    {
        self.modify_at(index, f).ok_or(IndexError {
            index,
            len: self.len(),
        })
    }

    /// Inserts before position `index`; `index == len` appends
    pub fn insert_at(&self, index: usize, value: T) -> Option<Self>
    where
        T: Clone,
    {
        if index > self.len() {
            trace!(index, len = self.len(), "insert index out of bounds");
            return None;
        }
        if index == 0 {
            return Some(self.clone().prepended(value));
        }
        let (head, mut tail) = self.clone().unprepend();
        tail.insert(index - 1, value);
        Some(NonEmptyVec::from_parts(head, tail))
    }

    /// Removes the element at `index`, which may leave nothing behind
    pub fn delete_at(&self, index: usize) -> Option<Vec<T>>
    where
        T: Clone,
    {
        if index >= self.len() {
            trace!(index, len = self.len(), "delete index out of bounds");
            return None;
        }
        let mut items = self.to_vec();
        items.remove(index);
        Some(items)
    }

    /// Splits into a prefix of `n` elements and the rest. An `n` of 0 or of at
    /// least the length keeps everything in the prefix
    pub fn split_at(self, n: usize) -> (Self, Vec<T>) {
        if n < 1 || n >= self.len() {
            return (self, Vec::new());
        }
        let (head, mut rest) = self.unprepend();
        let prefix = rest.drain(..n - 1).collect();
        (NonEmptyVec::from_parts(head, prefix), rest)
    }

    /// Consecutive chunks of `n`, the last possibly shorter; an `n` of 0 gives one chunk
    pub fn chunks_of(self, n: usize) -> NonEmptyVec<NonEmptyVec<T>> {
        if n == 0 || n >= self.len() {
            return NonEmptyVec::new(self);
        }
        let (head, tail) = self.unprepend();
        let mut rest = tail.into_iter();
        let first = NonEmptyVec::from_parts(head, rest.by_ref().take(n - 1).collect());
        let mut chunks = NonEmptyVec::new(first);
        while let Some(head) = rest.next() {
            chunks.push(NonEmptyVec::from_parts(head, rest.by_ref().take(n - 1).collect()));
        }
        chunks
    }

    /// Rotates right by `n` places; negative `n` rotates left
    pub fn rotate(self, n: isize) -> Self {
        // a Vec never holds more than isize::MAX elements
        let shift = n.rem_euclid(self.len() as isize) as usize;
        if shift == 0 {
            return self;
        }
        self.rearranged(|items| items.rotate_right(shift))
    }

    /// All of `self` followed by all of `other`
    pub fn concat(mut self, other: NonEmptyVec<T>) -> Self {
        self.extend_tail(other);
        self
    }

    /// Appends a possibly-empty vector
    pub fn concat_vec(mut self, other: Vec<T>) -> Self {
        self.extend_tail(other);
        self
    }

    /// Drops later duplicates, keeping the first occurrence of each element
    pub fn uniq<E>(self, eq: &E) -> Self
    where
        E: Equivalence<T>,
    {
        let (head, tail) = self.unprepend();
        let mut out = NonEmptyVec::new(head);
        for item in tail {
            if !out.iter().any(|seen| eq.equals(seen, &item)) {
                out.push(item);
            }
        }
        out
    }

    /// Elements of both inputs without duplicates, in first-occurrence order
    pub fn union<E>(self, other: NonEmptyVec<T>, eq: &E) -> Self
    where
        E: Equivalence<T>,
    {
        self.concat(other).uniq(eq)
    }

    /// Keeps elements matching `predicate`; `None` when none match
    pub fn filter<P>(self, mut predicate: P) -> Option<Self>
    where
        P: FnMut(&T) -> bool,
    {
        Self::try_from_iter(self.into_iter().filter(|item| predicate(item)))
    }

    /// Like `filter`, with each element's position
    pub fn filter_with_index<P>(self, mut predicate: P) -> Option<Self>
    where
        P: FnMut(usize, &T) -> bool,
    {
        Self::try_from_iter(
            self.into_iter()
                .enumerate()
                .filter(|(index, item)| predicate(*index, item))
                .map(|(_, item)| item),
        )
    }

    /// Smallest element; the earliest one on ties
    pub fn min<O>(self, ord: &O) -> T
    where
        O: TotalOrder<T>,
    {
        self.concat_all(&min_of(ord))
    }

    /// Largest element; the earliest one on ties
    pub fn max<O>(self, ord: &O) -> T
    where
        O: TotalOrder<T>,
    {
        self.concat_all(&max_of(ord))
    }
}

impl<A, B> NonEmptyVec<(A, B)> {
    /// Splits a sequence of pairs into two sequences of the same length
    pub fn unzip(self) -> (NonEmptyVec<A>, NonEmptyVec<B>) {
        let ((a, b), rest) = self.unprepend();
        let (rest_a, rest_b): (Vec<A>, Vec<B>) = rest.into_iter().unzip();
        (
            NonEmptyVec::from_parts(a, rest_a),
            NonEmptyVec::from_parts(b, rest_b),
        )
    }
}
