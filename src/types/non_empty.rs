use std::fmt;
use std::ops::Index;

use tracing::trace;

use crate::error::EmptyError;

/// A vector that guarantees at least one element exists
/// Implements "Make Invalid States Unrepresentable" principle
///
/// Every public operation leaves its input untouched and hands back a new value
/// Transformations consume `self`; edits that may be rejected borrow and clone
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NonEmptyVec<T> {
    head: T,
    tail: Vec<T>,
}

/// Whether a slice has at least one element
pub fn is_non_empty<T>(items: &[T]) -> bool {
    !items.is_empty()
}

/// Puts `head` in front of a possibly-empty vector
pub fn prepend<T>(head: T, tail: Vec<T>) -> NonEmptyVec<T> {
    NonEmptyVec::from_parts(head, tail)
}

/// Puts `last` behind a possibly-empty vector
pub fn append<T>(init: Vec<T>, last: T) -> NonEmptyVec<T> {
    let mut items = init.into_iter();
    match items.next() {
        Some(head) => {
            let mut tail: Vec<T> = items.collect();
            tail.push(last);
            NonEmptyVec { head, tail }
        }
        None => NonEmptyVec::new(last),
    }
}

impl<T> NonEmptyVec<T> {
    /// Create a new NonEmptyVec with a single element
    pub fn new(head: T) -> Self {
        Self {
            head,
            tail: Vec::new(),
        }
    }

    /// Build from a head and a possibly-empty tail
    pub fn from_parts(head: T, tail: Vec<T>) -> Self {
        Self { head, tail }
    }

    /// Returns `None` when `items` is empty. The buffer is reused for the tail
    pub fn from_vec(items: Vec<T>) -> Option<Self> {
        Self::try_from_iter(items)
    }

    /// Collects an iterator; `None` when it yields nothing
    pub fn try_from_iter<I: IntoIterator<Item = T>>(items: I) -> Option<Self> {
        let found = Self::from_remaining(items.into_iter().collect());
        if found.is_none() {
            trace!("rejected empty input for a non-empty sequence");
        }
        found
    }

    /// `[f(0), f(1), .., f(n - 1)]`, with `n` raised to 1 when it is 0
    pub fn make_by<F>(n: usize, mut f: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        let head = f(0);
        Self {
            head,
            tail: (1..n.max(1)).map(f).collect(),
        }
    }

    /// `n` copies of `value`, at least one
    pub fn replicate(value: T, n: usize) -> Self
    where
        T: Clone,
    {
        Self::make_by(n, |_| value.clone())
    }

    /// Get the first element (guaranteed to exist)
    pub fn first(&self) -> &T {
        &self.head
    }

    /// Same as `first`
    pub fn head(&self) -> &T {
        &self.head
    }

    /// Get the last element (guaranteed to exist)
    pub fn last(&self) -> &T {
        self.tail.last().unwrap_or(&self.head)
    }

    /// Everything after the head; possibly empty
    pub fn tail(&self) -> &[T] {
        &self.tail
    }

    /// Everything before the last element; possibly empty
    pub fn init(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut init = self.to_vec();
        init.pop();
        init
    }

    /// Get the length (always >= 1)
    pub fn len(&self) -> usize {
        1 + self.tail.len()
    }

    /// Whether the head is the only element
    pub fn is_singleton(&self) -> bool {
        self.tail.is_empty()
    }

    /// Element at `index`, if in range
    pub fn get(&self, index: usize) -> Option<&T> {
        match index {
            0 => Some(&self.head),
            n => self.tail.get(n - 1),
        }
    }

    /// Iterator over all elements
    pub fn iter(&self) -> Iter<'_, T> {
        std::iter::once(&self.head).chain(self.tail.iter())
    }

    /// Split into the head and the rest
    pub fn unprepend(self) -> (T, Vec<T>) {
        (self.head, self.tail)
    }

    /// Split into everything but the last element, and the last
    pub fn unappend(self) -> (Vec<T>, T) {
        let Self { head, mut tail } = self;
        match tail.pop() {
            Some(last) => {
                tail.insert(0, head);
                (tail, last)
            }
            None => (Vec::new(), head),
        }
    }

    /// Convert into a plain vector
    pub fn into_vec(self) -> Vec<T> {
        let Self { head, mut tail } = self;
        tail.insert(0, head);
        tail
    }

    /// Clone into a plain vector
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Add an element to the front
    pub fn prepended(self, value: T) -> Self {
        let Self { head, mut tail } = self;
        tail.insert(0, head);
        Self { head: value, tail }
    }

    /// Add an element to the end
    pub fn appended(mut self, value: T) -> Self {
        self.tail.push(value);
        self
    }

    /// Replace the first element
    pub fn update_head(self, value: T) -> Self {
        self.modify_head(|_| value)
    }

    /// Apply `f` to the first element
    pub fn modify_head<F>(self, f: F) -> Self
    where
        F: FnOnce(T) -> T,
    {
        Self {
            head: f(self.head),
            tail: self.tail,
        }
    }

    /// Replace the last element
    pub fn update_last(self, value: T) -> Self {
        self.modify_last(|_| value)
    }

    /// Apply `f` to the last element
    pub fn modify_last<F>(self, f: F) -> Self
    where
        F: FnOnce(T) -> T,
    {
        let (init, last) = self.unappend();
        append(init, f(last))
    }

    /// Add an element to the end
    pub(crate) fn push(&mut self, value: T) {
        self.tail.push(value);
    }

    pub(crate) fn extend_tail<I: IntoIterator<Item = T>>(&mut self, items: I) {
        self.tail.extend(items);
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        match index {
            0 => Some(&mut self.head),
            n => self.tail.get_mut(n - 1),
        }
    }

    /// Like `from_vec`, for leftovers where running out is the normal outcome
    pub(crate) fn from_remaining(items: Vec<T>) -> Option<Self> {
        let mut items = items.into_iter();
        let head = items.next()?;
        Some(Self {
            head,
            tail: items.collect(),
        })
    }

    /// Applies a length-preserving rearrangement to the elements as one slice
    pub(crate) fn rearranged<F>(self, f: F) -> Self
    where
        F: FnOnce(&mut [T]),
    {
        let mut items = self.into_vec();
        f(&mut items);
        let head = items.remove(0);
        Self { head, tail: items }
    }
}

impl NonEmptyVec<i64> {
    /// Inclusive range `[start, end]`; just `[start]` when `end <= start`
    pub fn range(start: i64, end: i64) -> Self {
        if end <= start {
            return Self::new(start);
        }
        Self {
            head: start,
            tail: (start + 1..=end).collect(),
        }
    }
}

/// Borrowing iterator, head first
pub type Iter<'a, T> = std::iter::Chain<std::iter::Once<&'a T>, std::slice::Iter<'a, T>>;

/// Owning iterator, head first
pub type IntoIter<T> = std::iter::Chain<std::iter::Once<T>, std::vec::IntoIter<T>>;

impl<T> From<T> for NonEmptyVec<T> {
    fn from(head: T) -> Self {
        Self::new(head)
    }
}

/// Name the element type at the call site (`NonEmptyVec::<i32>::try_from(..)`):
/// with `From<T>` above, the std blanket `TryFrom<U> for T` also matches
/// `NonEmptyVec<Vec<_>>`, so an unannotated call is ambiguous
impl<T> TryFrom<Vec<T>> for NonEmptyVec<T> {
    type Error = EmptyError;

    fn try_from(items: Vec<T>) -> Result<Self, Self::Error> {
        Self::from_vec(items).ok_or(EmptyError)
    }
}

impl<T> From<NonEmptyVec<T>> for Vec<T> {
    fn from(items: NonEmptyVec<T>) -> Self {
        items.into_vec()
    }
}

impl<T> IntoIterator for NonEmptyVec<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        std::iter::once(self.head).chain(self.tail)
    }
}

impl<'a, T> IntoIterator for &'a NonEmptyVec<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Index<usize> for NonEmptyVec<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Some(item) => item,
            None => panic!(
                "index out of bounds: the len is {} but the index is {}",
                self.len(),
                index
            ),
        }
    }
}

impl<T: fmt::Display> fmt::Display for NonEmptyVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}", self.head)?;
        for item in &self.tail {
            write!(f, ", {item}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nev(items: &[i32]) -> NonEmptyVec<i32> {
        NonEmptyVec::from_vec(items.to_vec()).unwrap()
    }

    #[test]
    fn from_vec_checks_length() {
        assert_eq!(NonEmptyVec::<i32>::from_vec(vec![]), None);
        let xs = nev(&[1, 2, 3]);
        assert_eq!(xs.head(), &1);
        assert_eq!(xs.tail(), &[2, 3]);
        assert_eq!(NonEmptyVec::<u8>::try_from(Vec::new()), Err(EmptyError));
    }

    #[test]
    fn prepend_and_append() {
        let xs = prepend(0, vec![1, 2]);
        assert_eq!(xs.into_vec(), vec![0, 1, 2]);
        let ys = append(vec![1, 2], 3);
        assert_eq!(ys.into_vec(), vec![1, 2, 3]);
        assert_eq!(append(vec![], 7), NonEmptyVec::new(7));
        assert!(is_non_empty(&[1]));
        assert!(!is_non_empty::<u8>(&[]));
    }

    #[test]
    fn accessors() {
        let xs = nev(&[1, 2, 3]);
        assert_eq!(xs.first(), &1);
        assert_eq!(xs.last(), &3);
        assert_eq!(xs.init(), vec![1, 2]);
        assert_eq!(xs.len(), 3);
        assert_eq!(xs.get(2), Some(&3));
        assert_eq!(xs.get(3), None);
        assert_eq!(xs[1], 2);

        let one = NonEmptyVec::new("a");
        assert_eq!(one.last(), &"a");
        assert!(one.tail().is_empty());
        assert!(one.init().is_empty());
        assert!(one.is_singleton());
    }

    #[test]
    fn unprepend_and_unappend() {
        assert_eq!(nev(&[1, 2, 3]).unprepend(), (1, vec![2, 3]));
        assert_eq!(nev(&[1, 2, 3]).unappend(), (vec![1, 2], 3));
        assert_eq!(nev(&[1]).unappend(), (vec![], 1));
    }

    #[test]
    fn edits_at_ends() {
        let xs = nev(&[1, 2, 3]);
        assert_eq!(xs.clone().prepended(0).into_vec(), vec![0, 1, 2, 3]);
        assert_eq!(xs.clone().appended(4).into_vec(), vec![1, 2, 3, 4]);
        assert_eq!(xs.clone().update_head(9).into_vec(), vec![9, 2, 3]);
        assert_eq!(xs.clone().modify_last(|n| n * 10).into_vec(), vec![1, 2, 30]);
        assert_eq!(nev(&[5]).update_last(6), nev(&[6]));
    }

    #[test]
    fn constructors() {
        assert_eq!(NonEmptyVec::make_by(3, |i| i * 2).into_vec(), vec![0, 2, 4]);
        assert_eq!(NonEmptyVec::make_by(0, |i| i).into_vec(), vec![0]);
        assert_eq!(NonEmptyVec::replicate('x', 2).into_vec(), vec!['x', 'x']);
        assert_eq!(NonEmptyVec::range(1, 4).into_vec(), vec![1, 2, 3, 4]);
        assert_eq!(NonEmptyVec::range(5, 2).into_vec(), vec![5]);
    }

    #[test]
    fn iteration_and_display() {
        let xs = nev(&[1, 2, 3]);
        assert_eq!(xs.iter().rev().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
        assert_eq!((&xs).into_iter().count(), 3);
        assert_eq!(xs.to_string(), "[1, 2, 3]");
        assert_eq!(Vec::from(xs), vec![1, 2, 3]);
    }
}
