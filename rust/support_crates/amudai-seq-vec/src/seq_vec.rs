use std::hash::Hash;
use std::ops::Deref;

use ahash::AHashSet;

use crate::error::{Error, Result};

/// An owning, ordered sequence of values of a single type.
///
/// `SeqVec` wraps a `Vec<T>` and adds a small set of functional-style operations.
/// Element order is the insertion order and is preserved by every operation:
///
/// - [`filter`](SeqVec::filter) and [`unique`](SeqVec::unique) mutate the container
///   in place, keeping the relative order of the surviving elements.
/// - `clone` produces an independent copy: mutating either container afterwards
///   is never observable through the other.
/// - [`reduce`](SeqVec::reduce) folds the elements left to right without touching
///   the container, returning `T::default()` when it is empty.
///
/// The container has no internal synchronization; mutating operations take
/// `&mut self`, so concurrent access is ruled out by the borrow checker.
///
/// # Examples
///
/// ```
/// use amudai_seq_vec::SeqVec;
///
/// let mut v = SeqVec::from_vec(vec![1, 2, 2, 3, 4, 4, 5]);
/// v.unique();
/// assert_eq!(v.as_slice(), &[1, 2, 3, 4, 5]);
///
/// v.filter(|&x| x % 2 == 1);
/// assert_eq!(v.as_slice(), &[1, 3, 5]);
///
/// assert_eq!(v.reduce(|a, b| a + b), 9);
/// assert_eq!(SeqVec::<i32>::new().reduce(|a, b| a + b), 0);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SeqVec<T> {
    values: Vec<T>,
}

impl<T> SeqVec<T> {
    /// Creates a new empty `SeqVec`.
    pub fn new() -> SeqVec<T> {
        SeqVec { values: Vec::new() }
    }

    /// Creates a new empty `SeqVec` with the specified capacity.
    pub fn with_capacity(capacity: usize) -> SeqVec<T> {
        SeqVec {
            values: Vec::with_capacity(capacity),
        }
    }

    /// Creates a `SeqVec` that takes ownership of `values`, keeping their order.
    pub fn from_vec(values: Vec<T>) -> SeqVec<T> {
        SeqVec { values }
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the sequence contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.values.iter()
    }

    /// Appends an element to the end of the sequence.
    pub fn push(&mut self, value: T) {
        self.values.push(value);
    }

    /// Removes all elements.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Consumes the `SeqVec` and returns the underlying `Vec`.
    pub fn into_vec(self) -> Vec<T> {
        self.values
    }

    /// Retains only the elements for which `predicate` returns `true`.
    ///
    /// The predicate is called exactly once per element, in order. Surviving elements
    /// keep their relative order; the sequence may become empty.
    pub fn filter<F>(&mut self, predicate: F)
    where
        F: FnMut(&T) -> bool,
    {
        let before = self.values.len();
        self.values.retain(predicate);
        self.trace_removed("filter", before);
    }

    /// Returns a new `SeqVec` holding clones of the elements that satisfy `predicate`,
    /// leaving `self` untouched.
    pub fn filtered<F>(&self, mut predicate: F) -> SeqVec<T>
    where
        T: Clone,
        F: FnMut(&T) -> bool,
    {
        self.values
            .iter()
            .filter(|&v| predicate(v))
            .cloned()
            .collect()
    }

    /// Removes every element equal to one that appears earlier in the sequence.
    ///
    /// The first occurrence of each distinct value is kept, in its original position
    /// relative to the other survivors. Runs in linear time using a hash set.
    ///
    /// Returns `self` to allow chaining.
    pub fn unique(&mut self) -> &mut Self
    where
        T: Eq + Hash,
    {
        let keep = {
            let mut seen = AHashSet::with_capacity(self.values.len());
            self.values
                .iter()
                .map(|v| seen.insert(v))
                .collect::<Vec<bool>>()
        };
        let before = self.values.len();
        let mut keep = keep.into_iter();
        self.values.retain(|_| keep.next().unwrap_or(false));
        self.trace_removed("unique", before);
        self
    }

    /// Same as [`unique`](SeqVec::unique), for element types that only support
    /// equality comparison.
    ///
    /// Each element is compared against the already retained ones, so this takes
    /// quadratic time in the worst case.
    pub fn unique_by_eq(&mut self) -> &mut Self
    where
        T: PartialEq,
    {
        let before = self.values.len();
        let mut kept = Vec::with_capacity(before);
        for value in self.values.drain(..) {
            if !kept.contains(&value) {
                kept.push(value);
            }
        }
        self.values = kept;
        self.trace_removed("unique_by_eq", before);
        self
    }

    /// Folds the elements left to right with `combine`.
    ///
    /// - An empty sequence yields `T::default()`.
    /// - A single element is returned as is.
    /// - Otherwise the first element seeds the accumulator and `combine(acc, next)`
    ///   is applied to each following element, i.e. exactly `len() - 1` times.
    ///
    /// The container is not modified; elements are cloned into the fold.
    pub fn reduce<F>(&self, combine: F) -> T
    where
        T: Clone + Default,
        F: FnMut(T, T) -> T,
    {
        self.values
            .iter()
            .cloned()
            .reduce(combine)
            .unwrap_or_default()
    }

    /// Consuming variant of [`reduce`](SeqVec::reduce) that moves the elements into
    /// the fold instead of cloning them.
    pub fn into_reduce<F>(self, combine: F) -> T
    where
        T: Default,
        F: FnMut(T, T) -> T,
    {
        self.values.into_iter().reduce(combine).unwrap_or_default()
    }

    /// Like [`reduce`](SeqVec::reduce), but fails with
    /// [`ErrorKind::EmptySequence`](crate::ErrorKind::EmptySequence) on an empty
    /// sequence instead of returning the default value.
    pub fn checked_reduce<F>(&self, combine: F) -> Result<T>
    where
        T: Clone,
        F: FnMut(T, T) -> T,
    {
        self.values
            .iter()
            .cloned()
            .reduce(combine)
            .ok_or_else(|| Error::empty_sequence("reduce"))
    }

    fn trace_removed(&self, operation: &str, before: usize) {
        let removed = before - self.values.len();
        if removed != 0 {
            log::trace!("SeqVec::{operation}: removed {removed} of {before} elements");
        }
    }
}

impl<T> Default for SeqVec<T> {
    fn default() -> Self {
        SeqVec::new()
    }
}

impl<T> Deref for SeqVec<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        &self.values
    }
}

impl<T> AsRef<[T]> for SeqVec<T> {
    fn as_ref(&self) -> &[T] {
        &self.values
    }
}

impl<T> std::ops::Index<usize> for SeqVec<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.values[index]
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for SeqVec<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("SeqVec").field(&self.values).finish()
    }
}

impl<T> From<Vec<T>> for SeqVec<T> {
    fn from(values: Vec<T>) -> Self {
        SeqVec::from_vec(values)
    }
}

impl<T: Clone> From<&[T]> for SeqVec<T> {
    fn from(slice: &[T]) -> Self {
        SeqVec::from_vec(slice.to_vec())
    }
}

impl<T> FromIterator<T> for SeqVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        SeqVec::from_vec(iter.into_iter().collect())
    }
}

impl<T> Extend<T> for SeqVec<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.values.extend(iter);
    }
}

impl<T> IntoIterator for SeqVec<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a SeqVec<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
