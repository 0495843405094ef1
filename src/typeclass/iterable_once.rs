//! The read-only query and transform contract shared by every container.
//!
//! [`IterableOnce`] describes a finite, ordered sequence of elements. It is
//! implemented by [`LinkedList`](crate::persistent::LinkedList),
//! [`Seq`](crate::persistent::Seq) and [`Optional`](crate::control::Optional),
//! which differ completely in representation but agree on every observable
//! result of the operations below.
//!
//! # Laws
//!
//! For every container `c`, function `f` and predicate `p`:
//!
//! ```text
//! c.map(f).length()            == c.length()
//! c.map(f).at(i)               == f(c.at(i))            for every valid i
//! c.filter(p).length()         == c.count(p)
//! c.filter_not(p).to_vec()     == c.filter(|x| !p(x)).to_vec()
//! c.for_all(p)                 == !c.exists(|x| !p(x))
//! ```
//!
//! No operation mutates the receiver. Transforms return a new container of
//! the receiver's own kind (`Self` or `Self::WithType<V>`).
//!
//! # Examples
//!
//! ```rust
//! use functional_collections::persistent::{LinkedList, Seq};
//! use functional_collections::typeclass::IterableOnce;
//!
//! fn describe<C: IterableOnce<Inner = i32>>(container: &C) -> (usize, i32, bool) {
//!     (
//!         container.count(|value| value % 2 == 0),
//!         container.reduce_left(0, |accumulator, value| accumulator + value),
//!         container.for_all(|value| *value > 0),
//!     )
//! }
//!
//! let values = vec![1, 2, 3, 4];
//! assert_eq!(describe(&LinkedList::from_vec(values.clone())), (2, 10, true));
//! assert_eq!(describe(&Seq::from_vec(values)), (2, 10, true));
//! ```

use super::higher::TypeConstructor;
use crate::error::IndexOutOfBoundsError;

/// A finite sequence of elements that can be queried and transformed.
///
/// # Required Methods
///
/// - `length`, `iter`: size and forward traversal
/// - `map`, `flat_map`, `filter`: transforms building a new container
/// - `reduce_right`: right-associative fold
///
/// # Provided Methods
///
/// Everything else is derived from `iter` and `length`. Implementations
/// override a provided method when their representation answers it more
/// directly (for example `at` on an array-backed sequence).
pub trait IterableOnce: TypeConstructor {
    /// Borrowing iterator returned by [`iter`](Self::iter).
    type Iter<'a>: Iterator<Item = &'a Self::Inner>
    where
        Self: 'a;

    /// Result of [`flat_map`](Self::flat_map) when the mapper returns `C`.
    ///
    /// Sequences collect into `Self::WithType<V>`. A container holding at
    /// most one element hands back the mapper's own container instead, so
    /// nothing the mapper produced is dropped.
    type FlatMapped<V, C>: IterableOnce<Inner = V>
    where
        C: IterableOnce<Inner = V>;

    /// Returns the number of elements.
    fn length(&self) -> usize;

    /// Returns `true` when there are no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.length() == 0
    }

    /// Returns a fresh forward traversal over the elements.
    ///
    /// Every call starts again from the first element, so the same container
    /// can be iterated any number of times with identical results.
    fn iter(&self) -> Self::Iter<'_>;

    /// Materializes the elements, in iteration order, into a `Vec`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_collections::persistent::LinkedList;
    /// use functional_collections::typeclass::IterableOnce;
    ///
    /// assert_eq!(LinkedList::from_vec(vec![1, 2, 3]).to_vec(), vec![1, 2, 3]);
    /// ```
    fn to_vec(&self) -> Vec<Self::Inner>
    where
        Self::Inner: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Applies `function` to every element in order.
    ///
    /// The result has the same length and kind as the receiver.
    fn map<V, F>(&self, function: F) -> Self::WithType<V>
    where
        F: FnMut(&Self::Inner) -> V;

    /// Applies `function` to every element in order and concatenates the
    /// returned containers, flattening one level.
    ///
    /// An element whose mapped container is empty contributes nothing. The
    /// empty container `C::default()` stands for "no elements" when the
    /// receiver has nothing to map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_collections::persistent::Seq;
    /// use functional_collections::typeclass::IterableOnce;
    ///
    /// let seq = Seq::from_vec(vec![1, 2, 3]);
    /// let doubled = seq.flat_map(|value| Seq::from_vec(vec![*value, value * 2]));
    /// assert_eq!(doubled.to_vec(), vec![1, 2, 2, 4, 3, 6]);
    /// ```
    fn flat_map<V, C, F>(&self, function: F) -> Self::FlatMapped<V, C>
    where
        V: Clone,
        C: IterableOnce<Inner = V> + Default,
        F: FnMut(&Self::Inner) -> C;

    /// Keeps the elements satisfying `predicate`, preserving their order.
    fn filter<P>(&self, predicate: P) -> Self
    where
        Self: Sized,
        Self::Inner: Clone,
        P: FnMut(&Self::Inner) -> bool;

    /// Keeps the elements **not** satisfying `predicate`.
    fn filter_not<P>(&self, mut predicate: P) -> Self
    where
        Self: Sized,
        Self::Inner: Clone,
        P: FnMut(&Self::Inner) -> bool,
    {
        self.filter(move |element| !predicate(element))
    }

    /// Returns how many elements satisfy `predicate`.
    fn count<P>(&self, mut predicate: P) -> usize
    where
        P: FnMut(&Self::Inner) -> bool,
    {
        self.iter().filter(|element| predicate(element)).count()
    }

    /// Returns `true` if at least one element satisfies `predicate`.
    ///
    /// Always `false` on an empty container.
    fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
    {
        self.iter().any(predicate)
    }

    /// Returns `true` if every element satisfies `predicate`.
    ///
    /// Vacuously `true` on an empty container.
    fn for_all<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
    {
        self.iter().all(predicate)
    }

    /// Calls `consumer` once per element, in order.
    fn for_each<F>(&self, consumer: F)
    where
        F: FnMut(&Self::Inner),
    {
        self.iter().for_each(consumer);
    }

    /// Left fold: `op(op(op(initial, e0), e1), e2)`.
    ///
    /// Returns `initial` unchanged on an empty container.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_collections::persistent::Seq;
    /// use functional_collections::typeclass::IterableOnce;
    ///
    /// let seq = Seq::from_vec(vec![1, 3, 5]);
    /// assert_eq!(seq.reduce_left(0, |accumulator, value| accumulator * 2 + value), 15);
    /// ```
    fn reduce_left<V, F>(&self, initial: V, op: F) -> V
    where
        F: FnMut(V, &Self::Inner) -> V,
    {
        self.iter().fold(initial, op)
    }

    /// Right fold: `op(e0, op(e1, op(e2, initial)))`.
    ///
    /// Returns `initial` unchanged on an empty container.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_collections::persistent::LinkedList;
    /// use functional_collections::typeclass::IterableOnce;
    ///
    /// let list = LinkedList::from_vec(vec![1, 3, 5]);
    /// assert_eq!(list.reduce_right(0, |value, accumulator| value * 2 - accumulator), 6);
    /// ```
    fn reduce_right<V, F>(&self, initial: V, op: F) -> V
    where
        F: FnMut(&Self::Inner, V) -> V;

    /// Returns the element at the zero-based `index`.
    ///
    /// # Errors
    ///
    /// Returns [`IndexOutOfBoundsError`] when `index >= self.length()`.
    fn at(&self, index: usize) -> Result<&Self::Inner, IndexOutOfBoundsError> {
        self.iter().nth(index).ok_or_else(|| {
            let length = self.length();
            tracing::debug!(index, length, "index out of bounds");
            IndexOutOfBoundsError::new(index, length)
        })
    }
}
