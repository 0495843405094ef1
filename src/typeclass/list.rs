//! Structural growth shared by the sequence containers.
//!
//! [`List`] extends [`IterableOnce`] with `concat`, `append` and `prepend`.
//! The result type is always `Self`: growing a `LinkedList` yields a
//! `LinkedList` and growing a `Seq` yields a `Seq`, whatever container the
//! appended elements came from.
//!
//! The provided methods only enumerate elements and hand an ordered `Vec` to
//! [`List::build_from_vec`], so they never depend on how a concrete list
//! stores its elements.
//!
//! # Examples
//!
//! ```rust
//! use functional_collections::persistent::{LinkedList, Seq};
//! use functional_collections::typeclass::{IterableOnce, List};
//!
//! let list = LinkedList::from_vec(vec![1, 2, 3]);
//! let seq = Seq::from_vec(vec![4, 5, 6]);
//!
//! let joined: LinkedList<i32> = list.concat(&seq);
//! assert_eq!(joined.to_vec(), vec![1, 2, 3, 4, 5, 6]);
//!
//! let joined: Seq<i32> = seq.prepend_all(&list);
//! assert_eq!(joined.to_vec(), vec![1, 2, 3, 4, 5, 6]);
//! ```

use std::iter;

use super::iterable_once::IterableOnce;

/// An [`IterableOnce`] that can be grown into a new container of its own kind.
///
/// # Required Methods
///
/// - `build_from_vec`: builds `Self` from elements in the given order
///
/// # Laws
///
/// ```text
/// a.append(x).at(a.length())   == x
/// a.prepend(x).at(0)           == x
/// a.concat(b).to_vec()         == [a.to_vec(), b.to_vec()].concat()
/// ```
pub trait List: IterableOnce + Sized {
    /// Builds a list holding `values` in order; `values[0]` becomes the
    /// first element.
    fn build_from_vec(values: Vec<Self::Inner>) -> Self;

    /// Returns this list's elements followed by `other`'s elements.
    fn concat<C>(&self, other: &C) -> Self
    where
        Self::Inner: Clone,
        C: IterableOnce<Inner = Self::Inner>,
    {
        let mut values = Vec::with_capacity(self.length() + other.length());
        values.extend(self.iter().cloned());
        values.extend(other.iter().cloned());
        Self::build_from_vec(values)
    }

    /// Returns this list with `value` added after the last element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_collections::persistent::Seq;
    /// use functional_collections::typeclass::{IterableOnce, List};
    ///
    /// let seq = Seq::from_vec(vec![1, 2, 3]);
    /// assert_eq!(seq.append(4).to_vec(), vec![1, 2, 3, 4]);
    /// assert_eq!(seq.length(), 3);
    /// ```
    fn append(&self, value: Self::Inner) -> Self
    where
        Self::Inner: Clone,
    {
        Self::build_from_vec(self.iter().cloned().chain(iter::once(value)).collect())
    }

    /// Same as [`concat`](Self::concat).
    #[inline]
    fn append_all<C>(&self, other: &C) -> Self
    where
        Self::Inner: Clone,
        C: IterableOnce<Inner = Self::Inner>,
    {
        self.concat(other)
    }

    /// Returns this list with `value` added before the first element.
    fn prepend(&self, value: Self::Inner) -> Self
    where
        Self::Inner: Clone,
    {
        Self::build_from_vec(iter::once(value).chain(self.iter().cloned()).collect())
    }

    /// Returns `other`'s elements followed by this list's elements.
    fn prepend_all<C>(&self, other: &C) -> Self
    where
        Self::Inner: Clone,
        C: IterableOnce<Inner = Self::Inner>,
    {
        let mut values = Vec::with_capacity(self.length() + other.length());
        values.extend(other.iter().cloned());
        values.extend(self.iter().cloned());
        Self::build_from_vec(values)
    }
}
