//! Persistent (immutable) singly-linked list.
//!
//! This module provides [`LinkedList`], a chain of nodes ending in an empty
//! sentinel. A list is always in one of two shapes:
//!
//! - **Nil**: no elements
//! - **Node**: a head element followed by a tail, which is itself a list
//!
//! [`LinkedList::uncons`] exposes that shape. Every operation builds new
//! nodes; no node is modified after construction, so tails can be shared
//! between lists.
//!
//! # Examples
//!
//! ```rust
//! use functional_collections::linked_list;
//! use functional_collections::persistent::LinkedList;
//! use functional_collections::typeclass::{IterableOnce, List};
//!
//! let list = linked_list![1, 2, 3];
//! assert_eq!(list.head(), Some(&1));
//!
//! // Growth never touches the original list
//! let extended = list.prepend(0);
//! assert_eq!(list.to_vec(), vec![1, 2, 3]);
//! assert_eq!(extended.to_vec(), vec![0, 1, 2, 3]);
//!
//! // Transforms return a LinkedList again
//! let evens: LinkedList<i32> = extended.filter(|value| value % 2 == 0);
//! assert_eq!(evens.to_vec(), vec![0, 2]);
//! ```
//!
//! # Structural Sharing
//!
//! ```text
//! list:               1 -> 2 -> 3 -> nil
//! list.prepend(0):    0 -> [1 -> 2 -> 3 -> nil]  // shares [1, 2, 3] with list
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

use super::ReferenceCounter;
use crate::error::IndexOutOfBoundsError;
use crate::typeclass::{IterableOnce, List, TypeConstructor};

/// Internal node of a [`LinkedList`].
struct Node<T> {
    element: T,
    next: Option<ReferenceCounter<Self>>,
}

/// A persistent (immutable) singly-linked list.
///
/// # Time Complexity
///
/// | Operation        | Complexity |
/// |------------------|------------|
/// | `new`            | O(1)       |
/// | `prepend`        | O(1)       |
/// | `head` / `tail`  | O(1)       |
/// | `length`         | O(1)       |
/// | `at`             | O(n)       |
/// | `append`/`concat`| O(n)       |
/// | `map`/`filter`   | O(n)       |
///
/// Traversal, folding and dropping are iterative, so very long lists do not
/// exhaust the stack.
///
/// # Examples
///
/// ```rust
/// use functional_collections::persistent::LinkedList;
/// use functional_collections::typeclass::IterableOnce;
///
/// let list = LinkedList::from_vec(vec![1, 2, 3]);
/// assert_eq!(list.at(1), Ok(&2));
/// assert!(list.at(3).is_err());
/// ```
pub struct LinkedList<T> {
    head: Option<ReferenceCounter<Node<T>>>,
    /// Cached so that `length` is O(1).
    length: usize,
}

impl<T> LinkedList<T> {
    /// Creates the empty list (`Nil`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_collections::persistent::LinkedList;
    /// use functional_collections::typeclass::IterableOnce;
    ///
    /// let list: LinkedList<i32> = LinkedList::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            head: None,
            length: 0,
        }
    }

    /// Creates a list holding a single element.
    #[inline]
    #[must_use]
    pub fn singleton(element: T) -> Self {
        Self::new().cons(element)
    }

    /// Builds a list whose head is `values[0]`.
    ///
    /// Nodes are created from the last element to the first, so the order of
    /// `values` is the order of traversal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_collections::persistent::LinkedList;
    /// use functional_collections::typeclass::IterableOnce;
    ///
    /// let list = LinkedList::from_vec(vec!["a", "b", "c"]);
    /// assert_eq!(list.head(), Some(&"a"));
    /// assert_eq!(list.to_vec(), vec!["a", "b", "c"]);
    /// ```
    #[must_use]
    pub fn from_vec(mut values: Vec<T>) -> Self {
        let length = values.len();
        tracing::trace!(length, "building LinkedList");

        let mut head: Option<ReferenceCounter<Node<T>>> = None;
        while let Some(element) = values.pop() {
            head = Some(ReferenceCounter::new(Node {
                element,
                next: head,
            }));
        }

        Self { head, length }
    }

    /// Prepends without copying: the new node points at this list's head.
    fn cons(&self, element: T) -> Self {
        Self {
            head: Some(ReferenceCounter::new(Node {
                element,
                next: self.head.clone(),
            })),
            length: self.length + 1,
        }
    }

    /// Returns the first element, or `None` for `Nil`.
    #[inline]
    #[must_use]
    pub fn head(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.element)
    }

    /// Returns the list without its first element.
    ///
    /// The tail of `Nil` is `Nil`. The returned list shares its nodes with
    /// this one.
    #[inline]
    #[must_use]
    pub fn tail(&self) -> Self {
        self.head.as_ref().map_or_else(Self::new, |node| Self {
            head: node.next.clone(),
            length: self.length - 1,
        })
    }

    /// Splits a `Node` into its element and tail; returns `None` for `Nil`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_collections::persistent::LinkedList;
    ///
    /// fn sum(list: &LinkedList<i32>) -> i32 {
    ///     match list.uncons() {
    ///         None => 0,
    ///         Some((head, tail)) => head + sum(&tail),
    ///     }
    /// }
    ///
    /// assert_eq!(sum(&LinkedList::from_vec(vec![1, 2, 3])), 6);
    /// ```
    #[must_use]
    pub fn uncons(&self) -> Option<(&T, Self)> {
        self.head.as_ref().map(|node| {
            let tail = Self {
                head: node.next.clone(),
                length: self.length - 1,
            };
            (&node.element, tail)
        })
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        // Unlink uniquely owned nodes one at a time instead of letting the
        // compiler-generated drop recurse down the chain.
        let mut link = self.head.take();
        while let Some(node) = link {
            match ReferenceCounter::try_unwrap(node) {
                Ok(mut node) => link = node.next.take(),
                Err(_) => break,
            }
        }
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T> TypeConstructor for LinkedList<T> {
    type Inner = T;
    type WithType<B> = LinkedList<B>;
}

impl<T> IterableOnce for LinkedList<T> {
    type Iter<'a>
        = LinkedListIterator<'a, T>
    where
        Self: 'a;

    type FlatMapped<V, C>
        = LinkedList<V>
    where
        C: IterableOnce<Inner = V>;

    #[inline]
    fn length(&self) -> usize {
        self.length
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    #[inline]
    fn iter(&self) -> LinkedListIterator<'_, T> {
        LinkedListIterator {
            current: self.head.as_deref(),
            remaining: self.length,
        }
    }

    fn map<V, F>(&self, function: F) -> LinkedList<V>
    where
        F: FnMut(&T) -> V,
    {
        LinkedList::from_vec(self.iter().map(function).collect())
    }

    fn flat_map<V, C, F>(&self, mut function: F) -> LinkedList<V>
    where
        V: Clone,
        C: IterableOnce<Inner = V> + Default,
        F: FnMut(&T) -> C,
    {
        let mut values = Vec::with_capacity(self.length);
        for element in self {
            values.extend(function(element).iter().cloned());
        }
        LinkedList::from_vec(values)
    }

    fn filter<P>(&self, mut predicate: P) -> Self
    where
        T: Clone,
        P: FnMut(&T) -> bool,
    {
        Self::from_vec(
            self.iter()
                .filter(|element| predicate(element))
                .cloned()
                .collect(),
        )
    }

    fn reduce_right<V, F>(&self, initial: V, mut op: F) -> V
    where
        F: FnMut(&T, V) -> V,
    {
        // The innermost call combines the last node with `initial`.
        let pending: Vec<&T> = self.iter().collect();
        pending
            .into_iter()
            .rev()
            .fold(initial, |accumulator, element| op(element, accumulator))
    }

    fn at(&self, index: usize) -> Result<&T, IndexOutOfBoundsError> {
        let mut current = self.head.as_deref();
        let mut remaining = index;
        while let Some(node) = current {
            if remaining == 0 {
                return Ok(&node.element);
            }
            remaining -= 1;
            current = node.next.as_deref();
        }
        tracing::debug!(index, length = self.length, "index out of bounds");
        Err(IndexOutOfBoundsError::new(index, self.length))
    }
}

impl<T> List for LinkedList<T> {
    #[inline]
    fn build_from_vec(values: Vec<T>) -> Self {
        Self::from_vec(values)
    }

    /// O(1): the new list shares every node of this one.
    #[inline]
    fn prepend(&self, value: T) -> Self
    where
        T: Clone,
    {
        self.cons(value)
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over references to the elements of a [`LinkedList`].
pub struct LinkedListIterator<'a, T> {
    current: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for LinkedListIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|node| {
            self.current = node.next.as_deref();
            self.remaining -= 1;
            &node.element
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for LinkedListIterator<'_, T> {}

/// An owning iterator over the elements of a [`LinkedList`].
///
/// Nodes may be shared with other lists, so elements are cloned out.
pub struct LinkedListIntoIterator<T> {
    list: LinkedList<T>,
}

impl<T: Clone> Iterator for LinkedListIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let (head, tail) = self.list.uncons()?;
        let element = head.clone();
        self.list = tail;
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.length, Some(self.list.length))
    }
}

impl<T: Clone> ExactSizeIterator for LinkedListIntoIterator<T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Clone for LinkedList<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
            length: self.length,
        }
    }
}

impl<T> Default for LinkedList<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for LinkedList<T> {
    #[inline]
    fn from(values: Vec<T>) -> Self {
        Self::from_vec(values)
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T: Clone> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = LinkedListIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        LinkedListIntoIterator { list: self }
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = LinkedListIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: Hash> Hash for LinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.length.hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        for (position, element) in self.iter().enumerate() {
            if position > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

/// Creates a [`LinkedList`] from a list of elements.
///
/// # Examples
///
/// ```rust
/// use functional_collections::linked_list;
/// use functional_collections::persistent::LinkedList;
/// use functional_collections::typeclass::IterableOnce;
///
/// let list = linked_list![1, 2, 3];
/// assert_eq!(list.to_vec(), vec![1, 2, 3]);
///
/// let empty: LinkedList<i32> = linked_list![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! linked_list {
    () => {
        $crate::persistent::LinkedList::new()
    };
    ($($element:expr),+ $(,)?) => {
        $crate::persistent::LinkedList::from_vec(vec![$($element),+])
    };
}
