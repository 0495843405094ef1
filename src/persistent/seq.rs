//! Immutable array-backed sequence.
//!
//! [`Seq`] stores its elements contiguously, indexed `0..length`, in the
//! order they were given at construction. The storage is never written to
//! after construction: every transform allocates a new sequence, and cloning
//! a `Seq` only bumps a reference count.
//!
//! # Examples
//!
//! ```rust
//! use functional_collections::persistent::Seq;
//! use functional_collections::seq;
//! use functional_collections::typeclass::{IterableOnce, List};
//!
//! let numbers = seq![1, 2, 3, 4];
//! let odd = numbers.filter_not(|value| value % 2 == 0);
//! assert_eq!(odd.as_slice(), &[1, 3]);
//!
//! let longer: Seq<i32> = numbers.append(5);
//! assert_eq!(numbers.length(), 4);
//! assert_eq!(longer.at(4), Ok(&5));
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;
use std::slice;

use super::ReferenceCounter;
use crate::error::IndexOutOfBoundsError;
use crate::typeclass::{IterableOnce, List, TypeConstructor};

/// An immutable sequence backed by one contiguous array.
///
/// # Time Complexity
///
/// | Operation         | Complexity |
/// |-------------------|------------|
/// | `length`          | O(1)       |
/// | `at`              | O(1)       |
/// | `clone`           | O(1)       |
/// | `append`/`prepend`| O(n)       |
/// | `map`/`filter`    | O(n)       |
pub struct Seq<T> {
    values: ReferenceCounter<[T]>,
}

impl<T> Seq<T> {
    /// Creates an empty sequence.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            values: ReferenceCounter::default(),
        }
    }

    /// Creates a sequence holding a single element.
    #[inline]
    #[must_use]
    pub fn singleton(element: T) -> Self {
        Self::from_vec(vec![element])
    }

    /// Builds a sequence holding `values` in the same order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_collections::persistent::Seq;
    /// use functional_collections::typeclass::IterableOnce;
    ///
    /// let seq = Seq::from_vec(vec![1, 2, 3]);
    /// assert_eq!(seq.to_vec(), vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn from_vec(values: Vec<T>) -> Self {
        tracing::trace!(length = values.len(), "building Seq");
        Self {
            values: ReferenceCounter::from(values),
        }
    }

    /// Borrows the elements as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T> TypeConstructor for Seq<T> {
    type Inner = T;
    type WithType<B> = Seq<B>;
}

impl<T> IterableOnce for Seq<T> {
    type Iter<'a>
        = slice::Iter<'a, T>
    where
        Self: 'a;

    type FlatMapped<V, C>
        = Seq<V>
    where
        C: IterableOnce<Inner = V>;

    #[inline]
    fn length(&self) -> usize {
        self.values.len()
    }

    #[inline]
    fn iter(&self) -> slice::Iter<'_, T> {
        self.values.iter()
    }

    fn map<V, F>(&self, function: F) -> Seq<V>
    where
        F: FnMut(&T) -> V,
    {
        Seq::from_vec(self.values.iter().map(function).collect())
    }

    fn flat_map<V, C, F>(&self, mut function: F) -> Seq<V>
    where
        V: Clone,
        C: IterableOnce<Inner = V> + Default,
        F: FnMut(&T) -> C,
    {
        let mut result = Vec::with_capacity(self.values.len());
        for element in self.values.iter() {
            result.extend(function(element).iter().cloned());
        }
        Seq::from_vec(result)
    }

    fn filter<P>(&self, mut predicate: P) -> Self
    where
        T: Clone,
        P: FnMut(&T) -> bool,
    {
        Self::from_vec(
            self.values
                .iter()
                .filter(|element| predicate(element))
                .cloned()
                .collect(),
        )
    }

    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.values.to_vec()
    }

    fn reduce_right<V, F>(&self, initial: V, mut op: F) -> V
    where
        F: FnMut(&T, V) -> V,
    {
        self.values
            .iter()
            .rev()
            .fold(initial, |accumulator, element| op(element, accumulator))
    }

    #[inline]
    fn at(&self, index: usize) -> Result<&T, IndexOutOfBoundsError> {
        self.values.get(index).ok_or_else(|| {
            let length = self.values.len();
            tracing::debug!(index, length, "index out of bounds");
            IndexOutOfBoundsError::new(index, length)
        })
    }
}

impl<T> List for Seq<T> {
    #[inline]
    fn build_from_vec(values: Vec<T>) -> Self {
        Self::from_vec(values)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Clone for Seq<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            values: ReferenceCounter::clone(&self.values),
        }
    }
}

impl<T> Default for Seq<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Seq<T> {
    #[inline]
    fn from(values: Vec<T>) -> Self {
        Self::from_vec(values)
    }
}

impl<T> FromIterator<T> for Seq<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

/// The storage may be shared with other sequences, so elements are cloned
/// out.
impl<T: Clone> IntoIterator for Seq<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.values.to_vec().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Seq<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl<T: PartialEq> PartialEq for Seq<T> {
    fn eq(&self, other: &Self) -> bool {
        self.values[..] == other.values[..]
    }
}

impl<T: Eq> Eq for Seq<T> {}

impl<T: Hash> Hash for Seq<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.values.len().hash(state);
        for element in self.values.iter() {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Seq<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.values.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Seq<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        for (position, element) in self.values.iter().enumerate() {
            if position > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

/// Creates a [`Seq`] from a list of elements.
///
/// # Examples
///
/// ```rust
/// use functional_collections::persistent::Seq;
/// use functional_collections::seq;
///
/// assert_eq!(seq![1, 2, 3].as_slice(), &[1, 2, 3]);
///
/// let empty: Seq<i32> = seq![];
/// assert!(empty.as_slice().is_empty());
/// ```
#[macro_export]
macro_rules! seq {
    () => {
        $crate::persistent::Seq::new()
    };
    ($($element:expr),+ $(,)?) => {
        $crate::persistent::Seq::from_vec(vec![$($element),+])
    };
}
