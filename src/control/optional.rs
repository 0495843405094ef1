//! Optional type - a container holding zero or one value.
//!
//! [`Optional<T>`] is either `Some(value)` or `None`. It implements
//! [`IterableOnce`] like the sequence containers, behaving as a sequence of
//! length one or zero: on `None` every transform is a no-op and every
//! supplied function is skipped; on `Some` each supplied function runs at
//! most once.
//!
//! # Examples
//!
//! ```rust
//! use functional_collections::control::Optional;
//! use functional_collections::typeclass::IterableOnce;
//!
//! let some = Optional::some(15);
//! let none: Optional<i32> = Optional::none();
//!
//! assert_eq!(some.get_or_else(30), 15);
//! assert_eq!(none.get_or_else(30), 30);
//!
//! let doubled = some.map(|value| value * 2);
//! assert_eq!(doubled.get_or_error(), Ok(&30));
//!
//! let chained = none.flat_map(|value| Optional::some(value * 2));
//! assert!(chained.is_empty());
//! ```

use std::fmt;

use crate::error::{EmptyOptionError, IndexOutOfBoundsError};
use crate::typeclass::{IterableOnce, TypeConstructor};

/// A value that may be absent.
///
/// The variant names mirror `std::option::Option`; the two types convert
/// into each other with `From`.
///
/// # Examples
///
/// ```rust
/// use functional_collections::control::Optional;
///
/// let present = Optional::some("value");
/// assert!(present.is_defined());
///
/// let absent: Optional<&str> = Optional::none();
/// assert_eq!(absent.get_or_none(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Optional<T> {
    /// Holds exactly one value.
    Some(T),
    /// Holds no value.
    None,
}

impl<T> Optional<T> {
    /// Wraps `value`.
    #[inline]
    pub const fn some(value: T) -> Self {
        Self::Some(value)
    }

    /// Returns the empty `Optional`.
    #[inline]
    pub const fn none() -> Self {
        Self::None
    }

    /// Returns `true` for `Some`.
    #[inline]
    pub const fn is_defined(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns the held value.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyOptionError`] on `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_collections::control::Optional;
    /// use functional_collections::error::EmptyOptionError;
    ///
    /// assert_eq!(Optional::some(1).get_or_error(), Ok(&1));
    /// assert_eq!(Optional::<i32>::none().get_or_error(), Err(EmptyOptionError));
    /// ```
    pub fn get_or_error(&self) -> Result<&T, EmptyOptionError> {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => {
                tracing::debug!("get_or_error called on None");
                Err(EmptyOptionError)
            }
        }
    }

    /// Returns the held value, or `other` on `None`.
    #[inline]
    pub fn get_or_else(self, other: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => other,
        }
    }

    /// Returns a reference to the held value, or `None` when absent.
    ///
    /// The absent case is the `std` `None`, never a default value of `T`.
    #[inline]
    pub const fn get_or_none(&self) -> Option<&T> {
        match self {
            Self::Some(value) => Some(value),
            Self::None => None,
        }
    }

    /// Returns `self` if it is `Some`, otherwise `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_collections::control::Optional;
    ///
    /// assert_eq!(Optional::some(1).or_else(Optional::some(2)), Optional::some(1));
    /// assert_eq!(Optional::none().or_else(Optional::some(2)), Optional::some(2));
    /// ```
    #[inline]
    pub fn or_else(self, other: Self) -> Self {
        match self {
            Self::Some(_) => self,
            Self::None => other,
        }
    }

    /// Converts into the standard library's `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.into()
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T> TypeConstructor for Optional<T> {
    type Inner = T;
    type WithType<B> = Optional<B>;
}

impl<T> IterableOnce for Optional<T> {
    type Iter<'a>
        = std::option::IntoIter<&'a T>
    where
        Self: 'a;

    type FlatMapped<V, C>
        = C
    where
        C: IterableOnce<Inner = V>;

    #[inline]
    fn length(&self) -> usize {
        usize::from(self.is_defined())
    }

    #[inline]
    fn is_empty(&self) -> bool {
        !self.is_defined()
    }

    #[inline]
    fn iter(&self) -> std::option::IntoIter<&'_ T> {
        self.get_or_none().into_iter()
    }

    fn map<V, F>(&self, mut function: F) -> Optional<V>
    where
        F: FnMut(&T) -> V,
    {
        match self {
            Self::Some(value) => Optional::Some(function(value)),
            Self::None => Optional::None,
        }
    }

    /// Returns the mapper's container unchanged on `Some`, and an empty `C`
    /// on `None`.
    fn flat_map<V, C, F>(&self, mut function: F) -> C
    where
        V: Clone,
        C: IterableOnce<Inner = V> + Default,
        F: FnMut(&T) -> C,
    {
        match self {
            Self::Some(value) => function(value),
            Self::None => C::default(),
        }
    }

    fn filter<P>(&self, mut predicate: P) -> Self
    where
        T: Clone,
        P: FnMut(&T) -> bool,
    {
        match self {
            Self::Some(value) if predicate(value) => self.clone(),
            _ => Self::None,
        }
    }

    fn reduce_right<V, F>(&self, initial: V, mut op: F) -> V
    where
        F: FnMut(&T, V) -> V,
    {
        match self {
            Self::Some(value) => op(value, initial),
            Self::None => initial,
        }
    }

    fn at(&self, index: usize) -> Result<&T, IndexOutOfBoundsError> {
        match self {
            Self::Some(value) if index == 0 => Ok(value),
            _ => {
                let length = self.length();
                tracing::debug!(index, length, "index out of bounds");
                Err(IndexOutOfBoundsError::new(index, length))
            }
        }
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for Optional<T> {
    #[inline]
    fn default() -> Self {
        Self::None
    }
}

impl<T> From<Option<T>> for Optional<T> {
    #[inline]
    fn from(option: Option<T>) -> Self {
        option.map_or(Self::None, Self::Some)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    #[inline]
    fn from(optional: Optional<T>) -> Self {
        match optional {
            Optional::Some(value) => Some(value),
            Optional::None => None,
        }
    }
}

impl<'a, T> IntoIterator for &'a Optional<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => write!(formatter, "Some({value})"),
            Self::None => write!(formatter, "None"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_some_and_none_lengths() {
        assert_eq!(Optional::some(1).length(), 1);
        assert_eq!(Optional::<i32>::none().length(), 0);
    }

    #[rstest]
    fn test_map_runs_function_at_most_once() {
        let calls = Cell::new(0);
        let mapped = Optional::some(2).map(|value| {
            calls.set(calls.get() + 1);
            value * 3
        });
        assert_eq!(mapped, Optional::some(6));
        assert_eq!(calls.get(), 1);

        let skipped = Optional::<i32>::none().map(|value| {
            calls.set(calls.get() + 1);
            value * 3
        });
        assert_eq!(skipped, Optional::none());
        assert_eq!(calls.get(), 1);
    }

    #[cfg(feature = "persistent")]
    #[rstest]
    fn test_flat_map_returns_every_element_of_the_mapped_container() {
        use crate::persistent::Seq;
        let both = Optional::some(5).flat_map(|value| Seq::from_vec(vec![*value, value + 1]));
        assert_eq!(both.to_vec(), vec![5, 6]);
        assert_eq!(both.length(), 2);

        let empty = Optional::some(5).flat_map(|_| Seq::<i32>::new());
        assert!(empty.is_empty());

        let skipped = Optional::<i32>::none().flat_map(|value| Seq::from_vec(vec![*value, value + 1]));
        assert!(skipped.is_empty());
    }

    #[rstest]
    #[case(Optional::some(4), Optional::some(4))]
    #[case(Optional::some(3), Optional::none())]
    #[case(Optional::none(), Optional::none())]
    fn test_filter(#[case] input: Optional<i32>, #[case] expected: Optional<i32>) {
        assert_eq!(input.filter(|value| value % 2 == 0), expected);
    }

    #[rstest]
    #[case(Optional::some(4), Optional::none())]
    #[case(Optional::some(3), Optional::some(3))]
    #[case(Optional::none(), Optional::none())]
    fn test_filter_not(#[case] input: Optional<i32>, #[case] expected: Optional<i32>) {
        assert_eq!(input.filter_not(|value| value % 2 == 0), expected);
    }

    #[rstest]
    fn test_folds() {
        assert_eq!(Optional::some(5).reduce_left(1, |accumulator, value| accumulator * 2 + value), 7);
        assert_eq!(Optional::some(5).reduce_right(1, |value, accumulator| value * 2 - accumulator), 9);
        assert_eq!(Optional::<i32>::none().reduce_left(1, |accumulator, value| accumulator + value), 1);
        assert_eq!(Optional::<i32>::none().reduce_right(1, |value, accumulator| value + accumulator), 1);
    }

    #[rstest]
    #[case(Optional::some(9), 0, Ok(&9))]
    #[case(Optional::some(9), 1, Err(IndexOutOfBoundsError { index: 1, length: 1 }))]
    #[case(Optional::none(), 0, Err(IndexOutOfBoundsError { index: 0, length: 0 }))]
    fn test_at(
        #[case] input: Optional<i32>,
        #[case] index: usize,
        #[case] expected: Result<&i32, IndexOutOfBoundsError>,
    ) {
        assert_eq!(input.at(index), expected);
    }

    #[rstest]
    fn test_std_option_round_trip() {
        assert_eq!(Optional::from(Some(1)), Optional::some(1));
        assert_eq!(Optional::<i32>::from(None), Optional::none());
        assert_eq!(Option::from(Optional::some(1)), Some(1));
    }

    #[rstest]
    fn test_display() {
        assert_eq!(format!("{}", Optional::some(1)), "Some(1)");
        assert_eq!(format!("{}", Optional::<i32>::none()), "None");
    }

    #[rstest]
    fn test_default_is_none() {
        assert_eq!(Optional::<String>::default(), Optional::none());
    }
}
