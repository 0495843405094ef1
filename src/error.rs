//! Error types for collection access.
//!
//! Every container in this crate is immutable, so the only faults are
//! reading past the end of a container and forcing a value out of an
//! empty [`Optional`](crate::control::Optional).
//!
//! # Examples
//!
//! ```rust
//! use functional_collections::error::{CollectionError, IndexOutOfBoundsError};
//!
//! let error = IndexOutOfBoundsError::new(3, 3);
//! assert_eq!(format!("{error}"), "index 3 out of bounds for length 3");
//!
//! let unified: CollectionError = error.into();
//! assert!(matches!(unified, CollectionError::IndexOutOfBounds(_)));
//! ```

use thiserror::Error;

/// Returned by `at` when the requested index is not below the length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("index {index} out of bounds for length {length}")]
pub struct IndexOutOfBoundsError {
    /// The index that was requested.
    pub index: usize,
    /// The length of the container at the time of the request.
    pub length: usize,
}

impl IndexOutOfBoundsError {
    /// Creates the error for a request of `index` on a container of `length`.
    #[inline]
    #[must_use]
    pub const fn new(index: usize, length: usize) -> Self {
        Self { index, length }
    }
}

/// Returned by [`Optional::get_or_error`](crate::control::Optional::get_or_error)
/// on `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Error)]
#[error("called get_or_error on an empty Optional")]
pub struct EmptyOptionError;

/// Either fault a collection operation can produce.
///
/// Both specific errors convert into this type, so callers mixing indexed
/// access and forced extraction can use `?` with a single error type.
///
/// # Examples
///
/// ```rust
/// use functional_collections::control::Optional;
/// use functional_collections::error::CollectionError;
/// use functional_collections::persistent::Seq;
/// use functional_collections::typeclass::IterableOnce;
///
/// fn first_of_first(values: &Seq<Optional<i32>>) -> Result<i32, CollectionError> {
///     Ok(*values.at(0)?.get_or_error()?)
/// }
///
/// assert_eq!(first_of_first(&Seq::from_vec(vec![Optional::some(7)])), Ok(7));
/// assert!(first_of_first(&Seq::new()).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum CollectionError {
    /// An index was not below the container length.
    #[error(transparent)]
    IndexOutOfBounds(#[from] IndexOutOfBoundsError),
    /// A value was forced out of an empty `Optional`.
    #[error(transparent)]
    EmptyOption(#[from] EmptyOptionError),
}
