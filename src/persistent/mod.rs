//! Immutable sequence containers.
//!
//! - [`LinkedList`]: Persistent singly-linked list (`Nil` / `Node`)
//! - [`Seq`]: Array-backed sequence
//!
//! Both implement [`IterableOnce`](crate::typeclass::IterableOnce) and
//! [`List`](crate::typeclass::List) with identical observable results, so
//! code written against the traits works on either.
//!
//! # Structural Sharing
//!
//! Nodes and arrays live behind a reference counter. Cloning a container
//! is O(1), and prepending to a `LinkedList` reuses every existing node.
//!
//! # Examples
//!
//! ```rust
//! use functional_collections::persistent::{LinkedList, Seq};
//! use functional_collections::typeclass::IterableOnce;
//!
//! let list = LinkedList::from_vec(vec![1, 2, 3]);
//! let seq = Seq::from_vec(vec![1, 2, 3]);
//!
//! assert_eq!(list.to_vec(), seq.to_vec());
//! assert_eq!(
//!     list.map(|value| value * 2).to_vec(),
//!     seq.map(|value| value * 2).to_vec(),
//! );
//! ```

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

mod linked_list;
mod seq;

pub use linked_list::LinkedList;
pub use linked_list::LinkedListIntoIterator;
pub use linked_list::LinkedListIterator;
pub use seq::Seq;

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(LinkedList<i32>: Send, Sync);
#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(Seq<String>: Send, Sync);

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(LinkedList<i32>: Send, Sync);
#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(Seq<i32>: Send, Sync);

// =============================================================================
// Tests
// =============================================================================
