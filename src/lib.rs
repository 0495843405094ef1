//! # functional-collections
//!
//! Immutable functional collections sharing one query/transform contract.
//!
//! ## Overview
//!
//! - **Traits**: [`IterableOnce`](typeclass::IterableOnce) (map, filter,
//!   folds, indexed access) and [`List`](typeclass::List) (concat, append,
//!   prepend returning the receiver's own type)
//! - **Persistent sequences**: [`LinkedList`](persistent::LinkedList), a
//!   node chain, and [`Seq`](persistent::Seq), an array-backed sequence
//! - **Control**: [`Optional`](control::Optional), a zero-or-one container
//!
//! Containers are never mutated after construction; every transform returns
//! a new container.
//!
//! ## Feature Flags
//!
//! - `typeclass`: The `TypeConstructor`, `IterableOnce` and `List` traits
//! - `persistent`: `LinkedList` and `Seq`
//! - `control`: `Optional`
//! - `arc`: Share storage through `Arc` instead of `Rc`, making the
//!   persistent containers `Send + Sync`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use functional_collections::prelude::*;
//!
//! let list = LinkedList::from_vec(vec![1, 2, 3]);
//! let seq = Seq::from_vec(vec![1, 2, 3]);
//!
//! // Same observable results from two different representations
//! assert_eq!(list.reduce_left(0, |a, b| a * 2 + b), 11);
//! assert_eq!(seq.reduce_left(0, |a, b| a * 2 + b), 11);
//!
//! // Indexed access reports failures instead of panicking
//! assert!(list.at(3).is_err());
//! assert_eq!(Optional::some(7).at(0), Ok(&7));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the traits and every container type.
///
/// # Usage
///
/// ```rust
/// use functional_collections::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{CollectionError, EmptyOptionError, IndexOutOfBoundsError};

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "persistent")]
    pub use crate::persistent::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;
}

pub mod error;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "persistent")]
pub mod persistent;

#[cfg(feature = "control")]
pub mod control;
