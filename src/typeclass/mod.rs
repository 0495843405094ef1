//! Traits shared by every container in the crate.
//!
//! - [`TypeConstructor`]: Higher-kinded type emulation (`Seq<A>` → `Seq<B>`)
//! - [`IterableOnce`]: Read-only queries and transforms over a finite sequence
//! - [`List`]: Growth operations (`concat`, `append`, `prepend`) returning `Self`
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! Generic Associated Types stand in for them, which is how `map` on any
//! container returns the same container applied to the new element type.
//!
//! # Examples
//!
//! ```rust
//! use functional_collections::control::Optional;
//! use functional_collections::persistent::Seq;
//! use functional_collections::typeclass::{IterableOnce, List};
//!
//! let seq = Seq::from_vec(vec![1, 2, 3]).map(|value| value * 10);
//! assert_eq!(seq.to_vec(), vec![10, 20, 30]);
//!
//! // Any IterableOnce can feed a List's growth operations.
//! let grown = seq.concat(&Optional::some(40));
//! assert_eq!(grown.to_vec(), vec![10, 20, 30, 40]);
//! ```

mod higher;
mod iterable_once;
mod list;

pub use higher::TypeConstructor;
pub use iterable_once::IterableOnce;
pub use list::List;
