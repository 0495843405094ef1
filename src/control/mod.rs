//! Control structures for functional programming.
//!
//! - [`Optional`]: A value that may be absent, usable wherever an
//!   [`IterableOnce`](crate::typeclass::IterableOnce) is expected
//!
//! # Examples
//!
//! ```rust
//! use functional_collections::control::Optional;
//! use functional_collections::typeclass::IterableOnce;
//!
//! let halved = Optional::some(10)
//!     .filter(|value| value % 2 == 0)
//!     .map(|value| value / 2);
//! assert_eq!(halved.get_or_none(), Some(&5));
//! ```

mod optional;

pub use optional::Optional;
