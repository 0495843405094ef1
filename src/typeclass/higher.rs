//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Seq<_>` directly.
//! [`TypeConstructor`] works around this with a generic associated type, so
//! that `map` on a `Seq<i32>` can promise a `Seq<String>` and `map` on a
//! `LinkedList<i32>` a `LinkedList<String>`, never the other.
//!
//! # Example
//!
//! ```rust
//! use functional_collections::persistent::Seq;
//! use functional_collections::typeclass::TypeConstructor;
//!
//! fn rebuild<C: TypeConstructor>(_: &C) -> C::WithType<String>
//! where
//!     C::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let numbers = Seq::from_vec(vec![1, 2, 3]);
//! let strings: Seq<String> = rebuild(&numbers);
//! assert!(strings.as_slice().is_empty());
//! ```

/// A trait representing a type constructor.
///
/// # Associated Types
///
/// - `Inner`: The element type the constructor is currently applied to.
/// - `WithType<B>`: The same constructor applied to `B`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F` itself.
pub trait TypeConstructor {
    /// The element type, e.g. `i32` for `Seq<i32>`.
    type Inner;

    /// The same constructor applied to a different element type.
    type WithType<B>: TypeConstructor<Inner = B>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    struct Cell<A>(A);

    impl<A> TypeConstructor for Cell<A> {
        type Inner = A;
        type WithType<B> = Cell<B>;
    }

    fn assert_inner<T: TypeConstructor<Inner = i32>>() {}

    #[rstest]
    fn test_inner_type_is_the_applied_parameter() {
        assert_inner::<Cell<i32>>();
    }

    #[rstest]
    fn test_with_type_keeps_the_constructor() {
        fn rewrap<T: TypeConstructor>(value: T::Inner) -> Cell<T::Inner> {
            Cell(value)
        }
        let cell: <Cell<i32> as TypeConstructor>::WithType<&str> = Cell("text");
        assert_eq!(cell.0, "text");
        assert_eq!(rewrap::<Cell<i32>>(5).0, 5);
    }
}
