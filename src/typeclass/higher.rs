//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! The capability contracts in this crate abstract over container *shapes*
//! (`Optional<_>`, `Sequence<_>`) rather than concrete types. Rust has no
//! native higher-kinded types, so the shape is recovered from a concrete
//! instantiation through a Generic Associated Type.
//!
//! # Example
//!
//! ```rust
//! use lawful::data::Optional;
//! use lawful::typeclass::TypeConstructor;
//!
//! fn reshape<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let present: Optional<i32> = Optional::present(42);
//! let reshaped: Optional<String> = reshape(present);
//! assert_eq!(reshaped, Optional::empty());
//! ```

/// A trait representing a type constructor.
///
/// The implementing type is a type constructor applied to some type `A`,
/// for example `Optional<A>` or `Sequence<A>`.
///
/// # Associated Types
///
/// - `Inner`: The type parameter that this type constructor is currently applied to.
/// - `WithType<B>`: The same type constructor applied to a different type `B`.
///
/// # Laws
///
/// For any `F: TypeConstructor`:
///
/// 1. **Consistency**: `<F as TypeConstructor>::WithType<F::Inner>` should be
///    equivalent to `F` (up to type equality).
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For example, for `Optional<i32>`, this would be `i32`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    ///
    /// The constraint `TypeConstructor<Inner = B>` keeps the result a valid
    /// type constructor so transformations can be chained.
    type WithType<B>: TypeConstructor<Inner = B>;
}
