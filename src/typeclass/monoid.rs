//! Monoid type class - semigroups with an identity element.
//!
//! A type `T` is a monoid if it has:
//!
//! 1. An associative binary operation `combine: (T, T) -> T` (from Semigroup)
//! 2. An identity element `identity: T` such that for all `a`:
//!    - `identity.combine(a) == a` (left identity)
//!    - `a.combine(identity) == a` (right identity)
//!
//! The identity is obtained from the type itself, never from a value, so a
//! fold over zero elements still has a well-defined result.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! T::identity().combine(a) == a
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! a.combine(T::identity()) == a
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lawful::data::Sequence;
//! use lawful::typeclass::{Monoid, Semigroup};
//!
//! let value = Sequence::from(vec![1, 2]);
//! assert_eq!(Sequence::identity().combine(value.clone()), value);
//! assert_eq!(value.clone().combine(Sequence::identity()), value);
//! ```

use super::semigroup::Semigroup;

/// A type class for semigroups with an identity element.
///
/// # Laws
///
/// For all `a`:
/// ```text
/// Self::identity().combine(a) == a
/// a.combine(Self::identity()) == a
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element for this monoid.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::data::Sequence;
    /// use lawful::typeclass::Monoid;
    ///
    /// assert!(Sequence::<i32>::identity().is_empty());
    /// ```
    fn identity() -> Self;

    /// Combines all elements in an iterator, starting from the identity element.
    ///
    /// Unlike [`Semigroup::reduce_all`], this always returns a value: the
    /// identity element for an empty iterator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::data::Sequence;
    /// use lawful::typeclass::Monoid;
    ///
    /// let parts = vec![Sequence::from(vec![1, 2]), Sequence::from(vec![3])];
    /// assert_eq!(Sequence::combine_all(parts), Sequence::from(vec![1, 2, 3]));
    ///
    /// let none: Vec<Sequence<i32>> = Vec::new();
    /// assert_eq!(Sequence::combine_all(none), Sequence::identity());
    /// ```
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::identity(), |accumulator, element| {
                accumulator.combine(element)
            })
    }

    /// Returns whether this value is the identity element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::data::Sequence;
    /// use lawful::typeclass::Monoid;
    ///
    /// assert!(Sequence::<i32>::new().is_identity());
    /// assert!(!Sequence::from(vec![1]).is_identity());
    /// ```
    fn is_identity(&self) -> bool
    where
        Self: PartialEq + Sized,
    {
        *self == Self::identity()
    }
}
