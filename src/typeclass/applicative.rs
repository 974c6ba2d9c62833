//! Applicative type class - applying functions within contexts.
//!
//! This module provides the `Applicative` trait, which extends `Functor` with
//! the ability to:
//!
//! - Lift pure values into the applicative context (`pure`)
//! - Apply functions held in one context to values held in another
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! pure(|x| x).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! ## Interchange Law
//!
//! ```text
//! u.apply(pure(y)) == pure(|f| f(y)).apply(u)
//! ```
//!
//! # Application order
//!
//! Application is written with the function container on the left, as
//! `functions.apply(arguments)`; the concrete containers expose this as an
//! inherent `apply` method. The contract itself carries the flipped form,
//! [`Applicative::apply_functions`], whose receiver is the *argument*
//! container. Generic code then always knows `Self` and only names the
//! function type once, instead of asking the compiler to recover it through
//! a `WithType<_>` projection.
//!
//! # Examples
//!
//! ```rust
//! use lawful::data::{Optional, Sequence};
//! use lawful::typeclass::Applicative;
//!
//! let lifted: Optional<i32> = <Optional<()>>::pure(42);
//! assert_eq!(lifted, Optional::present(42));
//!
//! let increment = Optional::present(|x: i32| x + 1);
//! assert_eq!(increment.apply(Optional::present(5)), Optional::present(6));
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//! fn add_ten(x: i32) -> i32 { x + 10 }
//!
//! let functions = Sequence::from(vec![add_one as fn(i32) -> i32, add_ten]);
//! let results = functions.apply(Sequence::from(vec![100, 200]));
//! assert_eq!(results, Sequence::from(vec![101, 201, 110, 210]));
//! ```

use super::functor::Functor;

/// A type class for types that support lifting values and applying
/// contained functions to contained values.
///
/// Application is usually written with the function container as receiver,
/// `functions.apply(arguments)`, and `Optional` and `Sequence` provide that
/// form as an inherent `apply`. The trait primitive takes the argument
/// container as receiver instead: `arguments.apply_functions(functions)` is
/// exactly `functions.apply(arguments)`. Each law below reads the same in
/// either form.
///
/// # Laws
///
/// ## Identity Law
///
/// ```text
/// v.apply_functions(pure(|x| x)) == v
/// ```
///
/// ## Homomorphism Law
///
/// ```text
/// pure(x).apply_functions(pure(f)) == pure(f(x))
/// ```
///
/// ## Interchange Law
///
/// ```text
/// pure(y).apply_functions(u) == u.apply_functions(pure(|f| f(y)))
/// ```
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::data::{Optional, Sequence};
    /// use lawful::typeclass::Applicative;
    ///
    /// let x: Optional<i32> = <Optional<()>>::pure(42);
    /// assert_eq!(x, Optional::present(42));
    ///
    /// let y: Sequence<&str> = <Sequence<()>>::pure("hello");
    /// assert_eq!(y, Sequence::from(vec!["hello"]));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Applies every function held in `functions` to the values held in `self`.
    ///
    /// This is application with the argument container as receiver:
    /// `arguments.apply_functions(functions)` is `functions.apply(arguments)`.
    /// Each value is handed to each function, so the values must be `Clone`.
    ///
    /// # Arguments
    ///
    /// * `functions` - The same container shape holding functions
    ///
    /// # Returns
    ///
    /// A container holding the results of the applications
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::data::Optional;
    /// use lawful::typeclass::Applicative;
    ///
    /// let doubled = Optional::present(21).apply_functions(Optional::present(|x: i32| x * 2));
    /// assert_eq!(doubled, Optional::present(42));
    ///
    /// let missing = Optional::<i32>::empty().apply_functions(Optional::present(|x: i32| x * 2));
    /// assert_eq!(missing, Optional::empty());
    /// ```
    fn apply_functions<B, F>(self, functions: Self::WithType<F>) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> B,
        Self::Inner: Clone;
}
